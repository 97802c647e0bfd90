// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel surfaces the renderer can read from and write to.

use image::{ImageBuffer, Pixel};

use crate::error::RenderError;

/// An integer pixel rectangle, origin top-left, `y` growing downward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left column.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// A rectangle with its top-left corner at `(x, y)`.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole of a `width × height` surface.
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A rectangular grid of pixels addressable by `(x, y)`.
///
/// Block reads and writes are row-major. The default block methods go through
/// [`pixel`](Self::pixel) and [`set_pixel`](Self::set_pixel); implementors with
/// contiguous storage can override them.
pub trait Surface {
    /// Pixel value type.
    type Pixel: Copy;

    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// May panic when `(x, y)` is outside the surface.
    fn pixel(&self, x: u32, y: u32) -> Self::Pixel;

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// May panic when `(x, y)` is outside the surface.
    fn set_pixel(&mut self, x: u32, y: u32, pixel: Self::Pixel);

    /// Copy out every pixel of `rect`, row by row.
    fn read_block(&self, rect: PixelRect) -> Vec<Self::Pixel> {
        let mut out = Vec::with_capacity(rect.area());
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                out.push(self.pixel(x, y));
            }
        }
        out
    }

    /// Write `pixels` into `rect`, row by row.
    fn write_block(&mut self, rect: PixelRect, pixels: &[Self::Pixel]) -> Result<(), RenderError> {
        if pixels.len() != rect.area() {
            return Err(RenderError::BlockSize {
                expected: rect.area(),
                actual: pixels.len(),
            });
        }
        let mut src = pixels.iter();
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                if let Some(&px) = src.next() {
                    self.set_pixel(x, y, px);
                }
            }
        }
        Ok(())
    }
}

impl<P: Pixel> Surface for ImageBuffer<P, Vec<P::Subpixel>> {
    type Pixel = P;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel(&self, x: u32, y: u32) -> P {
        *self.get_pixel(x, y)
    }

    fn set_pixel(&mut self, x: u32, y: u32, pixel: P) {
        self.put_pixel(x, y, pixel);
    }

    fn read_block(&self, rect: PixelRect) -> Vec<P> {
        if rect == PixelRect::full(self.width(), self.height()) {
            return self.pixels().copied().collect();
        }
        let mut out = Vec::with_capacity(rect.area());
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                out.push(*self.get_pixel(x, y));
            }
        }
        out
    }
}
