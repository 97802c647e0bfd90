// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region capabilities used by the quadtree, and the axis-aligned [`Bounds`] that implements them.

use kurbo::{Point, Rect, Size};

use crate::types::{PixelPoint, Quadrants};

/// A 2D domain that can back a [`QuadTree`](crate::QuadTree).
///
/// Any type that can test membership of an element, test overlap with another
/// region of the same type, and split itself into four tiles can be indexed.
/// Overlap is only defined between regions of the same type, so mixing region
/// kinds is rejected at compile time.
pub trait Region<E>: Sized {
    /// Whether `element` lies inside this region.
    fn contains(&self, element: &E) -> bool;

    /// Whether this region and `other` overlap.
    fn intersects(&self, other: &Self) -> bool;

    /// Split into four sub-regions that tile `self` with no gap or overlap.
    fn subdivide(&self) -> Quadrants<Self>;
}

/// A [`Region`] that also supports nearest-neighbor search.
pub trait SearchRegion<E>: Region<E> {
    /// Distance between two elements, in the same units as the region.
    fn distance(a: &E, b: &E) -> f64;

    /// Reshape this region in place into the square of half-side `radius` centered on `center`.
    fn center_on(&mut self, center: &E, radius: f64);
}

/// Axis-aligned rectangle covering `[x, x + width) × [y, y + height)`.
///
/// Equality is structural: same base corner and same extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    base: Point,
    size: Size,
}

impl Bounds {
    /// Create bounds from a top-left corner and non-negative dimensions.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "bounds must have non-negative dimensions"
        );
        Self {
            base: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Bounds anchored at the origin covering a `width × height` plot.
    pub fn of_plot(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, f64::from(width), f64::from(height))
    }

    /// The square of half-side `radius` centered on `center`.
    pub fn square_around(center: PixelPoint, radius: f64) -> Self {
        let c = center.to_point();
        Self::new(c.x - radius, c.y - radius, 2.0 * radius, 2.0 * radius)
    }

    /// Top-left corner.
    pub fn base(&self) -> Point {
        self.base
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Replace base and extent in place.
    ///
    /// Lets one instance serve as a moving search window.
    pub fn resize(&mut self, x: f64, y: f64, width: f64, height: f64) {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "bounds must have non-negative dimensions"
        );
        self.base = Point::new(x, y);
        self.size = Size::new(width, height);
    }

    /// Half-open membership test for a pixel point.
    pub fn contains_point(&self, p: PixelPoint) -> bool {
        let p = p.to_point();
        p.x >= self.base.x
            && p.x < self.base.x + self.size.width
            && p.y >= self.base.y
            && p.y < self.base.y + self.size.height
    }

    /// Whether the two half-open rectangles overlap on both axes.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.base.x + self.size.width > other.base.x
            && other.base.x + other.size.width > self.base.x
            && self.base.y + self.size.height > other.base.y
            && other.base.y + other.size.height > self.base.y
    }

    /// The equivalent Kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.base, self.size)
    }

    /// Area covered.
    pub fn area(&self) -> f64 {
        self.size.area()
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self {
            base: rect.origin(),
            size: rect.size(),
        }
    }
}

impl Region<PixelPoint> for Bounds {
    fn contains(&self, element: &PixelPoint) -> bool {
        self.contains_point(*element)
    }

    fn intersects(&self, other: &Self) -> bool {
        self.overlaps(other)
    }

    fn subdivide(&self) -> Quadrants<Self> {
        let w = self.size.width / 2.0;
        let h = self.size.height / 2.0;
        let Point { x, y } = self.base;
        Quadrants::new(
            Self::new(x, y, w, h),
            Self::new(x + w, y, w, h),
            Self::new(x, y + h, w, h),
            Self::new(x + w, y + h, w, h),
        )
    }
}

impl SearchRegion<PixelPoint> for Bounds {
    fn distance(a: &PixelPoint, b: &PixelPoint) -> f64 {
        a.distance(*b)
    }

    fn center_on(&mut self, center: &PixelPoint, radius: f64) {
        let c = center.to_point();
        self.resize(c.x - radius, c.y - radius, 2.0 * radius, 2.0 * radius);
    }
}
