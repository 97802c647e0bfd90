// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two rendering passes: plotting the sample points, and the mosaic sweep.
//!
//! The mosaic sweep visits pixels in raster order and recolors each one with the
//! color of its nearest sample point. Consecutive pixels usually share a nearest
//! point, so the previous answer bounds the next search: the zone handed to the
//! plot is the square around the current pixel whose half-width is its distance to
//! the previous nearest point. The pixel that *is* the previous nearest point
//! already has the right color and is skipped.
//!
//! Colors are read from a snapshot taken before the sweep, so recolored pixels never
//! feed into later lookups. The result is committed in one block write.

use mosaic_index::{Bounds, PixelPoint};
use mosaic_scatter::{CancelToken, Plot};

use crate::error::RenderError;
use crate::surface::{PixelRect, Surface};

/// Counters from one [`apply_mosaic`] pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MosaicStats {
    /// Pixels that needed a nearest-neighbor query.
    pub queries: u64,
    /// Pixels skipped because they were the previous nearest point.
    pub reused: u64,
}

impl MosaicStats {
    /// Pixels visited.
    pub fn pixels(&self) -> u64 {
        self.queries + self.reused
    }
}

fn check_dimensions<S: Surface>(surface: &S, plot: &Plot) -> Result<(u32, u32), RenderError> {
    let (width, height) = surface.dimensions();
    if (width, height) != (plot.width(), plot.height()) {
        return Err(RenderError::DimensionMismatch {
            surface_width: width,
            surface_height: height,
            plot_width: plot.width(),
            plot_height: plot.height(),
        });
    }
    Ok((width, height))
}

// Plot points always have non-negative coordinates.
fn offset(point: PixelPoint, width: u32) -> usize {
    point.y.unsigned_abs() as usize * width as usize + point.x.unsigned_abs() as usize
}

/// Paint every sample point of `plot` with `color`, leaving other pixels alone.
///
/// Returns the number of points painted. Running it again with the same plot and
/// color yields the same surface.
pub fn draw_points<S: Surface>(
    surface: &mut S,
    plot: &Plot,
    color: S::Pixel,
) -> Result<usize, RenderError> {
    check_dimensions(surface, plot)?;
    for point in plot.points() {
        surface.set_pixel(point.x.unsigned_abs(), point.y.unsigned_abs(), color);
    }
    tracing::debug!(points = plot.len(), "drew sample points");
    Ok(plot.len())
}

/// Recolor every pixel of `surface` with the color of its nearest sample point.
///
/// An empty plot leaves the surface untouched. `cancel` is polled once per row; a
/// cancelled pass leaves the surface untouched too.
pub fn apply_mosaic<S: Surface>(
    surface: &mut S,
    plot: &Plot,
    cancel: &CancelToken,
) -> Result<MosaicStats, RenderError> {
    let (width, height) = check_dimensions(surface, plot)?;
    let _span = tracing::debug_span!("apply_mosaic", width, height, points = plot.len()).entered();

    let mut stats = MosaicStats::default();
    if plot.is_empty() || width == 0 || height == 0 {
        tracing::debug!("nothing to sample, surface left as is");
        return Ok(stats);
    }

    let frame = PixelRect::full(width, height);
    let source = surface.read_block(frame);
    let mut output = source.clone();
    let mut zone = plot.bounds();
    let mut previous: Option<PixelPoint> = None;

    for (y, row) in (0..height).zip(output.chunks_exact_mut(width as usize)) {
        if cancel.is_cancelled() {
            tracing::debug!(row = y, "mosaic cancelled");
            return Err(RenderError::Cancelled);
        }
        for (x, out) in (0..width).zip(row.iter_mut()) {
            #[allow(
                clippy::cast_possible_wrap,
                reason = "plot extents are far below i32::MAX"
            )]
            let here = PixelPoint::new(x as i32, y as i32);
            if previous == Some(here) {
                stats.reused += 1;
                continue;
            }
            if let Some(prev) = previous {
                zone = Bounds::square_around(here, prev.distance(here));
            }
            stats.queries += 1;
            if let Some(found) = plot.nearest_within(here, &mut zone)? {
                *out = source[offset(found.element, width)];
                previous = Some(found.element);
            }
        }
    }

    surface.write_block(frame, &output)?;
    tracing::debug!(queries = stats.queries, reused = stats.reused, "mosaic applied");
    Ok(stats)
}
