// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bounded plane of points, indexed for nearest-neighbor lookups.

use mosaic_index::{Bounds, DEFAULT_BUCKET_SIZE, Nearest, PixelPoint, QuadTree};

use crate::error::PlotError;

/// Points scattered over a `width × height` plane.
///
/// Every point lives both in a quadtree, for nearest-neighbor queries, and in a flat
/// list kept in insertion order.
#[derive(Clone, Debug)]
pub struct Plot {
    index: QuadTree<Bounds, PixelPoint>,
    points: Vec<PixelPoint>,
    width: u32,
    height: u32,
}

impl Plot {
    /// An empty plot with the default bucket size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_bucket_size(width, height, DEFAULT_BUCKET_SIZE)
    }

    /// An empty plot whose quadtree leaves split past `bucket_size` points.
    pub fn with_bucket_size(width: u32, height: u32, bucket_size: usize) -> Self {
        Self {
            index: QuadTree::new(Bounds::of_plot(width, height), bucket_size),
            points: Vec::new(),
            width,
            height,
        }
    }

    /// Plot width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plot height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full extent of the plot.
    pub fn bounds(&self) -> Bounds {
        Bounds::of_plot(self.width, self.height)
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no point has been inserted.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The underlying quadtree.
    pub fn index(&self) -> &QuadTree<Bounds, PixelPoint> {
        &self.index
    }

    /// Add a point. Points outside the plot are rejected before anything changes.
    pub fn insert(&mut self, point: PixelPoint) -> Result<(), PlotError> {
        self.index
            .insert(point)
            .map_err(|_| self.out_of_bounds(point))?;
        self.points.push(point);
        Ok(())
    }

    /// Closest point to `target`, searching the whole plot.
    ///
    /// Returns `Ok(None)` when the plot is empty.
    pub fn nearest(&self, target: PixelPoint) -> Result<Option<Nearest<PixelPoint>>, PlotError> {
        let mut zone = self.bounds();
        self.nearest_within(target, &mut zone)
    }

    /// Closest point to `target`, pruning the search to `zone`.
    ///
    /// `zone` is a hint: it shrinks in place as closer points are found, and a zone
    /// that starts too small may miss the true nearest point. The first stored point
    /// seeds the search. Returns `Ok(None)` when the plot is empty.
    pub fn nearest_within(
        &self,
        target: PixelPoint,
        zone: &mut Bounds,
    ) -> Result<Option<Nearest<PixelPoint>>, PlotError> {
        if !self.index.covers(&target) {
            return Err(self.out_of_bounds(target));
        }
        let Some(&seed) = self.points.first() else {
            return Ok(None);
        };
        Ok(Some(self.index.nearest(&target, seed, zone)))
    }

    /// Width and height as signed pixel coordinates, saturating at `i32::MAX`.
    pub(crate) fn extent(&self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    fn out_of_bounds(&self, point: PixelPoint) -> PlotError {
        PlotError::OutOfBounds {
            x: point.x,
            y: point.y,
            width: self.width,
            height: self.height,
        }
    }
}
