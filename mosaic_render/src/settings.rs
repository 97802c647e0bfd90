// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run configuration for the [`render`](crate::render) pipeline.

use image::Rgba;
use mosaic_index::DEFAULT_BUCKET_SIZE;
use mosaic_scatter::DistributionMode;

/// Density level used when none is given.
pub const DEFAULT_DENSITY: u32 = 3;

/// Color painted by points-only runs.
pub const DEFAULT_POINT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Everything one rendering run needs to know.
///
/// Built once by the caller and passed by reference; nothing is read from global
/// state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicSettings {
    /// Density level. Levels `1..=5` go from sparse to dense; any other value
    /// falls back to the default spacing.
    pub density: u32,
    /// Point generation strategy.
    pub mode: DistributionMode,
    /// Paint the sample points instead of applying the mosaic.
    pub points_only: bool,
    /// Color for points-only runs.
    pub point_color: Rgba<u8>,
    /// Quadtree leaf capacity.
    pub bucket_size: usize,
    /// Seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MosaicSettings {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            mode: DistributionMode::default(),
            points_only: false,
            point_color: DEFAULT_POINT_COLOR,
            bucket_size: DEFAULT_BUCKET_SIZE,
            seed: None,
        }
    }
}

impl MosaicSettings {
    /// Set the density level.
    #[must_use]
    pub fn with_density(mut self, density: u32) -> Self {
        self.density = density;
        self
    }

    /// Set the distribution mode.
    #[must_use]
    pub fn with_mode(mut self, mode: DistributionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Paint points only, in `color`.
    #[must_use]
    pub fn points_only(mut self, color: Rgba<u8>) -> Self {
        self.points_only = true;
        self.point_color = color;
        self
    }

    /// Fix the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
