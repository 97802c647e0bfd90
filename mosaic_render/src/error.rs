// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while rendering.

use mosaic_scatter::{PlotError, ScatterError};
use thiserror::Error;

/// Errors raised by rendering passes and the [`render`](crate::render) pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Generating the distribution failed.
    #[error("failed to generate the point distribution")]
    Scatter(#[from] ScatterError),
    /// A nearest-neighbor query against the plot failed.
    #[error(transparent)]
    Plot(#[from] PlotError),
    /// The surface and the plot disagree on size.
    #[error("surface is {surface_width}x{surface_height} but the plot is {plot_width}x{plot_height}")]
    DimensionMismatch {
        /// Surface width.
        surface_width: u32,
        /// Surface height.
        surface_height: u32,
        /// Plot width.
        plot_width: u32,
        /// Plot height.
        plot_height: u32,
    },
    /// A block write supplied the wrong number of pixels.
    #[error("block needs {expected} pixels, got {actual}")]
    BlockSize {
        /// Pixels covered by the block.
        expected: usize,
        /// Pixels supplied.
        actual: usize,
    },
    /// Quadtree buckets must hold at least one point.
    #[error("bucket size must be positive")]
    ZeroBucketSize,
    /// The pass was stopped through its [`CancelToken`](mosaic_scatter::CancelToken).
    #[error("render cancelled")]
    Cancelled,
}
