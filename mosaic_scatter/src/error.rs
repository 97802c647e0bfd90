// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for plots and scatterers.

use thiserror::Error;

/// Errors raised by [`Plot`](crate::Plot) operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PlotError {
    /// A point to insert or query lies outside the plot.
    #[error("point ({x}, {y}) lies outside the {width}x{height} plot")]
    OutOfBounds {
        /// Column of the offending point.
        x: i32,
        /// Row of the offending point.
        y: i32,
        /// Plot width.
        width: u32,
        /// Plot height.
        height: u32,
    },
}

/// Errors raised while generating a distribution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ScatterError {
    /// Insertion into the plot failed.
    #[error(transparent)]
    Plot(#[from] PlotError),
    /// The plot has no room for points under the edge margin.
    #[error("a {width}x{height} plot is too small to scatter points into")]
    PlotTooSmall {
        /// Plot width.
        width: u32,
        /// Plot height.
        height: u32,
    },
    /// Poisson-disc spacing must be positive.
    #[error("minimum spacing must be positive")]
    InvalidSpacing,
    /// Generation was stopped through its [`CancelToken`](crate::CancelToken).
    #[error("generation cancelled")]
    Cancelled,
}

/// Result alias for scatter operations.
pub type Result<T> = core::result::Result<T, ScatterError>;
