// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Scatter: point distributions over a bounded plot.
//!
//! A [`Plot`] pairs a flat list of points with a [`mosaic_index::QuadTree`] so that
//! generation and rendering can both ask for the nearest placed point cheaply.
//! Two [`Scatter`] strategies fill it:
//!
//! - [`RandomScatter`] draws a fixed number of independent uniform points.
//! - [`PoissonScatter`] grows a blue-noise set in which no two points are closer
//!   than a minimum spacing.
//!
//! [`density`] maps a user-facing density level to the parameters of either one, and
//! [`Distribution::for_density`] picks the strategy.
//!
//! ```rust
//! use mosaic_scatter::{CancelToken, Distribution, DistributionMode, Plot, Scatter};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut plot = Plot::new(200, 150);
//! let strategy = Distribution::for_density(DistributionMode::Uniform, 4, 200, 150);
//! let mut rng = StdRng::seed_from_u64(1);
//! let placed = strategy.scatter(&mut plot, &mut rng, &CancelToken::new()).unwrap();
//! assert_eq!(placed, plot.len());
//!
//! let found = plot.nearest((100, 75).into()).unwrap().unwrap();
//! assert!(plot.points().contains(&found.element));
//! ```

mod cancel;
pub mod density;
mod error;
mod plot;
pub mod poisson;
pub mod random;
mod scatter;

pub use cancel::CancelToken;
pub use density::{DistributionMode, UnknownMode};
pub use error::{PlotError, Result, ScatterError};
pub use plot::Plot;
pub use poisson::PoissonScatter;
pub use random::RandomScatter;
pub use scatter::{Distribution, Scatter};

pub use mosaic_index::{Bounds, Nearest, PixelPoint};
