// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The point-generation contract and the strategy picker.

use rand::Rng;

use crate::cancel::CancelToken;
use crate::density::{self, DistributionMode};
use crate::error::Result;
use crate::plot::Plot;
use crate::poisson::PoissonScatter;
use crate::random::RandomScatter;

/// A strategy that fills a [`Plot`] with points.
pub trait Scatter {
    /// Insert this strategy's points into `plot`, returning how many were placed.
    ///
    /// Stops with [`ScatterError::Cancelled`](crate::ScatterError::Cancelled) once
    /// `cancel` fires; points placed before that stay in the plot.
    fn scatter<R: Rng + ?Sized>(
        &self,
        plot: &mut Plot,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> Result<usize>;
}

/// One of the built-in strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// Independent uniform draws.
    Random(RandomScatter),
    /// Poisson-disc blue noise.
    Poisson(PoissonScatter),
}

impl Distribution {
    /// Pick and parameterize a strategy from a density level and image size.
    pub fn for_density(mode: DistributionMode, level: u32, width: u32, height: u32) -> Self {
        match mode {
            DistributionMode::Random => {
                Self::Random(RandomScatter::new(density::point_count(level, width, height)))
            }
            DistributionMode::Uniform => {
                Self::Poisson(PoissonScatter::new(density::min_distance(level)))
            }
        }
    }

    /// The mode this strategy implements.
    pub fn mode(&self) -> DistributionMode {
        match self {
            Self::Random(_) => DistributionMode::Random,
            Self::Poisson(_) => DistributionMode::Uniform,
        }
    }
}

impl Scatter for Distribution {
    fn scatter<R: Rng + ?Sized>(
        &self,
        plot: &mut Plot,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> Result<usize> {
        match self {
            Self::Random(s) => s.scatter(plot, rng, cancel),
            Self::Poisson(s) => s.scatter(plot, rng, cancel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_selects_strategy() {
        assert_eq!(
            Distribution::for_density(DistributionMode::Random, 3, 100, 130),
            Distribution::Random(RandomScatter::new(10))
        );
        assert_eq!(
            Distribution::for_density(DistributionMode::Uniform, 5, 100, 130),
            Distribution::Poisson(PoissonScatter::new(10))
        );
        assert_eq!(
            Distribution::for_density(DistributionMode::Random, 3, 10, 10),
            Distribution::Random(RandomScatter::new(0))
        );
    }
}
