// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from a user-facing density level to generation parameters.
//!
//! A density level picks a *fractional area*: the share of the image each sample
//! point should own. Random mode divides the image area by it to get a point count;
//! blue-noise mode takes its square root as the minimum spacing between points.

use core::fmt;
use core::str::FromStr;

/// Fractional area used for levels outside `1..=5`.
pub const DEFAULT_FRACTIONAL_AREA: f64 = 1300.0;

/// Fractional area at level 1, the sparsest level.
pub const SPARSEST_FRACTIONAL_AREA: f64 = 2500.0;

/// Change in fractional area between adjacent levels.
pub const FRACTIONAL_AREA_STEP: f64 = 600.0;

/// How sample points are generated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistributionMode {
    /// Independent uniform draws; points may clump or coincide.
    Random,
    /// Poisson-disc blue noise with a guaranteed minimum spacing.
    #[default]
    Uniform,
}

impl DistributionMode {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Uniform => "uniform",
        }
    }
}

impl fmt::Display for DistributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`DistributionMode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown distribution mode `{0}` (expected `random` or `uniform`)")]
pub struct UnknownMode(pub String);

impl FromStr for DistributionMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "uniform" | "poisson" | "blue-noise" => Ok(Self::Uniform),
            _ => Err(UnknownMode(s.to_owned())),
        }
    }
}

/// Fractional area for a density level.
pub fn fractional_area(level: u32) -> f64 {
    if (1..=5).contains(&level) {
        SPARSEST_FRACTIONAL_AREA - FRACTIONAL_AREA_STEP * f64::from(level - 1)
    } else {
        DEFAULT_FRACTIONAL_AREA
    }
}

/// Number of random points for a `width × height` image at `level`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "the quotient is floored and bounded by the pixel count"
)]
pub fn point_count(level: u32, width: u32, height: u32) -> usize {
    let area = f64::from(width) * f64::from(height);
    (area / fractional_area(level)).floor() as usize
}

/// Poisson-disc minimum spacing at `level`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "the square root of the largest fractional area is 50"
)]
pub fn min_distance(level: u32) -> u32 {
    fractional_area(level).sqrt().floor() as u32
}
