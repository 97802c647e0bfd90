// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Poisson-disc (blue-noise) scattering by dart throwing around an active frontier.
//!
//! Generation starts from one random point. Each round picks a random point from
//! the active list and draws candidates from the box reaching `2 × min_distance`
//! around it. Only candidates whose distance from that seed falls in
//! `[min_distance, 2 × min_distance]` count as attempts. An attempt is accepted
//! when no placed point is closer than `min_distance`; the accepted point joins the
//! active list. A seed that exhausts its attempts leaves the list for good, so the
//! loop ends once every seed is retired.

use mosaic_index::{Bounds, PixelPoint};
use rand::Rng;

use crate::cancel::CancelToken;
use crate::error::{Result, ScatterError};
use crate::plot::Plot;
use crate::scatter::Scatter;

/// Attempts per seed before the seed is retired.
pub const MAX_CANDIDATES: u32 = 100;

/// Margin kept between candidate boxes and the far plot edges.
pub const EDGE_BUFFER: i32 = 1;

/// Blue-noise scatterer with a guaranteed minimum spacing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PoissonScatter {
    /// No two points end up closer than this.
    pub min_distance: u32,
    /// Attempts per seed before it is retired.
    pub max_candidates: u32,
}

impl PoissonScatter {
    /// Scatter with the given spacing and the default attempt budget.
    pub const fn new(min_distance: u32) -> Self {
        Self {
            min_distance,
            max_candidates: MAX_CANDIDATES,
        }
    }
}

/// Inclusive candidate box around a seed, clipped to the plot.
#[derive(Copy, Clone, Debug)]
struct CandidateBox {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl CandidateBox {
    fn around(seed: PixelPoint, reach: i32, width: i32, height: i32) -> Self {
        let mut max_x = seed.x.saturating_add(reach);
        if max_x >= width {
            max_x = width - EDGE_BUFFER;
        }
        let mut max_y = seed.y.saturating_add(reach);
        if max_y >= height {
            max_y = height - EDGE_BUFFER;
        }
        Self {
            min_x: seed.x.saturating_sub(reach).max(0),
            min_y: seed.y.saturating_sub(reach).max(0),
            max_x,
            max_y,
        }
    }

    /// Distance from `seed` to the box corner farthest from it.
    ///
    /// When this is below the spacing, no draw can land in the annulus.
    fn farthest_corner(&self, seed: PixelPoint) -> f64 {
        let dx = (seed.x - self.min_x).max(self.max_x - seed.x);
        let dy = (seed.y - self.min_y).max(self.max_y - seed.y);
        PixelPoint::new(0, 0).distance(PixelPoint::new(dx, dy))
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> PixelPoint {
        PixelPoint::new(
            rng.random_range(self.min_x..=self.max_x),
            rng.random_range(self.min_y..=self.max_y),
        )
    }
}

impl PoissonScatter {
    /// Try candidates around `seed` until one fits or the budget runs out.
    fn find_candidate<R: Rng + ?Sized>(
        &self,
        plot: &Plot,
        rng: &mut R,
        seed: PixelPoint,
        area: CandidateBox,
        zone: &mut Bounds,
    ) -> Result<Option<PixelPoint>> {
        let spacing = f64::from(self.min_distance);
        if area.farthest_corner(seed) < spacing {
            return Ok(None);
        }
        let mut tried = 0;
        while tried < self.max_candidates {
            let candidate = area.draw(rng);
            let d = seed.distance(candidate);
            if d < spacing || d > 2.0 * spacing {
                continue;
            }
            zone.resize(
                f64::from(candidate.x) - spacing,
                f64::from(candidate.y) - spacing,
                2.0 * spacing,
                2.0 * spacing,
            );
            let clearance = plot
                .nearest_within(candidate, zone)?
                .map_or(f64::INFINITY, |n| n.distance);
            if clearance >= spacing {
                return Ok(Some(candidate));
            }
            tried += 1;
        }
        Ok(None)
    }
}

impl Scatter for PoissonScatter {
    fn scatter<R: Rng + ?Sized>(
        &self,
        plot: &mut Plot,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> Result<usize> {
        let _span = tracing::debug_span!(
            "poisson_scatter",
            min_distance = self.min_distance,
            width = plot.width(),
            height = plot.height(),
        )
        .entered();

        if self.min_distance == 0 {
            return Err(ScatterError::InvalidSpacing);
        }
        if plot.width() == 0 || plot.height() == 0 {
            return Err(ScatterError::PlotTooSmall {
                width: plot.width(),
                height: plot.height(),
            });
        }
        let (width, height) = plot.extent();
        let reach = i32::try_from(self.min_distance)
            .unwrap_or(i32::MAX)
            .saturating_mul(2);

        let first = PixelPoint::new(rng.random_range(0..width), rng.random_range(0..height));
        plot.insert(first)?;
        let mut active = vec![first];
        let mut placed = 1_usize;
        let mut retired = 0_usize;
        let mut zone = plot.bounds();

        while !active.is_empty() {
            if cancel.is_cancelled() {
                tracing::debug!(placed, retired, "poisson scatter cancelled");
                return Err(ScatterError::Cancelled);
            }
            let slot = rng.random_range(0..active.len());
            let seed = active[slot];
            let area = CandidateBox::around(seed, reach, width, height);

            match self.find_candidate(plot, rng, seed, area, &mut zone)? {
                Some(candidate) => {
                    plot.insert(candidate)?;
                    active.push(candidate);
                    placed += 1;
                }
                None => {
                    active.swap_remove(slot);
                    retired += 1;
                    tracing::trace!(x = seed.x, y = seed.y, active = active.len(), "seed retired");
                }
            }
        }

        tracing::debug!(placed, retired, "poisson scatter complete");
        Ok(placed)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn no_pair_closer_than_spacing(
            width in 1_u32..80,
            height in 1_u32..80,
            min_distance in 2_u32..16,
            seed in any::<u64>(),
        ) {
            let mut plot = Plot::new(width, height);
            let mut rng = StdRng::seed_from_u64(seed);
            PoissonScatter::new(min_distance)
                .scatter(&mut plot, &mut rng, &CancelToken::new())
                .unwrap();
            let spacing = f64::from(min_distance);
            let pts = plot.points();
            for (i, a) in pts.iter().enumerate() {
                for b in &pts[i + 1..] {
                    prop_assert!(a.distance(*b) >= spacing, "{a:?} and {b:?} too close");
                }
            }
        }
    }
}
