// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform-random scattering.

use mosaic_index::PixelPoint;
use rand::Rng;

use crate::cancel::CancelToken;
use crate::error::{Result, ScatterError};
use crate::plot::Plot;
use crate::scatter::Scatter;

/// Margin kept free of points along every plot edge.
pub const EDGE_BUFFER: i32 = 1;

/// Places a fixed number of independent, uniformly random points.
///
/// Coordinates are drawn from `[1, width - 1) × [1, height - 1)`. Nothing keeps
/// points apart, so two draws may land on the same pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomScatter {
    /// Number of points to place.
    pub count: usize,
}

impl RandomScatter {
    /// Scatter exactly `count` points.
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Scatter for RandomScatter {
    fn scatter<R: Rng + ?Sized>(
        &self,
        plot: &mut Plot,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> Result<usize> {
        let _span = tracing::debug_span!(
            "random_scatter",
            count = self.count,
            width = plot.width(),
            height = plot.height(),
        )
        .entered();

        if self.count == 0 {
            tracing::debug!("nothing to scatter");
            return Ok(0);
        }
        let (width, height) = plot.extent();
        let (max_x, max_y) = (width - EDGE_BUFFER, height - EDGE_BUFFER);
        if max_x <= EDGE_BUFFER || max_y <= EDGE_BUFFER {
            return Err(ScatterError::PlotTooSmall {
                width: plot.width(),
                height: plot.height(),
            });
        }

        for _ in 0..self.count {
            if cancel.is_cancelled() {
                return Err(ScatterError::Cancelled);
            }
            let x = rng.random_range(EDGE_BUFFER..max_x);
            let y = rng.random_range(EDGE_BUFFER..max_y);
            plot.insert(PixelPoint::new(x, y))?;
        }
        tracing::debug!(placed = self.count, "random scatter complete");
        Ok(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn places_exact_count_inside_margin() {
        let mut plot = Plot::new(40, 25);
        let mut rng = StdRng::seed_from_u64(7);
        let placed = RandomScatter::new(500)
            .scatter(&mut plot, &mut rng, &CancelToken::new())
            .unwrap();
        assert_eq!(placed, 500);
        assert_eq!(plot.len(), 500);
        assert_eq!(plot.index().len(), 500);
        for p in plot.points() {
            assert!((1..39).contains(&p.x), "x out of range: {p:?}");
            assert!((1..24).contains(&p.y), "y out of range: {p:?}");
        }
    }

    #[test]
    fn zero_points_on_tiny_plot() {
        let mut plot = Plot::new(2, 2);
        let mut rng = StdRng::seed_from_u64(1);
        let placed = RandomScatter::new(0)
            .scatter(&mut plot, &mut rng, &CancelToken::new())
            .unwrap();
        assert_eq!(placed, 0);
        assert!(plot.is_empty());
    }

    #[test]
    fn plot_without_interior_is_rejected() {
        let mut plot = Plot::new(2, 50);
        let mut rng = StdRng::seed_from_u64(1);
        let err = RandomScatter::new(3)
            .scatter(&mut plot, &mut rng, &CancelToken::new())
            .unwrap_err();
        assert_eq!(
            err,
            ScatterError::PlotTooSmall {
                width: 2,
                height: 50
            }
        );
    }

    #[test]
    fn cancelled_before_start() {
        let mut plot = Plot::new(40, 40);
        let mut rng = StdRng::seed_from_u64(3);
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = RandomScatter::new(10)
            .scatter(&mut plot, &mut rng, &cancel)
            .unwrap_err();
        assert_eq!(err, ScatterError::Cancelled);
        assert!(plot.is_empty());
    }

    #[test]
    fn seeded_runs_repeat() {
        let run = |seed| {
            let mut plot = Plot::new(64, 64);
            let mut rng = StdRng::seed_from_u64(seed);
            RandomScatter::new(50)
                .scatter(&mut plot, &mut rng, &CancelToken::new())
                .unwrap();
            plot.points().to_vec()
        };
        assert_eq!(run(11), run(11));
    }
}
