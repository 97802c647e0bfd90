// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Poisson-disc versus uniform-random points.
//!
//! Scatter both distributions at the same density and compare how tightly their
//! points crowd together.
//!
//! Run:
//! - `cargo run -p mosaic_demos --example poisson_vs_random`

use mosaic_scatter::{CancelToken, Distribution, DistributionMode, Plot, Scatter};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn closest_pair(plot: &Plot) -> f64 {
    let pts = plot.points();
    let mut best = f64::INFINITY;
    for (i, a) in pts.iter().enumerate() {
        for b in &pts[i + 1..] {
            best = best.min(a.distance(*b));
        }
    }
    best
}

fn main() {
    let (w, h) = (400, 300);
    for mode in [DistributionMode::Random, DistributionMode::Uniform] {
        let strategy = Distribution::for_density(mode, 4, w, h);
        let mut plot = Plot::new(w, h);
        let mut rng = StdRng::seed_from_u64(2025);
        let placed = strategy
            .scatter(&mut plot, &mut rng, &CancelToken::new())
            .unwrap();
        println!(
            "{mode:>8}: {placed:4} points, closest pair {:.2}",
            closest_pair(&plot)
        );
    }
}
