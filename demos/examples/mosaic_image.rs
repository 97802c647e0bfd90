// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic an in-memory image.
//!
//! Paint a gradient, run the full pipeline at every density level, and write the
//! results next to the working directory as PNG files.
//!
//! Run:
//! - `cargo run -p mosaic_demos --example mosaic_image`

use image::{Rgba, RgbaImage};
use mosaic_render::{MosaicSettings, render};
use mosaic_scatter::{CancelToken, DistributionMode};

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        let r = (255 * x / w) as u8;
        let g = (255 * y / h) as u8;
        Rgba([r, g, 255 - r / 2, 255])
    })
}

fn main() {
    let cancel = CancelToken::new();
    for density in 1..=5 {
        for mode in [DistributionMode::Random, DistributionMode::Uniform] {
            let mut img = gradient(320, 240);
            let settings = MosaicSettings::default()
                .with_density(density)
                .with_mode(mode)
                .with_seed(u64::from(density));
            let report = render(&mut img, &settings, &cancel).unwrap();
            let path = format!("mosaic_{mode}_d{density}.png");
            img.save(&path).unwrap();
            println!(
                "{path}: {} points, {} queries",
                report.points,
                report.stats.map_or(0, |s| s.queries)
            );
        }
    }
}
