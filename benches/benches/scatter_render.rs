// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use mosaic_render::apply_mosaic;
use mosaic_scatter::{CancelToken, Distribution, DistributionMode, Plot, Scatter};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn populated(mode: DistributionMode, density: u32, w: u32, h: u32, seed: u64) -> Plot {
    let mut plot = Plot::new(w, h);
    let mut rng = StdRng::seed_from_u64(seed);
    let _ = Distribution::for_density(mode, density, w, h).scatter(
        &mut plot,
        &mut rng,
        &CancelToken::new(),
    );
    plot
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter");
    group.sample_size(20);
    for &(w, h) in &[(640_u32, 480_u32), (1920, 1080)] {
        for &density in &[1_u32, 3, 5] {
            for mode in [DistributionMode::Random, DistributionMode::Uniform] {
                group.bench_function(format!("{mode}_d{density}_{w}x{h}"), |b| {
                    let mut seed = 0;
                    b.iter(|| {
                        seed += 1;
                        black_box(populated(mode, density, w, h, seed).len())
                    });
                });
            }
        }
    }
    group.finish();
}

fn bench_mosaic(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_mosaic");
    group.sample_size(10);
    for &(w, h) in &[(640_u32, 480_u32), (1920, 1080)] {
        let source = RgbaImage::from_fn(w, h, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
        });
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
        for &density in &[1_u32, 5] {
            let plot = populated(DistributionMode::Uniform, density, w, h, 7);
            group.bench_function(format!("d{density}_{w}x{h}"), |b| {
                b.iter_batched(
                    || source.clone(),
                    |mut img| black_box(apply_mosaic(&mut img, &plot, &CancelToken::new())),
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_scatter, bench_mosaic);
criterion_main!(benches);
