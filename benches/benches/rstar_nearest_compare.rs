// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mosaic_index::{Bounds, DEFAULT_BUCKET_SIZE, PixelPoint, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

const SIDE: u32 = 1024;

fn gen_points(n: usize, seed: u64) -> Vec<PixelPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            PixelPoint::new(
                rng.random_range(0..SIDE as i32),
                rng.random_range(0..SIDE as i32),
            )
        })
        .collect()
}

fn to_rstar(points: &[PixelPoint]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| [f64::from(p.x), f64::from(p.y)])
        .collect()
}

fn bench_rstar_nearest_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_compare");
    for &n in &[1_000_usize, 10_000] {
        let points = gen_points(n, 11);
        let queries = gen_points(1_000, 12);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("mosaic_build_n{n}"), |b| {
            b.iter(|| {
                let mut tree = QuadTree::new(Bounds::of_plot(SIDE, SIDE), DEFAULT_BUCKET_SIZE);
                for &p in &points {
                    let _ = tree.insert(p);
                }
                black_box(tree.len())
            });
        });

        group.bench_function(format!("rstar_build_n{n}"), |b| {
            b.iter_batched(
                || to_rstar(&points),
                |pts| black_box(RTree::bulk_load(pts).size()),
                BatchSize::SmallInput,
            );
        });

        let mut tree = QuadTree::new(Bounds::of_plot(SIDE, SIDE), DEFAULT_BUCKET_SIZE);
        for &p in &points {
            let _ = tree.insert(p);
        }
        group.bench_function(format!("mosaic_nearest_n{n}"), |b| {
            b.iter(|| {
                for q in &queries {
                    let mut zone = Bounds::of_plot(SIDE, SIDE);
                    black_box(tree.nearest(q, points[0], &mut zone));
                }
            });
        });

        let rtree = RTree::bulk_load(to_rstar(&points));
        group.bench_function(format!("rstar_nearest_n{n}"), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(rtree.nearest_neighbor(&[f64::from(q.x), f64::from(q.y)]));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_nearest_compare);
criterion_main!(benches);
