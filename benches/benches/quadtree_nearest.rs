// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mosaic_index::{Bounds, DEFAULT_BUCKET_SIZE, PixelPoint, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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

fn build(points: &[PixelPoint], bucket: usize) -> QuadTree<Bounds, PixelPoint> {
    let mut tree = QuadTree::new(Bounds::of_plot(SIDE, SIDE), bucket);
    for &p in points {
        let _ = tree.insert(p);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000_usize, 10_000, 100_000] {
        let points = gen_points(n, 1);
        group.throughput(Throughput::Elements(n as u64));
        for &bucket in &[4_usize, DEFAULT_BUCKET_SIZE, 32] {
            group.bench_function(format!("n{n}_bucket{bucket}"), |b| {
                b.iter(|| black_box(build(&points, bucket)));
            });
        }
    }
    group.finish();
}

fn bench_nearest_full_zone(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_nearest_full_zone");
    for &n in &[1_000_usize, 10_000] {
        let points = gen_points(n, 2);
        let tree = build(&points, DEFAULT_BUCKET_SIZE);
        let queries = gen_points(1_000, 3);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| {
                for q in &queries {
                    let mut zone = Bounds::of_plot(SIDE, SIDE);
                    black_box(tree.nearest(q, points[0], &mut zone));
                }
            });
        });
    }
    group.finish();
}

// One scanline with the previous answer as the zone hint, as the mosaic sweep does.
fn bench_nearest_hinted_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_nearest_hinted_row");
    for &n in &[1_000_usize, 10_000] {
        let points = gen_points(n, 4);
        let tree = build(&points, DEFAULT_BUCKET_SIZE);
        group.throughput(Throughput::Elements(u64::from(SIDE)));
        group.bench_function(format!("n{n}"), |b| {
            b.iter_batched(
                || Bounds::of_plot(SIDE, SIDE),
                |mut zone| {
                    let mut prev: Option<PixelPoint> = None;
                    for x in 0..SIDE as i32 {
                        let here = PixelPoint::new(x, 512);
                        if let Some(p) = prev {
                            zone = Bounds::square_around(here, p.distance(here));
                        }
                        prev = Some(tree.nearest(&here, points[0], &mut zone).element);
                    }
                    black_box(prev);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_nearest_full_zone,
    bench_nearest_hinted_row
);
criterion_main!(benches);
