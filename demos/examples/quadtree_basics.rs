// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert a handful of points, watch a leaf split, and ask for nearest points with
//! both a full and a hinted search zone.
//!
//! Run:
//! - `cargo run -p mosaic_demos --example quadtree_basics`

use mosaic_index::{Bounds, PixelPoint, QuadTree, Quadrant};

fn main() {
    // Two points per bucket so the fifth insert forces splits.
    let mut tree = QuadTree::new(Bounds::of_plot(10, 10), 2);
    for (x, y) in [(2, 1), (9, 1), (7, 8), (4, 2), (2, 4)] {
        tree.insert(PixelPoint::new(x, y)).unwrap();
    }
    for quadrant in Quadrant::ALL {
        let child = tree.root().child(quadrant).unwrap();
        println!(
            "{quadrant:?}: {} point(s), split: {}",
            child.bucket().len(),
            child.has_children()
        );
    }

    let target = PixelPoint::new(2, 6);
    let mut zone = Bounds::of_plot(10, 10);
    let found = tree.nearest(&target, PixelPoint::new(9, 1), &mut zone);
    println!("nearest to {target:?}: {:?} at {:.3}", found.element, found.distance);
    println!("zone shrank to {:?}", zone.to_rect());

    // A zone that misses every point returns the seed unchanged.
    let mut tight = Bounds::square_around(PixelPoint::new(0, 9), 1.0);
    let found = tree.nearest(&PixelPoint::new(0, 9), PixelPoint::new(9, 1), &mut tight);
    assert_eq!(found.element, PixelPoint::new(9, 1), "hint too small to find (2, 4)");
}
