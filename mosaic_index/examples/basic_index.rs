// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Mosaic Index: insert, inspect the splits, and query nearest points.

use mosaic_index::{Bounds, PixelPoint, QuadTree, Quadrant};

fn main() {
    let mut tree = QuadTree::new(Bounds::of_plot(10, 10), 2);
    for (x, y) in [(2, 1), (9, 1), (7, 8), (4, 2), (2, 4)] {
        tree.insert(PixelPoint::new(x, y)).unwrap();
    }

    let nw = tree.root().child(Quadrant::NW).unwrap();
    println!("NW split: {}, leaves: {}", nw.has_children(), tree.leaves().count());

    for target in [(8, 2), (3, 1), (2, 6), (4, 1)] {
        let target = PixelPoint::from(target);
        let mut zone = Bounds::of_plot(10, 10);
        let found = tree.nearest(&target, PixelPoint::new(2, 1), &mut zone);
        println!(
            "nearest to {:?}: {:?} at {:.3}",
            target, found.element, found.distance
        );
    }
}
