// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Index: a region-subdivision quadtree for 2D points.
//!
//! Mosaic Index is the spatial core behind mosaic rendering: it stores a sparse set
//! of sample points and answers "which sample is closest to this pixel" quickly
//! enough to run once per pixel.
//!
//! - A [`Region`] is anything that can test membership, test overlap, and split into
//!   four tiles. [`Bounds`] is the axis-aligned, half-open rectangle used in practice.
//! - A [`QuadTree`] keeps elements in leaf buckets and splits a leaf into four
//!   children the first time its bucket grows past a fixed size.
//! - [`QuadTree::nearest`] descends the tree, pruning nodes outside a search zone
//!   that shrinks every time a closer element is found.
//!
//! # Example
//!
//! ```rust
//! use mosaic_index::{Bounds, PixelPoint, QuadTree};
//!
//! let mut tree = QuadTree::new(Bounds::of_plot(10, 10), 2);
//! for (x, y) in [(2, 1), (9, 1), (7, 8), (4, 2), (2, 4)] {
//!     tree.insert(PixelPoint::new(x, y)).unwrap();
//! }
//! assert!(tree.root().has_children());
//!
//! // Any stored point can seed the search.
//! let mut zone = Bounds::of_plot(10, 10);
//! let found = tree.nearest(&PixelPoint::new(8, 2), PixelPoint::new(2, 1), &mut zone);
//! assert_eq!(found.element, PixelPoint::new(9, 1));
//! ```
//!
//! Insertion outside the root region is rejected:
//!
//! ```rust
//! use mosaic_index::{Bounds, OutOfDomain, PixelPoint, QuadTree};
//!
//! let mut tree = QuadTree::new(Bounds::of_plot(4, 4), 10);
//! assert_eq!(tree.insert(PixelPoint::new(4, 0)), Err(OutOfDomain));
//! assert!(tree.is_empty());
//! ```
//!
//! ### Float semantics
//!
//! Region coordinates are `f64` and are assumed finite. Subdividing integer plot
//! sizes only ever halves, so quadrant edges stay exact well past any useful depth.
//!
//! This crate is `no_std` and uses `alloc`. Enable the `libm` feature for `no_std` builds.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod nearest;
pub mod quadtree;
pub mod region;
pub mod types;

pub use nearest::Nearest;
pub use quadtree::{DEFAULT_BUCKET_SIZE, DEFAULT_MAX_DEPTH, Node, OutOfDomain, QuadTree};
pub use region::{Bounds, Region, SearchRegion};
pub use types::{PixelPoint, Quadrant, Quadrants};
