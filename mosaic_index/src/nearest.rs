// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-neighbor search with a shrinking search zone.
//!
//! The search walks the tree top down and skips any node whose region does not
//! overlap the current zone. Every time a closer element turns up, the zone is
//! reshaped into the square that just encloses the circle through it, so siblings
//! visited later are pruned against the tighter bound.
//!
//! The zone handed in by the caller is only a pruning aid. A zone that starts too
//! small can hide the true nearest element; callers that pass a hint accept that.

use crate::quadtree::{Node, QuadTree};
use crate::region::SearchRegion;

/// Best match found by [`QuadTree::nearest`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest<E> {
    /// The closest element seen.
    pub element: E,
    /// Its distance to the target.
    pub distance: f64,
}

struct Search<'a, R, E> {
    target: &'a E,
    best: Nearest<E>,
    zone: &'a mut R,
}

impl<R, E> QuadTree<R, E>
where
    R: SearchRegion<E>,
    E: Clone,
{
    /// Find the element closest to `target`, starting from `seed` as the best guess.
    ///
    /// `seed` is usually any stored element; it is returned unchanged when nothing
    /// closer is found. `zone` bounds the search and is shrunk in place as closer
    /// elements are discovered.
    pub fn nearest(&self, target: &E, seed: E, zone: &mut R) -> Nearest<E> {
        let distance = R::distance(target, &seed);
        let mut search = Search {
            target,
            best: Nearest {
                element: seed,
                distance,
            },
            zone,
        };
        search.visit(self.root());
        search.best
    }
}

impl<R, E> Search<'_, R, E>
where
    R: SearchRegion<E>,
    E: Clone,
{
    fn visit(&mut self, node: &Node<R, E>) {
        if !node.region().intersects(&*self.zone) {
            return;
        }
        if let Some(children) = node.children() {
            for child in children.iter() {
                self.visit(child);
            }
            return;
        }
        for candidate in node.bucket() {
            let d = R::distance(self.target, candidate);
            if d < self.best.distance {
                self.best = Nearest {
                    element: candidate.clone(),
                    distance: d,
                };
                self.zone.center_on(self.target, d);
            }
        }
    }
}
