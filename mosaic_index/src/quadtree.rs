// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-way region-subdivision tree with bucketed leaves.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem;

use crate::region::Region;
use crate::types::{Quadrant, Quadrants};

/// Bucket size used when none is given.
pub const DEFAULT_BUCKET_SIZE: usize = 10;

/// Depth past which leaves stop splitting and just grow.
///
/// Bounds the recursion when more than a bucket's worth of elements share one location.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Returned by [`QuadTree::insert`] when the element lies outside the root region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("element lies outside the indexed region")]
pub struct OutOfDomain;

/// A node is either a leaf with a bucket or an internal node with four children.
#[derive(Clone, Debug)]
enum NodeState<R, E> {
    Leaf(Vec<E>),
    Internal(Box<Quadrants<Node<R, E>>>),
}

/// One node of a [`QuadTree`].
#[derive(Clone, Debug)]
pub struct Node<R, E> {
    region: R,
    depth: usize,
    state: NodeState<R, E>,
}

#[derive(Copy, Clone, Debug)]
struct Limits {
    max_bucket: usize,
    max_depth: usize,
}

/// Quadtree over a [`Region`] model, storing elements in leaf buckets.
///
/// A leaf splits once, the first time its bucket grows past the bucket size, and
/// never merges back. Elements can be inserted but not moved or removed.
#[derive(Clone)]
pub struct QuadTree<R, E> {
    root: Node<R, E>,
    limits: Limits,
    len: usize,
}

impl<R, E> Debug for QuadTree<R, E>
where
    R: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("region", &self.root.region)
            .field("len", &self.len)
            .field("max_bucket", &self.limits.max_bucket)
            .field("max_depth", &self.limits.max_depth)
            .field("leaves", &self.leaves().count())
            .finish_non_exhaustive()
    }
}

impl<R: Region<E>, E> QuadTree<R, E> {
    /// Create an empty tree covering `region`, splitting leaves holding more than `max_bucket` elements.
    pub fn new(region: R, max_bucket: usize) -> Self {
        assert!(max_bucket > 0, "bucket size must be positive");
        Self {
            root: Node::leaf(region, 0),
            limits: Limits {
                max_bucket,
                max_depth: DEFAULT_MAX_DEPTH,
            },
            len: 0,
        }
    }

    /// Override the depth past which leaves no longer split.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.limits.max_depth = max_depth;
        self
    }

    /// Insert an element, splitting leaves as needed.
    ///
    /// Fails without touching the tree when the element is outside the root region.
    pub fn insert(&mut self, element: E) -> Result<(), OutOfDomain> {
        if !self.root.region.contains(&element) {
            return Err(OutOfDomain);
        }
        self.root.insert(element, self.limits);
        self.len += 1;
        Ok(())
    }

    /// Whether `element` falls inside the root region.
    pub fn covers(&self, element: &E) -> bool {
        self.root.region.contains(element)
    }
}

impl<R, E> QuadTree<R, E> {
    /// The root node.
    pub fn root(&self) -> &Node<R, E> {
        &self.root
    }

    /// The region covered by the whole tree.
    pub fn region(&self) -> &R {
        &self.root.region
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum bucket size, shared by every node.
    pub fn max_bucket(&self) -> usize {
        self.limits.max_bucket
    }

    /// All leaves, depth first in `NW, NE, SW, SE` order.
    pub fn leaves(&self) -> impl Iterator<Item = &Node<R, E>> + '_ {
        let mut stack: Vec<&Node<R, E>> = Vec::from([&self.root]);
        core::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match &node.state {
                    NodeState::Leaf(_) => return Some(node),
                    NodeState::Internal(children) => {
                        // Reverse so NW pops first.
                        stack.extend(children.iter().rev());
                    }
                }
            }
            None
        })
    }

    /// All stored elements, leaf by leaf.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.leaves().flat_map(|leaf| leaf.bucket().iter())
    }
}

impl<R, E> Node<R, E> {
    fn leaf(region: R, depth: usize) -> Self {
        Self {
            region,
            depth,
            state: NodeState::Leaf(Vec::new()),
        }
    }

    /// The region this node covers.
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Distance from the root; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node has been split.
    pub fn has_children(&self) -> bool {
        matches!(self.state, NodeState::Internal(_))
    }

    /// The four children, or `None` for a leaf.
    pub fn children(&self) -> Option<&Quadrants<Self>> {
        match &self.state {
            NodeState::Internal(children) => Some(children),
            NodeState::Leaf(_) => None,
        }
    }

    /// One child, or `None` for a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[quadrant])
    }

    /// Elements held at this node. Always empty once the node has split.
    pub fn bucket(&self) -> &[E] {
        match &self.state {
            NodeState::Leaf(bucket) => bucket,
            NodeState::Internal(_) => &[],
        }
    }
}

impl<R: Region<E>, E> Node<R, E> {
    fn insert(&mut self, element: E, limits: Limits) {
        match &mut self.state {
            NodeState::Leaf(bucket) => {
                bucket.push(element);
                if bucket.len() > limits.max_bucket && self.depth < limits.max_depth {
                    self.split(limits);
                }
            }
            NodeState::Internal(children) => route(children, element, limits),
        }
    }

    fn split(&mut self, limits: Limits) {
        let depth = self.depth + 1;
        let mut children = Box::new(self.region.subdivide().map(|r| Self::leaf(r, depth)));
        let previous = mem::replace(&mut self.state, NodeState::Leaf(Vec::new()));
        if let NodeState::Leaf(bucket) = previous {
            for element in bucket {
                route(&mut children, element, limits);
            }
        }
        self.state = NodeState::Internal(children);
    }
}

/// Hand `element` to the one child whose region contains it.
fn route<R: Region<E>, E>(children: &mut Quadrants<Node<R, E>>, element: E, limits: Limits) {
    let quadrant = {
        let mut owners = Quadrant::ALL
            .into_iter()
            .filter(|&q| children[q].region.contains(&element));
        let Some(q) = owners.next() else {
            panic!("quadrant tiling left an element unclaimed");
        };
        debug_assert!(
            owners.next().is_none(),
            "quadrant tiling let two children claim one element"
        );
        q
    };
    children[quadrant].insert(element, limits);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Bounds;
    use crate::types::PixelPoint;
    use alloc::vec;
    use alloc::vec::Vec;

    fn p(x: i32, y: i32) -> PixelPoint {
        PixelPoint::new(x, y)
    }

    fn tree(max_bucket: usize) -> QuadTree<Bounds, PixelPoint> {
        QuadTree::new(Bounds::of_plot(10, 10), max_bucket)
    }

    #[test]
    fn inserts_split_and_route_to_quadrants() {
        let mut qt = tree(2);
        let pts = [p(2, 1), p(9, 1), p(7, 8), p(4, 2), p(2, 4)];

        assert!(!qt.root().has_children());
        for &pt in &pts[..3] {
            qt.insert(pt).unwrap();
        }
        assert!(qt.root().has_children(), "third point should split the root");

        qt.insert(pts[3]).unwrap();
        qt.insert(pts[4]).unwrap();
        let nw = qt.root().child(Quadrant::NW).unwrap();
        assert!(nw.has_children(), "NW should split after holding three points");

        assert!(nw.child(Quadrant::NW).unwrap().bucket().contains(&pts[0]));
        assert!(qt.root().child(Quadrant::NE).unwrap().bucket().contains(&pts[1]));
        assert!(qt.root().child(Quadrant::SE).unwrap().bucket().contains(&pts[2]));
        assert!(nw.child(Quadrant::NE).unwrap().bucket().contains(&pts[3]));
        assert!(nw.child(Quadrant::SW).unwrap().bucket().contains(&pts[4]));
        assert_eq!(qt.len(), 5);
    }

    #[test]
    fn out_of_domain_is_rejected_without_mutation() {
        let mut qt = tree(2);
        assert_eq!(qt.insert(p(10, 0)), Err(OutOfDomain));
        assert_eq!(qt.insert(p(-1, 3)), Err(OutOfDomain));
        assert!(qt.is_empty());
        assert!(qt.root().bucket().is_empty());
    }

    #[test]
    fn threshold_plus_one_splits_once_without_loss() {
        let mut qt = tree(4);
        // One point per quadrant plus one extra, so no child overflows.
        let pts = [p(1, 1), p(6, 1), p(1, 6), p(6, 6), p(2, 2)];
        for &pt in &pts[..4] {
            qt.insert(pt).unwrap();
        }
        assert!(!qt.root().has_children());
        qt.insert(pts[4]).unwrap();

        let children = qt.root().children().unwrap();
        assert!(children.iter().all(|c| !c.has_children()));
        assert!(qt.root().bucket().is_empty());

        let mut stored: Vec<_> = qt.iter().copied().collect();
        stored.sort();
        let mut expected = pts.to_vec();
        expected.sort();
        assert_eq!(stored, expected);
    }

    #[test]
    fn coincident_points_stop_at_max_depth() {
        let mut qt = tree(1).with_max_depth(4);
        for _ in 0..5 {
            qt.insert(p(3, 3)).unwrap();
        }
        let deepest = qt.leaves().map(Node::depth).max().unwrap();
        assert_eq!(deepest, 4);
        assert_eq!(qt.iter().count(), 5);
    }

    #[test]
    fn leaves_cover_root_area() {
        let mut qt = tree(1);
        for pt in [p(0, 0), p(9, 9), p(5, 0), p(0, 5), p(3, 7)] {
            qt.insert(pt).unwrap();
        }
        let area: f64 = qt.leaves().map(|l| l.region().area()).sum();
        assert_eq!(area, 100.0);
    }

    #[test]
    fn every_point_reachable_by_containment() {
        let mut qt = tree(2);
        let pts = vec![p(0, 0), p(1, 1), p(2, 2), p(8, 8), p(8, 1), p(1, 8), p(5, 5)];
        for &pt in &pts {
            qt.insert(pt).unwrap();
        }
        for pt in pts {
            let mut node = qt.root();
            while let Some(children) = node.children() {
                node = children.iter().find(|c| c.region().contains_point(pt)).unwrap();
            }
            assert!(node.bucket().contains(&pt));
        }
    }
}
