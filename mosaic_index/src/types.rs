// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive types: integer pixel points and the four-slot quadrant container.

use core::ops::{Index, IndexMut};

use kurbo::Point;

/// Integer pixel coordinate. Origin is the top-left corner; y grows downward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPoint {
    /// Create a point from its column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The same location as a Kurbo point.
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Euclidean distance between two pixel points.
    pub fn distance(self, other: Self) -> f64 {
        self.to_point().distance(other.to_point())
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The four children of a subdivided region, named like compass quadrants.
///
/// `NW` is top-left and `SE` is bottom-right in image coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// Top-left.
    NW,
    /// Top-right.
    NE,
    /// Bottom-left.
    SW,
    /// Bottom-right.
    SE,
}

impl Quadrant {
    /// All quadrants in traversal order.
    pub const ALL: [Self; 4] = [Self::NW, Self::NE, Self::SW, Self::SE];
}

/// One value per quadrant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quadrants<T> {
    /// Top-left value.
    pub nw: T,
    /// Top-right value.
    pub ne: T,
    /// Bottom-left value.
    pub sw: T,
    /// Bottom-right value.
    pub se: T,
}

impl<T> Quadrants<T> {
    /// Build from a value per quadrant.
    pub const fn new(nw: T, ne: T, sw: T, se: T) -> Self {
        Self { nw, ne, sw, se }
    }

    /// Apply `f` to every slot, keeping quadrant positions.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quadrants<U> {
        Quadrants {
            nw: f(self.nw),
            ne: f(self.ne),
            sw: f(self.sw),
            se: f(self.se),
        }
    }

    /// Iterate values in `NW, NE, SW, SE` order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        [&self.nw, &self.ne, &self.sw, &self.se].into_iter()
    }

    /// Mutably iterate values in `NW, NE, SW, SE` order.
    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut T> + ExactSizeIterator + '_ {
        [&mut self.nw, &mut self.ne, &mut self.sw, &mut self.se].into_iter()
    }
}

impl<T> Index<Quadrant> for Quadrants<T> {
    type Output = T;

    fn index(&self, q: Quadrant) -> &T {
        match q {
            Quadrant::NW => &self.nw,
            Quadrant::NE => &self.ne,
            Quadrant::SW => &self.sw,
            Quadrant::SE => &self.se,
        }
    }
}

impl<T> IndexMut<Quadrant> for Quadrants<T> {
    fn index_mut(&mut self, q: Quadrant) -> &mut T {
        match q {
            Quadrant::NW => &mut self.nw,
            Quadrant::NE => &mut self.ne,
            Quadrant::SW => &mut self.sw,
            Quadrant::SE => &mut self.se,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = PixelPoint::new(0, 0);
        let b = PixelPoint::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn quadrant_order_and_indexing_agree() {
        let q = Quadrants::new('a', 'b', 'c', 'd');
        let by_index: [char; 4] = Quadrant::ALL.map(|quad| q[quad]);
        let by_iter: [char; 4] = {
            let mut it = q.iter().copied();
            core::array::from_fn(|_| it.next().unwrap_or('?'))
        };
        assert_eq!(by_index, ['a', 'b', 'c', 'd']);
        assert_eq!(by_index, by_iter);
    }
}
