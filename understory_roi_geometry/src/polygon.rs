// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygons with holes.

use alloc::vec::Vec;

use kurbo::Point;

use crate::bounds::BoundingBox;
use crate::ring::Ring;

/// An outer boundary plus zero or more holes.
///
/// A point is inside iff it is inside the outer ring and not inside any hole,
/// under the inclusive boundary convention described in [`ring`](crate::ring).
/// Holes are expected to lie within the outer ring; this is not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonWithHoles {
    outer: Ring,
    holes: Vec<Ring>,
}

impl PolygonWithHoles {
    /// Create a polygon from an outer ring and its holes.
    pub fn new<H>(outer: impl Into<Ring>, holes: H) -> Self
    where
        H: IntoIterator,
        H::Item: Into<Ring>,
    {
        Self {
            outer: outer.into(),
            holes: holes.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a polygon without holes.
    pub fn from_outer(outer: impl Into<Ring>) -> Self {
        Self {
            outer: outer.into(),
            holes: Vec::new(),
        }
    }

    /// Add a hole, builder style.
    #[must_use]
    pub fn with_hole(mut self, hole: impl Into<Ring>) -> Self {
        self.holes.push(hole.into());
        self
    }

    /// The outer boundary.
    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    /// The holes, in the order supplied.
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Bounding box of the outer boundary.
    pub fn bounds(&self) -> BoundingBox {
        self.outer.bounds()
    }

    /// Whether `pt` lies inside the polygon.
    ///
    /// Rejects on the outer box first, then tests the outer ring, then each
    /// hole (box first) and stops at the first hole containing the point.
    pub fn contains(&self, pt: Point) -> bool {
        if !self.outer.bounds().contains_point(pt) || !self.outer.contains(pt) {
            return false;
        }
        !self
            .holes
            .iter()
            .any(|hole| hole.bounds().contains_point(pt) && hole.contains(pt))
    }

    /// Unsigned area of the outer ring minus the unsigned areas of the holes.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| unsigned(h.signed_area())).sum();
        unsigned(self.outer.signed_area()) - holes
    }
}

// `f64::abs` is not available to `no_std` builds without libm.
fn unsigned(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

impl From<Ring> for PolygonWithHoles {
    fn from(outer: Ring) -> Self {
        Self::from_outer(outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    const HOLE: [(f64, f64); 4] = [(3.0, 3.0), (7.0, 3.0), (7.0, 7.0), (3.0, 7.0)];

    #[test]
    fn square_without_holes() {
        let p = PolygonWithHoles::from_outer(SQUARE);
        assert!(p.contains(Point::new(5.0, 5.0)));
        assert!(!p.contains(Point::new(15.0, 5.0)));
        assert!(!p.contains(Point::new(-1.0, -1.0)));
    }

    #[test]
    fn hole_is_excluded() {
        let p = PolygonWithHoles::new(SQUARE, [HOLE]);
        assert!(!p.contains(Point::new(5.0, 5.0)));
        assert!(p.contains(Point::new(1.0, 1.0)));
        assert_eq!(p.area(), 84.0);
    }

    #[test]
    fn hole_edge_belongs_to_hole() {
        let p = PolygonWithHoles::from_outer(SQUARE).with_hole(HOLE);
        // On the hole's edge: inside the hole, so outside the polygon.
        assert!(!p.contains(Point::new(3.0, 5.0)));
        assert!(!p.contains(Point::new(7.0, 7.0)));
        // On the outer edge: inside.
        assert!(p.contains(Point::new(0.0, 5.0)));
    }

    #[test]
    fn second_hole_is_checked() {
        let p = PolygonWithHoles::new(
            SQUARE,
            [
                [(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)],
                [(8.0, 8.0), (9.0, 8.0), (9.0, 9.0), (8.0, 9.0)],
            ],
        );
        assert!(!p.contains(Point::new(8.5, 8.5)));
        assert!(!p.contains(Point::new(1.5, 1.5)));
        assert!(p.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn degenerate_hole_excludes_nothing() {
        let p = PolygonWithHoles::new(SQUARE, [[(4.0, 4.0), (6.0, 6.0)]]);
        assert!(p.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn zero_area_hole_excludes_nothing() {
        let p = PolygonWithHoles::new(SQUARE, [[(4.0, 4.0), (5.0, 5.0), (6.0, 6.0)]]);
        assert!(p.contains(Point::new(5.0, 5.0)));
        assert!(p.contains(Point::new(4.0, 4.0)));
        assert_eq!(p.area(), 100.0);
    }

    #[test]
    fn zero_area_outer_contains_nothing() {
        let p = PolygonWithHoles::from_outer([(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
        assert!(!p.contains(Point::new(5.0, 5.0)));
    }
}
