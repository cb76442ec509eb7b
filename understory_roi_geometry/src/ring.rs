// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed vertex loops and the point-in-ring test.
//!
//! ## Boundary convention
//!
//! A point lying exactly on an edge or a vertex is *inside* the ring. The same
//! rule applies to outer boundaries and holes (a point on a hole's edge is in
//! the hole), and it agrees with the closed [`BoundingBox::contains_point`], so
//! a ring touching its own box edge is never rejected early.
//!
//! Edge hits are exact: a point counts as on an edge only when the cross product
//! with that edge evaluates to exactly zero. Points on axis-aligned edges are
//! always found. On slanted edges a point that is mathematically on the edge may
//! not be representable in `f64`, and then falls to the crossing test on either
//! side.
//!
//! Interior points are classified with the even-odd rule (horizontal ray
//! crossing). Degenerate rings contain nothing: fewer than 3 vertices, or all
//! vertices on one line (which includes a zero-area bounding box).

use alloc::vec::Vec;

use kurbo::Point;

use crate::bounds::BoundingBox;

/// An ordered, implicitly closed vertex loop with its precomputed bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
    bounds: BoundingBox,
    degenerate: bool,
}

impl Ring {
    /// Build a ring from its vertices. The closing edge from the last vertex
    /// back to the first is implied; do not repeat the first vertex.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        let points = points.into();
        let bounds = BoundingBox::from_points(&points).unwrap_or(BoundingBox::EMPTY);
        let degenerate = is_degenerate_loop(&points, &bounds);
        Self {
            points,
            bounds,
            degenerate,
        }
    }

    /// The vertices of this ring.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounding box of the vertices; [`BoundingBox::EMPTY`] for a ring with no vertices.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// True if the ring cannot contain any point.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Whether `pt` is inside the ring or on its boundary.
    pub fn contains(&self, pt: Point) -> bool {
        if self.is_degenerate() || !self.bounds.contains_point(pt) {
            return false;
        }
        crosses_inclusive(&self.points, pt)
    }

    /// Shoelace area; positive for counter-clockwise loops in a y-up space.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[j];
            let b = self.points[i];
            twice += a.x * b.y - b.x * a.y;
            j = i;
        }
        0.5 * twice
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<&[Point]> for Ring {
    fn from(points: &[Point]) -> Self {
        Self::new(points)
    }
}

impl<const N: usize> From<[Point; N]> for Ring {
    fn from(points: [Point; N]) -> Self {
        Self::new(points)
    }
}

impl<const N: usize> From<[(f64, f64); N]> for Ring {
    fn from(points: [(f64, f64); N]) -> Self {
        Self::new(points.map(Point::from))
    }
}

/// Whether `pt` is inside the implicitly closed loop `vertices` or on its boundary.
///
/// Degenerate loops (fewer than 3 vertices, or all vertices collinear) return
/// `false`. Prefer [`Ring::contains`] when testing the same loop repeatedly; it
/// reuses the cached bounds and degeneracy check.
pub fn point_in_ring(vertices: &[Point], pt: Point) -> bool {
    match BoundingBox::from_points(vertices) {
        Some(b) if b.contains_point(pt) && !is_degenerate_loop(vertices, &b) => {
            crosses_inclusive(vertices, pt)
        }
        _ => false,
    }
}

fn is_degenerate_loop(vertices: &[Point], bounds: &BoundingBox) -> bool {
    vertices.len() < 3 || bounds.is_degenerate() || all_collinear(vertices)
}

// Self-intersecting loops such as a bowtie have zero signed area but still
// enclose points, so degeneracy is collinearity rather than a zero shoelace sum.
fn all_collinear(vertices: &[Point]) -> bool {
    let Some((&origin, rest)) = vertices.split_first() else {
        return true;
    };
    let Some(&dir) = rest.iter().find(|&&p| p != origin) else {
        return true;
    };
    rest.iter().all(|&p| cross(origin, dir, p) == 0.0)
}

fn cross(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

// Assumes at least 3 vertices.
fn crosses_inclusive(vertices: &[Point], pt: Point) -> bool {
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[j];
        let b = vertices[i];
        if on_segment(a, b, pt) {
            return true;
        }
        if (b.y > pt.y) != (a.y > pt.y) {
            let x_at = (a.x - b.x) * (pt.y - b.y) / (a.y - b.y) + b.x;
            if pt.x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    cross(a, b, p) == 0.0
        && a.x.min(b.x) <= p.x
        && p.x <= a.x.max(b.x)
        && a.y.min(b.y) <= p.y
        && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        Ring::from([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn interior_and_exterior() {
        let r = square();
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(!r.contains(Point::new(15.0, 5.0)));
        assert!(!r.contains(Point::new(-1.0, -1.0)));
    }

    #[test]
    fn boundary_is_inclusive() {
        let r = square();
        assert!(r.contains(Point::new(0.0, 5.0)));
        assert!(r.contains(Point::new(10.0, 5.0)));
        assert!(r.contains(Point::new(5.0, 10.0)));
        assert!(r.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn diagonal_edge_is_inclusive() {
        let tri = Ring::from([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!(tri.contains(Point::new(5.0, 5.0)));
        assert!(tri.contains(Point::new(2.0, 2.0)));
        assert!(!tri.contains(Point::new(6.0, 6.0)));
    }

    #[test]
    fn concave_notch_is_outside() {
        // A "U" shape: the notch between the arms is outside.
        let u = Ring::from([
            (0.0, 0.0),
            (9.0, 0.0),
            (9.0, 9.0),
            (6.0, 9.0),
            (6.0, 3.0),
            (3.0, 3.0),
            (3.0, 9.0),
            (0.0, 9.0),
        ]);
        assert!(u.contains(Point::new(1.5, 7.0)));
        assert!(u.contains(Point::new(7.5, 7.0)));
        assert!(!u.contains(Point::new(4.5, 7.0)));
        assert!(u.contains(Point::new(4.5, 1.0)));
    }

    #[test]
    fn degenerate_rings_contain_nothing() {
        let empty = Ring::new(Vec::<Point>::new());
        assert!(!empty.contains(Point::ZERO));
        let two = Ring::from([(0.0, 0.0), (10.0, 10.0)]);
        assert!(!two.contains(Point::new(5.0, 5.0)));
        let collinear = Ring::from([(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
        assert!(collinear.is_degenerate());
        assert!(!collinear.contains(Point::new(5.0, 5.0)));
        assert!(!collinear.contains(Point::new(0.0, 0.0)));
        assert!(!point_in_ring(collinear.points(), Point::new(5.0, 5.0)));
        assert!(!point_in_ring(&[Point::ZERO, Point::new(1.0, 0.0)], Point::ZERO));
    }

    #[test]
    fn slanted_line_with_backtrack_is_degenerate() {
        let spike = Ring::from([(0.0, 0.0), (10.0, 5.0), (4.0, 2.0), (10.0, 5.0)]);
        assert!(spike.is_degenerate());
        assert!(!spike.contains(Point::new(4.0, 2.0)));
        assert!(!spike.contains(Point::new(2.0, 1.0)));
    }

    #[test]
    fn bowtie_is_not_degenerate() {
        let bowtie = Ring::from([(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        assert_eq!(bowtie.signed_area(), 0.0);
        assert!(!bowtie.is_degenerate());
        assert!(bowtie.contains(Point::new(2.0, 5.0)));
        assert!(!bowtie.contains(Point::new(5.0, 2.0)));
    }

    #[test]
    fn free_function_matches_ring() {
        let r = square();
        for pt in [
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 3.0),
            Point::new(11.0, 3.0),
        ] {
            assert_eq!(point_in_ring(r.points(), pt), r.contains(pt), "{pt:?}");
        }
    }

    #[test]
    fn signed_area_follows_winding() {
        assert_eq!(square().signed_area(), 100.0);
        let cw = Ring::from([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        assert_eq!(cw.signed_area(), -100.0);
    }
}
