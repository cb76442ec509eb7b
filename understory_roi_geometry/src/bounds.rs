// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes over vertex sequences.

use kurbo::{Point, Rect};

/// Axis-aligned bounding box in 2D.
///
/// Boxes produced by [`bounds_of`] satisfy `min <= max` on both axes. A box
/// may be degenerate (zero width or height) for single-point or collinear
/// inputs; it still contains the points on its closed extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (top)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (bottom)
    pub max_y: f64,
}

impl BoundingBox {
    /// The inverted box covering nothing. It is the identity for [`union`](Self::union)
    /// and contains no point.
    pub const EMPTY: Self = Self::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );

    /// Create a new box from min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The degenerate box covering a single point.
    pub const fn from_point(pt: Point) -> Self {
        Self::new(pt.x, pt.y, pt.x, pt.y)
    }

    /// Min/max reduction over a vertex sequence. Returns `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::from_point(*first), |acc, p| acc.include(*p)),
        )
    }

    /// Grow the box to cover `pt`.
    #[must_use]
    pub fn include(self, pt: Point) -> Self {
        Self {
            min_x: self.min_x.min(pt.x),
            min_y: self.min_y.min(pt.y),
            max_x: self.max_x.max(pt.x),
            max_y: self.max_y.max(pt.y),
        }
    }

    /// Whether this box contains the point. Edges are inclusive.
    pub fn contains_point(&self, pt: Point) -> bool {
        self.min_x <= pt.x && pt.x <= self.max_x && self.min_y <= pt.y && pt.y <= self.max_y
    }

    /// Whether the two closed boxes share at least one point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Smallest box covering both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Width of the box (zero for degenerate boxes).
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box (zero for degenerate boxes).
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True if the box is inverted and covers no point (see [`EMPTY`](Self::EMPTY)).
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// True if the box has no area. Assumes no NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Convert to a Kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

/// Min/max reduction over a vertex sequence. O(n).
///
/// Returns `None` for an empty slice.
pub fn bounds_of(points: &[Point]) -> Option<BoundingBox> {
    BoundingBox::from_points(points)
}
