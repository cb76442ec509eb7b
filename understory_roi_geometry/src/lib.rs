// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_roi_geometry --heading-base-level=0

//! Understory ROI Geometry: containment primitives for polygonal regions of interest.
//!
//! This crate holds the narrow-phase geometry used by region hit testing:
//!
//! - [`BoundingBox`]: closed axis-aligned box with point containment, intersection, and union.
//! - [`Ring`]: an implicitly closed vertex loop with cached bounds and an inclusive
//!   even-odd point test ([`point_in_ring`] for one-off loops).
//! - [`PolygonWithHoles`]: an outer ring minus zero or more holes.
//!
//! Points are [`kurbo::Point`]. Boxes convert to and from [`kurbo::Rect`].
//!
//! Malformed input never panics: rings with fewer than 3 vertices or a zero-area
//! box contain nothing. Polygons are trusted as supplied; holes are assumed to lie
//! inside their outer ring.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_roi_geometry::PolygonWithHoles;
//!
//! let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
//! let hole = [(3.0, 3.0), (7.0, 3.0), (7.0, 7.0), (3.0, 7.0)];
//! let poly = PolygonWithHoles::new(square, [hole]);
//!
//! assert!(poly.contains(Point::new(1.0, 1.0)));
//! assert!(!poly.contains(Point::new(5.0, 5.0)));
//! // Edges are inclusive for outer rings and holes alike.
//! assert!(poly.contains(Point::new(0.0, 5.0)));
//! assert!(!poly.contains(Point::new(3.0, 5.0)));
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for coordinates. A NaN query point is outside every box.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod polygon;
pub mod ring;

pub use bounds::{BoundingBox, bounds_of};
pub use kurbo::Point;
pub use polygon::PolygonWithHoles;
pub use ring::{Ring, point_in_ring};
