// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_roi_index --heading-base-level=0

//! Understory ROI Index: which region of interest is under the pointer?
//!
//! This crate keeps a set of named, polygonal regions over a 2D point space (for
//! example sample locations in an image) and answers point queries honoring
//! overlap, holes, visibility, and specificity.
//!
//! - Replace the whole region set with [`RegionIndexGeneric::upsert_regions`], or maintain it
//!   incrementally with [`insert_region`](RegionIndexGeneric::insert_region),
//!   [`upsert_region`](RegionIndexGeneric::upsert_region), and
//!   [`remove_region`](RegionIndexGeneric::remove_region). Updates return coarse [`Damage`].
//! - Enumerate regions for rendering in a stable draw order with
//!   [`regions_for_draw`](RegionIndexGeneric::regions_for_draw).
//! - Resolve a point to at most one region with
//!   [`find_region_at_point`](RegionIndexGeneric::find_region_at_point) or
//!   [`hit_test_point`](RegionIndexGeneric::hit_test_point).
//!
//! ## Specificity
//!
//! When several regions contain the query point, the region with the smallest
//! [`point_count`](Region::point_count) wins: a small region drawn inside a large one
//! stays reachable. Equal counts go to the earlier region in draw order. The ranking
//! is cached per region-set change, so each query only sorts its own candidates.
//!
//! ## Draw order
//!
//! Draw order is independent of specificity. It only changes when the set changes
//! (surviving ids keep their relative order, new ids are appended) or when
//! [`set_draw_order`](RegionIndexGeneric::set_draw_order) is called. Use
//! [`draw_index_of`](RegionIndexGeneric::draw_index_of) to map a query result back to
//! its layer position in O(1).
//!
//! ## Backends
//!
//! Candidates are pruned by region bounds through a [`Backend`]:
//! - [`FlatVec`] (default): linear scans, best for the tens to low hundreds of
//!   regions an interactive view holds.
//! - [`UniformGrid`]: cell-keyed grid for many small regions. See
//!   [`RegionIndex::with_uniform_grid`].
//!
//! The exact polygon test always runs after pruning, so the backend never changes results.
//!
//! ## Errors
//!
//! Construction and updates return [`InvalidRegion`] and [`RegionIndexError`]; a
//! failed update leaves the index unchanged. Queries never fail.
//!
//! ## Threading
//!
//! The index is a plain single-writer value: updates take `&mut self`, queries take
//! `&self`. Nothing runs in the background.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_roi_geometry::PolygonWithHoles;
//! use understory_roi_index::{Region, RegionIndex};
//!
//! let square = |x0: f64, y0: f64, x1: f64, y1: f64| {
//!     PolygonWithHoles::from_outer([(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
//! };
//!
//! let mut idx = RegionIndex::new();
//! idx.upsert_regions([
//!     Region::new("tissue", "Tissue", [square(0.0, 0.0, 10.0, 10.0)], 1000).unwrap(),
//!     Region::new("nucleus", "Nucleus", [square(3.0, 3.0, 7.0, 7.0)], 10).unwrap(),
//! ])
//! .unwrap();
//!
//! // Both contain (5, 5); the more specific region wins.
//! assert_eq!(idx.find_region_at_point(Point::new(5.0, 5.0), true), Some(&"nucleus"));
//! assert_eq!(idx.draw_index_of(&"nucleus"), Some(1));
//!
//! // Hidden regions are skipped by visible-only queries.
//! idx.set_visible(&"nucleus", false);
//! assert_eq!(idx.find_region_at_point(Point::new(5.0, 5.0), true), Some(&"tissue"));
//! ```

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod damage;
pub mod error;
pub mod index;
pub mod region;
pub mod types;

pub use backend::Backend;
pub use backends::{FlatVec, UniformGrid};
pub use damage::Damage;
pub use error::{InvalidRegion, RegionIndexError};
pub use index::{RegionIndex, RegionIndexGeneric};
pub use region::{Polygons, Region};
pub use types::{QueryFilter, RegionFlags, RegionHit};
