// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase backend trait for region bounds.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use understory_roi_geometry::BoundingBox;

/// Spatial backend abstraction used by `RegionIndexGeneric`.
///
/// A backend maps draw-order slots to region bounds and answers coarse queries.
/// It only prunes: results are candidates whose box passes the query, and the
/// index still runs the exact polygon test on each one. Backends must not report
/// a slot twice for one query.
pub trait Backend: Debug {
    /// Insert a slot with its bounds. Empty boxes may be ignored.
    fn insert(&mut self, slot: usize, bounds: BoundingBox);

    /// Replace the bounds of an existing slot.
    fn update(&mut self, slot: usize, bounds: BoundingBox);

    /// Clear all spatial structures.
    fn clear(&mut self);

    /// Append slots whose box contains the point to `out`.
    fn query_point(&self, pt: Point, out: &mut Vec<usize>);

    /// Append slots whose box intersects `rect` to `out`.
    fn query_rect(&self, rect: BoundingBox, out: &mut Vec<usize>);
}
