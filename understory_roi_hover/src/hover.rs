// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state machine: track the region under the pointer and report changes.
//!
//! ## Usage
//!
//! 1) Keep one [`HitTester`] per pointer next to your [`RegionIndex`](understory_roi_index::RegionIndex).
//! 2) On every pointer move call [`HitTester::pointer_move`]. It returns
//!    `Some(HoverChange)` only when the hovered region differs from the last one.
//! 3) After replacing or editing regions, call [`HitTester::revalidate`] so a region
//!    that vanished (or appeared) under a still cursor is picked up.
//! 4) When the pointer leaves the surface, call [`HitTester::pointer_leave`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_roi_geometry::PolygonWithHoles;
//! use understory_roi_hover::hover::{HitTester, HoverChange};
//! use understory_roi_index::{Region, RegionIndex};
//!
//! let mut idx = RegionIndex::new();
//! let square = PolygonWithHoles::from_outer([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
//! idx.upsert_regions([Region::new(1_u32, "cells", [square], 40).unwrap()]).unwrap();
//!
//! let mut hover = HitTester::new();
//! assert_eq!(
//!     hover.pointer_move(&idx, Point::new(5.0, 5.0)),
//!     Some(HoverChange { old: None, new: Some(1) })
//! );
//! // Moving within the same region is silent.
//! assert_eq!(hover.pointer_move(&idx, Point::new(6.0, 5.0)), None);
//! ```

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Point;
use understory_roi_index::{Backend, QueryFilter, RegionHit, RegionIndexGeneric};

/// The two hover states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HoverState<K> {
    /// No region under the pointer.
    #[default]
    Idle,
    /// The pointer is over this region.
    Hovering(K),
}

impl<K> HoverState<K> {
    /// The hovered region, if any.
    pub fn region(&self) -> Option<&K> {
        match self {
            Self::Idle => None,
            Self::Hovering(k) => Some(k),
        }
    }
}

/// A change of hovered region, from `old` to `new`. The two always differ.
///
/// Collaborators use it to decide whether to redraw; the tester itself draws nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverChange<K> {
    /// Region hovered before the change, or `None` if idle.
    pub old: Option<K>,
    /// Region hovered after the change, or `None` if idle.
    pub new: Option<K>,
}

/// A hover transition event.
///
/// Obtained from [`HoverChange::events`] for toolkits that speak enter/leave.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given region.
    Enter(K),
    /// Pointer leaves the given region.
    Leave(K),
}

impl<K: Clone> HoverChange<K> {
    /// The change as a leave of the old region (if any) followed by an enter of
    /// the new one (if any).
    pub fn events(&self) -> impl Iterator<Item = HoverEvent<K>> + '_ {
        self.old
            .iter()
            .cloned()
            .map(HoverEvent::Leave)
            .chain(self.new.iter().cloned().map(HoverEvent::Enter))
    }
}

/// Tracks the region under one pointer.
///
/// Each call runs synchronously against the index passed in; the tester keeps no
/// reference to it. Feeding the same point twice yields at most one change.
#[derive(Clone, Debug)]
pub struct HitTester<K> {
    state: HoverState<K>,
    draw_index: Option<usize>,
    last_point: Option<Point>,
    filter: QueryFilter,
}

impl<K> Default for HitTester<K> {
    fn default() -> Self {
        Self::with_filter(QueryFilter::INTERACTIVE)
    }
}

impl<K> HitTester<K> {
    /// Create an idle tester that only considers visible, pickable regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle tester with an explicit filter.
    pub fn with_filter(filter: QueryFilter) -> Self {
        Self {
            state: HoverState::Idle,
            draw_index: None,
            last_point: None,
            filter,
        }
    }

    /// The filter used for queries.
    pub fn filter(&self) -> QueryFilter {
        self.filter
    }

    /// Replace the filter. Takes effect on the next move or [`revalidate`](Self::revalidate).
    pub fn set_filter(&mut self, filter: QueryFilter) {
        self.filter = filter;
    }

    /// Current state.
    pub fn state(&self) -> &HoverState<K> {
        &self.state
    }

    /// The hovered region, if any.
    pub fn current(&self) -> Option<&K> {
        self.state.region()
    }

    /// Draw index of the hovered region as of the last query.
    pub fn draw_index(&self) -> Option<usize> {
        self.draw_index
    }

    /// Last pointer position, cleared by [`pointer_leave`](Self::pointer_leave).
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }
}

impl<K: Clone + Eq + Hash + Debug> HitTester<K> {
    /// Process a pointer move to `pt`.
    ///
    /// Returns a change if the hovered region differs from before, `None` otherwise.
    pub fn pointer_move<B: Backend>(
        &mut self,
        index: &RegionIndexGeneric<K, B>,
        pt: Point,
    ) -> Option<HoverChange<K>> {
        self.last_point = Some(pt);
        let hit = index.hit_test_point(pt, self.filter);
        self.apply(hit)
    }

    /// The pointer left the surface: go idle.
    pub fn pointer_leave(&mut self) -> Option<HoverChange<K>> {
        self.last_point = None;
        self.apply(None)
    }

    /// Re-run the last query after the region set (or the filter) changed.
    ///
    /// Picks up regions removed, hidden, added, or reordered under a pointer that
    /// has not moved. Idle testers without a last point stay idle.
    pub fn revalidate<B: Backend>(
        &mut self,
        index: &RegionIndexGeneric<K, B>,
    ) -> Option<HoverChange<K>> {
        let hit = self
            .last_point
            .and_then(|pt| index.hit_test_point(pt, self.filter));
        self.apply(hit)
    }

    fn apply(&mut self, hit: Option<RegionHit<K>>) -> Option<HoverChange<K>> {
        let (new, draw_index) = match hit {
            Some(RegionHit { id, draw_index }) => (Some(id), Some(draw_index)),
            None => (None, None),
        };
        self.draw_index = draw_index;
        if self.state.region() == new.as_ref() {
            return None;
        }
        let old = match core::mem::take(&mut self.state) {
            HoverState::Idle => None,
            HoverState::Hovering(k) => Some(k),
        };
        if let Some(k) = &new {
            self.state = HoverState::Hovering(k.clone());
        }
        log::trace!("hover changed: {old:?} -> {new:?}");
        Some(HoverChange { old, new })
    }
}
