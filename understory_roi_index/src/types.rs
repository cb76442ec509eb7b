// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the region index: flags, query filters, and hit results.

bitflags::bitflags! {
    /// Region flags controlling visibility and picking.
    ///
    /// Flags never affect a region's geometry and can be toggled without
    /// rebuilding any cached bounds.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region is shown (participates in visible-only queries).
        const VISIBLE  = 0b0000_0001;
        /// Region is pickable (participates in pickable-only hit tests).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Filters applied during hit testing and rectangle queries.
///
/// Used by [`RegionIndexGeneric::hit_test_point`](crate::RegionIndexGeneric::hit_test_point)
/// and [`RegionIndexGeneric::regions_intersecting`](crate::RegionIndexGeneric::regions_intersecting).
/// The default filter accepts every region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryFilter {
    /// If true, only consider regions marked [`RegionFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider regions marked [`RegionFlags::PICKABLE`].
    pub pickable_only: bool,
}

impl QueryFilter {
    /// Accept every region regardless of flags.
    pub const ALL: Self = Self {
        visible_only: false,
        pickable_only: false,
    };

    /// Accept only regions that are both visible and pickable, as for pointer hover.
    pub const INTERACTIVE: Self = Self {
        visible_only: true,
        pickable_only: true,
    };

    /// Whether a region with `flags` passes this filter.
    pub fn accepts(&self, flags: RegionFlags) -> bool {
        (!self.visible_only || flags.contains(RegionFlags::VISIBLE))
            && (!self.pickable_only || flags.contains(RegionFlags::PICKABLE))
    }
}

/// Result of a point hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionHit<K> {
    /// The matched region.
    pub id: K,
    /// Position of the region in draw order at the time of the query.
    pub draw_index: usize,
}
