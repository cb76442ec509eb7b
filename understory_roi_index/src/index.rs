// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `RegionIndex` API and generic implementation over a pluggable backend.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Point;
use understory_roi_geometry::BoundingBox;

use crate::backend::Backend;
use crate::backends::{FlatVec, UniformGrid};
use crate::damage::Damage;
use crate::error::RegionIndexError;
use crate::region::Region;
use crate::types::{QueryFilter, RegionFlags, RegionHit};

/// A region index parameterized by a broad-phase backend.
///
/// Regions are stored in draw order. Alongside it the index keeps:
/// - a reverse map from id to draw position,
/// - the specificity rank of every draw position (ascending point count, ties
///   by draw position), so queries never re-sort the whole set,
/// - the backend over region bounds.
///
/// All three are rebuilt whenever the set of regions changes. Flag and name
/// changes touch none of them.
pub struct RegionIndexGeneric<K, B> {
    regions: Vec<Region<K>>,
    positions: HashMap<K, usize>,
    ranks: Vec<usize>,
    backend: B,
}

/// Default index using a flat vector backend.
pub type RegionIndex<K> = RegionIndexGeneric<K, FlatVec>;

impl<K, B: Debug> Debug for RegionIndexGeneric<K, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let visible = self.regions.iter().filter(|r| r.is_visible()).count();
        f.debug_struct("RegionIndex")
            .field("regions", &self.regions.len())
            .field("visible", &visible)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl<K, B: Default> Default for RegionIndexGeneric<K, B> {
    fn default() -> Self {
        Self::with_backend(B::default())
    }
}

impl<K, B: Default> RegionIndexGeneric<K, B> {
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K> RegionIndex<K> {
    /// Create an index backed by a uniform grid with its origin at (0, 0).
    pub fn with_uniform_grid(cell_w: f64, cell_h: f64) -> RegionIndexGeneric<K, UniformGrid> {
        RegionIndexGeneric::with_backend(UniformGrid::new(cell_w, cell_h, 0.0, 0.0))
    }

    /// Create an index backed by a uniform grid with an explicit origin.
    pub fn with_uniform_grid_with_origin(
        cell_w: f64,
        cell_h: f64,
        origin_x: f64,
        origin_y: f64,
    ) -> RegionIndexGeneric<K, UniformGrid> {
        RegionIndexGeneric::with_backend(UniformGrid::new(cell_w, cell_h, origin_x, origin_y))
    }
}

impl<K, B> RegionIndexGeneric<K, B> {
    /// Create an empty index around an explicit backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            regions: Vec::new(),
            positions: HashMap::new(),
            ranks: Vec::new(),
            backend,
        }
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True if the index holds no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// All regions in draw order, visible or not.
    ///
    /// The order is stable until the next call that changes the set or its order,
    /// so positions in this slice can be used as layer indices meanwhile.
    pub fn regions_for_draw(&self) -> &[Region<K>] {
        &self.regions
    }

    /// Region ids in draw order.
    pub fn draw_order(&self) -> impl Iterator<Item = &K> + '_ {
        self.regions.iter().map(Region::id)
    }
}

impl<K, B> RegionIndexGeneric<K, B>
where
    K: Clone + Eq + Hash + Debug,
    B: Backend,
{
    /// Look up a region by id.
    pub fn get(&self, id: &K) -> Option<&Region<K>> {
        self.positions.get(id).map(|&i| &self.regions[i])
    }

    /// Position of `id` in [`regions_for_draw`](Self::regions_for_draw). O(1).
    pub fn draw_index_of(&self, id: &K) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Replace the whole region set.
    ///
    /// Ids already in the index keep their relative draw order, ids seen for the
    /// first time are appended in the order supplied, and ids missing from
    /// `regions` are dropped.
    ///
    /// If two regions share an id, nothing changes and
    /// [`RegionIndexError::DuplicateRegionId`] is returned.
    pub fn upsert_regions(
        &mut self,
        regions: impl IntoIterator<Item = Region<K>>,
    ) -> Result<Damage, RegionIndexError<K>> {
        let incoming: Vec<Region<K>> = regions.into_iter().collect();
        let mut damage = Damage::default();

        // Target draw position of every incoming region.
        let targets = {
            let mut by_id: HashMap<&K, usize> = HashMap::with_capacity(incoming.len());
            for (i, r) in incoming.iter().enumerate() {
                if by_id.insert(r.id(), i).is_some() {
                    log::debug!("rejecting region set: duplicate id {:?}", r.id());
                    return Err(RegionIndexError::DuplicateRegionId(r.id().clone()));
                }
            }

            let mut targets = vec![usize::MAX; incoming.len()];
            let mut next = 0;
            for old in &self.regions {
                match by_id.get(old.id()) {
                    Some(&i) => {
                        let new = &incoming[i];
                        if !old.same_geometry(new) || old.flags() != new.flags() {
                            damage.push_changed(old.bounds(), new.bounds());
                        }
                        targets[i] = next;
                        next += 1;
                    }
                    None => damage.push_removed(old.bounds()),
                }
            }
            for (i, r) in incoming.iter().enumerate() {
                if targets[i] == usize::MAX {
                    damage.push_added(r.bounds());
                    targets[i] = next;
                    next += 1;
                }
            }
            targets
        };

        let mut placed: Vec<(usize, Region<K>)> = targets.into_iter().zip(incoming).collect();
        placed.sort_unstable_by_key(|(pos, _)| *pos);
        self.regions = placed.into_iter().map(|(_, r)| r).collect();
        self.rebuild();

        log::debug!(
            "region set replaced: {} regions ({} added, {} removed, {} changed)",
            self.regions.len(),
            damage.added.len(),
            damage.removed.len(),
            damage.changed.len()
        );
        Ok(damage)
    }

    /// Append a region at the end of the draw order.
    ///
    /// Fails with [`RegionIndexError::DuplicateRegionId`] if the id is taken.
    pub fn insert_region(&mut self, region: Region<K>) -> Result<Damage, RegionIndexError<K>> {
        if self.positions.contains_key(region.id()) {
            log::debug!("rejecting insert: duplicate id {:?}", region.id());
            return Err(RegionIndexError::DuplicateRegionId(region.id().clone()));
        }
        let mut damage = Damage::default();
        damage.push_added(region.bounds());
        self.append(region);
        self.rebuild_ranks();
        Ok(damage)
    }

    /// Replace the region with the same id in place, keeping its draw position,
    /// or append it if the id is new.
    pub fn upsert_region(&mut self, region: Region<K>) -> Damage {
        let mut damage = Damage::default();
        match self.positions.get(region.id()).copied() {
            Some(slot) => {
                let old = core::mem::replace(&mut self.regions[slot], region);
                let new = &self.regions[slot];
                if !old.same_geometry(new) || old.flags() != new.flags() {
                    damage.push_changed(old.bounds(), new.bounds());
                }
                self.backend.update(slot, new.bounds());
            }
            None => {
                damage.push_added(region.bounds());
                self.append(region);
            }
        }
        self.rebuild_ranks();
        damage
    }

    /// Remove a region, returning it. Later regions move up one draw position.
    pub fn remove_region(&mut self, id: &K) -> Option<Region<K>> {
        let slot = self.positions.get(id).copied()?;
        let region = self.regions.remove(slot);
        self.rebuild();
        Some(region)
    }

    /// Remove every region.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.positions.clear();
        self.ranks.clear();
        self.backend.clear();
    }

    /// Show or hide a region. Returns true if the flag changed.
    pub fn set_visible(&mut self, id: &K, visible: bool) -> bool {
        let Some(&slot) = self.positions.get(id) else {
            return false;
        };
        let region = &mut self.regions[slot];
        if region.is_visible() == visible {
            return false;
        }
        region.set_visible(visible);
        true
    }

    /// Replace a region's flags. Returns true if they changed.
    pub fn set_flags(&mut self, id: &K, flags: RegionFlags) -> bool {
        let Some(&slot) = self.positions.get(id) else {
            return false;
        };
        let region = &mut self.regions[slot];
        if region.flags() == flags {
            return false;
        }
        region.set_flags(flags);
        true
    }

    /// Rename a region. Returns false if the id is unknown.
    pub fn rename(&mut self, id: &K, name: impl Into<alloc::string::String>) -> bool {
        match self.positions.get(id) {
            Some(&slot) => {
                self.regions[slot].set_name(name);
                true
            }
            None => false,
        }
    }

    /// Reorder regions for drawing. `order` must list every current id exactly once.
    ///
    /// On error the index is unchanged.
    pub fn set_draw_order(&mut self, order: &[K]) -> Result<(), RegionIndexError<K>> {
        if order.len() != self.regions.len() {
            return Err(RegionIndexError::DrawOrderMismatch {
                expected: self.regions.len(),
                found: order.len(),
            });
        }
        let mut targets = vec![usize::MAX; self.regions.len()];
        for (pos, id) in order.iter().enumerate() {
            let slot = *self
                .positions
                .get(id)
                .ok_or_else(|| RegionIndexError::UnknownRegion(id.clone()))?;
            if targets[slot] != usize::MAX {
                return Err(RegionIndexError::DuplicateRegionId(id.clone()));
            }
            targets[slot] = pos;
        }
        let regions = core::mem::take(&mut self.regions);
        let mut placed: Vec<(usize, Region<K>)> = targets.into_iter().zip(regions).collect();
        placed.sort_unstable_by_key(|(pos, _)| *pos);
        self.regions = placed.into_iter().map(|(_, r)| r).collect();
        self.rebuild();
        Ok(())
    }

    /// Id of the most specific region containing `pt`, if any.
    ///
    /// When regions overlap, the one with the fewest points wins; equal point
    /// counts go to the earlier region in draw order. With `visible_only`,
    /// hidden regions are skipped. Picking flags are ignored here; see
    /// [`hit_test_point`](Self::hit_test_point) for full filtering.
    pub fn find_region_at_point(&self, pt: Point, visible_only: bool) -> Option<&K> {
        let filter = QueryFilter {
            visible_only,
            pickable_only: false,
        };
        self.pick(pt, filter).map(|slot| self.regions[slot].id())
    }

    /// Hit test a point, returning the winning id and its draw index.
    ///
    /// Same ordering as [`find_region_at_point`](Self::find_region_at_point).
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<RegionHit<K>> {
        self.pick(pt, filter).map(|slot| RegionHit {
            id: self.regions[slot].id().clone(),
            draw_index: slot,
        })
    }

    /// Every region containing `pt`, most specific first.
    pub fn regions_at_point(&self, pt: Point, filter: QueryFilter) -> Vec<&K> {
        self.candidates(pt, filter)
            .into_iter()
            .filter(|&slot| self.regions[slot].contains(pt))
            .map(|slot| self.regions[slot].id())
            .collect()
    }

    /// Regions whose bounds intersect `rect`, in draw order.
    pub fn regions_intersecting(
        &self,
        rect: BoundingBox,
        filter: QueryFilter,
    ) -> impl Iterator<Item = &Region<K>> + '_ {
        let mut slots = Vec::new();
        self.backend.query_rect(rect, &mut slots);
        slots.sort_unstable();
        slots
            .into_iter()
            .map(|slot| &self.regions[slot])
            .filter(move |r| filter.accepts(r.flags()))
    }

    // --- internals ---

    fn pick(&self, pt: Point, filter: QueryFilter) -> Option<usize> {
        self.candidates(pt, filter)
            .into_iter()
            .find(|&slot| self.regions[slot].contains(pt))
    }

    /// Slots whose bounds contain `pt` and that pass `filter`, by specificity rank.
    fn candidates(&self, pt: Point, filter: QueryFilter) -> Vec<usize> {
        let mut slots = Vec::new();
        self.backend.query_point(pt, &mut slots);
        slots.retain(|&slot| filter.accepts(self.regions[slot].flags()));
        slots.sort_unstable_by_key(|&slot| self.ranks[slot]);
        slots
    }

    fn append(&mut self, region: Region<K>) {
        let slot = self.regions.len();
        self.positions.insert(region.id().clone(), slot);
        self.backend.insert(slot, region.bounds());
        self.regions.push(region);
    }

    fn rebuild(&mut self) {
        self.positions.clear();
        self.backend.clear();
        for (slot, region) in self.regions.iter().enumerate() {
            self.positions.insert(region.id().clone(), slot);
            self.backend.insert(slot, region.bounds());
        }
        self.rebuild_ranks();
    }

    fn rebuild_ranks(&mut self) {
        let mut order: Vec<usize> = (0..self.regions.len()).collect();
        // Stable, so equal point counts stay in draw order.
        order.sort_by_key(|&slot| self.regions[slot].point_count());
        self.ranks.clear();
        self.ranks.resize(order.len(), 0);
        for (rank, slot) in order.into_iter().enumerate() {
            self.ranks[slot] = rank;
        }
    }
}
