// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coarse repaint damage returned by region-set updates.

use alloc::vec::Vec;

use kurbo::Rect;
use understory_roi_geometry::BoundingBox;

/// Damage summary returned by region-set updates.
///
/// Entries are region bounds, which is enough to bound a repaint. Regions with
/// empty bounds (no vertices at all) are not reported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// Bounds of regions that were added.
    pub added: Vec<BoundingBox>,
    /// Bounds of regions that were removed.
    pub removed: Vec<BoundingBox>,
    /// Regions kept under the same id whose geometry or flags changed: (old, new).
    pub changed: Vec<(BoundingBox, BoundingBox)>,
}

impl Damage {
    /// True if no damage entries recorded.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Union of all boxes affected. Returns `None` if nothing was damaged.
    pub fn union(&self) -> Option<BoundingBox> {
        let u = self
            .boxes()
            .fold(BoundingBox::EMPTY, |acc, b| acc.union(&b));
        (!u.is_empty()).then_some(u)
    }

    /// All affected boxes as Kurbo rectangles, for renderers that track dirty rects.
    pub fn dirty_rects(&self) -> Vec<Rect> {
        self.boxes().map(|b| b.to_rect()).collect()
    }

    pub(crate) fn push_added(&mut self, b: BoundingBox) {
        if !b.is_empty() {
            self.added.push(b);
        }
    }

    pub(crate) fn push_removed(&mut self, b: BoundingBox) {
        if !b.is_empty() {
            self.removed.push(b);
        }
    }

    pub(crate) fn push_changed(&mut self, old: BoundingBox, new: BoundingBox) {
        if !(old.is_empty() && new.is_empty()) {
            self.changed.push((old, new));
        }
    }

    fn boxes(&self) -> impl Iterator<Item = BoundingBox> + '_ {
        self.added
            .iter()
            .copied()
            .chain(self.removed.iter().copied())
            .chain(self.changed.iter().flat_map(|(a, b)| [*a, *b]))
            .filter(|b| !b.is_empty())
    }
}
