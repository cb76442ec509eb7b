// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend keyed by integer cell coordinates.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use kurbo::Point;
use understory_roi_geometry::BoundingBox;

use crate::backend::Backend;

/// Boxes covering more cells than this are kept in a side list and scanned on
/// every query instead of being registered cell by cell.
const MAX_CELLS_PER_SLOT: i64 = 4096;

/// Uniform grid backend.
///
/// Each box is registered in every cell it touches. Coordinates map to cells by
/// floor-division of `(x - origin_x) / cell_w` and `(y - origin_y) / cell_h`, so
/// negative coordinates are fine. Choose a cell size so most regions fall
/// within a handful of cells.
#[derive(Clone)]
pub struct UniformGrid {
    cell_w: f64,
    cell_h: f64,
    origin_x: f64,
    origin_y: f64,
    bounds: Vec<BoundingBox>,
    cells: HashMap<(i64, i64), Vec<usize>>,
    oversized: Vec<usize>,
}

#[derive(Copy, Clone)]
struct CellRange {
    min: (i64, i64),
    max: (i64, i64),
}

impl CellRange {
    fn count(&self) -> i64 {
        let w = self.max.0.saturating_sub(self.min.0).saturating_add(1);
        let h = self.max.1.saturating_sub(self.min.1).saturating_add(1);
        w.saturating_mul(h)
    }

    fn keys(self) -> impl Iterator<Item = (i64, i64)> {
        (self.min.1..=self.max.1).flat_map(move |y| (self.min.0..=self.max.0).map(move |x| (x, y)))
    }
}

impl UniformGrid {
    /// Create a grid backend with the given cell size and origin offset.
    ///
    /// Cell sizes must be positive.
    pub fn new(cell_w: f64, cell_h: f64, origin_x: f64, origin_y: f64) -> Self {
        debug_assert!(cell_w > 0.0 && cell_h > 0.0, "cell sizes must be positive");
        Self {
            cell_w,
            cell_h,
            origin_x,
            origin_y,
            bounds: Vec::new(),
            cells: HashMap::new(),
            oversized: Vec::new(),
        }
    }

    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Saturating float-to-int casts are the intended cell mapping."
        )]
        let i = v as i64;
        if (i as f64) > v { i - 1 } else { i }
    }

    fn key_for(&self, x: f64, y: f64) -> (i64, i64) {
        (
            Self::floor_to_i64((x - self.origin_x) / self.cell_w),
            Self::floor_to_i64((y - self.origin_y) / self.cell_h),
        )
    }

    fn range_for(&self, b: &BoundingBox) -> Option<CellRange> {
        if b.is_empty() {
            return None;
        }
        Some(CellRange {
            min: self.key_for(b.min_x, b.min_y),
            max: self.key_for(b.max_x, b.max_y),
        })
    }

    fn place(&mut self, slot: usize) {
        let Some(range) = self.range_for(&self.bounds[slot]) else {
            return;
        };
        if range.count() > MAX_CELLS_PER_SLOT {
            self.oversized.push(slot);
            return;
        }
        for key in range.keys() {
            self.cells.entry(key).or_default().push(slot);
        }
    }

    fn unplace(&mut self, slot: usize) {
        let Some(range) = self.bounds.get(slot).and_then(|b| self.range_for(b)) else {
            return;
        };
        if range.count() > MAX_CELLS_PER_SLOT {
            self.oversized.retain(|&s| s != slot);
            return;
        }
        for key in range.keys() {
            if let Some(slots) = self.cells.get_mut(&key) {
                slots.retain(|&s| s != slot);
                if slots.is_empty() {
                    self.cells.remove(&key);
                }
            }
        }
    }
}

impl Backend for UniformGrid {
    fn insert(&mut self, slot: usize, bounds: BoundingBox) {
        if self.bounds.len() <= slot {
            self.bounds.resize(slot + 1, BoundingBox::EMPTY);
        } else {
            self.unplace(slot);
        }
        self.bounds[slot] = bounds;
        self.place(slot);
    }

    fn update(&mut self, slot: usize, bounds: BoundingBox) {
        self.insert(slot, bounds);
    }

    fn clear(&mut self) {
        self.bounds.clear();
        self.cells.clear();
        self.oversized.clear();
    }

    fn query_point(&self, pt: Point, out: &mut Vec<usize>) {
        let key = self.key_for(pt.x, pt.y);
        let in_cell = self.cells.get(&key).map(Vec::as_slice).unwrap_or_default();
        out.extend(
            in_cell
                .iter()
                .chain(&self.oversized)
                .copied()
                .filter(|&s| self.bounds[s].contains_point(pt)),
        );
    }

    fn query_rect(&self, rect: BoundingBox, out: &mut Vec<usize>) {
        let Some(range) = self.range_for(&rect) else {
            return;
        };
        let start = out.len();
        if range.count() > self.cells.len() as i64 {
            // Cheaper to walk the occupied cells than the covered ones.
            for (&(x, y), slots) in &self.cells {
                if (range.min.0..=range.max.0).contains(&x)
                    && (range.min.1..=range.max.1).contains(&y)
                {
                    out.extend_from_slice(slots);
                }
            }
        } else {
            for key in range.keys() {
                if let Some(slots) = self.cells.get(&key) {
                    out.extend_from_slice(slots);
                }
            }
        }
        out.extend_from_slice(&self.oversized);
        let found = &mut out[start..];
        found.sort_unstable();
        let mut kept = start;
        for i in start..out.len() {
            let s = out[i];
            if (kept == start || out[kept - 1] != s) && self.bounds[s].intersects(&rect) {
                out[kept] = s;
                kept += 1;
            }
        }
        out.truncate(kept);
    }
}

impl Debug for UniformGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UniformGrid")
            .field("cell_w", &self.cell_w)
            .field("cell_h", &self.cell_h)
            .field("origin_x", &self.origin_x)
            .field("origin_y", &self.origin_y)
            .field("slots", &self.bounds.len())
            .field("cells", &self.cells.len())
            .field("oversized", &self.oversized.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_on_cell_boundary_is_found_from_both_sides() {
        let mut g = UniformGrid::new(10.0, 10.0, 0.0, 0.0);
        g.insert(0, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        let mut out = Vec::new();
        g.query_point(Point::new(10.0, 10.0), &mut out);
        assert_eq!(out, [0]);
        out.clear();
        g.query_point(Point::new(10.5, 10.0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn negative_coordinates_with_origin() {
        let mut g = UniformGrid::new(8.0, 8.0, -64.0, -64.0);
        g.insert(3, BoundingBox::new(-20.0, -20.0, -10.0, -10.0));
        let mut out = Vec::new();
        g.query_point(Point::new(-15.0, -15.0), &mut out);
        assert_eq!(out, [3]);
    }

    #[test]
    fn update_moves_between_cells() {
        let mut g = UniformGrid::new(10.0, 10.0, 0.0, 0.0);
        g.insert(0, BoundingBox::new(0.0, 0.0, 5.0, 5.0));
        g.update(0, BoundingBox::new(50.0, 50.0, 55.0, 55.0));
        let mut out = Vec::new();
        g.query_point(Point::new(2.0, 2.0), &mut out);
        assert!(out.is_empty());
        g.query_point(Point::new(52.0, 52.0), &mut out);
        assert_eq!(out, [0]);
    }

    #[test]
    fn oversized_boxes_are_still_found() {
        let mut g = UniformGrid::new(1.0, 1.0, 0.0, 0.0);
        g.insert(0, BoundingBox::new(0.0, 0.0, 1000.0, 1000.0));
        g.insert(1, BoundingBox::new(1.0, 1.0, 2.0, 2.0));
        let mut out = Vec::new();
        g.query_point(Point::new(1.5, 1.5), &mut out);
        out.sort_unstable();
        assert_eq!(out, [0, 1]);
        out.clear();
        g.query_point(Point::new(900.0, 900.0), &mut out);
        assert_eq!(out, [0]);
    }

    #[test]
    fn rect_query_reports_each_slot_once() {
        let mut g = UniformGrid::new(10.0, 10.0, 0.0, 0.0);
        g.insert(0, BoundingBox::new(0.0, 0.0, 35.0, 35.0));
        g.insert(1, BoundingBox::new(100.0, 100.0, 110.0, 110.0));
        g.insert(2, BoundingBox::new(12.0, 12.0, 14.0, 14.0));
        let mut out = Vec::new();
        g.query_rect(BoundingBox::new(5.0, 5.0, 30.0, 30.0), &mut out);
        assert_eq!(out, [0, 2]);
        out.clear();
        g.query_rect(BoundingBox::new(-1.0e6, -1.0e6, 1.0e6, 1.0e6), &mut out);
        assert_eq!(out, [0, 1, 2]);
    }

    #[test]
    fn empty_boxes_are_ignored() {
        let mut g = UniformGrid::new(10.0, 10.0, 0.0, 0.0);
        g.insert(0, BoundingBox::EMPTY);
        let mut out = Vec::new();
        g.query_rect(BoundingBox::new(-1.0e6, -1.0e6, 1.0e6, 1.0e6), &mut out);
        assert!(out.is_empty());
    }
}
