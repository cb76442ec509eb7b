// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use understory_roi_geometry::BoundingBox;

use crate::backend::Backend;

/// Flat vector backend with linear scans.
#[derive(Clone, Default)]
pub struct FlatVec {
    bounds: Vec<BoundingBox>,
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("slots", &self.bounds.len())
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn insert(&mut self, slot: usize, bounds: BoundingBox) {
        if self.bounds.len() <= slot {
            self.bounds.resize(slot + 1, BoundingBox::EMPTY);
        }
        self.bounds[slot] = bounds;
    }

    fn update(&mut self, slot: usize, bounds: BoundingBox) {
        self.insert(slot, bounds);
    }

    fn clear(&mut self) {
        self.bounds.clear();
    }

    fn query_point(&self, pt: Point, out: &mut Vec<usize>) {
        out.extend(
            self.bounds
                .iter()
                .enumerate()
                .filter(|(_, b)| b.contains_point(pt))
                .map(|(i, _)| i),
        );
    }

    fn query_rect(&self, rect: BoundingBox, out: &mut Vec<usize>) {
        out.extend(
            self.bounds
                .iter()
                .enumerate()
                .filter(|(_, b)| b.intersects(&rect))
                .map(|(i, _)| i),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_and_rect_queries() {
        let mut b = FlatVec::default();
        b.insert(0, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        b.insert(2, BoundingBox::new(5.0, 5.0, 15.0, 15.0));

        let mut out = Vec::new();
        b.query_point(Point::new(6.0, 6.0), &mut out);
        assert_eq!(out, [0, 2]);

        out.clear();
        b.query_point(Point::new(12.0, 12.0), &mut out);
        assert_eq!(out, [2]);

        // Slot 1 was never inserted; its placeholder box matches nothing.
        out.clear();
        b.query_rect(BoundingBox::new(-100.0, -100.0, 100.0, 100.0), &mut out);
        assert_eq!(out, [0, 2]);

        b.update(0, BoundingBox::new(20.0, 20.0, 30.0, 30.0));
        out.clear();
        b.query_point(Point::new(6.0, 6.0), &mut out);
        assert_eq!(out, [2]);
    }
}
