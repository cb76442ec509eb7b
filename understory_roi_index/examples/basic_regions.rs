// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory ROI Index: replace the region set, read damage, and query.

use kurbo::Point;
use understory_roi_geometry::PolygonWithHoles;
use understory_roi_index::{Region, RegionIndex};

fn main() {
    let ring = |x0: f64, y0: f64, x1: f64, y1: f64| [(x0, y0), (x1, y0), (x1, y1), (x0, y1)];

    let mut idx: RegionIndex<u32> = RegionIndex::new();
    let outer = PolygonWithHoles::new(ring(0.0, 0.0, 10.0, 10.0), [ring(4.0, 4.0, 6.0, 6.0)]);
    let inner = PolygonWithHoles::from_outer(ring(1.0, 1.0, 3.0, 3.0));
    let dmg = idx
        .upsert_regions([
            Region::new(1, "outer", [outer], 100).unwrap(),
            Region::new(2, "inner", [inner], 4).unwrap(),
        ])
        .unwrap();
    println!("damage: added={:?}", dmg.added);

    // Shrink region 2.
    let smaller = PolygonWithHoles::from_outer(ring(1.0, 1.0, 2.0, 2.0));
    let dmg = idx.upsert_region(Region::new(2, "inner", [smaller], 2).unwrap());
    println!("damage: changed={:?}", dmg.changed);

    for (x, y) in [(1.5, 1.5), (2.5, 2.5), (5.0, 5.0)] {
        println!("hit at ({x},{y}): {:?}", idx.find_region_at_point(Point::new(x, y), true));
    }
}
