// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid backend for many small regions.
//!
//! Lay out a field of small cell regions, index them with both backends, and
//! check that every probe resolves identically.
//!
//! Run:
//! - `cargo run -p understory_roi_demos --example roi_grid_backend`

use kurbo::Point;
use understory_roi_geometry::{BoundingBox, PolygonWithHoles};
use understory_roi_index::{QueryFilter, Region, RegionIndex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let n = 40_u32;
    let cell = 12.0;
    let mut regions = Vec::new();
    for y in 0..n {
        for x in 0..n {
            let (x0, y0) = (f64::from(x) * cell, f64::from(y) * cell);
            let diamond = [
                (x0 + cell * 0.5, y0),
                (x0 + cell, y0 + cell * 0.5),
                (x0 + cell * 0.5, y0 + cell),
                (x0, y0 + cell * 0.5),
            ];
            let id = y * n + x;
            let poly = PolygonWithHoles::from_outer(diamond);
            regions.push(Region::new(id, format!("cell {x},{y}"), [poly], 1)?);
        }
    }

    let mut flat = RegionIndex::new();
    flat.upsert_regions(regions.clone())?;
    let mut grid = RegionIndex::with_uniform_grid(24.0, 24.0);
    grid.upsert_regions(regions)?;
    println!("flat: {flat:?}\ngrid: {grid:?}");

    let mut hits = 0;
    for i in 0..2000_u32 {
        let p = Point::new(f64::from(i % 97) * 4.9 + 0.3, f64::from(i / 97) * 23.3 + 0.7);
        let a = flat.hit_test_point(p, QueryFilter::INTERACTIVE);
        let b = grid.hit_test_point(p, QueryFilter::INTERACTIVE);
        assert_eq!(a, b, "backends disagree at {p:?}");
        hits += usize::from(a.is_some());
    }
    println!("{hits} of 2000 probes hit a region");

    let window = BoundingBox::new(100.0, 100.0, 160.0, 160.0);
    let visible: Vec<_> = grid
        .regions_intersecting(window, QueryFilter::ALL)
        .map(|r| r.name())
        .collect();
    log::info!("{} regions intersect {window:?}", visible.len());
    println!("first in window: {:?}", visible.first());
    Ok(())
}
