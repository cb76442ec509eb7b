// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over a region index.
//!
//! Sweep a pointer across two overlapping regions and print only the moves that
//! change the hovered region, then edit the set under a still pointer.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_roi_demos --example roi_hover`

use kurbo::Point;
use understory_roi_geometry::PolygonWithHoles;
use understory_roi_hover::{HitTester, HoverChange, HoverEvent};
use understory_roi_index::{Region, RegionIndex};

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> PolygonWithHoles {
    PolygonWithHoles::from_outer([(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut idx = RegionIndex::new();
    idx.upsert_regions([
        Region::new(1_u32, "gland", [rect(0.0, 0.0, 100.0, 40.0)], 900)?,
        Region::new(2_u32, "lumen", [rect(40.0, 10.0, 60.0, 30.0)], 60)?,
    ])?;

    let mut hover = HitTester::new();
    let mut changes = Vec::new();
    println!("== Sweep ==");
    for step in 0..=24_u8 {
        let pt = Point::new(f64::from(step) * 5.0, 20.0);
        if let Some(change) = hover.pointer_move(&idx, pt) {
            let events: Vec<HoverEvent<u32>> = change.events().collect();
            println!("  x={:>5}: {:?} -> {:?}  {events:?}", pt.x, change.old, change.new);
            changes.push(change);
        }
    }
    // Enter gland, enter lumen, back to gland, leave everything.
    assert_eq!(changes.len(), 4);
    assert_eq!(changes[1], HoverChange { old: Some(1), new: Some(2) });

    println!("== Edit under a still pointer ==");
    let _ = hover.pointer_move(&idx, Point::new(50.0, 20.0));
    idx.set_visible(&2, false);
    let change = hover.revalidate(&idx);
    println!("  lumen hidden: {change:?}");
    assert_eq!(change, Some(HoverChange { old: Some(2), new: Some(1) }));

    let _ = idx.remove_region(&1);
    let change = hover.revalidate(&idx);
    println!("  gland removed: {change:?}");
    assert_eq!(hover.current(), None);
    Ok(())
}
