// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region index basics.
//!
//! Build a few overlapping regions (one with a hole), query points, toggle
//! visibility, and replace the region set.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_roi_demos --example roi_basics`

use kurbo::Point;
use understory_roi_geometry::PolygonWithHoles;
use understory_roi_index::{QueryFilter, Region, RegionIndex};

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> [(f64, f64); 4] {
    [(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let tissue = PolygonWithHoles::new(
        square(0.0, 0.0, 100.0, 100.0),
        [square(60.0, 60.0, 80.0, 80.0)],
    );
    let tumor = PolygonWithHoles::from_outer(square(20.0, 20.0, 50.0, 50.0));
    let margin = PolygonWithHoles::from_outer(square(10.0, 10.0, 60.0, 60.0));

    let mut idx = RegionIndex::new();
    let damage = idx.upsert_regions([
        Region::new("tissue", "Tissue", [tissue], 5000)?,
        Region::new("tumor", "Tumor core", [tumor], 120)?,
        Region::new("margin", "Margin", [margin], 400)?,
    ])?;
    println!("== Initial set ==\n  damage union: {:?}", damage.union());
    for (i, r) in idx.regions_for_draw().iter().enumerate() {
        println!(
            "  #{i} {:<7} {:<11} points={}",
            r.id(),
            r.name(),
            r.point_count()
        );
    }

    // Smallest containing region wins; the hole belongs to nobody.
    let probes = [(30.0, 30.0), (15.0, 15.0), (90.0, 5.0), (70.0, 70.0), (100.0, 50.0)];
    println!("== Point queries ==");
    for (x, y) in probes {
        let hit = idx.find_region_at_point(Point::new(x, y), true);
        let all = idx.regions_at_point(Point::new(x, y), QueryFilter::ALL);
        println!("  ({x:>5}, {y:>5}) -> {hit:?}  (containing: {all:?})");
    }
    assert_eq!(idx.find_region_at_point(Point::new(30.0, 30.0), true), Some(&"tumor"));
    assert_eq!(idx.find_region_at_point(Point::new(70.0, 70.0), true), None);

    // Hidden regions drop out of visible-only queries.
    idx.set_visible(&"tumor", false);
    log::info!("tumor hidden");
    assert_eq!(idx.find_region_at_point(Point::new(30.0, 30.0), true), Some(&"margin"));
    assert_eq!(idx.find_region_at_point(Point::new(30.0, 30.0), false), Some(&"tumor"));

    // Replacing the set keeps survivors in order and appends newcomers.
    let stroma = PolygonWithHoles::from_outer(square(70.0, 0.0, 100.0, 30.0));
    let tissue = PolygonWithHoles::from_outer(square(0.0, 0.0, 100.0, 100.0));
    let tumor = PolygonWithHoles::from_outer(square(20.0, 20.0, 50.0, 50.0));
    let damage = idx.upsert_regions([
        Region::new("stroma", "Stroma", [stroma], 300)?,
        Region::new("tissue", "Tissue", [tissue], 5000)?,
        Region::new("tumor", "Tumor core", [tumor], 120)?,
    ])?;
    let order: Vec<_> = idx.draw_order().collect();
    println!("== After replace ==\n  order: {order:?}\n  damage: {damage:?}");
    assert_eq!(order, [&"tissue", &"tumor", &"stroma"]);
    Ok(())
}
