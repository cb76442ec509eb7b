// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regions: named, identified sets of polygons with a specificity weight.

use alloc::string::String;

use kurbo::Point;
use smallvec::SmallVec;
use understory_roi_geometry::{BoundingBox, PolygonWithHoles};

use crate::error::InvalidRegion;
use crate::types::RegionFlags;

/// Polygon storage for a region. Most regions are a single connected polygon.
pub type Polygons = SmallVec<[PolygonWithHoles; 1]>;

/// A region of interest.
///
/// Geometry and point count are fixed at construction. When a region is edited,
/// build a new `Region` with the same id and hand it to the index. The name and
/// flags may change freely.
#[derive(Clone, Debug)]
pub struct Region<K> {
    id: K,
    name: String,
    polygons: Polygons,
    point_count: usize,
    flags: RegionFlags,
    bounds: BoundingBox,
}

impl<K> Region<K> {
    /// Create a visible, pickable region.
    ///
    /// `point_count` is the number of indexed locations the region covers. It is
    /// used only to prefer more specific (smaller) regions when several overlap.
    ///
    /// Fails with [`InvalidRegion`] if `polygons` is empty. Degenerate polygons
    /// are accepted and simply never contain a point.
    pub fn new(
        id: K,
        name: impl Into<String>,
        polygons: impl IntoIterator<Item = PolygonWithHoles>,
        point_count: usize,
    ) -> Result<Self, InvalidRegion<K>> {
        let polygons: Polygons = polygons.into_iter().collect();
        if polygons.is_empty() {
            return Err(InvalidRegion { id });
        }
        let bounds = polygons
            .iter()
            .fold(BoundingBox::EMPTY, |acc, p| acc.union(&p.bounds()));
        Ok(Self {
            id,
            name: name.into(),
            polygons,
            point_count,
            flags: RegionFlags::default(),
            bounds,
        })
    }

    /// Replace the flags, builder style.
    #[must_use]
    pub fn with_flags(mut self, flags: RegionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the visibility flag, builder style.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.set_visible(visible);
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Polygons in the order supplied at construction. Never empty.
    pub fn polygons(&self) -> &[PolygonWithHoles] {
        &self.polygons
    }

    /// Specificity weight.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Visibility and picking flags.
    pub fn flags(&self) -> RegionFlags {
        self.flags
    }

    /// Whether [`RegionFlags::VISIBLE`] is set.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(RegionFlags::VISIBLE)
    }

    /// Whether [`RegionFlags::PICKABLE`] is set.
    pub fn is_pickable(&self) -> bool {
        self.flags.contains(RegionFlags::PICKABLE)
    }

    /// Union of the outer boxes of all polygons.
    ///
    /// [`BoundingBox::EMPTY`] if every polygon is without vertices.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Rename the region.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the flags.
    pub fn set_flags(&mut self, flags: RegionFlags) {
        self.flags = flags;
    }

    /// Show or hide the region.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(RegionFlags::VISIBLE, visible);
    }

    /// Whether any polygon of the region contains `pt`.
    pub fn contains(&self, pt: Point) -> bool {
        self.bounds.contains_point(pt) && self.polygons.iter().any(|p| p.contains(pt))
    }

    /// True if the two regions have the same polygons.
    pub(crate) fn same_geometry(&self, other: &Self) -> bool {
        self.polygons == other.polygons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn square(x: f64, y: f64, size: f64) -> PolygonWithHoles {
        PolygonWithHoles::from_outer([(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
    }

    #[test]
    fn empty_polygon_list_is_rejected() {
        let err = Region::new(3_u32, "empty", Vec::<PolygonWithHoles>::new(), 0).unwrap_err();
        assert_eq!(err, InvalidRegion { id: 3 });
    }

    #[test]
    fn bounds_cover_disconnected_parts() {
        let r = Region::new(1_u32, "split", [square(0.0, 0.0, 2.0), square(10.0, 5.0, 2.0)], 8)
            .unwrap();
        assert_eq!(r.bounds(), BoundingBox::new(0.0, 0.0, 12.0, 7.0));
        assert!(r.contains(Point::new(1.0, 1.0)));
        assert!(r.contains(Point::new(11.0, 6.0)));
        // Inside the combined box but between the parts.
        assert!(!r.contains(Point::new(6.0, 3.0)));
    }

    #[test]
    fn toggling_visibility_keeps_geometry() {
        let mut r = Region::new(1_u32, "a", [square(0.0, 0.0, 4.0)], 16).unwrap();
        let before = r.bounds();
        assert!(r.is_visible());
        r.set_visible(false);
        assert!(!r.is_visible());
        assert!(r.is_pickable());
        assert_eq!(r.bounds(), before);
        assert!(r.contains(Point::new(2.0, 2.0)));
    }

    #[test]
    fn degenerate_polygon_is_accepted() {
        let r = Region::new(
            9_u32,
            "mid-creation",
            [PolygonWithHoles::from_outer([(0.0, 0.0), (1.0, 1.0)])],
            2,
        )
        .unwrap();
        assert!(!r.contains(Point::new(0.5, 0.5)));
    }
}
