// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_roi_hover --heading-base-level=0

//! Understory ROI Hover: pointer tracking over a region index.
//!
//! A [`HitTester`] resolves pointer positions through
//! [`RegionIndexGeneric::hit_test_point`](understory_roi_index::RegionIndexGeneric::hit_test_point)
//! and remembers the answer. It reports a [`HoverChange`] only when the hovered
//! region id actually changes, so callers can redraw highlight overlays without
//! diffing themselves. Motion inside one region, or outside all regions, is silent.
//!
//! The tester holds no reference to the index. Pass the index to each call; after
//! editing the region set, call [`HitTester::revalidate`] to re-run the last query.
//!
//! See the [`hover`] module for an example.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod hover;

pub use hover::{HitTester, HoverChange, HoverEvent, HoverState};
