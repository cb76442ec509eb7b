// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different broad-phase strategies.
//!
//! - `flatvec`: flat vector with linear scans. Right for the tens to low hundreds
//!   of regions an interactive view usually holds.
//! - `grid`: uniform grid keyed by cell. Worth it when regions are many and
//!   small relative to the view.

pub mod flatvec;
pub mod grid;

pub use flatvec::FlatVec;
pub use grid::UniformGrid;
