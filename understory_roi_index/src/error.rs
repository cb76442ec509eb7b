// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by region construction and region-set updates.
//!
//! Queries never fail; a miss is `None`. Degenerate geometry is not an error.

use core::fmt;

/// Error returned when a region is constructed without any polygon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidRegion<K> {
    /// Identifier of the rejected region.
    pub id: K,
}

impl<K: fmt::Debug> fmt::Display for InvalidRegion<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region {:?} has no polygons", self.id)
    }
}

impl<K: fmt::Debug> core::error::Error for InvalidRegion<K> {}

/// Error returned by region-set updates.
///
/// Whenever an update returns an error, the index is left exactly as it was
/// before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionIndexError<K> {
    /// Two regions in one update share this identifier, or an inserted region
    /// reuses an identifier already in the index.
    DuplicateRegionId(K),
    /// The identifier does not name a region in the index.
    UnknownRegion(K),
    /// A draw order did not list every region exactly once.
    DrawOrderMismatch {
        /// Number of regions in the index.
        expected: usize,
        /// Number of identifiers supplied.
        found: usize,
    },
}

impl<K: fmt::Debug> fmt::Display for RegionIndexError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRegionId(id) => write!(f, "duplicate region id {id:?}"),
            Self::UnknownRegion(id) => write!(f, "unknown region id {id:?}"),
            Self::DrawOrderMismatch { expected, found } => write!(
                f,
                "draw order lists {found} regions but the index holds {expected}"
            ),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for RegionIndexError<K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_id() {
        assert_eq!(
            RegionIndexError::DuplicateRegionId("X").to_string(),
            "duplicate region id \"X\""
        );
        assert_eq!(
            InvalidRegion { id: 7_u32 }.to_string(),
            "region 7 has no polygons"
        );
        assert_eq!(
            RegionIndexError::<u32>::DrawOrderMismatch {
                expected: 3,
                found: 2
            }
            .to_string(),
            "draw order lists 2 regions but the index holds 3"
        );
    }
}
