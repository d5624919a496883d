//! Memory Region Reduction.
//!
//! Some device descriptions declare overlapping peripherals, so the raw
//! per-peripheral spans cannot be turned into host memory blocks directly.
//! This module merges a list of labeled address ranges into the minimal set
//! of disjoint regions covering the same address space.
//!
//! The merge rule is inclusive: two regions that merely touch at an endpoint
//! (`a.end == b.start`) are merged as well, so zero-gap adjacent peripherals
//! end up in a single region.

use serde::Serialize;

/// A contiguous span of physical addresses backing one or more peripherals.
///
/// The range is half-open, `[start, end)`. `end >= start` must hold;
/// callers reject malformed spans before reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryRegion {
    /// Region label. After reduction this is the underscore-joined
    /// concatenation of every peripheral name the region absorbed, in merge
    /// order. Treat it as an opaque debug string.
    pub name: String,
    /// First address covered by the region.
    pub start: u64,
    /// First address past the region.
    pub end: u64,
}

impl MemoryRegion {
    /// Creates a new region spanning `[start, end)`.
    pub fn new(name: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Returns the region length in bytes.
    pub fn length(&self) -> u64 {
        self.end - self.start
    }

    /// Returns `true` if `other` overlaps or touches this region.
    pub fn overlaps(&self, other: &MemoryRegion) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}

/// Reduces a list of possibly-overlapping regions to a minimal disjoint
/// cover.
///
/// Every address covered by any input region is covered by exactly one
/// output region, and no two output regions overlap or touch. Each output
/// region's name is the `_`-joined concatenation of the names it absorbed.
///
/// Implemented as a sort-by-start linear sweep: after sorting, a region can
/// only merge with the region currently at the tail of the output, so one
/// pass suffices. A region whose start lies at or below the tail's end
/// overlaps or touches it and is folded in.
///
/// Behavior on a region with `end <= start` is undefined; callers must
/// reject such input first.
pub fn reduce(mut regions: Vec<MemoryRegion>) -> Vec<MemoryRegion> {
    regions.sort_by_key(|r| r.start);

    let mut reduced: Vec<MemoryRegion> = Vec::with_capacity(regions.len());
    for region in regions {
        match reduced.last_mut() {
            Some(tail) if region.start <= tail.end => {
                tail.end = tail.end.max(region.end);
                tail.name.push('_');
                tail.name.push_str(&region.name);
            }
            _ => reduced.push(region),
        }
    }
    reduced
}
