//! Core Map Computations.
//!
//! This module contains the algorithmic heart of the generator: merging
//! overlapping peripheral address ranges into a minimal disjoint cover, and
//! computing a peripheral's byte footprint and per-register field placement
//! from heterogeneous, sometimes-missing size metadata.

/// Peripheral footprint and field placement computation.
pub mod layout;

/// Memory region reduction.
pub mod regions;

pub use layout::{
    build_field_placements, build_layout, peripheral_footprint, FieldPlacement, PeripheralLayout,
    WidthClass,
};
pub use regions::{reduce, MemoryRegion};
