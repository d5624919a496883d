//! Generation Pipeline.
//!
//! This module wires the core computations to their inputs and outputs: it
//! loads the device model, gates unsupported targets, builds and reduces the
//! region list, computes per-peripheral layouts, and applies everything to a
//! host backend.

/// Device model loading and the target eligibility gate.
pub mod loader;

/// End-to-end generation stages.
pub mod pipeline;

pub use pipeline::{build_layouts, peripheral_regions, run, RunSummary};
