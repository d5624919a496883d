//! Host-Facing Interfaces.
//!
//! Everything the generator hands to the reverse-engineering workbench goes
//! through this module: memory block specifications for backing storage,
//! fixed-size structure types for register layouts, and the [`HostBackend`]
//! trait that abstracts over the actual workbench API. The crate ships one
//! backend of its own, [`ReportSink`], which collects the outputs into a
//! serializable report.

/// JSON report backend.
pub mod report;

/// Fixed-size structure types with replace-at-offset semantics.
pub mod structure;

/// Backend trait and memory block specification.
pub mod traits;

pub use report::{Report, ReportSink};
pub use structure::{StructField, StructureType};
pub use traits::{HostBackend, MemoryBlockSpec};
