//! Error Types.
//!
//! Three classes of failure exist in the generator:
//!
//! * [`TargetError`]: the device description targets an unsupported CPU; the
//!   whole run is rejected before any processing starts.
//! * [`GenError`]: a single peripheral (or region) could not be processed;
//!   the run continues with the remaining peripherals.
//! * [`HostError`]: a host backend refused an output item; wrapped into a
//!   [`GenError`] and isolated per peripheral.

use thiserror::Error;

/// Fatal rejection of the target described by the device model.
///
/// Raised by the startup eligibility gate before any core processing. Only
/// little-endian Cortex-M targets (or descriptions that leave CPU family or
/// endianness unspecified) are supported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    /// The CPU family is not a Cortex-M variant.
    #[error("unsupported CPU family '{0}' (only Cortex-M is supported)")]
    UnsupportedCpu(String),

    /// The CPU endianness is not little-endian.
    #[error("unsupported endianness '{0}' (only little endian is supported)")]
    UnsupportedEndian(String),
}

/// Recoverable per-item generation failure.
///
/// One peripheral's failure never aborts the batch; callers collect these
/// per item, report them, and continue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    /// The peripheral declares no registers, so it has no computable
    /// footprint and no structure is generated for it.
    #[error("peripheral '{name}' has no registers")]
    NoRegisters { name: String },

    /// The peripheral declares no address block. The block's presence gates
    /// structure generation (it is never used for sizing).
    #[error("peripheral '{name}' has no address block")]
    NoAddressBlock { name: String },

    /// A peripheral span with `end <= start` was produced; such input is
    /// undefined for region reduction and is rejected before it runs.
    #[error("peripheral '{name}' spans a malformed region {start:#x}..{end:#x}")]
    MalformedRegion { name: String, start: u64, end: u64 },

    /// A host backend rejected an output item.
    #[error("host backend failure: {0}")]
    Host(#[from] HostError),
}

/// Failure reported by a host backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// A memory block could not be created (e.g. it collides with an
    /// existing block in the host program).
    #[error("memory block '{name}' conflicts with an existing block")]
    BlockConflict { name: String },

    /// A structure type could not be registered under its name.
    #[error("structure type '{name}' conflicts with an existing type")]
    StructureConflict { name: String },

    /// A label could not be placed at the peripheral's base address.
    #[error("label '{name}' could not be created")]
    LabelConflict { name: String },
}
