//! SVD Memory-Map Generator Library.
//!
//! This crate takes a parsed hardware peripheral description (register
//! addresses, sizes, fields) and derives two artifacts for a
//! reverse-engineering workbench: a minimal set of non-overlapping physical
//! memory regions covering all peripherals, and a typed structure layout for
//! each peripheral mapping register byte offsets to sized fields.
//!
//! # Architecture
//!
//! * **Model**: intermediate device model produced by an external
//!   description parser (consumed as JSON).
//! * **Map**: the core transformations: region reduction and per-peripheral
//!   layout computation.
//! * **Host**: the interfaces the workbench side consumes: memory block
//!   specifications, structure types, and a pluggable backend.
//!
//! # Modules
//!
//! * `common`: Shared error types.
//! * `config`: Configuration loading and parsing.
//! * `gen`: Generation pipeline, model loader, and target gate.
//! * `host`: Host-facing output types and backends.
//! * `map`: Region reduction and peripheral layout computation.
//! * `model`: Parsed device model (boundary contract).

/// Shared error types.
///
/// Provides the error taxonomy used throughout the generator: fatal target
/// rejections, recoverable per-peripheral generation errors, and backend
/// failures.
pub mod common;

/// Configuration system for the generator.
///
/// Loads and parses TOML configuration files controlling tracing, the
/// default register width fallback, and host-side naming.
pub mod config;

/// Generation pipeline, model loader, and target eligibility gate.
///
/// Drives the end-to-end flow: load the device model, build and reduce the
/// region list, compute per-peripheral layouts, and apply everything to a
/// host backend with per-peripheral failure isolation.
pub mod gen;

/// Host-facing output types and backends.
///
/// Defines the memory block specification, the fixed-size structure type
/// with replace-at-offset semantics, the `HostBackend` trait, and a JSON
/// report backend.
pub mod host;

/// Core map computations.
///
/// Implements region reduction (minimal disjoint cover with an inclusive
/// touching-counts-as-overlap merge rule) and peripheral layout computation
/// (byte footprint and per-register field placement).
pub mod map;

/// Parsed device model.
///
/// The intermediate representation produced by an external description
/// parser: devices, peripherals, address blocks, and registers. Read-only
/// to the core.
pub mod model;
