//! Host Backend Trait.
//!
//! This module defines the interface between the generation pipeline and
//! the workbench that consumes its outputs. It allows the pipeline to drive
//! disparate hosts (a real tool integration, the in-crate JSON report, a
//! test double) uniformly.

use super::structure::StructureType;
use crate::common::HostError;
use serde::Serialize;

/// Specification of one backing memory block.
///
/// One block is created per reduced region. Blocks are uninitialized,
/// readable, writable, non-executable, and volatile: they describe
/// memory-mapped peripheral space, not code or data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryBlockSpec {
    /// Block name, the reduced region's label.
    pub name: String,
    /// Start address of the block.
    pub start: u64,
    /// Block length in bytes.
    pub length: u64,
    /// Read permission.
    pub read: bool,
    /// Write permission.
    pub write: bool,
    /// Execute permission.
    pub execute: bool,
    /// Volatile flag; peripheral space must not be constant-folded by the
    /// host's analysis.
    pub is_volatile: bool,
    /// Tool-generated tag attached to the block.
    pub comment: String,
}

impl MemoryBlockSpec {
    /// Creates the block specification for a reduced region.
    pub fn for_region(name: &str, start: u64, length: u64, comment: &str) -> Self {
        Self {
            name: name.to_string(),
            start,
            length,
            read: true,
            write: true,
            execute: false,
            is_volatile: true,
            comment: comment.to_string(),
        }
    }
}

/// Trait for workbench backends consuming generator output.
///
/// Each method maps one output item into the host. Implementations report
/// failures per item; the pipeline isolates them and continues with the
/// remaining items.
pub trait HostBackend {
    /// Creates one backing memory block.
    fn create_memory_block(&mut self, block: &MemoryBlockSpec) -> Result<(), HostError>;

    /// Registers a structure type and applies it at a base address.
    fn define_structure(&mut self, base_address: u64, structure: StructureType)
        -> Result<(), HostError>;

    /// Labels an address with a peripheral name inside a namespace.
    fn create_label(&mut self, address: u64, name: &str, namespace: &str)
        -> Result<(), HostError>;
}
