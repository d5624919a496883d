//! JSON Report Backend.
//!
//! The crate's own [`HostBackend`] implementation. Instead of talking to a
//! live workbench it collects every output item into a [`Report`] that the
//! CLI serializes to JSON, suitable for import by external tooling or for
//! inspection.

use super::structure::StructureType;
use super::traits::{HostBackend, MemoryBlockSpec};
use crate::common::HostError;
use serde::Serialize;

/// A structure type registered at a base address.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredStructure {
    /// Address the structure was applied at.
    pub base_address: u64,
    /// The structure type itself.
    pub structure: StructureType,
}

/// A label placed at an address inside a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Labeled address.
    pub address: u64,
    /// Label text, the peripheral name.
    pub name: String,
    /// Namespace the label lives in.
    pub namespace: String,
}

/// Everything a generation run produced.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// Backing memory blocks, one per reduced region.
    pub memory_blocks: Vec<MemoryBlockSpec>,
    /// Registered peripheral structures.
    pub structures: Vec<RegisteredStructure>,
    /// Peripheral base address labels.
    pub labels: Vec<Label>,
}

/// Backend that records outputs into a [`Report`].
///
/// Never fails; every item is accepted.
#[derive(Debug, Default)]
pub struct ReportSink {
    report: Report,
}

impl ReportSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the sink and returns the collected report.
    pub fn into_report(self) -> Report {
        self.report
    }

    /// Returns the report collected so far.
    pub fn report(&self) -> &Report {
        &self.report
    }
}

impl HostBackend for ReportSink {
    fn create_memory_block(&mut self, block: &MemoryBlockSpec) -> Result<(), HostError> {
        self.report.memory_blocks.push(block.clone());
        Ok(())
    }

    fn define_structure(
        &mut self,
        base_address: u64,
        structure: StructureType,
    ) -> Result<(), HostError> {
        self.report.structures.push(RegisteredStructure {
            base_address,
            structure,
        });
        Ok(())
    }

    fn create_label(
        &mut self,
        address: u64,
        name: &str,
        namespace: &str,
    ) -> Result<(), HostError> {
        self.report.labels.push(Label {
            address,
            name: name.to_string(),
            namespace: namespace.to_string(),
        });
        Ok(())
    }
}
