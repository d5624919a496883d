//! End-to-End Generation Stages.
//!
//! The pipeline turns a device model into host outputs in three stages:
//!
//! 1. **Regions**: one raw span per peripheral (excluding the synthetic
//!    `_INTERRUPTS` entry), reduced to a minimal disjoint cover, one memory
//!    block per reduced region.
//! 2. **Layouts**: one [`PeripheralLayout`] per eligible peripheral,
//!    collected as an explicit result per item.
//! 3. **Apply**: per layout, register the structure type at the peripheral
//!    base and label the base inside the configured namespace.
//!
//! Every backend interaction is isolated per item: a failed block, structure,
//! or label is logged and counted, and the run continues with the remaining
//! items.

use crate::common::GenError;
use crate::config::Config;
use crate::host::{HostBackend, MemoryBlockSpec, StructureType};
use crate::map::layout::{build_layout, PeripheralLayout};
use crate::map::regions::{reduce, MemoryRegion};
use crate::model::Device;

/// Synthetic peripheral carrying interrupt vector data in some
/// descriptions. It maps no real address space and is excluded from region
/// generation.
const INTERRUPTS_PERIPHERAL: &str = "_INTERRUPTS";

/// Counters describing what a generation run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Memory blocks created.
    pub blocks_created: usize,
    /// Memory blocks the backend rejected.
    pub blocks_failed: usize,
    /// Peripheral structures registered and labeled.
    pub structures_created: usize,
    /// Peripherals skipped as ineligible (no registers or no address
    /// block).
    pub peripherals_skipped: usize,
    /// Peripherals whose structure or label the backend rejected.
    pub peripherals_failed: usize,
}

/// Builds the pre-reduction region list for a device.
///
/// One span per peripheral: `base .. base + offset + size` when an address
/// block is declared, else `base .. base + sum of register byte lengths`.
/// Peripherals named `_INTERRUPTS` are excluded, and peripherals with
/// neither an address block nor registers are skipped with a log line.
///
/// # Errors
///
/// [`GenError::MalformedRegion`] if a peripheral span has `end <= start`.
/// Region reduction is undefined over such spans, so they are rejected here
/// before [`reduce`] ever sees them.
pub fn peripheral_regions(
    device: &Device,
    default_size_bits: u32,
    trace: bool,
) -> Result<Vec<MemoryRegion>, GenError> {
    let mut regions = Vec::new();

    for peripheral in &device.peripherals {
        if peripheral.name == INTERRUPTS_PERIPHERAL {
            if trace {
                println!("[Map] Skipping peripheral {}", peripheral.name);
            }
            continue;
        }

        let start = peripheral.base_address;
        let end = if let Some(block) = &peripheral.address_block {
            let length = block.offset + block.size;
            if trace {
                println!(
                    "[Map] {} addressBlock: {:#x}-{:#x} ({} bytes)",
                    peripheral.name,
                    start,
                    start + length,
                    length
                );
            }
            start + length
        } else if !peripheral.registers.is_empty() {
            let mut length = 0u64;
            for register in &peripheral.registers {
                let register_length =
                    u64::from(register.effective_size_bits(default_size_bits) / 8);
                if trace {
                    println!(
                        "[Map] {}.{}: {:#x}-{:#x} ({} bytes)",
                        peripheral.name,
                        register.name,
                        start + register.address_offset,
                        start + register.address_offset + register_length,
                        register_length
                    );
                }
                length += register_length;
            }
            start + length
        } else {
            println!(
                "[Map] Skipping {}: no address block and no registers",
                peripheral.name
            );
            continue;
        };

        if end <= start {
            return Err(GenError::MalformedRegion {
                name: peripheral.name.clone(),
                start,
                end,
            });
        }

        regions.push(MemoryRegion::new(peripheral.name.clone(), start, end));
    }

    Ok(regions)
}

/// Computes the layout of every peripheral, one result per item.
///
/// Ineligible peripherals (no registers, no address block) yield an `Err`
/// entry; one peripheral's failure never affects the others.
pub fn build_layouts(
    device: &Device,
    default_size_bits: u32,
) -> Vec<Result<PeripheralLayout, GenError>> {
    device
        .peripherals
        .iter()
        .map(|peripheral| build_layout(peripheral, default_size_bits))
        .collect()
}

/// Registers one peripheral's structure type and base label with the
/// backend.
fn apply_layout(
    layout: &PeripheralLayout,
    namespace: &str,
    backend: &mut dyn HostBackend,
) -> Result<(), GenError> {
    let structure = StructureType::from_layout(layout);
    backend.define_structure(layout.base_address, structure)?;
    backend.create_label(layout.base_address, &layout.name, namespace)?;
    Ok(())
}

/// Runs the full generation pipeline against a host backend.
///
/// Creates one memory block per reduced region, then one structure and
/// label per eligible peripheral. Backend failures are logged and counted
/// per item without halting the batch.
///
/// # Errors
///
/// [`GenError::MalformedRegion`] if the device declares a peripheral span
/// with `end <= start`; nothing is applied to the backend in that case.
pub fn run(
    device: &Device,
    config: &Config,
    backend: &mut dyn HostBackend,
) -> Result<RunSummary, GenError> {
    let default_size_bits = resolve_default_size(device, config);
    let mut summary = RunSummary::default();

    let regions = peripheral_regions(device, default_size_bits, config.general.trace_regions)?;
    let regions = reduce(regions);

    println!("[Host] Creating {} memory blocks", regions.len());
    for region in &regions {
        let block = MemoryBlockSpec::for_region(
            &region.name,
            region.start,
            region.length(),
            &config.host.block_comment,
        );
        match backend.create_memory_block(&block) {
            Ok(()) => summary.blocks_created += 1,
            Err(e) => {
                println!("[Host] Failed to create memory block {}: {}", region.name, e);
                summary.blocks_failed += 1;
            }
        }
    }

    println!("[Host] Generating peripheral structures");
    for result in build_layouts(device, default_size_bits) {
        match result {
            Ok(layout) => match apply_layout(&layout, &config.host.namespace, backend) {
                Ok(()) => summary.structures_created += 1,
                Err(e) => {
                    println!("[Host] Failed to generate {}: {}", layout.name, e);
                    summary.peripherals_failed += 1;
                }
            },
            Err(e @ (GenError::NoRegisters { .. } | GenError::NoAddressBlock { .. })) => {
                println!("[Host] Skipping peripheral: {}", e);
                summary.peripherals_skipped += 1;
            }
            Err(e) => {
                println!("[Host] Failed to generate peripheral: {}", e);
                summary.peripherals_failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Resolves the default register width for a device.
///
/// The description's declared default wins; the config override applies
/// when the description omits one; 32 bits is the final fallback.
pub fn resolve_default_size(device: &Device, config: &Config) -> u32 {
    match (
        device.default_register_size_bits,
        config.general.default_register_size_bits,
    ) {
        (Some(bits), _) => bits,
        (None, Some(bits)) => bits,
        (None, None) => device.default_register_size(),
    }
}
