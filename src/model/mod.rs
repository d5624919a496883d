//! Parsed Device Model.
//!
//! This module defines the intermediate representation handed over by the
//! external description parser: a device with a CPU descriptor, a default
//! register width, and an ordered list of peripherals. The generator treats
//! the model as read-only input; it is deserialized once (from JSON) and
//! consumed by the map and gen stages.
//!
//! Register offsets within a peripheral are not guaranteed to be unique.
//! Overlapping registers are accepted as-is; resolution happens at structure
//! application (replace-at-offset).

use serde::Deserialize;

const FALLBACK_REGISTER_SIZE_BITS: u32 = 32;

/// A complete parsed device description.
#[derive(Debug, Deserialize)]
pub struct Device {
    /// Device name as declared by the description.
    pub name: String,

    /// CPU descriptor. Not all descriptions carry one.
    #[serde(default)]
    pub cpu: Option<CpuInfo>,

    /// Default register width in bits, applied to registers that do not
    /// declare an explicit size.
    #[serde(default)]
    pub default_register_size_bits: Option<u32>,

    /// Peripherals in description order.
    #[serde(default)]
    pub peripherals: Vec<Peripheral>,
}

impl Device {
    /// Returns the default register width in bits.
    ///
    /// Falls back to 32 bits when the description does not declare one.
    pub fn default_register_size(&self) -> u32 {
        self.default_register_size_bits
            .unwrap_or(FALLBACK_REGISTER_SIZE_BITS)
    }
}

/// CPU descriptor attached to a device description.
///
/// Both fields are optional; descriptions frequently omit them.
#[derive(Debug, Deserialize)]
pub struct CpuInfo {
    /// CPU family identifier, e.g. `CM0`, `CM4`.
    #[serde(default)]
    pub family: Option<String>,

    /// Endianness, `little` or `big`.
    #[serde(default)]
    pub endian: Option<String>,
}

/// One hardware register block mapped into the address space.
#[derive(Debug, Deserialize)]
pub struct Peripheral {
    /// Peripheral name, e.g. `GPIOA`.
    pub name: String,

    /// Base address of the peripheral in the physical address space.
    pub base_address: u64,

    /// Declared offset/size hint for the peripheral's span. Used only as an
    /// eligibility gate for structure generation and for region sizing,
    /// never for structure sizing.
    #[serde(default)]
    pub address_block: Option<AddressBlock>,

    /// Registers in description order. The order is significant: field
    /// placements are emitted in this order and later placements at a
    /// duplicate offset replace earlier ones.
    #[serde(default)]
    pub registers: Vec<Register>,
}

/// Declared address block of a peripheral.
#[derive(Debug, Deserialize)]
pub struct AddressBlock {
    /// Offset of the block relative to the peripheral base.
    pub offset: u64,

    /// Size of the block in bytes. Often far larger than the actual
    /// register span.
    pub size: u64,
}

/// A named, sized, offset-addressed unit within a peripheral.
#[derive(Debug, Deserialize)]
pub struct Register {
    /// Register name, e.g. `MODER`.
    pub name: String,

    /// Human-readable description, empty when the source omits it.
    #[serde(default)]
    pub description: String,

    /// Byte offset relative to the peripheral base address.
    pub address_offset: u64,

    /// Explicit register width in bits, if the description declares one.
    #[serde(default)]
    pub size_bits: Option<u32>,
}

impl Register {
    /// Returns the register's width in bits, falling back to the device
    /// default when no explicit size is declared.
    pub fn effective_size_bits(&self, default_size_bits: u32) -> u32 {
        self.size_bits.unwrap_or(default_size_bits)
    }
}
