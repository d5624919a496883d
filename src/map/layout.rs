//! Peripheral Layout Computation.
//!
//! This module computes a peripheral's byte footprint and the sequence of
//! field placements used to build a fixed-size structure type for it.
//!
//! The footprint deliberately ignores the declared address block: block
//! sizes are frequently far larger than the actual register span and would
//! produce spurious overlaps downstream. The block's presence is only an
//! eligibility gate for structure generation.

use crate::common::GenError;
use crate::model::Peripheral;
use serde::Serialize;

/// Representation width class for a register field.
///
/// Selected by exact byte match: 1 maps to `Byte`, 2 to `Short`, 8 to
/// `Long`. Every other width, including the common 4-byte case and odd
/// widths such as 3 bytes (24-bit registers), falls back to `Word`, a
/// 4-byte unsigned integer representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidthClass {
    /// 1-byte unsigned representation.
    Byte,
    /// 2-byte unsigned representation.
    Short,
    /// Default 4-byte unsigned representation.
    Word,
    /// 8-byte unsigned representation.
    Long,
}

impl WidthClass {
    /// Selects the representation class for a field width in bytes.
    pub fn from_width_bytes(width_bytes: u32) -> Self {
        match width_bytes {
            1 => WidthClass::Byte,
            2 => WidthClass::Short,
            8 => WidthClass::Long,
            _ => WidthClass::Word,
        }
    }

    /// Returns the size of the representation itself in bytes.
    pub fn size_bytes(&self) -> u32 {
        match self {
            WidthClass::Byte => 1,
            WidthClass::Short => 2,
            WidthClass::Word => 4,
            WidthClass::Long => 8,
        }
    }
}

/// One register's placement within a peripheral structure.
///
/// Placements are emitted in register-list order, not offset order. Two
/// registers may share an offset; the consuming structure applies
/// placements in order and a later placement at an identical offset
/// replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlacement {
    /// Byte offset relative to the peripheral base.
    pub offset: u64,
    /// Field width in bytes, derived from the register's effective bit
    /// width.
    pub width_bytes: u32,
    /// Register name.
    pub name: String,
    /// Register description.
    pub description: String,
}

impl FieldPlacement {
    /// Returns the representation class selected for this field's width.
    pub fn width_class(&self) -> WidthClass {
        WidthClass::from_width_bytes(self.width_bytes)
    }
}

/// Computed layout of one peripheral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeripheralLayout {
    /// Peripheral name.
    pub name: String,
    /// Base address of the peripheral.
    pub base_address: u64,
    /// Total byte footprint, the maximum register end offset.
    pub total_length_bytes: u64,
    /// Field placements in register-list order.
    pub fields: Vec<FieldPlacement>,
}

/// Computes a peripheral's byte footprint.
///
/// For each register, the effective width is the explicit size if declared,
/// else `default_size_bits`. The footprint is the maximum over registers of
/// `address_offset + effective_width / 8`. The declared address block is
/// ignored.
///
/// An empty register list yields 0; callers gate on non-empty registers
/// before using the result.
pub fn peripheral_footprint(peripheral: &Peripheral, default_size_bits: u32) -> u64 {
    let mut size = 0;
    for register in &peripheral.registers {
        let register_size = register.effective_size_bits(default_size_bits);
        size = size.max(register.address_offset + u64::from(register_size / 8));
    }
    size
}

/// Builds the field placements for a peripheral, one per register in list
/// order.
///
/// No validation is performed that placements fit within the footprint or
/// that they do not overlap each other; the consuming structure resolves
/// duplicate offsets by replacement.
pub fn build_field_placements(
    peripheral: &Peripheral,
    default_size_bits: u32,
) -> Vec<FieldPlacement> {
    peripheral
        .registers
        .iter()
        .map(|register| FieldPlacement {
            offset: register.address_offset,
            width_bytes: register.effective_size_bits(default_size_bits) / 8,
            name: register.name.clone(),
            description: register.description.clone(),
        })
        .collect()
}

/// Builds the complete layout for one peripheral.
///
/// # Errors
///
/// * [`GenError::NoRegisters`] if the peripheral declares no registers.
/// * [`GenError::NoAddressBlock`] if the peripheral declares no address
///   block. The block gates eligibility only; it never contributes to the
///   computed length.
pub fn build_layout(
    peripheral: &Peripheral,
    default_size_bits: u32,
) -> Result<PeripheralLayout, GenError> {
    if peripheral.registers.is_empty() {
        return Err(GenError::NoRegisters {
            name: peripheral.name.clone(),
        });
    }
    if peripheral.address_block.is_none() {
        return Err(GenError::NoAddressBlock {
            name: peripheral.name.clone(),
        });
    }

    Ok(PeripheralLayout {
        name: peripheral.name.clone(),
        base_address: peripheral.base_address,
        total_length_bytes: peripheral_footprint(peripheral, default_size_bits),
        fields: build_field_placements(peripheral, default_size_bits),
    })
}
