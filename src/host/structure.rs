//! Fixed-Size Structure Types.
//!
//! A structure type is a named, fixed-size, offset-indexed record describing
//! a peripheral's register layout. Fields are applied in placement order;
//! applying a field at an offset that already holds one replaces it
//! (last-write-wins), matching the replace-at-offset semantics of workbench
//! structure APIs.

use crate::map::layout::{PeripheralLayout, WidthClass};
use serde::Serialize;
use std::collections::BTreeMap;

/// One resolved field of a structure type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructField {
    /// Representation class of the field.
    pub width_class: WidthClass,
    /// Field width in bytes.
    pub width_bytes: u32,
    /// Field name.
    pub name: String,
    /// Field description.
    pub description: String,
}

/// A named fixed-size structure type.
#[derive(Debug, Clone, Serialize)]
pub struct StructureType {
    /// Structure name, the peripheral name.
    pub name: String,
    /// Total structure length in bytes.
    pub length_bytes: u64,
    /// Fields keyed by byte offset.
    pub fields: BTreeMap<u64, StructField>,
}

impl StructureType {
    /// Creates an empty structure of the given length.
    pub fn new(name: impl Into<String>, length_bytes: u64) -> Self {
        Self {
            name: name.into(),
            length_bytes,
            fields: BTreeMap::new(),
        }
    }

    /// Places a field at a byte offset, replacing any field already there.
    pub fn replace_at_offset(&mut self, offset: u64, field: StructField) {
        self.fields.insert(offset, field);
    }

    /// Returns the field at a byte offset, if one is placed there.
    pub fn field_at(&self, offset: u64) -> Option<&StructField> {
        self.fields.get(&offset)
    }

    /// Builds the structure for a computed peripheral layout.
    ///
    /// Placements are applied in layout order, so a later placement at a
    /// duplicate offset wins.
    pub fn from_layout(layout: &PeripheralLayout) -> Self {
        let mut structure = Self::new(layout.name.clone(), layout.total_length_bytes);
        for placement in &layout.fields {
            structure.replace_at_offset(
                placement.offset,
                StructField {
                    width_class: placement.width_class(),
                    width_bytes: placement.width_bytes,
                    name: placement.name.clone(),
                    description: placement.description.clone(),
                },
            );
        }
        structure
    }
}
