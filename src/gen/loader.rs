//! Device Model Loader and Target Gate.
//!
//! This module reads the intermediate device model produced by the external
//! description parser and rejects targets the generator does not support.

use crate::common::TargetError;
use crate::model::Device;
use std::fs;
use std::process;

/// Loads a device model from a JSON file.
///
/// Fatal on I/O or syntax errors: the tool cannot do anything without a
/// model, so the process exits with a message.
pub fn load_device(path: &str) -> Device {
    let data = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read device model '{}': {}", path, e);
        process::exit(1);
    });
    serde_json::from_str(&data).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not parse device model '{}': {}", path, e);
        process::exit(1);
    })
}

/// Checks that the described target is supported.
///
/// Only little-endian Cortex-M devices are handled. Descriptions that leave
/// the CPU family or endianness unspecified pass the gate; anything else is
/// a fatal startup rejection, applied before any core processing.
pub fn check_target(device: &Device) -> Result<(), TargetError> {
    if let Some(cpu) = &device.cpu {
        if let Some(family) = &cpu.family {
            if !family.starts_with("CM") {
                return Err(TargetError::UnsupportedCpu(family.clone()));
            }
        }
        if let Some(endian) = &cpu.endian {
            if endian != "little" {
                return Err(TargetError::UnsupportedEndian(endian.clone()));
            }
        }
    }
    Ok(())
}
