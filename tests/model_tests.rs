//! Integration tests for device model deserialization.

use svd_map::model::{Device, Register};

/// Tests deserializing a full device model from JSON.
#[test]
fn test_device_from_json() {
    let json = r#"{
        "name": "STM32F103",
        "cpu": { "family": "CM3", "endian": "little" },
        "default_register_size_bits": 32,
        "peripherals": [
            {
                "name": "GPIOA",
                "base_address": 1073809408,
                "address_block": { "offset": 0, "size": 1024 },
                "registers": [
                    {
                        "name": "CRL",
                        "description": "Port configuration low",
                        "address_offset": 0,
                        "size_bits": 32
                    },
                    {
                        "name": "IDR",
                        "address_offset": 8
                    }
                ]
            }
        ]
    }"#;

    let device: Device = serde_json::from_str(json).unwrap();
    assert_eq!(device.name, "STM32F103");
    assert_eq!(device.default_register_size(), 32);

    let cpu = device.cpu.as_ref().unwrap();
    assert_eq!(cpu.family.as_deref(), Some("CM3"));
    assert_eq!(cpu.endian.as_deref(), Some("little"));

    let p = &device.peripherals[0];
    assert_eq!(p.name, "GPIOA");
    assert_eq!(p.base_address, 0x4001_0800);
    assert_eq!(p.address_block.as_ref().unwrap().size, 1024);
    assert_eq!(p.registers.len(), 2);

    // Omitted fields take their defaults.
    assert_eq!(p.registers[1].description, "");
    assert_eq!(p.registers[1].size_bits, None);
}

/// Tests that a minimal device model deserializes with defaults.
#[test]
fn test_minimal_device() {
    let device: Device = serde_json::from_str(r#"{ "name": "BARE" }"#).unwrap();
    assert!(device.cpu.is_none());
    assert!(device.peripherals.is_empty());
    assert_eq!(device.default_register_size(), 32);
}

/// Tests effective register size resolution.
#[test]
fn test_register_effective_size() {
    let explicit = Register {
        name: "CR".to_string(),
        description: String::new(),
        address_offset: 0,
        size_bits: Some(16),
    };
    let defaulted = Register {
        name: "SR".to_string(),
        description: String::new(),
        address_offset: 4,
        size_bits: None,
    };

    assert_eq!(explicit.effective_size_bits(32), 16);
    assert_eq!(defaulted.effective_size_bits(32), 32);
}
