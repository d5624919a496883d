//! Integration tests for configuration loading.

use svd_map::config::Config;

/// Tests that an empty configuration file yields the documented defaults.
#[test]
fn test_empty_config_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert!(!config.general.trace_regions);
    assert_eq!(config.general.default_register_size_bits, None);
    assert_eq!(config.host.namespace, "Peripherals");
    assert_eq!(config.host.block_comment, "Generated by svd-map.");
}

/// Tests that section defaults apply when only some fields are set.
#[test]
fn test_partial_config() {
    let config: Config = toml::from_str(
        r#"
        [general]
        trace_regions = true

        [host]
        namespace = "MMIO"
        "#,
    )
    .unwrap();

    assert!(config.general.trace_regions);
    assert_eq!(config.host.namespace, "MMIO");
    assert_eq!(config.host.block_comment, "Generated by svd-map.");
}

/// Tests a fully specified configuration.
#[test]
fn test_full_config() {
    let config: Config = toml::from_str(
        r#"
        [general]
        trace_regions = true
        default_register_size_bits = 16

        [host]
        namespace = "Devices"
        block_comment = "imported"
        "#,
    )
    .unwrap();

    assert_eq!(config.general.default_register_size_bits, Some(16));
    assert_eq!(config.host.namespace, "Devices");
    assert_eq!(config.host.block_comment, "imported");
}

/// Tests that the shipped default config file parses.
#[test]
fn test_shipped_default_config() {
    let content = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/configs/default.toml"
    ))
    .unwrap();
    let config: Config = toml::from_str(&content).unwrap();

    assert_eq!(config.host.namespace, "Peripherals");
}
