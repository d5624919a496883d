//! SVD Memory-Map Generator CLI.
//!
//! The main executable for the generator. It handles command-line argument
//! parsing, target gating, and driving the generation pipeline into the
//! JSON report backend.
//!
//! # Usage
//!
//! The tool consumes a device model (the JSON intermediate representation
//! produced by an external description parser), prints the reduced region
//! map and generation summary, and optionally writes the full report to a
//! JSON file.

use clap::Parser;
use std::{fs, process};

extern crate svd_map;

use svd_map::config::Config;
use svd_map::gen::{loader, pipeline};
use svd_map::host::ReportSink;

/// Command-line arguments for the memory-map generator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Peripheral memory-map and structure-layout generator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// Path to the device model JSON produced by the description parser.
    #[arg(short, long)]
    device: String,

    /// Path to write the full JSON report to.
    #[arg(short, long)]
    output: Option<String>,
}

/// Main entry point for the memory-map generator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the TOML
///    configuration file.
/// 2. **Loader**: Reads the device model and rejects unsupported targets
///    (non-Cortex-M CPU families, big-endian devices).
/// 3. **Pipeline**: Builds and reduces the region list, computes peripheral
///    layouts, and applies everything to the report backend with per-item
///    failure isolation.
/// 4. **Output**: Prints the region table and run summary, and writes the
///    JSON report if requested.
fn main() {
    let args = Args::parse();
    let config_content = fs::read_to_string(&args.config).expect("Failed to read config");
    let config: Config = toml::from_str(&config_content).expect("Failed to parse config");

    println!("[Loader] Reading device model: {}", args.device);
    let device = loader::load_device(&args.device);

    if let Err(e) = loader::check_target(&device) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("Global Configuration");
    println!("--------------------");
    println!("Device:");
    println!("  Name:               {}", device.name);
    println!("  Peripherals:        {}", device.peripherals.len());
    println!(
        "  Default Reg Width:  {} bits",
        pipeline::resolve_default_size(&device, &config)
    );
    println!("Host:");
    println!("  Namespace:          {}", config.host.namespace);
    println!("  Block Comment:      {}", config.host.block_comment);
    println!("General:");
    println!("  Trace Regions:      {}", config.general.trace_regions);
    println!("--------------------");

    let mut sink = ReportSink::new();
    let summary = match pipeline::run(&device, &config, &mut sink) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("\n[!] FATAL: {}", e);
            process::exit(1);
        }
    };

    let report = sink.into_report();

    println!("\nReduced Memory Regions");
    println!("----------------------");
    for block in &report.memory_blocks {
        println!(
            "  {:<24} {:#010x} - {:#010x} ({} bytes)",
            block.name,
            block.start,
            block.start + block.length,
            block.length
        );
    }

    println!("\nSummary");
    println!("-------");
    println!("  Memory blocks:      {}", summary.blocks_created);
    println!("  Structures:         {}", summary.structures_created);
    println!("  Skipped:            {}", summary.peripherals_skipped);
    println!("  Failed:             {}", summary.peripherals_failed);

    if let Some(output) = args.output {
        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
        fs::write(&output, json).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: Could not write report '{}': {}", output, e);
            process::exit(1);
        });
        println!("\n[*] Report written to {}", output);
    }
}
