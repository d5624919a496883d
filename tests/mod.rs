//! Test module organization.
//!
//! This module organizes all integration tests for the memory-map
//! generator.

/// Configuration parsing and default tests.
mod config_tests;


/// Device model deserialization tests.
mod model_tests;
