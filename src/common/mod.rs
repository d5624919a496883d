//! Common types shared across the generator.
//!
//! This module provides the error taxonomy used by the loader, the
//! generation pipeline, and host backends.

/// Error type definitions.
pub mod error;

pub use error::{GenError, HostError, TargetError};
