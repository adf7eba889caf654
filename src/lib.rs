//! Shared configuration for the TomEE BOM generator.
//!
//! The generator crate and its CLI read the same [`GeneratorConfig`], so the
//! archive selection rules, exclusion lists, and release-line trimming live
//! in one place.

pub mod config;

pub use config::{ConfigError, ExclusionConfig, GeneratorConfig};
