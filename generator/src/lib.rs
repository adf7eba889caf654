//! TomEE BOM generator library.
//!
//! Maps every jar packaged in the TomEE server distributions back to a Maven
//! coordinate and emits one BOM per distribution. Used by the `bomgen`
//! binary and usable programmatically for tests or build tooling.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`distribution`] - Archive names and reconciled distributions
//! - [`error`] - Error types for the generator
//! - [`exceptions`] - Hand-maintained mapping rules
//! - [`extraction`] - Distribution archive extraction
//! - [`manifest`] - BOM rendering and emission
//! - [`output`] - Run report formatting
//! - [`pipeline`] - Batch orchestration
//! - [`reconciler`] - Mapping of jar names to coordinates
//! - [`repository`] - Local Maven repository index
//! - [`verification`] - Completeness gate

pub mod cli;
pub mod distribution;
pub mod error;
pub mod exceptions;
pub mod extraction;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod reconciler;
pub mod repository;
pub mod verification;
