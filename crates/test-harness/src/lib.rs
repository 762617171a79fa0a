//! Test harness for the reactor layout pipeline.
//!
//! Provides a fluent driver for planning and building reactors against the
//! mock kernel, sampling oracles that check boolean results through kernel
//! introspection, and plain text reports.
//!
//! # Key Components
//!
//! - [`ReactorHarness`]: Fluent API for building and verifying reactors
//! - [`oracle`]: Verification functions returning pass/fail verdicts
//! - [`report`]: Structured text descriptions of a build
//! - [`helpers`]: Reference parameter sets, sampling grids, tracing setup
//! - [`assertions`]: Assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::{describe, ReactorReport};
pub use workflow::ReactorHarness;
