//! Execution harness around the suitegen engine.
//!
//! This crate provides:
//! - Hook registry: opaque operation hooks keyed by identifier
//! - Suite runner: per-fixture execution with failure isolation
//! - Drift gate: the test-time completeness check for generated suites
//! - Reports: human-readable + machine-readable drift and run reports
//! - Structured run log: JSONL records for scan/generate/check workflows
//! - Navigation references: fixture path to navigable locator formatting

#![forbid(unsafe_code)]

pub mod gate;
pub mod hooks;
pub mod nav;
pub mod report;
pub mod run_log;
pub mod runner;

pub use gate::{GateFailure, enforce_coverage};
pub use hooks::HookRegistry;
pub use report::{DriftReport, RunReport};
pub use runner::{FixtureOutcome, RunSummary, SuiteRunner};
