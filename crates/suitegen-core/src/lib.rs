//! Fixture-suite discovery and generation engine.
//!
//! This crate provides:
//! - Path matching: classify directory entries as fixtures by an anchored naming pattern
//! - Fixture scanning: deterministic shallow/recursive walks of a test-data root
//! - Suite modeling: a directory-mirrored tree of fixtures with hook bindings resolved
//!   by longest-matching path prefix
//! - Drift checking: bidirectional comparison of a suite model against the current disk state
//! - Generator descriptors: a validated, hook-resolved tree consumed by an external renderer

#![forbid(unsafe_code)]

pub mod config;
pub mod drift;
pub mod error;
pub mod model;
pub mod pattern;
pub mod render;
pub mod scanner;

pub use config::SuiteConfig;
pub use drift::{CoverageDrift, CoverageReport, check};
pub use error::ConfigError;
pub use model::{Fixture, HookBinding, HookBindings, MODEL_SCHEMA_VERSION, SuiteModel, SuiteNode, build};
pub use pattern::{EntryKind, FixturePattern};
pub use render::{EntryDescriptor, GroupDescriptor, render};
pub use scanner::{ScanResult, scan};
