//! Suite configuration loading.
//!
//! A suite definition is one JSON document: the test-data root, the naming
//! pattern, and the hook-binding table. Configuration is immutable once
//! loaded; an unresolvable configuration is fatal at load time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{self, HookBinding, HookBindings, SuiteModel};
use crate::pattern::{EntryKind, FixturePattern};
use crate::scanner::{self, ScanResult};

/// Configuration for one fixture suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Suite name, used as the root group name in generated code.
    pub suite: String,
    /// Test-data root directory.
    pub root: PathBuf,
    /// Naming pattern; anchored to whole path segments when compiled.
    pub pattern: String,
    /// Whether the pattern selects files or directories.
    pub kind: EntryKind,
    /// Whether every descendant is tested for matching, or only immediate
    /// children of the root.
    #[serde(default)]
    pub recursive: bool,
    /// Ordered hook-binding rules, longest matching prefix wins.
    #[serde(default)]
    pub bindings: Vec<HookBinding>,
    /// Hook used when no binding rule matches.
    pub default_hook: String,
}

impl SuiteConfig {
    /// Parse a configuration from JSON, validating the pattern eagerly so a
    /// broken configuration never reaches scan time.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.compiled_pattern()?;
        Ok(config)
    }

    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Compile the configured pattern.
    pub fn compiled_pattern(&self) -> Result<FixturePattern, ConfigError> {
        FixturePattern::new(&self.pattern, self.kind, self.recursive)
    }

    /// The configured hook-binding table.
    #[must_use]
    pub fn hook_bindings(&self) -> HookBindings {
        HookBindings {
            rules: self.bindings.clone(),
            default_hook: self.default_hook.clone(),
        }
    }

    /// Scan the configured root for fixtures.
    pub fn scan(&self) -> Result<ScanResult, ConfigError> {
        scanner::scan(&self.root, &self.compiled_pattern()?)
    }

    /// Scan and build a fresh suite model from the current disk state.
    pub fn generate(&self) -> Result<SuiteModel, ConfigError> {
        let scan = self.scan()?;
        Ok(SuiteModel {
            schema_version: model::MODEL_SCHEMA_VERSION.to_string(),
            suite: self.suite.clone(),
            pattern: self.pattern.clone(),
            kind: self.kind,
            recursive: self.recursive,
            root: model::build(&scan, &self.hook_bindings()),
        })
    }
}
