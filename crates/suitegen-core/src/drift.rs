//! Drift oracle: keeps a generated suite model honest against the disk.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::SuiteModel;
use crate::pattern::FixturePattern;
use crate::scanner;

/// Bidirectional coverage comparison between disk and model.
///
/// Both sets empty means the model still covers exactly what is on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Fixtures present on disk but absent from the model.
    pub missing_from_model: Vec<String>,
    /// Fixtures present in the model but absent on disk. Always a hard
    /// failure: a stale reference cannot be executed meaningfully.
    pub missing_on_disk: Vec<String>,
}

impl CoverageReport {
    /// True when disk and model agree.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_from_model.is_empty() && self.missing_on_disk.is_empty()
    }

    /// Convert into a pass/fail result.
    pub fn into_result(self) -> Result<(), CoverageDrift> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(CoverageDrift { report: self })
        }
    }
}

/// Test failure raised when disk and model disagree.
///
/// The message names every offending path, never just the first, so one
/// regeneration fixes everything at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageDrift {
    pub report: CoverageReport,
}

impl std::fmt::Display for CoverageDrift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.report.missing_from_model.is_empty() {
            parts.push(format!(
                "Missing from generated tests: [{}]",
                self.report.missing_from_model.join(", ")
            ));
        }
        if !self.report.missing_on_disk.is_empty() {
            parts.push(format!(
                "No longer present on disk: [{}]",
                self.report.missing_on_disk.join(", ")
            ));
        }
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for CoverageDrift {}

/// Re-scan `root` with the configuration used to build `model` and diff the
/// fixture sets in both directions.
///
/// Re-entrant and side-effect-free, so it can run as an ordinary test at
/// suite-execution time, not only at generation time.
pub fn check(
    model: &SuiteModel,
    root: &Path,
    pattern: &FixturePattern,
) -> Result<CoverageReport, ConfigError> {
    let scan = scanner::scan(root, pattern)?;
    let on_disk: BTreeSet<String> = scan.normalized_paths().into_iter().collect();
    let in_model: BTreeSet<String> = model
        .fixture_paths()
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(CoverageReport {
        missing_from_model: on_disk.difference(&in_model).cloned().collect(),
        missing_on_disk: in_model.difference(&on_disk).cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_report_converts_to_ok() {
        assert!(CoverageReport::default().into_result().is_ok());
    }

    #[test]
    fn drift_message_lists_every_path() {
        let drift = CoverageReport {
            missing_from_model: vec!["a.kt".to_string(), "imports/b.kt".to_string()],
            missing_on_disk: vec!["gone.kt".to_string()],
        }
        .into_result()
        .unwrap_err();

        let message = drift.to_string();
        assert_eq!(
            message,
            "Missing from generated tests: [a.kt, imports/b.kt]; \
             No longer present on disk: [gone.kt]"
        );
    }

    #[test]
    fn one_sided_drift_reports_only_that_side() {
        let drift = CoverageReport {
            missing_from_model: Vec::new(),
            missing_on_disk: vec!["gone.kt".to_string()],
        }
        .into_result()
        .unwrap_err();
        assert_eq!(drift.to_string(), "No longer present on disk: [gone.kt]");
    }
}
