//! Report generation for drift checks and suite runs.

use serde::{Deserialize, Serialize};

use suitegen_core::CoverageReport;

use crate::runner::RunSummary;

/// A drift-check report for one suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftReport {
    pub title: String,
    pub suite: String,
    /// Timestamp (UTC). Injectable for deterministic output.
    pub timestamp: String,
    pub coverage: CoverageReport,
}

impl DriftReport {
    #[must_use]
    pub fn new(suite: impl Into<String>, timestamp: impl Into<String>, coverage: CoverageReport) -> Self {
        let suite = suite.into();
        Self {
            title: format!("Fixture coverage: {suite}"),
            suite,
            timestamp: timestamp.into(),
            coverage,
        }
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Suite: {}\n", self.suite));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!(
            "- Status: {}\n\n",
            if self.coverage.is_clean() { "PASS" } else { "FAIL" }
        ));

        if !self.coverage.missing_from_model.is_empty() {
            out.push_str("## Missing from generated tests\n\n");
            for path in &self.coverage.missing_from_model {
                out.push_str(&format!("- `{path}`\n"));
            }
            out.push('\n');
        }
        if !self.coverage.missing_on_disk.is_empty() {
            out.push_str("## No longer present on disk\n\n");
            for path in &self.coverage.missing_on_disk {
                out.push_str(&format!("- `{path}`\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// A suite-run report combining per-fixture outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub title: String,
    pub suite: String,
    /// Timestamp (UTC). Injectable for deterministic output.
    pub timestamp: String,
    pub summary: RunSummary,
}

impl RunReport {
    #[must_use]
    pub fn new(suite: impl Into<String>, timestamp: impl Into<String>, summary: RunSummary) -> Self {
        let suite = suite.into();
        Self {
            title: format!("Suite run: {suite}"),
            suite,
            timestamp: timestamp.into(),
            summary,
        }
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Suite: {}\n", self.suite));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Fixture | Hook | Status |\n");
        out.push_str("|---------|------|--------|\n");
        for outcome in &self.summary.outcomes {
            let status = if outcome.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                outcome.path, outcome.hook, status
            ));
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::FixtureOutcome;

    #[test]
    fn drift_report_lists_offending_paths() {
        let report = DriftReport::new(
            "codeFragments",
            "2026-08-06T00:00:00Z",
            CoverageReport {
                missing_from_model: vec!["new.kt".to_string()],
                missing_on_disk: vec!["old.kt".to_string()],
            },
        );
        let md = report.to_markdown();
        assert!(md.contains("Status: FAIL"));
        assert!(md.contains("`new.kt`"));
        assert!(md.contains("`old.kt`"));
    }

    #[test]
    fn clean_drift_report_passes() {
        let report = DriftReport::new("codeFragments", "t", CoverageReport::default());
        assert!(report.to_markdown().contains("Status: PASS"));
    }

    #[test]
    fn run_report_renders_outcome_table() {
        let summary = RunSummary::from_outcomes(vec![
            FixtureOutcome {
                path: "a.kt".to_string(),
                display_name: "a".to_string(),
                hook: "doTest".to_string(),
                passed: true,
                failure: None,
            },
            FixtureOutcome {
                path: "imports/b.kt".to_string(),
                display_name: "b".to_string(),
                hook: "doTestWithImport".to_string(),
                passed: false,
                failure: Some("mismatch".to_string()),
            },
        ]);
        let md = RunReport::new("checker", "t", summary).to_markdown();
        assert!(md.contains("| a.kt | doTest | PASS |"));
        assert!(md.contains("| imports/b.kt | doTestWithImport | FAIL |"));
    }

    #[test]
    fn reports_serialize_to_json() {
        let report = DriftReport::new("s", "t", CoverageReport::default());
        let parsed: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(parsed["suite"], "s");
        assert!(parsed["coverage"]["missing_from_model"].is_array());
    }
}
