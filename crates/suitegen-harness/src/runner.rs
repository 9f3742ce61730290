//! Suite execution engine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use suitegen_core::{ConfigError, SuiteModel, SuiteNode};

use crate::hooks::HookRegistry;

/// Result of executing one fixture's operation hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureOutcome {
    /// Fixture path relative to the test-data root.
    pub path: String,
    pub display_name: String,
    /// Hook that was invoked.
    pub hook: String,
    pub passed: bool,
    /// Hook failure detail, passed through verbatim. The harness attaches no
    /// interpretation beyond recording which fixture was being exercised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Aggregate run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<FixtureOutcome>,
}

impl RunSummary {
    /// Build a summary from a list of outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<FixtureOutcome>) -> Self {
        let total = outcomes.len();
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            outcomes,
        }
    }

    /// Returns true if every fixture passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Runs every fixture of a suite model through its operation hook.
pub struct SuiteRunner<'a> {
    registry: &'a HookRegistry,
    root: PathBuf,
}

impl<'a> SuiteRunner<'a> {
    #[must_use]
    pub fn new(registry: &'a HookRegistry, root: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            root: root.into(),
        }
    }

    /// Execute the model and collect per-fixture outcomes.
    ///
    /// Hook resolution is validated for the whole model before anything
    /// executes: an unknown hook aborts the run entirely. Once execution
    /// starts, one fixture's failure never prevents siblings from running.
    pub fn run(&self, model: &SuiteModel) -> Result<RunSummary, ConfigError> {
        self.validate_hooks(&model.root)?;

        let mut outcomes = Vec::new();
        self.run_node(&model.root, &mut outcomes)?;
        Ok(RunSummary::from_outcomes(outcomes))
    }

    fn validate_hooks(&self, node: &SuiteNode) -> Result<(), ConfigError> {
        for fixture in &node.fixtures {
            self.registry.get(&fixture.hook)?;
        }
        for child in &node.children {
            self.validate_hooks(child)?;
        }
        Ok(())
    }

    fn run_node(
        &self,
        node: &SuiteNode,
        outcomes: &mut Vec<FixtureOutcome>,
    ) -> Result<(), ConfigError> {
        for fixture in &node.fixtures {
            let hook = self.registry.get(&fixture.hook)?;
            let fixture_path = join_relative(&self.root, &fixture.path);
            let result = hook(&fixture_path);
            outcomes.push(FixtureOutcome {
                path: fixture.path.clone(),
                display_name: fixture.display_name.clone(),
                hook: fixture.hook.clone(),
                passed: result.is_ok(),
                failure: result.err(),
            });
        }
        for child in &node.children {
            self.run_node(child, outcomes)?;
        }
        Ok(())
    }
}

fn join_relative(root: &Path, relative: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in relative.split('/') {
        path.push(segment);
    }
    path
}
