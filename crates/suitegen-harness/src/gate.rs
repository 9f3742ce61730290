//! Drift gate: the test-time completeness check for generated suites.

use thiserror::Error;

use suitegen_core::{ConfigError, CoverageDrift, SuiteConfig, SuiteModel, check};

/// Failure raised by the drift gate.
///
/// Configuration failures are fatal misconfiguration; drift is an actionable
/// test failure naming every offending path.
#[derive(Debug, Error)]
pub enum GateFailure {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Drift(#[from] CoverageDrift),
}

/// Assert that a generated suite model still covers exactly the fixtures on
/// disk. Intended to run as an ordinary test inside the generated suite, so
/// fixtures added or removed after generation fail the build instead of
/// silently under-testing.
pub fn enforce_coverage(config: &SuiteConfig, model: &SuiteModel) -> Result<(), GateFailure> {
    let pattern = config.compiled_pattern()?;
    let report = check(model, &config.root, &pattern)?;
    report.into_result()?;
    Ok(())
}
