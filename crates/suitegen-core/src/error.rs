//! Error taxonomy for suite construction.
//!
//! Configuration errors are fatal: no partial suite is ever built against a
//! broken configuration. Coverage drift is a test failure, not a process
//! failure, and lives in [`crate::drift`].

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration error surfaced before any suite model is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid fixture pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("invalid suite configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported suite model schema: {found}")]
    Schema { found: String },
    #[error("test-data root does not exist: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("test-data root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
    #[error("io error under {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("symlink cycle: {} loops back to {}", .path.display(), .ancestor.display())]
    SymlinkCycle { path: PathBuf, ancestor: PathBuf },
    #[error("unknown operation hook: {0}")]
    UnknownHook(String),
}
