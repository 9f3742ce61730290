//! Fixture discovery over a test-data root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ConfigError;
use crate::pattern::{EntryKind, FixturePattern};

/// Ordered result of one scan: the matched paths, relative to the root.
///
/// Ordering is lexicographic by name within each directory, case-sensitive,
/// depth-first. Rebuilt from disk on every call; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Entity kind the pattern selected.
    pub kind: EntryKind,
    /// Matched paths relative to the scan root, in scan order.
    pub paths: Vec<PathBuf>,
}

impl ScanResult {
    /// Matched paths as forward-slash normalized strings, in scan order.
    #[must_use]
    pub fn normalized_paths(&self) -> Vec<String> {
        self.paths.iter().map(|p| normalize(p)).collect()
    }
}

/// Normalize a relative path to a forward-slash string.
#[must_use]
pub fn normalize(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walk `root` and collect every entry the pattern classifies as a fixture.
///
/// With `recursive = false` only the immediate children of `root` are tested
/// for matching. Hidden entries (leading dot) are never fixtures and hidden
/// directories are not descended into. A matched directory is itself the
/// fixture and its contents are not searched. Symlink cycles are rejected as
/// a configuration error. A missing root is an error, not an empty result:
/// "no fixtures" and "misconfigured root" are different failures.
pub fn scan(root: &Path, pattern: &FixturePattern) -> Result<ScanResult, ConfigError> {
    let meta = std::fs::metadata(root).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ConfigError::MissingRoot(root.to_path_buf()),
        _ => ConfigError::Io {
            path: root.to_path_buf(),
            source,
        },
    })?;
    if !meta.is_dir() {
        return Err(ConfigError::RootNotDirectory(root.to_path_buf()));
    }

    let max_depth = if pattern.recursive() { usize::MAX } else { 1 };
    let mut paths = Vec::new();
    let mut walker = WalkDir::new(root)
        .follow_links(true)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        if entry.depth() == 0 {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().is_dir();
        if name.starts_with('.') {
            if is_dir {
                walker.skip_current_dir();
            }
            continue;
        }

        let kind = if is_dir {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        if pattern.matches(&name, kind) {
            let rel = entry
                .path()
                .strip_prefix(root)
                .expect("walk entries stay under the scan root");
            paths.push(rel.to_path_buf());
            if is_dir {
                walker.skip_current_dir();
            }
        }
    }

    Ok(ScanResult {
        kind: pattern.kind(),
        paths,
    })
}

fn walk_error(root: &Path, err: walkdir::Error) -> ConfigError {
    let path = err.path().unwrap_or(root).to_path_buf();
    if let Some(ancestor) = err.loop_ancestor() {
        return ConfigError::SymlinkCycle {
            path,
            ancestor: ancestor.to_path_buf(),
        };
    }
    match err.into_io_error() {
        Some(source) => ConfigError::Io { path, source },
        None => ConfigError::Io {
            path,
            source: std::io::Error::other("directory walk failed"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_joins_components_with_forward_slashes() {
        let path: PathBuf = ["imports", "hashMap.kt"].iter().collect();
        assert_eq!(normalize(&path), "imports/hashMap.kt");
    }
}
