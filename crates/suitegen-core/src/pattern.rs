//! Fixture naming patterns.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Kind of directory entry a pattern selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Stable label used in model metadata.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }

    /// Parse a kind with loose casing.
    #[must_use]
    pub fn from_str_loose(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "directory" | "dir" => Some(Self::Directory),
            _ => None,
        }
    }
}

/// A compiled fixture naming rule.
///
/// The expression is anchored to the entire path segment, so a rule for
/// `.kt` files cannot match `.kt.bak`. A file rule never matches a
/// directory entry and vice versa.
#[derive(Debug, Clone)]
pub struct FixturePattern {
    regex: Regex,
    source: String,
    kind: EntryKind,
    recursive: bool,
}

impl FixturePattern {
    /// Compile a naming rule. An unparsable expression is a configuration
    /// error here, never deferred to scan time.
    pub fn new(pattern: &str, kind: EntryKind, recursive: bool) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            regex,
            source: pattern.to_string(),
            kind,
            recursive,
        })
    }

    /// Classify a single path segment (not a full path).
    #[must_use]
    pub fn matches(&self, entry_name: &str, kind: EntryKind) -> bool {
        kind == self.kind && self.regex.is_match(entry_name)
    }

    /// The raw expression this pattern was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub const fn recursive(&self) -> bool {
        self.recursive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_anchored_to_whole_segment() {
        let pattern = FixturePattern::new(r"(.+)\.kt", EntryKind::File, false).unwrap();
        assert!(pattern.matches("binaryExpression.kt", EntryKind::File));
        assert!(!pattern.matches("binaryExpression.kt.bak", EntryKind::File));
        assert!(!pattern.matches("notes.txt", EntryKind::File));
    }

    #[test]
    fn file_pattern_never_matches_directory() {
        let pattern = FixturePattern::new(r"(.+)\.kt", EntryKind::File, false).unwrap();
        assert!(!pattern.matches("weird.kt", EntryKind::Directory));
    }

    #[test]
    fn directory_pattern_never_matches_file() {
        let pattern = FixturePattern::new(r"[a-z]+", EntryKind::Directory, false).unwrap();
        assert!(pattern.matches("imports", EntryKind::Directory));
        assert!(!pattern.matches("imports", EntryKind::File));
    }

    #[test]
    fn unparsable_pattern_fails_at_construction() {
        let err = FixturePattern::new(r"(unclosed", EntryKind::File, false);
        assert!(matches!(err, Err(ConfigError::Pattern(_))));
    }

    #[test]
    fn kind_parses_loosely() {
        assert_eq!(EntryKind::from_str_loose("File"), Some(EntryKind::File));
        assert_eq!(EntryKind::from_str_loose("dir"), Some(EntryKind::Directory));
        assert_eq!(EntryKind::from_str_loose("symlink"), None);
    }
}
