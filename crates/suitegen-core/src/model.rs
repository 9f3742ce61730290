//! Suite model: fixtures grouped into a directory-mirrored tree.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pattern::EntryKind;
use crate::scanner::ScanResult;

/// Schema identifier for persisted suite models.
pub const MODEL_SCHEMA_VERSION: &str = "suitegen-model.v1";

/// A single discovered fixture.
///
/// Identity is the relative path; two fixtures are equal iff paths are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Path relative to the test-data root, forward-slash separated.
    pub path: String,
    /// Display name derived from the final path segment.
    pub display_name: String,
    /// Operation hook invoked with this fixture's path.
    pub hook: String,
}

/// One directory level of the suite tree.
///
/// Child paths are always proper extensions of the node's own path; the
/// scanner rejects symlink cycles, so the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteNode {
    /// Directory path relative to the root; empty for the root node.
    pub path: String,
    /// Hook binding applicable to fixtures directly at this level.
    pub hook: String,
    /// Fixtures at this level, in scan order.
    pub fixtures: Vec<Fixture>,
    /// Nested suites, in scan order. Dead branches are never emitted.
    pub children: Vec<SuiteNode>,
}

impl SuiteNode {
    /// All fixture paths in this subtree, depth-first in model order.
    #[must_use]
    pub fn fixture_paths(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_paths(&mut out);
        out
    }

    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a str>) {
        for fixture in &self.fixtures {
            out.push(&fixture.path);
        }
        for child in &self.children {
            child.collect_paths(out);
        }
    }

    fn child_mut(&mut self, path: &str, bindings: &HookBindings) -> &mut SuiteNode {
        let idx = match self.children.iter().position(|c| c.path == path) {
            Some(idx) => idx,
            None => {
                self.children.push(SuiteNode {
                    path: path.to_string(),
                    hook: bindings.resolve(&format!("{path}/")).to_string(),
                    fixtures: Vec::new(),
                    children: Vec::new(),
                });
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }
}

/// One hook-binding rule: a path prefix mapped to an operation hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookBinding {
    pub prefix: String,
    pub hook: String,
}

/// Ordered hook-binding table with a suite-level default.
///
/// Rules are evaluated most-specific-first: the longest matching prefix
/// wins, so one suite can mix fixture groups that need different semantic
/// test operations without per-fixture annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookBindings {
    pub rules: Vec<HookBinding>,
    pub default_hook: String,
}

impl HookBindings {
    /// Resolve the hook for a fixture path. Longest matching prefix wins;
    /// falls back to the default hook when no rule matches.
    #[must_use]
    pub fn resolve(&self, fixture_path: &str) -> &str {
        self.rules
            .iter()
            .filter(|rule| fixture_path.starts_with(&rule.prefix))
            .max_by_key(|rule| rule.prefix.len())
            .map_or(self.default_hook.as_str(), |rule| rule.hook.as_str())
    }
}

/// Convert a scan result into the hierarchical suite model.
///
/// One node per directory that contains fixtures or non-empty descendants;
/// one fixture entry per match, attached to the node for its containing
/// directory. Directories with neither are pruned by construction: nodes are
/// only created along paths of actual fixtures.
#[must_use]
pub fn build(scan: &ScanResult, bindings: &HookBindings) -> SuiteNode {
    let mut root = SuiteNode {
        path: String::new(),
        hook: bindings.resolve("").to_string(),
        fixtures: Vec::new(),
        children: Vec::new(),
    };

    for path in &scan.paths {
        let normalized = crate::scanner::normalize(path);
        let (dir, leaf) = match normalized.rsplit_once('/') {
            Some((dir, leaf)) => (Some(dir), leaf),
            None => (None, normalized.as_str()),
        };

        let node = match dir {
            None => &mut root,
            Some(dir) => {
                let mut node = &mut root;
                let mut so_far = String::new();
                for segment in dir.split('/') {
                    if !so_far.is_empty() {
                        so_far.push('/');
                    }
                    so_far.push_str(segment);
                    node = node.child_mut(&so_far, bindings);
                }
                node
            }
        };

        node.fixtures.push(Fixture {
            path: normalized.clone(),
            display_name: display_name(leaf, scan.kind),
            hook: bindings.resolve(&normalized).to_string(),
        });
    }

    root
}

/// Display name for a fixture's final path segment. File fixtures drop the
/// extension; directory fixtures keep the full name.
fn display_name(leaf: &str, kind: EntryKind) -> String {
    match kind {
        EntryKind::File => leaf
            .rsplit_once('.')
            .map_or(leaf, |(stem, _ext)| stem)
            .to_string(),
        EntryKind::Directory => leaf.to_string(),
    }
}

/// A persisted suite model: the generation output the drift oracle keeps honest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteModel {
    /// Schema version, checked on load.
    pub schema_version: String,
    /// Suite name.
    pub suite: String,
    /// Pattern the model was generated with (echo, for provenance).
    pub pattern: String,
    pub kind: EntryKind,
    pub recursive: bool,
    /// Root of the suite tree; its path is empty.
    pub root: SuiteNode,
}

impl SuiteModel {
    /// Load a suite model from a JSON string, rejecting unknown schemas.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let model: Self = serde_json::from_str(json)?;
        if model.schema_version != MODEL_SCHEMA_VERSION {
            return Err(ConfigError::Schema {
                found: model.schema_version,
            });
        }
        Ok(model)
    }

    /// Serialize the model to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a suite model from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// All fixture paths covered by this model, in model order.
    #[must_use]
    pub fn fixture_paths(&self) -> Vec<&str> {
        self.root.fixture_paths()
    }
}
