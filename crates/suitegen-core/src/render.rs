//! Generator scaffold: descriptors consumed by an external rendering stage.
//!
//! The descriptor tree is already validated and hook-resolved; actual source
//! emission is a separate back end and may be replaced wholesale per target
//! language.

use serde::{Deserialize, Serialize};

use crate::model::{SuiteModel, SuiteNode};

/// One generated test entry point bound to a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDescriptor {
    /// Entry name: `test` + PascalCase of the fixture's display name.
    pub name: String,
    /// Fixture path relative to the test-data root.
    pub fixture_path: String,
    /// Operation hook the entry must invoke.
    pub hook: String,
}

/// One generated test group, nested to mirror directory structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    /// Group name: PascalCase of the directory segment (suite name at root).
    pub name: String,
    /// Directory path relative to the root; empty at the root group.
    pub path: String,
    pub entries: Vec<EntryDescriptor>,
    pub groups: Vec<GroupDescriptor>,
}

/// Render a suite model into the generated-test-unit descriptor tree.
#[must_use]
pub fn render(model: &SuiteModel) -> GroupDescriptor {
    render_node(&model.root, &model.suite)
}

fn render_node(node: &SuiteNode, name: &str) -> GroupDescriptor {
    GroupDescriptor {
        name: pascal_case(name),
        path: node.path.clone(),
        entries: node
            .fixtures
            .iter()
            .map(|fixture| EntryDescriptor {
                name: format!("test{}", pascal_case(&fixture.display_name)),
                fixture_path: fixture.path.clone(),
                hook: fixture.hook.clone(),
            })
            .collect(),
        groups: node
            .children
            .iter()
            .map(|child| {
                let segment = child.path.rsplit('/').next().unwrap_or(&child.path);
                render_node(child, segment)
            })
            .collect(),
    }
}

/// Uppercase the first letter of each alphanumeric run, dropping separators.
/// `binaryExpression` becomes `BinaryExpression`, `my-test_case` becomes
/// `MyTestCase`.
fn pascal_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = true;
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if upper_next {
                out.extend(ch.to_uppercase());
                upper_next = false;
            } else {
                out.push(ch);
            }
        } else {
            upper_next = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HookBindings, build};
    use crate::pattern::EntryKind;
    use crate::scanner::ScanResult;
    use std::path::PathBuf;

    #[test]
    fn pascal_case_capitalizes_runs() {
        assert_eq!(pascal_case("binaryExpression"), "BinaryExpression");
        assert_eq!(pascal_case("my-test_case"), "MyTestCase");
        assert_eq!(pascal_case("imports"), "Imports");
    }

    #[test]
    fn descriptors_mirror_the_model() {
        let scan = ScanResult {
            kind: EntryKind::File,
            paths: vec![
                PathBuf::from("binaryExpression.kt"),
                PathBuf::from("imports/hashMap.kt"),
            ],
        };
        let bindings = HookBindings {
            rules: vec![crate::model::HookBinding {
                prefix: "imports/".to_string(),
                hook: "doTestWithImport".to_string(),
            }],
            default_hook: "doTest".to_string(),
        };
        let model = SuiteModel {
            schema_version: crate::model::MODEL_SCHEMA_VERSION.to_string(),
            suite: "codeFragments".to_string(),
            pattern: r"(.+)\.kt".to_string(),
            kind: EntryKind::File,
            recursive: true,
            root: build(&scan, &bindings),
        };

        let descriptor = render(&model);
        assert_eq!(descriptor.name, "CodeFragments");
        assert_eq!(descriptor.entries.len(), 1);
        assert_eq!(descriptor.entries[0].name, "testBinaryExpression");
        assert_eq!(descriptor.entries[0].fixture_path, "binaryExpression.kt");
        assert_eq!(descriptor.entries[0].hook, "doTest");

        assert_eq!(descriptor.groups.len(), 1);
        let imports = &descriptor.groups[0];
        assert_eq!(imports.name, "Imports");
        assert_eq!(imports.entries[0].name, "testHashMap");
        assert_eq!(imports.entries[0].hook, "doTestWithImport");
    }
}
