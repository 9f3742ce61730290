//! Navigation references for fixtures.

use std::path::Path;

/// Format a fixture path into a navigable locator string.
///
/// Total over any path the scanner can produce: never fails, never panics.
/// The locator is the root joined with the relative path, forward-slash
/// separated, suitable for jump-to-source tooling.
#[must_use]
pub fn format_reference(root: &Path, relative: &str) -> String {
    let root = root
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if root.is_empty() {
        relative.trim_start_matches('/').to_string()
    } else {
        format!("{}/{}", root.trim_end_matches('/'), relative.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_joins_root_and_relative() {
        assert_eq!(
            format_reference(Path::new("idea/testData/checker"), "imports/hashMap.kt"),
            "idea/testData/checker/imports/hashMap.kt"
        );
    }

    #[test]
    fn empty_root_yields_the_relative_path() {
        assert_eq!(format_reference(Path::new(""), "case.kt"), "case.kt");
    }

    #[test]
    fn stray_slashes_are_normalized() {
        assert_eq!(
            format_reference(Path::new("root/"), "/case.kt"),
            "root/case.kt"
        );
    }
}
