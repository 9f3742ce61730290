//! Operation-hook registry.
//!
//! Hooks are the opaque semantic test operations supplied by the surrounding
//! framework. The harness never inspects their internals; it only dispatches
//! a fixture path and records pass or fail.

use std::collections::BTreeMap;
use std::path::Path;

use suitegen_core::ConfigError;

/// An opaque test routine invoked with a fixture's path.
pub type HookFn = Box<dyn Fn(&Path) -> Result<(), String>>;

/// Maps hook identifiers to operation hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: BTreeMap<String, HookFn>,
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook under an identifier. Re-registering replaces the
    /// previous hook.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        hook: impl Fn(&Path) -> Result<(), String> + 'static,
    ) {
        self.hooks.insert(id.into(), Box::new(hook));
    }

    /// Look up a hook; an unknown identifier is a configuration error.
    pub fn get(&self, id: &str) -> Result<&HookFn, ConfigError> {
        self.hooks
            .get(id)
            .ok_or_else(|| ConfigError::UnknownHook(id.to_string()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.hooks.contains_key(id)
    }

    /// Registered hook identifiers, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.hooks.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_hook_is_dispatchable() {
        let mut registry = HookRegistry::new();
        registry.register("doTest", |_path| Ok(()));
        let hook = registry.get("doTest").unwrap();
        assert!(hook(Path::new("a.kt")).is_ok());
    }

    #[test]
    fn unknown_hook_is_a_config_error() {
        let registry = HookRegistry::new();
        let err = registry.get("doTestWithImport");
        assert!(matches!(err, Err(ConfigError::UnknownHook(_))));
    }

    #[test]
    fn ids_are_sorted() {
        let mut registry = HookRegistry::new();
        registry.register("doTestWithImport", |_| Ok(()));
        registry.register("doTest", |_| Ok(()));
        assert_eq!(registry.ids(), vec!["doTest", "doTestWithImport"]);
    }
}
