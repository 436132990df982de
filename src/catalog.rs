//! The process-wide generator catalog.
//!
//! Maps namespace strings to registered generator classes. Append-only
//! while generator classes load; read-only afterward from the framework's
//! perspective.

use crate::generator::GeneratorClass;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of generator classes keyed by namespace string.
#[derive(Debug, Default)]
pub struct GeneratorCatalog {
    classes: HashMap<String, Arc<GeneratorClass>>,
}

impl GeneratorCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class under its namespace, returning the shared handle.
    ///
    /// Registering a second class under the same namespace replaces the
    /// first.
    pub fn register(&mut self, class: GeneratorClass) -> Arc<GeneratorClass> {
        let class = Arc::new(class);
        tracing::debug!(namespace = %class.namespace(), "registering generator");
        self.classes
            .insert(class.namespace().to_string(), Arc::clone(&class));
        class
    }

    /// Look up a class by exact namespace.
    pub fn get(&self, namespace: &str) -> Option<Arc<GeneratorClass>> {
        self.classes.get(namespace).cloned()
    }

    /// Whether a class is registered under `namespace`.
    pub fn contains(&self, namespace: &str) -> bool {
        self.classes.contains_key(namespace)
    }

    /// All registered namespaces, sorted.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = GeneratorCatalog::new();
        let class = catalog.register(GeneratorClass::new("ControllerGenerator", "rails"));

        assert_eq!(class.namespace(), "rails:controller");
        assert!(catalog.contains("rails:controller"));
        let found = catalog.get("rails:controller").unwrap();
        assert!(Arc::ptr_eq(&class, &found));
        assert!(catalog.get("rails:model").is_none());
    }

    #[test]
    fn test_namespaces_sorted() {
        let mut catalog = GeneratorCatalog::new();
        catalog.register(GeneratorClass::new("ModelGenerator", "rails"));
        catalog.register(GeneratorClass::new("ControllerGenerator", "rails"));
        catalog.register(GeneratorClass::new("ControllerGenerator", "rspec"));

        assert_eq!(
            catalog.namespaces(),
            vec!["rails:controller", "rails:model", "rspec:controller"]
        );
    }

    #[test]
    fn test_reregister_replaces() {
        let mut catalog = GeneratorCatalog::new();
        catalog.register(GeneratorClass::new("ControllerGenerator", "rails"));
        catalog.register(
            GeneratorClass::new("OtherGenerator", "other").with_namespace("rails:controller"),
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("rails:controller").unwrap().name(), "OtherGenerator");
    }
}
