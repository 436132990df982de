//! Namespace resolution: mapping a token to a concrete generator class.
//!
//! Resolution probes an ordered list of candidate namespaces and returns the
//! first registered hit. The order favors host-framework implementations for
//! built-in categories, then third-party implementations scoped to the
//! requesting category, then a bare top-level namespace as last resort.

use crate::catalog::GeneratorCatalog;
use crate::config::GeneratorConfig;
use crate::generator::GeneratorClass;
use std::sync::Arc;

/// Resolves namespace tokens against a catalog.
#[derive(Debug, Clone)]
pub struct NamespaceResolver {
    host: String,
}

impl NamespaceResolver {
    /// Create a resolver with the given host-framework prefix.
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Create a resolver from process-wide configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.host.clone())
    }

    /// The host-framework prefix.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The ordered candidate namespaces for `(token, base, as_token)`.
    pub fn candidates(&self, token: &str, base: &str, as_token: &str) -> [String; 3] {
        [
            format!("{}:{}:{}", self.host, base, token),
            format!("{token}:{base}:{as_token}"),
            token.to_string(),
        ]
    }

    /// Return the first registered class among the candidates, or `None`.
    ///
    /// Pure in `(token, base, as_token, catalog state)`; never mutates the
    /// catalog. Callers must handle `None` by reporting "not found" rather
    /// than failing silently.
    pub fn resolve(
        &self,
        catalog: &GeneratorCatalog,
        token: &str,
        base: &str,
        as_token: &str,
    ) -> Option<Arc<GeneratorClass>> {
        for namespace in self.candidates(token, base, as_token) {
            tracing::debug!(%namespace, "probing catalog");
            if let Some(class) = catalog.get(&namespace) {
                return Some(class);
            }
        }
        tracing::debug!(%token, %base, %as_token, "no candidate namespace matched");
        None
    }
}
