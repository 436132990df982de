//! Generator classes: named, inheritable units of scaffolding behavior.
//!
//! A [`GeneratorClass`] is built mutably at load time (declaring options and
//! hooks), then registered into the [`GeneratorCatalog`](crate::catalog::GeneratorCatalog)
//! behind an `Arc`, after which it is immutable. Namespace and short name are
//! derived once at construction; the effective hook list (own declarations
//! plus everything inherited) is memoized on first access.

use crate::config::GeneratorConfig;
use crate::hooks::{HookBlock, HookDeclaration};
use crate::options::{DescriptorStore, OptionDescriptor};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// A named, inheritable generator definition.
pub struct GeneratorClass {
    pub(crate) name: String,
    pub(crate) base_name: String,
    pub(crate) short_name: String,
    pub(crate) namespace: String,
    pub(crate) source_root: Option<PathBuf>,
    pub(crate) parent: Option<Arc<GeneratorClass>>,
    pub(crate) options: DescriptorStore,
    pub(crate) hooks: Vec<HookDeclaration>,
    pub(crate) blocks: HashMap<String, HookBlock>,
    pub(crate) effective_hooks: OnceLock<Vec<HookDeclaration>>,
}

impl GeneratorClass {
    /// Create a new generator class.
    ///
    /// `name` is the defining identifier (a conventional `Generator` or
    /// `_generator` suffix is stripped to obtain the short name);
    /// `base_name` is the top-level grouping identifier. The namespace
    /// defaults to `"<base_name>:<short_name>"`.
    pub fn new(name: impl Into<String>, base_name: impl Into<String>) -> Self {
        let name = name.into();
        let base_name = base_name.into();
        let short_name = derive_short_name(&name);
        let namespace = format!("{base_name}:{short_name}");

        Self {
            name,
            base_name,
            short_name,
            namespace,
            source_root: None,
            parent: None,
            options: DescriptorStore::new(),
            hooks: Vec::new(),
            blocks: HashMap::new(),
            effective_hooks: OnceLock::new(),
        }
    }

    /// Override the derived namespace with an explicit one.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the template asset root (owned by the templating collaborator).
    pub fn with_source_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_root = Some(path.into());
        self
    }

    /// Set the parent class this one inherits hooks and options from.
    pub fn with_parent(mut self, parent: Arc<GeneratorClass>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Defining identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level grouping identifier.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Name with the conventional suffix stripped, snake_cased.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Catalog key for this class.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Template asset root, if any.
    pub fn source_root(&self) -> Option<&PathBuf> {
        self.source_root.as_ref()
    }

    /// Parent class, if any.
    pub fn parent(&self) -> Option<&Arc<GeneratorClass>> {
        self.parent.as_ref()
    }

    /// This class's own option descriptors.
    pub fn class_options(&self) -> &DescriptorStore {
        &self.options
    }

    /// Install or overwrite an option descriptor on this class.
    ///
    /// Missing descriptor fields fall back to conventional defaults; see
    /// [`DescriptorStore::declare`].
    pub fn declare_option(&mut self, descriptor: OptionDescriptor, config: &GeneratorConfig) {
        self.options.declare(descriptor, config);
    }

    /// Remove an option descriptor. Removing an unknown name is a no-op.
    pub fn remove_option(&mut self, name: &str) -> Option<OptionDescriptor> {
        self.options.remove(name)
    }

    /// Hooks declared directly on this class.
    pub fn own_hooks(&self) -> &[HookDeclaration] {
        &self.hooks
    }

    /// Whether a custom invocation block is registered for `name`.
    pub fn has_block(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Look up the custom invocation block for `name`.
    pub(crate) fn block(&self, name: &str) -> Option<HookBlock> {
        self.blocks.get(name).cloned()
    }

    /// The inheritance-merged hook list.
    ///
    /// Computed once on first access by concatenating the parent's effective
    /// list with this class's own declarations; later changes to the parent
    /// do not retroactively affect an already-memoized class.
    pub fn effective_hooks(&self) -> &[HookDeclaration] {
        self.effective_hooks.get_or_init(|| {
            let mut merged: Vec<HookDeclaration> = self
                .parent
                .as_ref()
                .map(|p| p.effective_hooks().to_vec())
                .unwrap_or_default();
            merged.extend(self.hooks.iter().cloned());
            merged
        })
    }

    /// Whether the effective hook list has been computed.
    ///
    /// Hook declarations are frozen once this happens.
    pub(crate) fn hooks_frozen(&self) -> bool {
        self.effective_hooks.get().is_some()
    }
}

impl fmt::Debug for GeneratorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorClass")
            .field("name", &self.name)
            .field("base_name", &self.base_name)
            .field("namespace", &self.namespace)
            .field("options", &self.options)
            .field("hooks", &self.hooks)
            .field("blocks", &self.blocks.keys())
            .finish()
    }
}

/// Strip the conventional `Generator`/`_generator` suffix and snake_case.
fn derive_short_name(name: &str) -> String {
    let trimmed = name
        .strip_suffix("Generator")
        .or_else(|| name.strip_suffix("_generator"))
        .unwrap_or(name);
    to_snake_case(trimmed)
}

/// Convert CamelCase or mixed identifiers to snake_case.
fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
