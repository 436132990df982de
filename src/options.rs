//! Option descriptors and the per-class descriptor store.
//!
//! Every generator class owns a [`DescriptorStore`]: the mapping from option
//! name to [`OptionDescriptor`]. Descriptors carry a tagged default
//! ([`OptionDefault`]) decided at declaration time, so nothing downstream
//! needs to inspect value types at run time.
//!
//! Run-time option *values* (what the CLI collaborator resolved from argv)
//! are represented separately by [`OptionValues`].

use crate::config::GeneratorConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The value shape an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionKind {
    /// A string-valued option (`--orm=active_record`).
    Str,
    /// A flag (`--skip-migration`).
    Bool,
}

/// Tagged default value of an option.
///
/// Decided once at declaration time; replaces runtime type inspection of
/// default values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum OptionDefault {
    /// No default configured.
    #[default]
    Unset,
    /// Flag-style default.
    Bool(bool),
    /// Token default, e.g. the generator namespace to invoke.
    Value(String),
}

impl OptionDefault {
    /// Whether a default is present.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Description of a single command-line-style option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    /// Option name, e.g. `test_framework`.
    pub name: String,

    /// Value shape.
    pub kind: OptionKind,

    /// Default value.
    pub default: OptionDefault,

    /// Short/alternate flags, e.g. `-t`.
    pub aliases: Vec<String>,

    /// Human description shown in help output.
    pub description: Option<String>,

    /// Value placeholder shown in help output, e.g. `[NAME]`.
    pub banner: Option<String>,

    /// Declaring group; `None` means the class's default group.
    pub group: Option<String>,
}

impl OptionDescriptor {
    /// Create a new descriptor with the given name and kind.
    pub fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: OptionDefault::Unset,
            aliases: Vec::new(),
            description: None,
            banner: None,
            group: None,
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, default: OptionDefault) -> Self {
        self.default = default;
        self
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the banner.
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Set the declaring group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Per-class mapping from option name to descriptor.
///
/// Insertion order is preserved so help output is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorStore {
    options: IndexMap<String, OptionDescriptor>,
}

impl DescriptorStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or overwrite a descriptor.
    ///
    /// Missing fields get conventional defaults: the description is
    /// synthesized from the name, and the default value and aliases are
    /// pulled from the process-wide configuration by name.
    pub fn declare(&mut self, mut descriptor: OptionDescriptor, config: &GeneratorConfig) {
        if descriptor.description.is_none() {
            descriptor.description = Some(humanize(&descriptor.name));
        }
        if !descriptor.default.is_set() {
            descriptor.default = config.option_default(&descriptor.name);
        }
        if descriptor.aliases.is_empty() {
            descriptor.aliases = config.option_aliases(&descriptor.name);
        }
        self.options.insert(descriptor.name.clone(), descriptor);
    }

    /// Delete a descriptor. Removing an unknown name is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<OptionDescriptor> {
        self.options.shift_remove(name)
    }

    /// Get a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
        self.options.get(name)
    }

    /// Whether a descriptor exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Iterate over descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.values()
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// A resolved run-time option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// Whether this value should trigger the behavior it guards.
    ///
    /// `false` and the empty string are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Str(s) => !s.is_empty(),
        }
    }
}

/// Run-time option values, as resolved by the option-parsing collaborator.
#[derive(Debug, Clone, Default)]
pub struct OptionValues {
    values: HashMap<String, OptionValue>,
}

impl OptionValues {
    /// Create an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder style.
    pub fn with(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.set(name, value);
        self
    }

    /// Set a value.
    pub fn set(&mut self, name: impl Into<String>, value: OptionValue) {
        self.values.insert(name.into(), value);
    }

    /// Get a value by option name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }
}

/// Convert an identifier to a human-readable phrase.
///
/// `"test_framework"` becomes `"Test framework"`.
pub(crate) fn humanize(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
