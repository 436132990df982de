//! Hook declarations: optional dependencies of one generator on another.
//!
//! Declaring a hook installs the option that triggers it, records the
//! `(name, base, as)` triple used for namespace resolution, and optionally
//! stores a custom invocation block. The original design synthesized one
//! callable per hook name; here a single data-driven
//! [`GeneratorRun::run_hook`](crate::invoke::GeneratorRun::run_hook)
//! interprets the stored declarations instead.

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::generator::GeneratorClass;
use crate::invoke::GeneratorRun;
use crate::options::{humanize, OptionDefault, OptionDescriptor, OptionKind};
use crate::report::ReportLevel;
use std::sync::Arc;

/// A declared hook: ties an option name to a resolution target.
#[derive(Debug, Clone, PartialEq)]
pub struct HookDeclaration {
    /// The option name that triggers this hook.
    pub option_name: String,

    /// Base segment used when building candidate namespaces.
    pub base: String,

    /// Target category segment, defaulting to the declaring class's
    /// short name.
    pub as_token: String,

    /// Verbosity of the status line emitted when the hook fires.
    pub level: ReportLevel,
}

/// A custom invocation block registered alongside a hook.
///
/// Receives the running generator and the resolved target class instead of
/// the default invocation.
pub type HookBlock =
    Arc<dyn Fn(&GeneratorRun, &Arc<GeneratorClass>) -> Result<()> + Send + Sync>;

/// Settings for a hook declaration. Explicit values win over computed
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct HookOptions {
    /// Target category override; defaults to the class's short name.
    pub as_token: Option<String>,

    /// Lookup base override; defaults to the class's base name.
    pub in_base: Option<String>,

    /// Status line verbosity; defaults to [`ReportLevel::Info`].
    pub level: Option<ReportLevel>,

    /// Explicit option kind.
    pub kind: Option<OptionKind>,

    /// Explicit default value.
    pub default: OptionDefault,

    /// Explicit aliases.
    pub aliases: Vec<String>,

    /// Explicit description.
    pub description: Option<String>,

    /// Explicit declaring group.
    pub group: Option<String>,
}

impl HookOptions {
    /// Create empty hook options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the target category segment.
    pub fn with_as_token(mut self, as_token: impl Into<String>) -> Self {
        self.as_token = Some(as_token.into());
        self
    }

    /// Override the lookup base segment.
    pub fn in_base(mut self, base: impl Into<String>) -> Self {
        self.in_base = Some(base.into());
        self
    }

    /// Set the status line verbosity.
    pub fn with_level(mut self, level: ReportLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Declare the option kind explicitly.
    pub fn with_kind(mut self, kind: OptionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the option default.
    pub fn with_default(mut self, default: OptionDefault) -> Self {
        self.default = default;
        self
    }

    /// Add an option alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the option description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the declaring group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

impl GeneratorClass {
    /// Declare hooks for each name in `names`.
    ///
    /// For each name this installs the triggering option (explicit settings
    /// win, then process-wide config, then computed defaults), appends the
    /// hook to this class's own list (re-declaring a name overwrites the
    /// prior entry), and stores `block` keyed by name if given.
    ///
    /// Fails fast with [`Error::MalformedHook`] on conflicting option
    /// settings or when declared after the effective hook list has been
    /// memoized.
    pub fn declare_hook(
        &mut self,
        names: &[&str],
        options: HookOptions,
        config: &GeneratorConfig,
        block: Option<HookBlock>,
    ) -> Result<()> {
        for name in names {
            self.declare_one(name, &options, config, block.clone())?;
        }
        Ok(())
    }

    fn declare_one(
        &mut self,
        name: &str,
        options: &HookOptions,
        config: &GeneratorConfig,
        block: Option<HookBlock>,
    ) -> Result<()> {
        if self.hooks_frozen() {
            return Err(Error::malformed_hook(
                name,
                "hooks cannot change once the effective hook list has been computed",
            ));
        }

        let as_token = options
            .as_token
            .clone()
            .unwrap_or_else(|| self.short_name.clone());
        let base = options
            .in_base
            .clone()
            .unwrap_or_else(|| self.base_name.clone());
        let level = options.level.unwrap_or_default();

        let effective_default = if options.default.is_set() {
            options.default.clone()
        } else {
            config.option_default(name)
        };

        if options.kind == Some(OptionKind::Bool)
            && matches!(effective_default, OptionDefault::Value(_))
        {
            return Err(Error::malformed_hook(
                name,
                "boolean hook cannot carry a string default",
            ));
        }

        let kind = options.kind.unwrap_or(match &effective_default {
            OptionDefault::Bool(_) => OptionKind::Bool,
            _ => OptionKind::Str,
        });

        // String-valued hooks name a generator to invoke; flag-like hooks
        // carry no value banner.
        let mut descriptor = OptionDescriptor::new(name, kind).with_default(options.default.clone());
        if kind == OptionKind::Str && !matches!(effective_default, OptionDefault::Bool(_)) {
            descriptor = descriptor
                .with_description(format!("{} to be invoked", humanize(name)))
                .with_banner(format!("[{}]", name.to_uppercase()));
        }
        if let Some(description) = &options.description {
            descriptor.description = Some(description.clone());
        }
        if let Some(group) = &options.group {
            descriptor.group = Some(group.clone());
        }
        descriptor.aliases = options.aliases.clone();
        self.options.declare(descriptor, config);

        let declaration = HookDeclaration {
            option_name: name.to_string(),
            base,
            as_token,
            level,
        };
        match self.hooks.iter_mut().find(|h| h.option_name == name) {
            Some(existing) => *existing = declaration,
            None => self.hooks.push(declaration),
        }

        if let Some(block) = block {
            self.blocks.insert(name.to_string(), block);
        }
        Ok(())
    }

    /// Remove hooks for each name in `names`.
    ///
    /// Reverses declaration atomically per name: the option, the hook-list
    /// entry and the custom block all go together. Removing an undeclared
    /// name is a no-op.
    pub fn remove_hook(&mut self, names: &[&str]) -> Result<()> {
        for name in names {
            if self.hooks_frozen() {
                return Err(Error::malformed_hook(
                    *name,
                    "hooks cannot change once the effective hook list has been computed",
                ));
            }
            self.options.remove(name);
            self.hooks.retain(|h| h.option_name != *name);
            self.blocks.remove(*name);
        }
        Ok(())
    }
}
