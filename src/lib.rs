//! # genweave
//!
//! A composition framework for code generators: independently authored
//! generators declare optional dependencies on other generators ("hooks"),
//! the framework resolves which concrete implementation satisfies each hook
//! by searching a layered namespace, and invokes it while aggregating its
//! option metadata back into the parent's help view.
//!
//! `genweave` deliberately does *not* render templates, write files, or
//! parse argv. Those concerns live behind trait seams:
//!
//! | Collaborator | Seam |
//! |--------------|------|
//! | Templating / file writing | [`Invoker`] |
//! | Status output | [`StatusReporter`] |
//! | Host environment namespace | [`HostScope`] |
//! | Resolved CLI values | [`OptionValues`] (handed in by the caller) |
//!
//! ## Quick Start
//!
//! ```rust
//! use genweave::{
//!     GeneratorCatalog, GeneratorClass, GeneratorConfig, HookOptions, NamespaceResolver,
//! };
//!
//! let config = GeneratorConfig::default();
//! let mut catalog = GeneratorCatalog::new();
//!
//! // A controller generator that optionally invokes a test framework.
//! let mut controller = GeneratorClass::new("ControllerGenerator", "rails");
//! controller
//!     .declare_hook(&["test_framework"], HookOptions::new(), &config, None)
//!     .unwrap();
//! let controller = catalog.register(controller);
//! assert_eq!(controller.namespace(), "rails:controller");
//!
//! // A third-party test framework generator scoped to controllers.
//! catalog.register(
//!     GeneratorClass::new("UnitTestGenerator", "unit_test")
//!         .with_namespace("unit_test:rails:controller"),
//! );
//!
//! // Resolution probes host, then scoped third-party, then bare namespaces.
//! let resolver = NamespaceResolver::new("rails");
//! let target = resolver
//!     .resolve(&catalog, "unit_test", "rails", "controller")
//!     .unwrap();
//! assert_eq!(target.namespace(), "unit_test:rails:controller");
//! ```
//!
//! ## Resolution Order
//!
//! For a hook value `token` declared with base `base` and target category
//! `as`, candidates are probed in order:
//!
//! 1. `<host>:<base>:<token>` — host-framework implementations win
//! 2. `<token>:<base>:<as>` — third-party, scoped to the category
//! 3. `<token>` — bare top-level namespace as last resort
//!
//! An unresolvable hook target is reported through the status channel and
//! the run continues; it never aborts generation. Only a name collision
//! ([`check_collisions`]) or a malformed hook declaration can abort.
//!
//! ## Hooks at Run Time
//!
//! At run time, [`GeneratorRun::run_hooks`] evaluates each declared hook
//! against its resolved option value: absent or falsy values skip silently;
//! a boolean `true` invokes the generator named after the hook itself; a
//! string names the generator to invoke. Nested invocations share a padding
//! counter so status output indents with depth, restored on every exit path.
//!
//! ## Hooks at Help Time
//!
//! [`collect_invocation_options`] walks the same hook declarations without
//! invoking anything, resolving each hook's *default* target and merging the
//! target's own options into a grouped, de-duplicated help view.

pub mod aggregate;
pub mod catalog;
pub mod collision;
pub mod config;
pub mod error;
pub mod generator;
pub mod hooks;
pub mod invoke;
pub mod options;
pub mod report;
pub mod resolver;

pub use aggregate::{collect_invocation_options, GroupedOptions};
pub use catalog::GeneratorCatalog;
pub use collision::{check_collisions, HostScope, MemoryScope, RunMode};
pub use config::{GeneratorConfig, CONFIG_FILENAME};
pub use error::{ConfigError, Error, Result};
pub use generator::GeneratorClass;
pub use hooks::{HookBlock, HookDeclaration, HookOptions};
pub use invoke::{GeneratorRun, Invoker, RunContext};
pub use options::{
    DescriptorStore, OptionDefault, OptionDescriptor, OptionKind, OptionValue, OptionValues,
};
pub use report::{ConsoleReporter, NullReporter, ReportLevel, StatusKind, StatusReporter};
pub use resolver::NamespaceResolver;
