//! The invocation engine: firing declared hooks at run time.
//!
//! A [`GeneratorRun`] pairs a registered generator class with the option
//! values the CLI collaborator resolved for this run. For each declared hook
//! it decides whether to fire (from the option's value), resolves the target
//! class, and hands it to the templating collaborator through the
//! [`Invoker`] seam, or to the hook's custom block if one was registered.
//!
//! Nesting depth for status output is tracked by a shared padding counter;
//! every hook invocation increments it on entry and restores it on exit,
//! including when the nested invocation fails.

use crate::catalog::GeneratorCatalog;
use crate::error::{Error, Result};
use crate::generator::GeneratorClass;
use crate::hooks::HookDeclaration;
use crate::options::{OptionValue, OptionValues};
use crate::report::{StatusKind, StatusReporter};
use crate::resolver::NamespaceResolver;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The templating/file-writing collaborator.
///
/// Performs all file-system side effects; the framework itself never
/// touches files.
pub trait Invoker: Send + Sync {
    /// Invoke a resolved generator class with positional arguments.
    fn invoke(&self, class: &Arc<GeneratorClass>, args: &[String]) -> Result<()>;
}

/// Shared state for one generation run: catalog, resolver, collaborators
/// and the padding counter. Cheap to clone; nested runs share the counter.
#[derive(Clone)]
pub struct RunContext {
    catalog: Arc<GeneratorCatalog>,
    resolver: NamespaceResolver,
    reporter: Arc<dyn StatusReporter>,
    invoker: Arc<dyn Invoker>,
    padding: Arc<AtomicUsize>,
}

impl RunContext {
    /// Create a run context.
    pub fn new(
        catalog: Arc<GeneratorCatalog>,
        resolver: NamespaceResolver,
        reporter: Arc<dyn StatusReporter>,
        invoker: Arc<dyn Invoker>,
    ) -> Self {
        Self {
            catalog,
            resolver,
            reporter,
            invoker,
            padding: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The generator catalog for this run.
    pub fn catalog(&self) -> &Arc<GeneratorCatalog> {
        &self.catalog
    }

    /// The namespace resolver for this run.
    pub fn resolver(&self) -> &NamespaceResolver {
        &self.resolver
    }

    /// Current nesting depth for status output.
    pub fn padding(&self) -> usize {
        self.padding.load(Ordering::Relaxed)
    }

    /// Increment the padding counter, restoring it when the guard drops.
    fn indent(&self) -> PaddingGuard {
        self.padding.fetch_add(1, Ordering::Relaxed);
        PaddingGuard {
            counter: Arc::clone(&self.padding),
        }
    }
}

/// Scoped hold on one level of status indentation.
struct PaddingGuard {
    counter: Arc<AtomicUsize>,
}

impl Drop for PaddingGuard {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::Relaxed);
    }
}

/// One generator execution: a class plus its resolved option values.
pub struct GeneratorRun {
    class: Arc<GeneratorClass>,
    options: OptionValues,
    args: Vec<String>,
    ctx: RunContext,
}

impl GeneratorRun {
    /// Create a run for `class` with the given resolved options and
    /// positional arguments.
    pub fn new(
        class: Arc<GeneratorClass>,
        options: OptionValues,
        args: Vec<String>,
        ctx: RunContext,
    ) -> Self {
        Self {
            class,
            options,
            args,
            ctx,
        }
    }

    /// The class being run.
    pub fn class(&self) -> &Arc<GeneratorClass> {
        &self.class
    }

    /// The resolved option values for this run.
    pub fn options(&self) -> &OptionValues {
        &self.options
    }

    /// The positional arguments for this run.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The shared run context.
    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// Fire every hook in the effective hook list.
    ///
    /// Hooks are independent: each is evaluated solely against its own
    /// option value, with no ordering contract between distinct hooks.
    pub fn run_hooks(&self) -> Result<()> {
        for decl in self.class.effective_hooks() {
            self.run_declared(decl)?;
        }
        Ok(())
    }

    /// Fire the hook declared under `name`.
    ///
    /// Errors with [`Error::MalformedHook`] if no such hook is declared on
    /// this class or its ancestors.
    pub fn run_hook(&self, name: &str) -> Result<()> {
        let decl = self
            .class
            .effective_hooks()
            .iter()
            .find(|h| h.option_name == name)
            .cloned()
            .ok_or_else(|| Error::malformed_hook(name, "no such hook declared"))?;
        self.run_declared(&decl)
    }

    fn run_declared(&self, decl: &HookDeclaration) -> Result<()> {
        let value = match self.options.get(&decl.option_name) {
            Some(value) if value.is_truthy() => value,
            _ => {
                tracing::debug!(hook = %decl.option_name, "hook skipped");
                return Ok(());
            }
        };

        // A boolean hook invokes the generator named after the hook itself.
        let token = match value {
            OptionValue::Bool(true) => decl.option_name.clone(),
            OptionValue::Str(s) => s.clone(),
            OptionValue::Bool(false) => unreachable!("falsy values are skipped above"),
        };

        match self
            .ctx
            .resolver
            .resolve(&self.ctx.catalog, &token, &decl.base, &decl.as_token)
        {
            Some(target) => {
                self.ctx
                    .reporter
                    .report(StatusKind::Invoke, &token, decl.level, self.ctx.padding());
                let _guard = self.ctx.indent();
                match self.class.block(&decl.option_name) {
                    Some(block) => block(self, &target),
                    None => self.ctx.invoker.invoke(&target, &self.args),
                }
            }
            None => {
                self.ctx.reporter.report(
                    StatusKind::Error,
                    &format!("{token} [not found]"),
                    decl.level,
                    self.ctx.padding(),
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::hooks::{HookBlock, HookOptions};
    use crate::report::ReportLevel;
    use std::sync::Mutex;

    #[derive(Default)]
    struct SpyReporter {
        lines: Mutex<Vec<(StatusKind, String, usize)>>,
    }

    impl StatusReporter for SpyReporter {
        fn report(&self, kind: StatusKind, message: &str, _level: ReportLevel, padding: usize) {
            self.lines
                .lock()
                .unwrap()
                .push((kind, message.to_string(), padding));
        }
    }

    #[derive(Default)]
    struct SpyInvoker {
        calls: Mutex<Vec<(String, Vec<String>)>>,
        fail: bool,
    }

    impl Invoker for SpyInvoker {
        fn invoke(&self, class: &Arc<GeneratorClass>, args: &[String]) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((class.namespace().to_string(), args.to_vec()));
            if self.fail {
                Err(Error::invoke(class.namespace(), "boom"))
            } else {
                Ok(())
            }
        }
    }

    fn controller_class() -> GeneratorClass {
        let mut class = GeneratorClass::new("ControllerGenerator", "rails");
        class
            .declare_hook(
                &["test_framework"],
                HookOptions::new(),
                &GeneratorConfig::default(),
                None,
            )
            .unwrap();
        class
    }

    fn run_with(
        class: GeneratorClass,
        options: OptionValues,
        register_target: bool,
        fail_invoker: bool,
    ) -> (GeneratorRun, Arc<SpyReporter>, Arc<SpyInvoker>) {
        let mut catalog = GeneratorCatalog::new();
        if register_target {
            catalog.register(
                GeneratorClass::new("UnitTestGenerator", "unit_test")
                    .with_namespace("unit_test:rails:controller"),
            );
        }
        let class = catalog.register(class);
        let reporter = Arc::new(SpyReporter::default());
        let invoker = Arc::new(SpyInvoker {
            fail: fail_invoker,
            ..Default::default()
        });
        let ctx = RunContext::new(
            Arc::new(catalog),
            NamespaceResolver::new("rails"),
            Arc::clone(&reporter) as Arc<dyn StatusReporter>,
            Arc::clone(&invoker) as Arc<dyn Invoker>,
        );
        let run = GeneratorRun::new(class, options, vec!["account".to_string()], ctx);
        (run, reporter, invoker)
    }

    #[test]
    fn test_absent_option_skips_silently() {
        let (run, reporter, invoker) = run_with(controller_class(), OptionValues::new(), true, false);
        run.run_hooks().unwrap();

        assert!(reporter.lines.lock().unwrap().is_empty());
        assert!(invoker.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_falsy_option_skips_silently() {
        let options = OptionValues::new().with("test_framework", OptionValue::Bool(false));
        let (run, reporter, invoker) = run_with(controller_class(), options, true, false);
        run.run_hooks().unwrap();

        assert!(reporter.lines.lock().unwrap().is_empty());
        assert!(invoker.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_string_value_invokes_target() {
        let options =
            OptionValues::new().with("test_framework", OptionValue::Str("unit_test".to_string()));
        let (run, reporter, invoker) = run_with(controller_class(), options, true, false);
        run.run_hooks().unwrap();

        let lines = reporter.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], (StatusKind::Invoke, "unit_test".to_string(), 0));

        let calls = invoker.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "unit_test:rails:controller");
        assert_eq!(calls[0].1, vec!["account".to_string()]);
    }

    #[test]
    fn test_boolean_true_targets_hook_name() {
        let mut class = GeneratorClass::new("ApplicationGenerator", "rails");
        class
            .declare_hook(&["webrat"], HookOptions::new(), &GeneratorConfig::default(), None)
            .unwrap();

        let mut catalog = GeneratorCatalog::new();
        catalog.register(GeneratorClass::new("WebratGenerator", "webrat").with_namespace("webrat"));
        let class = catalog.register(class);

        let reporter = Arc::new(SpyReporter::default());
        let invoker = Arc::new(SpyInvoker::default());
        let ctx = RunContext::new(
            Arc::new(catalog),
            NamespaceResolver::new("rails"),
            Arc::clone(&reporter) as Arc<dyn StatusReporter>,
            Arc::clone(&invoker) as Arc<dyn Invoker>,
        );
        let options = OptionValues::new().with("webrat", OptionValue::Bool(true));
        let run = GeneratorRun::new(class, options, Vec::new(), ctx);
        run.run_hooks().unwrap();

        let lines = reporter.lines.lock().unwrap();
        assert_eq!(lines[0].1, "webrat");
        assert_eq!(invoker.calls.lock().unwrap()[0].0, "webrat");
    }

    #[test]
    fn test_unresolved_target_reports_and_continues() {
        let options =
            OptionValues::new().with("test_framework", OptionValue::Str("rspec".to_string()));
        let (run, reporter, invoker) = run_with(controller_class(), options, false, false);
        run.run_hooks().unwrap();

        let lines = reporter.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, StatusKind::Error);
        assert_eq!(lines[0].1, "rspec [not found]");
        assert!(invoker.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_padding_restored_on_success_and_not_found() {
        let options =
            OptionValues::new().with("test_framework", OptionValue::Str("unit_test".to_string()));
        let (run, _, _) = run_with(controller_class(), options, true, false);
        assert_eq!(run.context().padding(), 0);
        run.run_hooks().unwrap();
        assert_eq!(run.context().padding(), 0);

        let options =
            OptionValues::new().with("test_framework", OptionValue::Str("rspec".to_string()));
        let (run, _, _) = run_with(controller_class(), options, false, false);
        run.run_hooks().unwrap();
        assert_eq!(run.context().padding(), 0);
    }

    #[test]
    fn test_padding_restored_on_invoker_failure() {
        let options =
            OptionValues::new().with("test_framework", OptionValue::Str("unit_test".to_string()));
        let (run, _, _) = run_with(controller_class(), options, true, true);
        assert!(run.run_hooks().is_err());
        assert_eq!(run.context().padding(), 0);
    }

    #[test]
    fn test_custom_block_replaces_default_invocation() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_in_block = Arc::clone(&seen);
        let block: HookBlock = Arc::new(move |_, target| {
            seen_in_block
                .lock()
                .unwrap()
                .push(target.namespace().to_string());
            Ok(())
        });

        let mut class = GeneratorClass::new("ControllerGenerator", "rails");
        class
            .declare_hook(
                &["test_framework"],
                HookOptions::new(),
                &GeneratorConfig::default(),
                Some(block),
            )
            .unwrap();

        let options =
            OptionValues::new().with("test_framework", OptionValue::Str("unit_test".to_string()));
        let (run, _, invoker) = run_with(class, options, true, false);
        run.run_hooks().unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["unit_test:rails:controller"]);
        assert!(invoker.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_run_hook_unknown_name_errors() {
        let (run, _, _) = run_with(controller_class(), OptionValues::new(), false, false);
        assert!(matches!(
            run.run_hook("nonexistent"),
            Err(Error::MalformedHook { .. })
        ));
    }
}
