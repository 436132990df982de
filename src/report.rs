//! Status reporting for generator invocations.
//!
//! The invocation engine is observational about its progress: it emits one
//! status line when a hook fires and one when a hook target cannot be
//! resolved. Rendering is behind the [`StatusReporter`] trait so embedders
//! can capture or silence output; [`ConsoleReporter`] is the default
//! terminal implementation.

use colored::Colorize;

/// The kind of status line being emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A hook resolved and its target is about to be invoked.
    Invoke,
    /// A hook target could not be resolved (reported, non-fatal).
    Error,
}

/// Verbosity level attached to a hook declaration.
///
/// Controls how prominently the status line for that hook is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLevel {
    Debug,
    #[default]
    Info,
    Warn,
}

/// Receiver for "invoke"/"error" status lines.
///
/// Purely observational; implementations must not influence control flow.
pub trait StatusReporter: Send + Sync {
    /// Report a status line at the given nesting depth.
    fn report(&self, kind: StatusKind, message: &str, level: ReportLevel, padding: usize);
}

/// Default reporter that renders colored, indented status lines.
///
/// Output follows the conventional scaffolding format: a right-aligned
/// colored action column followed by the target name, indented two spaces
/// per nesting level.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a new console reporter.
    pub fn new() -> Self {
        Self
    }
}

impl StatusReporter for ConsoleReporter {
    fn report(&self, kind: StatusKind, message: &str, level: ReportLevel, padding: usize) {
        let action = match kind {
            StatusKind::Invoke => "invoke".green(),
            StatusKind::Error => "error".red().bold(),
        };
        let action = match level {
            ReportLevel::Debug => action.dimmed(),
            ReportLevel::Info => action,
            ReportLevel::Warn => action.yellow(),
        };
        let indent = "  ".repeat(padding);
        println!("{:>12}  {}{}", action, indent, message);
    }
}

/// Reporter that discards all status lines.
#[derive(Debug, Default)]
pub struct NullReporter;

impl StatusReporter for NullReporter {
    fn report(&self, _kind: StatusKind, _message: &str, _level: ReportLevel, _padding: usize) {}
}
