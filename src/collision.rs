//! Collision guard: refusing to generate names that already exist.
//!
//! Before a generation run writes anything, the proposed fully-qualified
//! names are checked against the host environment's existing namespace.
//! The host environment is behind the [`HostScope`] trait; [`MemoryScope`]
//! is an in-memory implementation for tests and embedders without a live
//! host to introspect.

use crate::error::{Error, Result};
use std::collections::HashSet;

/// Whether the current run creates names or removes them.
///
/// Collision checking only applies when generating; a rollback run skips
/// it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Generate,
    Revoke,
}

/// Read-only view of the host environment's namespace.
pub trait HostScope {
    /// Whether `path` names an existing enclosing scope.
    ///
    /// The empty path is the root scope and always exists.
    fn has_scope(&self, path: &[&str]) -> bool;

    /// Whether `name` is defined as a concrete entity inside `path`.
    fn defines(&self, path: &[&str], name: &str) -> bool;
}

/// Check proposed fully-qualified names against the host environment.
///
/// Names are split on `"::"`. A name collides when every enclosing segment
/// resolves to an existing scope and the final short name is already
/// defined there; the first collision aborts with [`Error::NameCollision`].
/// Blank names are skipped without error, and the whole check is skipped
/// in [`RunMode::Revoke`].
pub fn check_collisions<S: AsRef<str>>(
    scope: &dyn HostScope,
    mode: RunMode,
    names: &[S],
) -> Result<()> {
    if mode == RunMode::Revoke {
        return Ok(());
    }

    'names: for raw in names {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            continue;
        }

        let segments: Vec<&str> = name.split("::").collect();
        let Some((last, path)) = segments.split_last() else {
            continue;
        };

        for depth in 1..=path.len() {
            if !scope.has_scope(&path[..depth]) {
                continue 'names;
            }
        }

        if scope.defines(path, last) {
            return Err(Error::collision(name));
        }
    }
    Ok(())
}

/// In-memory nested-scope implementation of [`HostScope`].
#[derive(Debug, Default)]
pub struct MemoryScope {
    scopes: HashSet<Vec<String>>,
    entities: HashSet<Vec<String>>,
}

impl MemoryScope {
    /// Create an empty scope tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a fully-qualified entity, e.g. `"Foo::Bar"`.
    ///
    /// Every prefix becomes an existing scope (a defined entity can itself
    /// enclose further names).
    pub fn define(&mut self, qualified: &str) {
        let segments: Vec<String> = qualified.split("::").map(str::to_string).collect();
        for depth in 1..=segments.len() {
            self.scopes.insert(segments[..depth].to_vec());
        }
        self.entities.insert(segments);
    }
}

impl HostScope for MemoryScope {
    fn has_scope(&self, path: &[&str]) -> bool {
        if path.is_empty() {
            return true;
        }
        let path: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        self.scopes.contains(&path)
    }

    fn defines(&self, path: &[&str], name: &str) -> bool {
        let mut full: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        full.push(name.to_string());
        self.entities.contains(&full)
    }
}
