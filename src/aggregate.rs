//! Option aggregation for help output.
//!
//! Walks a class's hooks, resolves each to its candidate target class
//! without invoking anything, and merges the target's own option
//! descriptors into a grouped view. Used at help-request time, often
//! before any generator instance exists, so hook values come from the
//! declared descriptors rather than a run's option values.
//!
//! Recursion into a resolved target's own hooks goes exactly one extra
//! level: deep enough to surface the options of direct invocation targets'
//! invocations, shallow enough that two generator families hooking each
//! other cannot loop (a visited set guards the remaining mutual case).

use crate::catalog::GeneratorCatalog;
use crate::generator::GeneratorClass;
use crate::options::{humanize, OptionDefault, OptionDescriptor, OptionKind};
use crate::resolver::NamespaceResolver;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Aggregated help view: group label to the option descriptors it claims.
pub type GroupedOptions = IndexMap<String, Vec<OptionDescriptor>>;

// Direct targets plus their own direct targets.
const MAX_DEPTH: usize = 1;

/// Collect the options contributed by a class's hook targets.
///
/// `base_options` names options that must never be claimed by a group
/// (typically the class's own option names). Options declared into an
/// explicit group are skipped (already grouped elsewhere), as is anything
/// an earlier group already claimed. Resolution failures are skipped
/// silently; nothing is ever instantiated or invoked.
pub fn collect_invocation_options(
    class: &Arc<GeneratorClass>,
    catalog: &GeneratorCatalog,
    resolver: &NamespaceResolver,
    base_options: &HashSet<String>,
) -> GroupedOptions {
    let mut groups = GroupedOptions::new();
    let mut claimed = HashSet::new();
    let mut visited = HashSet::new();
    visited.insert(class.namespace().to_string());

    visit(
        class,
        catalog,
        resolver,
        base_options,
        &mut groups,
        &mut claimed,
        &mut visited,
        0,
    );
    groups
}

#[allow(clippy::too_many_arguments)]
fn visit(
    class: &Arc<GeneratorClass>,
    catalog: &GeneratorCatalog,
    resolver: &NamespaceResolver,
    base_options: &HashSet<String>,
    groups: &mut GroupedOptions,
    claimed: &mut HashSet<String>,
    visited: &mut HashSet<String>,
    depth: usize,
) {
    for decl in class.effective_hooks() {
        let Some(descriptor) = class.class_options().get(&decl.option_name) else {
            continue;
        };

        // At help time a boolean hook stands for the generator named after
        // itself; a string hook stands for its default value.
        let token = match descriptor.kind {
            OptionKind::Bool => decl.option_name.clone(),
            OptionKind::Str => match &descriptor.default {
                OptionDefault::Value(v) if !v.is_empty() => v.clone(),
                _ => continue,
            },
        };

        let Some(target) = resolver.resolve(catalog, &token, &decl.base, &decl.as_token) else {
            continue;
        };
        if !visited.insert(target.namespace().to_string()) {
            continue;
        }

        let mut merged = Vec::new();
        for option in target.class_options().iter() {
            if base_options.contains(&option.name)
                || option.group.is_some()
                || claimed.contains(&option.name)
            {
                continue;
            }
            claimed.insert(option.name.clone());
            merged.push(option.clone());
        }
        if !merged.is_empty() {
            groups
                .entry(humanize(&token))
                .or_default()
                .extend(merged);
        }

        if depth < MAX_DEPTH {
            visit(
                &target,
                catalog,
                resolver,
                base_options,
                groups,
                claimed,
                visited,
                depth + 1,
            );
        }
    }
}
