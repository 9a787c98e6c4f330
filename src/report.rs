//! Aggregation of per-library results into the final output line.

use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ResolveError;
use crate::inventory::SystemInventory;
use crate::resolve::Resolver;

/// Runtime dependencies assumed when the target has no dynamic section,
/// which is what a cross-compiled build looks like to the host's `ldd`.
pub const FALLBACK_CONSTRAINTS: &[&str] = &[
    "libcairo2 (>= 1.18.0)",
    "libdav1d7 (>= 1.4.1)",
    "libgdk-pixbuf-2.0-0 (>= 2.42.10)",
    "libgtk-4-1 (>= 4.14.5)",
    "libpango-1.0-0 (>= 1.52.1)",
];

/// The outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Resolved constraints, sorted and deduplicated.
    Constraints(Vec<String>),
    /// No dynamic dependencies were found.
    Fallback,
    /// At least one library could not be resolved cleanly.
    Failed(Vec<ResolveError>),
}

impl Report {
    /// Process exit status: 0 for printed output, 2 for failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            Report::Constraints(_) | Report::Fallback => 0,
            Report::Failed(_) => 2,
        }
    }

    /// The line to print on stdout, if any. Failures print nothing.
    pub fn line(&self) -> Option<String> {
        match self {
            Report::Constraints(lines) => Some(lines.join(", ")),
            Report::Fallback => Some(FALLBACK_CONSTRAINTS.join(", ")),
            Report::Failed(_) => None,
        }
    }
}

/// List, resolve and aggregate the dependencies of `executable`.
pub fn build_report<I: SystemInventory + ?Sized>(
    inventory: &I,
    executable: &Path,
    config: &Config,
) -> Report {
    let libraries = inventory.list_dependencies(executable);
    if libraries.is_empty() {
        info!(
            executable = %executable.display(),
            "no dynamic dependencies, using fallback list"
        );
        return Report::Fallback;
    }
    info!(count = libraries.len(), "resolving shared libraries");

    let mut resolver = Resolver::new(inventory, config.ignore_list());
    let resolution = resolver.resolve_all(&libraries);

    if resolution.is_ok() {
        Report::Constraints(resolution.sorted_lines())
    } else {
        warn!(errors = resolution.errors.len(), "resolution failed");
        Report::Failed(resolution.errors)
    }
}
