//! Per-library resolution errors.

use thiserror::Error;

/// A failure recorded while resolving one library or package.
///
/// These never abort the run. They are collected in a
/// [`Resolution`](crate::Resolution) and decide the exit status at the end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The package database could not be queried for this file at all.
    #[error("no package found for {library}: {reason}")]
    OwnerLookup { library: String, reason: String },

    /// After filtering, the file is not owned by exactly one package.
    #[error("{library} is owned by {} packages ({})", .packages.len(), .packages.join(", "))]
    Ownership {
        library: String,
        packages: Vec<String>,
    },

    /// The installed version of a package could not be determined.
    #[error("cannot read installed version of {package}: {reason}")]
    VersionLookup { package: String, reason: String },
}
