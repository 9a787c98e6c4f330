//! Library to package constraint resolution.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::{debug, error};

use crate::error::ResolveError;
use crate::inventory::{OwnerRecord, SystemInventory};

/// Version used when a package's installed version cannot be read.
pub const UNKNOWN_VERSION: &str = "0.0.0";

/// A lower-bound requirement on an installed package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageConstraint {
    pub name: String,
    pub version: String,
}

impl fmt::Display for PackageConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (>= {})", self.name, self.version)
    }
}

/// Accumulated outcome of resolving a set of libraries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub constraints: BTreeSet<PackageConstraint>,
    pub errors: Vec<ResolveError>,
}

impl Resolution {
    /// True when no library or package produced an error.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rendered constraints, sorted and deduplicated.
    pub fn sorted_lines(&self) -> Vec<String> {
        let lines: BTreeSet<String> = self.constraints.iter().map(ToString::to_string).collect();
        lines.into_iter().collect()
    }

    fn record(&mut self, err: ResolveError) {
        error!("{err}");
        self.errors.push(err);
    }
}

/// Strip the Debian revision and any `+` suffix from a version.
///
/// `2.40.0-3ubuntu1` becomes `2.40.0`, `1.4.1+dfsg-1` becomes `1.4.1`.
pub fn upstream_version(version: &str) -> &str {
    match version.find(['+', '-']) {
        Some(end) => &version[..end],
        None => version,
    }
}

/// Distinct packages that own `library`, ignoring false positives.
///
/// A record counts only if its path ends in `/<library>` and its raw search
/// line, owners with their arch qualifiers and path alike, contains no
/// ignored substring.
pub fn owning_packages(
    library: &str,
    records: &[OwnerRecord],
    ignore: &[String],
) -> BTreeSet<String> {
    let suffix = format!("/{library}");
    let ignored = |s: &str| ignore.iter().any(|word| s.contains(word.as_str()));

    records
        .iter()
        .filter(|record| record.path.ends_with(&suffix))
        .filter(|record| !ignored(&record.line))
        .flat_map(|record| record.packages.iter().cloned())
        .collect()
}

/// Resolves libraries to package constraints against a [`SystemInventory`].
///
/// Installed versions are looked up once per package.
pub struct Resolver<'a, I: SystemInventory + ?Sized> {
    inventory: &'a I,
    ignore: Vec<String>,
    versions: HashMap<String, String>,
}

impl<'a, I: SystemInventory + ?Sized> Resolver<'a, I> {
    /// Create a resolver that drops owners matching any `ignore` substring.
    pub fn new(inventory: &'a I, ignore: Vec<String>) -> Self {
        Self {
            inventory,
            ignore,
            versions: HashMap::new(),
        }
    }

    /// Resolve every library, collecting constraints and errors.
    pub fn resolve_all<S: AsRef<str>>(&mut self, libraries: &[S]) -> Resolution {
        let mut resolution = Resolution::default();
        for library in libraries {
            self.resolve_library(library.as_ref(), &mut resolution);
        }
        resolution
    }

    /// Resolve one library into `resolution`.
    ///
    /// An owner count other than one is recorded as an error, but whatever
    /// candidates were found still contribute constraints.
    pub fn resolve_library(&mut self, library: &str, resolution: &mut Resolution) {
        let records = match self.inventory.search_owners(library) {
            Ok(records) => records,
            Err(e) => {
                resolution.record(ResolveError::OwnerLookup {
                    library: library.to_string(),
                    reason: format!("{e:#}"),
                });
                return;
            }
        };

        let packages = owning_packages(library, &records, &self.ignore);
        debug!(library, packages = ?packages, "owners");

        if packages.len() != 1 {
            resolution.record(ResolveError::Ownership {
                library: library.to_string(),
                packages: packages.iter().cloned().collect(),
            });
        }

        for name in packages {
            let version = self.version_of(&name, resolution);
            resolution.constraints.insert(PackageConstraint { name, version });
        }
    }

    fn version_of(&mut self, package: &str, resolution: &mut Resolution) -> String {
        if let Some(version) = self.versions.get(package) {
            return version.clone();
        }

        let version = match self.inventory.installed_version(package) {
            Ok(full) => upstream_version(&full).to_string(),
            Err(e) => {
                resolution.record(ResolveError::VersionLookup {
                    package: package.to_string(),
                    reason: format!("{e:#}"),
                });
                UNKNOWN_VERSION.to_string()
            }
        };

        self.versions.insert(package.to_string(), version.clone());
        version
    }
}
