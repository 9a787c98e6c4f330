//! Shared-library to Debian package resolution.
//!
//! Uses `ldd` to list the libraries an executable needs at runtime, then asks
//! `dpkg` which installed package owns each one and at what version. The
//! result is a `Depends:`-ready line of `package (>= version)` constraints.

mod analyze;
mod config;
mod error;
mod inventory;
mod report;
mod resolve;

pub use analyze::parse_ldd_output;
pub use config::{Config, DEFAULT_IGNORE};
pub use error::ResolveError;
pub use inventory::{
    parse_search_output, parse_status_version, DpkgInventory, OwnerRecord, SystemInventory,
};
pub use report::{build_report, Report, FALLBACK_CONSTRAINTS};
pub use resolve::{
    owning_packages, upstream_version, PackageConstraint, Resolution, Resolver, UNKNOWN_VERSION,
};
