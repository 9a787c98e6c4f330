//! Access to the host's linker and package database.

use anyhow::{bail, Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use tracing::{debug, trace};

use crate::analyze::parse_ldd_output;
use crate::config::Config;

/// One line of a package-file search: the packages that ship `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRecord {
    /// Package names, with any `:arch` qualifier removed.
    pub packages: Vec<String>,
    pub path: String,
    /// The search output line as printed, arch qualifiers included.
    pub line: String,
}

/// What the resolver needs to know about the host system.
pub trait SystemInventory {
    /// Shared-library filenames `executable` needs at runtime.
    ///
    /// Any failure of the underlying tool yields an empty list.
    fn list_dependencies(&self, executable: &Path) -> Vec<String>;

    /// Every installed file whose path matches `library`, with its owners.
    fn search_owners(&self, library: &str) -> Result<Vec<OwnerRecord>>;

    /// The full installed version of `package`, e.g. `2.40.0-3ubuntu1`.
    fn installed_version(&self, package: &str) -> Result<String>;
}

/// [`SystemInventory`] backed by `ldd` and `dpkg` subprocesses.
#[derive(Debug, Clone)]
pub struct DpkgInventory {
    ldd: String,
    dpkg: String,
}

impl DpkgInventory {
    /// Use the given `ldd` and `dpkg` programs, by name or path.
    pub fn new(ldd: impl Into<String>, dpkg: impl Into<String>) -> Self {
        Self {
            ldd: ldd.into(),
            dpkg: dpkg.into(),
        }
    }

    /// Use the programs named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ldd.clone(), config.dpkg.clone())
    }
}

impl Default for DpkgInventory {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SystemInventory for DpkgInventory {
    fn list_dependencies(&self, executable: &Path) -> Vec<String> {
        match run(&self.ldd, [executable.as_os_str()]) {
            Ok(stdout) => parse_ldd_output(&stdout),
            Err(e) => {
                debug!(executable = %executable.display(), error = %e, "no dynamic dependencies");
                Vec::new()
            }
        }
    }

    fn search_owners(&self, library: &str) -> Result<Vec<OwnerRecord>> {
        let stdout = run(&self.dpkg, [OsStr::new("-S"), OsStr::new(library)])?;
        Ok(parse_search_output(&stdout))
    }

    fn installed_version(&self, package: &str) -> Result<String> {
        let stdout = run(&self.dpkg, [OsStr::new("-s"), OsStr::new(package)])?;
        parse_status_version(&stdout)
            .map(str::to_string)
            .with_context(|| format!("no Version field in status of {package}"))
    }
}

/// Run `program` to completion and return its stdout.
fn run<'a>(program: &str, args: impl IntoIterator<Item = &'a OsStr>) -> Result<String> {
    let mut command = Command::new(program);
    command.args(args);
    trace!(?command, "running");

    let output = command
        .output()
        .with_context(|| format!("{program} command not found"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{program} failed ({}): {}", output.status, stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse `dpkg -S` output into owner records.
///
/// Example dpkg -S output:
/// ```text
/// libcairo2:amd64: /usr/lib/x86_64-linux-gnu/libcairo.so.2
/// libcairo2:amd64: /usr/lib/x86_64-linux-gnu/libcairo.so.2.11800.0
/// libgl1-mesa-dri:amd64, mesa-vulkan-drivers:amd64: /usr/share/doc/mesa
/// diversion by libc6 from: /lib/ld-linux.so.2
/// ```
///
/// Diversion notices are not ownership and are skipped.
pub fn parse_search_output(output: &str) -> Vec<OwnerRecord> {
    output
        .lines()
        .filter(|line| !line.starts_with("diversion by "))
        .filter_map(|line| {
            let (owners, path) = line.split_once(": ")?;
            let packages = owners
                .split(", ")
                .filter_map(|owner| owner.split(':').next())
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>();
            if packages.is_empty() {
                return None;
            }
            Some(OwnerRecord {
                packages,
                path: path.trim().to_string(),
                line: line.to_string(),
            })
        })
        .collect()
}

/// Extract the `Version:` field from a `dpkg -s` status stanza.
pub fn parse_status_version(status: &str) -> Option<&str> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("Version:"))
        .map(str::trim)
        .filter(|version| !version.is_empty())
}
