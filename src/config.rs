//! Tool locations and filtering options.

/// Path substrings that mark known false-positive owners.
///
/// Third-party applications bundle their own copies of common libraries
/// (browsers, editors), and 32-bit compatibility packages ship the same
/// filenames. None of them are real dependencies of a native build.
pub const DEFAULT_IGNORE: &[&str] = &[
    "i386",
    "lib32",
    "google-chrome",
    "microsoft-edge",
    "codium",
    "windsurf",
];

/// Runtime configuration for a resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dynamic-linker introspection program.
    pub ldd: String,
    /// Package manager program, queried with `-S` and `-s`.
    pub dpkg: String,
    /// Substrings ignored in addition to [`DEFAULT_IGNORE`].
    pub extra_ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ldd: "ldd".to_string(),
            dpkg: "dpkg".to_string(),
            extra_ignore: Vec::new(),
        }
    }
}

impl Config {
    /// The full ignore list: defaults first, then user additions.
    ///
    /// Empty entries are dropped since they would match every line.
    pub fn ignore_list(&self) -> Vec<String> {
        DEFAULT_IGNORE
            .iter()
            .map(|s| s.to_string())
            .chain(self.extra_ignore.iter().cloned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
