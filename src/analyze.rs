//! Shared-library listing from `ldd` output.

/// Parse `ldd` output to extract the names of resolved shared libraries.
///
/// Example ldd output:
/// ```text
///     linux-vdso.so.1 (0x00007ffd6a5f2000)
///     libcairo.so.2 => /lib/x86_64-linux-gnu/libcairo.so.2 (0x00007f0c1a000000)
///     libc.so.6 => /lib/x86_64-linux-gnu/libc.so.6 (0x00007f0c19c00000)
///     /lib64/ld-linux-x86-64.so.2 (0x00007f0c1a2b0000)
/// ```
///
/// Only lines carrying the `=>` marker are kept, so the vDSO and the
/// interpreter are skipped. Order is preserved.
#[must_use = "library dependencies should be processed"]
pub fn parse_ldd_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains("=>"))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
