//! Stand-in `ldd` and `dpkg` shell scripts for tests.

#![allow(dead_code)]

use debdeps::Config;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_LDD: &str = r#"#!/bin/sh
case "$1" in
  */viewer)
    printf '\tlinux-vdso.so.1 (0x00007ffd6a5f2000)\n'
    printf '\tlibgtk-4.so.1 => /lib/x86_64-linux-gnu/libgtk-4.so.1 (0x00007f0c1a400000)\n'
    printf '\tlibcairo.so.2 => /lib/x86_64-linux-gnu/libcairo.so.2 (0x00007f0c1a000000)\n'
    printf '\tlibcairo-gobject.so.2 => /lib/x86_64-linux-gnu/libcairo-gobject.so.2 (0x00007f0c19f00000)\n'
    printf '\tlibdav1d.so.7 => /lib/x86_64-linux-gnu/libdav1d.so.7 (0x00007f0c19e00000)\n'
    printf '\t/lib64/ld-linux-x86-64.so.2 (0x00007f0c1a2b0000)\n'
    ;;
  */gl-viewer)
    printf '\tlibGL.so.1 => /lib/x86_64-linux-gnu/libGL.so.1 (0x00007f0c1a400000)\n'
    ;;
  *)
    printf '\tnot a dynamic executable\n' >&2
    exit 1
    ;;
esac
"#;

const FAKE_DPKG: &str = r#"#!/bin/sh
case "$1 $2" in
  "-S libgtk-4.so.1")
    echo "libgtk-4-1:amd64: /usr/lib/x86_64-linux-gnu/libgtk-4.so.1"
    echo "google-chrome-stable: /opt/google/chrome/libgtk-4.so.1"
    ;;
  "-S libcairo.so.2")
    echo "libcairo2:amd64: /usr/lib/x86_64-linux-gnu/libcairo.so.2"
    echo "libcairo2:i386: /usr/lib/i386-linux-gnu/libcairo.so.2"
    ;;
  "-S libcairo-gobject.so.2")
    echo "libcairo-gobject2:amd64: /usr/lib/x86_64-linux-gnu/libcairo-gobject.so.2"
    ;;
  "-S libdav1d.so.7")
    echo "libdav1d7:amd64: /usr/lib/x86_64-linux-gnu/libdav1d.so.7"
    echo "libdav1d7:amd64: /usr/lib/x86_64-linux-gnu/libdav1d.so.7.0.0"
    echo "wine32:i386: /usr/lib/wine/libdav1d.so.7"
    ;;
  "-S libGL.so.1")
    echo "libgl1:amd64: /usr/lib/x86_64-linux-gnu/libGL.so.1"
    echo "nvidia-libgl:amd64: /usr/lib/nvidia/libGL.so.1"
    ;;
  "-s libgtk-4-1")
    printf 'Package: libgtk-4-1\nStatus: install ok installed\nVersion: 4.14.5+ds-0ubuntu0.1\n'
    ;;
  "-s libcairo2"|"-s libcairo-gobject2")
    printf 'Package: %s\nStatus: install ok installed\nVersion: 1.18.0-3build1\n' "$2"
    ;;
  "-s libdav1d7")
    printf 'Package: libdav1d7\nStatus: install ok installed\nVersion: 1.4.1-1build1\n'
    ;;
  "-s libgl1")
    printf 'Package: libgl1\nStatus: install ok installed\nVersion: 1.7.0-1build1\n'
    ;;
  "-s nvidia-libgl")
    printf 'Package: nvidia-libgl\nStatus: install ok installed\nVersion: 550.120-0ubuntu1\n'
    ;;
  "-S "*)
    echo "dpkg-query: no path found matching pattern *$2*" >&2
    exit 1
    ;;
  *)
    echo "dpkg-query: package '$2' is not installed and no information is available" >&2
    exit 1
    ;;
esac
"#;

/// A temporary directory holding executable `ldd` and `dpkg` stand-ins.
pub struct FakeTools {
    dir: TempDir,
}

impl FakeTools {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        write_script(&dir.path().join("ldd"), FAKE_LDD);
        write_script(&dir.path().join("dpkg"), FAKE_DPKG);
        Self { dir }
    }

    pub fn ldd(&self) -> String {
        self.dir.path().join("ldd").to_string_lossy().into_owned()
    }

    pub fn dpkg(&self) -> String {
        self.dir.path().join("dpkg").to_string_lossy().into_owned()
    }

    pub fn config(&self) -> Config {
        Config {
            ldd: self.ldd(),
            dpkg: self.dpkg(),
            extra_ignore: Vec::new(),
        }
    }
}

fn write_script(path: &Path, body: &str) -> PathBuf {
    fs::write(path, body).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
    path.to_path_buf()
}
