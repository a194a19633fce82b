//! Shared helpers: a stand-in hadolint written as a shell script.

#![cfg(unix)]
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Executing a freshly written script races with concurrent forks
/// (ETXTBSY), so tests in one binary take turns.
static SCRIPT_LOCK: Mutex<()> = Mutex::new(());

pub fn serial() -> MutexGuard<'static, ()> {
    SCRIPT_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Behaves like hadolint for the inputs these tests feed it:
/// `--version` prints a version, otherwise stdin is inspected.
pub const FAKE_HADOLINT: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "Haskell Dockerfile Linter 2.12.0"
  exit 0
fi
if [ "$1 $2 $3" != "--format json -" ]; then
  echo "unexpected arguments: $*" >&2
  exit 9
fi
input=$(cat)
case "$input" in
  *MAINTAINER*)
    echo '[{"code":"DL4000","column":1,"file":"-","level":"error","line":2,"message":"MAINTAINER is deprecated"}]'
    exit 1
    ;;
  *latest*)
    echo '[{"code":"DL3007","column":1,"file":"-","level":"warning","line":1,"message":"Using latest is prone to errors if the image will ever update. Pin the version explicitly to a release tag"}]'
    exit 1
    ;;
  *CRASH*)
    echo 'hadolint: internal error' >&2
    exit 2
    ;;
  *)
    echo '[]'
    exit 0
    ;;
esac
"#;

pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// A temp dir holding the fake hadolint; keep the `TempDir` alive.
pub fn fake_hadolint() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_script(dir.path(), "hadolint", FAKE_HADOLINT);
    (dir, path)
}
