//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a temporary directory with `HOME` pointed there
//! and `PATHKIT_*` variables cleared, so user configuration cannot leak in.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would change command behavior if inherited.
const PATHKIT_VARS: [&str; 9] = [
    "PATHKIT_STYLE",
    "PATHKIT_COPY_EXISTING",
    "PATHKIT_COPY_SYMLINKS",
    "PATHKIT_COPY_RECURSIVE",
    "PATHKIT_FOLLOW_SYMLINKS",
    "PATHKIT_SKIP_PERMISSION_DENIED",
    "PATHKIT_LOG_MODE",
    "PATHKIT_CONFIG",
    "TMPDIR",
];

/// Isolated test environment.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Create an environment holding the fixture tree:
    ///
    /// ```text
    /// tree/
    ///   a          "alpha"
    ///   b          "bravo"
    ///   c/
    ///     d        "delta"
    ///     e/
    /// ```
    pub fn with_tree() -> Self {
        let env = Self::new();
        env.write_file("tree/a", "alpha");
        env.write_file("tree/b", "bravo");
        env.write_file("tree/c/d", "delta");
        env.create_dir("tree/c/e");
        env
    }

    /// A `pathkit` command running in the environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathkit").expect("Failed to find pathkit binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in PATHKIT_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of `rel` inside the environment.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.temp_path.join(rel)
    }

    /// Create a directory (and parents) inside the environment.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.join(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file inside the environment, creating parents.
    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file inside the environment.
    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.join(rel)).expect("Failed to read test file")
    }
}
