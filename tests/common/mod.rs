// Shared test helpers: a temporary project root with `/bin/sh` programs
// standing in for interpreter source files.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// The interpreter used by tests. Every "program" is a shell script.
pub const SH: &str = "/bin/sh";

/// Default tests directory, relative to the project root.
pub const TESTS_DIR: &str = "benchmark/tests";

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempdir().expect("Failed to create temporary directory");
        fs::create_dir_all(dir.path().join(TESTS_DIR)).expect("Failed to create tests directory");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.root().join(TESTS_DIR)
    }

    /// Writes a shell program relative to the project root.
    pub fn write_program(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create program directory");
        }
        fs::write(&path, body).expect("Failed to write program");
        path
    }

    /// Writes `<tests_dir>/<name>.json`.
    pub fn write_category(&self, name: &str, json: &str) -> PathBuf {
        let path = self.tests_dir().join(format!("{name}.json"));
        fs::write(&path, json).expect("Failed to write category");
        path
    }

    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Installs the programs used by [`MIXED_CATEGORY`] and [`PASSING_CATEGORY`].
pub fn install_arith_programs(sandbox: &Sandbox) {
    sandbox.write_program("progs/add.sh", "echo $(($1 + $2))\n");
    sandbox.write_program("progs/double.sh", "echo $(($1 * 2))\n");
    sandbox.write_program("progs/is_even.sh", "if [ $(($1 % 2)) -eq 0 ]; then echo '⊤'; else echo '⊥'; fi\n");
    sandbox.write_program("progs/fail.sh", "echo 'boom' >&2\nexit 3\n");
    sandbox.write_program("progs/slow.sh", "sleep 5\necho 1\n");
}

/// Three cases, one of which fails (`double(4)` prints 8, expected 9).
pub const MIXED_CATEGORY: &str = r#"{
  "category": "mixed",
  "tests": [
    { "name": "add", "file": "progs/add.sh", "cases": [ { "input": [2, 3], "expected": 5 } ] },
    { "name": "double", "file": "progs/double.sh", "cases": [
      { "input": [3], "expected": 6 },
      { "input": [4], "expected": 9 }
    ] }
  ]
}"#;

pub const PASSING_CATEGORY: &str = r#"{
  "category": "basic",
  "tests": [
    { "name": "add", "file": "progs/add.sh", "cases": [
      { "input": [1, 1], "expected": 2 },
      { "input": [40, 2], "expected": 42 }
    ] },
    { "name": "isEven", "file": "progs/is_even.sh", "cases": [
      { "input": [4], "expected": true },
      { "input": [7], "expected": "⊥" }
    ] }
  ]
}"#;
