#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bash-guard binary.
#[macro_export]
macro_rules! bash_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bash-guard"))
    };
}

/// A script that passes every check.
pub const CLEAN_SCRIPT: &str = r#"#!/usr/bin/env bash
# Project: fixture
# Author: Test Suite
# Copyright 2024

usage() {
    echo "usage: fixture"
}

main() {
    if [ -z "$1" ]; then
        usage
    fi
}

main "$@"
"#;

/// A script with a tab, a backtick call and a `function` keyword definition.
pub const MESSY_SCRIPT: &str = "#!/bin/bash\n# Project: fixture\n# Author: Test Suite\n# Copyright 2024\nusage() {\n\techo usage\n}\nfunction main() {\n    files=`ls`\n}\nmain \"$@\"\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.bash-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".bash-guard.toml", content)
    }
}
