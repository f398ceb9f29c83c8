//! Test support utilities for brok integration tests.
//!
//! Provides an isolated environment with a fake secret store CLI.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// `dir` is the working directory the command runs in (and the default
/// output directory). `home` holds the fake tool, its canned responses,
/// and the settings file.
pub struct Test {
    pub dir: TempDir,
    pub home: TempDir,
}

impl Test {
    /// Create an environment with a fake tool returning the standard bundles.
    pub fn new() -> Self {
        Self::with_bundles(ALIASES_JSON, SECRETS_ENV, SECRETS_JSON)
    }

    /// Create an environment whose fake tool returns the given bundles.
    pub fn with_bundles(aliases_json: &str, secrets_env: &str, secrets_json: &str) -> Self {
        let t = Self::empty();
        t.write_home("aliases.json", aliases_json);
        t.write_home("secrets.env.out", secrets_env);
        t.write_home("secrets.json", secrets_json);
        t.install_tool(&responding_tool(t.home.path()));
        t
    }

    /// Create an environment with no fake tool installed.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        Self { dir, home }
    }

    /// Path of the fake secret store CLI.
    pub fn tool(&self) -> PathBuf {
        self.home.path().join("fake-doppler")
    }

    /// Replace the fake tool with a script body.
    pub fn install_tool(&self, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tool();
        std::fs::write(&path, body).expect("failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake tool");
    }

    /// Write a file into the temp home.
    pub fn write_home(&self, name: &str, content: &str) {
        std::fs::write(self.home.path().join(name), content).expect("failed to write home file");
    }

    /// Write the settings file the command will load.
    pub fn write_settings(&self, toml: &str) {
        self.write_home("config.toml", toml);
    }

    /// Read an output file from the working directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", name, e))
    }

    /// Whether an output file exists in the working directory.
    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Argument lines the fake tool was invoked with.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.home.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }
}
