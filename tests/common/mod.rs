//! Common test utilities for st2make CLI tests.
//!
//! This module provides:
//! - `TestProject`: a TrueSTUDIO project plus template dir in a temp directory
//! - `TestResult`: captured output of one `st2make` run
//! - Fixtures: descriptor, linker script and template texts

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub use fixtures::*;

/// Result of running the st2make binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Whether the process exited with `expected` (one of the negative
    /// statuses). Unix truncates exit codes to 8 bits.
    pub fn exited_with(&self, expected: i32) -> bool {
        self.exit_code.map(|c| c & 0xff) == Some(expected & 0xff)
    }
}

/// Isolated project + templates layout:
///
/// ```text
/// <tmp>/workspace/<name>/.project
/// <tmp>/workspace/<name>/.cproject
/// <tmp>/workspace/<name>/STM32F407VG_FLASH.ld
/// <tmp>/templates/Makefile.tpl
/// <tmp>/templates/Link.tpl
/// ```
pub struct TestProject {
    pub root: TempDir,
    pub dir: PathBuf,
    pub templates: PathBuf,
}

impl TestProject {
    /// Project with the default fixtures.
    pub fn new(name: &str) -> Self {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("workspace").join(name);
        let templates = root.path().join("templates");
        fs::create_dir_all(&dir).unwrap();
        fs::create_dir_all(&templates).unwrap();

        let project = Self {
            root,
            dir,
            templates,
        };
        project.write(".project", PROJECT);
        project.write(".cproject", CPROJECT);
        project.write("STM32F407VG_FLASH.ld", LINK_SCRIPT);
        project.write_template("Makefile.tpl", MAKEFILE_TPL);
        project.write_template("Link.tpl", LINK_TPL);
        project
    }

    pub fn write(&self, rel: &str, content: &str) {
        fs::write(self.dir.join(rel), content).unwrap();
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.dir.join(rel)).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.join(rel).exists()
    }

    pub fn write_template(&self, name: &str, content: &str) {
        fs::write(self.templates.join(name), content).unwrap();
    }

    /// Path for a user config file that does not exist yet.
    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.toml")
    }

    /// `st2make --templates <tmp>/templates <args..> <project dir>`
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = self.command();
        cmd.arg("--templates").arg(&self.templates);
        cmd.args(args);
        cmd.arg(&self.dir);
        TestResult::from_output(cmd.output().unwrap())
    }

    /// Bare command with an isolated environment.
    pub fn command(&self) -> Command {
        st2make_command(&self.config_path())
    }
}

/// `st2make` with no user config and no `ST2MAKE_*` overrides.
pub fn st2make_command(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_st2make"));
    cmd.env("ST2MAKE_CONFIG", config)
        .env_remove("ST2MAKE_TEMPLATE_DIR")
        .env_remove("ST2MAKE_VERBOSITY")
        .env("NO_COLOR", "1");
    cmd
}

pub fn run_command(mut cmd: Command) -> TestResult {
    TestResult::from_output(cmd.output().unwrap())
}
