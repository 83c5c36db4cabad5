//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::target::TargetRule;

use super::loader::{self, ConfigWarning};

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const VALID_VALUES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Template location configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory holding the templates; defaults to the executable's
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_makefile_template")]
    pub makefile: String,

    #[serde(default = "default_link_template")]
    pub link_script: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            makefile: default_makefile_template(),
            link_script: default_link_template(),
        }
    }
}

fn default_makefile_template() -> String {
    "Makefile.tpl".to_string()
}

fn default_link_template() -> String {
    "Link.tpl".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra target table entries, consulted before the built-in table
    #[serde(default)]
    pub targets: Vec<TargetRule>,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigWarning> {
        loader::load_with_warnings(path)
    }

    /// Load the user config (or defaults) with env overrides applied.
    pub fn load_or_default() -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (ST2MAKE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Directory the templates are read from.
    pub fn template_dir(&self) -> PathBuf {
        self.templates.dir.clone().unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }

    pub fn makefile_template_path(&self) -> PathBuf {
        self.template_dir().join(&self.templates.makefile)
    }

    pub fn link_template_path(&self) -> PathBuf {
        self.template_dir().join(&self.templates.link_script)
    }
}
