//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Non-fatal configuration problem surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the config schema does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// The config file could not be read or parsed; defaults were used
    Unusable { file: PathBuf, message: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "Unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, ". Did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::Unusable { file, message } => {
                write!(
                    f,
                    "Ignoring config {}: {}",
                    file.display(),
                    message.trim_end()
                )
            }
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigWarning> {
    let content = fs::read_to_string(path).map_err(|e| ConfigWarning::Unusable {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigWarning::Unusable {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Location of the user config file, if one can be determined.
///
/// `ST2MAKE_CONFIG` names the file directly; otherwise
/// `$XDG_CONFIG_HOME/st2make/config.toml` or the platform config dir.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("ST2MAKE_CONFIG") {
        return Some(PathBuf::from(explicit));
    }

    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("st2make").join("config.toml"))
}

/// Load the user config (if present) or defaults, then apply env overrides.
pub fn load_or_default() -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();
    let mut config = Config::default();

    if let Some(path) = user_config_path().filter(|p| p.exists()) {
        match load_with_warnings(&path) {
            Ok((loaded, mut found)) => {
                config = loaded;
                warnings.append(&mut found);
            }
            Err(warning) => warnings.push(warning),
        }
    }

    (with_env_overrides(config), warnings)
}

/// Apply environment variable overrides (ST2MAKE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ST2MAKE_TEMPLATE_DIR
    if let Ok(dir) = std::env::var("ST2MAKE_TEMPLATE_DIR") {
        if !dir.is_empty() {
            config.templates.dir = Some(PathBuf::from(dir));
        }
    }

    // ST2MAKE_VERBOSITY
    if let Ok(verbosity) = std::env::var("ST2MAKE_VERBOSITY") {
        let validator = EnvVarValidator::new("ST2MAKE_VERBOSITY", Verbosity::VALID_VALUES);
        config.output.verbosity =
            validator.parse(&verbosity, Verbosity::parse, config.output.verbosity);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "templates",
        "dir",
        "makefile",
        "link_script",
        "output",
        "verbosity",
        "targets",
        "pattern",
        "flags",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
