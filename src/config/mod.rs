//! Configuration module for st2make
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ST2MAKE_*)
//! 3. User config (~/.config/st2make/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! Whether the tool generates its own linker script is not configured here;
//! it is the `generated-link-script` build feature.

pub mod env_validator;
mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{Config, OutputConfig, TemplatesConfig, Verbosity};
