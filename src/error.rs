//! Error types for st2make
//!
//! Uses `thiserror` for library errors. Every variant carries the offending
//! path or identifier so the message is actionable on its own.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for st2make operations
pub type St2MakeResult<T> = Result<T, St2MakeError>;

/// Process exit statuses reported by the `st2make` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    InvalidCommandLine,
    LoadTemplate,
    NoProject,
    ProjectFile,
    Io,
    NeedUpdate,
}

impl ExitStatus {
    /// Numeric status handed to `std::process::exit`.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::InvalidCommandLine => -1,
            ExitStatus::LoadTemplate => -2,
            ExitStatus::NoProject => -3,
            ExitStatus::ProjectFile => -4,
            ExitStatus::Io => -5,
            ExitStatus::NeedUpdate => -6,
        }
    }
}

/// Main error type for st2make operations
#[derive(Error, Debug)]
pub enum St2MakeError {
    /// Wrong command line
    #[error("invalid command line: {message}")]
    Usage { message: String },

    /// A template document could not be loaded
    #[error("unable to load template file {path}: {source}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template has a placeholder with no value, or a malformed `$`
    #[error("invalid template {name}: {message}")]
    TemplateSubstitution { name: String, message: String },

    /// Project directory does not exist or is not a directory
    #[error("project folder {path} not found")]
    ProjectDirNotFound { path: PathBuf },

    /// One or both descriptor documents are missing
    #[error("project descriptor {path} not found; '.project' and '.cproject' must be inside the project folder")]
    DescriptorMissing { path: PathBuf },

    /// Descriptor document is not well-formed XML
    #[error("cannot parse project descriptor {file}: {message}")]
    DescriptorParse { file: PathBuf, message: String },

    /// Assembler scope carries no target microcontroller option
    #[error("no target MCU defined in {file}")]
    NoTarget { file: PathBuf },

    /// A required tool scope or option is absent
    #[error("malformed build configuration {file}: missing {field}")]
    MissingOption { file: PathBuf, field: String },

    /// Linked resource with an extension that maps to no source role
    #[error("unknown source file type: {path}")]
    UnrecognizedSource { path: String },

    /// Target part matched no entry in the flag table
    #[error("unknown MCU '{part}', the target table needs an update")]
    UnknownTarget { part: String },

    /// Linker script referenced by the project could not be read
    #[error("unable to read link script {path}: {source}")]
    LinkScriptUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Linker script lacks a MEMORY block or an `_estack` line
    #[error("unable to locate memory layout ({missing}) in link script {path}")]
    MemoryLayoutNotFound { path: PathBuf, missing: &'static str },

    /// Writing an output artifact failed
    #[error("write {path} failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl St2MakeError {
    /// Exit status the binary reports for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            St2MakeError::Usage { .. } => ExitStatus::InvalidCommandLine,
            St2MakeError::TemplateLoad { .. } | St2MakeError::TemplateSubstitution { .. } => {
                ExitStatus::LoadTemplate
            }
            St2MakeError::ProjectDirNotFound { .. } | St2MakeError::DescriptorMissing { .. } => {
                ExitStatus::NoProject
            }
            St2MakeError::DescriptorParse { .. }
            | St2MakeError::NoTarget { .. }
            | St2MakeError::MissingOption { .. }
            | St2MakeError::UnrecognizedSource { .. } => ExitStatus::ProjectFile,
            St2MakeError::LinkScriptUnreadable { .. } | St2MakeError::Write { .. } => {
                ExitStatus::Io
            }
            St2MakeError::UnknownTarget { .. } | St2MakeError::MemoryLayoutNotFound { .. } => {
                ExitStatus::NeedUpdate
            }
        }
    }

    /// Short machine-readable name for JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            St2MakeError::Usage { .. } => "usage",
            St2MakeError::TemplateLoad { .. } | St2MakeError::TemplateSubstitution { .. } => {
                "template"
            }
            St2MakeError::ProjectDirNotFound { .. } | St2MakeError::DescriptorMissing { .. } => {
                "project"
            }
            St2MakeError::DescriptorParse { .. }
            | St2MakeError::NoTarget { .. }
            | St2MakeError::MissingOption { .. } => "descriptor",
            St2MakeError::UnrecognizedSource { .. } => "unrecognized_source",
            St2MakeError::UnknownTarget { .. } => "unknown_target",
            St2MakeError::LinkScriptUnreadable { .. }
            | St2MakeError::MemoryLayoutNotFound { .. } => "layout",
            St2MakeError::Write { .. } => "io",
        }
    }

    /// Path most closely associated with the error, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            St2MakeError::TemplateLoad { path, .. }
            | St2MakeError::ProjectDirNotFound { path }
            | St2MakeError::DescriptorMissing { path }
            | St2MakeError::LinkScriptUnreadable { path, .. }
            | St2MakeError::MemoryLayoutNotFound { path, .. }
            | St2MakeError::Write { path, .. } => Some(path),
            St2MakeError::DescriptorParse { file, .. }
            | St2MakeError::NoTarget { file }
            | St2MakeError::MissingOption { file, .. } => Some(file),
            _ => None,
        }
    }
}
