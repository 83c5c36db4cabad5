//! Core data models for st2make
//!
//! Every value here is built once per run and read-only afterwards:
//! - `ProjectLocation`: the project directory and its two descriptors
//! - `SourceManifest`: linked sources grouped by `SourceRole`
//! - `BuildSettings`: target part, include paths, defines, link script
//! - `MemoryLayout`: pieces lifted from the project's linker script
//! - `RenderedArtifacts`: final output texts

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{St2MakeError, St2MakeResult};

/// Resolved project directory plus the paths of its descriptor documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    /// Absolute project directory
    pub dir: PathBuf,
    /// Directory basename with spaces replaced by underscores
    pub name: String,
    /// Resource manifest (`.project`)
    pub resource_manifest: PathBuf,
    /// Build-configuration manifest (`.cproject`)
    pub build_manifest: PathBuf,
}

/// Role of a linked source, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceRole {
    /// `.c`
    Compiled,
    /// `.s`
    Assembly,
    /// `.a`
    StaticLibrary,
}

impl SourceRole {
    /// Classify a path by extension.
    ///
    /// Anything other than `.c`, `.s` or `.a` is an error; unknown files are
    /// never dropped silently.
    pub fn classify(path: &str) -> St2MakeResult<Self> {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some("c") => Ok(SourceRole::Compiled),
            Some("s") => Ok(SourceRole::Assembly),
            Some("a") => Ok(SourceRole::StaticLibrary),
            _ => Err(St2MakeError::UnrecognizedSource {
                path: path.to_string(),
            }),
        }
    }
}

/// A normalized source path with its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: String,
    pub role: SourceRole,
}

impl SourceEntry {
    pub fn new(path: impl Into<String>) -> St2MakeResult<Self> {
        let path = path.into();
        let role = SourceRole::classify(&path)?;
        Ok(Self { path, role })
    }
}

/// Linked sources split by role; each list is sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceManifest {
    pub c_sources: Vec<String>,
    pub asm_sources: Vec<String>,
    pub libraries: Vec<String>,
}

impl SourceManifest {
    /// Build a manifest from normalized paths in any order.
    pub fn from_paths<I, S>(paths: I) -> St2MakeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = paths.into_iter().map(Into::into).collect();

        let mut manifest = SourceManifest::default();
        for path in unique {
            let entry = SourceEntry::new(path)?;
            manifest.push(entry);
        }
        Ok(manifest)
    }

    fn push(&mut self, entry: SourceEntry) {
        let list = match entry.role {
            SourceRole::Compiled => &mut self.c_sources,
            SourceRole::Assembly => &mut self.asm_sources,
            SourceRole::StaticLibrary => &mut self.libraries,
        };
        list.push(entry.path);
    }

    /// Total number of entries across all roles.
    pub fn len(&self) -> usize {
        self.c_sources.len() + self.asm_sources.len() + self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Toolchain settings read from the release configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSettings {
    /// Target microcontroller identifier, e.g. `STM32F407VG`
    pub target_part: String,
    /// Assembler include paths, in document order
    pub as_includes: Vec<String>,
    /// Compiler include paths, in document order
    pub c_includes: Vec<String>,
    /// Assembler defines rendered as ` -DSYM` tokens
    pub as_defines: String,
    /// Compiler defines rendered as ` -DSYM` tokens
    pub c_defines: String,
    /// Linker script path relative to the project directory
    pub link_script: String,
}

/// Memory description lifted from a linker script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLayout {
    /// Body between `MEMORY {` and `}`
    pub memory: String,
    /// The `_estack ...` line
    pub estack: String,
}

/// Final output texts. `link_script` is only present when the tool
/// generates its own linker script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub makefile: String,
    pub link_script: Option<String>,
}
