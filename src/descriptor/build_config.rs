//! Build-setting extraction from `.cproject`
//!
//! Only the release configuration's tools are consulted; debug and any
//! other configuration carry different `superClass` identifiers and are
//! never matched.

use crate::error::{St2MakeError, St2MakeResult};
use crate::models::BuildSettings;
use crate::paths::{normalize_tool_path, ASSEMBLER_STRIP_DEPTH, COMPILER_STRIP_DEPTH};

use super::{Descriptor, ToolScope};

/// Option holding the target microcontroller (assembler scope).
const MCU_OPTION_NAME: &str = "Microcontroller";

/// `valueType` of include search path options.
const INCLUDE_PATH_TYPE: &str = "includePath";

/// `valueType` of preprocessor symbol options.
const DEFINED_SYMBOLS_TYPE: &str = "definedSymbols";

/// `superClass` of the linker script option (linker scope).
const LINK_SCRIPT_OPTION: &str = "com.atollic.truestudio.ld.general.scriptfile";

/// Toolchain component whose options are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Assembler,
    Compiler,
    Linker,
}

impl ToolKind {
    /// `superClass` of the release-configuration `<tool>` element.
    pub fn super_class(self) -> &'static str {
        match self {
            ToolKind::Assembler => "com.atollic.truestudio.exe.release.toolchain.as",
            ToolKind::Compiler => "com.atollic.truestudio.exe.release.toolchain.gcc",
            ToolKind::Linker => "com.atollic.truestudio.exe.release.toolchain.ld",
        }
    }

    /// Leading `../` segments stripped from this tool's path values.
    pub fn strip_depth(self) -> usize {
        match self {
            ToolKind::Assembler => ASSEMBLER_STRIP_DEPTH,
            ToolKind::Compiler | ToolKind::Linker => COMPILER_STRIP_DEPTH,
        }
    }

    /// Short name used in messages.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Assembler => "assembler",
            ToolKind::Compiler => "compiler",
            ToolKind::Linker => "linker",
        }
    }
}

/// Read target part, includes, defines and link script from `.cproject`.
pub fn extract_build_settings(descriptor: &Descriptor) -> St2MakeResult<BuildSettings> {
    let doc = descriptor.parse()?;
    let file = descriptor.file();

    let assembler = ToolScope::all(&doc, ToolKind::Assembler.super_class());
    let target_part = assembler
        .iter()
        .find_map(|tool| tool.option_named(MCU_OPTION_NAME))
        .and_then(|option| option.value())
        .ok_or_else(|| St2MakeError::NoTarget {
            file: file.to_path_buf(),
        })?
        .to_string();

    let compiler = required_scope(&doc, ToolKind::Compiler, descriptor)?;
    let linker = required_scope(&doc, ToolKind::Linker, descriptor)?;

    let link_script = linker
        .iter()
        .find_map(|tool| tool.option_with_super_class(LINK_SCRIPT_OPTION))
        .and_then(|option| option.value())
        .ok_or_else(|| St2MakeError::MissingOption {
            file: file.to_path_buf(),
            field: "linker script option".to_string(),
        })?;

    for (value_type, field) in [
        (INCLUDE_PATH_TYPE, "include path option"),
        (DEFINED_SYMBOLS_TYPE, "defined symbols option"),
    ] {
        require_option_type(&assembler, &compiler, value_type, field, descriptor)?;
    }

    Ok(BuildSettings {
        target_part,
        as_includes: include_paths(&assembler, ToolKind::Assembler),
        c_includes: include_paths(&compiler, ToolKind::Compiler),
        as_defines: defines(&assembler),
        c_defines: defines(&compiler),
        link_script: normalize_tool_path(link_script, ToolKind::Linker.strip_depth()),
    })
}

fn required_scope<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    kind: ToolKind,
    descriptor: &Descriptor,
) -> St2MakeResult<Vec<ToolScope<'a, 'input>>> {
    let scopes = ToolScope::all(doc, kind.super_class());
    if scopes.is_empty() {
        return Err(St2MakeError::MissingOption {
            file: descriptor.file().to_path_buf(),
            field: format!("{} tool ({})", kind.label(), kind.super_class()),
        });
    }
    Ok(scopes)
}

/// At least one option of `value_type` must exist across the assembler and
/// compiler scopes. Its value list may be empty.
fn require_option_type(
    assembler: &[ToolScope<'_, '_>],
    compiler: &[ToolScope<'_, '_>],
    value_type: &'static str,
    field: &str,
    descriptor: &Descriptor,
) -> St2MakeResult<()> {
    let present = assembler
        .iter()
        .chain(compiler)
        .any(|tool| tool.options_of_type(value_type).next().is_some());
    if !present {
        return Err(St2MakeError::MissingOption {
            file: descriptor.file().to_path_buf(),
            field: field.to_string(),
        });
    }
    Ok(())
}

fn include_paths(scopes: &[ToolScope<'_, '_>], kind: ToolKind) -> Vec<String> {
    scopes
        .iter()
        .flat_map(|tool| tool.options_of_type(INCLUDE_PATH_TYPE))
        .flat_map(|option| option.list_values())
        .map(|value| normalize_tool_path(value, kind.strip_depth()))
        .collect()
}

fn defines(scopes: &[ToolScope<'_, '_>]) -> String {
    scopes
        .iter()
        .flat_map(|tool| tool.options_of_type(DEFINED_SYMBOLS_TYPE))
        .flat_map(|option| option.list_values())
        .map(|symbol| format!(" -D{symbol}"))
        .collect()
}
