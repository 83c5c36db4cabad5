//! Artifact rendering and output
//!
//! Fills `Makefile.tpl` (and, when the tool generates its own linker
//! script, `Link.tpl`) and writes the results into the project directory.

use std::path::{Path, PathBuf};

use crate::error::{St2MakeError, St2MakeResult};
use crate::fs::FileSystem;
use crate::models::{BuildSettings, MemoryLayout, RenderedArtifacts, SourceManifest};
use crate::template::{Slots, Template};

/// Output build file name
pub const MAKEFILE_NAME: &str = "Makefile";

/// Output linker script name when the tool generates its own
pub const GENERATED_LINK_SCRIPT: &str = "arm-gcc-link.ld";

/// Whether the build references the project's linker script or one rendered
/// from `Link.tpl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkScriptMode {
    #[default]
    Project,
    Generated,
}

impl LinkScriptMode {
    /// Mode selected at build time by the `generated-link-script` feature.
    pub fn from_build() -> Self {
        if cfg!(feature = "generated-link-script") {
            LinkScriptMode::Generated
        } else {
            LinkScriptMode::Project
        }
    }
}

/// The two output templates.
#[derive(Debug, Clone)]
pub struct Templates {
    pub makefile: Template,
    pub link_script: Template,
}

/// Everything the renderer substitutes.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub project_name: &'a str,
    pub sources: &'a SourceManifest,
    pub settings: &'a BuildSettings,
    pub mcu_flags: &'a str,
    pub layout: &'a MemoryLayout,
}

/// `NAME =` followed by one line-continued entry per item.
fn continued_list<'a>(head: &str, items: impl IntoIterator<Item = &'a String>, prefix: &str) -> String {
    let mut out = head.to_string();
    for item in items {
        out.push_str(" \\\n  ");
        out.push_str(prefix);
        out.push_str(item);
    }
    out
}

/// Slot values for `Makefile.tpl`.
pub fn makefile_slots<'s>(input: &RenderInput<'_>, mode: LinkScriptMode) -> Slots<'s> {
    let settings = input.settings;
    let ld_path = match mode {
        LinkScriptMode::Project => settings.link_script.clone(),
        LinkScriptMode::Generated => GENERATED_LINK_SCRIPT.to_string(),
    };

    let mut slots = Slots::new();
    slots.insert("TARGET", input.project_name.to_string());
    slots.insert("MCU", input.mcu_flags.to_string());
    slots.insert(
        "C_SOURCES",
        continued_list("C_SOURCES =", &input.sources.c_sources, ""),
    );
    slots.insert(
        "ASM_SOURCES",
        continued_list("ASM_SOURCES =", &input.sources.asm_sources, ""),
    );
    slots.insert("A_FILES", continued_list("", &input.sources.libraries, ""));
    slots.insert("AS_DEFS", format!("AS_DEFS ={}", settings.as_defines));
    slots.insert("C_DEFS", format!("C_DEFS ={}", settings.c_defines));
    slots.insert(
        "AS_INCLUDES",
        continued_list("AS_INCLUDES =", &settings.as_includes, "-I"),
    );
    slots.insert(
        "C_INCLUDES",
        continued_list("C_INCLUDES =", &settings.c_includes, "-I"),
    );
    slots.insert("LD_PATH", ld_path);
    slots
}

/// Slot values for `Link.tpl`.
pub fn link_script_slots<'s>(layout: &MemoryLayout) -> Slots<'s> {
    let mut slots = Slots::new();
    slots.insert("MEMORY", layout.memory.clone());
    slots.insert("ESTACK", layout.estack.clone());
    slots
}

/// Render the build file, plus the linker script in `Generated` mode.
pub fn render(
    templates: &Templates,
    input: &RenderInput<'_>,
    mode: LinkScriptMode,
) -> St2MakeResult<RenderedArtifacts> {
    let makefile = templates
        .makefile
        .substitute(&makefile_slots(input, mode))?;

    let link_script = match mode {
        LinkScriptMode::Project => None,
        LinkScriptMode::Generated => Some(
            templates
                .link_script
                .substitute(&link_script_slots(input.layout))?,
        ),
    };

    Ok(RenderedArtifacts {
        makefile,
        link_script,
    })
}

/// Write rendered artifacts into `dir`, overwriting existing files.
///
/// Returns the written paths in write order.
pub fn write_artifacts<F: FileSystem>(
    fs: &F,
    dir: &Path,
    artifacts: &RenderedArtifacts,
) -> St2MakeResult<Vec<PathBuf>> {
    let mut outputs = vec![(dir.join(MAKEFILE_NAME), artifacts.makefile.as_str())];
    if let Some(script) = &artifacts.link_script {
        outputs.push((dir.join(GENERATED_LINK_SCRIPT), script.as_str()));
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (path, content) in outputs {
        fs.write(&path, content)
            .map_err(|source| St2MakeError::Write {
                path: path.clone(),
                source,
            })?;
        written.push(path);
    }
    Ok(written)
}
