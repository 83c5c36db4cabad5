//! Project conversion pipeline
//!
//! ## Flow
//!
//! 1. Load `Makefile.tpl` and `Link.tpl`
//! 2. Locate the project and its two descriptors
//! 3. Extract the source manifest and the release build settings
//! 4. Resolve the target part and analyze the linker script
//! 5. Render and write the artifacts
//!
//! Every stage is fatal on error; nothing is written until all inputs
//! have been read and validated.

use std::path::{Path, PathBuf};

use crate::descriptor::{extract_build_settings, extract_sources, Descriptor, ToolKind};
use crate::error::St2MakeResult;
use crate::events::{ConvertEvent, ConvertEventSink};
use crate::fs::FileSystem;
use crate::linker::load_memory_layout;
use crate::locator::locate_project;
use crate::models::BuildSettings;
use crate::render::{render, write_artifacts, LinkScriptMode, RenderInput, Templates};
use crate::target::TargetResolver;
use crate::template::Template;

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub project_dir: PathBuf,
    /// Output files, in write order
    pub written: Vec<PathBuf>,
}

/// Converts one TrueSTUDIO project per [`Pipeline::run`] call.
#[derive(Debug, Clone)]
pub struct Pipeline<F: FileSystem> {
    fs: F,
    makefile_template: PathBuf,
    link_template: PathBuf,
    resolver: TargetResolver,
    mode: LinkScriptMode,
}

impl<F: FileSystem> Pipeline<F> {
    /// Pipeline with the built-in target table and the build's link mode.
    pub fn new(fs: F, makefile_template: PathBuf, link_template: PathBuf) -> Self {
        Self {
            fs,
            makefile_template,
            link_template,
            resolver: TargetResolver::builtin(),
            mode: LinkScriptMode::from_build(),
        }
    }

    pub fn with_resolver(mut self, resolver: TargetResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_link_mode(mut self, mode: LinkScriptMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn link_mode(&self) -> LinkScriptMode {
        self.mode
    }

    /// Convert the project in `project_dir`.
    pub fn run(
        &self,
        project_dir: &Path,
        sink: &dyn ConvertEventSink,
    ) -> St2MakeResult<ConvertReport> {
        let templates = Templates {
            makefile: Template::load(&self.fs, &self.makefile_template)?,
            link_script: Template::load(&self.fs, &self.link_template)?,
        };
        sink.on_event(ConvertEvent::TemplatesLoaded {
            makefile: self.makefile_template.clone(),
            link_script: self.link_template.clone(),
        });

        let location = locate_project(&self.fs, project_dir)?;
        sink.on_event(ConvertEvent::ProjectLocated {
            dir: location.dir.clone(),
            name: location.name.clone(),
        });

        let resources = Descriptor::load(&self.fs, &location.resource_manifest)?;
        let sources = extract_sources(&resources)?;
        sink.on_event(ConvertEvent::SourcesCollected {
            c_sources: sources.c_sources.len(),
            asm_sources: sources.asm_sources.len(),
            libraries: sources.libraries.len(),
        });

        let build = Descriptor::load(&self.fs, &location.build_manifest)?;
        let settings = extract_build_settings(&build)?;
        sink.on_event(ConvertEvent::SettingsExtracted {
            target_part: settings.target_part.clone(),
            link_script: settings.link_script.clone(),
        });
        if sink.wants_detailed_events() {
            report_settings(&settings, sink);
        }

        let mcu_flags = self.resolver.resolve(&settings.target_part)?;
        sink.on_event(ConvertEvent::TargetResolved {
            part: settings.target_part.clone(),
            flags: mcu_flags.to_string(),
            ambiguous: self.resolver.is_ambiguous(&settings.target_part),
        });

        let layout = load_memory_layout(&self.fs, &location.dir, &settings.link_script)?;
        sink.on_event(ConvertEvent::LayoutAnalyzed {
            link_script: location.dir.join(&settings.link_script),
        });

        let input = RenderInput {
            project_name: &location.name,
            sources: &sources,
            settings: &settings,
            mcu_flags,
            layout: &layout,
        };
        let artifacts = render(&templates, &input, self.mode)?;
        let written = write_artifacts(&self.fs, &location.dir, &artifacts)?;
        for path in &written {
            sink.on_event(ConvertEvent::FileCreated { path: path.clone() });
        }

        Ok(ConvertReport {
            project_dir: location.dir,
            written,
        })
    }
}

fn report_settings(settings: &BuildSettings, sink: &dyn ConvertEventSink) {
    let tools = [
        (ToolKind::Assembler, &settings.as_includes, &settings.as_defines),
        (ToolKind::Compiler, &settings.c_includes, &settings.c_defines),
    ];
    for (kind, includes, defines) in tools {
        for path in includes {
            sink.on_event(ConvertEvent::IncludePath {
                tool: kind.label(),
                path: path.clone(),
            });
        }
        sink.on_event(ConvertEvent::Defines {
            tool: kind.label(),
            defines: defines.trim_start().to_string(),
        });
    }
}
