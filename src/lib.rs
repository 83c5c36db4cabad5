//! st2make - TrueSTUDIO project to GNU Make translator
//!
//! Reads an Atollic TrueSTUDIO STM32 project (`.project` and `.cproject`),
//! collects its linked sources and release toolchain settings, maps the
//! target part to `arm-none-eabi-gcc` CPU flags, and renders a `Makefile`
//! (plus, with the `generated-link-script` feature, an `arm-gcc-link.ld`)
//! from external templates.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod fs;
pub mod linker;
pub mod locator;
pub mod models;
pub mod paths;
pub mod pipeline;
pub mod render;
pub mod target;
pub mod template;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, Verbosity};
pub use error::{ExitStatus, St2MakeError, St2MakeResult};
pub use events::{ConvertEvent, ConvertEventSink, NoopEventSink};
pub use fs::{FileSystem, LocalFs};
pub use models::{
    BuildSettings, MemoryLayout, ProjectLocation, RenderedArtifacts, SourceEntry, SourceManifest,
    SourceRole,
};
pub use pipeline::{ConvertReport, Pipeline};
pub use render::LinkScriptMode;
pub use target::{TargetResolver, TargetRule};
