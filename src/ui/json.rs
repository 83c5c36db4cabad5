use std::io::{self, Write};

use serde_json::json;
use st2make::{ConvertEvent, St2MakeError};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// JSON form of a pipeline event.
pub fn convert_event(event: &ConvertEvent) -> serde_json::Value {
    match event {
        ConvertEvent::TemplatesLoaded {
            makefile,
            link_script,
        } => json!({
            "event": "templates_loaded",
            "makefile": makefile.display().to_string(),
            "link_script": link_script.display().to_string(),
        }),
        ConvertEvent::ProjectLocated { dir, name } => json!({
            "event": "project_located",
            "dir": dir.display().to_string(),
            "name": name,
        }),
        ConvertEvent::SourcesCollected {
            c_sources,
            asm_sources,
            libraries,
        } => json!({
            "event": "sources_collected",
            "c_sources": c_sources,
            "asm_sources": asm_sources,
            "libraries": libraries,
        }),
        ConvertEvent::SettingsExtracted {
            target_part,
            link_script,
        } => json!({
            "event": "settings_extracted",
            "target_part": target_part,
            "link_script": link_script,
        }),
        ConvertEvent::IncludePath { tool, path } => json!({
            "event": "include_path",
            "tool": tool,
            "path": path,
        }),
        ConvertEvent::Defines { tool, defines } => json!({
            "event": "defines",
            "tool": tool,
            "defines": defines,
        }),
        ConvertEvent::TargetResolved {
            part,
            flags,
            ambiguous,
        } => json!({
            "event": "target_resolved",
            "part": part,
            "flags": flags,
            "ambiguous": ambiguous,
        }),
        ConvertEvent::LayoutAnalyzed { link_script } => json!({
            "event": "layout_analyzed",
            "link_script": link_script.display().to_string(),
        }),
        ConvertEvent::FileCreated { path } => json!({
            "event": "file_created",
            "path": path.display().to_string(),
        }),
    }
}

/// JSON form of a fatal error.
pub fn error_event(err: &St2MakeError) -> serde_json::Value {
    let mut event = json!({
        "event": "error",
        "kind": err.kind(),
        "message": err.to_string(),
        "exit_status": err.exit_status().code(),
    });
    if let Some(path) = err.path() {
        event["path"] = json!(path.display().to_string());
    }
    event
}

/// JSON form of a config warning.
pub fn warning_event(message: &str) -> serde_json::Value {
    json!({
        "event": "warning",
        "message": message,
    })
}
