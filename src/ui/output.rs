use std::io::Write;

use st2make::{ConfigWarning, ConvertEvent, ConvertEventSink, Verbosity};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::Icon;

/// Console sink for pipeline events.
///
/// Normal mode prints `File created: <path>` on stdout. Verbose adds one
/// stderr line per stage, debug adds every include path and define.
/// In JSON mode each event becomes one NDJSON line on stdout.
pub struct Reporter {
    verbosity: Verbosity,
    json: bool,
    caps: TerminalCapabilities,
}

impl Reporter {
    pub fn new(verbosity: Verbosity, json: bool) -> Self {
        Self {
            verbosity,
            json,
            caps: detect_capabilities(),
        }
    }

    fn stage(&self, line: String) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{}", line);
        }
    }

    fn warn(&self, line: &str) {
        if self.verbosity > Verbosity::Quiet {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(self.caps.supports_color, self.caps.supports_unicode),
                line
            );
        }
    }

    /// Lines for one event, as printed on stderr in verbose/debug mode.
    fn describe(event: &ConvertEvent) -> Option<String> {
        let line = match event {
            ConvertEvent::TemplatesLoaded {
                makefile,
                link_script,
            } => format!(
                "Templates: {}, {}",
                makefile.display(),
                link_script.display()
            ),
            ConvertEvent::ProjectLocated { dir, name } => {
                format!("Project: {} ({})", name, dir.display())
            }
            ConvertEvent::SourcesCollected {
                c_sources,
                asm_sources,
                libraries,
            } => format!(
                "Sources: {} C, {} assembly, {} libraries",
                c_sources, asm_sources, libraries
            ),
            ConvertEvent::SettingsExtracted {
                target_part,
                link_script,
            } => format!("Target: {} (link script {})", target_part, link_script),
            ConvertEvent::IncludePath { tool, path } => format!("  {} include: {}", tool, path),
            ConvertEvent::Defines { tool, defines } => format!("  {} defines: {}", tool, defines),
            ConvertEvent::TargetResolved { part, flags, .. } => {
                format!("Flags for {}: {}", part, flags)
            }
            ConvertEvent::LayoutAnalyzed { link_script } => {
                format!("Memory layout: {}", link_script.display())
            }
            ConvertEvent::FileCreated { .. } => return None,
        };
        Some(line)
    }
}

impl ConvertEventSink for Reporter {
    fn on_event(&self, event: ConvertEvent) {
        if self.json {
            let _ = crate::ui::json::emit(crate::ui::json::convert_event(&event));
            return;
        }

        if let ConvertEvent::TargetResolved {
            part,
            ambiguous: true,
            ..
        } = &event
        {
            self.warn(&format!(
                "Several target rules match '{}'; using the first one",
                part
            ));
        }

        match &event {
            ConvertEvent::FileCreated { path } => {
                if self.verbosity > Verbosity::Quiet {
                    let mut out = std::io::stdout().lock();
                    let _ = writeln!(out, "File created: {}", path.display());
                }
            }
            other => {
                if let Some(line) = Self::describe(other) {
                    self.stage(line);
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Debug
    }
}

/// Print config warnings (unknown keys, unusable file, bad target rules).
pub fn print_config_warnings(warnings: &[String], verbosity: Verbosity, json: bool) {
    if json {
        for w in warnings {
            let _ = crate::ui::json::emit(crate::ui::json::warning_event(w));
        }
        return;
    }
    if verbosity == Verbosity::Quiet {
        return;
    }

    let caps = detect_capabilities();
    for w in warnings {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(caps.supports_color, caps.supports_unicode),
            w
        );
    }
}

/// Flatten loader warnings into display lines.
pub fn config_warning_lines(warnings: &[ConfigWarning]) -> Vec<String> {
    warnings.iter().map(ToString::to_string).collect()
}
