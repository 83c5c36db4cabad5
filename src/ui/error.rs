use std::path::PathBuf;

use st2make::St2MakeError;

use crate::ui::theme::{self, Icon};

/// Boxed error message with an optional fix hint.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    subject: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            subject: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_subject(mut self, path: impl Into<PathBuf>) -> Self {
        self.subject = Some(path.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            theme::paint("ERROR", theme::colors::ERROR, supports_color)
        );
        if let Some(path) = &self.subject {
            out.push_str(&format!("  {}\n", path.display()));
        }
        for line in self.message.lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("  {line}\n"));
            }
        }

        if let Some(fix) = &self.fix {
            out.push('\n');
            let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
            for (i, line) in fix.lines().enumerate() {
                if i == 0 {
                    out.push_str(&format!("  {arrow} FIX: {line}\n"));
                } else {
                    out.push_str(&format!("         {line}\n"));
                }
            }
        }
        out
    }
}

/// Fix hint for errors the user can act on.
fn fix_hint(err: &St2MakeError) -> Option<String> {
    let hint = match err {
        St2MakeError::Usage { .. } => "Run: st2make <PROJECT_DIR>".to_string(),
        St2MakeError::TemplateLoad { .. } => {
            "Place Makefile.tpl and Link.tpl next to the st2make executable,\nor point --templates / ST2MAKE_TEMPLATE_DIR at their directory.".to_string()
        }
        St2MakeError::ProjectDirNotFound { .. } | St2MakeError::DescriptorMissing { .. } => {
            "Pass the TrueSTUDIO project folder (the one holding .project and .cproject).".to_string()
        }
        St2MakeError::NoTarget { .. } => {
            "Select a target MCU in the Release configuration's assembler settings.".to_string()
        }
        St2MakeError::UnknownTarget { part } => format!(
            "Add a rule for this part to ~/.config/st2make/config.toml:\n[[targets]]\npattern = \"{}\"\nflags = \"-mthumb -mcpu=...\"",
            part
        ),
        St2MakeError::MemoryLayoutNotFound { .. } => {
            "The link script needs a MEMORY { ... } block and a line starting with _estack.".to_string()
        }
        _ => return None,
    };
    Some(hint)
}

pub fn format_error(err: &St2MakeError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &St2MakeError, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    if let St2MakeError::UnrecognizedSource { path } = err {
        block = block.with_subject(path);
    }
    if let Some(fix) = fix_hint(err) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

/// Report a fatal error on stderr, or as a JSON event on stdout.
pub fn print_error(err: &anyhow::Error, json: bool) {
    let Some(st2make) = err.downcast_ref::<St2MakeError>() else {
        if json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "error",
                "kind": "io",
                "message": err.to_string(),
            }));
        } else {
            eprintln!("[ERROR] {}", err);
        }
        return;
    };

    if json {
        let _ = crate::ui::json::emit(crate::ui::json::error_event(st2make));
        return;
    }

    eprint!("{}", format_error(st2make));
}
