use crossterm::style::{Color, Stylize};

/// Design tokens for st2make diagnostics.
///
/// All colors and icons used on stderr come from this module.
pub mod colors {
    use super::Color;

    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
}

/// Icon by semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Error,
    Warning,
    Arrow,
}

impl Icon {
    pub fn render(self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Arrow) => icons::ARROW,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Arrow) => icons_ascii::ARROW,
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Arrow => colors::DIM,
        }
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        paint(self.render(supports_unicode), self.color(), supports_color)
    }
}

/// `text` in `color`, or unchanged when color is off.
pub fn paint(text: &str, color: Color, supports_color: bool) -> String {
    if supports_color {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}
