//! Terminal capabilities: output streams and the style token table.
//!
//! Style tokens (`{t.red}`, `{t.bold}`, ...) are looked up by name and turned
//! into escape sequences with crossterm style commands. Whether the sequences
//! are actually emitted depends on the destination being an interactive
//! terminal, or on styling being forced.

use std::fmt;

use serde::{Deserialize, Serialize};
use termimad::crossterm::style::{
    Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

/// Process stream receiving formatter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    Stdout,
    #[default]
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => write!(f, "stdout"),
            Stream::Stderr => write!(f, "stderr"),
        }
    }
}

/// Maps a plain color name onto its ANSI palette entry.
fn base_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::DarkRed,
        "green" => Color::DarkGreen,
        "yellow" => Color::DarkYellow,
        "blue" => Color::DarkBlue,
        "magenta" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        "white" => Color::Grey,
        _ => return None,
    };
    Some(color)
}

/// Maps a `bright_*` color name onto the high-intensity palette entry.
fn bright_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::DarkGrey,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

/// Escape sequence for a style name, or `None` if the name is unknown.
///
/// Recognized names are `normal`, `bold`, `dim`, `italic`, `underline`,
/// `blink`, `reverse`, the eight base colors, their `bright_` variants and
/// `on_` backgrounds for both.
pub fn style_escape(name: &str) -> Option<String> {
    let attribute = match name {
        "normal" => Some(Attribute::Reset),
        "bold" => Some(Attribute::Bold),
        "dim" => Some(Attribute::Dim),
        "italic" => Some(Attribute::Italic),
        "underline" => Some(Attribute::Underlined),
        "blink" => Some(Attribute::SlowBlink),
        "reverse" => Some(Attribute::Reverse),
        _ => None,
    };
    if let Some(attribute) = attribute {
        return Some(SetAttribute(attribute).to_string());
    }

    if let Some(background) = name.strip_prefix("on_") {
        let color = match background.strip_prefix("bright_") {
            Some(bright) => bright_color(bright),
            None => base_color(background),
        }?;
        return Some(SetBackgroundColor(color).to_string());
    }

    let color = match name.strip_prefix("bright_") {
        Some(bright) => bright_color(bright),
        None => base_color(name),
    }?;
    Some(SetForegroundColor(color).to_string())
}

/// Every style name `style_escape` recognizes.
#[cfg(test)]
pub(crate) fn style_names() -> Vec<String> {
    const ATTRIBUTES: [&str; 7] =
        ["normal", "bold", "dim", "italic", "underline", "blink", "reverse"];
    const COLORS: [&str; 8] =
        ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"];

    let mut names: Vec<String> = ATTRIBUTES.iter().map(|name| name.to_string()).collect();
    for prefix in ["", "bright_", "on_", "on_bright_"] {
        names.extend(COLORS.iter().map(|color| format!("{prefix}{color}")));
    }
    names
}

/// Resolved styling capability of one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    styling: bool,
}

impl Palette {
    /// Creates a palette; `styling` decides whether escapes are produced.
    pub fn new(styling: bool) -> Self {
        Self { styling }
    }

    /// Palette for a destination given its terminal status and the force flag.
    pub fn for_destination(is_terminal: bool, force_styling: bool) -> Self {
        Self::new(is_terminal || force_styling)
    }

    /// Whether escape sequences are emitted.
    pub fn is_styling(&self) -> bool {
        self.styling
    }

    /// Resolves a style name. Known names yield an escape sequence, or the
    /// empty string when styling is off. Unknown names yield `None`.
    pub fn resolve(&self, name: &str) -> Option<String> {
        let escape = style_escape(name)?;
        Some(if self.styling { escape } else { String::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_styles_resolve() {
        assert_eq!(
            style_escape("red"),
            Some(SetForegroundColor(Color::DarkRed).to_string())
        );
        assert_eq!(
            style_escape("normal"),
            Some(SetAttribute(Attribute::Reset).to_string())
        );
        assert_eq!(
            style_escape("on_bright_blue"),
            Some(SetBackgroundColor(Color::Blue).to_string())
        );
        assert!(style_escape("bold").is_some_and(|e| e.starts_with('\x1b')));
    }

    #[test]
    fn test_every_style_name_resolves() {
        let names = style_names();
        assert_eq!(names.len(), 39);
        for name in names {
            assert!(style_escape(&name).is_some(), "{name} has no escape");
        }
    }

    #[test]
    fn test_unknown_styles() {
        assert_eq!(style_escape("purple"), None);
        assert_eq!(style_escape("on_"), None);
        assert_eq!(style_escape("bright_normal"), None);
    }

    #[test]
    fn test_palette_without_styling() {
        let palette = Palette::for_destination(false, false);
        assert!(!palette.is_styling());
        assert_eq!(palette.resolve("red"), Some(String::new()));
        assert_eq!(palette.resolve("purple"), None);
    }

    #[test]
    fn test_forced_palette() {
        let palette = Palette::for_destination(false, true);
        assert!(palette.is_styling());
        assert_eq!(palette.resolve("green"), style_escape("green"));
    }

    #[test]
    fn test_default_stream_is_stderr() {
        assert_eq!(Stream::default(), Stream::Stderr);
        assert_eq!(Stream::Stdout.to_string(), "stdout");
    }
}
