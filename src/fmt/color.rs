//! Console output only needs the basic 8-color SGR palette; every terminal and
//! log viewer renders these, unlike 24-bit escapes.

use crate::level::Level;
use std::fmt;

/// A dedicated type keeps raw escape strings out of formatter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Dim,
    Blue,
    Cyan,
    Yellow,
    Red,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Raw escape sequence that starts this color.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Dim => "\x1b[2m",
            Self::Blue => "\x1b[34m",
            Self::Cyan => "\x1b[36m",
            Self::Yellow => "\x1b[33m",
            Self::Red => "\x1b[31m",
        }
    }

    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Log => Self::Blue,
            Level::Info => Self::Cyan,
            Level::Warn => Self::Yellow,
            Level::Error => Self::Red,
        }
    }

    /// Labels that don't name a level (custom tags) fall back to blue.
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        label.parse().map_or(Self::Blue, Self::for_level)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ansi())
    }
}

/// Wraps `text` in `color` and a reset. Empty text stays empty so a hidden
/// timestamp doesn't leave a stray escape pair in the line.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    if text.is_empty() {
        return String::new();
    }
    let reset = Color::RESET;
    format!("{color}{text}{reset}")
}

/// Strips SGR escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
