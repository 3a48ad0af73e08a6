use envlog::Level;
use envlog::fmt::{Color, colorize, strip_ansi};

#[test]
fn colorize_empty_text_is_empty() {
    assert_eq!(colorize("", Color::Red), "");
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("Test message", Color::Red), "\x1b[31mTest message\x1b[0m");
    assert_eq!(colorize("ts", Color::Dim), "\x1b[2mts\x1b[0m");
}

#[test]
fn level_colors() {
    assert_eq!(Color::for_level(Level::Log), Color::Blue);
    assert_eq!(Color::for_level(Level::Info), Color::Cyan);
    assert_eq!(Color::for_level(Level::Warn), Color::Yellow);
    assert_eq!(Color::for_level(Level::Error), Color::Red);
}

#[test]
fn unknown_label_defaults_to_blue() {
    assert_eq!(Color::for_label("success"), Color::Blue);
    assert_eq!(Color::for_label("warn"), Color::Yellow);
}

#[test]
fn strip_ansi_removes_escapes() {
    let colored = format!("{} {}", colorize("a", Color::Cyan), colorize("b", Color::Dim));
    assert_eq!(strip_ansi(&colored), "a b");
}
