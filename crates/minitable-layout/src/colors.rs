//! Terminal palette for dump and trace output.
//!
//! Field numbers are blue, present values green, offsets and other layout
//! metadata dim.

use std::fmt::Display;

/// ANSI escape sequences, or empty strings when output is not a terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

impl Colors {
    pub const ON: Self = Self { enabled: true };
    pub const OFF: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Field numbers and JSON-ish keys.
    pub fn number(&self, text: impl Display) -> String {
        self.paint(BLUE, text)
    }

    /// Values read out of a message.
    pub fn value(&self, text: impl Display) -> String {
        self.paint(GREEN, text)
    }

    /// Offsets, strides, mode flags.
    pub fn meta(&self, text: impl Display) -> String {
        self.paint(DIM, text)
    }

    fn paint(&self, code: &str, text: impl Display) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_passes_text_through() {
        assert_eq!(Colors::OFF.number(7), "7");
        assert_eq!(Colors::OFF.meta("@8"), "@8");
    }

    #[test]
    fn on_wraps_in_escape_codes() {
        assert_eq!(Colors::ON.value("true"), "\x1b[32mtrue\x1b[0m");
        assert!(Colors::new(true).is_enabled());
        assert!(!Colors::default().is_enabled());
    }
}
