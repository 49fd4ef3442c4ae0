//! Console reporting.
//!
//! Informational lines go to stdout and can be silenced; warnings and errors
//! go to stderr and are always shown. Colors are only applied when the stream
//! supports them.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    silent: bool,
}

impl Logger {
    pub fn new(silent: bool) -> Self {
        Self { silent }
    }

    pub fn info(&self, message: impl Display) {
        if self.silent {
            return;
        }
        println!(
            "{}",
            message.if_supports_color(Stream::Stdout, |text| text.bright_black())
        );
    }

    pub fn warn(&self, message: impl Display) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }

    pub fn error(&self, message: impl Display) {
        eprintln!(
            "\n{}\n",
            message.if_supports_color(Stream::Stderr, |text| text.red())
        );
    }
}
