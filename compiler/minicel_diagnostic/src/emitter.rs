//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.colors {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_owned()
        }
    }

    /// Emit a single diagnostic:
    ///
    /// ```text
    /// error[E2001]: circular dependency detected at A0
    ///   --> A0
    ///   = note: A0 -> B0 -> A0
    /// ```
    pub fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let head = self.paint(&format!("error[{}]", diagnostic.code), colors::ERROR);
        let message = self.paint(&diagnostic.message, colors::BOLD);
        writeln!(self.writer, "{head}: {message}")?;

        if let Some(cell) = diagnostic.cell {
            match diagnostic.span {
                Some(span) => writeln!(self.writer, "  --> {cell}:{}", span.start + 1)?,
                None => writeln!(self.writer, "  --> {cell}")?,
            }
        }

        for note in &diagnostic.notes {
            let label = self.paint("note", colors::NOTE);
            writeln!(self.writer, "  = {label}: {note}")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
