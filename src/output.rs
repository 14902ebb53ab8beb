//! Color-coded terminal messages
//!
//! Warnings go to stderr in yellow; save-status notices and confirmations go to
//! stdout. Color is dropped when the target stream is not a terminal.

use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// How aggressively to color output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when the stream is a terminal
    #[default]
    Auto,
    /// Always emit color escapes
    Always,
    /// Never emit color escapes
    Never,
}

impl ColorMode {
    fn choice(self, stream_is_tty: bool) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            // termcolor's Auto does not itself check for a tty
            ColorMode::Auto => {
                if stream_is_tty {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
        }
    }
}

/// Print a non-fatal warning to stderr in yellow
pub fn warn(mode: ColorMode, message: &str) {
    let mut stream = StandardStream::stderr(mode.choice(std::io::stderr().is_terminal()));
    let _ = write_colored(&mut stream, Color::Yellow, &format!("Warning: {message}"));
}

/// Print a status notice to stdout in yellow
pub fn notice(mode: ColorMode, message: &str) {
    let mut stream = StandardStream::stdout(mode.choice(std::io::stdout().is_terminal()));
    let _ = write_colored(&mut stream, Color::Yellow, message);
}

/// Print a confirmation to stdout in green
pub fn success(mode: ColorMode, message: &str) {
    let mut stream = StandardStream::stdout(mode.choice(std::io::stdout().is_terminal()));
    let _ = write_colored(&mut stream, Color::Green, message);
}

fn write_colored(
    stream: &mut StandardStream,
    color: Color,
    message: &str,
) -> std::io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(stream, "{message}")?;
    stream.reset()
}
