use std::borrow::Cow;

use crate::ansi::strip_ansi_codes;
use crate::color::start_color;
use crate::env::{Environment, SystemEnvironment};
use crate::error::Result;
use crate::screen::{PlainScreen, Screen};

/// Erase display, home the cursor, scroll up one line.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H\x1b[1S";
const UNDERLINE: &str = "\x1b[4m";
const RESET: &str = "\x1b[0m";

/// Screen for terminals that understand ANSI escape codes.
///
/// Measurement ignores escape sequences, so strings that are already
/// colorized still center correctly.
#[derive(Debug, Default)]
pub struct AnsiScreen {
    plain: PlainScreen,
}

impl AnsiScreen {
    /// Creates an ANSI screen for the running process.
    pub fn new() -> AnsiScreen {
        AnsiScreen::with_environment(SystemEnvironment::new())
    }

    /// Creates an ANSI screen reading its signals from `env`.
    pub fn with_environment<E: Environment + 'static>(env: E) -> AnsiScreen {
        AnsiScreen {
            plain: PlainScreen::with_environment(env),
        }
    }

    /// Removes all ANSI escape codes from `s`.
    pub fn strip_ansi_codes<'a>(&self, s: &'a str) -> Cow<'a, str> {
        strip_ansi_codes(s)
    }
}

impl Screen for AnsiScreen {
    fn strlen(&self, s: &str) -> usize {
        self.plain.strlen(&self.strip_ansi_codes(s))
    }

    fn clear(&self) -> &'static str {
        CLEAR_SCREEN
    }

    fn colorize(&self, text: &str, fg: Option<&str>, bg: Option<&str>) -> Result<String> {
        let start = start_color(fg, bg)?;
        if start.is_empty() {
            return Ok(text.to_owned());
        }
        Ok(format!("{start}{text}{RESET}"))
    }

    fn underline(&self, text: &str) -> String {
        format!("{UNDERLINE}{text}{RESET}")
    }

    fn columns(&self) -> usize {
        self.plain.columns()
    }

    fn rows(&self) -> usize {
        self.plain.rows()
    }

    fn is_utf8(&self) -> bool {
        self.plain.is_utf8()
    }

    fn is_ansi(&self) -> bool {
        true
    }
}
