//! Environment signals a screen is configured from.
//!
//! Everything a [`Screen`](crate::Screen) learns about the outside world goes
//! through the [`Environment`] trait, so the lookups can be replaced wholesale
//! (for tests, or to render for a terminal other than the current one).

use std::fmt;

use log::debug;

use crate::screen::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::term;

/// Environment key overriding the column count.
pub const COLUMNS_VAR: &str = "COLUMNS";
/// Environment key overriding the row count.
pub const ROWS_VAR: &str = "ROWS";

/// Locale category holding the character encoding.
const CTYPE_CATEGORY: &str = "LC_CTYPE";

/// Source of the external signals a screen depends on.
pub trait Environment: fmt::Debug {
    /// Looks up an environment variable.
    fn var(&self, key: &str) -> Option<String>;

    /// Queries the terminal for one of its dimensions.
    ///
    /// Called on every size lookup, so only the requested dimension should
    /// be probed.
    fn terminal_dimension(&self, dimension: Dimension) -> Option<usize>;

    /// Returns the active locale as `;`-separated `category=value` pairs.
    fn locale(&self) -> Option<String>;

    /// Whether the process has a standard output stream at all.
    fn stdout_attached(&self) -> bool;

    /// Whether standard output is an interactive terminal.
    fn stdout_is_tty(&self) -> bool;
}

/// One axis of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Width in character cells.
    Columns,
    /// Height in lines.
    Rows,
}

impl Dimension {
    /// Environment key overriding this dimension.
    pub fn override_var(self) -> &'static str {
        match self {
            Dimension::Columns => COLUMNS_VAR,
            Dimension::Rows => ROWS_VAR,
        }
    }

    /// Value used when neither the override nor the terminal answers.
    pub fn default_value(self) -> usize {
        match self {
            Dimension::Columns => DEFAULT_COLUMNS,
            Dimension::Rows => DEFAULT_ROWS,
        }
    }

    fn tput_capability(self) -> &'static str {
        match self {
            Dimension::Columns => "cols",
            Dimension::Rows => "lines",
        }
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    /// Returns a handle to the running process's environment.
    pub fn new() -> SystemEnvironment {
        SystemEnvironment
    }
}

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn terminal_dimension(&self, dimension: Dimension) -> Option<usize> {
        if let Some((rows, cols)) = term::terminal_size() {
            return Some(match dimension {
                Dimension::Columns => cols as usize,
                Dimension::Rows => rows as usize,
            });
        }
        // tput only complains on stderr without a terminal type.
        if self.var("TERM").map_or(true, |value| value.is_empty()) {
            return None;
        }
        term::tput(dimension.tput_capability())
    }

    /// Rust programs never call `setlocale(LC_ALL, "")`, so the character
    /// type locale is resolved from the environment.
    fn locale(&self) -> Option<String> {
        ctype_locale(|key| self.var(key))
    }

    fn stdout_attached(&self) -> bool {
        term::is_stdout_attached()
    }

    fn stdout_is_tty(&self) -> bool {
        term::is_stdout_tty()
    }
}

/// Builds the structured locale string for the character type category,
/// taking the first non-empty of `LC_ALL`, `LC_CTYPE` and `LANG`.
pub(crate) fn ctype_locale(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", CTYPE_CATEGORY, "LANG"]
        .into_iter()
        .filter_map(lookup)
        .find(|value| !value.is_empty())
        .map(|value| format!("{CTYPE_CATEGORY}={value}"))
}

/// Parses a terminal dimension. Zero, negative and malformed values yield
/// `None` so that callers fall through to the next source.
pub fn parse_dimension(value: &str) -> Option<usize> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// Checks whether the `LC_CTYPE` entry of a structured locale string names
/// a UTF-8 encoding.
///
/// Entries without `=` are skipped; a later duplicate key wins.
pub fn locale_is_utf8(locale: &str) -> bool {
    let ctype = locale
        .split(';')
        .filter_map(|part| part.split_once('='))
        .filter(|(key, _)| *key == CTYPE_CATEGORY)
        .map(|(_, value)| value)
        .last();

    match ctype {
        Some(value) => has_utf8_suffix(value),
        None => false,
    }
}

fn has_utf8_suffix(value: &str) -> bool {
    const SUFFIX: &str = ".utf-8";
    value.len() >= SUFFIX.len()
        && value.is_char_boundary(value.len() - SUFFIX.len())
        && value[value.len() - SUFFIX.len()..].eq_ignore_ascii_case(SUFFIX)
}

/// Resolves one dimension: override variable, then terminal query, then
/// the default.
pub(crate) fn resolve_dimension(env: &dyn Environment, dimension: Dimension) -> usize {
    let var = dimension.override_var();
    if let Some(value) = env.var(var) {
        match parse_dimension(&value) {
            Some(n) => return n,
            None => debug!("ignoring {var}={value:?}"),
        }
    }
    if let Some(n) = env.terminal_dimension(dimension).filter(|n| *n > 0) {
        return n;
    }
    let default = dimension.default_value();
    debug!("terminal size unknown, using {default} for {var}");
    default
}
