//! cli-screen renders text for interactive terminal output.  It measures the
//! visible length of strings, centers them, clears the screen and applies
//! colors and underlines, degrading to plain text when stdout is not a
//! terminal.
//!
//! # Screens
//!
//! The output is abstracted through the [`Screen`] trait.  [`factory`]
//! inspects stdout once and hands back either an [`AnsiScreen`] for
//! interactive terminals or a [`PlainScreen`] for files and pipes, where
//! formatting requests are accepted but have no effect.
//!
//! Example usage:
//!
//! ```
//! # fn test() -> Result<(), cli_screen::Error> {
//! let screen = cli_screen::factory();
//! let title = screen.colorize("Hello World", Some("lightcyan"), None)?;
//! println!("{}", screen.center(&screen.underline(&title)));
//! # Ok(()) } fn main() { test().unwrap(); }
//! ```
//!
//! # Colors
//!
//! Colors are given by name.  Sixteen foreground colors are known
//! ([`FOREGROUND_NAMES`]) and eight background colors
//! ([`BACKGROUND_NAMES`]).  An ANSI screen rejects other names with an
//! [`Error`]; a plain screen ignores them.
//!
//! # Environment
//!
//! Terminal size comes from `COLUMNS` and `ROWS` when set, then from the
//! terminal itself, then defaults to 80x25.  Lengths count code points on a
//! UTF-8 locale and bytes otherwise.  All of these signals go through the
//! [`Environment`] trait and can be supplied with [`factory_with`].
//!
//! # Working with ANSI Codes
//!
//! The crate provides the function [`strip_ansi_codes`] to remove ANSI codes
//! from a string as well as `measure_text_width` to calculate the width of a
//! string as it would be displayed by the terminal.
#![warn(missing_debug_implementations)]

pub use crate::ansi::{strip_ansi_codes, AnsiCodeIterator};
#[cfg(feature = "unicode-width")]
pub use crate::ansi::measure_text_width;
pub use crate::ansi_screen::AnsiScreen;
pub use crate::color::{
    bg_code, fg_code, is_background, is_foreground, start_color, BACKGROUND_NAMES,
    FOREGROUND_NAMES,
};
pub use crate::env::{
    locale_is_utf8, parse_dimension, Dimension, Environment, SystemEnvironment, COLUMNS_VAR,
    ROWS_VAR,
};
pub use crate::error::{Error, Result};
pub use crate::screen::{factory, factory_with, PlainScreen, Screen, DEFAULT_COLUMNS, DEFAULT_ROWS};

mod ansi;
mod ansi_screen;
mod color;
mod env;
mod error;
mod screen;
mod term;
#[cfg(unix)]
mod unix_term;
