//! Fixed color tables and the SGR start sequence built from them.

use crate::error::{Error, Result};

/// Names accepted as foreground colors, in table order.
pub const FOREGROUND_NAMES: [&str; 16] = [
    "black",
    "darkgray",
    "red",
    "lightred",
    "green",
    "lightgreen",
    "brown",
    "yellow",
    "blue",
    "lightblue",
    "purple",
    "lightpurple",
    "cyan",
    "lightcyan",
    "lightgray",
    "white",
];

/// Names accepted as background colors, in table order.
pub const BACKGROUND_NAMES: [&str; 8] = [
    "black",
    "red",
    "green",
    "brown",
    "blue",
    "purple",
    "cyan",
    "lightgray",
];

/// SGR parameter selecting reverse video.
const REVERSE_VIDEO: &str = "7";

fn lookup_fg(name: &str) -> Option<&'static str> {
    Some(match name {
        "black" => "30",
        "darkgray" => "1;30",
        "red" => "31",
        "lightred" => "1;31",
        "green" => "32",
        "lightgreen" => "1;32",
        "brown" => "33",
        "yellow" => "1;33",
        "blue" => "34",
        "lightblue" => "1;34",
        "purple" => "35",
        "lightpurple" => "1;35",
        "cyan" => "36",
        "lightcyan" => "1;36",
        "lightgray" => "37",
        "white" => "1;37",
        _ => return None,
    })
}

fn lookup_bg(name: &str) -> Option<&'static str> {
    Some(match name {
        "black" => "40",
        "red" => "41",
        "green" => "42",
        "brown" => "43",
        "blue" => "44",
        "purple" => "45",
        "cyan" => "46",
        "lightgray" => "47",
        _ => return None,
    })
}

/// Returns true if `name` is in the foreground table.
pub fn is_foreground(name: &str) -> bool {
    lookup_fg(name).is_some()
}

/// Returns true if `name` is in the background table.
pub fn is_background(name: &str) -> bool {
    lookup_bg(name).is_some()
}

/// SGR parameters for a foreground color.
///
/// # Errors
///
/// Returns [`Error::UnknownForeground`] for names outside the table.
pub fn fg_code(name: &str) -> Result<&'static str> {
    lookup_fg(name).ok_or_else(|| Error::UnknownForeground(name.to_owned()))
}

/// SGR parameters for a background color.
///
/// # Errors
///
/// Returns [`Error::UnknownBackground`] for names outside the table.
pub fn bg_code(name: &str) -> Result<&'static str> {
    lookup_bg(name).ok_or_else(|| Error::UnknownBackground(name.to_owned()))
}

/// Builds the escape sequence that switches on the requested colors.
///
/// A background that only exists as a foreground color, paired with a
/// foreground that is a valid background color, is read as swapped roles and
/// rendered in reverse video. Returns an empty string when no color is given.
///
/// # Errors
///
/// Fails on the first name missing from the table it is looked up in.
pub fn start_color(fg: Option<&str>, bg: Option<&str>) -> Result<String> {
    let mut parts = Vec::with_capacity(3);
    match (fg, bg) {
        (Some(fg), Some(bg)) if !is_background(bg) && is_foreground(bg) && is_background(fg) => {
            parts.push(REVERSE_VIDEO);
            parts.push(bg_code(fg)?);
            parts.push(fg_code(bg)?);
        }
        _ => {
            if let Some(fg) = fg {
                parts.push(fg_code(fg)?);
            }
            if let Some(bg) = bg {
                parts.push(bg_code(bg)?);
            }
        }
    }
    if parts.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("\x1b[{}m", parts.join(";")))
}
