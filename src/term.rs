//! Platform probes for the output stream behind [`SystemEnvironment`].
//!
//! [`SystemEnvironment`]: crate::SystemEnvironment

use std::process::{Command, Stdio};

use log::trace;

#[cfg(unix)]
pub(crate) use crate::unix_term::{is_stdout_attached, is_stdout_tty, terminal_size};

#[cfg(not(unix))]
pub(crate) fn is_stdout_attached() -> bool {
    true
}

#[cfg(not(unix))]
pub(crate) fn is_stdout_tty() -> bool {
    use std::io::IsTerminal;

    std::io::stdout().is_terminal()
}

#[cfg(not(unix))]
pub(crate) fn terminal_size() -> Option<(u16, u16)> {
    None
}

/// Asks `tput` for a numeric terminal capability such as `cols` or `lines`.
///
/// Used when stdout itself is not a terminal; `tput` still reaches the
/// controlling terminal through stderr.
pub(crate) fn tput(capability: &str) -> Option<usize> {
    let output = match Command::new("tput")
        .arg(capability)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            trace!("cannot run tput {capability}: {err}");
            return None;
        }
    };
    if !output.status.success() {
        trace!("tput {capability} exited with {}", output.status);
        return None;
    }
    crate::env::parse_dimension(&String::from_utf8_lossy(&output.stdout))
}
