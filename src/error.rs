use thiserror::Error;

/// Result alias used by the color operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by an ANSI screen when it is asked for a color it does
/// not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("there is no such foreground color: {0}")]
    UnknownForeground(String),
    #[error("there is no such background color: {0}")]
    UnknownBackground(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_color() {
        assert_eq!(
            Error::UnknownForeground("pink".into()).to_string(),
            "there is no such foreground color: pink"
        );
        assert_eq!(
            Error::UnknownBackground("white".into()).to_string(),
            "there is no such background color: white"
        );
    }
}
