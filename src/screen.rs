use std::fmt;

use log::debug;
use once_cell::unsync::OnceCell;

use crate::ansi_screen::AnsiScreen;
use crate::env::{self, Dimension, Environment, SystemEnvironment};
use crate::error::Result;

/// Columns assumed when neither `COLUMNS` nor the terminal provide a width.
pub const DEFAULT_COLUMNS: usize = 80;
/// Rows assumed when neither `ROWS` nor the terminal provide a height.
pub const DEFAULT_ROWS: usize = 25;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Text rendering for a terminal, or for whatever stands in for one.
///
/// Obtain an instance through [`factory`]; code written against this trait
/// runs unchanged whether or not the output understands ANSI escape codes.
/// Screens are meant for a single thread: the UTF-8 flag is filled in on
/// first use and never changes afterwards.
pub trait Screen: fmt::Debug {
    /// Visible length of `s` in characters.
    ///
    /// Counts code points on a UTF-8 locale and bytes otherwise.
    fn strlen(&self, s: &str) -> usize;

    /// Left-pads `s` with spaces so that it appears centered.
    ///
    /// Strings wider than the screen are returned without padding.
    fn center(&self, s: &str) -> String {
        let len = self.strlen(s);
        let width = ((self.columns() + len) / 2).saturating_sub(len);
        let mut rv = String::with_capacity(width + s.len());
        rv.extend(std::iter::repeat(' ').take(width));
        rv.push_str(s);
        rv
    }

    /// Returns the sequence that clears the screen.
    fn clear(&self) -> &'static str;

    /// Renders `text` in the given colors.
    ///
    /// Either color may be omitted.
    ///
    /// # Errors
    ///
    /// Screens that emit colors reject names outside their color tables.
    fn colorize(&self, text: &str, fg: Option<&str>, bg: Option<&str>) -> Result<String>;

    /// Renders `text` underlined, where possible.
    fn underline(&self, text: &str) -> String;

    /// Returns `count` line terminators.
    fn newlines(&self, count: usize) -> String {
        LINE_ENDING.repeat(count)
    }

    /// Number of columns currently available.
    ///
    /// The value may change while the program runs and is looked up anew on
    /// every call.
    fn columns(&self) -> usize;

    /// Number of rows currently available.
    fn rows(&self) -> usize;

    /// Whether the active locale uses UTF-8.
    fn is_utf8(&self) -> bool;

    /// Whether this screen emits ANSI escape codes.
    fn is_ansi(&self) -> bool {
        false
    }
}

/// Creates the screen matching the capabilities of the current stdout.
pub fn factory() -> Box<dyn Screen> {
    factory_with(SystemEnvironment::new())
}

/// Creates a screen for the stdout described by `env`.
///
/// An interactive terminal gets an [`AnsiScreen`]; a missing or redirected
/// stdout gets a [`PlainScreen`].
pub fn factory_with<E: Environment + 'static>(env: E) -> Box<dyn Screen> {
    if !env.stdout_attached() {
        debug!("no stdout attached, using plain screen");
        return Box::new(PlainScreen::with_environment(env));
    }
    if env.stdout_is_tty() {
        debug!("stdout is a terminal, using ansi screen");
        Box::new(AnsiScreen::with_environment(env))
    } else {
        debug!("stdout is redirected, using plain screen");
        Box::new(PlainScreen::with_environment(env))
    }
}

/// Screen for outputs without escape code support.
///
/// Clearing degrades to a newline and styling is passed through unchanged.
pub struct PlainScreen {
    env: Box<dyn Environment>,
    is_utf8: OnceCell<bool>,
}

impl PlainScreen {
    /// Creates a plain screen for the running process.
    pub fn new() -> PlainScreen {
        PlainScreen::with_environment(SystemEnvironment::new())
    }

    /// Creates a plain screen reading its signals from `env`.
    pub fn with_environment<E: Environment + 'static>(env: E) -> PlainScreen {
        PlainScreen {
            env: Box::new(env),
            is_utf8: OnceCell::new(),
        }
    }

    fn detect_utf8(&self) -> bool {
        match self.env.locale() {
            Some(locale) => env::locale_is_utf8(&locale),
            None => {
                debug!("locale unavailable, assuming single byte encoding");
                false
            }
        }
    }
}

impl Default for PlainScreen {
    fn default() -> Self {
        PlainScreen::new()
    }
}

impl fmt::Debug for PlainScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainScreen")
            .field("env", &self.env)
            .field("is_utf8", &self.is_utf8.get())
            .finish()
    }
}

impl Screen for PlainScreen {
    fn strlen(&self, s: &str) -> usize {
        if self.is_utf8() {
            s.chars().count()
        } else {
            s.len()
        }
    }

    /// Real clearing is impossible without escape codes.
    fn clear(&self) -> &'static str {
        "\n"
    }

    /// Any color name is accepted and ignored.
    fn colorize(&self, text: &str, _fg: Option<&str>, _bg: Option<&str>) -> Result<String> {
        Ok(text.to_owned())
    }

    fn underline(&self, text: &str) -> String {
        text.to_owned()
    }

    fn columns(&self) -> usize {
        env::resolve_dimension(&*self.env, Dimension::Columns)
    }

    fn rows(&self) -> usize {
        env::resolve_dimension(&*self.env, Dimension::Rows)
    }

    fn is_utf8(&self) -> bool {
        *self.is_utf8.get_or_init(|| self.detect_utf8())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    /// Scripted environment; records locale and terminal lookups.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct FakeEnv {
        pub vars: HashMap<String, String>,
        pub size: Option<(usize, usize)>,
        pub locale: Option<String>,
        pub attached: bool,
        pub tty: bool,
        pub locale_reads: Rc<Cell<usize>>,
        pub size_queries: Rc<RefCell<Vec<Dimension>>>,
    }

    impl FakeEnv {
        pub(crate) fn utf8() -> FakeEnv {
            FakeEnv {
                locale: Some("LC_CTYPE=en_US.UTF-8".into()),
                attached: true,
                ..FakeEnv::default()
            }
        }

        pub(crate) fn latin1() -> FakeEnv {
            FakeEnv {
                locale: Some("LC_CTYPE=de_DE.ISO-8859-1".into()),
                attached: true,
                ..FakeEnv::default()
            }
        }

        pub(crate) fn with_var(mut self, key: &str, value: &str) -> FakeEnv {
            self.vars.insert(key.into(), value.into());
            self
        }
    }

    impl Environment for FakeEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.vars.get(key).cloned()
        }

        fn terminal_dimension(&self, dimension: Dimension) -> Option<usize> {
            self.size_queries.borrow_mut().push(dimension);
            self.size.map(|(rows, cols)| match dimension {
                Dimension::Columns => cols,
                Dimension::Rows => rows,
            })
        }

        fn locale(&self) -> Option<String> {
            self.locale_reads.set(self.locale_reads.get() + 1);
            self.locale.clone()
        }

        fn stdout_attached(&self) -> bool {
            self.attached
        }

        fn stdout_is_tty(&self) -> bool {
            self.tty
        }
    }

    #[test]
    fn strlen_follows_locale() {
        let s = "gr\u{fc}\u{df}e";
        assert_eq!(PlainScreen::with_environment(FakeEnv::utf8()).strlen(s), 5);
        assert_eq!(PlainScreen::with_environment(FakeEnv::latin1()).strlen(s), 7);
        let no_locale = FakeEnv {
            locale: None,
            ..FakeEnv::utf8()
        };
        assert_eq!(PlainScreen::with_environment(no_locale).strlen(s), 7);
    }

    #[test]
    fn utf8_flag_is_read_once() {
        let env = FakeEnv::utf8();
        let reads = env.locale_reads.clone();
        let screen = PlainScreen::with_environment(env);
        assert_eq!(reads.get(), 0);
        assert!(screen.is_utf8());
        assert!(screen.is_utf8());
        screen.strlen("abc");
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn unreadable_locale_is_cached_too() {
        let env = FakeEnv {
            locale: None,
            ..FakeEnv::default()
        };
        let reads = env.locale_reads.clone();
        let screen = PlainScreen::with_environment(env);
        assert!(!screen.is_utf8());
        assert!(!screen.is_utf8());
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn center_pads_left() {
        let screen = PlainScreen::with_environment(FakeEnv::utf8().with_var("COLUMNS", "80"));
        let centered = screen.center("0123456789");
        assert_eq!(centered, format!("{}0123456789", " ".repeat(35)));

        let screen = PlainScreen::with_environment(FakeEnv::utf8().with_var("COLUMNS", "11"));
        assert_eq!(screen.center("abc"), "    abc");
        assert_eq!(screen.center(""), "     ");
    }

    #[test]
    fn center_never_truncates() {
        let screen = PlainScreen::with_environment(FakeEnv::utf8().with_var("COLUMNS", "4"));
        assert_eq!(screen.center("much too long"), "much too long");
    }

    #[test]
    fn passthrough_styling() {
        let screen = PlainScreen::with_environment(FakeEnv::utf8());
        assert_eq!(screen.colorize("hi", Some("red"), None).unwrap(), "hi");
        assert_eq!(
            screen
                .colorize("hi", Some("invalidcolor"), Some("alsobad"))
                .unwrap(),
            "hi"
        );
        assert_eq!(screen.underline("hi"), "hi");
        assert_eq!(screen.clear(), "\n");
        assert!(!screen.is_ansi());
    }

    #[test]
    fn newlines_repeat() {
        let screen = PlainScreen::with_environment(FakeEnv::utf8());
        assert_eq!(screen.newlines(0), "");
        assert_eq!(screen.newlines(3), LINE_ENDING.repeat(3));
    }

    #[test]
    fn dimension_resolution_order() {
        let env = FakeEnv {
            size: Some((50, 132)),
            ..FakeEnv::utf8()
        };
        let screen = PlainScreen::with_environment(env.clone().with_var("COLUMNS", "100"));
        assert_eq!(screen.columns(), 100);
        assert_eq!(screen.rows(), 50);

        let screen = PlainScreen::with_environment(env.clone().with_var("COLUMNS", "0"));
        assert_eq!(screen.columns(), 132);

        let screen = PlainScreen::with_environment(env.with_var("ROWS", "12"));
        assert_eq!(screen.rows(), 12);
    }

    #[test]
    fn terminal_queried_per_dimension() {
        let env = FakeEnv {
            size: Some((50, 132)),
            ..FakeEnv::utf8()
        };
        let queries = env.size_queries.clone();
        let screen = PlainScreen::with_environment(env);

        assert_eq!(screen.columns(), 132);
        assert_eq!(*queries.borrow(), [Dimension::Columns]);
        assert_eq!(screen.rows(), 50);
        assert_eq!(*queries.borrow(), [Dimension::Columns, Dimension::Rows]);

        screen.center("x");
        assert_eq!(queries.borrow().len(), 3);
        assert_eq!(queries.borrow()[2], Dimension::Columns);
    }

    #[test]
    fn override_skips_terminal_query() {
        let env = FakeEnv::utf8().with_var("COLUMNS", "100");
        let queries = env.size_queries.clone();
        let screen = PlainScreen::with_environment(env);
        assert_eq!(screen.columns(), 100);
        assert!(queries.borrow().is_empty());
    }

    #[test]
    fn dimension_defaults() {
        let screen = PlainScreen::with_environment(FakeEnv::utf8());
        assert_eq!(screen.columns(), DEFAULT_COLUMNS);
        assert_eq!(screen.rows(), DEFAULT_ROWS);

        let zero_size = FakeEnv {
            size: Some((0, 0)),
            ..FakeEnv::utf8()
        };
        let screen = PlainScreen::with_environment(zero_size.with_var("COLUMNS", "junk"));
        assert_eq!(screen.columns(), 80);
        assert_eq!(screen.rows(), 25);
    }

    #[test]
    fn factory_picks_variant() {
        let tty = FakeEnv {
            tty: true,
            ..FakeEnv::utf8()
        };
        assert!(factory_with(tty.clone()).is_ansi());

        let redirected = FakeEnv {
            tty: false,
            ..FakeEnv::utf8()
        };
        assert!(!factory_with(redirected).is_ansi());

        let detached = FakeEnv {
            attached: false,
            ..tty
        };
        assert!(!factory_with(detached).is_ansi());
    }
}
