use std::{borrow::Cow, iter::FusedIterator, ops::Range};

/// Escape character that opens every sequence recognised here.
const ESC: char = '\u{1b}';

#[inline]
fn is_final_byte(c: char) -> bool {
    matches!(c, '@'..='~')
}

/// Offset just past the first final byte of `s`, unless a newline (or the end
/// of the string) comes first.
fn final_byte_end(s: &str) -> Option<usize> {
    for (idx, c) in s.char_indices() {
        if c == '\n' {
            return None;
        }
        if is_final_byte(c) {
            // Final bytes are ASCII, so `+ 1` stays on a char boundary.
            return Some(idx + 1);
        }
    }
    None
}

/// Finds the next escape sequence at or after `from`.
///
/// A sequence is ESC, an optional `[`, then the shortest run of non-newline
/// characters closed by a byte in `@`..=`~`. When the `[` form never closes,
/// the `[` itself is taken as the final byte.
fn find_ansi_code_exclusive(s: &str, from: usize) -> Option<(usize, usize)> {
    let mut search = from;
    loop {
        let start = search + s[search..].find(ESC)?;
        let body = &s[start + ESC.len_utf8()..];
        let len = match body.strip_prefix('[') {
            Some(params) => Some(final_byte_end(params).map_or(2, |n| n + 2)),
            None => final_byte_end(body).map(|n| n + 1),
        };
        match len {
            Some(len) => return Some((start, start + len)),
            None => search = start + ESC.len_utf8(),
        }
    }
}

#[derive(Debug)]
struct Matches<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Matches<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, pos: 0 }
    }
}

// This purposfully mimics regex's `Match`
#[derive(Debug)]
struct Match<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Match<'a> {
    #[inline]
    fn start(&self) -> usize {
        self.start
    }

    #[inline]
    fn end(&self) -> usize {
        self.end
    }

    #[inline]
    fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    fn as_str(&self) -> &'a str {
        &self.text[self.range()]
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end) = find_ansi_code_exclusive(self.s, self.pos)?;
        self.pos = end;
        Some(Match {
            text: self.s,
            start,
            end,
        })
    }
}

impl FusedIterator for Matches<'_> {}

/// Removes every ANSI escape sequence from a string.
///
/// The input is returned borrowed when it holds no escape sequence.
pub fn strip_ansi_codes(s: &str) -> Cow<'_, str> {
    if find_ansi_code_exclusive(s, 0).is_none() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        AnsiCodeIterator::new(s)
            .filter_map(|(text, is_ansi)| if is_ansi { None } else { Some(text) })
            .collect(),
    )
}

/// Measures the display width of a string in terminal cells, ignoring
/// ANSI escape sequences.
///
/// Unlike [`Screen::strlen`](crate::Screen::strlen), which counts code
/// points, this accounts for wide and zero-width glyphs.
#[cfg(feature = "unicode-width")]
pub fn measure_text_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;

    strip_ansi_codes(s).width()
}

/// An iterator over ansi codes in a string.
///
/// This type can be used to scan over ansi codes in a string.
/// It yields tuples in the form `(s, is_ansi)` where `s` is a slice of
/// the original string and `is_ansi` indicates if the slice contains
/// ansi codes or string values.
#[derive(Debug)]
pub struct AnsiCodeIterator<'a> {
    s: &'a str,
    pending_item: Option<(&'a str, bool)>,
    last_idx: usize,
    cur_idx: usize,
    iter: Matches<'a>,
}

impl<'a> AnsiCodeIterator<'a> {
    /// Creates a new ansi code iterator.
    pub fn new(s: &'a str) -> AnsiCodeIterator<'a> {
        AnsiCodeIterator {
            s,
            pending_item: None,
            last_idx: 0,
            cur_idx: 0,
            iter: Matches::new(s),
        }
    }

    /// Returns the string slice up to the current match.
    pub fn current_slice(&self) -> &str {
        &self.s[..self.cur_idx]
    }

    /// Returns the string slice from the current match to the end.
    pub fn rest_slice(&self) -> &str {
        &self.s[self.cur_idx..]
    }
}

impl<'a> Iterator for AnsiCodeIterator<'a> {
    type Item = (&'a str, bool);

    fn next(&mut self) -> Option<(&'a str, bool)> {
        if let Some(pending_item) = self.pending_item.take() {
            self.cur_idx += pending_item.0.len();
            Some(pending_item)
        } else if let Some(m) = self.iter.next() {
            let s = &self.s[self.last_idx..m.start()];
            self.last_idx = m.end();
            if s.is_empty() {
                self.cur_idx = m.end();
                Some((m.as_str(), true))
            } else {
                self.cur_idx = m.start();
                self.pending_item = Some((m.as_str(), true));
                Some((s, false))
            }
        } else if self.last_idx < self.s.len() {
            let rv = &self.s[self.last_idx..];
            self.cur_idx = self.s.len();
            self.last_idx = self.s.len();
            Some((rv, false))
        } else {
            None
        }
    }
}

impl FusedIterator for AnsiCodeIterator<'_> {}
