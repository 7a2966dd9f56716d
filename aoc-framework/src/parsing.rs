//! Helpers for turning puzzle text into data, with errors that point back at the input.

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use thiserror::Error;

use crate::DynamicError;

/// Parsing a string failed; the string is kept for the error message.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    string: String,
    source: E,
}

impl<E: std::error::Error> ParseContextError<E> {
    pub fn new(string: impl Into<String>, source: E) -> Self {
        Self {
            string: string.into(),
            source,
        }
    }

    #[must_use]
    pub fn string(&self) -> &str {
        &self.string
    }
}

/// Parse a string with [`str::parse`], attaching the string to any error.
///
/// # Errors
///
/// Returns a [`ParseContextError`] sourcing [`F::Err`][FromStr::Err] if the string can't be parsed.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string
        .parse::<F>()
        .map_err(|source| ParseContextError::new(string, source))
}

/// A line of input could not be parsed.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// Zero based; displayed one based.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    pub fn new(line_index: usize, source: impl Into<DynamicError>) -> Self {
        Self {
            line_index,
            source: source.into(),
        }
    }

    /// The one-based number of the offending line.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_index.saturating_add(1)
    }
}

/// Parse each line with `parser`, which receives the zero-based line index and the line.
///
/// Errors are wrapped in an [`InvalidLine`] naming the line. The returned iterator is lazy, so
/// collect it into a `Result` to stop at the first failure.
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &str) -> Result<T, E>,
{
    input.lines().enumerate().map(move |(index, line)| {
        parser(index, line).map_err(|source| InvalidLine::new(index, source))
    })
}

/// A run of consecutive non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<'a> {
    /// Zero-based index of the sequence's first line in the whole input.
    pub first_line: usize,
    pub lines: Vec<&'a str>,
}

impl Sequence<'_> {
    /// The lines rejoined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Walks input made of blank-line separated sequences, such as several grids one after another.
///
/// Lines holding only whitespace count as blank.
pub struct InputScanner<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> InputScanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    /// Skip blank lines, returning how many were skipped.
    pub fn skip_empty(&mut self) -> usize {
        let mut skipped = 0;
        while self
            .lines
            .next_if(|(_, line)| line.trim().is_empty())
            .is_some()
        {
            skipped += 1;
        }
        skipped
    }

    /// The next line of the current sequence with its zero-based index, or `None` once a blank
    /// line or the end of input is reached.
    ///
    /// A blank line is left in place for [`skip_empty`][Self::skip_empty].
    pub fn next_in_sequence(&mut self) -> Option<(usize, &'a str)> {
        self.lines.next_if(|(_, line)| !line.trim().is_empty())
    }

    /// Skip any blank lines, then gather the following sequence. Returns `None` at the end of
    /// input.
    pub fn collect_sequence(&mut self) -> Option<Sequence<'a>> {
        self.skip_empty();
        let (first_line, first) = self.next_in_sequence()?;
        let mut lines = vec![first];
        while let Some((_, line)) = self.next_in_sequence() {
            lines.push(line);
        }
        Some(Sequence { first_line, lines })
    }
}

impl<'a> Iterator for InputScanner<'a> {
    type Item = Sequence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.collect_sequence()
    }
}
