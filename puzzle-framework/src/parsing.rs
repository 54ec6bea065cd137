//! Line-oriented input scanning with line-numbered errors.

use std::iter::{Enumerate, Peekable};
use std::str::Lines;

use thiserror::Error;

use crate::DynamicError;

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// Zero based; displayed one based.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    /// The zero-based index of the line that failed.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

/// Whether a line counts as empty, separating blocks of input.
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A cursor over input lines for inputs made of blocks separated by empty lines.
///
/// Parser closures receive the zero-based line index and the line; their errors are wrapped in
/// [`InvalidLine`].
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

    /// Advance past empty lines.
    ///
    /// Returns the index of the next non-empty line, or `None` when the input is exhausted.
    pub fn skip_empty(&mut self) -> Option<usize> {
        while let Some((_, line)) = self.lines.peek() {
            if !is_blank(line) {
                break;
            }
            self.lines.next();
        }
        self.lines.peek().map(|(index, _)| *index)
    }

    /// Parse the next line if it continues the current block.
    ///
    /// Returns `Ok(None)` without consuming anything when the next line is empty or the input is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// The parser's error is returned as an [`InvalidLine`].
    pub fn next_in_sequence<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &str) -> Result<T, E>,
    {
        match self.lines.peek() {
            Some((_, line)) if !is_blank(line) => {}
            _ => return Ok(None),
        }

        let Some((line_index, line)) = self.lines.next() else {
            return Ok(None);
        };
        parser(line_index, line)
            .map(Some)
            .map_err(|source| InvalidLine {
                line_index,
                source: source.into(),
            })
    }

    /// Parse every line of the current block, stopping before the next empty line.
    ///
    /// # Errors
    ///
    /// The first parser error is returned as an [`InvalidLine`].
    pub fn collect_sequence<T, E, F>(&mut self, mut parser: F) -> Result<Vec<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnMut(usize, &str) -> Result<T, E>,
    {
        let mut items = Vec::new();
        while let Some(item) = self.next_in_sequence(&mut parser)? {
            items.push(item);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCKS: &str = "\n\nfirst\nsecond\n   \nthird\n";

    #[test]
    fn skip_empty_finds_next_block() {
        let mut scanner = InputScanner::new(BLOCKS);
        assert_eq!(scanner.skip_empty(), Some(2));
        // already at a non-empty line
        assert_eq!(scanner.skip_empty(), Some(2));
    }

    #[test]
    fn collect_sequence_stops_at_blank_line() -> Result<(), InvalidLine> {
        let mut scanner = InputScanner::new(BLOCKS);
        scanner.skip_empty();

        let first_block = scanner
            .collect_sequence(|index, line| Ok::<_, DynamicError>((index, line.to_owned())))?;
        assert_eq!(
            first_block,
            [(2, "first".to_owned()), (3, "second".to_owned())]
        );

        assert_eq!(scanner.skip_empty(), Some(5));
        let second_block = scanner.collect_sequence(|_, line| Ok::<_, DynamicError>(line.len()))?;
        assert_eq!(second_block, [5]);

        assert_eq!(scanner.skip_empty(), None);
        Ok(())
    }

    #[test]
    fn next_in_sequence_does_not_consume_blank_line() -> Result<(), InvalidLine> {
        let mut scanner = InputScanner::new("\nvalue");
        let item = scanner.next_in_sequence(|_, line| Ok::<_, DynamicError>(line.to_owned()))?;
        assert_eq!(item, None);
        assert_eq!(scanner.skip_empty(), Some(1));
        Ok(())
    }

    #[test]
    fn parser_error_reports_line_number() {
        let mut scanner = InputScanner::new("ok\nbad");
        let result = scanner.collect_sequence(|_, line| {
            if line == "bad" {
                Err("bad line")
            } else {
                Ok(())
            }
        });

        let Err(error) = result else {
            panic!("second line should fail");
        };
        assert_eq!(error.line_index(), 1);
        assert_eq!(error.to_string(), "failure parsing line 2");
    }
}
