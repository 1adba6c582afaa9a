//! Line tokenizer: split one raw input line into tokens on a delimiter that
//! may itself be a token.
//!
//! With delimiter `d`, tokens are separated by a single `d`. A token equal to
//! `d` is written as `ddd` between other tokens, as `dd` at either end of the
//! line, and as `d`, `dd` or `ddd` when it is the only token. A single `d` at
//! either end of the line is an optional separator and is dropped.
//!
//! ```text
//! "A.B.C"      -> ["A", "B", "C"]
//! "..A.B.."    -> [".", "A", "B", "."]
//! "A...B"      -> ["A", ".", "B"]
//! "A..B"       -> error: unescaped double delimiter
//! "...."       -> error: too many consecutive delimiters
//! ```
//!
//! Genuine token content containing the delimiter twice or more in a row is
//! not representable and is rejected rather than guessed at.

use crate::error::{TokenizeError, TokenizeResult};

/// Splits lines on a fixed delimiter. Error positions are byte offsets into
/// the line passed to [`split`](Self::split).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokenizer {
    single: String,
    double: String,
    triple: String,
    quadruple: String,
}

impl LineTokenizer {
    pub fn new(delimiter: impl Into<String>) -> TokenizeResult<Self> {
        let single = delimiter.into();
        if single.is_empty() {
            return Err(TokenizeError::EmptyDelimiter);
        }
        Ok(Self {
            double: single.repeat(2),
            triple: single.repeat(3),
            quadruple: single.repeat(4),
            single,
        })
    }

    pub fn delimiter(&self) -> &str {
        &self.single
    }

    /// Split `line` into tokens.
    pub fn split(&self, line: &str) -> TokenizeResult<Vec<String>> {
        if let Some(position) = line.find(&self.quadruple) {
            return Err(TokenizeError::TooManyConsecutiveDelimiters {
                delimiter: self.single.clone(),
                position,
            });
        }

        if line.is_empty() {
            return Ok(Vec::new());
        }

        if line == self.single || line == self.double || line == self.triple {
            return Ok(vec![self.single.clone()]);
        }

        let (start, end) = self.strip_edges(line);
        let body = &line[start..end];
        self.check_interior(body, start)?;

        Ok(body
            .replace(&self.triple, &self.double)
            .split(self.single.as_str())
            .map(|field| {
                if field.is_empty() {
                    self.single.clone()
                } else {
                    field.to_string()
                }
            })
            .collect())
    }

    /// Byte range of `line` left after resolving the leading and trailing
    /// delimiter runs. A run of two or three is reduced to one delimiter that
    /// stays as content; a lone delimiter is a separator and is removed.
    fn strip_edges(&self, line: &str) -> (usize, usize) {
        let step = self.single.len();
        let (mut start, mut end) = (0, line.len());

        if line[start..end].starts_with(&self.triple) {
            start += step;
        }
        if line[start..end].starts_with(&self.double) || line[start..end].starts_with(&self.single)
        {
            start += step;
        }

        if line[start..end].ends_with(&self.triple) {
            end -= step;
        }
        if line[start..end].ends_with(&self.double) || line[start..end].ends_with(&self.single) {
            end -= step;
        }

        (start, end)
    }

    /// Reject a doubled delimiter inside the line that is not part of a
    /// tripled (escaped) one.
    fn check_interior(&self, body: &str, offset: usize) -> TokenizeResult<()> {
        if !body.contains(&self.double) {
            return Ok(());
        }
        if !body.replace(&self.triple, "").contains(&self.double) {
            return Ok(());
        }

        let position = self
            .unescaped_double(body)
            .or_else(|| body.find(&self.double))
            .unwrap_or(0);
        Err(TokenizeError::UnescapedDoubleDelimiter {
            delimiter: self.single.clone(),
            position: offset + position,
        })
    }

    /// First doubled delimiter lying outside every tripled run, scanning the
    /// triples left to right the way `str::replace` consumes them.
    fn unescaped_double(&self, body: &str) -> Option<usize> {
        let mut cursor = 0;
        for (at, _) in body.match_indices(self.triple.as_str()) {
            if let Some(found) = body[cursor..at].find(&self.double) {
                return Some(cursor + found);
            }
            cursor = at + self.triple.len();
        }
        body[cursor..].find(&self.double).map(|found| cursor + found)
    }
}

/// Split `line` on `delimiter` without keeping a tokenizer around.
pub fn split_line(line: &str, delimiter: &str) -> TokenizeResult<Vec<String>> {
    LineTokenizer::new(delimiter)?.split(line)
}
