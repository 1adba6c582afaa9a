//! Glyph formats: the two characters a textual convention uses for the short
//! and long Morse marks, and conversion of Morse tokens between conventions.
//!
//! Conversion is a pure per-character substitution. A character equal to the
//! source format's short glyph is tested first, so a degenerate source format
//! whose short and long glyphs coincide maps every position to "short".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GlyphError, GlyphResult};

/// A pair of characters denoting the short and long Morse glyphs.
///
/// Deserializes from either `{ short = ".", long = "-" }` or the two-character
/// string `".-"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GlyphSpec")]
pub struct GlyphFormat {
    /// Character for the short mark ("dit").
    pub short: char,
    /// Character for the long mark ("dah").
    pub long: char,
}

impl GlyphFormat {
    /// `o` / `-`: the convention the built-in alphabet is written in.
    pub const CANONICAL: GlyphFormat = GlyphFormat::new('o', '-');

    /// `.` / `-`: the common printed convention.
    pub const DOTS: GlyphFormat = GlyphFormat::new('.', '-');

    pub const fn new(short: char, long: char) -> Self {
        Self { short, long }
    }

    /// Whether short and long glyphs are the same character (lossy as a source).
    pub fn is_degenerate(&self) -> bool {
        self.short == self.long
    }

    /// Re-encode `token`, currently written in `from`, into this format.
    ///
    /// Fails on the first character that is neither `from.short` nor
    /// `from.long`, reporting the character and its 0-based index.
    pub fn convert(&self, token: &str, from: &GlyphFormat) -> GlyphResult<String> {
        token
            .chars()
            .enumerate()
            .map(|(position, c)| {
                if c == from.short {
                    Ok(self.short)
                } else if c == from.long {
                    Ok(self.long)
                } else {
                    Err(from.invalid(token, c, position))
                }
            })
            .collect()
    }

    /// Check that `token` is written only with this format's glyphs.
    pub fn validate(&self, token: &str) -> GlyphResult<()> {
        match token
            .chars()
            .enumerate()
            .find(|&(_, c)| c != self.short && c != self.long)
        {
            Some((position, c)) => Err(self.invalid(token, c, position)),
            None => Ok(()),
        }
    }

    fn invalid(&self, token: &str, character: char, position: usize) -> GlyphError {
        GlyphError::InvalidGlyphCharacter {
            character,
            position,
            token: token.to_string(),
            expected_short: self.short,
            expected_long: self.long,
        }
    }
}

impl Default for GlyphFormat {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl fmt::Display for GlyphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.short, self.long)
    }
}

/// Parses a two-character pair, short glyph first (`"o-"`, `".-"`).
impl FromStr for GlyphFormat {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(short), Some(long), None) => Ok(Self::new(short, long)),
            _ => Err(GlyphError::MalformedGlyphPair {
                pair: s.to_string(),
            }),
        }
    }
}

/// Accepted serialized forms of a [`GlyphFormat`].
#[derive(Deserialize)]
#[serde(untagged)]
enum GlyphSpec {
    Pair(String),
    Table { short: char, long: char },
}

impl TryFrom<GlyphSpec> for GlyphFormat {
    type Error = GlyphError;

    fn try_from(spec: GlyphSpec) -> Result<Self, Self::Error> {
        match spec {
            GlyphSpec::Pair(pair) => pair.parse(),
            GlyphSpec::Table { short, long } => Ok(Self::new(short, long)),
        }
    }
}
