//! Alphabets: named, ordered mappings from text tokens to Morse tokens.
//!
//! Text tokens are case-sensitive strings of any length, so an alphabet can
//! hold single letters as well as multi-character mnemonics. Morse tokens are
//! stored in the alphabet's internal [`GlyphFormat`]. Entries keep their
//! insertion order, which is the order an [`AlphabetIndex`](crate::index::AlphabetIndex)
//! is built in.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{AlphabetError, AlphabetResult};
use crate::glyph::GlyphFormat;

/// Default name of the text side of the built-in alphabet.
pub const DEFAULT_TEXT_ALPHABET: &str = "English";

/// Default name of the Morse side of the built-in alphabet.
pub const DEFAULT_MORSE_ALPHABET: &str = "Morse";

/// International Morse code, written with [`GlyphFormat::CANONICAL`].
const INTERNATIONAL: &[(&str, &str)] = &[
    ("A", "o-"),
    ("B", "-ooo"),
    ("C", "-o-o"),
    ("D", "-oo"),
    ("E", "o"),
    ("F", "oo-o"),
    ("G", "--o"),
    ("H", "oooo"),
    ("I", "oo"),
    ("J", "o---"),
    ("K", "-o-"),
    ("L", "o-oo"),
    ("M", "--"),
    ("N", "-o"),
    ("O", "---"),
    ("P", "o--o"),
    ("Q", "--o-"),
    ("R", "o-o"),
    ("S", "ooo"),
    ("T", "-"),
    ("U", "oo-"),
    ("V", "ooo-"),
    ("W", "o--"),
    ("X", "-oo-"),
    ("Y", "-o--"),
    ("Z", "--oo"),
    (".", "o-o-o-"),
    (",", "--oo--"),
    ("?", "oo--oo"),
    ("/", "-oo-o"),
    ("@", "o--o-o"),
    ("1", "o----"),
    ("2", "oo---"),
    ("3", "ooo--"),
    ("4", "oooo-"),
    ("5", "ooooo"),
    ("6", "-oooo"),
    ("7", "--ooo"),
    ("8", "---oo"),
    ("9", "----o"),
    ("0", "-----"),
];

/// One text token and its Morse code in the alphabet's internal format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabetEntry {
    pub text: String,
    pub morse: String,
}

/// A named text ↔ Morse token mapping.
#[derive(Debug, Clone)]
pub struct Alphabet {
    text_alphabet_name: String,
    morse_alphabet_name: String,
    internal_format: GlyphFormat,
    entries: Vec<AlphabetEntry>,
    text_tokens: HashSet<String>,
}

impl Alphabet {
    /// An alphabet with no entries, for building custom tables from scratch.
    pub fn empty(
        text_alphabet_name: impl Into<String>,
        morse_alphabet_name: impl Into<String>,
        internal_format: GlyphFormat,
    ) -> Self {
        Self {
            text_alphabet_name: text_alphabet_name.into(),
            morse_alphabet_name: morse_alphabet_name.into(),
            internal_format,
            entries: Vec::new(),
            text_tokens: HashSet::new(),
        }
    }

    /// The built-in English/Morse alphabet: letters, five punctuation marks
    /// and the ten digits.
    pub fn international() -> Self {
        let mut alphabet = Self::empty(
            DEFAULT_TEXT_ALPHABET,
            DEFAULT_MORSE_ALPHABET,
            GlyphFormat::CANONICAL,
        );
        for &(text, morse) in INTERNATIONAL {
            alphabet.push_unchecked(text, morse.to_string());
        }
        alphabet
    }

    /// The built-in table under custom names, stored in `internal_format`.
    pub fn international_as(
        text_alphabet_name: impl Into<String>,
        morse_alphabet_name: impl Into<String>,
        internal_format: GlyphFormat,
    ) -> AlphabetResult<Self> {
        let mut alphabet = Self::empty(text_alphabet_name, morse_alphabet_name, internal_format);
        for &(text, morse) in INTERNATIONAL {
            let converted = internal_format
                .convert(morse, &GlyphFormat::CANONICAL)
                .map_err(|source| AlphabetError::InvalidMorseToken {
                    token: text.to_string(),
                    morse: morse.to_string(),
                    source,
                })?;
            alphabet.add_token(text, converted)?;
        }
        Ok(alphabet)
    }

    /// Append an entry. The text token must be new and the Morse token must be
    /// written in the internal glyph format.
    pub fn add_token(
        &mut self,
        text: impl Into<String>,
        morse: impl Into<String>,
    ) -> AlphabetResult<()> {
        let text = text.into();
        let morse = morse.into();
        if self.text_tokens.contains(&text) {
            return Err(AlphabetError::DuplicateTextToken {
                alphabet: self.text_alphabet_name.clone(),
                token: text,
            });
        }
        if let Err(source) = self.internal_format.validate(&morse) {
            return Err(AlphabetError::InvalidMorseToken {
                token: text,
                morse,
                source,
            });
        }
        self.push_unchecked(&text, morse);
        Ok(())
    }

    /// Builder-style [`add_token`](Self::add_token).
    pub fn with_token(
        mut self,
        text: impl Into<String>,
        morse: impl Into<String>,
    ) -> AlphabetResult<Self> {
        self.add_token(text, morse)?;
        Ok(self)
    }

    fn push_unchecked(&mut self, text: &str, morse: String) {
        self.text_tokens.insert(text.to_string());
        self.entries.push(AlphabetEntry {
            text: text.to_string(),
            morse,
        });
    }

    pub fn text_alphabet_name(&self) -> &str {
        &self.text_alphabet_name
    }

    pub fn morse_alphabet_name(&self) -> &str {
        &self.morse_alphabet_name
    }

    pub fn internal_format(&self) -> GlyphFormat {
        self.internal_format
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[AlphabetEntry] {
        &self.entries
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.text_tokens.contains(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::international()
    }
}
