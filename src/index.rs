//! Alphabet index: O(1) text → Morse and Morse → text lookups.
//!
//! The forward map is an exact copy of the alphabet. The reverse map is built
//! in the alphabet's insertion order with first-writer-wins: when several text
//! tokens share one Morse code, only the earliest stays reachable from Morse.
//! Later duplicates are recorded as shadowed, not rejected.
//!
//! The index is never mutated after construction and is `Send + Sync`, so one
//! instance can serve any number of threads translating independent lines.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::alphabet::Alphabet;
use crate::error::{LookupError, LookupResult};
use crate::glyph::GlyphFormat;

/// Bidirectional lookup tables derived from an [`Alphabet`].
#[derive(Debug, Clone)]
pub struct AlphabetIndex {
    text_alphabet_name: String,
    morse_alphabet_name: String,
    internal_format: GlyphFormat,
    /// Forward map: text token → Morse token (internal format).
    text_to_morse: HashMap<String, String>,
    /// Reverse map: Morse token → first text token that used it.
    morse_to_text: HashMap<String, String>,
    /// Text tokens whose Morse code was already taken, in insertion order.
    shadowed: Vec<String>,
}

impl AlphabetIndex {
    pub fn new(alphabet: &Alphabet) -> Self {
        let mut text_to_morse = HashMap::with_capacity(alphabet.len());
        let mut morse_to_text = HashMap::with_capacity(alphabet.len());
        let mut shadowed = Vec::new();

        for entry in alphabet.entries() {
            text_to_morse.insert(entry.text.clone(), entry.morse.clone());
            match morse_to_text.entry(entry.morse.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(entry.text.clone());
                }
                Entry::Occupied(kept) => {
                    tracing::debug!(
                        morse = %entry.morse,
                        kept = %kept.get(),
                        shadowed = %entry.text,
                        "duplicate Morse code, reverse lookup keeps the first text token"
                    );
                    shadowed.push(entry.text.clone());
                }
            }
        }

        Self {
            text_alphabet_name: alphabet.text_alphabet_name().to_string(),
            morse_alphabet_name: alphabet.morse_alphabet_name().to_string(),
            internal_format: alphabet.internal_format(),
            text_to_morse,
            morse_to_text,
            shadowed,
        }
    }

    /// Morse code (internal format) for a text token.
    pub fn text_to_morse(&self, text_token: &str) -> LookupResult<&str> {
        self.text_to_morse
            .get(text_token)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownTextToken {
                alphabet: self.text_alphabet_name.clone(),
                token: text_token.to_string(),
            })
    }

    /// Text token for a Morse code given in the internal format.
    pub fn morse_to_text(&self, morse_token: &str) -> LookupResult<&str> {
        self.morse_to_text
            .get(morse_token)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownMorseToken {
                alphabet: self.morse_alphabet_name.clone(),
                token: morse_token.to_string(),
            })
    }

    pub fn text_alphabet_name(&self) -> &str {
        &self.text_alphabet_name
    }

    pub fn morse_alphabet_name(&self) -> &str {
        &self.morse_alphabet_name
    }

    /// Glyph format the stored Morse tokens are written in.
    pub fn internal_format(&self) -> GlyphFormat {
        self.internal_format
    }

    /// Text tokens unreachable by reverse lookup because an earlier token
    /// already claimed their Morse code.
    pub fn shadowed(&self) -> &[String] {
        &self.shadowed
    }

    /// Number of text tokens.
    pub fn len(&self) -> usize {
        self.text_to_morse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_to_morse.is_empty()
    }
}

impl From<&Alphabet> for AlphabetIndex {
    fn from(alphabet: &Alphabet) -> Self {
        Self::new(alphabet)
    }
}
