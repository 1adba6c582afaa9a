//! Translation pipeline: per-token normalize → lookup → reformat.
//!
//! The direction is fixed once from a method name of the form
//! `<Text>To<Morse>` (text → Morse) or `<Morse>To<Text>` (Morse → text), built
//! from the alphabet names. Each token is processed independently; the first
//! failing token aborts the whole sequence.

use std::fmt;
use std::sync::Arc;

use crate::error::{TranslateError, TranslateResult};
use crate::glyph::GlyphFormat;
use crate::index::AlphabetIndex;

/// Separator between the two alphabet names in a method name.
pub const METHOD_SEPARATOR: &str = "To";

/// Which way tokens are translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    TextToMorse,
    MorseToText,
}

impl Direction {
    /// Resolve a method name against the two alphabet names.
    ///
    /// When both composed forms are the same string (identical names, or names
    /// like `To` / `ToTo`) no method can pick a direction, so every method is
    /// rejected as ambiguous before anything is matched.
    pub fn resolve(
        method: &str,
        text_alphabet: &str,
        morse_alphabet: &str,
    ) -> TranslateResult<Self> {
        let to_morse = Self::TextToMorse.method_name(text_alphabet, morse_alphabet);
        let to_text = Self::MorseToText.method_name(text_alphabet, morse_alphabet);
        if to_morse == to_text {
            return Err(TranslateError::AmbiguousTranslationMethod {
                method: method.to_string(),
                composed: to_morse,
            });
        }

        if method == to_morse {
            Ok(Self::TextToMorse)
        } else if method == to_text {
            Ok(Self::MorseToText)
        } else {
            Err(TranslateError::UnknownTranslationMethod {
                method: method.to_string(),
                to_morse,
                to_text,
            })
        }
    }

    /// The method name selecting this direction.
    pub fn method_name(self, text_alphabet: &str, morse_alphabet: &str) -> String {
        match self {
            Direction::TextToMorse => format!("{text_alphabet}{METHOD_SEPARATOR}{morse_alphabet}"),
            Direction::MorseToText => format!("{morse_alphabet}{METHOD_SEPARATOR}{text_alphabet}"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TextToMorse => write!(f, "text-to-morse"),
            Direction::MorseToText => write!(f, "morse-to-text"),
        }
    }
}

/// Glyph conventions and case handling around the lookup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Glyphs of incoming Morse tokens (Morse → text).
    pub input_format: GlyphFormat,
    /// Glyphs of outgoing Morse tokens (text → Morse).
    pub output_format: GlyphFormat,
    /// Uppercase whole text tokens before lookup (text → Morse).
    pub uppercase: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            input_format: GlyphFormat::CANONICAL,
            output_format: GlyphFormat::CANONICAL,
            uppercase: true,
        }
    }
}

/// Translates token sequences in one fixed direction.
#[derive(Debug, Clone)]
pub struct Translator {
    index: Arc<AlphabetIndex>,
    direction: Direction,
    options: PipelineOptions,
}

impl Translator {
    pub fn new(index: Arc<AlphabetIndex>, direction: Direction, options: PipelineOptions) -> Self {
        Self {
            index,
            direction,
            options,
        }
    }

    /// Build a translator from a method name, failing on an ambiguous or
    /// unknown method.
    pub fn for_method(
        index: Arc<AlphabetIndex>,
        method: &str,
        options: PipelineOptions,
    ) -> TranslateResult<Self> {
        let direction = Direction::resolve(
            method,
            index.text_alphabet_name(),
            index.morse_alphabet_name(),
        )?;
        Ok(Self::new(index, direction, options))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn index(&self) -> &AlphabetIndex {
        &self.index
    }

    /// Translate one token.
    pub fn translate_token(&self, token: &str) -> TranslateResult<String> {
        let internal = self.index.internal_format();
        match self.direction {
            Direction::TextToMorse => {
                let morse = if self.options.uppercase {
                    self.index.text_to_morse(&token.to_uppercase())?
                } else {
                    self.index.text_to_morse(token)?
                };
                Ok(self.options.output_format.convert(morse, &internal)?)
            }
            Direction::MorseToText => {
                let morse = internal.convert(token, &self.options.input_format)?;
                Ok(self.index.morse_to_text(&morse)?.to_string())
            }
        }
    }

    /// Translate a token sequence, one output token per input token.
    pub fn translate<S: AsRef<str>>(&self, tokens: &[S]) -> TranslateResult<Vec<String>> {
        tokens
            .iter()
            .map(|token| self.translate_token(token.as_ref()))
            .collect()
    }
}
