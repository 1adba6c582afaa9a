//! Rich diagnostic error types for the Morse compiler.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains. Every variant carries the
//! offending character, token, or position so a failed line can be reported
//! precisely.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type for the Morse compiler.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum MorseError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Glyph(#[from] GlyphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {source}")]
    #[diagnostic(
        code(morse::io),
        help("Reading input or writing output failed. Check the paths and permissions.")
    )]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    #[diagnostic(
        code(morse::line_failed),
        help(
            "This input line could not be translated and the run was aborted. \
             Fix the line, or rerun with the skip policy to continue past bad lines."
        )
    )]
    Line {
        /// 1-based line number in the input stream.
        line: usize,
        #[source]
        source: Box<MorseError>,
    },
}

impl MorseError {
    /// The innermost error, unwrapping any `Line` context.
    pub fn root(&self) -> &MorseError {
        match self {
            MorseError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Glyph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GlyphError {
    #[error("invalid Morse glyph '{character}' at position {position} in \"{token}\"")]
    #[diagnostic(
        code(morse::glyph::invalid_character),
        help(
            "A Morse token may only contain the short glyph '{expected_short}' \
             and the long glyph '{expected_long}' of its format. Check the glyph \
             characters configured for the input file."
        )
    )]
    InvalidGlyphCharacter {
        character: char,
        /// 0-based character index within the token.
        position: usize,
        token: String,
        expected_short: char,
        expected_long: char,
    },

    #[error("malformed glyph pair \"{pair}\": expected exactly two characters")]
    #[diagnostic(
        code(morse::glyph::malformed_pair),
        help("Write the short glyph followed by the long glyph, e.g. \".-\" or \"o-\".")
    )]
    MalformedGlyphPair { pair: String },
}

/// Result type for glyph operations.
pub type GlyphResult<T> = std::result::Result<T, GlyphError>;

// ---------------------------------------------------------------------------
// Alphabet errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AlphabetError {
    #[error("alphabet \"{alphabet}\" already contains text token \"{token}\"")]
    #[diagnostic(
        code(morse::alphabet::duplicate_text_token),
        help(
            "Text tokens must be unique within one alphabet. Remove the duplicate, \
             or start from an empty alphabet if you meant to redefine it."
        )
    )]
    DuplicateTextToken { alphabet: String, token: String },

    #[error("Morse code \"{morse}\" for \"{token}\" is not in the internal glyph format")]
    #[diagnostic(
        code(morse::alphabet::invalid_morse_token),
        help(
            "Alphabet entries are stored in the internal glyph format. Write them with \
             the alphabet's internal short and long characters only."
        )
    )]
    InvalidMorseToken {
        token: String,
        morse: String,
        #[source]
        source: GlyphError,
    },
}

/// Result type for alphabet construction.
pub type AlphabetResult<T> = std::result::Result<T, AlphabetError>;

// ---------------------------------------------------------------------------
// Lookup errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LookupError {
    #[error("unknown text token \"{token}\" in alphabet \"{alphabet}\"")]
    #[diagnostic(
        code(morse::lookup::unknown_text_token),
        help(
            "The character or mnemonic has no Morse code in this alphabet. \
             Check the input delimiter, enable uppercasing, or add the token to the alphabet."
        )
    )]
    UnknownTextToken { alphabet: String, token: String },

    #[error("unknown Morse token \"{token}\" in alphabet \"{alphabet}\"")]
    #[diagnostic(
        code(morse::lookup::unknown_morse_token),
        help(
            "No text token maps to this Morse code. Check that the input delimiter \
             separates every code and that the input glyph characters are right."
        )
    )]
    UnknownMorseToken { alphabet: String, token: String },
}

/// Result type for alphabet index lookups.
pub type LookupResult<T> = std::result::Result<T, LookupError>;

// ---------------------------------------------------------------------------
// Tokenizer errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TokenizeError {
    #[error("delimiter must not be empty")]
    #[diagnostic(
        code(morse::tokenize::empty_delimiter),
        help("Configure a non-empty input delimiter, e.g. \".\" or \" \".")
    )]
    EmptyDelimiter,

    #[error("too many consecutive delimiters \"{delimiter}\" at byte {position}")]
    #[diagnostic(
        code(morse::tokenize::too_many_delimiters),
        help(
            "Four delimiters in a row can never be resolved. Use one between tokens, \
             three around a token that is itself the delimiter, or two at the line edges."
        )
    )]
    TooManyConsecutiveDelimiters { delimiter: String, position: usize },

    #[error("two consecutive delimiters \"{delimiter}\" encountered in input at byte {position}")]
    #[diagnostic(
        code(morse::tokenize::unescaped_double_delimiter),
        help(
            "Inside a line a doubled delimiter is ambiguous. Write the delimiter three \
             times to mean a token equal to the delimiter, or remove the extra one."
        )
    )]
    UnescapedDoubleDelimiter { delimiter: String, position: usize },
}

/// Result type for line tokenization.
pub type TokenizeResult<T> = std::result::Result<T, TokenizeError>;

// ---------------------------------------------------------------------------
// Translation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TranslateError {
    #[error(
        "translation method \"{method}\" is ambiguous: both directions are named \"{composed}\""
    )]
    #[diagnostic(
        code(morse::translate::ambiguous_method),
        help(
            "\"<Text>To<Morse>\" and \"<Morse>To<Text>\" compose to the same name for these \
             alphabets. Rename one alphabet so the two method names differ."
        )
    )]
    AmbiguousTranslationMethod { method: String, composed: String },

    #[error("unknown translation method \"{method}\"")]
    #[diagnostic(
        code(morse::translate::unknown_method),
        help(
            "Use \"{to_morse}\" to translate into Morse or \"{to_text}\" to translate back to text."
        )
    )]
    UnknownTranslationMethod {
        method: String,
        to_morse: String,
        to_text: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Glyph(#[from] GlyphError),
}

/// Result type for the translation pipeline.
pub type TranslateResult<T> = std::result::Result<T, TranslateError>;

/// Convenience alias for functions returning compiler results.
pub type MorseResult<T> = std::result::Result<T, MorseError>;
