//! Compiler configuration: delimiters, glyph conventions, case handling,
//! translation method and alphabet, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! method = "MorseToEnglish"
//! input_delimiter = " "
//! input_glyphs = ".-"
//! output_glyphs = { short = "o", long = "-" }
//!
//! [alphabet]
//! base = "international"
//! tokens = [{ text = "Å", morse = "o--o-" }]
//! ```

use std::path::Path;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabet::{Alphabet, DEFAULT_MORSE_ALPHABET, DEFAULT_TEXT_ALPHABET};
use crate::error::AlphabetResult;
use crate::glyph::GlyphFormat;
use crate::translate::{Direction, PipelineOptions};

/// Errors from loading or validating configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(morse::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(morse::config::parse),
        help("Check the TOML syntax and the field names in the config file.")
    )]
    Parse { path: String, message: String },

    #[error("{field} must not be empty")]
    #[diagnostic(
        code(morse::config::empty_delimiter),
        help("Delimiters separate tokens on a line; set {field} to at least one character.")
    )]
    EmptyDelimiter { field: &'static str },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Which table an alphabet starts from before extra tokens are appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetBase {
    /// Letters, punctuation and digits of International Morse.
    #[default]
    International,
    /// No entries.
    Empty,
}

/// One extra alphabet entry, Morse written in the internal glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub text: String,
    pub morse: String,
}

/// How the alphabet is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetConfig {
    #[serde(default = "default_text_alphabet_name")]
    pub text_alphabet_name: String,
    #[serde(default = "default_morse_alphabet_name")]
    pub morse_alphabet_name: String,
    #[serde(default)]
    pub internal_glyphs: GlyphFormat,
    #[serde(default)]
    pub base: AlphabetBase,
    /// Appended after the base table, in order.
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

fn default_text_alphabet_name() -> String {
    DEFAULT_TEXT_ALPHABET.into()
}
fn default_morse_alphabet_name() -> String {
    DEFAULT_MORSE_ALPHABET.into()
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self {
            text_alphabet_name: default_text_alphabet_name(),
            morse_alphabet_name: default_morse_alphabet_name(),
            internal_glyphs: GlyphFormat::CANONICAL,
            base: AlphabetBase::International,
            tokens: Vec::new(),
        }
    }
}

impl AlphabetConfig {
    /// Materialize the alphabet.
    pub fn build(&self) -> AlphabetResult<Alphabet> {
        let mut alphabet = match self.base {
            AlphabetBase::International => Alphabet::international_as(
                self.text_alphabet_name.as_str(),
                self.morse_alphabet_name.as_str(),
                self.internal_glyphs,
            )?,
            AlphabetBase::Empty => Alphabet::empty(
                self.text_alphabet_name.as_str(),
                self.morse_alphabet_name.as_str(),
                self.internal_glyphs,
            ),
        };
        for entry in &self.tokens {
            alphabet.add_token(entry.text.as_str(), entry.morse.as_str())?;
        }
        Ok(alphabet)
    }
}

/// Full configuration of a [`MorseCompiler`](crate::compiler::MorseCompiler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Separator between tokens on input lines.
    #[serde(default = "default_delimiter")]
    pub input_delimiter: String,
    /// Separator written between translated tokens; may be empty.
    #[serde(default = "default_delimiter")]
    pub output_delimiter: String,
    /// Glyphs used by Morse input.
    #[serde(default)]
    pub input_glyphs: GlyphFormat,
    /// Glyphs used by Morse output.
    #[serde(default)]
    pub output_glyphs: GlyphFormat,
    /// Uppercase text tokens before translating them to Morse.
    #[serde(default = "default_uppercase")]
    pub uppercase: bool,
    /// `<Text>To<Morse>` or `<Morse>To<Text>`.
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub alphabet: AlphabetConfig,
}

fn default_delimiter() -> String {
    ".".into()
}
fn default_uppercase() -> bool {
    true
}
fn default_method() -> String {
    Direction::TextToMorse.method_name(DEFAULT_TEXT_ALPHABET, DEFAULT_MORSE_ALPHABET)
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            input_delimiter: default_delimiter(),
            output_delimiter: default_delimiter(),
            input_glyphs: GlyphFormat::CANONICAL,
            output_glyphs: GlyphFormat::CANONICAL,
            uppercase: default_uppercase(),
            method: default_method(),
            alphabet: AlphabetConfig::default(),
        }
    }
}

impl CompilerConfig {
    /// Default config translating with the given method.
    pub fn with_method(method: &str) -> Self {
        Self {
            method: method.to_string(),
            ..Default::default()
        }
    }

    /// Load from a TOML file and validate.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse TOML text and validate.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.input_delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter {
                field: "input_delimiter",
            });
        }
        Ok(())
    }

    /// Options for the translation pipeline.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            input_format: self.input_glyphs,
            output_format: self.output_glyphs,
            uppercase: self.uppercase,
        }
    }
}
