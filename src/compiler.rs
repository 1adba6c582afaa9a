//! Compiler facade: tokenizer + translation pipeline behind one line-level API.
//!
//! A [`MorseCompiler`] is fully validated when constructed: the alphabet is
//! built, the index derived, the method resolved and the delimiters checked
//! before the first line is seen. After that it is read-only and can be shared
//! across threads.

use std::io::{BufRead, Write};
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::config::CompilerConfig;
use crate::error::{MorseError, MorseResult};
use crate::index::AlphabetIndex;
use crate::tokenizer::LineTokenizer;
use crate::translate::{Direction, Translator};

/// What to do with a line that fails to translate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop and return the error with its line number.
    #[default]
    Abort,
    /// Log the error, write nothing for the line, and continue.
    Skip,
}

/// Line counts from one [`MorseCompiler::compile_stream`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_skipped: usize,
}

/// Translates whole lines between text and Morse.
#[derive(Debug, Clone)]
pub struct MorseCompiler {
    tokenizer: LineTokenizer,
    translator: Translator,
    output_delimiter: String,
}

impl MorseCompiler {
    /// Build a compiler, assembling the alphabet from `config.alphabet`.
    pub fn new(config: &CompilerConfig) -> MorseResult<Self> {
        let alphabet = config.alphabet.build()?;
        Self::with_alphabet(config, &alphabet)
    }

    /// Build a compiler over a ready-made alphabet; `config.alphabet` is ignored.
    pub fn with_alphabet(config: &CompilerConfig, alphabet: &Alphabet) -> MorseResult<Self> {
        config.validate()?;
        let index = Arc::new(AlphabetIndex::new(alphabet));
        let translator =
            Translator::for_method(index, &config.method, config.pipeline_options())?;
        let tokenizer = LineTokenizer::new(config.input_delimiter.as_str())?;

        tracing::info!(
            method = %config.method,
            direction = %translator.direction(),
            tokens = alphabet.len(),
            shadowed = translator.index().shadowed().len(),
            "morse compiler ready"
        );

        Ok(Self {
            tokenizer,
            translator,
            output_delimiter: config.output_delimiter.clone(),
        })
    }

    pub fn direction(&self) -> Direction {
        self.translator.direction()
    }

    pub fn index(&self) -> &AlphabetIndex {
        self.translator.index()
    }

    pub fn output_delimiter(&self) -> &str {
        &self.output_delimiter
    }

    /// Split and translate one line, one output token per input token.
    pub fn translate_line(&self, line: &str) -> MorseResult<Vec<String>> {
        let tokens = self.tokenizer.split(line)?;
        Ok(self.translator.translate(tokens.as_slice())?)
    }

    /// Translate one line and join the result with the output delimiter.
    pub fn compile_line(&self, line: &str) -> MorseResult<String> {
        Ok(self.translate_line(line)?.join(self.output_delimiter.as_str()))
    }

    /// Translate independent lines in parallel, keeping input order.
    pub fn compile_batch<S>(&self, lines: &[S]) -> Vec<MorseResult<String>>
    where
        S: AsRef<str> + Sync,
    {
        lines
            .par_iter()
            .map(|line| self.compile_line(line.as_ref()))
            .collect()
    }

    /// Translate every line of `reader` into `writer`, one output line per
    /// translated input line.
    pub fn compile_stream<R, W>(
        &self,
        reader: R,
        mut writer: W,
        policy: ErrorPolicy,
    ) -> MorseResult<CompileReport>
    where
        R: BufRead,
        W: Write,
    {
        let mut report = CompileReport::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let number = i + 1;
            report.lines_read += 1;

            match self.compile_line(&line) {
                Ok(out) => {
                    writeln!(writer, "{out}")?;
                    report.lines_written += 1;
                }
                Err(e) => match policy {
                    ErrorPolicy::Abort => {
                        return Err(MorseError::Line {
                            line: number,
                            source: Box::new(e),
                        });
                    }
                    ErrorPolicy::Skip => {
                        tracing::warn!(line = number, error = %e, "skipping untranslatable line");
                        report.lines_skipped += 1;
                    }
                },
            }
        }

        writer.flush()?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LookupError, TokenizeError, TranslateError};
    use crate::glyph::GlyphFormat;

    fn to_morse() -> MorseCompiler {
        MorseCompiler::new(&CompilerConfig::default()).unwrap()
    }

    #[test]
    fn translates_a_line() {
        let compiler = to_morse();
        assert_eq!(compiler.translate_line("s.o.s").unwrap(), ["ooo", "---", "ooo"]);
        assert_eq!(compiler.compile_line("s.o.s").unwrap(), "ooo.---.ooo");
        assert!(compiler.translate_line("").unwrap().is_empty());
    }

    #[test]
    fn delimiter_token_translates() {
        let compiler = to_morse();
        assert_eq!(compiler.translate_line("A...B").unwrap(), ["o-", "o-o-o-", "-ooo"]);
        assert_eq!(compiler.translate_line("..").unwrap(), ["o-o-o-"]);
    }

    #[test]
    fn tokenizer_errors_surface() {
        let err = to_morse().translate_line("A..B").unwrap_err();
        assert!(matches!(
            err,
            MorseError::Tokenize(TokenizeError::UnescapedDoubleDelimiter { .. })
        ));
    }

    #[test]
    fn ambiguous_method_fails_at_construction() {
        let mut config = CompilerConfig::with_method("MorseToMorse");
        config.alphabet.text_alphabet_name = "Morse".into();
        let err = MorseCompiler::new(&config).unwrap_err();
        assert!(matches!(
            err,
            MorseError::Translate(TranslateError::AmbiguousTranslationMethod { .. })
        ));
    }

    #[test]
    fn round_trip_through_dots() {
        let encode = MorseCompiler::new(&CompilerConfig {
            output_delimiter: " ".into(),
            output_glyphs: GlyphFormat::DOTS,
            ..Default::default()
        })
        .unwrap();
        let decode = MorseCompiler::new(&CompilerConfig {
            method: "MorseToEnglish".into(),
            input_delimiter: " ".into(),
            input_glyphs: GlyphFormat::DOTS,
            output_delimiter: "".into(),
            ..Default::default()
        })
        .unwrap();

        let morse = encode.compile_line("h.e.l.l.o").unwrap();
        assert_eq!(morse, ".... . .-.. .-.. ---");
        assert_eq!(decode.compile_line(&morse).unwrap(), "HELLO");
    }

    #[test]
    fn batch_keeps_order_and_errors() {
        let compiler = to_morse();
        let results = compiler.compile_batch(&["E", "€", "T"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), "o");
        assert!(matches!(
            results[1],
            Err(MorseError::Translate(TranslateError::Lookup(
                LookupError::UnknownTextToken { .. }
            )))
        ));
        assert_eq!(results[2].as_ref().unwrap(), "-");
    }

    #[test]
    fn stream_aborts_with_line_number() {
        let input = "E.T\nA..B\nE\n";
        let mut out = Vec::new();
        let err = to_morse()
            .compile_stream(input.as_bytes(), &mut out, ErrorPolicy::Abort)
            .unwrap_err();
        assert!(matches!(err, MorseError::Line { line: 2, .. }));
        assert_eq!(String::from_utf8(out).unwrap(), "o.-\n");
    }

    #[test]
    fn stream_skips_bad_lines() {
        let input = "E.T\nA..B\n\nS\n";
        let mut out = Vec::new();
        let report = to_morse()
            .compile_stream(input.as_bytes(), &mut out, ErrorPolicy::Skip)
            .unwrap();
        assert_eq!(
            report,
            CompileReport {
                lines_read: 4,
                lines_written: 3,
                lines_skipped: 1,
            }
        );
        assert_eq!(String::from_utf8(out).unwrap(), "o.-\n\nooo\n");
    }
}
