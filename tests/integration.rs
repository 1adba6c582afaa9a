//! End-to-end tests for the Morse compiler.
//!
//! These exercise the public API from configuration through tokenization,
//! lookup and glyph conversion, checking that the pieces agree on formats,
//! delimiters and error reporting.

use compile_morse::alphabet::Alphabet;
use compile_morse::compiler::{ErrorPolicy, MorseCompiler};
use compile_morse::config::CompilerConfig;
use compile_morse::error::{GlyphError, LookupError, MorseError, TokenizeError, TranslateError};
use compile_morse::glyph::GlyphFormat;
use compile_morse::index::AlphabetIndex;
use compile_morse::tokenizer::split_line;
use compile_morse::translate::Direction;

fn decoder(input_glyphs: GlyphFormat, delimiter: &str) -> MorseCompiler {
    MorseCompiler::new(&CompilerConfig {
        method: "MorseToEnglish".into(),
        input_delimiter: delimiter.into(),
        input_glyphs,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn every_default_token_round_trips_through_the_index() {
    let alphabet = Alphabet::international();
    let index = AlphabetIndex::new(&alphabet);
    for entry in alphabet.entries() {
        let lower = entry.text.to_lowercase();
        let morse = index.text_to_morse(&lower.to_uppercase()).unwrap();
        assert_eq!(index.morse_to_text(morse).unwrap(), lower.to_uppercase());
    }
}

#[test]
fn tokenizer_reference_cases() {
    assert!(split_line("", ".").unwrap().is_empty());
    assert_eq!(split_line(".", ".").unwrap(), ["."]);
    assert_eq!(split_line("..", ".").unwrap(), ["."]);
    assert_eq!(split_line("...", ".").unwrap(), ["."]);
    assert_eq!(split_line("A.B.C", ".").unwrap(), ["A", "B", "C"]);
    assert_eq!(split_line("..A.B..", ".").unwrap(), [".", "A", "B", "."]);
    assert!(matches!(
        split_line("....", "."),
        Err(TokenizeError::TooManyConsecutiveDelimiters { .. })
    ));
    assert!(matches!(
        split_line("A..B", "."),
        Err(TokenizeError::UnescapedDoubleDelimiter { .. })
    ));
}

#[test]
fn text_with_delimiter_punctuation_round_trips() {
    let encoder = MorseCompiler::new(&CompilerConfig {
        output_delimiter: " ".into(),
        output_glyphs: GlyphFormat::DOTS,
        ..Default::default()
    })
    .unwrap();
    let decoder = decoder(GlyphFormat::DOTS, " ");

    // The full stop is the delimiter, written as an escaped run.
    let morse = encoder.compile_line("h.i...o.k").unwrap();
    assert_eq!(morse, ".... .. .-.-.- --- -.-");
    assert_eq!(decoder.translate_line(&morse).unwrap(), ["H", "I", ".", "O", "K"]);
}

#[test]
fn decoding_with_wrong_glyphs_names_the_character() {
    let err = decoder(GlyphFormat::DOTS, " ")
        .translate_line(".- -o")
        .unwrap_err();
    match err {
        MorseError::Translate(TranslateError::Glyph(GlyphError::InvalidGlyphCharacter {
            character,
            position,
            token,
            ..
        })) => {
            assert_eq!(character, 'o');
            assert_eq!(position, 1);
            assert_eq!(token, "-o");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_tokens_fail_deterministically() {
    let compiler = MorseCompiler::new(&CompilerConfig::default()).unwrap();
    for _ in 0..3 {
        assert!(matches!(
            compiler.translate_line("A.€"),
            Err(MorseError::Translate(TranslateError::Lookup(
                LookupError::UnknownTextToken { .. }
            )))
        ));
    }
    assert!(matches!(
        decoder(GlyphFormat::CANONICAL, " ").translate_line("o-------"),
        Err(MorseError::Translate(TranslateError::Lookup(LookupError::UnknownMorseToken { .. })))
    ));
}

#[test]
fn ambiguous_method_is_rejected_before_translation() {
    let mut config = CompilerConfig::with_method("XToX");
    config.alphabet.text_alphabet_name = "X".into();
    config.alphabet.morse_alphabet_name = "X".into();
    assert!(matches!(
        MorseCompiler::new(&config),
        Err(MorseError::Translate(TranslateError::AmbiguousTranslationMethod { .. }))
    ));
}

#[test]
fn colliding_method_names_are_rejected() {
    let mut config = CompilerConfig::with_method("ToToToTo");
    config.alphabet.text_alphabet_name = "To".into();
    config.alphabet.morse_alphabet_name = "ToTo".into();
    match MorseCompiler::new(&config) {
        Err(MorseError::Translate(TranslateError::AmbiguousTranslationMethod {
            composed, ..
        })) => assert_eq!(composed, "ToToToTo"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("ambiguous method accepted"),
    }
}

#[test]
fn unknown_method_is_rejected() {
    assert!(matches!(
        MorseCompiler::new(&CompilerConfig::with_method("EnglishToSemaphore")),
        Err(MorseError::Translate(TranslateError::UnknownTranslationMethod { .. }))
    ));
}

#[test]
fn custom_alphabet_with_mnemonics() {
    let alphabet = Alphabet::empty("Kids", "OwnMorse", GlyphFormat::CANONICAL)
        .with_token("HI", "-")
        .unwrap()
        .with_token("BYE", "o")
        .unwrap();
    let config = CompilerConfig {
        method: "KidsToOwnMorse".into(),
        input_delimiter: " ".into(),
        output_delimiter: " ".into(),
        ..Default::default()
    };
    let compiler = MorseCompiler::with_alphabet(&config, &alphabet).unwrap();
    assert_eq!(compiler.direction(), Direction::TextToMorse);
    assert_eq!(compiler.compile_line("hi bye hi").unwrap(), "- o -");
}

#[test]
fn duplicate_morse_codes_decode_to_first_token() {
    let alphabet = Alphabet::international().with_token("AR", "o-o-o").unwrap();
    let alphabet = alphabet.with_token("+", "o-o-o").unwrap();
    let config = CompilerConfig {
        method: "MorseToEnglish".into(),
        input_delimiter: " ".into(),
        output_delimiter: " ".into(),
        ..Default::default()
    };
    let compiler = MorseCompiler::with_alphabet(&config, &alphabet).unwrap();
    assert_eq!(compiler.compile_line("o-o-o o-").unwrap(), "AR A");
    assert_eq!(compiler.index().shadowed(), ["+".to_string()]);
}

#[test]
fn file_stream_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("message.txt");
    let output = dir.path().join("message.morse");
    std::fs::write(&input, "C.Q\nD.E\n\nS.O.S...\n").unwrap();

    let compiler = MorseCompiler::new(&CompilerConfig {
        output_delimiter: " ".into(),
        output_glyphs: GlyphFormat::DOTS,
        ..Default::default()
    })
    .unwrap();

    let reader = std::io::BufReader::new(std::fs::File::open(&input).unwrap());
    let writer = std::fs::File::create(&output).unwrap();
    let report = compiler
        .compile_stream(reader, writer, ErrorPolicy::Abort)
        .unwrap();

    assert_eq!(report.lines_read, 4);
    assert_eq!(report.lines_written, 4);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "-.-. --.-\n-.. .\n\n... --- ... .-.-.-\n"
    );
}

#[test]
fn index_is_shareable_across_threads() {
    let compiler = MorseCompiler::new(&CompilerConfig::default()).unwrap();
    let lines: Vec<String> = (0..64).map(|i| format!("N.{}", i % 10)).collect();
    let results = compiler.compile_batch(&lines);
    for (line, result) in lines.iter().zip(&results) {
        assert_eq!(result.as_ref().unwrap(), &compiler.compile_line(line).unwrap());
    }
}
