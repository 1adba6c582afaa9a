// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # compile-morse
//!
//! Line-oriented translation between text and Morse code over configurable
//! alphabets, delimiters and glyph conventions.
//!
//! ## Architecture
//!
//! - **Glyphs** (`glyph`): short/long character pairs and token re-encoding
//! - **Alphabets** (`alphabet`): named, ordered text → Morse tables
//! - **Index** (`index`): forward and first-writer-wins reverse lookups
//! - **Tokenizer** (`tokenizer`): splitting lines whose delimiter may be a token
//! - **Pipeline** (`translate`): per-token normalize → lookup → reformat
//! - **Compiler** (`compiler`): validated line/stream/batch facade over all of the above
//!
//! ## Library usage
//!
//! ```no_run
//! use compile_morse::compiler::MorseCompiler;
//! use compile_morse::config::CompilerConfig;
//!
//! let compiler = MorseCompiler::new(&CompilerConfig::default()).unwrap();
//! assert_eq!(compiler.compile_line("s.o.s").unwrap(), "ooo.---.ooo");
//! ```

pub mod alphabet;
pub mod compiler;
pub mod config;
pub mod error;
pub mod glyph;
pub mod index;
pub mod tokenizer;
pub mod translate;
