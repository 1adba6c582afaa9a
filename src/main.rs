//! compile-morse CLI: translate text files to Morse code and back.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use compile_morse::alphabet::AlphabetEntry;
use compile_morse::compiler::{ErrorPolicy, MorseCompiler};
use compile_morse::config::CompilerConfig;
use compile_morse::glyph::GlyphFormat;

#[derive(Parser)]
#[command(name = "compile-morse", version, about = "Translate text to Morse code and back")]
struct Cli {
    /// TOML config file; flags below override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Overrides {
    /// Translation method, e.g. "EnglishToMorse" or "MorseToEnglish".
    #[arg(long, global = true)]
    method: Option<String>,

    /// Separator between tokens on input lines.
    #[arg(long, global = true)]
    input_delimiter: Option<String>,

    /// Separator written between translated tokens.
    #[arg(long, global = true)]
    output_delimiter: Option<String>,

    /// Short and long glyph of Morse input, e.g. ".-".
    #[arg(long, global = true, value_parser = parse_glyphs)]
    input_glyphs: Option<GlyphFormat>,

    /// Short and long glyph of Morse output, e.g. ".-".
    #[arg(long, global = true, value_parser = parse_glyphs)]
    output_glyphs: Option<GlyphFormat>,

    /// Translate text tokens as written instead of uppercasing them.
    #[arg(long, global = true)]
    no_uppercase: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a file (or stdin) line by line.
    Translate {
        /// Input file; stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output file; stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Log and skip lines that fail instead of aborting.
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Translate a single line given on the command line.
    Line {
        /// The line to translate.
        text: String,
    },

    /// List the active alphabet.
    Alphabet {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn parse_glyphs(s: &str) -> std::result::Result<GlyphFormat, String> {
    s.parse::<GlyphFormat>().map_err(|e| e.to_string())
}

impl Overrides {
    fn apply(self, config: &mut CompilerConfig) {
        if let Some(method) = self.method {
            config.method = method;
        }
        if let Some(delimiter) = self.input_delimiter {
            config.input_delimiter = delimiter;
        }
        if let Some(delimiter) = self.output_delimiter {
            config.output_delimiter = delimiter;
        }
        if let Some(glyphs) = self.input_glyphs {
            config.input_glyphs = glyphs;
        }
        if let Some(glyphs) = self.output_glyphs {
            config.output_glyphs = glyphs;
        }
        if self.no_uppercase {
            config.uppercase = false;
        }
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CompilerConfig::load(path)?,
        None => CompilerConfig::default(),
    };
    cli.overrides.apply(&mut config);

    match cli.command {
        Commands::Translate {
            input,
            output,
            skip_invalid,
        } => {
            let compiler = MorseCompiler::new(&config)?;
            let reader: Box<dyn BufRead> = match &input {
                Some(path) => Box::new(BufReader::new(File::open(path).into_diagnostic()?)),
                None => Box::new(io::stdin().lock()),
            };
            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path).into_diagnostic()?)),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            let policy = if skip_invalid {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            };

            let report = compiler.compile_stream(reader, writer, policy)?;
            tracing::info!(
                read = report.lines_read,
                written = report.lines_written,
                skipped = report.lines_skipped,
                "translation finished"
            );
        }

        Commands::Line { text } => {
            let compiler = MorseCompiler::new(&config)?;
            println!("{}", compiler.compile_line(&text)?);
        }

        Commands::Alphabet { json } => {
            let alphabet = config.alphabet.build()?;
            if json {
                let entries: &[AlphabetEntry] = alphabet.entries();
                let out = serde_json::to_string_pretty(entries).into_diagnostic()?;
                println!("{out}");
            } else {
                println!(
                    "{} / {} ({} tokens, internal glyphs \"{}\"):",
                    alphabet.text_alphabet_name(),
                    alphabet.morse_alphabet_name(),
                    alphabet.len(),
                    alphabet.internal_format()
                );
                for entry in alphabet.entries() {
                    println!("  {:<8} {}", entry.text, entry.morse);
                }
            }
        }
    }

    Ok(())
}
