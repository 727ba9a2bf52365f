use std::{io, path::PathBuf, process, time::Instant};

use clap::Parser;
use cslex::{
    display::write_tokens,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize_with, scanner::LexerOptions},
    read_source,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Tokenizes C#-like source files", long_about = None)]
struct Cli {
    /// Source file to tokenize
    #[arg(default_value = "test.cs")]
    path: PathBuf,

    /// Append (line:column) to every token
    #[arg(short, long)]
    positions: bool,

    /// Let backslashes escape characters inside string literals
    #[arg(short, long)]
    escapes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let source = read_source(&cli.path)?;

    let options = LexerOptions {
        escape_aware_strings: cli.escapes,
    };
    debug!("options: {:?}", options);

    let start = Instant::now();
    let file_name = cli.path.to_string_lossy().into_owned();
    let tokens = tokenize_with(&source, Some(file_name), &options);
    info!("tokenized in {:?}", start.elapsed());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &tokens, cli.positions.then_some(source.as_str()))
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        display_error(&e);
        process::exit(1);
    }
}
