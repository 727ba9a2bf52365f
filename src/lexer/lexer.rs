use tracing::debug;

use super::{
    classifier::classify,
    scanner::{LexerOptions, ScanState, Scanner},
    tokens::Token,
};

/// Tokenizes `source` with the default options.
///
/// `file` names the source in token spans and defaults to `"shell"`.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    tokenize_with(source, file, &LexerOptions::default())
}

/// Scans `source` into spans, then classifies every span the scanner left
/// as Unknown. Never fails: unrecognised spans stay Unknown.
///
/// A string or comment still open at end of input is emitted as Unknown and
/// skips classification.
pub fn tokenize_with(source: &str, file: Option<String>, options: &LexerOptions) -> Vec<Token> {
    let mut scanner = Scanner::new(source, file, *options);
    scanner.run();
    let unterminated = scanner.state() != ScanState::Normal;

    let mut raw = scanner.finish();
    let open_span = if unterminated { raw.pop() } else { None };

    let mut tokens: Vec<Token> = raw.into_iter().map(classify).collect();
    tokens.extend(open_span);

    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    tokens
}
