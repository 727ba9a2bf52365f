//! Token listing output.
//!
//! One token per line as `<value> - <label>`, optionally followed by the
//! 1-based `(line:column)` of the token's first character.

use std::io::Write;

use crate::{
    errors::errors::{Error, ErrorImpl},
    get_line_at_position,
    lexer::tokens::Token,
};

pub fn format_token(token: &Token) -> String {
    format!("{} - {}", token.value, token.kind.label())
}

/// Like [`format_token`], with the token's location in `source` appended.
pub fn format_token_at(token: &Token, source: &str) -> String {
    match get_line_at_position(source, token.span.start.0) {
        Some((line, line_text, line_pos)) => {
            // Column counts characters, not bytes.
            let column = line_text
                .get(..line_pos)
                .map_or(line_pos, |prefix| prefix.chars().count())
                + 1;
            format!("{} ({}:{})", format_token(token), line, column)
        }
        None => format_token(token),
    }
}

/// Writes every token on its own line. Pass the source text to include
/// positions.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    positions: Option<&str>,
) -> Result<(), Error> {
    let map_err = |e: std::io::Error| {
        Error::new(ErrorImpl::OutputFailed {
            reason: e.to_string(),
        })
    };

    for token in tokens {
        let line = match positions {
            Some(source) => format_token_at(token, source),
            None => format_token(token),
        };
        writeln!(out, "{}", line).map_err(map_err)?;
    }

    out.flush().map_err(map_err)
}
