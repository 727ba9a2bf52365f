use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{Token, TokenKind, DELIMITERS, KEYWORDS, OPERATORS, PREPROCESSOR_DIRECTIVES};

/// How a rule recognises a span.
pub enum Matcher {
    /// Exact membership in a reference table.
    Table(&'static HashSet<&'static str>),
    /// Whole-span regex match.
    Shape(Regex),
}

impl Matcher {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Matcher::Table(table) => table.contains(value),
            Matcher::Shape(regex) => regex.is_match(value),
        }
    }
}

pub struct ClassificationRule {
    pub matcher: Matcher,
    pub kind: TokenKind,
}

fn shape(pattern: &str) -> Matcher {
    // Patterns are fixed literals below; a typo is a programming error.
    Matcher::Shape(Regex::new(pattern).expect("invalid shape pattern"))
}

lazy_static! {
    /// Precedence chain. The first rule that matches decides the kind, so
    /// keywords and directives must come before the identifier shape.
    pub static ref CLASSIFICATION_CHAIN: Vec<ClassificationRule> = vec![
        ClassificationRule { matcher: Matcher::Table(&KEYWORDS), kind: TokenKind::Keyword },
        ClassificationRule { matcher: Matcher::Table(&PREPROCESSOR_DIRECTIVES), kind: TokenKind::PreprocessorDirective },
        ClassificationRule { matcher: shape(r"^[_a-zA-Z][_a-zA-Z0-9]*$"), kind: TokenKind::Identifier },
        ClassificationRule { matcher: shape(r"^0[xX][0-9a-fA-F]+$"), kind: TokenKind::HexLiteral },
        ClassificationRule { matcher: shape(r"^[0-9]*\.[0-9]+$"), kind: TokenKind::DecimalLiteral },
        ClassificationRule { matcher: shape(r"^[0-9]+$"), kind: TokenKind::IntegerLiteral },
        ClassificationRule { matcher: Matcher::Table(&OPERATORS), kind: TokenKind::Operator },
        ClassificationRule { matcher: Matcher::Table(&DELIMITERS), kind: TokenKind::Punctuation },
        // Scanner output never reaches this; hand-built spans can.
        ClassificationRule { matcher: shape(r#"(?s)^"([^"]|\\.)*"$"#), kind: TokenKind::StringLiteral },
    ];
}

/// Kind of a raw span, falling back to [`TokenKind::Unknown`].
pub fn classify_value(value: &str) -> TokenKind {
    CLASSIFICATION_CHAIN
        .iter()
        .find(|rule| rule.matcher.matches(value))
        .map_or(TokenKind::Unknown, |rule| rule.kind)
}

/// Resolves an Unknown token. Tokens of any other kind are returned unchanged.
pub fn classify(mut token: Token) -> Token {
    if token.kind == TokenKind::Unknown {
        token.kind = classify_value(&token.value);
    }

    token
}
