use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = [
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ]
    .into_iter()
    .collect();

    pub static ref PREPROCESSOR_DIRECTIVES: HashSet<&'static str> = [
        "#if", "#elif", "#else", "#endif", "#define", "#undef", "#warning", "#error",
        "#line", "#region", "#endregion", "#pragma",
    ]
    .into_iter()
    .collect();

    pub static ref OPERATORS: HashSet<&'static str> = [
        "+", "-", "*", "/", "%", "&", "|", "^", "!", "~", "++", "--", "<<", ">>", "==", "!=",
        ">", "<", ">=", "<=", "&&", "||", "??", "?:", "=>", "=", "+=", "-=", "*=", "/=", "%=",
        "&=", "|=", "^=", "<<=", ">>=", "[]", "()", ".", "->",
    ]
    .into_iter()
    .collect();

    pub static ref DELIMITERS: HashSet<&'static str> =
        [",", ";", "{", "}", "(", ")", "[", "]", ":", "?"].into_iter().collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    StringLiteral,
    IntegerLiteral,
    HexLiteral,
    DecimalLiteral,
    Punctuation, // delimiters
    Operator,
    Comment,
    PreprocessorDirective,
    Unknown,
}

impl TokenKind {
    /// Human-readable label used in token listings.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::StringLiteral => "String Constant",
            TokenKind::IntegerLiteral => "Numeric Constant",
            TokenKind::HexLiteral => "Hexadecimal Number",
            TokenKind::DecimalLiteral => "Decimal Number",
            TokenKind::Punctuation => "Delimiter",
            TokenKind::Operator => "Operator",
            TokenKind::Comment => "Comment",
            TokenKind::PreprocessorDirective => "Preprocessor Directive",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.value, self.kind)
    }
}
