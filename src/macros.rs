//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span over byte offsets of a named source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span from a start and end byte offset.
///
/// The file name is an `Arc<String>` and is cloned into both positions.
/// Offsets past `u32::MAX` saturate to `u32::MAX`.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(start, start + value.len(), scanner.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position(u32::try_from($start).unwrap_or(u32::MAX), Arc::clone(&$file)),
            end: Position(u32::try_from($end).unwrap_or(u32::MAX), Arc::clone(&$file)),
        }
    };
}
