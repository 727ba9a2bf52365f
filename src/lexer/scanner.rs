use std::{iter::Peekable, mem, str::CharIndices, sync::Arc};

use tracing::{debug, trace};

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Knobs for a single tokenization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerOptions {
    /// Treat a backslash inside a string literal as escaping the next
    /// character, so `\"` does not end the string. Off by default, in which
    /// case the first `"` after the opening quote always closes it.
    pub escape_aware_strings: bool,
}

/// Scanner mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    InString,
    InLineComment,
    InBlockComment,
}

/// Phase one of tokenization.
///
/// Splits the source into raw spans. Strings and comments leave the scanner
/// already classified; everything else is tagged [`TokenKind::Unknown`] and
/// handed to the classifier.
pub struct Scanner<'a> {
    chars: Peekable<CharIndices<'a>>,
    state: ScanState,
    buffer: String,
    buffer_start: usize,
    tokens: Vec<Token>,
    file: Arc<String>,
    options: LexerOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, file: Option<String>, options: LexerOptions) -> Scanner<'a> {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Scanner {
            chars: source.char_indices().peekable(),
            state: ScanState::Normal,
            buffer: String::new(),
            buffer_start: 0,
            tokens: vec![],
            file: file_name,
            options,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn scan(mut self) -> Vec<Token> {
        self.run();
        self.finish()
    }

    /// Consumes the whole input. Whatever is still pending afterwards is
    /// left for [`Scanner::finish`], and [`Scanner::state`] tells whether it
    /// is an unterminated string or comment.
    pub fn run(&mut self) {
        while let Some((pos, c)) = self.chars.next() {
            match self.state {
                ScanState::Normal => self.scan_normal(pos, c),
                ScanState::InString => self.scan_string(pos, c),
                ScanState::InLineComment => self.scan_line_comment(pos, c),
                ScanState::InBlockComment => self.scan_block_comment(pos, c),
            }
        }
    }

    fn scan_normal(&mut self, pos: usize, c: char) {
        match c {
            '/' => match self.peek() {
                Some(next @ ('/' | '*')) => {
                    self.flush(TokenKind::Unknown);
                    self.append(pos, c);
                    self.chars.next();
                    self.buffer.push(next);

                    self.state = if next == '/' {
                        ScanState::InLineComment
                    } else {
                        ScanState::InBlockComment
                    };
                }
                _ => self.split_punctuation(pos, c),
            },
            '"' => {
                self.flush(TokenKind::Unknown);
                self.append(pos, c);
                self.state = ScanState::InString;
            }
            c if c.is_whitespace() => self.flush(TokenKind::Unknown),
            // Kept inside spans so `3.14` and `#region` stay whole.
            '.' | '#' => self.append(pos, c),
            c if c.is_ascii_punctuation() => self.split_punctuation(pos, c),
            _ => self.append(pos, c),
        }
    }

    fn scan_string(&mut self, pos: usize, c: char) {
        match c {
            '"' => {
                self.append(pos, c);
                self.flush(TokenKind::StringLiteral);
                self.state = ScanState::Normal;
            }
            '\\' if self.options.escape_aware_strings => {
                self.append(pos, c);
                if let Some((next_pos, next)) = self.chars.next() {
                    self.append(next_pos, next);
                }
            }
            _ => self.append(pos, c),
        }
    }

    fn scan_line_comment(&mut self, pos: usize, c: char) {
        if c == '\n' {
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
            self.flush(TokenKind::Comment);
            self.state = ScanState::Normal;
        } else {
            self.append(pos, c);
        }
    }

    fn scan_block_comment(&mut self, pos: usize, c: char) {
        if c == '*' && self.peek() == Some('/') {
            self.append(pos, c);
            self.chars.next();
            self.buffer.push('/');
            self.flush(TokenKind::Comment);
            self.state = ScanState::Normal;
        } else {
            self.append(pos, c);
        }
    }

    /// Flushes the pending span as Unknown, whatever mode it was scanned in.
    pub fn finish(mut self) -> Vec<Token> {
        match self.state {
            ScanState::Normal => {}
            ScanState::InString => {
                debug!("unterminated string literal at byte {}", self.buffer_start)
            }
            ScanState::InLineComment => {
                debug!("line comment at byte {} runs to end of input", self.buffer_start)
            }
            ScanState::InBlockComment => {
                debug!("unterminated block comment at byte {}", self.buffer_start)
            }
        }

        self.flush(TokenKind::Unknown);
        self.tokens
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn append(&mut self, pos: usize, c: char) {
        if self.buffer.is_empty() {
            self.buffer_start = pos;
        }
        self.buffer.push(c);
    }

    fn split_punctuation(&mut self, pos: usize, c: char) {
        self.flush(TokenKind::Unknown);
        self.push(TokenKind::Unknown, c.to_string(), pos, pos + c.len_utf8());
    }

    fn flush(&mut self, kind: TokenKind) {
        if self.buffer.is_empty() {
            return;
        }

        let value = mem::take(&mut self.buffer);
        let start = self.buffer_start;
        let end = start + value.len();
        self.push(kind, value, start, end);
    }

    fn push(&mut self, kind: TokenKind, value: String, start: usize, end: usize) {
        trace!(?kind, %value, start, "flushed span");
        self.tokens
            .push(MK_TOKEN!(kind, value, MK_SPAN!(start, end, self.file)));
    }
}
