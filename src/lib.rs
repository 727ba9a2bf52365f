#![allow(clippy::module_inception)]

use std::{fs, path::Path, sync::Arc};

use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl};

pub mod display;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Reads a whole source file into memory.
///
/// Any failure is reported as [`ErrorImpl::InputUnavailable`]; tokenizing the
/// returned text can never fail.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorImpl::InputUnavailable {
            path: path.to_string_lossy().into_owned(),
            reason: e.to_string(),
        })
    })?;

    debug!("read {} bytes from {:?}", content.len(), path);
    Ok(content)
}

/// Finds the line holding the byte at `position`.
///
/// Returns the 1-based line number, the line text (terminator included) and the
/// 0-based byte column within that line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}
