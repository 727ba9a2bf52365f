use std::fmt::Display;

use thiserror::Error;

/// Failure of one of the I/O collaborators around the tokenizer.
///
/// Tokenization itself is total, so nothing in the lexer produces this type.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InputUnavailable { .. } => "InputUnavailable",
            ErrorImpl::OutputFailed { .. } => "OutputFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InputUnavailable { path, reason } => ErrorTip::Suggestion(format!(
                "Could not read `{}`: {}, does the file exist?",
                path, reason
            )),
            ErrorImpl::OutputFailed { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("input unavailable: {path:?} ({reason})")]
    InputUnavailable { path: String, reason: String },
    #[error("failed to write token listing: {reason}")]
    OutputFailed { reason: String },
}
