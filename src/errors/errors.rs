use std::fmt::Display;

use thiserror::Error;

/// Failure while getting source text to the lexer. The lexer itself never
/// fails.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    source_name: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, source_name: Option<String>) -> Self {
        Error {
            internal_error: error_impl,
            source_name,
        }
    }

    pub fn get_source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NoInputProvided => "NoInputProvided",
            ErrorImpl::TooManyArguments { .. } => "TooManyArguments",
            ErrorImpl::ReadFailed { .. } => "ReadFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NoInputProvided => {
                ErrorTip::Suggestion(String::from("Please select a file to process."))
            }
            ErrorImpl::TooManyArguments { received } => ErrorTip::Suggestion(format!(
                "Expected a single file, received {} arguments",
                received
            )),
            ErrorImpl::ReadFailed { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source_name {
            Some(name) => write!(f, "{}: {}", name, self.internal_error),
            None => write!(f, "{}", self.internal_error),
        }
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
    #[error("no input provided")]
    NoInputProvided,
    #[error("too many arguments: expected 1, received {received:?}")]
    TooManyArguments { received: usize },
    #[error("failed to read: {reason}")]
    ReadFailed { reason: String },
}
