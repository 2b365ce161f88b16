use thiserror::Error;

/// Errors that can occur while parsing an engineering-notation string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("not a numeric literal: {0:?}")]
    InvalidNumber(String),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
