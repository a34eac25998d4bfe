use thiserror::Error;

#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum DateError {
    #[error("http-date out of range")]
    OutOfRange,
    #[error("bad http-date format")]
    BadFormat,
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecoderError {
    #[error("bad format: {0}")]
    BadFormat(String),
    #[error("too many header fields")]
    TooManyFields,
}
