//! # Error
//!
//! The crate-wide error type and [`Result`] alias. Exhaustion of the input
//! is not an error (the lexers report it through `Option` returns and short
//! reads), so the variants here cover only genuine stream failures.

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure that can arise while lexing an input stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying stream failed to produce bytes.
    #[error("failed to read from the input stream: {0}")]
    Io(#[from] io::Error),

    /// The stream produced bytes that do not form valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
}
