//! Errors surfaced by `Runner::print`.

use std::io;
use thiserror::Error;

/// Why a print call stopped.
///
/// Both variants are transparent: the message and `source()` are those of
/// the underlying I/O error, and [`PrintError::into_inner`] hands back the
/// original error untouched.
#[derive(Error, Debug)]
pub enum PrintError {
    /// A renderer failed, usually while reading the request body.
    #[error(transparent)]
    Render(io::Error),

    /// Writing a rendered line to the sink failed.
    #[error(transparent)]
    Write(io::Error),
}

impl PrintError {
    /// The I/O error as produced by the body stream or sink.
    pub fn into_inner(self) -> io::Error {
        match self {
            PrintError::Render(e) | PrintError::Write(e) => e,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            PrintError::Render(e) | PrintError::Write(e) => e.kind(),
        }
    }
}

impl From<PrintError> for io::Error {
    fn from(err: PrintError) -> Self {
        err.into_inner()
    }
}
