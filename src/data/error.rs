use std::fmt;
use std::io;

/// Result alias used by the codecs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while reading, writing or building tilt series.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Path could not be opened, or a read/write failed partway.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Malformed header or value, or input shorter than the declared count.
    #[error("parse error: {0}")]
    Parse(String),

    /// Value count does not match the sampling count.
    #[error("sampling has {expected} samples but {actual} values were given")]
    Shape { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn parse<T: fmt::Display>(msg: T) -> Self {
        Self::Parse(msg.to_string())
    }
}
