//! Error type for monitor operations.

use std::fmt;
use std::io;

/// Errors raised by monitor creation and interest mutation.
///
/// Every variant is reported synchronously to the caller of the
/// offending operation; nothing is retried or recovered internally.
/// Readiness queries and `close` never produce one.
#[derive(Debug)]
pub enum Error {
    /// A symbolic interest value other than `"r"`, `"w"`, or `"rw"`
    /// was supplied. Carries the rejected symbol.
    InvalidInterest(String),

    /// An interest mutation targeted a monitor that has already been
    /// closed.
    Closed,

    /// The handle given at creation did not yield a usable
    /// descriptor (closed or invalid).
    Descriptor(io::Error),

    /// An interest mask outside the four legal combinations was
    /// computed. This is a logic defect in the crate, not a caller
    /// error; it should be unreachable.
    InterestOutOfRange(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInterest(value) => {
                write!(f, "invalid interest symbol: {value:?} (expected \"r\", \"w\", or \"rw\")")
            }
            Error::Closed => write!(f, "monitor is closed"),
            Error::Descriptor(err) => write!(f, "handle did not yield a usable descriptor: {err}"),
            Error::InterestOutOfRange(bits) => {
                write!(f, "computed interest mask {bits:#04b} is out of range")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Descriptor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::InvalidInterest(_) => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::Closed => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            Error::Descriptor(inner) => inner,
            Error::InterestOutOfRange(_) => io::Error::other(err),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
