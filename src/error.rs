//! Contains the Error and Result type used by the encoder.
use std::fmt::Display;

/// The broad class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operation was attempted on a slot whose current shape cannot take
    /// it, eg appending a `String` to a list of `Int`.
    WrongValueType,
    /// The data has no NBT representation, or is too large for the format.
    Unsupported,
    /// A message raised by a `Serialize` implementation.
    Message,
    /// The destination writer failed.
    Io,
}

/// Various errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::bespoke(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            msg: format!("io error: {}", e),
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn wrong_value_type(msg: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::WrongValueType,
            msg: format!("wrong value type: {}", msg.into()),
        }
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::Unsupported,
            msg: format!("unsupported: {}", msg.into()),
        }
    }

    pub(crate) fn array_as_other() -> Error {
        Error::unsupported("expected NBT Array: use ByteArray, IntArray or LongArray types")
    }

    pub(crate) fn bespoke(msg: String) -> Error {
        Error {
            kind: ErrorKind::Message,
            msg,
        }
    }
}
