//! Error types

use ievio_codes::{EventType, ParseError};
use std::fmt;
use std::io::{Error as IOError, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("record length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Which of the textual inputs of an encode failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    EventType,
    Code,
    Value,
}
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Field::EventType => "event type",
            Field::Code => "code",
            Field::Value => "value",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid {field}: {source}")]
    InvalidNumber {
        field: Field,
        #[source]
        source: ParseError,
    },
    #[error("{0} defines no codes; cannot encode a record for it")]
    UnsupportedEventType(EventType),
    #[error("{event_type} record cannot carry a code of {code_type}")]
    CodeTypeMismatch { event_type: EventType, code_type: EventType },
    #[error("record buffer length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
impl EncodeError {
    pub(crate) fn field(field: Field) -> impl FnOnce(ParseError) -> Self {
        move |source| EncodeError::InvalidNumber { field, source }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("device I/O: {0}")]
    Io(#[from] IOError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for IOError {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(e) => e,
            Error::Decode(e) => IOError::new(ErrorKind::InvalidData, e),
            Error::Encode(e) => IOError::new(ErrorKind::InvalidInput, e),
        }
    }
}
