use std::collections::TryReserveError;

use snafu::Snafu;

use crate::types::{FloatFormat, NumericKind, Radix};

/// Error returned by every conversion in this crate.
///
/// The concrete cause is private; callers that need to react to a specific
/// failure use [`Error::kind`].
#[derive(Debug, Snafu)]
pub struct Error(error::Error);

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Classification of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text is not a syntactically valid numeral for the requested radix or format.
    InvalidFormat,
    /// Numeral is well formed but its magnitude does not fit the target type.
    OutOfRange,
    /// Formatted text plus terminator does not fit the caller buffer.
    BufferTooSmall,
    /// A growable output could not acquire storage.
    AllocationFailure,
    /// Radix other than 8, 10 or 16.
    UnsupportedRadix,
    /// Unknown float format or numeric kind name.
    UnsupportedFormat,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use error::Error as E;

        match &self.0 {
            E::InvalidInteger { .. } | E::InvalidFloat { .. } => ErrorKind::InvalidFormat,
            E::OutOfRange { .. } => ErrorKind::OutOfRange,
            E::BufferTooSmall { .. } | E::Formatter => ErrorKind::BufferTooSmall,
            E::Allocation { .. } => ErrorKind::AllocationFailure,
            E::UnsupportedRadix { .. } | E::UnknownRadix { .. } => ErrorKind::UnsupportedRadix,
            E::UnknownFormat { .. } | E::UnknownKind { .. } => ErrorKind::UnsupportedFormat,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(source: TryReserveError) -> Self {
        error::Error::Allocation { source }.into()
    }
}

pub(crate) mod error {
    use super::*;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(crate)))]
    pub(crate) enum Error {
        #[snafu(display("Text is not a valid base {} numeral", radix.as_u32()))]
        InvalidInteger { radix: Radix },

        #[snafu(display("Text is not a valid {format} floating point numeral"))]
        InvalidFloat { format: FloatFormat },

        #[snafu(display("Value does not fit into {kind}"))]
        OutOfRange { kind: NumericKind },

        #[snafu(display("Formatted text does not fit into a buffer of {capacity} code units"))]
        BufferTooSmall { capacity: usize },

        #[snafu(display("Formatter failed to render text"))]
        Formatter,

        #[snafu(display("Failed to allocate output text"))]
        Allocation { source: TryReserveError },

        #[snafu(display("Radix {radix} is not supported"))]
        UnsupportedRadix { radix: u32 },

        #[snafu(display("Unknown radix name {name:?}"))]
        UnknownRadix { name: String },

        #[snafu(display("Unknown float format {name:?}"))]
        UnknownFormat { name: String },

        #[snafu(display("Unknown numeric type {name:?}"))]
        UnknownKind { name: String },
    }
}
