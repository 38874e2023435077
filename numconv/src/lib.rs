//! Conversions between fixed width numbers and their text form.
//!
//! Every integer width from 16 to 64 bits and both float widths can be
//! formatted into a growable string, a caller supplied buffer or wide text,
//! and parsed back from narrow or wide text. Failures are returned as
//! [`Error`] values classified by [`ErrorKind`].

mod error;
mod format;
mod parse;
mod parser;
mod sink;
mod transcode;
mod types;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use format::{
    format_float, format_float_into, format_float_into_wide, format_float_to, format_float_wide,
    format_integer, format_integer_into, format_integer_into_wide, format_integer_to,
    format_integer_wide,
};
pub use parse::{parse_float, parse_float_wide, parse_integer, parse_integer_wide};
pub use sink::{FixedSink, TextSink};
pub use transcode::{narrow_to_wide, narrow_until_nul, wide_to_narrow, wide_until_nul};
pub use types::{Float, FloatFormat, Integer, NumericKind, Radix, Special, WideUnit};
pub use value::{
    NumericValue, format_value, format_value_into, format_value_into_wide, format_value_wide,
    parse_value, parse_value_wide,
};
