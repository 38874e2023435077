//! Grammars recognising numerals in narrow text.
//!
//! The parsers here only validate and split the text; turning the pieces
//! into values (and range checking them) happens in [`crate::parse`].

mod float;
mod integer;

pub use float::{FloatLiteral, Mantissa, float_literal};
pub use integer::{IntegerLiteral, integer_literal, strip_hex_prefix};
