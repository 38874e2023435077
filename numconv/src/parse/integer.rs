use snafu::OptionExt;

use crate::{
    Result,
    error::error,
    parser::{integer_literal, strip_hex_prefix},
    transcode::wide_to_narrow,
    types::{Integer, Radix, WideUnit},
};

/// Parses the whole of `text` as an integer of type `T`.
///
/// With radix 16 a leading `0x`/`0X` is skipped when something follows it.
/// Octal and hexadecimal numerals without a sign that exceed a signed
/// target's range are read as its bit pattern, so `FFFF` is `-1i16`.
/// Empty text, stray characters and a sign on an unsigned target are
/// `InvalidFormat`; a numeral outside the range (or bit width) of `T` is
/// `OutOfRange`.
pub fn parse_integer<T: Integer>(text: impl AsRef<[u8]>, radix: Radix) -> Result<T> {
    let text = strip_hex_prefix(text.as_ref(), radix);

    let (_, literal) = integer_literal(text, radix, T::SIGNED).map_err(|_| {
        tracing::debug!(kind = %T::KIND, %radix, "rejected integer text");
        error::Error::InvalidInteger { radix }
    })?;

    let value = match T::accumulate(literal.negative, literal.digits, radix.as_u32()) {
        None if radix != Radix::Decimal && !literal.negative => {
            T::from_bit_pattern(literal.digits, radix.as_u32())
        }
        value => value,
    }
    .context(error::OutOfRangeSnafu { kind: T::KIND })?;

    Ok(value)
}

/// Truncates `text` to narrow code units, then parses it like [`parse_integer`].
pub fn parse_integer_wide<T: Integer, W: WideUnit>(text: &[W], radix: Radix) -> Result<T> {
    let narrow = wide_to_narrow(text)?;
    parse_integer(narrow, radix)
}
