use crate::{
    Result,
    error::error,
    parser::{FloatLiteral, Mantissa, float_literal},
    transcode::wide_to_narrow,
    types::{Float, FloatFormat, WideUnit},
};

/// Significant hexadecimal digits that fit the 64 bit accumulator.
const HEX_DIGITS: usize = 16;

/// Parses the whole of `text` as a float of type `F` in the given `format`.
///
/// Hexadecimal text may carry a `0x`/`0X` prefix. A finite numeral that
/// overflows to infinity, or a non-zero numeral that rounds to zero, is
/// `OutOfRange`.
pub fn parse_float<F: Float>(text: impl AsRef<[u8]>, format: FloatFormat) -> Result<F> {
    let text = text.as_ref();

    let (_, FloatLiteral { negative, mantissa }) = float_literal(text, format).map_err(|_| {
        tracing::debug!(kind = %F::KIND, %format, "rejected float text");
        error::Error::InvalidFloat { format }
    })?;

    let (magnitude, nonzero): (F, bool) = match mantissa {
        Mantissa::Special(special) => return Ok(F::special(negative, special)),
        Mantissa::Decimal(digits) => {
            let value = std::str::from_utf8(digits)
                .ok()
                .and_then(|digits| digits.parse::<F>().ok())
                .ok_or(error::Error::InvalidFloat { format })?;
            let significand = digits
                .split(|&c| c == b'e' || c == b'E')
                .next()
                .unwrap_or_default();
            (value, significand.iter().any(|&c| matches!(c, b'1'..=b'9')))
        }
        Mantissa::Hex {
            integer,
            fraction,
            exponent,
        } => {
            let (significand, scale) = hex_significand(integer, fraction);
            let exponent = exponent.map(binary_exponent).unwrap_or_default();
            (F::from_scaled(significand, exponent.saturating_add(scale)), significand != 0)
        }
    };

    if magnitude.widen().is_infinite() || (nonzero && magnitude.widen() == 0.0) {
        tracing::debug!(kind = %F::KIND, %format, "float text out of range");
        return Err(error::Error::OutOfRange { kind: F::KIND }.into());
    }

    Ok(if negative { magnitude.negate() } else { magnitude })
}

/// Truncates `text` to narrow code units, then parses it like [`parse_float`].
pub fn parse_float_wide<F: Float, W: WideUnit>(text: &[W], format: FloatFormat) -> Result<F> {
    let narrow = wide_to_narrow(text)?;
    parse_float(narrow, format)
}

/// Folds the digits around the point into at most 16 significant digits and
/// the power of two they are scaled by. Dropped non-zero digits leave a sticky
/// low bit so that rounding stays correct.
fn hex_significand(integer: &[u8], fraction: &[u8]) -> (u64, i64) {
    let mut significand = 0u64;
    let mut kept = 0usize;
    let mut dropped = 0i64;

    for &c in integer.iter().chain(fraction) {
        let digit = u64::from(char::from(c).to_digit(16).unwrap_or_default());
        if kept == 0 && digit == 0 {
            continue;
        }
        if kept < HEX_DIGITS {
            significand = (significand << 4) | digit;
            kept += 1;
        } else {
            dropped += 1;
            if digit != 0 {
                significand |= 1;
            }
        }
    }

    let fraction_bits = i64::try_from(fraction.len()).unwrap_or(i64::MAX).saturating_mul(4);
    (significand, dropped.saturating_mul(4).saturating_sub(fraction_bits))
}

/// Decimal exponent digits with an optional sign, saturating on overflow.
fn binary_exponent(digits: &[u8]) -> i64 {
    let (negative, digits) = match digits {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, digits),
    };

    let magnitude = digits.iter().fold(0i64, |acc, &c| {
        acc.saturating_mul(10).saturating_add(i64::from(c - b'0'))
    });

    if negative { -magnitude } else { magnitude }
}
