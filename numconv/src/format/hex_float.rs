use crate::{Result, sink::TextSink};

use super::non_finite;

const FRACTION_BITS: u32 = 52;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;
const EXPONENT_BIAS: i64 = 1023;

/// Writes `value` as `printf("%a")` does.
///
/// Normal numbers are `0x1.<fraction>p<exp>`, subnormals `0x0.<fraction>p-1022`,
/// zero `0x0p+0`. The fraction is lowercase with trailing zeros dropped and the
/// point omitted when nothing is left.
pub(super) fn write_hex_float<S: TextSink + ?Sized>(value: f64, sink: &mut S) -> Result<()> {
    if let Some(text) = non_finite(value) {
        return sink.append(text);
    }

    let bits = value.to_bits();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let biased = ((bits >> FRACTION_BITS) & 0x7FF) as i64;
    let fraction = bits & FRACTION_MASK;

    if biased == 0 && fraction == 0 {
        return write!(sink, "{sign}0x0p+0");
    }

    let (lead, exponent) = if biased == 0 {
        (0, 1 - EXPONENT_BIAS)
    } else {
        (1, biased - EXPONENT_BIAS)
    };

    let mut digits = fraction;
    let mut width = (FRACTION_BITS / 4) as usize;
    while width > 0 && digits & 0xF == 0 {
        digits >>= 4;
        width -= 1;
    }

    write!(sink, "{sign}0x{lead}")?;
    if width > 0 {
        write!(sink, ".{digits:0width$x}")?;
    }

    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    write!(sink, "p{exponent_sign}{}", exponent.unsigned_abs())
}
