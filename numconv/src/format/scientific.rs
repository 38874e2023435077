use crate::{
    Result,
    sink::{FixedSink, TextSink},
};

use super::non_finite;

/// Writes `value` as `printf("%e")` does: one leading digit, six fractional
/// digits, an explicitly signed exponent of at least two digits.
pub(super) fn write_scientific<S: TextSink + ?Sized>(value: f64, sink: &mut S) -> Result<()> {
    if let Some(text) = non_finite(value) {
        return sink.append(text);
    }

    // `{:.6e}` yields `3.141593e0` / `1.000000e-7`; only the exponent needs reshaping.
    let mut scratch = [0u8; 32];
    let mut raw = FixedSink::new(&mut scratch);
    write!(raw, "{value:.6e}")?;

    let raw = raw.as_str()?;
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw, "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    write!(sink, "{mantissa}e{sign}{digits:0>2}")
}
