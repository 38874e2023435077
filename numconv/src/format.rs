mod float;
mod hex_float;
mod integer;
mod scientific;

pub use float::{
    format_float, format_float_into, format_float_into_wide, format_float_to, format_float_wide,
};
pub use integer::{
    format_integer, format_integer_into, format_integer_into_wide, format_integer_to,
    format_integer_wide,
};

use crate::{Result, transcode::widen_into, types::WideUnit};

/// Fills a wide caller buffer by formatting into a narrow buffer of the same
/// capacity and widening the result.
///
/// The wide buffer is zeroed first and stays zeroed when `format` fails.
fn into_wide<W, F>(wide: &mut [W], format: F) -> Result<usize>
where
    W: WideUnit,
    F: FnOnce(&mut [u8]) -> Result<usize>,
{
    wide.fill(W::NUL);

    let mut narrow = Vec::new();
    narrow.try_reserve_exact(wide.len())?;
    narrow.resize(wide.len(), 0);

    let written = format(&mut narrow)?;
    widen_into(&narrow, wide);

    Ok(written)
}

/// Text printed by the `printf` style modes for infinities and NaN.
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}
