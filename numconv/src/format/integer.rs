use crate::{
    Result,
    sink::{FixedSink, TextSink},
    transcode::narrow_to_wide,
    types::{Integer, Radix, WideUnit},
};

use super::into_wide;

/// Largest intermediate buffer any integer width asks for.
const MAX_SCRATCH: usize = 40;

/// Renders `value` into `sink`.
///
/// Decimal text carries a `-` for negative signed values. Octal and
/// hexadecimal text is the value's two's complement bit pattern at its own
/// width, in uppercase, without sign or prefix: `-1i16` is `FFFF`.
pub fn format_integer_to<T, S>(value: T, radix: Radix, sink: &mut S) -> Result<()>
where
    T: Integer,
    S: TextSink + ?Sized,
{
    if radix == Radix::Decimal {
        return write!(sink, "{value}");
    }

    let mut scratch = [0u8; MAX_SCRATCH];
    let mut digits = FixedSink::new(&mut scratch[..T::SCRATCH]);
    match radix {
        Radix::Octal => write!(digits, "{value:o}")?,
        _ => write!(digits, "{value:X}")?,
    }

    sink.append(digits.as_str()?)
}

/// Renders `value` into a new string.
pub fn format_integer<T: Integer>(value: T, radix: Radix) -> Result<String> {
    let mut text = String::new();
    format_integer_to(value, radix, &mut text)?;
    Ok(text)
}

/// Renders `value` into `buf`, keeping the last slot for a NUL terminator.
///
/// Returns the number of code units written. When the text does not fit the
/// buffer is left all zero.
pub fn format_integer_into<T: Integer>(value: T, buf: &mut [u8], radix: Radix) -> Result<usize> {
    let capacity = buf.len();

    FixedSink::write_with(buf, |sink| format_integer_to(value, radix, sink)).inspect_err(|_| {
        tracing::debug!(kind = %T::KIND, %radix, capacity, "integer text does not fit");
    })
}

pub fn format_integer_wide<T: Integer, W: WideUnit>(value: T, radix: Radix) -> Result<Vec<W>> {
    let text = format_integer(value, radix)?;
    narrow_to_wide(text.as_bytes())
}

/// Wide counterpart of [`format_integer_into`].
pub fn format_integer_into_wide<T: Integer, W: WideUnit>(
    value: T,
    buf: &mut [W],
    radix: Radix,
) -> Result<usize> {
    into_wide(buf, |narrow| format_integer_into(value, narrow, radix))
}
