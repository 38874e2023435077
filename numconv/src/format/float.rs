use crate::{
    Result,
    error::error,
    sink::{FixedSink, TextSink},
    transcode::narrow_to_wide,
    types::{Float, FloatFormat, WideUnit},
};

use super::{hex_float::write_hex_float, into_wide, scientific::write_scientific};

/// Size of the intermediate buffer behind the scientific and hex formats.
const SCRATCH: usize = 40;

/// Renders `value` into `sink` using `format`.
///
/// General and fixed text is the shortest that reads back as the same value
/// and is written straight into the sink. Scientific and hex text is first
/// rendered into a bounded intermediate buffer; overflowing that buffer is a
/// formatter error.
pub fn format_float_to<F, S>(value: F, format: FloatFormat, sink: &mut S) -> Result<()>
where
    F: Float,
    S: TextSink + ?Sized,
{
    match format {
        FloatFormat::General => sink.append(ryu::Buffer::new().format(value)),
        FloatFormat::Fixed => write!(sink, "{value}"),
        FloatFormat::Scientific | FloatFormat::Hex => {
            let mut scratch = [0u8; SCRATCH];
            let mut buffer = FixedSink::new(&mut scratch);

            let rendered = if format == FloatFormat::Scientific {
                write_scientific(value.widen(), &mut buffer)
            } else {
                write_hex_float(value.widen(), &mut buffer)
            };
            if rendered.is_err() {
                tracing::debug!(%format, "intermediate float buffer overflow");
                return Err(error::Error::Formatter.into());
            }

            sink.append(buffer.as_str()?)
        }
    }
}

/// Renders `value` into a new string.
pub fn format_float<F: Float>(value: F, format: FloatFormat) -> Result<String> {
    let mut text = String::new();
    format_float_to(value, format, &mut text)?;
    Ok(text)
}

/// Renders `value` into `buf`, keeping the last slot for a NUL terminator.
///
/// Returns the number of code units written. When the text does not fit the
/// buffer is left all zero.
pub fn format_float_into<F: Float>(value: F, buf: &mut [u8], format: FloatFormat) -> Result<usize> {
    let capacity = buf.len();

    FixedSink::write_with(buf, |sink| format_float_to(value, format, sink)).inspect_err(|_| {
        tracing::debug!(kind = %F::KIND, %format, capacity, "float text does not fit");
    })
}

pub fn format_float_wide<F: Float, W: WideUnit>(value: F, format: FloatFormat) -> Result<Vec<W>> {
    let text = format_float(value, format)?;
    narrow_to_wide(text.as_bytes())
}

/// Wide counterpart of [`format_float_into`].
pub fn format_float_into_wide<F: Float, W: WideUnit>(
    value: F,
    buf: &mut [W],
    format: FloatFormat,
) -> Result<usize> {
    into_wide(buf, |narrow| format_float_into(value, narrow, format))
}
