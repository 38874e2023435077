//! Conversions for values whose type is only known at run time.

use std::fmt;

use crate::{
    Result,
    format::{
        format_float, format_float_into, format_float_into_wide, format_float_wide, format_integer,
        format_integer_into, format_integer_into_wide, format_integer_wide,
    },
    parse::{parse_float, parse_integer},
    transcode::wide_to_narrow,
    types::{FloatFormat, NumericKind, Radix, WideUnit},
};

/// A number of any supported width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

macro_rules! dispatch {
    ($value:expr, $int:ident => $on_int:expr, $float:ident => $on_float:expr $(,)?) => {
        match $value {
            NumericValue::I16($int) => $on_int,
            NumericValue::U16($int) => $on_int,
            NumericValue::I32($int) => $on_int,
            NumericValue::U32($int) => $on_int,
            NumericValue::I64($int) => $on_int,
            NumericValue::U64($int) => $on_int,
            NumericValue::F32($float) => $on_float,
            NumericValue::F64($float) => $on_float,
        }
    };
}

impl NumericValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericValue::I16(_) => NumericKind::I16,
            NumericValue::U16(_) => NumericKind::U16,
            NumericValue::I32(_) => NumericKind::I32,
            NumericValue::U32(_) => NumericKind::U32,
            NumericValue::I64(_) => NumericKind::I64,
            NumericValue::U64(_) => NumericKind::U64,
            NumericValue::F32(_) => NumericKind::F32,
            NumericValue::F64(_) => NumericKind::F64,
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(
            *self,
            value => fmt::Display::fmt(&value, f),
            value => fmt::Display::fmt(&value, f),
        )
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for NumericValue {
            fn from(value: $ty) -> Self {
                NumericValue::$variant(value)
            }
        }
    )*};
}

impl_from! {
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

/// Formats `value`; integers use `radix`, floats use `format`.
pub fn format_value(value: NumericValue, radix: Radix, format: FloatFormat) -> Result<String> {
    dispatch!(
        value,
        int => format_integer(int, radix),
        float => format_float(float, format),
    )
}

/// Fixed buffer counterpart of [`format_value`].
pub fn format_value_into(
    value: NumericValue,
    buf: &mut [u8],
    radix: Radix,
    format: FloatFormat,
) -> Result<usize> {
    dispatch!(
        value,
        int => format_integer_into(int, buf, radix),
        float => format_float_into(float, buf, format),
    )
}

pub fn format_value_wide<W: WideUnit>(
    value: NumericValue,
    radix: Radix,
    format: FloatFormat,
) -> Result<Vec<W>> {
    dispatch!(
        value,
        int => format_integer_wide(int, radix),
        float => format_float_wide(float, format),
    )
}

pub fn format_value_into_wide<W: WideUnit>(
    value: NumericValue,
    buf: &mut [W],
    radix: Radix,
    format: FloatFormat,
) -> Result<usize> {
    dispatch!(
        value,
        int => format_integer_into_wide(int, buf, radix),
        float => format_float_into_wide(float, buf, format),
    )
}

/// Parses `text` as a value of `kind`.
///
/// `radix` applies to integer kinds and `format` to float kinds; the other
/// one is ignored.
pub fn parse_value(
    text: impl AsRef<[u8]>,
    kind: NumericKind,
    radix: Radix,
    format: FloatFormat,
) -> Result<NumericValue> {
    let text = text.as_ref();

    let value = match kind {
        NumericKind::I16 => NumericValue::I16(parse_integer(text, radix)?),
        NumericKind::U16 => NumericValue::U16(parse_integer(text, radix)?),
        NumericKind::I32 => NumericValue::I32(parse_integer(text, radix)?),
        NumericKind::U32 => NumericValue::U32(parse_integer(text, radix)?),
        NumericKind::I64 => NumericValue::I64(parse_integer(text, radix)?),
        NumericKind::U64 => NumericValue::U64(parse_integer(text, radix)?),
        NumericKind::F32 => NumericValue::F32(parse_float(text, format)?),
        NumericKind::F64 => NumericValue::F64(parse_float(text, format)?),
    };

    Ok(value)
}

pub fn parse_value_wide<W: WideUnit>(
    text: &[W],
    kind: NumericKind,
    radix: Radix,
    format: FloatFormat,
) -> Result<NumericValue> {
    let narrow = wide_to_narrow(text)?;
    parse_value(narrow, kind, radix, format)
}
