use std::{fmt, str::FromStr};

use crate::error::{Error, Result, error};

/// Tag identifying the width and kind of a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl NumericKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericKind::I16 => "i16",
            NumericKind::U16 => "u16",
            NumericKind::I32 => "i32",
            NumericKind::U32 => "u32",
            NumericKind::I64 => "i64",
            NumericKind::U64 => "u64",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }

    pub fn is_signed(&self) -> bool {
        !matches!(self, NumericKind::U16 | NumericKind::U32 | NumericKind::U64)
    }
}

impl FromStr for NumericKind {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        match source.to_ascii_lowercase().as_str() {
            "i16" | "int16" => Ok(NumericKind::I16),
            "u16" | "uint16" => Ok(NumericKind::U16),
            "i32" | "int32" => Ok(NumericKind::I32),
            "u32" | "uint32" => Ok(NumericKind::U32),
            "i64" | "int64" => Ok(NumericKind::I64),
            "u64" | "uint64" => Ok(NumericKind::U64),
            "f32" | "float" => Ok(NumericKind::F32),
            "f64" | "double" => Ok(NumericKind::F64),
            _ => Err(error::Error::UnknownKind {
                name: source.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Integer widths supported by the integer conversions.
///
/// Sealed; implemented for `i16`, `u16`, `i32`, `u32`, `i64` and `u64`.
pub trait Integer:
    Copy + PartialEq + fmt::Debug + fmt::Display + fmt::Octal + fmt::UpperHex + sealed::Sealed
{
    const KIND: NumericKind;
    const SIGNED: bool;

    /// Size of the intermediate buffer used to render octal and hexadecimal text.
    const SCRATCH: usize;

    /// Folds already validated digits into a value, `None` on overflow.
    ///
    /// Negative values are accumulated downwards so that `MIN` is reachable.
    fn accumulate(negative: bool, digits: &[u8], radix: u32) -> Option<Self>;

    /// Reads digits as the two's complement bit pattern of `Self`, the
    /// inverse of octal and hexadecimal formatting. `None` when the digits
    /// need more bits than the type has.
    fn from_bit_pattern(digits: &[u8], radix: u32) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty => $kind:ident, $unsigned:ty, $signed:literal, $scratch:literal;)*) => {$(
        impl sealed::Sealed for $ty {}

        impl Integer for $ty {
            const KIND: NumericKind = NumericKind::$kind;
            const SIGNED: bool = $signed;
            const SCRATCH: usize = $scratch;

            fn accumulate(negative: bool, digits: &[u8], radix: u32) -> Option<Self> {
                let base = radix as $ty;
                digits.iter().try_fold(0 as $ty, |acc, &digit| {
                    let digit = char::from(digit).to_digit(radix)? as $ty;
                    let acc = acc.checked_mul(base)?;
                    if negative {
                        acc.checked_sub(digit)
                    } else {
                        acc.checked_add(digit)
                    }
                })
            }

            fn from_bit_pattern(digits: &[u8], radix: u32) -> Option<Self> {
                <$unsigned as Integer>::accumulate(false, digits, radix).map(|bits| bits as $ty)
            }
        }
    )*};
}

impl_integer! {
    i16 => I16, u16, true, 20;
    u16 => U16, u16, false, 20;
    i32 => I32, u32, true, 20;
    u32 => U32, u32, false, 20;
    i64 => I64, u64, true, 40;
    u64 => U64, u64, false, 40;
}

/// Floating point widths supported by the float conversions.
///
/// Sealed; implemented for `f32` and `f64`.
pub trait Float:
    Copy + PartialEq + fmt::Debug + fmt::Display + FromStr + ryu::Float + sealed::Sealed
{
    const KIND: NumericKind;

    /// Lossless conversion to double precision.
    fn widen(self) -> f64;

    /// `mantissa * 2^exponent`, rounded once to nearest with ties to even,
    /// subnormal results included.
    fn from_scaled(mantissa: u64, exponent: i64) -> Self;

    /// Signed zero, infinity or NaN.
    fn special(negative: bool, special: Special) -> Self;

    fn negate(self) -> Self;
}

/// Non-numeric float literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    Infinity,
    NaN,
}

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}

impl Float for f32 {
    const KIND: NumericKind = NumericKind::F32;

    fn widen(self) -> f64 {
        f64::from(self)
    }

    fn from_scaled(mantissa: u64, exponent: i64) -> Self {
        // 23 fraction bits and a bias of 127 always fit the low 32 bits.
        f32::from_bits(scaled_bits(mantissa, exponent, 23, 127) as u32)
    }

    fn special(negative: bool, special: Special) -> Self {
        let value = match special {
            Special::Infinity => f32::INFINITY,
            Special::NaN => f32::NAN,
        };
        if negative { -value } else { value }
    }

    fn negate(self) -> Self {
        -self
    }
}

impl Float for f64 {
    const KIND: NumericKind = NumericKind::F64;

    fn widen(self) -> f64 {
        self
    }

    fn from_scaled(mantissa: u64, exponent: i64) -> Self {
        f64::from_bits(scaled_bits(mantissa, exponent, 52, 1023))
    }

    fn special(negative: bool, special: Special) -> Self {
        let value = match special {
            Special::Infinity => f64::INFINITY,
            Special::NaN => f64::NAN,
        };
        if negative { -value } else { value }
    }

    fn negate(self) -> Self {
        -self
    }
}

/// Binary exponents beyond this saturate to zero or infinity for every width.
const EXPONENT_LIMIT: i64 = 1 << 16;

/// IEEE 754 bits of `mantissa * 2^exponent` for a format with `fraction_bits`
/// stored fraction bits and exponent `bias`.
///
/// The significand is cut to the precision available at the result's
/// exponent (fewer bits for subnormals) and rounded a single time, half to
/// even. Results past the largest finite value are infinity.
fn scaled_bits(mantissa: u64, exponent: i64, fraction_bits: u32, bias: i64) -> u64 {
    if mantissa == 0 {
        return 0;
    }

    let width = i64::from(fraction_bits);
    let exponent = exponent.clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT);
    let top = i64::from(63 - mantissa.leading_zeros());
    // Exponent of the last significand bit of the smallest subnormal.
    let min_lsb = 1 - bias - width;
    let shift = (top - width).max(min_lsb - exponent);

    let mut significand = if shift <= 0 {
        mantissa << -shift
    } else if shift > 64 {
        // Below half of the smallest subnormal.
        0
    } else {
        let wide = u128::from(mantissa);
        let kept = wide >> shift;
        let rest = wide & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        let round_up = rest > half || (rest == half && kept & 1 == 1);
        (kept + u128::from(round_up)) as u64
    };
    let mut lsb = exponent + shift;

    // Rounding carried into a new leading bit.
    if significand >> (fraction_bits + 1) != 0 {
        significand >>= 1;
        lsb += 1;
    }

    let hidden = 1u64 << fraction_bits;
    if significand < hidden {
        return significand;
    }

    let biased = lsb + width + bias;
    let infinite = 2 * bias + 1;
    if biased >= infinite {
        return (infinite as u64) << fraction_bits;
    }
    ((biased as u64) << fraction_bits) | (significand - hidden)
}
