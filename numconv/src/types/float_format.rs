use std::{fmt, str::FromStr};

use crate::error::{Error, Result, error};

/// Notation used when a floating point value is rendered or read back.
///
/// - `General` and `Fixed` produce the shortest text that round-trips to the
///   same binary value; `General` switches to exponent form for very large
///   or very small magnitudes, `Fixed` never does.
/// - `Scientific` is `d.dddddde±dd`.
/// - `Hex` is a hexadecimal floating literal, `0x1.8p+1`.
///
/// When parsing, the format selects the accepted grammar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatFormat {
    #[default]
    General,
    Fixed,
    Scientific,
    Hex,
}

impl FloatFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatFormat::General => "general",
            FloatFormat::Fixed => "fixed",
            FloatFormat::Scientific => "scientific",
            FloatFormat::Hex => "hex",
        }
    }
}

impl FromStr for FloatFormat {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        match source.to_ascii_lowercase().as_str() {
            "general" | "g" => Ok(FloatFormat::General),
            "fixed" | "f" => Ok(FloatFormat::Fixed),
            "scientific" | "e" => Ok(FloatFormat::Scientific),
            "hex" | "a" => Ok(FloatFormat::Hex),
            _ => Err(error::Error::UnknownFormat {
                name: source.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
