use std::{fmt, str::FromStr};

use crate::error::{Error, Result, error};

/// Numeral base accepted by the integer conversions.
///
/// Only octal, decimal and hexadecimal are supported; any other base is
/// rejected when the radix is built from a raw number or a name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Octal = 8,
    #[default]
    Decimal = 10,
    Hexadecimal = 16,
}

impl Radix {
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(radix: u32) -> Result<Self> {
        match radix {
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            _ => Err(error::Error::UnsupportedRadix { radix }.into()),
        }
    }
}

impl FromStr for Radix {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        match source.to_ascii_lowercase().as_str() {
            "8" | "oct" | "octal" => Ok(Radix::Octal),
            "10" | "dec" | "decimal" => Ok(Radix::Decimal),
            "16" | "hex" | "hexadecimal" => Ok(Radix::Hexadecimal),
            other => match other.parse::<u32>() {
                Ok(radix) => Radix::try_from(radix),
                Err(_) => Err(error::Error::UnknownRadix {
                    name: source.to_string(),
                }
                .into()),
            },
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}
