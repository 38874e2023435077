use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while},
    character::complete::{char, digit0, digit1, hex_digit0, hex_digit1, one_of},
    combinator::{eof, opt, recognize, value},
    sequence::{delimited, preceded},
};

use crate::types::{FloatFormat, Special};

/// A floating point numeral split into its parts.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FloatLiteral<'a> {
    pub negative: bool,
    pub mantissa: Mantissa<'a>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mantissa<'a> {
    /// Unsigned decimal numeral, exponent included (`12.5e-3`).
    Decimal(&'a [u8]),
    /// Hexadecimal digits around the point plus the optional signed binary
    /// exponent digits (`1.8`, `p+4` gives `b"1"`, `b"8"`, `Some(b"+4")`).
    Hex {
        integer: &'a [u8],
        fraction: &'a [u8],
        exponent: Option<&'a [u8]>,
    },
    Special(Special),
}

/// Parses a floating point numeral spanning the whole input.
///
/// `format` selects the grammar:
/// - `General`: `digits[.digits]` or `.digits`, optional `e[+-]digits`
/// - `Fixed`: the same without exponent
/// - `Scientific`: exponent required
/// - `Hex`: optional `0x`, hexadecimal digits around an optional point,
///   optional `p[+-]digits`
///
/// Every format accepts `inf`, `infinity` and `nan` in any case. The only
/// sign accepted is a leading `-`.
pub fn float_literal(input: &[u8], format: FloatFormat) -> IResult<&[u8], FloatLiteral<'_>> {
    let (input, negative) = opt(char('-')).map(|sign| sign.is_some()).parse(input)?;

    let (input, mantissa) = match special(input) {
        Ok((input, special)) => (input, Mantissa::Special(special)),
        Err(_) => match format {
            FloatFormat::General => decimal(input, true, false)?,
            FloatFormat::Fixed => decimal(input, false, false)?,
            FloatFormat::Scientific => decimal(input, true, true)?,
            FloatFormat::Hex => hexadecimal(input)?,
        },
    };
    let (input, _) = eof(input)?;

    Ok((input, FloatLiteral { negative, mantissa }))
}

fn special(input: &[u8]) -> IResult<&[u8], Special> {
    let nan_payload = delimited(
        char('('),
        take_while(|c: u8| c.is_ascii_alphanumeric() || c == b'_'),
        char(')'),
    );

    alt((
        value(
            Special::Infinity,
            alt((tag_no_case("infinity"), tag_no_case("inf"))),
        ),
        value(Special::NaN, (tag_no_case("nan"), opt(nan_payload))),
    ))
    .parse(input)
}

fn decimal(
    input: &[u8],
    allow_exponent: bool,
    require_exponent: bool,
) -> IResult<&[u8], Mantissa<'_>> {
    let digits = alt((
        recognize((digit1, opt((char('.'), digit0)))),
        recognize((char('.'), digit1)),
    ));
    let exponent = || recognize((one_of("eE"), opt(one_of("+-")), digit1));

    let (input, text) = if require_exponent {
        recognize((digits, exponent())).parse(input)?
    } else if allow_exponent {
        recognize((digits, opt(exponent()))).parse(input)?
    } else {
        recognize(digits).parse(input)?
    };

    Ok((input, Mantissa::Decimal(text)))
}

fn hexadecimal(input: &[u8]) -> IResult<&[u8], Mantissa<'_>> {
    let (input, _) = opt(tag_no_case("0x")).parse(input)?;

    let (input, (integer, fraction)) = alt((
        (hex_digit1, opt(preceded(char('.'), hex_digit0)))
            .map(|(integer, fraction)| (integer, fraction.unwrap_or_default())),
        preceded(char('.'), hex_digit1).map(|fraction| (&b""[..], fraction)),
    ))
    .parse(input)?;

    let (input, exponent) = opt(preceded(
        one_of("pP"),
        recognize((opt(one_of("+-")), digit1)),
    ))
    .parse(input)?;

    Ok((
        input,
        Mantissa::Hex {
            integer,
            fraction,
            exponent,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_literal_parser() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            format: FloatFormat,
            expected: Option<FloatLiteral<'static>>,
        }

        let decimal = |negative, text: &'static [u8]| {
            Some(FloatLiteral {
                negative,
                mantissa: Mantissa::Decimal(text),
            })
        };

        let test_cases = [
            TestCase {
                name: "general '3.14'",
                input: b"3.14",
                format: FloatFormat::General,
                expected: decimal(false, b"3.14"),
            },
            TestCase {
                name: "general with exponent '-1.5e-3'",
                input: b"-1.5e-3",
                format: FloatFormat::General,
                expected: decimal(true, b"1.5e-3"),
            },
            TestCase {
                name: "general '.5'",
                input: b".5",
                format: FloatFormat::General,
                expected: decimal(false, b".5"),
            },
            TestCase {
                name: "general '12.'",
                input: b"12.",
                format: FloatFormat::General,
                expected: decimal(false, b"12."),
            },
            TestCase {
                name: "general lone point",
                input: b".",
                format: FloatFormat::General,
                expected: None,
            },
            TestCase {
                name: "general dangling exponent '1e'",
                input: b"1e",
                format: FloatFormat::General,
                expected: None,
            },
            TestCase {
                name: "general leading plus",
                input: b"+1.0",
                format: FloatFormat::General,
                expected: None,
            },
            TestCase {
                name: "fixed rejects exponent",
                input: b"1.5e3",
                format: FloatFormat::Fixed,
                expected: None,
            },
            TestCase {
                name: "fixed '1642.25'",
                input: b"1642.25",
                format: FloatFormat::Fixed,
                expected: decimal(false, b"1642.25"),
            },
            TestCase {
                name: "scientific requires exponent",
                input: b"3.14",
                format: FloatFormat::Scientific,
                expected: None,
            },
            TestCase {
                name: "scientific '3.141593e+00'",
                input: b"3.141593e+00",
                format: FloatFormat::Scientific,
                expected: decimal(false, b"3.141593e+00"),
            },
            TestCase {
                name: "hex '0x1.8p+1'",
                input: b"0x1.8p+1",
                format: FloatFormat::Hex,
                expected: Some(FloatLiteral {
                    negative: false,
                    mantissa: Mantissa::Hex {
                        integer: b"1",
                        fraction: b"8",
                        exponent: Some(&b"+1"[..]),
                    },
                }),
            },
            TestCase {
                name: "hex without prefix '-a.bP3'",
                input: b"-a.bP3",
                format: FloatFormat::Hex,
                expected: Some(FloatLiteral {
                    negative: true,
                    mantissa: Mantissa::Hex {
                        integer: b"a",
                        fraction: b"b",
                        exponent: Some(&b"3"[..]),
                    },
                }),
            },
            TestCase {
                name: "hex '.8'",
                input: b".8",
                format: FloatFormat::Hex,
                expected: Some(FloatLiteral {
                    negative: false,
                    mantissa: Mantissa::Hex {
                        integer: b"",
                        fraction: b"8",
                        exponent: None,
                    },
                }),
            },
            TestCase {
                name: "hex prefix only",
                input: b"0x",
                format: FloatFormat::Hex,
                expected: None,
            },
            TestCase {
                name: "infinity",
                input: b"-Infinity",
                format: FloatFormat::Fixed,
                expected: Some(FloatLiteral {
                    negative: true,
                    mantissa: Mantissa::Special(Special::Infinity),
                }),
            },
            TestCase {
                name: "nan with payload",
                input: b"nan(0x7)",
                format: FloatFormat::Scientific,
                expected: Some(FloatLiteral {
                    negative: false,
                    mantissa: Mantissa::Special(Special::NaN),
                }),
            },
            TestCase {
                name: "partial infinity",
                input: b"infin",
                format: FloatFormat::General,
                expected: None,
            },
            TestCase {
                name: "empty input",
                input: b"",
                format: FloatFormat::General,
                expected: None,
            },
        ];

        for case in &test_cases {
            let result = float_literal(case.input, case.format)
                .ok()
                .map(|(_, literal)| literal);
            assert_eq!(
                result, case.expected,
                "Test '{}' failed: expected {:?}, got {:?}",
                case.name, case.expected, result
            );
        }
    }
}
