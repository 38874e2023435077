use nom::{
    IResult, Parser,
    character::complete::{char, digit1, hex_digit1, oct_digit1},
    combinator::{eof, opt},
};

use crate::types::Radix;

/// An integer numeral split into sign and digits.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct IntegerLiteral<'a> {
    pub negative: bool,
    pub digits: &'a [u8],
}

/// Skips a leading `0x` or `0X`.
///
/// Only applies to radix 16 and only when at least one character follows
/// the prefix; otherwise the input is returned untouched.
pub fn strip_hex_prefix(input: &[u8], radix: Radix) -> &[u8] {
    match input {
        [b'0', b'x' | b'X', rest @ ..] if radix == Radix::Hexadecimal && !rest.is_empty() => rest,
        _ => input,
    }
}

/// Parses an integer numeral spanning the whole input.
///
/// The accepted form is an optional `-` (only when `signed` is set) followed
/// by one or more digits of `radix`. A leading `+`, whitespace or any
/// trailing character is rejected.
pub fn integer_literal(
    input: &[u8],
    radix: Radix,
    signed: bool,
) -> IResult<&[u8], IntegerLiteral<'_>> {
    let (remaining, literal) = numeral(input, radix, signed)?;
    let (remaining, _) = eof(remaining)?;

    Ok((remaining, literal))
}

fn numeral(input: &[u8], radix: Radix, signed: bool) -> IResult<&[u8], IntegerLiteral<'_>> {
    let (input, negative) = if signed {
        opt(char('-')).map(|sign| sign.is_some()).parse(input)?
    } else {
        (input, false)
    };

    let (input, digits) = match radix {
        Radix::Octal => oct_digit1(input)?,
        Radix::Decimal => digit1(input)?,
        Radix::Hexadecimal => hex_digit1(input)?,
    };

    Ok((input, IntegerLiteral { negative, digits }))
}
