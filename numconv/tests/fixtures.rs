use numconv::{
    ErrorKind, Float, FloatFormat, Integer, Radix, format_float, format_float_into,
    format_float_into_wide, format_float_wide, format_integer, format_integer_into,
    format_integer_into_wide, format_integer_wide, parse_float, parse_float_wide, parse_integer,
    parse_integer_wide, wide_until_nul,
};

fn wide16(text: &str) -> Vec<u16> {
    text.bytes().map(u16::from).collect()
}

fn wide32(text: &str) -> Vec<u32> {
    text.bytes().map(u32::from).collect()
}

/// Formats `value` through every output path and checks each one yields `text`.
fn check_format<T: Integer>(value: T, radix: Radix, text: &str, capacity: usize) {
    let context = format!("{:?} {value:?} {radix}", T::KIND);

    assert_eq!(format_integer(value, radix).ok().as_deref(), Some(text), "{context}");
    assert_eq!(format_integer_wide(value, radix).ok(), Some(wide16(text)), "{context}");
    assert_eq!(format_integer_wide(value, radix).ok(), Some(wide32(text)), "{context}");

    let mut buf = vec![0xAAu8; capacity];
    let written = format_integer_into(value, &mut buf, radix).expect(&context);
    assert_eq!(&buf[..written], text.as_bytes(), "{context}");
    assert!(buf[written..].iter().all(|&unit| unit == 0), "{context}");

    let mut buf = vec![0xFFFFu16; capacity];
    let written = format_integer_into_wide(value, &mut buf, radix).expect(&context);
    assert_eq!(written, text.len(), "{context}");
    assert_eq!(wide_until_nul(&buf), wide16(text), "{context}");

    let mut buf = vec![0xFFFF_FFFFu32; capacity];
    let written = format_integer_into_wide(value, &mut buf, radix).expect(&context);
    assert_eq!(written, text.len(), "{context}");
    assert_eq!(wide_until_nul(&buf), wide32(text), "{context}");

    let mut small = vec![0xAAu8; text.len()];
    let err = format_integer_into(value, &mut small, radix).expect_err(&context);
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall, "{context}");
    assert!(small.iter().all(|&unit| unit == 0), "{context}");
}

/// Parses `text` from narrow and both wide forms and checks each yields `value`.
fn check_parse<T: Integer>(text: &str, radix: Radix, value: T) {
    let context = format!("{:?} '{text}' {radix}", T::KIND);

    assert_eq!(parse_integer::<T>(text, radix).ok(), Some(value), "{context}");
    assert_eq!(parse_integer_wide::<T, _>(&wide16(text), radix).ok(), Some(value), "{context}");
    assert_eq!(parse_integer_wide::<T, _>(&wide32(text), radix).ok(), Some(value), "{context}");
}

fn check_integer<T: Integer>(decimal: T, decimal_text: &str, sample: T, capacity: usize) {
    check_format(decimal, Radix::Decimal, decimal_text, capacity);
    check_format(sample, Radix::Hexadecimal, "1642", capacity);
    check_format(sample, Radix::Octal, "13102", capacity);

    check_parse(decimal_text, Radix::Decimal, decimal);
    check_parse("1642", Radix::Hexadecimal, sample);
    check_parse("0x1642", Radix::Hexadecimal, sample);
    check_parse("0X1642", Radix::Hexadecimal, sample);
    check_parse("13102", Radix::Octal, sample);
}

fn check_integer_round_trip<T: Integer>(values: &[T]) {
    for &value in values {
        for radix in [Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
            let text = format_integer(value, radix).expect("formats");
            assert_eq!(
                parse_integer::<T>(&text, radix).ok(),
                Some(value),
                "{:?} '{text}' {radix}",
                T::KIND
            );
        }
    }
}

macro_rules! integer_fixtures {
    ($($name:ident: $ty:ty = $decimal:literal, capacity $capacity:literal;)*) => {$(
        #[test]
        fn $name() {
            check_integer::<$ty>($decimal, stringify!($decimal), 5698, $capacity);
            check_integer_round_trip::<$ty>(&[0, 1, $decimal, <$ty>::MIN, <$ty>::MAX]);
        }
    )*};
}

integer_fixtures! {
    test_i16_fixtures: i16 = 1234, capacity 20;
    test_u16_fixtures: u16 = 1234, capacity 20;
    test_i32_fixtures: i32 = 12345678, capacity 20;
    test_u32_fixtures: u32 = 12345678, capacity 20;
    test_i64_fixtures: i64 = 1234567890, capacity 40;
    test_u64_fixtures: u64 = 1234567890, capacity 40;
}

#[test]
fn test_negative_integer_fixtures() {
    check_format(-1i16, Radix::Hexadecimal, "FFFF", 20);
    check_format(-5698i32, Radix::Decimal, "-5698", 20);
    check_format(i64::MIN, Radix::Octal, "1000000000000000000000", 40);

    check_parse("-5698", Radix::Decimal, -5698i32);
    check_parse("-1642", Radix::Hexadecimal, -5698i64);
    check_parse("-13102", Radix::Octal, -5698i16);
}

fn check_float<F: Float>(value: F, capacity: usize) {
    for format in [FloatFormat::General, FloatFormat::Fixed, FloatFormat::Hex] {
        let context = format!("{:?} {value:?} {format}", F::KIND);
        let text = format_float(value, format).expect(&context);

        assert_eq!(parse_float::<F>(&text, format).ok(), Some(value), "{context} '{text}'");
        assert_eq!(
            parse_float_wide::<F, _>(&wide16(&text), format).ok(),
            Some(value),
            "{context} '{text}'"
        );

        assert_eq!(format_float_wide(value, format).ok(), Some(wide32(&text)), "{context}");

        let mut buf = vec![0xAAu8; capacity];
        let written = format_float_into(value, &mut buf, format).expect(&context);
        assert_eq!(&buf[..written], text.as_bytes(), "{context}");

        let mut buf = vec![0xFFFFu16; capacity];
        let written = format_float_into_wide(value, &mut buf, format).expect(&context);
        assert_eq!(wide_until_nul(&buf[..]), wide16(&text), "{context}");
        assert_eq!(written, text.len(), "{context}");
    }
}

#[test]
fn test_float_fixtures() {
    for value in [3.14159265359f32, 0.1, -1234.5, 1e-5, 5698.0] {
        check_float(value, 40);
    }
    for value in [3.14159265359f64, 0.1, -1234.5, 1e-5, 5698.0] {
        check_float(value, 40);
    }
}

#[test]
fn test_scientific_fixture() {
    let text = format_float(3.14159265359f64, FloatFormat::Scientific).expect("formats");
    assert_eq!(text, "3.141593e+00");

    let value: f64 = parse_float(&text, FloatFormat::Scientific).expect("parses");
    assert!((value - 3.14159265359).abs() < 1e-6);

    let value: f32 = parse_float_wide(&wide32(&text), FloatFormat::Scientific).expect("parses");
    assert_eq!(value, 3.141593);
}

#[test]
fn test_float_out_of_range_fixtures() {
    for text in ["1e999", "-1e999", "1e-999"] {
        let err = parse_float::<f64>(text, FloatFormat::General).expect_err(text);
        assert_eq!(err.kind(), ErrorKind::OutOfRange, "'{text}'");
    }

    let err = parse_float::<f32>("1e39", FloatFormat::General).expect_err("f32 overflow");
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(parse_float::<f64>("1e39", FloatFormat::General).ok(), Some(1e39));
}
