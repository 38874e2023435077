mod cli;

use numconv::{
    FloatFormat, NumericValue, Radix, format_value, format_value_into, format_value_into_wide,
    format_value_wide, narrow_to_wide, narrow_until_nul, parse_value, parse_value_wide,
    wide_to_narrow, wide_until_nul,
};
use snafu::{ResultExt, Snafu};

use cli::{Command, Options};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not read '{value}' as {kind}"))]
    Value {
        value: String,
        kind: numconv::NumericKind,
        source: numconv::Error,
    },

    #[snafu(display("Could not format {value}"))]
    Format {
        value: NumericValue,
        source: numconv::Error,
    },

    #[snafu(display("Could not parse '{text}'"))]
    Parse { text: String, source: numconv::Error },

    #[snafu(display("Could not transcode '{text}'"))]
    Transcode { text: String, source: numconv::Error },
}

fn main() -> Result<(), Box<Error>> {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .init();

    let result = match cli.command {
        Command::Format {
            value,
            options,
            capacity,
        } => format(&value, &options, capacity),
        Command::Parse { text, options } => parse(&text, &options),
        Command::Transcode { text } => transcode(&text),
    };

    result.map_err(|err| {
        tracing::error!("{}", snafu::Report::from_error(&err));
        err.into()
    })
}

fn format(text: &str, options: &Options, capacity: Option<usize>) -> Result<(), Error> {
    let value = parse_value(text, options.kind, Radix::Decimal, FloatFormat::General)
        .context(ValueSnafu {
            value: text,
            kind: options.kind,
        })?;
    tracing::debug!(%value, radix = %options.radix, format = %options.format, "formatting");

    let narrow = match (capacity, options.wide) {
        (None, false) => format_value(value, options.radix, options.format)
            .map(String::into_bytes),
        (None, true) => format_value_wide::<u32>(value, options.radix, options.format)
            .and_then(|wide| wide_to_narrow(&wide)),
        (Some(capacity), false) => {
            let mut buf = vec![0u8; capacity];
            format_value_into(value, &mut buf, options.radix, options.format)
                .map(|_| narrow_until_nul(&buf).to_vec())
        }
        (Some(capacity), true) => {
            let mut buf = vec![0u32; capacity];
            format_value_into_wide(value, &mut buf, options.radix, options.format)
                .and_then(|_| wide_to_narrow(wide_until_nul(&buf)))
        }
    }
    .context(FormatSnafu { value })?;

    println!("{}", String::from_utf8_lossy(&narrow));
    Ok(())
}

fn parse(text: &str, options: &Options) -> Result<(), Error> {
    let value = if options.wide {
        narrow_to_wide::<u32>(text.as_bytes()).and_then(|wide| {
            parse_value_wide(&wide, options.kind, options.radix, options.format)
        })
    } else {
        parse_value(text, options.kind, options.radix, options.format)
    }
    .context(ParseSnafu { text })?;

    println!("{value}");
    Ok(())
}

fn transcode(text: &str) -> Result<(), Error> {
    let wide = narrow_to_wide::<u32>(text.as_bytes()).context(TranscodeSnafu { text })?;
    let narrow = wide_to_narrow(&wide).context(TranscodeSnafu { text })?;

    let units: Vec<String> = wide.iter().map(|unit| format!("{unit:#06x}")).collect();
    println!("{}", String::from_utf8_lossy(&narrow));
    println!("{}", units.join(" "));
    Ok(())
}
