use clap::{ArgAction, Args, Parser, Subcommand};
use numconv::{FloatFormat, NumericKind, Radix};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Raise the log level, repeat for more detail
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format a decimal value
    Format {
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        options: Options,

        /// Format into a fixed buffer of this many code units
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Parse text into a value
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[command(flatten)]
        options: Options,
    },
    /// Round trip text through wide code units
    Transcode { text: String },
}

#[derive(Args)]
pub struct Options {
    /// Numeric type, e.g. i16, u64 or f32
    #[arg(short = 't', long = "type")]
    pub kind: NumericKind,

    /// Integer radix: 8, 10 or 16
    #[arg(short, long, default_value_t = Radix::Decimal)]
    pub radix: Radix,

    /// Float format: general, fixed, scientific or hex
    #[arg(short, long, default_value_t = FloatFormat::General)]
    pub format: FloatFormat,

    /// Go through wide (32 bit) text
    #[arg(short, long)]
    pub wide: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::ERROR,
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            3 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
