pub mod code_unit;
pub mod float_format;
pub mod numeric;
pub mod radix;

pub use code_unit::WideUnit;
pub use float_format::FloatFormat;
pub use numeric::{Float, Integer, NumericKind, Special};
pub use radix::Radix;
