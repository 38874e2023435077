mod float;
mod integer;

pub use float::{parse_float, parse_float_wide};
pub use integer::{parse_integer, parse_integer_wide};
