pub mod fraction;
pub mod integer;
pub mod numeric;

pub use fraction::{FractionOutput, convert_fraction};
pub use integer::convert_integer;
