//! The host side of the benchmark: a plain element-wise loop.

pub use ops::*;
pub use sequential::*;

mod ops;
mod sequential;
