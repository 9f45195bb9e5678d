pub mod builtin;
pub mod dialect;
pub mod quant;

pub use dialect::*;
