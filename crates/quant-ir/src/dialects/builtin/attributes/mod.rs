pub mod elements;
pub mod float;
pub mod integer;

pub use elements::*;
pub use float::*;
pub use integer::*;
