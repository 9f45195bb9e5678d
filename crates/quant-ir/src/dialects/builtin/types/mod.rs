pub mod float;
pub mod integer;
pub mod shaped;
pub mod tensor;
pub mod vector;

pub use float::*;
pub use integer::*;
pub use shaped::*;
pub use tensor::*;
pub use vector::*;
