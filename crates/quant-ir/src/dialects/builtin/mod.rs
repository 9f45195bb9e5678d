//! Builtin types and attributes. The builtin dialect defines no operations of its own here, so it does not need to
//! be loaded into a [`Context`](crate::Context).

pub mod attributes;
pub mod types;

pub use attributes::*;
pub use types::*;
