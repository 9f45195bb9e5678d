pub mod canonicalizer;
pub mod pass;
pub mod pass_manager;
pub mod verifier;

pub use canonicalizer::*;
pub use pass::*;
pub use pass_manager::*;
pub use verifier::*;
