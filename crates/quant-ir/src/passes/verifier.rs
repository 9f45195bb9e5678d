use std::borrow::Cow;

use crate::{Block, Pass, PassError};

/// [`Pass`] that verifies every operation of a [`Block`]. Verification of each individual operation stops at its
/// first violated constraint, but all operations are verified and all of their failures are reported together.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifierPass;

impl Pass for VerifierPass {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("verify")
    }

    fn run<'c>(&mut self, block: &mut Block<'c>) -> Result<(), PassError> {
        block.verify().map_err(|errors| PassError::VerificationFailed { errors })
    }
}
