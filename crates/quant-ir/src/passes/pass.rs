use std::borrow::Cow;

use crate::{Block, OperationRef, PassError};

/// Passes represent the basic infrastructure for transformation and verification of the IR. Each pass runs on a
/// [`Block`] and may modify the operations it contains. Passes are scheduled using a
/// [`PassManager`](crate::PassManager).
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/PassManagement) for more information.
pub trait Pass {
    /// Returns the name of this [`Pass`].
    fn name(&self) -> Cow<'_, str>;

    /// Runs this [`Pass`] on the provided [`Block`].
    fn run<'c>(&mut self, block: &mut Block<'c>) -> Result<(), PassError>;
}

/// [`Pass`] that wraps a Rust closure which is invoked on every operation of the [`Block`] that the pass is run on,
/// in block order. The pass fails on the first operation for which the closure returns an error message.
#[derive(Clone)]
pub struct ClosurePass<F: FnMut(OperationRef<'_>) -> Result<(), String>> {
    /// Name of this [`ClosurePass`].
    pub name: String,

    /// Closure that implements the logic of this [`ClosurePass`].
    pub closure: F,
}

impl<F: FnMut(OperationRef<'_>) -> Result<(), String>> Pass for ClosurePass<F> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn run<'c>(&mut self, block: &mut Block<'c>) -> Result<(), PassError> {
        for operation in block.operations() {
            (self.closure)(operation)
                .map_err(|message| PassError::PassFailed { pass_name: self.name.clone(), message })?;
        }
        Ok(())
    }
}
