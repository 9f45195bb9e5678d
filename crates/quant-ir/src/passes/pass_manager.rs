use crate::{Block, Context, Pass, PassError};

/// Schedules a pipeline of [`Pass`]es and runs them, in the order in which they were added, on a [`Block`].
/// By default, the [`Block`] is verified after each pass and the pipeline stops at the first pass that fails or
/// that leaves the IR in an invalid state.
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/PassManagement/#pass-manager)
/// for more information.
pub struct PassManager<'c> {
    /// [`Context`] associated with this [`PassManager`].
    context: &'c Context,

    passes: Vec<Box<dyn Pass>>,
    verify_after_each_pass: bool,
}

impl<'c> PassManager<'c> {
    /// Returns a reference to the [`Context`] that is associated with this [`PassManager`].
    pub fn context(&self) -> &'c Context {
        self.context
    }

    /// Enables verification of the IR after each [`Pass`] during calls to [`PassManager::run`].
    pub fn enable_verification(&mut self) {
        self.verify_after_each_pass = true;
    }

    /// Disables verification of the IR after each [`Pass`] during calls to [`PassManager::run`].
    pub fn disable_verification(&mut self) {
        self.verify_after_each_pass = false;
    }

    /// Adds the provided [`Pass`] to the end of the pipeline of this [`PassManager`].
    pub fn add_pass<P: Pass + 'static>(&mut self, pass: P) {
        self.passes.push(Box::new(pass));
    }

    /// Returns the names of the [`Pass`]es in the pipeline of this [`PassManager`], in order.
    pub fn pass_names(&self) -> Vec<String> {
        self.passes.iter().map(|pass| pass.name().into_owned()).collect()
    }

    /// Runs all the [`Pass`]es that have been added to this [`PassManager`] on the provided [`Block`].
    pub fn run(&mut self, block: &mut Block<'c>) -> Result<(), PassError> {
        for pass in &mut self.passes {
            let span = tracing::debug_span!("pass", name = %pass.name());
            let _guard = span.enter();
            tracing::debug!("running pass");
            pass.run(block)?;
            if self.verify_after_each_pass {
                block.verify().map_err(|errors| PassError::VerificationFailed { errors })?;
            }
        }
        Ok(())
    }
}

impl Context {
    /// Creates a new [`PassManager`] with an empty pipeline and with verification enabled.
    pub fn pass_manager(&self) -> PassManager<'_> {
        PassManager { context: self, passes: Vec::new(), verify_after_each_pass: true }
    }
}
