use std::borrow::Cow;

use crate::{Block, Pass, PassError};

/// Configuration of the greedy rewrite driver that is used by the [`CanonicalizerPass`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GreedyRewriteConfig {
    /// Maximum number of sweeps over the operations of a [`Block`]. Rewriting stops earlier if a sweep does not
    /// change anything.
    pub max_iterations: usize,
}

impl Default for GreedyRewriteConfig {
    fn default() -> Self {
        Self { max_iterations: 10 }
    }
}

/// [`Pass`] that canonicalizes a [`Block`] by greedily folding its operations. Each sweep visits the operations in
/// block order and, for every operation that folds to an existing value, replaces all uses of the operation result
/// with that value and erases the operation. Sweeps are repeated until one of them does not fold anything or until
/// [`GreedyRewriteConfig::max_iterations`] sweeps have run.
///
/// Operations whose results become unused are not removed unless they fold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalizerPass {
    config: GreedyRewriteConfig,
}

impl CanonicalizerPass {
    pub fn new(config: GreedyRewriteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> GreedyRewriteConfig {
        self.config
    }

    /// Canonicalizes `block` and returns `true` if rewriting converged within the configured number of sweeps.
    pub fn canonicalize(&self, block: &mut Block<'_>) -> bool {
        for iteration in 0..self.config.max_iterations {
            let mut changed = false;
            for operation in block.operations() {
                if operation.is_erased() || operation.result_count() != 1 {
                    continue;
                }
                if let Some(value) = operation.fold() {
                    if operation.replace_all_uses_with(&[value]) {
                        operation.erase();
                        changed = true;
                    }
                }
            }
            block.compact();
            if !changed {
                tracing::debug!(sweeps = iteration + 1, "canonicalization converged");
                return true;
            }
        }
        tracing::warn!(max_iterations = self.config.max_iterations, "canonicalization did not converge");
        false
    }
}

impl Pass for CanonicalizerPass {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("canonicalize")
    }

    fn run<'c>(&mut self, block: &mut Block<'c>) -> Result<(), PassError> {
        self.canonicalize(block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use crate::dialects::quant::scast;
    use crate::types::tests::parse_type;
    use crate::{Context, ContextOptions, Location, OpRef, OperationBuilder, ValueRef};

    use super::*;

    /// Builds `x -> a -> b -> c -> d -> test.sink` where every arrow is a storage cast that alternates between a
    /// quantized type and its storage type.
    fn storage_cast_chain<'c>(context: &'c Context) -> Block<'c> {
        let quantized_type = parse_type("tensor<4x!quant.uniform<i8:f32, 0.5>>");
        let storage_type = parse_type("tensor<4xi8>");
        let mut block = context.block(&[(quantized_type.clone(), Location::unknown())]);
        let mut value: ValueRef<'c> = block.argument(0).unwrap();
        for index in 0..4 {
            let output_type = if index % 2 == 0 { storage_type.clone() } else { quantized_type.clone() };
            let operation = block.append_operation(scast(value, output_type, Location::unknown()).operation());
            value = operation.result(0).unwrap();
        }
        let sink = OperationBuilder::new("test.sink", Location::unknown()).add_operand(value).build(context);
        block.append_operation(sink);
        block
    }

    #[test]
    fn test_canonicalizer_pass() {
        let context = Context::with_options(ContextOptions { allow_unregistered_operations: true });
        let mut block = storage_cast_chain(&context);
        let mut pass = CanonicalizerPass::default();
        assert_eq!(pass.config(), GreedyRewriteConfig { max_iterations: 10 });
        assert_eq!(pass.name(), "canonicalize");
        assert_eq!(pass.run(&mut block), Ok(()));
        assert_eq!(
            block.to_string(),
            indoc! {"
                ^bb0(%arg0: tensor<4x!quant.uniform<i8:f32, 5.000000e-01>>):
                  %0 = \"quant.scast\"(%arg0) : (tensor<4x!quant.uniform<i8:f32, 5.000000e-01>>) -> tensor<4xi8>
                  %1 = \"quant.scast\"(%arg0) : (tensor<4x!quant.uniform<i8:f32, 5.000000e-01>>) -> tensor<4xi8>
                  \"test.sink\"(%arg0) : (tensor<4x!quant.uniform<i8:f32, 5.000000e-01>>) -> ()
            "},
        );
        assert_eq!(block.verify(), Ok(()));
    }

    #[test]
    fn test_canonicalizer_convergence() {
        let context = Context::with_options(ContextOptions { allow_unregistered_operations: true });

        // The first sweep folds two casts, and so a single sweep is not enough to observe convergence.
        let mut block = storage_cast_chain(&context);
        assert!(!CanonicalizerPass::new(GreedyRewriteConfig { max_iterations: 1 }).canonicalize(&mut block));
        assert_eq!(block.operations().len(), 3);

        let mut block = storage_cast_chain(&context);
        assert!(CanonicalizerPass::new(GreedyRewriteConfig { max_iterations: 2 }).canonicalize(&mut block));
        assert_eq!(block.operations().len(), 3);
        assert!(CanonicalizerPass::default().canonicalize(&mut block));

        let mut block = storage_cast_chain(&context);
        assert!(!CanonicalizerPass::new(GreedyRewriteConfig { max_iterations: 0 }).canonicalize(&mut block));
        assert_eq!(block.operations().len(), 5);
    }
}
