use crate::{OperationRef, ValueRef, VerificationErrorKind};

/// [`Dialect`]s are the mechanism by which the IR is extended with new operations. Each dialect has a unique
/// namespace that prefixes the names of its operations (e.g., the `quant` dialect defines `quant.scast`), and it is
/// responsible for verifying and folding the operations it defines. Dialects are loaded into a
/// [`Context`](crate::Context) using [`Context::load_dialect`](crate::Context::load_dialect).
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/LangRef/#dialects) for more information.
pub trait Dialect {
    /// Returns the namespace of this [`Dialect`] (e.g., `"quant"`).
    fn namespace(&self) -> &'static str;

    /// Returns the full names of all operations that this [`Dialect`] defines (e.g., `"quant.scast"`).
    fn operation_names(&self) -> &'static [&'static str];

    /// Returns `true` if this [`Dialect`] defines an operation with the provided full name.
    fn defines_operation(&self, name: &str) -> bool {
        self.operation_names().contains(&name)
    }

    /// Verifies the provided operation, which is guaranteed to be one of the operations that this [`Dialect`]
    /// defines. Verification is fail-fast: the first violated constraint is returned.
    fn verify_operation<'c>(&self, operation: OperationRef<'c>) -> Result<(), VerificationErrorKind>;

    /// Attempts to fold the provided operation into an existing value. Returns [`None`] if the operation cannot be
    /// folded, which is not an error.
    fn fold_operation<'c>(&self, operation: OperationRef<'c>) -> Option<ValueRef<'c>> {
        let _ = operation;
        None
    }
}
