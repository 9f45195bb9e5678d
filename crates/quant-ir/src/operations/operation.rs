use std::fmt::Debug;

use crate::{Attribute, Context, Location, Type, ValueRef, VerificationError, VerificationErrorKind};

/// Typed handle for a specific kind of operation (e.g., [`SCastOperation`](crate::dialects::quant::SCastOperation)).
/// Typed handles are obtained from generic [`OperationRef`]s using [`OperationRef::cast`], which checks the name of
/// the underlying operation.
pub trait OpRef<'c>: Copy {
    /// Full name of the operations that this handle type refers to (e.g., `"quant.scast"`).
    const NAME: &'static str;

    /// Wraps `operation` without checking its name. Prefer [`OperationRef::cast`].
    fn from_operation_unchecked(operation: OperationRef<'c>) -> Self;

    /// Returns the underlying generic [`OperationRef`].
    fn operation(&self) -> OperationRef<'c>;
}

/// Reference to an operation that is owned by a [`Context`]. Operations are identified by their name (e.g.,
/// `quant.stats`), which is prefixed by the namespace of the [`Dialect`](crate::Dialect) that defines them. They
/// have an ordered list of operands, an ordered list of results, and a dictionary of named [`Attribute`]s.
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/LangRef/#operations) for more information.
#[derive(Copy, Clone)]
pub struct OperationRef<'c> {
    index: usize,
    context: &'c Context,
}

impl<'c> OperationRef<'c> {
    pub(crate) fn new(index: usize, context: &'c Context) -> Self {
        Self { index, context }
    }

    /// Returns a reference to the [`Context`] that owns this operation.
    pub fn context(&self) -> &'c Context {
        self.context
    }

    /// Returns the full name of this operation (e.g., `"quant.scast"`).
    pub fn name(&self) -> String {
        self.context.storage().operations[self.index].name.clone()
    }

    /// Returns the namespace of the [`Dialect`](crate::Dialect) that this operation belongs to (i.e., the prefix of
    /// its name up to the first `.`). Operations whose name has no `.` have an empty namespace.
    pub fn dialect_namespace(&self) -> String {
        let name = self.name();
        name.split_once('.').map(|(namespace, _)| namespace.to_string()).unwrap_or_default()
    }

    pub fn location(&self) -> Location {
        self.context.storage().operations[self.index].location.clone()
    }

    pub fn is_erased(&self) -> bool {
        self.context.storage().operations[self.index].erased
    }

    pub fn operand_count(&self) -> usize {
        self.context.storage().operations[self.index].operands.len()
    }

    /// Returns the `index`-th operand of this operation, or [`None`] if `index` is out of bounds.
    pub fn operand(&self, index: usize) -> Option<ValueRef<'c>> {
        let operand = self.context.storage().operations[self.index].operands.get(index).copied();
        operand.map(|operand| ValueRef::new(operand, self.context))
    }

    pub fn operands(&self) -> Vec<ValueRef<'c>> {
        let storage = self.context.storage();
        storage.operations[self.index].operands.iter().map(|operand| ValueRef::new(*operand, self.context)).collect()
    }

    pub fn operand_types(&self) -> Vec<Type> {
        let storage = self.context.storage();
        let operands = &storage.operations[self.index].operands;
        operands.iter().map(|operand| storage.values[*operand].r#type.clone()).collect()
    }

    pub fn result_count(&self) -> usize {
        self.context.storage().operations[self.index].results.len()
    }

    /// Returns the `index`-th result of this operation, or [`None`] if `index` is out of bounds.
    pub fn result(&self, index: usize) -> Option<ValueRef<'c>> {
        let result = self.context.storage().operations[self.index].results.get(index).copied();
        result.map(|result| ValueRef::new(result, self.context))
    }

    pub fn results(&self) -> Vec<ValueRef<'c>> {
        let storage = self.context.storage();
        storage.operations[self.index].results.iter().map(|result| ValueRef::new(*result, self.context)).collect()
    }

    pub fn result_types(&self) -> Vec<Type> {
        let storage = self.context.storage();
        let results = &storage.operations[self.index].results;
        results.iter().map(|result| storage.values[*result].r#type.clone()).collect()
    }

    /// Returns the attribute of this operation with the provided name, if there is one.
    pub fn attribute(&self, name: &str) -> Option<Attribute> {
        self.context.storage().operations[self.index].attributes.get(name).cloned()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.context.storage().operations[self.index].attributes.contains_key(name)
    }

    /// Returns all attributes of this operation, sorted by name.
    pub fn attributes(&self) -> Vec<(String, Attribute)> {
        let storage = self.context.storage();
        storage.operations[self.index].attributes.iter().map(|(name, value)| (name.clone(), value.clone())).collect()
    }

    /// Sets the attribute of this operation with the provided name, replacing any existing value.
    pub fn set_attribute<N: Into<String>, A: Into<Attribute>>(&self, name: N, attribute: A) {
        self.context.storage_mut().operations[self.index].attributes.insert(name.into(), attribute.into());
    }

    /// Removes the attribute of this operation with the provided name and returns it, if it exists.
    pub fn remove_attribute(&self, name: &str) -> Option<Attribute> {
        self.context.storage_mut().operations[self.index].attributes.remove(name)
    }

    /// Returns `true` if this operation has the name of operations of type `T`.
    pub fn is<T: OpRef<'c>>(&self) -> bool {
        self.context.storage().operations[self.index].name == T::NAME
    }

    /// Tries to cast this operation to a typed handle of type `T`. Returns [`None`] if this operation does not
    /// have the name of operations of type `T`.
    pub fn cast<T: OpRef<'c>>(&self) -> Option<T> {
        self.is::<T>().then(|| T::from_operation_unchecked(*self))
    }

    /// Verifies this operation using the [`Dialect`](crate::Dialect) that defines it. Verification is fail-fast and
    /// returns the first violated constraint. Failures are also emitted as error [`Diagnostic`](crate::Diagnostic)s
    /// at the location of this operation.
    pub fn verify(&self) -> Result<(), VerificationError> {
        let name = self.name();
        tracing::trace!(operation = %name, "verifying operation");
        let result = match self.context.dialect(&self.dialect_namespace()) {
            Some(dialect) if dialect.defines_operation(&name) => dialect.verify_operation(*self),
            _ if self.context.allows_unregistered_operations() => Ok(()),
            _ => Err(VerificationErrorKind::UnregisteredOperation),
        };
        result.map_err(|kind| {
            let error = VerificationError { operation_name: name, location: self.location(), kind };
            self.context.emit_error(error.location.clone(), error.to_string());
            error
        })
    }

    /// Attempts to fold this operation into an existing value using the [`Dialect`](crate::Dialect) that defines it.
    /// Returns [`None`] if the operation cannot be folded. Folding does not modify the IR.
    pub fn fold(&self) -> Option<ValueRef<'c>> {
        let name = self.name();
        let dialect =
            self.context.dialect(&self.dialect_namespace()).filter(|dialect| dialect.defines_operation(&name))?;
        let folded = dialect.fold_operation(*self);
        if folded.is_some() {
            tracing::debug!(operation = %name, "folded operation");
        }
        folded
    }

    /// Replaces all uses of the results of this operation with the provided values, in order. Returns `false`
    /// without modifying anything if the number of values does not match the number of results.
    pub fn replace_all_uses_with(&self, values: &[ValueRef<'c>]) -> bool {
        let results = self.results();
        if results.len() != values.len() {
            return false;
        }
        results.iter().zip(values).for_each(|(result, value)| result.replace_all_uses_with(*value));
        true
    }

    /// Erases this operation. Erased operations are skipped by [`Block`](crate::Block)s and by use lists. Any
    /// remaining uses of the results of an erased operation are left dangling, and so uses should be replaced first.
    pub fn erase(&self) {
        self.context.storage_mut().operations[self.index].erased = true;
    }
}

impl PartialEq for OperationRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.context, other.context)
    }
}

impl Eq for OperationRef<'_> {}

impl Debug for OperationRef<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "OperationRef[{}: {}]", self.index, self.name())
    }
}
