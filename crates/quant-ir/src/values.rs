use std::fmt::Debug;

use crate::context::ValueDefinition;
use crate::{Context, Location, OperationRef, Type};

/// Reference to a value that is owned by a [`Context`]. Values are either block arguments (created using
/// [`Context::block`]) or operation results (created by [`OperationBuilder::build`](crate::OperationBuilder::build)).
/// Every value has a [`Type`] that never changes after the value is created.
#[derive(Copy, Clone)]
pub struct ValueRef<'c> {
    index: usize,
    context: &'c Context,
}

impl<'c> ValueRef<'c> {
    pub(crate) fn new(index: usize, context: &'c Context) -> Self {
        Self { index, context }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// Returns a reference to the [`Context`] that owns this value.
    pub fn context(&self) -> &'c Context {
        self.context
    }

    /// Returns the [`Type`] of this value.
    pub fn r#type(&self) -> Type {
        self.context.storage().values[self.index].r#type.clone()
    }

    /// Returns the [`Location`] at which this value was defined.
    pub fn location(&self) -> Location {
        self.context.storage().values[self.index].location.clone()
    }

    /// Returns the operation that produces this value, or [`None`] if this value is a block argument.
    pub fn defining_operation(&self) -> Option<OperationRef<'c>> {
        match self.context.storage().values[self.index].definition {
            ValueDefinition::OperationResult { operation, .. } => Some(OperationRef::new(operation, self.context)),
            ValueDefinition::BlockArgument { .. } => None,
        }
    }

    /// Returns the position of this value in the argument list of its block, if it is a block argument.
    pub fn argument_index(&self) -> Option<usize> {
        match self.context.storage().values[self.index].definition {
            ValueDefinition::BlockArgument { index } => Some(index),
            ValueDefinition::OperationResult { .. } => None,
        }
    }

    /// Returns the position of this value in the result list of its defining operation, if it is an operation result.
    pub fn result_index(&self) -> Option<usize> {
        match self.context.storage().values[self.index].definition {
            ValueDefinition::OperationResult { index, .. } => Some(index),
            ValueDefinition::BlockArgument { .. } => None,
        }
    }

    /// Returns all uses of this value as `(operation, operand index)` pairs. Erased operations are ignored.
    pub fn uses(&self) -> Vec<(OperationRef<'c>, usize)> {
        let storage = self.context.storage();
        let mut uses = Vec::new();
        for (operation_index, operation) in storage.operations.iter().enumerate() {
            if operation.erased {
                continue;
            }
            for (operand_index, operand) in operation.operands.iter().enumerate() {
                if *operand == self.index {
                    uses.push((OperationRef::new(operation_index, self.context), operand_index));
                }
            }
        }
        uses
    }

    /// Returns `true` if any (non-erased) operation uses this value.
    pub fn has_uses(&self) -> bool {
        !self.uses().is_empty()
    }

    /// Replaces all uses of this value with `value`.
    pub fn replace_all_uses_with(&self, value: ValueRef<'c>) {
        let mut storage = self.context.storage_mut();
        storage
            .operations
            .iter_mut()
            .filter(|operation| !operation.erased)
            .flat_map(|operation| operation.operands.iter_mut())
            .filter(|operand| **operand == self.index)
            .for_each(|operand| *operand = value.index);
    }
}

impl PartialEq for ValueRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.context, other.context)
    }
}

impl Eq for ValueRef<'_> {}

impl Debug for ValueRef<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "ValueRef[{}: {}]", self.index, self.r#type())
    }
}
