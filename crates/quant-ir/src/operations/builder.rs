use std::collections::BTreeMap;

use crate::context::{OperationData, ValueData, ValueDefinition};
use crate::{Attribute, Context, Location, OperationRef, Type, ValueRef};

/// Builder for constructing operations. The resulting operations are owned by a [`Context`] and are not part of any
/// [`Block`](crate::Block) until they are appended to one using
/// [`Block::append_operation`](crate::Block::append_operation).
///
/// Operations are not verified when they are built. Use [`OperationRef::verify`] to check that an operation is
/// well-formed.
pub struct OperationBuilder<'c> {
    name: String,
    location: Location,
    operands: Vec<ValueRef<'c>>,
    result_types: Vec<Type>,
    attributes: BTreeMap<String, Attribute>,
}

impl<'c> OperationBuilder<'c> {
    /// Creates a new [`OperationBuilder`] for an operation with the provided full name (e.g., `"quant.scast"`).
    pub fn new<N: Into<String>>(name: N, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            operands: Vec::new(),
            result_types: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn add_operand(mut self, operand: ValueRef<'c>) -> Self {
        self.operands.push(operand);
        self
    }

    pub fn add_operands(mut self, operands: &[ValueRef<'c>]) -> Self {
        self.operands.extend_from_slice(operands);
        self
    }

    pub fn add_result(mut self, result_type: Type) -> Self {
        self.result_types.push(result_type);
        self
    }

    pub fn add_results(mut self, result_types: &[Type]) -> Self {
        self.result_types.extend_from_slice(result_types);
        self
    }

    /// Adds a named attribute to the operation, replacing any attribute previously added with the same name.
    pub fn add_attribute<N: Into<String>, A: Into<Attribute>>(mut self, name: N, attribute: A) -> Self {
        self.attributes.insert(name.into(), attribute.into());
        self
    }

    /// Builds the operation in `context`, which must be the [`Context`] that owns all of the operands.
    pub fn build(self, context: &'c Context) -> OperationRef<'c> {
        debug_assert!(self.operands.iter().all(|operand| std::ptr::eq(operand.context(), context)));
        let mut storage = context.storage_mut();
        let operation_index = storage.operations.len();
        let mut results = Vec::with_capacity(self.result_types.len());
        for (index, result_type) in self.result_types.into_iter().enumerate() {
            results.push(storage.values.len());
            storage.values.push(ValueData {
                r#type: result_type,
                location: self.location.clone(),
                definition: ValueDefinition::OperationResult { operation: operation_index, index },
            });
        }
        storage.operations.push(OperationData {
            name: self.name,
            location: self.location,
            operands: self.operands.iter().map(ValueRef::index).collect(),
            results,
            attributes: self.attributes,
            erased: false,
        });
        OperationRef::new(operation_index, context)
    }
}
