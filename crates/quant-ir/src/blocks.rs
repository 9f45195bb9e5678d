use std::collections::HashMap;
use std::fmt::Display;

use crate::context::{ValueData, ValueDefinition};
use crate::{Context, Location, OperationRef, Type, ValueRef, VerificationError};

/// [`Block`]s are ordered lists of operations that are preceded by a list of typed arguments. Block arguments are the
/// values that flow into the operations of the block from the outside (e.g., function arguments).
///
/// The [`Display`] rendering of a [`Block`] uses the MLIR generic operation syntax, with block arguments named
/// `%argN` and operation results numbered sequentially in block order:
///
/// ```text
/// ^bb0(%arg0: tensor<4xi8>):
///   %0 = "quant.scast"(%arg0) : (tensor<4xi8>) -> tensor<4x!quant.uniform<i8:f32, 1.000000e+00>>
/// ```
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/LangRef/#blocks) for more information.
pub struct Block<'c> {
    context: &'c Context,
    arguments: Vec<ValueRef<'c>>,
    operations: Vec<OperationRef<'c>>,
}

impl Context {
    /// Creates a new empty [`Block`] with arguments of the provided types, defined at the provided locations.
    pub fn block<'c>(&'c self, arguments: &[(Type, Location)]) -> Block<'c> {
        let mut storage = self.storage_mut();
        let mut values = Vec::with_capacity(arguments.len());
        for (index, (argument_type, location)) in arguments.iter().enumerate() {
            values.push(ValueRef::new(storage.values.len(), self));
            storage.values.push(ValueData {
                r#type: argument_type.clone(),
                location: location.clone(),
                definition: ValueDefinition::BlockArgument { index },
            });
        }
        Block { context: self, arguments: values, operations: Vec::new() }
    }
}

impl<'c> Block<'c> {
    pub fn context(&self) -> &'c Context {
        self.context
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the `index`-th argument of this [`Block`], or [`None`] if `index` is out of bounds.
    pub fn argument(&self, index: usize) -> Option<ValueRef<'c>> {
        self.arguments.get(index).copied()
    }

    pub fn arguments(&self) -> &[ValueRef<'c>] {
        &self.arguments
    }

    /// Appends `operation` to the end of this [`Block`] and returns it.
    pub fn append_operation(&mut self, operation: OperationRef<'c>) -> OperationRef<'c> {
        self.operations.push(operation);
        operation
    }

    /// Returns the operations of this [`Block`] in order, skipping erased operations.
    pub fn operations(&self) -> Vec<OperationRef<'c>> {
        self.operations.iter().filter(|operation| !operation.is_erased()).copied().collect()
    }

    /// Removes erased operations from this [`Block`].
    pub fn compact(&mut self) {
        self.operations.retain(|operation| !operation.is_erased());
    }

    /// Verifies all operations in this [`Block`]. Verification of each operation is fail-fast, but all operations
    /// are verified and all failures are returned in block order.
    pub fn verify(&self) -> Result<(), Vec<VerificationError>> {
        let errors = self.operations().iter().filter_map(|operation| operation.verify().err()).collect::<Vec<_>>();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Assigns printable names to the values that are visible in a [`Block`].
struct ValueNames {
    names: HashMap<usize, String>,
}

impl ValueNames {
    fn new(block: &Block<'_>) -> Self {
        let mut names = HashMap::new();
        for (index, argument) in block.arguments.iter().enumerate() {
            names.insert(argument.index(), format!("%arg{index}"));
        }
        let mut next_id = 0;
        for operation in block.operations() {
            let results = operation.results();
            match results.as_slice() {
                [] => {}
                [result] => {
                    names.insert(result.index(), format!("%{next_id}"));
                    next_id += 1;
                }
                results => {
                    for (index, result) in results.iter().enumerate() {
                        names.insert(result.index(), format!("%{next_id}#{index}"));
                    }
                    next_id += 1;
                }
            }
        }
        Self { names }
    }

    fn name(&self, value: &ValueRef<'_>) -> &str {
        self.names.get(&value.index()).map(String::as_str).unwrap_or("<<UNKNOWN SSA VALUE>>")
    }
}

fn write_operation(
    formatter: &mut std::fmt::Formatter<'_>,
    operation: &OperationRef<'_>,
    names: &ValueNames,
) -> std::fmt::Result {
    let results = operation.results();
    match results.as_slice() {
        [] => {}
        [result] => write!(formatter, "{} = ", names.name(result))?,
        [first, ..] => {
            let name = names.name(first);
            let name = name.split_once('#').map_or(name, |(name, _)| name);
            write!(formatter, "{name}:{} = ", results.len())?;
        }
    }
    let operands = operation.operands();
    let operand_names = operands.iter().map(|operand| names.name(operand)).collect::<Vec<_>>().join(", ");
    write!(formatter, "\"{}\"({operand_names})", operation.name())?;
    let attributes = operation.attributes();
    if !attributes.is_empty() {
        let attributes =
            attributes.iter().map(|(name, value)| format!("{name} = {value}")).collect::<Vec<_>>().join(", ");
        write!(formatter, " {{{attributes}}}")?;
    }
    let operand_types = operation.operand_types().iter().map(Type::to_string).collect::<Vec<_>>().join(", ");
    write!(formatter, " : ({operand_types}) -> ")?;
    match operation.result_types().as_slice() {
        [result_type] => write!(formatter, "{result_type}"),
        result_types => {
            let result_types = result_types.iter().map(Type::to_string).collect::<Vec<_>>().join(", ");
            write!(formatter, "({result_types})")
        }
    }
}

impl Display for Block<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = ValueNames::new(self);
        write!(formatter, "^bb0")?;
        if !self.arguments.is_empty() {
            let arguments = self
                .arguments
                .iter()
                .map(|argument| format!("{}: {}", names.name(argument), argument.r#type()))
                .collect::<Vec<_>>()
                .join(", ");
            write!(formatter, "({arguments})")?;
        }
        writeln!(formatter, ":")?;
        for operation in self.operations() {
            write!(formatter, "  ")?;
            write_operation(formatter, &operation, &names)?;
            writeln!(formatter)?;
        }
        Ok(())
    }
}
