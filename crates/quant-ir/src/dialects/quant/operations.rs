use crate::dialects::quant::{QuantDialect, is_valid_spec};
use crate::{
    Attribute, Context, DenseElementsAttribute, IntegerAttribute, IntegerType, Location, OpRef, OperationBuilder,
    OperationRef, QuantizedType, Size, Type, ValueRef, VerificationErrorKind, static_element_count,
};

pub const INPUT_SPECS_ATTRIBUTE: &str = "input_specs";
pub const OUTPUT_SPECS_ATTRIBUTE: &str = "output_specs";
pub const LOGICAL_KERNEL_ATTRIBUTE: &str = "logical_kernel";
pub const LAYER_STATS_ATTRIBUTE: &str = "layerStats";
pub const AXIS_STATS_ATTRIBUTE: &str = "axisStats";
pub const AXIS_ATTRIBUTE: &str = "axis";
pub const STATS_KEY_ATTRIBUTE: &str = "statsKey";
pub const COUPLED_KEY_ATTRIBUTE: &str = "coupledKey";

const ARRAY_ATTRIBUTE_CONSTRAINT: &str = "array attribute";
const STRING_ATTRIBUTE_CONSTRAINT: &str = "string attribute";
const ELEMENTS_ATTRIBUTE_CONSTRAINT: &str = "constant vector/tensor attribute";
const I64_ATTRIBUTE_CONSTRAINT: &str = "64-bit signless integer attribute";

/// Defines a typed operation handle that wraps an [`OperationRef`] and implements [`OpRef`] for it.
macro_rules! quant_operation {
    ($(#[$meta:meta])* $rust_name:ident => $mlir_name:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub struct $rust_name<'c> {
            operation: OperationRef<'c>,
        }

        impl<'c> OpRef<'c> for $rust_name<'c> {
            const NAME: &'static str = $mlir_name;

            fn from_operation_unchecked(operation: OperationRef<'c>) -> Self {
                Self { operation }
            }

            fn operation(&self) -> OperationRef<'c> {
                self.operation
            }
        }
    };
}

fn verify_operand_count(operation: OperationRef<'_>, expected_count: usize) -> Result<(), VerificationErrorKind> {
    let actual_count = operation.operand_count();
    if actual_count == expected_count {
        Ok(())
    } else {
        Err(VerificationErrorKind::OperandCountMismatch { expected_count, actual_count })
    }
}

fn verify_result_count(operation: OperationRef<'_>, expected_count: usize) -> Result<(), VerificationErrorKind> {
    let actual_count = operation.result_count();
    if actual_count == expected_count {
        Ok(())
    } else {
        Err(VerificationErrorKind::ResultCountMismatch { expected_count, actual_count })
    }
}

fn verify_unary(operation: OperationRef<'_>) -> Result<(Type, Type), VerificationErrorKind> {
    verify_operand_count(operation, 1)?;
    verify_result_count(operation, 1)?;
    let input_type = operation.operand_types().remove(0);
    let output_type = operation.result_types().remove(0);
    Ok((input_type, output_type))
}

fn verify_same_operand_and_result_type(operation: OperationRef<'_>) -> Result<(), VerificationErrorKind> {
    let (input_type, output_type) = verify_unary(operation)?;
    if input_type == output_type { Ok(()) } else { Err(VerificationErrorKind::OperandAndResultTypeMismatch) }
}

/// Returns the attribute named `name` after checking it with `extract`, which returns [`None`] when the attribute
/// does not satisfy `constraint`. Missing attributes are reported as [`None`].
fn optional_attribute<T>(
    operation: OperationRef<'_>,
    name: &str,
    constraint: &'static str,
    extract: impl FnOnce(Attribute) -> Option<T>,
) -> Result<Option<T>, VerificationErrorKind> {
    match operation.attribute(name) {
        None => Ok(None),
        Some(attribute) => extract(attribute)
            .map(Some)
            .ok_or_else(|| VerificationErrorKind::InvalidAttribute { name: name.to_string(), constraint }),
    }
}

fn required_attribute<T>(
    operation: OperationRef<'_>,
    name: &str,
    constraint: &'static str,
    extract: impl FnOnce(Attribute) -> Option<T>,
) -> Result<T, VerificationErrorKind> {
    optional_attribute(operation, name, constraint, extract)?
        .ok_or_else(|| VerificationErrorKind::MissingAttribute { name: name.to_string() })
}

fn array(attribute: Attribute) -> Option<Vec<Attribute>> {
    match attribute {
        Attribute::Array(elements) => Some(elements),
        _ => None,
    }
}

fn string(attribute: Attribute) -> Option<String> {
    match attribute {
        Attribute::String(value) => Some(value),
        _ => None,
    }
}

fn dense_elements(attribute: Attribute) -> Option<DenseElementsAttribute> {
    match attribute {
        Attribute::DenseElements(elements) => Some(elements),
        _ => None,
    }
}

fn i64_value(attribute: Attribute) -> Option<i64> {
    attribute
        .as_integer()
        .filter(|integer| *integer.attribute_type() == Type::Integer(IntegerType::signless(64)))
        .map(|integer| integer.value())
}

quant_operation!(
    /// Quant operation that wraps a region of operations whose operands and results carry quantization
    /// specifications (e.g., the body of a quantized kernel). This operation is represented in MLIR as
    /// `quant.region`. Each operand is annotated by the corresponding element of the `input_specs` array attribute
    /// and each result by the corresponding element of the `output_specs` array attribute. The `logical_kernel`
    /// string attribute names the kernel that the region implements.
    ///
    /// Each specification must be a type attribute that is valid for the annotated value. Refer to
    /// [`is_valid_spec`] for the exact rules.
    ///
    /// # Example
    ///
    /// ```mlir
    /// %0 = "quant.region"(%arg0) {input_specs = [!quant.uniform<i8:f32, 0.5>], logical_kernel = "relu",
    ///   output_specs = [!quant.uniform<i8:f32, 0.5>]} : (tensor<4xf32>) -> tensor<4xf32>
    /// ```
    RegionOperation => "quant.region"
);

impl<'c> RegionOperation<'c> {
    pub fn inputs(&self) -> Vec<ValueRef<'c>> {
        self.operation.operands()
    }

    pub fn outputs(&self) -> Vec<ValueRef<'c>> {
        self.operation.results()
    }

    /// Returns the `input_specs` attribute elements, or [`None`] if the attribute is missing or not an array.
    pub fn input_specs(&self) -> Option<Vec<Attribute>> {
        self.operation.attribute(INPUT_SPECS_ATTRIBUTE).and_then(array)
    }

    /// Returns the `output_specs` attribute elements, or [`None`] if the attribute is missing or not an array.
    pub fn output_specs(&self) -> Option<Vec<Attribute>> {
        self.operation.attribute(OUTPUT_SPECS_ATTRIBUTE).and_then(array)
    }

    pub fn logical_kernel(&self) -> Option<String> {
        self.operation.attribute(LOGICAL_KERNEL_ATTRIBUTE).and_then(string)
    }

    /// Verifies this operation. After its attributes are checked, the number of operands and results must match the
    /// number of input and output specifications, and then every (specification, type) pair must be valid, with
    /// operands checked before results. The first violation is returned.
    pub fn verify(&self) -> Result<(), VerificationErrorKind> {
        let operation = self.operation;
        let input_specs = required_attribute(operation, INPUT_SPECS_ATTRIBUTE, ARRAY_ATTRIBUTE_CONSTRAINT, array)?;
        let output_specs = required_attribute(operation, OUTPUT_SPECS_ATTRIBUTE, ARRAY_ATTRIBUTE_CONSTRAINT, array)?;
        required_attribute(operation, LOGICAL_KERNEL_ATTRIBUTE, STRING_ATTRIBUTE_CONSTRAINT, string)?;

        if operation.operand_count() != input_specs.len() || operation.result_count() != output_specs.len() {
            return Err(VerificationErrorKind::UnmatchedSpecCount);
        }

        for (input_type, input_spec) in operation.operand_types().iter().zip(&input_specs) {
            if !is_valid_spec(input_spec, input_type) {
                return Err(VerificationErrorKind::IncompatibleInputSpecification {
                    specification: input_spec.to_string(),
                    input_type: input_type.to_string(),
                });
            }
        }

        for (output_type, output_spec) in operation.result_types().iter().zip(&output_specs) {
            if !is_valid_spec(output_spec, output_type) {
                return Err(VerificationErrorKind::IncompatibleOutputSpecification {
                    specification: output_spec.to_string(),
                    output_type: output_type.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Constructs a new [`RegionOperation`] in `context` at the specified [`Location`]. The operation is not verified.
pub fn quantize_region<'c>(
    context: &'c Context,
    inputs: &[ValueRef<'c>],
    output_types: &[Type],
    input_specs: &[Attribute],
    output_specs: &[Attribute],
    logical_kernel: &str,
    location: Location,
) -> RegionOperation<'c> {
    context.load_dialect(QuantDialect);
    let operation = OperationBuilder::new(RegionOperation::NAME, location)
        .add_operands(inputs)
        .add_results(output_types)
        .add_attribute(INPUT_SPECS_ATTRIBUTE, input_specs.to_vec())
        .add_attribute(OUTPUT_SPECS_ATTRIBUTE, output_specs.to_vec())
        .add_attribute(LOGICAL_KERNEL_ATTRIBUTE, logical_kernel)
        .build(context);
    RegionOperation::from_operation_unchecked(operation)
}

quant_operation!(
    /// Quant operation that records calibration statistics for a tensor value and forwards that value unchanged.
    /// This operation is represented in MLIR as `quant.stats`. The `layerStats` attribute holds the `[min, max]` range
    /// of the whole tensor. The optional `axisStats` attribute holds one `[min, max]` range per slice along the
    /// dimension selected by the `axis` attribute, where a slice is made of all dimensions after that axis.
    ///
    /// # Example
    ///
    /// ```mlir
    /// %0 = "quant.stats"(%arg0) {axis = 1 : i64, axisStats = dense<...> : tensor<3x2xf32>,
    ///   layerStats = dense<[-1.0, 1.0]> : tensor<2xf32>} : (tensor<4x8x3xf32>) -> tensor<4x8x3xf32>
    /// ```
    StatisticsOperation => "quant.stats"
);

/// Attributes of a [`StatisticsOperation`].
#[derive(Clone, Debug, PartialEq)]
pub struct StatisticsAttributes {
    pub layer_stats: DenseElementsAttribute,
    pub axis_stats: Option<DenseElementsAttribute>,
    pub axis: Option<i64>,
}

/// Returns the number of elements in one slice of a value with type `argument_type` along `axis`, which is the
/// product of the sizes of all dimensions after `axis`. Returns [`None`] if the type is not ranked, if `axis` is out
/// of bounds, if any of those dimensions is dynamic, or if the product overflows.
fn slice_size(argument_type: &Type, axis: i64) -> Option<usize> {
    let shape = argument_type.shape()?;
    let axis = usize::try_from(axis).ok().filter(|axis| *axis < shape.len())?;
    static_element_count(&shape[axis + 1..])
}

impl<'c> StatisticsOperation<'c> {
    pub fn input(&self) -> Option<ValueRef<'c>> {
        self.operation.operand(0)
    }

    pub fn output(&self) -> Option<ValueRef<'c>> {
        self.operation.result(0)
    }

    pub fn layer_stats(&self) -> Option<DenseElementsAttribute> {
        self.operation.attribute(LAYER_STATS_ATTRIBUTE).and_then(dense_elements)
    }

    pub fn axis_stats(&self) -> Option<DenseElementsAttribute> {
        self.operation.attribute(AXIS_STATS_ATTRIBUTE).and_then(dense_elements)
    }

    pub fn axis(&self) -> Option<i64> {
        self.operation.attribute(AXIS_ATTRIBUTE).and_then(i64_value)
    }

    /// Returns the `(min, max)` range recorded in `layerStats`.
    pub fn layer_range(&self) -> Option<(f64, f64)> {
        match self.layer_stats()?.float_values()?.as_slice() {
            [minimum, maximum] => Some((*minimum, *maximum)),
            _ => None,
        }
    }

    /// Returns the `(min, max)` ranges recorded in `axisStats`, one per slice.
    pub fn axis_ranges(&self) -> Option<Vec<(f64, f64)>> {
        let axis_stats = self.axis_stats()?;
        if !matches!(axis_stats.shape().as_slice(), [_, Size::Static(2)]) {
            return None;
        }
        let values = axis_stats.float_values()?;
        Some(values.chunks_exact(2).map(|range| (range[0], range[1])).collect())
    }

    /// Verifies this operation. After its structure and attribute kinds are checked, the statistics must be
    /// consistent with the statistics argument:
    ///
    ///   - The argument must be a tensor.
    ///   - `layerStats` must have a floating-point element type and shape `[2]`.
    ///   - If `axisStats` is present, `axis` must be present too, and `axisStats` must have a floating-point element
    ///     type and shape `[N, 2]`, where `N` is the slice size defined by `axis`. Having `axis` without `axisStats`
    ///     is allowed.
    ///
    /// The first violation is returned.
    pub fn verify(&self) -> Result<(), VerificationErrorKind> {
        let operation = self.operation;
        verify_unary(operation)?;
        let layer_stats =
            required_attribute(operation, LAYER_STATS_ATTRIBUTE, ELEMENTS_ATTRIBUTE_CONSTRAINT, dense_elements)?;
        let axis_stats =
            optional_attribute(operation, AXIS_STATS_ATTRIBUTE, ELEMENTS_ATTRIBUTE_CONSTRAINT, dense_elements)?;
        let axis = optional_attribute(operation, AXIS_ATTRIBUTE, I64_ATTRIBUTE_CONSTRAINT, i64_value)?;
        verify_same_operand_and_result_type(operation)?;

        let argument_type = operation.operand_types().remove(0);
        if !argument_type.is_tensor() {
            return Err(VerificationErrorKind::NonTensorArgument);
        }

        if !layer_stats.element_type().is_float() {
            return Err(VerificationErrorKind::NonFloatLayerStats);
        }
        if layer_stats.shape() != [Size::Static(2)] {
            return Err(VerificationErrorKind::InvalidLayerStatsShape);
        }

        if let Some(axis_stats) = axis_stats {
            let axis = axis.ok_or(VerificationErrorKind::MissingAxis)?;
            let slice_size = slice_size(&argument_type, axis);
            if !axis_stats.element_type().is_float() {
                return Err(VerificationErrorKind::NonFloatAxisStats);
            }
            let has_valid_shape = slice_size.is_some_and(|slice_size| {
                axis_stats.shape() == [Size::Static(slice_size), Size::Static(2)]
            });
            if !has_valid_shape {
                return Err(VerificationErrorKind::InvalidAxisStatsShape);
            }
        }

        Ok(())
    }
}

/// Constructs a new [`StatisticsOperation`] for `input` at the specified [`Location`]. The result has the same type
/// as `input`. The operation is not verified.
pub fn statistics<'c>(
    input: ValueRef<'c>,
    attributes: StatisticsAttributes,
    location: Location,
) -> StatisticsOperation<'c> {
    let context = input.context();
    context.load_dialect(QuantDialect);
    let mut builder = OperationBuilder::new(StatisticsOperation::NAME, location)
        .add_operand(input)
        .add_result(input.r#type())
        .add_attribute(LAYER_STATS_ATTRIBUTE, attributes.layer_stats);
    if let Some(axis_stats) = attributes.axis_stats {
        builder = builder.add_attribute(AXIS_STATS_ATTRIBUTE, axis_stats);
    }
    if let Some(axis) = attributes.axis {
        builder = builder.add_attribute(AXIS_ATTRIBUTE, IntegerAttribute::i64(axis));
    }
    StatisticsOperation::from_operation_unchecked(builder.build(context))
}

quant_operation!(
    /// Quant operation that casts between a quantized scalar/tensor type and its storage scalar/tensor type.
    /// This operation is represented in MLIR as `quant.scast`. It reinterprets values without changing their bits
    /// or their shape.
    ///
    /// A pair of [`SCastOperation`]s that cast a value to another type and then back to its original type folds to
    /// the original value.
    ///
    /// # Example
    ///
    /// ```mlir
    /// %0 = "quant.scast"(%arg0) : (tensor<4x!quant.uniform<i8:f32, 0.5>>) -> tensor<4xi8>
    /// ```
    SCastOperation => "quant.scast"
);

impl<'c> SCastOperation<'c> {
    pub fn input(&self) -> Option<ValueRef<'c>> {
        self.operation.operand(0)
    }

    pub fn output(&self) -> Option<ValueRef<'c>> {
        self.operation.result(0)
    }

    /// Verifies that this operation casts a quantized type to its storage type or vice versa.
    pub fn verify(&self) -> Result<(), VerificationErrorKind> {
        let (input_type, output_type) = verify_unary(self.operation)?;
        let is_storage_cast = match (
            QuantizedType::quantized_element_type(&input_type),
            QuantizedType::quantized_element_type(&output_type),
        ) {
            (Some(quantized_type), None) => {
                quantized_type.cast_to_storage_type(&input_type).as_ref() == Some(&output_type)
            }
            (None, Some(quantized_type)) => {
                quantized_type.cast_from_storage_type(&input_type).as_ref() == Some(&output_type)
            }
            _ => false,
        };
        if is_storage_cast {
            Ok(())
        } else {
            Err(VerificationErrorKind::InvalidStorageCast {
                input_type: input_type.to_string(),
                output_type: output_type.to_string(),
            })
        }
    }

    /// Folds `scast(scast(x))` to `x` when the type of `x` is the result type of this operation. Only the immediate
    /// producer of the input is inspected. Longer chains are collapsed by folding repeatedly.
    pub fn fold(&self) -> Option<ValueRef<'c>> {
        let producer = self.input()?.defining_operation()?.cast::<SCastOperation>()?;
        let source = producer.input()?;
        (source.r#type() == self.output()?.r#type()).then_some(source)
    }
}

/// Constructs a new [`SCastOperation`] at the specified [`Location`]. The operation is not verified.
pub fn scast<'c>(input: ValueRef<'c>, output_type: Type, location: Location) -> SCastOperation<'c> {
    SCastOperation::from_operation_unchecked(unary_operation(SCastOperation::NAME, input, output_type, location))
}

quant_operation!(
    /// Quant operation that casts from an expressed floating-point scalar/tensor type to a quantized type. This
    /// operation is represented in MLIR as `quant.qcast`. The result type must be the input type with its
    /// (element) type replaced by a quantized type that expresses it.
    ///
    /// # Example
    ///
    /// ```mlir
    /// %0 = "quant.qcast"(%arg0) : (tensor<?xf32>) -> tensor<?x!quant.uniform<i8:f32, 2.0>>
    /// ```
    QCastOperation => "quant.qcast"
);

impl<'c> QCastOperation<'c> {
    pub fn input(&self) -> Option<ValueRef<'c>> {
        self.operation.operand(0)
    }

    pub fn output(&self) -> Option<ValueRef<'c>> {
        self.operation.result(0)
    }

    pub fn verify(&self) -> Result<(), VerificationErrorKind> {
        let (input_type, output_type) = verify_unary(self.operation)?;
        let expected_type = QuantizedType::quantized_element_type(&output_type)
            .and_then(|quantized_type| quantized_type.cast_from_expressed_type(&input_type));
        if input_type.element_type_or_self().is_float() && expected_type.as_ref() == Some(&output_type) {
            Ok(())
        } else {
            Err(VerificationErrorKind::InvalidQuantizeCast {
                input_type: input_type.to_string(),
                output_type: output_type.to_string(),
            })
        }
    }
}

/// Constructs a new [`QCastOperation`] at the specified [`Location`]. The operation is not verified.
pub fn qcast<'c>(input: ValueRef<'c>, output_type: Type, location: Location) -> QCastOperation<'c> {
    QCastOperation::from_operation_unchecked(unary_operation(QCastOperation::NAME, input, output_type, location))
}

quant_operation!(
    /// Quant operation that casts from a quantized scalar/tensor type to its expressed floating-point type. This
    /// operation is represented in MLIR as `quant.dcast` and it is the inverse of [`QCastOperation`].
    ///
    /// # Example
    ///
    /// ```mlir
    /// %0 = "quant.dcast"(%arg0) : (tensor<?x!quant.uniform<i8:f32, 2.0>>) -> tensor<?xf32>
    /// ```
    DCastOperation => "quant.dcast"
);

impl<'c> DCastOperation<'c> {
    pub fn input(&self) -> Option<ValueRef<'c>> {
        self.operation.operand(0)
    }

    pub fn output(&self) -> Option<ValueRef<'c>> {
        self.operation.result(0)
    }

    pub fn verify(&self) -> Result<(), VerificationErrorKind> {
        let (input_type, output_type) = verify_unary(self.operation)?;
        let expected_type = QuantizedType::quantized_element_type(&input_type)
            .and_then(|quantized_type| quantized_type.cast_to_expressed_type(&input_type));
        if expected_type.as_ref() == Some(&output_type) {
            Ok(())
        } else {
            Err(VerificationErrorKind::InvalidDequantizeCast {
                input_type: input_type.to_string(),
                output_type: output_type.to_string(),
            })
        }
    }
}

/// Constructs a new [`DCastOperation`] at the specified [`Location`]. The operation is not verified.
pub fn dcast<'c>(input: ValueRef<'c>, output_type: Type, location: Location) -> DCastOperation<'c> {
    DCastOperation::from_operation_unchecked(unary_operation(DCastOperation::NAME, input, output_type, location))
}

quant_operation!(
    /// Quant operation that forwards its operand unchanged while associating it with externally collected
    /// statistics, identified by the `statsKey` string attribute. This operation is represented in MLIR as
    /// `quant.stats_ref`.
    StatisticsRefOperation => "quant.stats_ref"
);

impl<'c> StatisticsRefOperation<'c> {
    pub fn input(&self) -> Option<ValueRef<'c>> {
        self.operation.operand(0)
    }

    pub fn stats_key(&self) -> Option<String> {
        self.operation.attribute(STATS_KEY_ATTRIBUTE).and_then(string)
    }

    pub fn verify(&self) -> Result<(), VerificationErrorKind> {
        verify_unary(self.operation)?;
        required_attribute(self.operation, STATS_KEY_ATTRIBUTE, STRING_ATTRIBUTE_CONSTRAINT, string)?;
        verify_same_operand_and_result_type(self.operation)
    }
}

pub fn statistics_ref<'c>(input: ValueRef<'c>, stats_key: &str, location: Location) -> StatisticsRefOperation<'c> {
    let operation = unary_operation(StatisticsRefOperation::NAME, input, input.r#type(), location);
    operation.set_attribute(STATS_KEY_ATTRIBUTE, stats_key);
    StatisticsRefOperation::from_operation_unchecked(operation)
}

quant_operation!(
    /// Quant operation that forwards its operand unchanged while marking it as coupled to other values that share
    /// the same `coupledKey` string attribute (i.e., values that must be quantized with the same parameters). This
    /// operation is represented in MLIR as `quant.coupled_ref`.
    CoupledRefOperation => "quant.coupled_ref"
);

impl<'c> CoupledRefOperation<'c> {
    pub fn input(&self) -> Option<ValueRef<'c>> {
        self.operation.operand(0)
    }

    pub fn coupled_key(&self) -> Option<String> {
        self.operation.attribute(COUPLED_KEY_ATTRIBUTE).and_then(string)
    }

    pub fn verify(&self) -> Result<(), VerificationErrorKind> {
        verify_unary(self.operation)?;
        required_attribute(self.operation, COUPLED_KEY_ATTRIBUTE, STRING_ATTRIBUTE_CONSTRAINT, string)?;
        verify_same_operand_and_result_type(self.operation)
    }
}

pub fn coupled_ref<'c>(input: ValueRef<'c>, coupled_key: &str, location: Location) -> CoupledRefOperation<'c> {
    let operation = unary_operation(CoupledRefOperation::NAME, input, input.r#type(), location);
    operation.set_attribute(COUPLED_KEY_ATTRIBUTE, coupled_key);
    CoupledRefOperation::from_operation_unchecked(operation)
}

fn unary_operation<'c>(name: &str, input: ValueRef<'c>, output_type: Type, location: Location) -> OperationRef<'c> {
    let context = input.context();
    context.load_dialect(QuantDialect);
    OperationBuilder::new(name, location).add_operand(input).add_result(output_type).build(context)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use crate::attributes::tests::parse_attribute;
    use crate::types::tests::parse_type;
    use crate::Dialect;

    use super::*;

    fn dense(source: &str) -> DenseElementsAttribute {
        parse_attribute(source).as_dense_elements().cloned().unwrap()
    }

    fn verify_region(
        input_types: &[&str],
        output_types: &[&str],
        input_specs: &str,
        output_specs: &str,
    ) -> Result<(), VerificationErrorKind> {
        let context = Context::new();
        let arguments =
            input_types.iter().map(|input_type| (parse_type(input_type), Location::unknown())).collect::<Vec<_>>();
        let block = context.block(&arguments);
        let output_types = output_types.iter().map(|output_type| parse_type(output_type)).collect::<Vec<_>>();
        let input_specs = parse_attribute(input_specs).as_array().unwrap().to_vec();
        let output_specs = parse_attribute(output_specs).as_array().unwrap().to_vec();
        let region = quantize_region(
            &context,
            block.arguments(),
            &output_types,
            &input_specs,
            &output_specs,
            "kernel",
            Location::unknown(),
        );
        region.operation().verify().map_err(|error| error.kind)
    }

    fn verify_statistics(
        argument_type: &str,
        layer_stats: &str,
        axis_stats: Option<&str>,
        axis: Option<i64>,
    ) -> Result<(), VerificationErrorKind> {
        let context = Context::new();
        context.load_dialect(QuantDialect);
        let block = context.block(&[(parse_type(argument_type), Location::unknown())]);
        let input = block.argument(0).unwrap();
        let mut builder = OperationBuilder::new(StatisticsOperation::NAME, Location::unknown())
            .add_operand(input)
            .add_result(input.r#type())
            .add_attribute(LAYER_STATS_ATTRIBUTE, parse_attribute(layer_stats));
        if let Some(axis_stats) = axis_stats {
            builder = builder.add_attribute(AXIS_STATS_ATTRIBUTE, parse_attribute(axis_stats));
        }
        if let Some(axis) = axis {
            builder = builder.add_attribute(AXIS_ATTRIBUTE, IntegerAttribute::i64(axis));
        }
        builder.build(&context).verify().map_err(|error| error.kind)
    }

    #[test]
    fn test_quant_dialect() {
        let dialect = QuantDialect;
        assert_eq!(dialect.namespace(), "quant");
        assert_eq!(
            dialect.operation_names(),
            &[
                "quant.region",
                "quant.stats",
                "quant.scast",
                "quant.qcast",
                "quant.dcast",
                "quant.stats_ref",
                "quant.coupled_ref",
            ],
        );
        assert!(dialect.defines_operation("quant.stats"));
        assert!(!dialect.defines_operation("quant.unknown"));

        let context = Context::new();
        let block = context.block(&[(parse_type("tensor<4xf32>"), Location::unknown())]);
        let operation = statistics_ref(block.argument(0).unwrap(), "key", Location::unknown());
        assert_eq!(context.loaded_dialects(), vec!["quant"]);
        assert!(operation.operation().is::<StatisticsRefOperation>());
        assert_eq!(operation.operation().cast::<StatisticsRefOperation>(), Some(operation));
        assert_eq!(operation.operation().cast::<SCastOperation>(), None);
    }

    #[test]
    fn test_region_verification() {
        let spec = "!quant.uniform<i8:f32, 1.0>";
        assert_eq!(
            verify_region(
                &["tensor<?x?xf32>", "tensor<?x?xf32>"],
                &["tensor<?x?xf32>"],
                &format!("[{spec}, {spec}]"),
                &format!("[{spec}]"),
            ),
            Ok(()),
        );
        assert_eq!(verify_region(&["tensor<4xi8>"], &["tensor<4xf32>"], "[i8]", "[f32]"), Ok(()));
        assert_eq!(verify_region(&[], &[], "[]", "[]"), Ok(()));
    }

    #[test]
    fn test_region_verification_with_unmatched_spec_counts() {
        assert_eq!(
            verify_region(&["tensor<4xf32>", "tensor<4xf32>"], &["tensor<4xf32>"], "[f32]", "[f32]"),
            Err(VerificationErrorKind::UnmatchedSpecCount),
        );
        assert_eq!(
            verify_region(&["tensor<4xf32>"], &["tensor<4xf32>"], "[f32]", "[f32, f32]"),
            Err(VerificationErrorKind::UnmatchedSpecCount),
        );

        // Count mismatches are reported even when some specifications are also incompatible.
        assert_eq!(
            verify_region(&["tensor<4xf32>", "tensor<4xf32>"], &[], "[ui8]", "[]"),
            Err(VerificationErrorKind::UnmatchedSpecCount),
        );
    }

    #[test]
    fn test_region_verification_with_incompatible_specs() {
        assert_eq!(
            verify_region(&["tensor<?x?xf32>", "tensor<?x?xf32>"], &[], "[ui8, ui8]", "[]"),
            Err(VerificationErrorKind::IncompatibleInputSpecification {
                specification: "ui8".to_string(),
                input_type: "tensor<?x?xf32>".to_string(),
            }),
        );
        assert_eq!(
            verify_region(&["tensor<4xf32>", "tensor<4xi8>"], &[], "[f32, tensor<4xi8>]", "[]"),
            Err(VerificationErrorKind::IncompatibleInputSpecification {
                specification: "tensor<4xi8>".to_string(),
                input_type: "tensor<4xi8>".to_string(),
            }),
        );
        assert_eq!(
            verify_region(&["tensor<4xf32>"], &["tensor<4xi8>"], "[f32]", "[f32]"),
            Err(VerificationErrorKind::IncompatibleOutputSpecification {
                specification: "f32".to_string(),
                output_type: "tensor<4xi8>".to_string(),
            }),
        );
        assert_eq!(
            verify_region(&["tensor<4xf32>"], &[], "[\"f32\"]", "[]"),
            Err(VerificationErrorKind::IncompatibleInputSpecification {
                specification: "\"f32\"".to_string(),
                input_type: "tensor<4xf32>".to_string(),
            }),
        );

        // Input specifications are checked before output specifications.
        assert_eq!(
            verify_region(&["tensor<4xf32>"], &["tensor<4xf32>"], "[i8]", "[i8]"),
            Err(VerificationErrorKind::IncompatibleInputSpecification {
                specification: "i8".to_string(),
                input_type: "tensor<4xf32>".to_string(),
            }),
        );
    }

    #[test]
    fn test_region_verification_diagnostics() {
        let context = Context::new();
        let messages = Rc::new(RefCell::new(Vec::new()));
        let messages_clone = messages.clone();
        context.attach_diagnostics_handler(move |diagnostic| {
            messages_clone.borrow_mut().push(diagnostic.message().to_string());
            true
        });
        let tensor_type = parse_type("tensor<?x?xf32>");
        let block = context.block(&[(tensor_type.clone(), Location::unknown()), (tensor_type, Location::unknown())]);
        let spec = parse_attribute("ui8");
        let region = quantize_region(
            &context,
            block.arguments(),
            &[],
            &[spec.clone(), spec],
            &[],
            "add",
            Location::name("region"),
        );
        let error = region.operation().verify().unwrap_err();
        assert_eq!(error.location, Location::name("region"));
        assert_eq!(
            error.to_string(),
            "'quant.region' op has incompatible specification ui8 and input type tensor<?x?xf32>",
        );
        assert_eq!(*messages.borrow(), vec![error.to_string()]);
        assert_eq!(region.inputs(), block.arguments().to_vec());
        assert!(region.outputs().is_empty());
        assert_eq!(region.logical_kernel(), Some("add".to_string()));
        assert_eq!(region.output_specs(), Some(Vec::new()));
    }

    #[test]
    fn test_region_verification_with_invalid_attributes() {
        let context = Context::new();
        context.load_dialect(QuantDialect);
        let region = OperationBuilder::new(RegionOperation::NAME, Location::unknown())
            .add_attribute(OUTPUT_SPECS_ATTRIBUTE, Vec::<Attribute>::new())
            .add_attribute(LOGICAL_KERNEL_ATTRIBUTE, "kernel")
            .build(&context);
        assert_eq!(
            region.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::MissingAttribute { name: INPUT_SPECS_ATTRIBUTE.to_string() }),
        );
        region.set_attribute(INPUT_SPECS_ATTRIBUTE, "specs");
        assert_eq!(
            region.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::InvalidAttribute {
                name: INPUT_SPECS_ATTRIBUTE.to_string(),
                constraint: "array attribute",
            }),
        );
        region.set_attribute(INPUT_SPECS_ATTRIBUTE, Vec::<Attribute>::new());
        region.remove_attribute(LOGICAL_KERNEL_ATTRIBUTE);
        assert_eq!(
            region.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::MissingAttribute { name: LOGICAL_KERNEL_ATTRIBUTE.to_string() }),
        );
        region.set_attribute(LOGICAL_KERNEL_ATTRIBUTE, "kernel");
        assert_eq!(region.verify(), Ok(()));
    }

    #[test]
    fn test_statistics_verification() {
        let layer_stats = "dense<[-1.0, 1.0]> : tensor<2xf32>";
        assert_eq!(verify_statistics("tensor<4x8x3xf32>", layer_stats, None, None), Ok(()));
        assert_eq!(verify_statistics("tensor<*xf32>", layer_stats, None, None), Ok(()));
        assert_eq!(verify_statistics("tensor<4x8x3xf32>", "dense<0.0> : tensor<2xbf16>", None, None), Ok(()));

        // An axis without axis statistics is allowed.
        assert_eq!(verify_statistics("tensor<4x8x3xf32>", layer_stats, None, Some(1)), Ok(()));

        assert_eq!(
            verify_statistics("vector<4xf32>", layer_stats, None, None),
            Err(VerificationErrorKind::NonTensorArgument),
        );
        assert_eq!(verify_statistics("f32", layer_stats, None, None), Err(VerificationErrorKind::NonTensorArgument));
    }

    #[test]
    fn test_statistics_verification_with_invalid_layer_stats() {
        assert_eq!(
            verify_statistics("tensor<4xf32>", "dense<[0.0, 1.0, 2.0]> : tensor<3xf32>", None, None),
            Err(VerificationErrorKind::InvalidLayerStatsShape),
        );
        assert_eq!(
            verify_statistics("tensor<4xf32>", "dense<[[0.0, 1.0]]> : tensor<1x2xf32>", None, None),
            Err(VerificationErrorKind::InvalidLayerStatsShape),
        );
        assert_eq!(
            verify_statistics("tensor<4xf32>", "dense<[0, 1]> : tensor<2xi32>", None, None),
            Err(VerificationErrorKind::NonFloatLayerStats),
        );

        // The element type is checked before the shape.
        assert_eq!(
            verify_statistics("tensor<4xf32>", "dense<[0, 1, 2]> : tensor<3xi32>", None, None),
            Err(VerificationErrorKind::NonFloatLayerStats),
        );
    }

    #[test]
    fn test_statistics_verification_with_axis_stats() {
        let layer_stats = "dense<[-1.0, 1.0]> : tensor<2xf32>";
        let argument_type = "tensor<4x8x3xf32>";
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0.0> : tensor<3x2xf32>"), Some(1)),
            Ok(()),
        );
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0.0> : tensor<4x2xf32>"), Some(1)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0.0> : tensor<24x2xf32>"), Some(0)),
            Ok(()),
        );
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0.0> : tensor<32x2xf32>"), Some(0)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0.0> : tensor<1x2xf32>"), Some(2)),
            Ok(()),
        );
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0.0> : tensor<3x3xf32>"), Some(1)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0.0> : tensor<6xf32>"), Some(1)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0.0> : tensor<3x2xf32>"), None),
            Err(VerificationErrorKind::MissingAxis),
        );
        assert_eq!(
            verify_statistics(argument_type, layer_stats, Some("dense<0> : tensor<3x2xi32>"), Some(1)),
            Err(VerificationErrorKind::NonFloatAxisStats),
        );
    }

    #[test]
    fn test_statistics_verification_with_undefined_slice_sizes() {
        let layer_stats = "dense<[-1.0, 1.0]> : tensor<2xf32>";
        let axis_stats = Some("dense<0.0> : tensor<1x2xf32>");
        assert_eq!(
            verify_statistics("tensor<4x8x3xf32>", layer_stats, axis_stats, Some(3)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
        assert_eq!(
            verify_statistics("tensor<4x8x3xf32>", layer_stats, axis_stats, Some(-1)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
        assert_eq!(
            verify_statistics("tensor<4x?xf32>", layer_stats, axis_stats, Some(0)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
        assert_eq!(verify_statistics("tensor<4x?xf32>", layer_stats, axis_stats, Some(1)), Ok(()));
        assert_eq!(
            verify_statistics("tensor<*xf32>", layer_stats, axis_stats, Some(0)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
        assert_eq!(
            verify_statistics("tensor<1x4294967296x4294967296xf32>", layer_stats, axis_stats, Some(0)),
            Err(VerificationErrorKind::InvalidAxisStatsShape),
        );
    }

    #[test]
    fn test_statistics_verification_with_invalid_structure() {
        let context = Context::new();
        context.load_dialect(QuantDialect);
        let block = context.block(&[(parse_type("tensor<4xf32>"), Location::unknown())]);
        let input = block.argument(0).unwrap();
        let operation = OperationBuilder::new(StatisticsOperation::NAME, Location::unknown())
            .add_operand(input)
            .add_result(parse_type("tensor<4xf16>"))
            .build(&context);
        assert_eq!(
            operation.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::MissingAttribute { name: LAYER_STATS_ATTRIBUTE.to_string() }),
        );
        operation.set_attribute(LAYER_STATS_ATTRIBUTE, "stats");
        assert_eq!(
            operation.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::InvalidAttribute {
                name: LAYER_STATS_ATTRIBUTE.to_string(),
                constraint: "constant vector/tensor attribute",
            }),
        );
        operation.set_attribute(LAYER_STATS_ATTRIBUTE, dense("dense<[-1.0, 1.0]> : tensor<2xf32>"));
        operation.set_attribute(AXIS_ATTRIBUTE, parse_attribute("1 : i32"));
        assert_eq!(
            operation.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::InvalidAttribute {
                name: AXIS_ATTRIBUTE.to_string(),
                constraint: "64-bit signless integer attribute",
            }),
        );
        operation.remove_attribute(AXIS_ATTRIBUTE);
        assert_eq!(
            operation.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::OperandAndResultTypeMismatch),
        );

        let operation = OperationBuilder::new(StatisticsOperation::NAME, Location::unknown())
            .add_operands(&[input, input])
            .add_result(input.r#type())
            .add_attribute(LAYER_STATS_ATTRIBUTE, dense("dense<[-1.0, 1.0]> : tensor<2xf32>"))
            .build(&context);
        assert_eq!(
            operation.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::OperandCountMismatch { expected_count: 1, actual_count: 2 }),
        );
    }

    #[test]
    fn test_statistics() {
        let context = Context::new();
        let mut block = context.block(&[(parse_type("tensor<4x8x3xf32>"), Location::unknown())]);
        let input = block.argument(0).unwrap();
        let operation = block.append_operation(
            statistics(
                input,
                StatisticsAttributes {
                    layer_stats: dense("dense<[-1.0, 1.0]> : tensor<2xf32>"),
                    axis_stats: Some(dense("dense<[[-1.0, 1.0], [-2.0, 2.0], [-3.0, 3.0]]> : tensor<3x2xf32>")),
                    axis: Some(1),
                },
                Location::unknown(),
            )
            .operation(),
        );
        let stats = operation.cast::<StatisticsOperation>().unwrap();
        assert_eq!(stats.verify(), Ok(()));
        assert_eq!(operation.verify(), Ok(()));
        assert_eq!(stats.input(), Some(input));
        assert_eq!(stats.output().map(|output| output.r#type()), Some(input.r#type()));
        assert_eq!(stats.axis(), Some(1));
        assert_eq!(stats.layer_range(), Some((-1.0, 1.0)));
        assert_eq!(stats.axis_ranges(), Some(vec![(-1.0, 1.0), (-2.0, 2.0), (-3.0, 3.0)]));
        assert_eq!(
            block.to_string(),
            indoc! {"
                ^bb0(%arg0: tensor<4x8x3xf32>):
                  %0 = \"quant.stats\"(%arg0) {axis = 1 : i64, axisStats = dense<[[-1.000000e+00, 1.000000e+00], [-2.000000e+00, 2.000000e+00], [-3.000000e+00, 3.000000e+00]]> : tensor<3x2xf32>, layerStats = dense<[-1.000000e+00, 1.000000e+00]> : tensor<2xf32>} : (tensor<4x8x3xf32>) -> tensor<4x8x3xf32>
            "},
        );

        let splat = statistics(
            input,
            StatisticsAttributes {
                layer_stats: dense("dense<0.0> : tensor<2xf32>"),
                axis_stats: Some(dense("dense<0.5> : tensor<3x2xf32>")),
                axis: None,
            },
            Location::unknown(),
        );
        assert_eq!(splat.layer_range(), Some((0.0, 0.0)));
        assert_eq!(splat.axis_ranges(), Some(vec![(0.5, 0.5); 3]));
        assert_eq!(splat.axis(), None);
        assert_eq!(splat.verify(), Err(VerificationErrorKind::MissingAxis));

        let rank_3 = statistics(
            input,
            StatisticsAttributes {
                layer_stats: dense("dense<0.0> : tensor<2xf32>"),
                axis_stats: Some(dense("dense<0.5> : tensor<3x1x2xf32>")),
                axis: Some(1),
            },
            Location::unknown(),
        );
        assert_eq!(rank_3.axis_ranges(), None);
        assert_eq!(rank_3.verify(), Err(VerificationErrorKind::InvalidAxisStatsShape));
    }

    #[test]
    fn test_scast_fold() {
        let context = Context::new();
        let quantized_type = parse_type("tensor<4x!quant.uniform<i8:f32, 0.5>>");
        let storage_type = parse_type("tensor<4xi8>");
        let block = context.block(&[(quantized_type.clone(), Location::unknown())]);
        let input = block.argument(0).unwrap();
        let to_storage = scast(input, storage_type.clone(), Location::unknown());
        let to_quantized = scast(to_storage.output().unwrap(), quantized_type.clone(), Location::unknown());
        assert_eq!(to_storage.verify(), Ok(()));
        assert_eq!(to_quantized.verify(), Ok(()));
        assert_eq!(to_quantized.fold(), Some(input));
        assert_eq!(to_quantized.operation().fold(), Some(input));
        assert_eq!(QuantDialect.fold_operation(to_quantized.operation()), Some(input));

        // The producer of the operand of the first cast is a block argument.
        assert_eq!(to_storage.fold(), None);

        // Casting back to a quantized type with different parameters does not fold.
        let other_quantized_type = parse_type("tensor<4x!quant.uniform<i8:f32, 0.25>>");
        let to_other = scast(to_storage.output().unwrap(), other_quantized_type, Location::unknown());
        assert_eq!(to_other.verify(), Ok(()));
        assert_eq!(to_other.fold(), None);

        // Only storage casts of storage casts fold.
        let float_input = context.block(&[(parse_type("tensor<4xf32>"), Location::unknown())]).argument(0).unwrap();
        let quantized = qcast(float_input, quantized_type.clone(), Location::unknown());
        let storage = scast(quantized.output().unwrap(), storage_type, Location::unknown());
        assert_eq!(storage.fold(), None);
        assert_eq!(quantized.operation().fold(), None);
    }

    #[test]
    fn test_cast_verification() {
        let context = Context::new();
        let block = context.block(&[
            (parse_type("tensor<4xf32>"), Location::unknown()),
            (parse_type("tensor<4x!quant.uniform<u8:f32, 0.5:128>>"), Location::unknown()),
            (parse_type("tensor<4xi8>"), Location::unknown()),
        ]);
        let float_input = block.argument(0).unwrap();
        let quantized_input = block.argument(1).unwrap();
        let storage_input = block.argument(2).unwrap();

        let valid = qcast(float_input, parse_type("tensor<4x!quant.uniform<i8:f32, 0.5>>"), Location::unknown());
        assert_eq!(valid.verify(), Ok(()));
        let invalid = qcast(float_input, parse_type("tensor<4x!quant.uniform<i8:f16, 0.5>>"), Location::unknown());
        assert_eq!(
            invalid.verify(),
            Err(VerificationErrorKind::InvalidQuantizeCast {
                input_type: "tensor<4xf32>".to_string(),
                output_type: "tensor<4x!quant.uniform<i8:f16, 5.000000e-01>>".to_string(),
            }),
        );
        let invalid = qcast(float_input, parse_type("tensor<8x!quant.uniform<i8:f32, 0.5>>"), Location::unknown());
        assert!(invalid.verify().is_err());

        let valid = dcast(quantized_input, parse_type("tensor<4xf32>"), Location::unknown());
        assert_eq!(valid.verify(), Ok(()));
        let invalid = dcast(quantized_input, parse_type("tensor<4xf16>"), Location::unknown());
        assert_eq!(
            invalid.verify(),
            Err(VerificationErrorKind::InvalidDequantizeCast {
                input_type: "tensor<4x!quant.uniform<u8:f32, 5.000000e-01:128>>".to_string(),
                output_type: "tensor<4xf16>".to_string(),
            }),
        );

        let valid = scast(quantized_input, parse_type("tensor<4xi8>"), Location::unknown());
        assert_eq!(valid.verify(), Ok(()));
        let valid = scast(storage_input, parse_type("tensor<4x!quant.uniform<i8:f32, 0.5>>"), Location::unknown());
        assert_eq!(valid.verify(), Ok(()));
        let invalid = scast(float_input, parse_type("tensor<4xi8>"), Location::unknown());
        assert_eq!(
            invalid.verify(),
            Err(VerificationErrorKind::InvalidStorageCast {
                input_type: "tensor<4xf32>".to_string(),
                output_type: "tensor<4xi8>".to_string(),
            }),
        );
        let invalid = scast(quantized_input, parse_type("tensor<4xi16>"), Location::unknown());
        assert!(invalid.verify().is_err());
    }

    #[test]
    fn test_reference_operations() {
        let context = Context::new();
        let block = context.block(&[(parse_type("tensor<4xf32>"), Location::unknown())]);
        let input = block.argument(0).unwrap();

        let stats_ref = statistics_ref(input, "conv/weights", Location::unknown());
        assert_eq!(stats_ref.verify(), Ok(()));
        assert_eq!(stats_ref.input(), Some(input));
        assert_eq!(stats_ref.stats_key(), Some("conv/weights".to_string()));
        assert_eq!(stats_ref.operation().result_types(), vec![input.r#type()]);

        let coupled_ref = coupled_ref(input, "shared", Location::unknown());
        assert_eq!(coupled_ref.verify(), Ok(()));
        assert_eq!(coupled_ref.input(), Some(input));
        assert_eq!(coupled_ref.coupled_key(), Some("shared".to_string()));
        coupled_ref.operation().remove_attribute(COUPLED_KEY_ATTRIBUTE);
        assert_eq!(
            coupled_ref.verify(),
            Err(VerificationErrorKind::MissingAttribute { name: COUPLED_KEY_ATTRIBUTE.to_string() }),
        );

        let operation = OperationBuilder::new(StatisticsRefOperation::NAME, Location::unknown())
            .add_operand(input)
            .add_result(parse_type("tensor<4xf16>"))
            .add_attribute(STATS_KEY_ATTRIBUTE, "key")
            .build(&context);
        assert_eq!(
            operation.verify().map_err(|error| error.kind),
            Err(VerificationErrorKind::OperandAndResultTypeMismatch),
        );
    }
}
