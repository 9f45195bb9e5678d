use thiserror::Error;

use crate::Location;

/// Reason for which an operation failed verification. The [`Display`](std::fmt::Display) rendering of each variant
/// is the reason only. [`VerificationError`] prefixes it with the name of the offending operation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum VerificationErrorKind {
    #[error("is not a registered operation")]
    UnregisteredOperation,

    #[error("expected {expected_count} operands, but found {actual_count}")]
    OperandCountMismatch { expected_count: usize, actual_count: usize },

    #[error("expected {expected_count} results, but found {actual_count}")]
    ResultCountMismatch { expected_count: usize, actual_count: usize },

    #[error("requires attribute '{name}'")]
    MissingAttribute { name: String },

    #[error("attribute '{name}' failed to satisfy constraint: {constraint}")]
    InvalidAttribute { name: String, constraint: &'static str },

    #[error("requires the same type for all operands and results")]
    OperandAndResultTypeMismatch,

    #[error("has unmatched operands/results number and spec attributes number")]
    UnmatchedSpecCount,

    #[error("has incompatible specification {specification} and input type {input_type}")]
    IncompatibleInputSpecification { specification: String, input_type: String },

    #[error("has incompatible specification {specification} and output type {output_type}")]
    IncompatibleOutputSpecification { specification: String, output_type: String },

    #[error("arg needs to be tensor type.")]
    NonTensorArgument,

    #[error("layerStats must have a floating point element type")]
    NonFloatLayerStats,

    #[error("layerStats must have shape [2]")]
    InvalidLayerStatsShape,

    #[error("axis must be specified for axisStats")]
    MissingAxis,

    #[error("axisStats must have a floating point element type")]
    NonFloatAxisStats,

    #[error("axisStats must have shape [N,2] where N = the slice size defined by the axis dim")]
    InvalidAxisStatsShape,

    #[error("result type {output_type} is not a quantization of input type {input_type}")]
    InvalidQuantizeCast { input_type: String, output_type: String },

    #[error("result type {output_type} is not a dequantization of input type {input_type}")]
    InvalidDequantizeCast { input_type: String, output_type: String },

    #[error("input type {input_type} and result type {output_type} must be a quantized type and its storage type")]
    InvalidStorageCast { input_type: String, output_type: String },
}

/// Error returned when an operation fails verification. It carries the name and the [`Location`] of the offending
/// operation along with the [`VerificationErrorKind`] describing the violated constraint, and it is rendered using
/// the MLIR convention for operation errors (e.g., `'quant.stats' op layerStats must have shape [2]`).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("'{operation_name}' op {kind}")]
pub struct VerificationError {
    pub operation_name: String,
    pub location: Location,
    pub kind: VerificationErrorKind,
}

/// Error returned when running a [`Pass`](crate::Pass) or a [`PassManager`](crate::PassManager).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PassError {
    #[error("verification failed for {} operation(s): {}", .errors.len(), render_errors(.errors))]
    VerificationFailed { errors: Vec<VerificationError> },

    #[error("pass '{pass_name}' failed: {message}")]
    PassFailed { pass_name: String, message: String },
}

fn render_errors(errors: &[VerificationError]) -> String {
    errors.iter().map(|error| error.to_string()).collect::<Vec<_>>().join("; ")
}
