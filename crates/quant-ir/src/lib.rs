//! A small intermediate representation for quantization-aware tensor programs, modeled after the MLIR `quant`
//! dialect. It provides builtin and quantized types, attributes, operations with their verifiers and folders, and a
//! minimal pass infrastructure for verifying and canonicalizing blocks of operations.

pub mod attributes;
pub mod blocks;
pub mod context;
pub mod diagnostics;
pub mod dialects;
pub mod errors;
pub mod locations;
pub mod operations;
pub mod parser;
pub mod passes;
pub mod support;
pub mod types;
pub mod values;

pub use self::attributes::*;
pub use self::blocks::*;
pub use self::context::*;
pub use self::diagnostics::*;
pub use self::dialects::Dialect;
pub use self::dialects::builtin::{
    DenseElementsAttribute, DenseElementsValues, FloatAttribute, FloatType, IntegerAttribute, IntegerType, Signedness,
    Size, TensorType, UnrankedTensorType, VectorType, VectorTypeDimension, round_to_float_type, static_element_count,
};
pub use self::dialects::quant::{
    AnyQuantizedType, CalibratedQuantizedType, MAX_STORAGE_BITS, QuantDialect, QuantizationSpec, QuantizedStorage,
    QuantizedType, QuantizedTypeError, UniformQuantizedPerAxisType, UniformQuantizedType, is_valid_spec,
};
pub use self::errors::*;
pub use self::locations::*;
pub use self::operations::*;
pub use self::parser::ParseError;
pub use self::passes::{CanonicalizerPass, ClosurePass, GreedyRewriteConfig, Pass, PassManager, VerifierPass};
pub use self::support::*;
pub use self::types::*;
pub use self::values::*;
