//! The `quant` dialect offers a framework for defining and manipulating quantized values. Central to this framework
//! are the [`QuantizedType`]s (e.g., `!quant.uniform`), which describe how values of a floating-point "expressed"
//! type are approximated by values of a lower bit-width integer "storage" type. This dialect also provides a suite of
//! operations for converting between those representations, for recording calibration statistics, and for
//! annotating regions of operations with the quantization specifications of their inputs and outputs.
//!
//! Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/Dialects/QuantDialect/) for more information.

use crate::{Dialect, OpRef, OperationRef, ValueRef, VerificationErrorKind};

pub mod operations;
pub mod specs;
pub mod types;

pub use operations::*;
pub use specs::*;
pub use types::*;

const QUANT_OPERATION_NAMES: &[&str] = &[
    RegionOperation::NAME,
    StatisticsOperation::NAME,
    SCastOperation::NAME,
    QCastOperation::NAME,
    DCastOperation::NAME,
    StatisticsRefOperation::NAME,
    CoupledRefOperation::NAME,
];

/// The `quant` [`Dialect`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuantDialect;

impl Dialect for QuantDialect {
    fn namespace(&self) -> &'static str {
        "quant"
    }

    fn operation_names(&self) -> &'static [&'static str] {
        QUANT_OPERATION_NAMES
    }

    fn verify_operation<'c>(&self, operation: OperationRef<'c>) -> Result<(), VerificationErrorKind> {
        if let Some(region) = operation.cast::<RegionOperation>() {
            region.verify()
        } else if let Some(statistics) = operation.cast::<StatisticsOperation>() {
            statistics.verify()
        } else if let Some(scast) = operation.cast::<SCastOperation>() {
            scast.verify()
        } else if let Some(qcast) = operation.cast::<QCastOperation>() {
            qcast.verify()
        } else if let Some(dcast) = operation.cast::<DCastOperation>() {
            dcast.verify()
        } else if let Some(statistics_ref) = operation.cast::<StatisticsRefOperation>() {
            statistics_ref.verify()
        } else if let Some(coupled_ref) = operation.cast::<CoupledRefOperation>() {
            coupled_ref.verify()
        } else {
            Err(VerificationErrorKind::UnregisteredOperation)
        }
    }

    fn fold_operation<'c>(&self, operation: OperationRef<'c>) -> Option<ValueRef<'c>> {
        operation.cast::<SCastOperation>()?.fold()
    }
}
