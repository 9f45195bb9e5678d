use std::fmt::Display;

use crate::FloatType;
use crate::support::format_float;

/// Rounds `value` to the precision of `float_type`. Values of the 16-bit and 32-bit types are rounded to their
/// storage precision. Narrower formats are kept at `f64` precision.
pub fn round_to_float_type(value: f64, float_type: FloatType) -> f64 {
    match float_type {
        FloatType::Float16 => half::f16::from_f64(value).to_f64(),
        FloatType::BFloat16 => half::bf16::from_f64(value).to_f64(),
        FloatType::Float32 | FloatType::FloatTF32 => value as f32 as f64,
        _ => value,
    }
}

/// Built-in attribute that holds a floating-point constant of a [`FloatType`]. The value is rounded to the precision
/// of its type on construction, so two attributes compare equal if and only if they hold the same representable
/// value.
///
/// # Examples
///
/// ```text
/// 5.000000e-01 : f32
/// -1.000000e+00 : bf16
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FloatAttribute {
    value: f64,
    float_type: FloatType,
}

impl FloatAttribute {
    pub fn new(float_type: FloatType, value: f64) -> Self {
        Self { value: round_to_float_type(value, float_type), float_type }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn float_type(&self) -> FloatType {
        self.float_type
    }
}

impl Display for FloatAttribute {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} : {}", format_float(self.value), self.float_type)
    }
}
