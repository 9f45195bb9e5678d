use std::fmt::Display;

use thiserror::Error;

use crate::support::format_string_literal;
use crate::{DenseElementsAttribute, FloatAttribute, IntegerAttribute, Type};

/// Error returned when constructing an [`Attribute`] from invalid parameters.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum AttributeError {
    #[error("integer attributes require an integer or index type, but got '{attribute_type}'")]
    InvalidIntegerAttributeType { attribute_type: Type },

    #[error("integer value {value} cannot be represented by type '{attribute_type}'")]
    IntegerValueOutOfRange { value: i64, attribute_type: Type },

    #[error("dense elements attributes require a statically-shaped tensor or vector type, but got '{shaped_type}'")]
    InvalidDenseElementsType { shaped_type: Type },

    #[error("dense elements attributes require an integer or floating-point element type, but got '{element_type}'")]
    InvalidDenseElementType { element_type: Type },

    #[error("expected {expected_count} dense element values (or a single splat value) but got {actual_count}")]
    DenseElementCountMismatch { expected_count: usize, actual_count: usize },

    #[error("{value_kind} values cannot be stored in dense elements with element type '{element_type}'")]
    DenseElementValueKindMismatch { value_kind: &'static str, element_type: Type },
}

/// [`Attribute`]s are compile-time constant values that are attached to operations (e.g., the quantization specs of
/// a `quant.region` operation, or the calibration statistics of a `quant.stats` operation). Like [`Type`]s, the set
/// of attribute kinds is closed and attributes have value semantics.
///
/// # Examples
///
/// The following are examples of [`Attribute`]s represented using their [`Display`] rendering:
///
/// ```text
/// !quant.uniform<i8:f32, 5.000000e-01>                        => Type attribute.
/// 1 : i64                                                     => Integer attribute.
/// 5.000000e-01 : f32                                          => Float attribute.
/// "conv"                                                      => String attribute.
/// [f32, i8]                                                   => Array attribute.
/// dense<[-1.000000e+00, 1.000000e+00]> : tensor<2xf32>        => Dense elements attribute.
/// ```
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/LangRef/#attributes) for more information.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    Type(Type),
    Integer(IntegerAttribute),
    Float(FloatAttribute),
    String(String),
    Boolean(bool),
    Unit,
    Array(Vec<Attribute>),
    DenseElements(DenseElementsAttribute),
}

impl Attribute {
    /// Returns the [`Type`] payload of this attribute if it is a type attribute, and [`None`] otherwise.
    pub fn as_type(&self) -> Option<&Type> {
        match self {
            Self::Type(attribute_type) => Some(attribute_type),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&IntegerAttribute> {
        match self {
            Self::Integer(integer) => Some(integer),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&FloatAttribute> {
        match self {
            Self::Float(float) => Some(float),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Attribute]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_dense_elements(&self) -> Option<&DenseElementsAttribute> {
        match self {
            Self::DenseElements(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns a short human-readable description of the kind of this [`Attribute`] (used in error messages).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Type(_) => "type attribute",
            Self::Integer(_) => "integer attribute",
            Self::Float(_) => "float attribute",
            Self::String(_) => "string attribute",
            Self::Boolean(_) => "boolean attribute",
            Self::Unit => "unit attribute",
            Self::Array(_) => "array attribute",
            Self::DenseElements(_) => "dense elements attribute",
        }
    }
}

impl From<Type> for Attribute {
    fn from(value: Type) -> Self {
        Self::Type(value)
    }
}

impl From<IntegerAttribute> for Attribute {
    fn from(value: IntegerAttribute) -> Self {
        Self::Integer(value)
    }
}

impl From<FloatAttribute> for Attribute {
    fn from(value: FloatAttribute) -> Self {
        Self::Float(value)
    }
}

impl From<DenseElementsAttribute> for Attribute {
    fn from(value: DenseElementsAttribute) -> Self {
        Self::DenseElements(value)
    }
}

impl From<bool> for Attribute {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Attribute>> for Attribute {
    fn from(value: Vec<Attribute>) -> Self {
        Self::Array(value)
    }
}

impl Display for Attribute {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(attribute_type) => write!(formatter, "{attribute_type}"),
            Self::Integer(integer) => write!(formatter, "{integer}"),
            Self::Float(float) => write!(formatter, "{float}"),
            Self::String(string) => write!(formatter, "{}", format_string_literal(string)),
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Unit => write!(formatter, "unit"),
            Self::Array(elements) => {
                write!(formatter, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                write!(formatter, "]")
            }
            Self::DenseElements(elements) => write!(formatter, "{elements}"),
        }
    }
}
