use std::fmt::Display;

use crate::{AttributeError, IntegerType, Type};

/// Built-in attribute that holds an integer constant of an integer or `index` [`Type`].
///
/// # Examples
///
/// ```text
/// 1 : i64
/// -3 : i32
/// 42 : index
/// ```
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/Dialects/Builtin/#integerattr) for more
/// information.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegerAttribute {
    value: i64,
    attribute_type: Type,
}

impl IntegerAttribute {
    /// Constructs a new [`IntegerAttribute`]. Returns an error if `attribute_type` is not an integer or `index` type,
    /// or if `value` cannot be represented by it.
    pub fn new(value: i64, attribute_type: Type) -> Result<Self, AttributeError> {
        match &attribute_type {
            Type::Integer(integer_type) if !integer_type.can_represent(value) => {
                Err(AttributeError::IntegerValueOutOfRange { value, attribute_type })
            }
            Type::Integer(_) | Type::Index => Ok(Self { value, attribute_type }),
            _ => Err(AttributeError::InvalidIntegerAttributeType { attribute_type }),
        }
    }

    /// Constructs a new [`IntegerAttribute`] with type `i64`.
    pub fn i64(value: i64) -> Self {
        Self { value, attribute_type: Type::Integer(IntegerType::signless(64)) }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn attribute_type(&self) -> &Type {
        &self.attribute_type
    }
}

impl Display for IntegerAttribute {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} : {}", self.value, self.attribute_type)
    }
}
