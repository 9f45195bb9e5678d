use std::fmt::Display;

use crate::support::format_float;
use crate::{AttributeError, Size, Type, round_to_float_type, static_element_count};

/// Payload of a [`DenseElementsAttribute`], stored in row-major order. A payload with a single value represents a
/// _splat_ (i.e., all elements have that value).
#[derive(Clone, Debug, PartialEq)]
pub enum DenseElementsValues {
    Integer(Vec<i64>),
    Float(Vec<f64>),
}

impl DenseElementsValues {
    fn len(&self) -> usize {
        match self {
            Self::Integer(values) => values.len(),
            Self::Float(values) => values.len(),
        }
    }
}

/// Built-in attribute that holds a constant tensor or vector with a statically known shape and an integer or
/// floating-point element type. This is the attribute kind that calibration statistics are recorded with (e.g., a
/// `tensor<2xf32>` holding a `[min, max]` pair).
///
/// Dense elements attributes are normalized on construction: floating-point values are rounded to the precision of
/// the element type and payloads whose values are all equal are stored as splats. This mirrors how MLIR uniques
/// these attributes, so structural equality matches MLIR attribute equality.
///
/// # Examples
///
/// ```text
/// dense<[-1.000000e+00, 1.000000e+00]> : tensor<2xf32>
/// dense<[[1, 2], [3, 4]]> : tensor<2x2xi32>
/// dense<0.000000e+00> : tensor<3x2xf32>
/// ```
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/Dialects/Builtin/#denseintorfpelementsattr)
/// for more information.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseElementsAttribute {
    shaped_type: Type,
    values: DenseElementsValues,
}

impl DenseElementsAttribute {
    /// Constructs a new [`DenseElementsAttribute`] with a floating-point payload. `shaped_type` must be a
    /// statically-shaped tensor or vector type with a floating-point element type, and `values` must contain either
    /// one value per element or a single splat value.
    pub fn floats(shaped_type: Type, values: &[f64]) -> Result<Self, AttributeError> {
        let element_count = Self::validate_shaped_type(&shaped_type, values.len())?;
        let float_type = match shaped_type.element_type() {
            Some(Type::Float(float_type)) => *float_type,
            Some(element_type) => {
                return Err(AttributeError::DenseElementValueKindMismatch {
                    value_kind: "floating-point",
                    element_type: element_type.clone(),
                });
            }
            None => return Err(AttributeError::InvalidDenseElementsType { shaped_type }),
        };
        let mut values = values.iter().map(|value| round_to_float_type(*value, float_type)).collect::<Vec<_>>();
        if element_count > 1 && values.iter().all(|value| value.to_bits() == values[0].to_bits()) {
            values.truncate(1);
        }
        Ok(Self { shaped_type, values: DenseElementsValues::Float(values) })
    }

    /// Constructs a new [`DenseElementsAttribute`] with an integer payload. `shaped_type` must be a statically-shaped
    /// tensor or vector type with an integer element type that can represent all of `values`.
    pub fn integers(shaped_type: Type, values: &[i64]) -> Result<Self, AttributeError> {
        let element_count = Self::validate_shaped_type(&shaped_type, values.len())?;
        match shaped_type.element_type() {
            Some(Type::Integer(integer_type)) => {
                if let Some(value) = values.iter().find(|value| !integer_type.can_represent(**value)) {
                    return Err(AttributeError::IntegerValueOutOfRange {
                        value: *value,
                        attribute_type: Type::Integer(*integer_type),
                    });
                }
            }
            Some(element_type) => {
                return Err(AttributeError::DenseElementValueKindMismatch {
                    value_kind: "integer",
                    element_type: element_type.clone(),
                });
            }
            None => return Err(AttributeError::InvalidDenseElementsType { shaped_type }),
        }
        let mut values = values.to_vec();
        if element_count > 1 && values.iter().all(|value| *value == values[0]) {
            values.truncate(1);
        }
        Ok(Self { shaped_type, values: DenseElementsValues::Integer(values) })
    }

    /// Validates `shaped_type` and the number of provided values against it, returning the element count.
    fn validate_shaped_type(shaped_type: &Type, value_count: usize) -> Result<usize, AttributeError> {
        let shape = match shaped_type {
            Type::Tensor(_) => shaped_type.shape(),
            Type::Vector(vector_type) if !vector_type.is_scalable() => shaped_type.shape(),
            _ => None,
        };
        let element_count = shape
            .and_then(|shape| static_element_count(&shape))
            .ok_or_else(|| AttributeError::InvalidDenseElementsType { shaped_type: shaped_type.clone() })?;
        match shaped_type.element_type() {
            Some(Type::Integer(_) | Type::Float(_)) => {}
            Some(element_type) => {
                return Err(AttributeError::InvalidDenseElementType { element_type: element_type.clone() });
            }
            None => return Err(AttributeError::InvalidDenseElementsType { shaped_type: shaped_type.clone() }),
        }
        if value_count == element_count || (value_count == 1 && element_count > 0) {
            Ok(element_count)
        } else {
            Err(AttributeError::DenseElementCountMismatch { expected_count: element_count, actual_count: value_count })
        }
    }

    /// Returns the tensor or vector [`Type`] of this attribute.
    pub fn shaped_type(&self) -> &Type {
        &self.shaped_type
    }

    /// Returns the element [`Type`] of this attribute.
    pub fn element_type(&self) -> &Type {
        self.shaped_type.element_type_or_self()
    }

    /// Returns the shape of this attribute. All dimensions are guaranteed to be [`Size::Static`].
    pub fn shape(&self) -> Vec<Size> {
        self.shaped_type.shape().unwrap_or_default()
    }

    /// Returns the number of elements of this attribute.
    pub fn element_count(&self) -> usize {
        static_element_count(&self.shape()).unwrap_or(0)
    }

    /// Returns `true` if all elements of this attribute have the same value and are stored as a single value.
    pub fn is_splat(&self) -> bool {
        self.values.len() == 1
    }

    /// Returns the (potentially splat) payload of this attribute.
    pub fn values(&self) -> &DenseElementsValues {
        &self.values
    }

    /// Returns all element values of this attribute in row-major order (with splats expanded), or [`None`] if this
    /// attribute does not hold floating-point values.
    pub fn float_values(&self) -> Option<Vec<f64>> {
        match &self.values {
            DenseElementsValues::Float(values) if values.len() == 1 => Some(vec![values[0]; self.element_count()]),
            DenseElementsValues::Float(values) => Some(values.clone()),
            DenseElementsValues::Integer(_) => None,
        }
    }

    /// Returns all element values of this attribute in row-major order (with splats expanded), or [`None`] if this
    /// attribute does not hold integer values.
    pub fn integer_values(&self) -> Option<Vec<i64>> {
        match &self.values {
            DenseElementsValues::Integer(values) if values.len() == 1 => Some(vec![values[0]; self.element_count()]),
            DenseElementsValues::Integer(values) => Some(values.clone()),
            DenseElementsValues::Float(_) => None,
        }
    }
}

fn write_nested(
    formatter: &mut std::fmt::Formatter<'_>,
    dimensions: &[usize],
    elements: &[String],
) -> std::fmt::Result {
    match dimensions.split_first() {
        None => elements.first().map_or(Ok(()), |element| write!(formatter, "{element}")),
        Some((_, inner_dimensions)) => {
            let chunk_size = inner_dimensions.iter().product::<usize>().max(1);
            write!(formatter, "[")?;
            for (index, chunk) in elements.chunks(chunk_size).enumerate() {
                if index > 0 {
                    write!(formatter, ", ")?;
                }
                write_nested(formatter, inner_dimensions, chunk)?;
            }
            write!(formatter, "]")
        }
    }
}

impl Display for DenseElementsAttribute {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let elements = match &self.values {
            DenseElementsValues::Integer(values) => values.iter().map(|value| value.to_string()).collect::<Vec<_>>(),
            DenseElementsValues::Float(values) => values.iter().map(|value| format_float(*value)).collect::<Vec<_>>(),
        };
        write!(formatter, "dense<")?;
        match elements.as_slice() {
            [] => {}
            [splat] => write!(formatter, "{splat}")?,
            _ => {
                let dimensions = self.shape().iter().filter_map(Size::value).collect::<Vec<_>>();
                write_nested(formatter, &dimensions, &elements)?;
            }
        }
        write!(formatter, "> : {}", self.shaped_type)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::types::tests::parse_type;

    use super::*;

    #[test]
    fn test_dense_elements_attribute_floats() {
        let attribute = DenseElementsAttribute::floats(parse_type("tensor<2xf32>"), &[-1.0, 1.0]).unwrap();
        assert_eq!(attribute.shaped_type(), &parse_type("tensor<2xf32>"));
        assert_eq!(attribute.element_type(), &parse_type("f32"));
        assert_eq!(attribute.shape(), vec![Size::Static(2)]);
        assert_eq!(attribute.element_count(), 2);
        assert!(!attribute.is_splat());
        assert_eq!(attribute.float_values(), Some(vec![-1.0, 1.0]));
        assert_eq!(attribute.integer_values(), None);

        let attribute = DenseElementsAttribute::floats(parse_type("tensor<3x2xf32>"), &[0.0]).unwrap();
        assert!(attribute.is_splat());
        assert_eq!(attribute.float_values(), Some(vec![0.0; 6]));

        // Values that are all equal are normalized to splats.
        let expanded = DenseElementsAttribute::floats(parse_type("tensor<2xf32>"), &[0.5, 0.5]).unwrap();
        let splat = DenseElementsAttribute::floats(parse_type("tensor<2xf32>"), &[0.5]).unwrap();
        assert_eq!(expanded, splat);

        // Values are rounded to the precision of the element type.
        let attribute = DenseElementsAttribute::floats(parse_type("tensor<2xbf16>"), &[1.0 / 3.0, 1.0]).unwrap();
        assert_eq!(attribute.float_values(), Some(vec![0.333984375, 1.0]));
    }

    #[test]
    fn test_dense_elements_attribute_integers() {
        let attribute = DenseElementsAttribute::integers(parse_type("tensor<2x2xi32>"), &[1, 2, 3, 4]).unwrap();
        assert_eq!(attribute.integer_values(), Some(vec![1, 2, 3, 4]));
        assert_eq!(attribute.float_values(), None);
        let attribute = DenseElementsAttribute::integers(parse_type("vector<3xi8>"), &[7]).unwrap();
        assert_eq!(attribute.integer_values(), Some(vec![7, 7, 7]));
    }

    #[test]
    fn test_dense_elements_attribute_errors() {
        assert_eq!(
            DenseElementsAttribute::floats(parse_type("tensor<?x2xf32>"), &[0.0]),
            Err(AttributeError::InvalidDenseElementsType { shaped_type: parse_type("tensor<?x2xf32>") }),
        );
        assert_eq!(
            DenseElementsAttribute::floats(parse_type("tensor<*xf32>"), &[0.0]),
            Err(AttributeError::InvalidDenseElementsType { shaped_type: parse_type("tensor<*xf32>") }),
        );
        assert_eq!(
            DenseElementsAttribute::floats(parse_type("f32"), &[0.0]),
            Err(AttributeError::InvalidDenseElementsType { shaped_type: parse_type("f32") }),
        );
        assert_eq!(
            DenseElementsAttribute::integers(parse_type("tensor<2xindex>"), &[0, 1]),
            Err(AttributeError::InvalidDenseElementType { element_type: Type::Index }),
        );
        assert_eq!(
            DenseElementsAttribute::floats(parse_type("tensor<3xf32>"), &[0.0, 1.0]),
            Err(AttributeError::DenseElementCountMismatch { expected_count: 3, actual_count: 2 }),
        );
        assert_eq!(
            DenseElementsAttribute::floats(parse_type("tensor<2xi32>"), &[0.0, 1.0]),
            Err(AttributeError::DenseElementValueKindMismatch {
                value_kind: "floating-point",
                element_type: parse_type("i32"),
            }),
        );
        assert_eq!(
            DenseElementsAttribute::integers(parse_type("tensor<2xf32>"), &[0, 1]),
            Err(AttributeError::DenseElementValueKindMismatch {
                value_kind: "integer",
                element_type: parse_type("f32"),
            }),
        );
        assert_eq!(
            DenseElementsAttribute::integers(parse_type("tensor<2xui8>"), &[0, 300]),
            Err(AttributeError::IntegerValueOutOfRange { value: 300, attribute_type: parse_type("ui8") }),
        );
    }

    #[test]
    fn test_dense_elements_attribute_display() {
        let attribute = DenseElementsAttribute::floats(parse_type("tensor<2xf32>"), &[-1.0, 1.0]).unwrap();
        assert_eq!(attribute.to_string(), "dense<[-1.000000e+00, 1.000000e+00]> : tensor<2xf32>");
        let attribute = DenseElementsAttribute::floats(parse_type("tensor<3x2xf32>"), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(
            attribute.unwrap().to_string(),
            "dense<[[0.000000e+00, 1.000000e+00], [2.000000e+00, 3.000000e+00], [4.000000e+00, 5.000000e+00]]> : \
             tensor<3x2xf32>",
        );
        let attribute = DenseElementsAttribute::floats(parse_type("tensor<3x2xf32>"), &[0.0]).unwrap();
        assert_eq!(attribute.to_string(), "dense<0.000000e+00> : tensor<3x2xf32>");
        let attribute = DenseElementsAttribute::integers(parse_type("tensor<2x2xi32>"), &[1, 2, 3, 4]).unwrap();
        assert_eq!(attribute.to_string(), "dense<[[1, 2], [3, 4]]> : tensor<2x2xi32>");
        let attribute = DenseElementsAttribute::floats(parse_type("tensor<0xf32>"), &[]).unwrap();
        assert_eq!(attribute.to_string(), "dense<> : tensor<0xf32>");
    }
}
