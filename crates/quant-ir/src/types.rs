use std::fmt::Display;

use crate::{FloatType, IntegerType, QuantizedType, Size, TensorType, UnrankedTensorType, VectorType};

/// Each value in the IR has a [`Type`]. The set of types is closed: builtin scalar types, builtin container (i.e.,
/// _shaped_) types, and the quantized types of the [`quant`](crate::dialects::quant) dialect. Code that inspects
/// types is expected to match on this enum exhaustively, so that adding a new kind of type surfaces every place
/// that needs to handle it.
///
/// Types have value semantics: two types are equal if and only if they are structurally equal, and the
/// [`Display`] implementation renders them using the MLIR textual syntax.
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/LangRef/#type-system) for more information.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Integer(IntegerType),
    Float(FloatType),

    /// Platform-dependent integer type that is used for sizes and indices.
    Index,

    /// Unit type.
    None,

    Tensor(TensorType),
    UnrankedTensor(UnrankedTensorType),
    Vector(VectorType),
    Quantized(QuantizedType),
}

impl Type {
    /// Returns `true` if this is a builtin floating-point [`Type`].
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns `true` if this is a builtin integer [`Type`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns `true` if this is a ranked or unranked tensor [`Type`].
    pub fn is_tensor(&self) -> bool {
        matches!(self, Self::Tensor(_) | Self::UnrankedTensor(_))
    }

    /// Returns `true` if this is a container [`Type`] (i.e., a tensor or a vector).
    pub fn is_shaped(&self) -> bool {
        matches!(self, Self::Tensor(_) | Self::UnrankedTensor(_) | Self::Vector(_))
    }

    /// Returns `true` if this is a [`QuantizedType`].
    pub fn is_quantized(&self) -> bool {
        matches!(self, Self::Quantized(_))
    }

    /// Returns the element [`Type`] of this type if it is a container type, and [`None`] otherwise.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Self::Tensor(tensor_type) => Some(tensor_type.element_type()),
            Self::UnrankedTensor(tensor_type) => Some(tensor_type.element_type()),
            Self::Vector(vector_type) => Some(vector_type.element_type()),
            Self::Integer(_) | Self::Float(_) | Self::Index | Self::None | Self::Quantized(_) => None,
        }
    }

    /// Returns the element [`Type`] of this type if it is a container type, and the type itself otherwise.
    pub fn element_type_or_self(&self) -> &Type {
        self.element_type().unwrap_or(self)
    }

    /// Returns the shape of this type if it is a ranked container type, and [`None`] otherwise (i.e., for scalar
    /// types and for unranked tensors). Scalable vector dimensions are reported as [`Size::Dynamic`].
    pub fn shape(&self) -> Option<Vec<Size>> {
        match self {
            Self::Tensor(tensor_type) => Some(tensor_type.shape().to_vec()),
            Self::Vector(vector_type) => Some(vector_type.shape()),
            Self::UnrankedTensor(_)
            | Self::Integer(_)
            | Self::Float(_)
            | Self::Index
            | Self::None
            | Self::Quantized(_) => None,
        }
    }

    /// Returns the rank of this type if it is a ranked container type, and [`None`] otherwise.
    pub fn rank(&self) -> Option<usize> {
        self.shape().map(|shape| shape.len())
    }

    /// Returns a copy of this type with its element type replaced by `element_type` if this is a container type.
    /// For scalar types, `element_type` itself is returned.
    pub fn with_element_type(&self, element_type: Type) -> Type {
        match self {
            Self::Tensor(tensor_type) => Self::Tensor(tensor_type.with_element_type(element_type)),
            Self::UnrankedTensor(tensor_type) => Self::UnrankedTensor(tensor_type.with_element_type(element_type)),
            Self::Vector(vector_type) => Self::Vector(vector_type.with_element_type(element_type)),
            Self::Integer(_) | Self::Float(_) | Self::Index | Self::None | Self::Quantized(_) => element_type,
        }
    }
}

impl From<IntegerType> for Type {
    fn from(value: IntegerType) -> Self {
        Self::Integer(value)
    }
}

impl From<FloatType> for Type {
    fn from(value: FloatType) -> Self {
        Self::Float(value)
    }
}

impl From<TensorType> for Type {
    fn from(value: TensorType) -> Self {
        Self::Tensor(value)
    }
}

impl From<UnrankedTensorType> for Type {
    fn from(value: UnrankedTensorType) -> Self {
        Self::UnrankedTensor(value)
    }
}

impl From<VectorType> for Type {
    fn from(value: VectorType) -> Self {
        Self::Vector(value)
    }
}

impl From<QuantizedType> for Type {
    fn from(value: QuantizedType) -> Self {
        Self::Quantized(value)
    }
}

impl Display for Type {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(integer_type) => write!(formatter, "{integer_type}"),
            Self::Float(float_type) => write!(formatter, "{float_type}"),
            Self::Index => write!(formatter, "index"),
            Self::None => write!(formatter, "none"),
            Self::Tensor(tensor_type) => write!(formatter, "{tensor_type}"),
            Self::UnrankedTensor(tensor_type) => write!(formatter, "{tensor_type}"),
            Self::Vector(vector_type) => write!(formatter, "{vector_type}"),
            Self::Quantized(quantized_type) => write!(formatter, "{quantized_type}"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use crate::{QuantizedStorage, UniformQuantizedType, VectorTypeDimension};

    use super::*;

    /// Helper for parsing types in tests.
    pub(crate) fn parse_type(source: &str) -> Type {
        source.parse().unwrap_or_else(|error| panic!("failed to parse type '{source}': {error}"))
    }

    #[test]
    fn test_type_kinds() {
        let f32_type = Type::from(FloatType::Float32);
        let tensor_type = Type::from(TensorType::new(&[Size::Static(4)], f32_type.clone()));
        let unranked_tensor_type = Type::from(UnrankedTensorType::new(f32_type.clone()));
        let vector_type = Type::from(VectorType::new(&[VectorTypeDimension::Fixed(4)], f32_type.clone()).unwrap());

        assert!(f32_type.is_float());
        assert!(!f32_type.is_shaped());
        assert!(Type::from(IntegerType::signless(8)).is_integer());
        assert!(tensor_type.is_tensor());
        assert!(tensor_type.is_shaped());
        assert!(unranked_tensor_type.is_tensor());
        assert!(!vector_type.is_tensor());
        assert!(vector_type.is_shaped());
    }

    #[test]
    fn test_type_element_type() {
        let f32_type = Type::from(FloatType::Float32);
        let tensor_type = Type::from(TensorType::new(&[Size::Static(4)], f32_type.clone()));
        let unranked_tensor_type = Type::from(UnrankedTensorType::new(f32_type.clone()));
        assert_eq!(f32_type.element_type(), None);
        assert_eq!(f32_type.element_type_or_self(), &f32_type);
        assert_eq!(tensor_type.element_type(), Some(&f32_type));
        assert_eq!(unranked_tensor_type.element_type(), Some(&f32_type));
        assert_eq!(Type::Index.element_type(), None);
    }

    #[test]
    fn test_type_shape() {
        assert_eq!(parse_type("tensor<4x?xf32>").shape(), Some(vec![Size::Static(4), Size::Dynamic]));
        assert_eq!(parse_type("tensor<f32>").shape(), Some(vec![]));
        assert_eq!(parse_type("vector<2x[4]xf32>").shape(), Some(vec![Size::Static(2), Size::Dynamic]));
        assert_eq!(parse_type("tensor<*xf32>").shape(), None);
        assert_eq!(parse_type("f32").shape(), None);
        assert_eq!(parse_type("tensor<4x8x3xf32>").rank(), Some(3));
    }

    #[test]
    fn test_type_with_element_type() {
        let i8_type = Type::from(IntegerType::signless(8));
        assert_eq!(parse_type("tensor<4x?xf32>").with_element_type(i8_type.clone()), parse_type("tensor<4x?xi8>"));
        assert_eq!(parse_type("vector<4xf32>").with_element_type(i8_type.clone()), parse_type("vector<4xi8>"));
        assert_eq!(parse_type("f32").with_element_type(i8_type.clone()), i8_type);
    }

    #[test]
    fn test_type_equality() {
        assert_eq!(parse_type("tensor<?x?xf32>"), parse_type("tensor<?x?xf32>"));
        assert_ne!(parse_type("tensor<?x?xf32>"), parse_type("tensor<?x4xf32>"));
        assert_ne!(parse_type("tensor<4xf32>"), parse_type("vector<4xf32>"));
        assert_ne!(parse_type("i8"), parse_type("ui8"));
    }

    #[test]
    fn test_type_display() {
        let quantized_type =
            UniformQuantizedType::new(QuantizedStorage::signed(8), FloatType::Float32, 0.5, 5).unwrap();
        assert_eq!(Type::Index.to_string(), "index");
        assert_eq!(Type::None.to_string(), "none");
        assert_eq!(Type::from(IntegerType::unsigned(8)).to_string(), "ui8");
        assert_eq!(
            Type::from(QuantizedType::Uniform(quantized_type)).to_string(),
            "!quant.uniform<i8:f32, 5.000000e-01:5>",
        );
    }
}
