use std::fmt::Display;

use crate::Type;

use super::shaped::Size;

/// Represents the size of a [`VectorType`] dimension. Refer to the documentation of [`VectorType`] for what kinds of
/// dimensions sizes the different variants of this enum represent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VectorTypeDimension {
    Fixed(usize),
    Scalable(usize),
}

impl VectorTypeDimension {
    /// Returns the [`Size`] of this dimension. Scalable dimensions are only known at runtime and are thus reported
    /// as [`Size::Dynamic`].
    pub fn size(&self) -> Size {
        match self {
            Self::Fixed(size) => Size::Static(*size),
            Self::Scalable(_) => Size::Dynamic,
        }
    }
}

impl Display for VectorTypeDimension {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(size) => write!(formatter, "{size}"),
            Self::Scalable(size) => write!(formatter, "[{size}]"),
        }
    }
}

/// Built-in [`Type`] that represents a multidimensional SIMD vector type.
///
/// The dimensions of a vector type can be fixed-length, scalable-length, or a combination of the two. Scalable
/// dimensions are dimensions whose size is dynamic, but always a multiple of a statically-known factor. Scalable
/// dimensions are rendered as that factor surrounded by square brackets.
///
/// # Examples
///
/// ```text
/// vector<3x42xi32>     => 2D fixed-length vector with 3*42=126 i32 elements.
/// vector<[4]xf32>      => 1D scalable-length vector with 4*N f32 elements.
/// vector<4x[4]xf32>    => 2D mixed-length vector with 4 scalable vectors with 4*N f32 elements each.
/// ```
///
/// Refer to the [MLIR documentation](https://mlir.llvm.org/docs/Dialects/Builtin/#vectortype) for more information.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorType {
    dimensions: Vec<VectorTypeDimension>,
    element_type: Box<Type>,
}

impl VectorType {
    /// Constructs a new [`VectorType`]. Returns [`None`] if `dimensions` is empty, since vectors must have at least
    /// one dimension.
    pub fn new(dimensions: &[VectorTypeDimension], element_type: Type) -> Option<Self> {
        if dimensions.is_empty() {
            return None;
        }
        Some(Self { dimensions: dimensions.to_vec(), element_type: Box::new(element_type) })
    }

    /// Returns the [`VectorTypeDimension`]s of this [`VectorType`].
    pub fn dimensions(&self) -> &[VectorTypeDimension] {
        &self.dimensions
    }

    /// Returns the rank of this [`VectorType`] (i.e., the number of dimensions it has).
    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns the shape of this [`VectorType`], with scalable dimensions reported as [`Size::Dynamic`].
    pub fn shape(&self) -> Vec<Size> {
        self.dimensions.iter().map(VectorTypeDimension::size).collect()
    }

    /// Returns `true` if any of the dimensions of this [`VectorType`] is scalable.
    pub fn is_scalable(&self) -> bool {
        self.dimensions.iter().any(|dimension| matches!(dimension, VectorTypeDimension::Scalable(_)))
    }

    pub fn element_type(&self) -> &Type {
        &self.element_type
    }

    /// Returns a new [`VectorType`] with the same dimensions as this one, but with the provided element type.
    pub fn with_element_type(&self, element_type: Type) -> Self {
        Self { dimensions: self.dimensions.clone(), element_type: Box::new(element_type) }
    }
}

impl Display for VectorType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "vector<")?;
        self.dimensions.iter().try_for_each(|dimension| write!(formatter, "{dimension}x"))?;
        write!(formatter, "{}>", self.element_type)
    }
}
