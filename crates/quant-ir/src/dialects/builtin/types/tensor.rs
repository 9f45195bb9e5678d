use std::fmt::Display;

use crate::Type;

use super::shaped::{Size, static_element_count, write_shape};

/// Built-in [`Type`] that represents a multidimensional array with a fixed rank, a (potentially dynamic) [`Size`]
/// for each dimension, and an element [`Type`]. Rank-0 tensors are scalars in tensor form.
///
/// # Examples
///
/// The following are examples of [`TensorType`]s represented using their [`Display`] rendering:
///
/// ```text
/// tensor<f32>          => 0D tensor (i.e., a scalar).
/// tensor<4x8x3xf32>    => 3D tensor with a static shape.
/// tensor<?x?xf32>      => 2D tensor with dynamic sizes for both dimensions.
/// tensor<4x!quant.uniform<i8:f32, 5.000000e-01>>  => 1D tensor of quantized values.
/// ```
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/Dialects/Builtin/#rankedtensortype) for
/// more information.
#[derive(Clone, Debug, PartialEq)]
pub struct TensorType {
    /// [`Size`]s of the tensor dimensions ordered from outermost to innermost.
    shape: Vec<Size>,

    /// [`Type`] of the tensor elements.
    element_type: Box<Type>,
}

impl TensorType {
    /// Constructs a new [`TensorType`] with the provided shape and element type.
    pub fn new(shape: &[Size], element_type: Type) -> Self {
        Self { shape: shape.to_vec(), element_type: Box::new(element_type) }
    }

    /// Returns the dimension [`Size`]s of this [`TensorType`].
    pub fn shape(&self) -> &[Size] {
        &self.shape
    }

    /// Returns the rank (i.e., number of dimensions) of this [`TensorType`].
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the [`Size`] of the `index`-th dimension of this [`TensorType`], or [`None`] if `index` is out of
    /// bounds.
    pub fn dimension(&self, index: usize) -> Option<Size> {
        self.shape.get(index).copied()
    }

    pub fn element_type(&self) -> &Type {
        &self.element_type
    }

    /// Returns `true` if all dimensions of this [`TensorType`] are statically known.
    pub fn has_static_shape(&self) -> bool {
        self.shape.iter().all(Size::is_static)
    }

    /// Returns the number of elements of this [`TensorType`], or [`None`] if its shape is not static.
    pub fn element_count(&self) -> Option<usize> {
        static_element_count(&self.shape)
    }

    /// Returns a new [`TensorType`] with the same shape as this one, but with the provided element type.
    pub fn with_element_type(&self, element_type: Type) -> Self {
        Self { shape: self.shape.clone(), element_type: Box::new(element_type) }
    }
}

impl Display for TensorType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "tensor<")?;
        write_shape(formatter, &self.shape)?;
        write!(formatter, "{}>", self.element_type)
    }
}

/// Built-in [`Type`] that represents a multidimensional array whose rank is not known. Unranked tensors are still
/// tensors and can be used wherever a tensor of unknown shape is acceptable.
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/Dialects/Builtin/#unrankedtensortype) for
/// more information.
#[derive(Clone, Debug, PartialEq)]
pub struct UnrankedTensorType {
    element_type: Box<Type>,
}

impl UnrankedTensorType {
    pub fn new(element_type: Type) -> Self {
        Self { element_type: Box::new(element_type) }
    }

    pub fn element_type(&self) -> &Type {
        &self.element_type
    }

    /// Returns a new [`UnrankedTensorType`] with the provided element type.
    pub fn with_element_type(&self, element_type: Type) -> Self {
        Self::new(element_type)
    }
}

impl Display for UnrankedTensorType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "tensor<*x{}>", self.element_type)
    }
}
