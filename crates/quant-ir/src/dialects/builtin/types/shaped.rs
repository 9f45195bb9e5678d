use std::fmt::Display;

/// Represents a size quantity (e.g., of a tensor dimension) that can be either statically known or dynamically
/// determined. Dynamic sizes are rendered as `?` in the textual representation of shaped types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    Static(usize),
    Dynamic,
}

impl Size {
    /// Returns the value of this [`Size`], if it is a [`Size::Static`], and [`None`] otherwise.
    pub fn value(&self) -> Option<usize> {
        match self {
            Size::Static(value) => Some(*value),
            Size::Dynamic => None,
        }
    }

    /// Returns `true` if this [`Size`] is statically known.
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Returns `true` if this [`Size`] is dynamically determined.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

impl From<usize> for Size {
    fn from(value: usize) -> Self {
        Self::Static(value)
    }
}

impl Display for Size {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(size) => write!(formatter, "{size}"),
            Self::Dynamic => write!(formatter, "?"),
        }
    }
}

/// Returns the number of elements of a shape with the provided dimension [`Size`]s, or [`None`] if any of the
/// dimensions is dynamic (or if the product overflows). The empty product (i.e., the element count of a scalar
/// shape) is `1`.
pub fn static_element_count(shape: &[Size]) -> Option<usize> {
    shape.iter().try_fold(1usize, |count, size| size.value().and_then(|size| count.checked_mul(size)))
}

/// Renders the provided dimension [`Size`]s using the MLIR shape syntax (i.e., each dimension followed by `x`).
pub(crate) fn write_shape(formatter: &mut std::fmt::Formatter<'_>, shape: &[Size]) -> std::fmt::Result {
    shape.iter().try_for_each(|size| write!(formatter, "{size}x"))
}
