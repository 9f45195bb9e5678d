use crate::{Attribute, Type};

/// Quantization specification that annotates an operand or a result of a
/// [`RegionOperation`](crate::dialects::quant::RegionOperation). Only type-valued specifications are meaningful. They
/// name the element type that the annotated value is meant to be interpreted as (e.g., `!quant.uniform<i8:f32, 0.5>`
/// or `i8`). Any other kind of attribute is still representable so that it can be reported, but it never matches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum QuantizationSpec<'a> {
    Type(&'a Type),
    Other(&'a Attribute),
}

impl<'a> From<&'a Attribute> for QuantizationSpec<'a> {
    fn from(attribute: &'a Attribute) -> Self {
        match attribute {
            Attribute::Type(spec_type) => Self::Type(spec_type),
            attribute => Self::Other(attribute),
        }
    }
}

impl QuantizationSpec<'_> {
    /// Returns `true` if this specification can annotate a value of type `expressed_type`:
    ///
    ///   - Non-type specifications never match.
    ///   - Specifications that name a tensor or vector type never match, even if their element type is quantized.
    ///   - Quantized specifications match when the quantized type is compatible with the (element) type of
    ///     `expressed_type`. See [`QuantizedType::is_compatible_expressed_type`](crate::QuantizedType).
    ///   - Any other specification matches only a tensor or vector `expressed_type` with exactly that element type.
    pub fn is_valid_for(&self, expressed_type: &Type) -> bool {
        let spec_type = match self {
            Self::Type(spec_type) => *spec_type,
            Self::Other(_) => return false,
        };
        match spec_type {
            Type::Tensor(_) | Type::UnrankedTensor(_) | Type::Vector(_) => false,
            Type::Quantized(quantized_type) => quantized_type.is_compatible_expressed_type(expressed_type),
            Type::Integer(_) | Type::Float(_) | Type::Index | Type::None => {
                expressed_type.element_type().is_some_and(|element_type| element_type == spec_type)
            }
        }
    }
}

/// Returns `true` if `spec` is a valid quantization specification for a value of type `expressed_type`. Refer to
/// [`QuantizationSpec::is_valid_for`] for the exact rules.
pub fn is_valid_spec(spec: &Attribute, expressed_type: &Type) -> bool {
    QuantizationSpec::from(spec).is_valid_for(expressed_type)
}
