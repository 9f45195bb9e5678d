use std::fmt::Display;

use thiserror::Error;

use crate::support::format_float;
use crate::{FloatType, IntegerType, Type};

/// Maximum bit width of the integer storage of a [`QuantizedType`].
pub const MAX_STORAGE_BITS: u32 = 32;

/// Error returned when constructing a [`QuantizedType`] from invalid parameters.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum QuantizedTypeError {
    #[error("illegal storage type size: {width}")]
    InvalidStorageWidth { width: u32 },

    #[error("illegal storage min and storage max: ({minimum}:{maximum})")]
    InvalidStorageRange { minimum: i64, maximum: i64 },

    #[error("illegal scale: {scale}")]
    InvalidScale { scale: f64 },

    #[error("per-axis quantization requires at least one scale")]
    EmptyPerAxisParameters,

    #[error("illegal number of scales and zero points: {scale_count} and {zero_point_count}")]
    PerAxisParameterCountMismatch { scale_count: usize, zero_point_count: usize },

    #[error("illegal min and max: ({minimum}:{maximum})")]
    InvalidCalibratedRange { minimum: f64, maximum: f64 },
}

/// Integer storage of a [`QuantizedType`]. The storage conveys the bit width and signedness of the values that are
/// physically stored in memory, along with the (inclusive) range of storage values that the quantization scheme is
/// allowed to use. That range defaults to the full range of the storage integer type.
///
/// # Examples
///
/// ```text
/// i8            => Signed 8-bit storage using the full [-128, 127] range.
/// u4            => Unsigned 4-bit storage using the full [0, 15] range.
/// i8<-127:127>  => Signed 8-bit storage with a symmetric (i.e., narrow) range.
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuantizedStorage {
    signed: bool,
    width: u32,
    minimum: i64,
    maximum: i64,
}

impl QuantizedStorage {
    /// Constructs a new signed [`QuantizedStorage`] with the provided bit width, using the full storage range.
    /// Widths outside `[1, MAX_STORAGE_BITS]` are rejected when the storage is used to construct a quantized type.
    pub fn signed(width: u32) -> Self {
        Self::new(true, width)
    }

    /// Constructs a new unsigned [`QuantizedStorage`] with the provided bit width, using the full storage range.
    pub fn unsigned(width: u32) -> Self {
        Self::new(false, width)
    }

    fn new(signed: bool, width: u32) -> Self {
        Self {
            signed,
            width,
            minimum: Self::default_minimum(signed, width),
            maximum: Self::default_maximum(signed, width),
        }
    }

    /// Returns a copy of this [`QuantizedStorage`] restricted to the provided (inclusive) range of storage values.
    pub fn with_range(self, minimum: i64, maximum: i64) -> Result<Self, QuantizedTypeError> {
        let storage = Self { minimum, maximum, ..self };
        storage.validate()?;
        Ok(storage)
    }

    /// Returns the minimum representable value for an integer storage type with the provided signedness and width.
    pub fn default_minimum(signed: bool, width: u32) -> i64 {
        if signed && (1..=63).contains(&width) { -(1i64 << (width - 1)) } else { 0 }
    }

    /// Returns the maximum representable value for an integer storage type with the provided signedness and width.
    pub fn default_maximum(signed: bool, width: u32) -> i64 {
        match (signed, width) {
            (_, 0) => 0,
            (true, 1..=63) => (1i64 << (width - 1)) - 1,
            (false, 1..=62) => (1i64 << width) - 1,
            _ => i64::MAX,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    /// Returns `true` if this storage uses the full range of its integer type.
    pub fn has_default_range(&self) -> bool {
        self.minimum == Self::default_minimum(self.signed, self.width)
            && self.maximum == Self::default_maximum(self.signed, self.width)
    }

    /// Returns the builtin integer [`Type`] that values with this storage are stored as. Quantized storage types
    /// are always signless integers; signedness is a property of the quantization scheme.
    pub fn integer_type(&self) -> IntegerType {
        IntegerType::signless(self.width)
    }

    fn validate(&self) -> Result<(), QuantizedTypeError> {
        if self.width == 0 || self.width > MAX_STORAGE_BITS {
            return Err(QuantizedTypeError::InvalidStorageWidth { width: self.width });
        }
        if self.minimum > self.maximum
            || self.minimum < Self::default_minimum(self.signed, self.width)
            || self.maximum > Self::default_maximum(self.signed, self.width)
        {
            return Err(QuantizedTypeError::InvalidStorageRange { minimum: self.minimum, maximum: self.maximum });
        }
        Ok(())
    }
}

impl Display for QuantizedStorage {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}{}", if self.signed { "i" } else { "u" }, self.width)?;
        if !self.has_default_range() {
            write!(formatter, "<{}:{}>", self.minimum, self.maximum)?;
        }
        Ok(())
    }
}

fn validate_scale(scale: f64) -> Result<(), QuantizedTypeError> {
    if scale.is_finite() && scale > 0.0 { Ok(()) } else { Err(QuantizedTypeError::InvalidScale { scale }) }
}

fn write_scale_and_zero_point(
    formatter: &mut std::fmt::Formatter<'_>,
    scale: f64,
    zero_point: i64,
) -> std::fmt::Result {
    write!(formatter, "{}", format_float(scale))?;
    if zero_point != 0 {
        write!(formatter, ":{zero_point}")?;
    }
    Ok(())
}

/// Most permissive concrete [`QuantizedType`]. It carries a storage and, optionally, an expressed type, but it does
/// not encode an explicit quantization mapping (i.e., no scale or zero-point parameters). It is used as a
/// placeholder when a value is known to be quantized but its final quantization scheme has not been committed yet.
///
/// # Examples
///
/// ```text
/// !quant.any<i8:f32>
/// !quant.any<i8<-127:127>:f32>
/// !quant.any<u8>
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AnyQuantizedType {
    storage: QuantizedStorage,
    expressed_type: Option<FloatType>,
}

impl AnyQuantizedType {
    pub fn new(storage: QuantizedStorage, expressed_type: Option<FloatType>) -> Result<Self, QuantizedTypeError> {
        storage.validate()?;
        Ok(Self { storage, expressed_type })
    }

    pub fn storage(&self) -> &QuantizedStorage {
        &self.storage
    }

    pub fn expressed_type(&self) -> Option<FloatType> {
        self.expressed_type
    }
}

impl Display for AnyQuantizedType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "!quant.any<{}", self.storage)?;
        if let Some(expressed_type) = self.expressed_type {
            write!(formatter, ":{expressed_type}")?;
        }
        write!(formatter, ">")
    }
}

/// [`QuantizedType`] that applies one affine mapping to all values (i.e., per-layer or per-tensor quantization):
/// `expressed = (stored - zero_point) * scale`.
///
/// # Examples
///
/// ```text
/// !quant.uniform<i8:f32, 5.000000e-01:5>
/// !quant.uniform<i8<-127:127>:f32, 1.000000e+00>
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UniformQuantizedType {
    storage: QuantizedStorage,
    expressed_type: FloatType,
    scale: f64,
    zero_point: i64,
}

impl UniformQuantizedType {
    pub fn new(
        storage: QuantizedStorage,
        expressed_type: FloatType,
        scale: f64,
        zero_point: i64,
    ) -> Result<Self, QuantizedTypeError> {
        storage.validate()?;
        validate_scale(scale)?;
        Ok(Self { storage, expressed_type, scale, zero_point })
    }

    pub fn storage(&self) -> &QuantizedStorage {
        &self.storage
    }

    pub fn expressed_type(&self) -> FloatType {
        self.expressed_type
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn zero_point(&self) -> i64 {
        self.zero_point
    }
}

impl Display for UniformQuantizedType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "!quant.uniform<{}:{}, ", self.storage, self.expressed_type)?;
        write_scale_and_zero_point(formatter, self.scale, self.zero_point)?;
        write!(formatter, ">")
    }
}

/// [`QuantizedType`] that uses one `(scale, zero_point)` pair per index along a chosen quantized dimension (i.e.,
/// per-channel or per-axis quantization). If `i` indexes that dimension, the corresponding mapping is
/// `expressed = (stored - zero_points[i]) * scales[i]`.
///
/// # Examples
///
/// ```text
/// tensor<2x3x4x!quant.uniform<i8:f32:1, {3.000000e+00,4.000000e+00,5.000000e+00}>>
/// tensor<?x?x!quant.uniform<u16:f32:0, {2.000000e+00:10,3.000000e+00:20}>>
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UniformQuantizedPerAxisType {
    storage: QuantizedStorage,
    expressed_type: FloatType,
    scales: Vec<f64>,
    zero_points: Vec<i64>,
    quantized_dimension: usize,
}

impl UniformQuantizedPerAxisType {
    pub fn new(
        storage: QuantizedStorage,
        expressed_type: FloatType,
        scales: &[f64],
        zero_points: &[i64],
        quantized_dimension: usize,
    ) -> Result<Self, QuantizedTypeError> {
        storage.validate()?;
        if scales.is_empty() {
            return Err(QuantizedTypeError::EmptyPerAxisParameters);
        }
        if scales.len() != zero_points.len() {
            return Err(QuantizedTypeError::PerAxisParameterCountMismatch {
                scale_count: scales.len(),
                zero_point_count: zero_points.len(),
            });
        }
        scales.iter().try_for_each(|scale| validate_scale(*scale))?;
        Ok(Self {
            storage,
            expressed_type,
            scales: scales.to_vec(),
            zero_points: zero_points.to_vec(),
            quantized_dimension,
        })
    }

    pub fn storage(&self) -> &QuantizedStorage {
        &self.storage
    }

    pub fn expressed_type(&self) -> FloatType {
        self.expressed_type
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    pub fn zero_points(&self) -> &[i64] {
        &self.zero_points
    }

    /// Returns the index of the dimension along which the quantization parameters vary.
    pub fn quantized_dimension(&self) -> usize {
        self.quantized_dimension
    }
}

impl Display for UniformQuantizedPerAxisType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "!quant.uniform<{}:{}:{}, {{",
            self.storage, self.expressed_type, self.quantized_dimension,
        )?;
        for (index, (scale, zero_point)) in self.scales.iter().zip(&self.zero_points).enumerate() {
            if index > 0 {
                write!(formatter, ",")?;
            }
            write_scale_and_zero_point(formatter, *scale, *zero_point)?;
        }
        write!(formatter, "}}>")
    }
}

/// [`QuantizedType`] that carries only calibration statistics for an expressed floating-point type, represented by
/// the observed real-value interval `[minimum, maximum]`. It does not commit to a storage mapping and is typically
/// used as an intermediate annotation before a concrete uniform quantized type is chosen.
///
/// # Examples
///
/// ```text
/// !quant.calibrated<f32<-9.980000e-01:1.232100e+00>>
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CalibratedQuantizedType {
    expressed_type: FloatType,
    minimum: f64,
    maximum: f64,
}

impl CalibratedQuantizedType {
    pub fn new(expressed_type: FloatType, minimum: f64, maximum: f64) -> Result<Self, QuantizedTypeError> {
        if !minimum.is_finite() || !maximum.is_finite() || minimum > maximum {
            return Err(QuantizedTypeError::InvalidCalibratedRange { minimum, maximum });
        }
        Ok(Self { expressed_type, minimum, maximum })
    }

    pub fn expressed_type(&self) -> FloatType {
        self.expressed_type
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }
}

impl Display for CalibratedQuantizedType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "!quant.calibrated<{}<{}:{}>>",
            self.expressed_type,
            format_float(self.minimum),
            format_float(self.maximum),
        )
    }
}

/// Family of types that represent reduced-precision numeric encodings of an _expressed_ floating-point type. All
/// quantized types share one contract: a storage domain where values are physically represented and an expressed
/// domain where values are interpreted. The family is closed, so every capability below is implemented by an
/// exhaustive match over the variants.
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/Quantization/) for more information.
#[derive(Clone, Debug, PartialEq)]
pub enum QuantizedType {
    Any(AnyQuantizedType),
    Uniform(UniformQuantizedType),
    UniformPerAxis(UniformQuantizedPerAxisType),
    Calibrated(CalibratedQuantizedType),
}

impl QuantizedType {
    /// Returns the expressed floating-point type that this [`QuantizedType`] approximates. This is only [`None`]
    /// for [`AnyQuantizedType`]s that were constructed without one.
    pub fn expressed_type(&self) -> Option<FloatType> {
        match self {
            Self::Any(any) => any.expressed_type(),
            Self::Uniform(uniform) => Some(uniform.expressed_type()),
            Self::UniformPerAxis(per_axis) => Some(per_axis.expressed_type()),
            Self::Calibrated(calibrated) => Some(calibrated.expressed_type()),
        }
    }

    /// Returns the [`QuantizedStorage`] of this [`QuantizedType`], or [`None`] for calibrated types which do not
    /// commit to a storage representation.
    pub fn storage(&self) -> Option<&QuantizedStorage> {
        match self {
            Self::Any(any) => Some(any.storage()),
            Self::Uniform(uniform) => Some(uniform.storage()),
            Self::UniformPerAxis(per_axis) => Some(per_axis.storage()),
            Self::Calibrated(_) => None,
        }
    }

    /// Returns `true` if the storage of this [`QuantizedType`] is signed.
    pub fn is_signed(&self) -> bool {
        self.storage().is_some_and(QuantizedStorage::is_signed)
    }

    /// Returns the builtin integer type that values of this [`QuantizedType`] are stored as, if any.
    pub fn storage_type(&self) -> Option<IntegerType> {
        self.storage().map(QuantizedStorage::integer_type)
    }

    /// Returns `true` if `candidate` is a valid expressed type for this [`QuantizedType`]. For a container
    /// candidate (i.e., a tensor or a vector) its element type is compared against the expressed type, and for any
    /// other candidate the candidate itself is. Examples of compatible pairs:
    ///
    /// ```text
    /// !quant.uniform<i8:f32, 1.0> =~ f32
    /// !quant.uniform<i8:f32, 1.0> =~ tensor<4xf32>
    /// !quant.any<i8:bf16>         =~ vector<4xbf16>
    /// ```
    pub fn is_compatible_expressed_type(&self, candidate: &Type) -> bool {
        let candidate = candidate.element_type_or_self();
        match self {
            Self::Any(any) => {
                any.expressed_type().is_some_and(|expressed_type| *candidate == Type::Float(expressed_type))
            }
            Self::Uniform(uniform) => *candidate == Type::Float(uniform.expressed_type()),
            Self::UniformPerAxis(per_axis) => *candidate == Type::Float(per_axis.expressed_type()),
            Self::Calibrated(calibrated) => *candidate == Type::Float(calibrated.expressed_type()),
        }
    }

    /// Casts `candidate`, which must be an expressed type compatible with this [`QuantizedType`], to the
    /// corresponding quantized type. Returns [`None`] if the cast is invalid. Examples, assuming that this type is
    /// `!quant.uniform<i8:f32, 1.0>`:
    ///
    /// ```text
    /// f32           -> !quant.uniform<i8:f32, 1.0>
    /// tensor<4xf32> -> tensor<4x!quant.uniform<i8:f32, 1.0>>
    /// ```
    pub fn cast_from_expressed_type(&self, candidate: &Type) -> Option<Type> {
        self.is_compatible_expressed_type(candidate)
            .then(|| candidate.with_element_type(Type::Quantized(self.clone())))
    }

    /// Casts `candidate`, whose element type must be this [`QuantizedType`], to the corresponding expressed type.
    /// This is the inverse of [`QuantizedType::cast_from_expressed_type`].
    pub fn cast_to_expressed_type(&self, candidate: &Type) -> Option<Type> {
        let expressed_type = self.expressed_type()?;
        (*candidate.element_type_or_self() == Type::Quantized(self.clone()))
            .then(|| candidate.with_element_type(Type::Float(expressed_type)))
    }

    /// Casts `candidate`, whose element type must be the storage type of this [`QuantizedType`], to the
    /// corresponding quantized type. Examples, assuming that this type is `!quant.uniform<i8:f32, 1.0>`:
    ///
    /// ```text
    /// i8           -> !quant.uniform<i8:f32, 1.0>
    /// tensor<4xi8> -> tensor<4x!quant.uniform<i8:f32, 1.0>>
    /// ```
    pub fn cast_from_storage_type(&self, candidate: &Type) -> Option<Type> {
        let storage_type = self.storage_type()?;
        (*candidate.element_type_or_self() == Type::Integer(storage_type))
            .then(|| candidate.with_element_type(Type::Quantized(self.clone())))
    }

    /// Casts `candidate`, whose element type must be this [`QuantizedType`], to the corresponding storage type.
    /// This is the inverse of [`QuantizedType::cast_from_storage_type`].
    pub fn cast_to_storage_type(&self, candidate: &Type) -> Option<Type> {
        let storage_type = self.storage_type()?;
        (*candidate.element_type_or_self() == Type::Quantized(self.clone()))
            .then(|| candidate.with_element_type(Type::Integer(storage_type)))
    }

    /// Returns the [`QuantizedType`] that is the element type of `candidate` (or `candidate` itself, if it is a
    /// scalar), or [`None`] if there is no such type.
    pub fn quantized_element_type(candidate: &Type) -> Option<&QuantizedType> {
        match candidate.element_type_or_self() {
            Type::Quantized(quantized_type) => Some(quantized_type),
            _ => None,
        }
    }
}

impl Display for QuantizedType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any(any) => write!(formatter, "{any}"),
            Self::Uniform(uniform) => write!(formatter, "{uniform}"),
            Self::UniformPerAxis(per_axis) => write!(formatter, "{per_axis}"),
            Self::Calibrated(calibrated) => write!(formatter, "{calibrated}"),
        }
    }
}

impl From<AnyQuantizedType> for QuantizedType {
    fn from(value: AnyQuantizedType) -> Self {
        Self::Any(value)
    }
}

impl From<UniformQuantizedType> for QuantizedType {
    fn from(value: UniformQuantizedType) -> Self {
        Self::Uniform(value)
    }
}

impl From<UniformQuantizedPerAxisType> for QuantizedType {
    fn from(value: UniformQuantizedPerAxisType) -> Self {
        Self::UniformPerAxis(value)
    }
}

impl From<CalibratedQuantizedType> for QuantizedType {
    fn from(value: CalibratedQuantizedType) -> Self {
        Self::Calibrated(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::types::tests::parse_type;

    use super::*;

    fn uniform_i8_f32() -> QuantizedType {
        UniformQuantizedType::new(QuantizedStorage::signed(8), FloatType::Float32, 0.5, 5).unwrap().into()
    }

    #[test]
    fn test_quantized_storage() {
        let storage = QuantizedStorage::signed(8);
        assert!(storage.is_signed());
        assert_eq!(storage.width(), 8);
        assert_eq!(storage.minimum(), -128);
        assert_eq!(storage.maximum(), 127);
        assert!(storage.has_default_range());
        assert_eq!(storage.integer_type(), IntegerType::signless(8));

        let storage = QuantizedStorage::unsigned(4);
        assert_eq!((storage.minimum(), storage.maximum()), (0, 15));

        let storage = QuantizedStorage::signed(8).with_range(-127, 127).unwrap();
        assert!(!storage.has_default_range());
        assert_eq!(storage.to_string(), "i8<-127:127>");

        assert_eq!(
            QuantizedStorage::signed(8).with_range(-129, 127),
            Err(QuantizedTypeError::InvalidStorageRange { minimum: -129, maximum: 127 }),
        );
        assert_eq!(
            QuantizedStorage::unsigned(8).with_range(10, 5),
            Err(QuantizedTypeError::InvalidStorageRange { minimum: 10, maximum: 5 }),
        );
        assert_eq!(
            AnyQuantizedType::new(QuantizedStorage::signed(33), None),
            Err(QuantizedTypeError::InvalidStorageWidth { width: 33 }),
        );
        assert_eq!(
            AnyQuantizedType::new(QuantizedStorage::unsigned(0), None),
            Err(QuantizedTypeError::InvalidStorageWidth { width: 0 }),
        );
    }

    #[test]
    fn test_quantized_type_construction_errors() {
        assert_eq!(
            UniformQuantizedType::new(QuantizedStorage::signed(8), FloatType::Float32, 0.0, 0),
            Err(QuantizedTypeError::InvalidScale { scale: 0.0 }),
        );
        assert_eq!(
            UniformQuantizedPerAxisType::new(QuantizedStorage::signed(8), FloatType::Float32, &[], &[], 0),
            Err(QuantizedTypeError::EmptyPerAxisParameters),
        );
        assert_eq!(
            UniformQuantizedPerAxisType::new(QuantizedStorage::signed(8), FloatType::Float32, &[1.0, 2.0], &[0], 0),
            Err(QuantizedTypeError::PerAxisParameterCountMismatch { scale_count: 2, zero_point_count: 1 }),
        );
        assert_eq!(
            CalibratedQuantizedType::new(FloatType::Float32, 1.0, -1.0),
            Err(QuantizedTypeError::InvalidCalibratedRange { minimum: 1.0, maximum: -1.0 }),
        );
    }

    #[test]
    fn test_quantized_type_accessors() {
        let uniform = uniform_i8_f32();
        assert_eq!(uniform.expressed_type(), Some(FloatType::Float32));
        assert_eq!(uniform.storage_type(), Some(IntegerType::signless(8)));
        assert!(uniform.is_signed());

        let calibrated = QuantizedType::from(CalibratedQuantizedType::new(FloatType::Float16, -1.0, 1.0).unwrap());
        assert_eq!(calibrated.storage(), None);
        assert_eq!(calibrated.storage_type(), None);
        assert!(!calibrated.is_signed());

        let any = QuantizedType::from(AnyQuantizedType::new(QuantizedStorage::unsigned(8), None).unwrap());
        assert_eq!(any.expressed_type(), None);
        assert!(!any.is_signed());
    }

    #[test]
    fn test_quantized_type_is_compatible_expressed_type() {
        let uniform = uniform_i8_f32();
        assert!(uniform.is_compatible_expressed_type(&parse_type("f32")));
        assert!(uniform.is_compatible_expressed_type(&parse_type("tensor<4xf32>")));
        assert!(uniform.is_compatible_expressed_type(&parse_type("tensor<?x?xf32>")));
        assert!(uniform.is_compatible_expressed_type(&parse_type("tensor<*xf32>")));
        assert!(uniform.is_compatible_expressed_type(&parse_type("vector<4xf32>")));
        assert!(!uniform.is_compatible_expressed_type(&parse_type("f16")));
        assert!(!uniform.is_compatible_expressed_type(&parse_type("tensor<4xf64>")));
        assert!(!uniform.is_compatible_expressed_type(&parse_type("tensor<4xi8>")));

        let per_axis = QuantizedType::from(
            UniformQuantizedPerAxisType::new(QuantizedStorage::signed(8), FloatType::Float32, &[1.0, 2.0], &[0, 1], 1)
                .unwrap(),
        );
        assert!(per_axis.is_compatible_expressed_type(&parse_type("tensor<3x2xf32>")));
        assert!(!per_axis.is_compatible_expressed_type(&parse_type("tensor<3x2xbf16>")));

        let calibrated = QuantizedType::from(CalibratedQuantizedType::new(FloatType::Float32, -1.0, 1.0).unwrap());
        assert!(calibrated.is_compatible_expressed_type(&parse_type("tensor<8xf32>")));
        assert!(!calibrated.is_compatible_expressed_type(&parse_type("index")));

        let any = QuantizedType::from(AnyQuantizedType::new(QuantizedStorage::signed(8), None).unwrap());
        assert!(!any.is_compatible_expressed_type(&parse_type("vector<4xbf16>")));
        assert!(!any.is_compatible_expressed_type(&parse_type("f64")));
        assert!(!any.is_compatible_expressed_type(&parse_type("tensor<4xi32>")));

        let any =
            QuantizedType::from(AnyQuantizedType::new(QuantizedStorage::signed(8), Some(FloatType::Float32)).unwrap());
        assert!(any.is_compatible_expressed_type(&parse_type("tensor<4xf32>")));
        assert!(!any.is_compatible_expressed_type(&parse_type("tensor<4xf16>")));
    }

    #[test]
    fn test_quantized_type_casts() {
        let uniform = uniform_i8_f32();
        let quantized_tensor_type = parse_type("tensor<4x!quant.uniform<i8:f32, 0.5:5>>");
        assert_eq!(uniform.cast_from_expressed_type(&parse_type("tensor<4xf32>")), Some(quantized_tensor_type.clone()));
        assert_eq!(uniform.cast_from_expressed_type(&parse_type("tensor<4xf16>")), None);
        assert_eq!(uniform.cast_to_expressed_type(&quantized_tensor_type), Some(parse_type("tensor<4xf32>")));
        assert_eq!(uniform.cast_to_expressed_type(&parse_type("tensor<4xf32>")), None);
        assert_eq!(uniform.cast_from_storage_type(&parse_type("tensor<4xi8>")), Some(quantized_tensor_type.clone()));
        assert_eq!(uniform.cast_from_storage_type(&parse_type("i8")), Some(Type::Quantized(uniform.clone())));
        assert_eq!(uniform.cast_from_storage_type(&parse_type("tensor<4xi16>")), None);
        assert_eq!(uniform.cast_to_storage_type(&quantized_tensor_type), Some(parse_type("tensor<4xi8>")));
        assert_eq!(
            QuantizedType::quantized_element_type(&quantized_tensor_type),
            Some(&uniform),
        );
        assert_eq!(QuantizedType::quantized_element_type(&parse_type("tensor<4xf32>")), None);

        let calibrated = QuantizedType::from(CalibratedQuantizedType::new(FloatType::Float32, -1.0, 1.0).unwrap());
        assert_eq!(calibrated.cast_from_storage_type(&parse_type("i8")), None);
    }

    #[test]
    fn test_quantized_type_display() {
        assert_eq!(uniform_i8_f32().to_string(), "!quant.uniform<i8:f32, 5.000000e-01:5>");
        let uniform = UniformQuantizedType::new(
            QuantizedStorage::signed(8).with_range(-127, 127).unwrap(),
            FloatType::Float32,
            1.0,
            0,
        );
        assert_eq!(uniform.unwrap().to_string(), "!quant.uniform<i8<-127:127>:f32, 1.000000e+00>");
        let per_axis = UniformQuantizedPerAxisType::new(
            QuantizedStorage::unsigned(16),
            FloatType::Float32,
            &[2.0, 3.0],
            &[10, 0],
            0,
        );
        assert_eq!(per_axis.unwrap().to_string(), "!quant.uniform<u16:f32:0, {2.000000e+00:10,3.000000e+00}>");
        let any = AnyQuantizedType::new(QuantizedStorage::signed(8), Some(FloatType::Float32));
        assert_eq!(any.unwrap().to_string(), "!quant.any<i8:f32>");
        let any = AnyQuantizedType::new(QuantizedStorage::unsigned(8), None);
        assert_eq!(any.unwrap().to_string(), "!quant.any<u8>");
        let calibrated = CalibratedQuantizedType::new(FloatType::Float32, -0.998, 1.2321);
        assert_eq!(calibrated.unwrap().to_string(), "!quant.calibrated<f32<-9.980000e-01:1.232100e+00>>");
    }
}
