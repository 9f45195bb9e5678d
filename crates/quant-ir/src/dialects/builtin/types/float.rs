use std::fmt::Display;

/// Built-in [`Type`](crate::Type) that represents floating-point numbers. This covers the standard IEEE 754 types
/// along with the narrow formats that mirror the [LLVM/MLIR float types](https://mlir.llvm.org/docs/Dialects/Builtin)
/// (e.g., the [8-bit floating-point variants](https://arxiv.org/abs/2209.05433)).
///
/// The suffixes of the narrow formats follow the LLVM naming conventions: `FN` signals that the type can only
/// represent finite values, `UZ` stands for "unsigned zero", and `U` for "unsigned".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FloatType {
    /// 4-bit floating-point type with bit encoding S1E2M1.
    Float4E2M1FN,

    /// 6-bit floating-point type with bit encoding S1E2M3.
    Float6E2M3FN,

    /// 6-bit floating-point type with bit encoding S1E3M2.
    Float6E3M2FN,

    /// 8-bit floating-point type with bit encoding S1E3M4 and IEEE 754 infinity/NaN semantics.
    Float8E3M4,

    /// 8-bit floating-point type with bit encoding S1E4M3 and IEEE 754 infinity/NaN semantics.
    Float8E4M3,

    /// 8-bit floating-point type with bit encoding S1E4M3 that only represents finite values.
    Float8E4M3FN,

    /// 8-bit floating-point type with bit encoding S1E4M3, exponent bias 8, and no negative zero.
    Float8E4M3FNUZ,

    /// 8-bit floating-point type with bit encoding S1E4M3, exponent bias 11, and no negative zero.
    Float8E4M3B11FNUZ,

    /// 8-bit floating-point type with bit encoding S1E5M2 and IEEE 754 infinity/NaN semantics.
    Float8E5M2,

    /// 8-bit floating-point type with bit encoding S1E5M2, exponent bias 16, and no negative zero.
    Float8E5M2FNUZ,

    /// 8-bit exponent-only type that is used for representing scaling factors.
    Float8E8M0FNU,

    /// 16-bit [brain floating-point](https://en.wikipedia.org/wiki/Bfloat16_floating-point_format) type.
    BFloat16,

    /// 16-bit IEEE 754 floating-point type.
    Float16,

    /// 19-bit NVIDIA TensorFloat-32 type (stored in 32 bits).
    FloatTF32,

    /// 32-bit IEEE 754 floating-point type.
    Float32,

    /// 64-bit IEEE 754 floating-point type.
    Float64,
}

impl FloatType {
    /// Returns the number of bits used by values of this [`FloatType`].
    pub fn bit_width(&self) -> usize {
        match self {
            Self::Float4E2M1FN => 4,
            Self::Float6E2M3FN | Self::Float6E3M2FN => 6,
            Self::Float8E3M4
            | Self::Float8E4M3
            | Self::Float8E4M3FN
            | Self::Float8E4M3FNUZ
            | Self::Float8E4M3B11FNUZ
            | Self::Float8E5M2
            | Self::Float8E5M2FNUZ
            | Self::Float8E8M0FNU => 8,
            Self::BFloat16 | Self::Float16 => 16,
            Self::FloatTF32 => 19,
            Self::Float32 => 32,
            Self::Float64 => 64,
        }
    }

    /// Returns the [`FloatType`] that corresponds to the provided MLIR keyword (e.g., `f32` or `f8E4M3FN`),
    /// or [`None`] if the keyword does not name a floating-point type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|float_type| float_type.keyword() == keyword)
    }

    /// Returns the MLIR keyword that is used to render this [`FloatType`].
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Float4E2M1FN => "f4E2M1FN",
            Self::Float6E2M3FN => "f6E2M3FN",
            Self::Float6E3M2FN => "f6E3M2FN",
            Self::Float8E3M4 => "f8E3M4",
            Self::Float8E4M3 => "f8E4M3",
            Self::Float8E4M3FN => "f8E4M3FN",
            Self::Float8E4M3FNUZ => "f8E4M3FNUZ",
            Self::Float8E4M3B11FNUZ => "f8E4M3B11FNUZ",
            Self::Float8E5M2 => "f8E5M2",
            Self::Float8E5M2FNUZ => "f8E5M2FNUZ",
            Self::Float8E8M0FNU => "f8E8M0FNU",
            Self::BFloat16 => "bf16",
            Self::Float16 => "f16",
            Self::FloatTF32 => "tf32",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
        }
    }

    const ALL: [Self; 16] = [
        Self::Float4E2M1FN,
        Self::Float6E2M3FN,
        Self::Float6E3M2FN,
        Self::Float8E3M4,
        Self::Float8E4M3,
        Self::Float8E4M3FN,
        Self::Float8E4M3FNUZ,
        Self::Float8E4M3B11FNUZ,
        Self::Float8E5M2,
        Self::Float8E5M2FNUZ,
        Self::Float8E8M0FNU,
        Self::BFloat16,
        Self::Float16,
        Self::FloatTF32,
        Self::Float32,
        Self::Float64,
    ];
}

impl Display for FloatType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.keyword())
    }
}
