use std::fmt::Display;

/// Signedness semantics of an [`IntegerType`]. MLIR integers are _signless_ by default, meaning that the operations
/// that consume them decide how to interpret their bits. Signed and unsigned integers carry that interpretation in
/// the type itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signless,
    Signed,
    Unsigned,
}

/// Built-in [`Type`](crate::Type) that represents integers with an arbitrary bit width and a [`Signedness`].
///
/// # Examples
///
/// The following are examples of [`IntegerType`]s represented using their [`Display`] rendering:
///
/// ```text
/// i1    => Signless 1-bit integer (i.e., a boolean).
/// si8   => Signed 8-bit integer.
/// ui32  => Unsigned 32-bit integer.
/// ```
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/Dialects/Builtin/#integertype) for more
/// information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntegerType {
    /// Bit width of this [`IntegerType`].
    pub width: u32,

    /// [`Signedness`] of this [`IntegerType`].
    pub signedness: Signedness,
}

impl IntegerType {
    /// Constructs a new signless [`IntegerType`] with the provided bit width.
    pub fn signless(width: u32) -> Self {
        Self { width, signedness: Signedness::Signless }
    }

    /// Constructs a new signed [`IntegerType`] with the provided bit width.
    pub fn signed(width: u32) -> Self {
        Self { width, signedness: Signedness::Signed }
    }

    /// Constructs a new unsigned [`IntegerType`] with the provided bit width.
    pub fn unsigned(width: u32) -> Self {
        Self { width, signedness: Signedness::Unsigned }
    }

    pub fn is_signless(&self) -> bool {
        self.signedness == Signedness::Signless
    }

    pub fn is_signed(&self) -> bool {
        self.signedness == Signedness::Signed
    }

    pub fn is_unsigned(&self) -> bool {
        self.signedness == Signedness::Unsigned
    }

    /// Returns `true` if `value` can be stored in this [`IntegerType`] without truncation. Signless integers accept
    /// values from both the signed and the unsigned interpretation of their bits.
    pub fn can_represent(&self, value: i64) -> bool {
        if self.width == 0 {
            return value == 0;
        }
        if self.width >= 64 {
            return self.signedness != Signedness::Unsigned || value >= 0;
        }
        let signed_minimum = -(1i64 << (self.width - 1));
        let signed_maximum = (1i64 << (self.width - 1)) - 1;
        let unsigned_maximum = if self.width == 63 { i64::MAX } else { (1i64 << self.width) - 1 };
        match self.signedness {
            Signedness::Signless => (signed_minimum..=unsigned_maximum).contains(&value),
            Signedness::Signed => (signed_minimum..=signed_maximum).contains(&value),
            Signedness::Unsigned => (0..=unsigned_maximum).contains(&value),
        }
    }
}

impl Display for IntegerType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.signedness {
            Signedness::Signless => write!(formatter, "i{}", self.width),
            Signedness::Signed => write!(formatter, "si{}", self.width),
            Signedness::Unsigned => write!(formatter, "ui{}", self.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_integer_type() {
        let i8_type = IntegerType::signless(8);
        assert!(i8_type.is_signless());
        assert!(!i8_type.is_signed());
        assert!(IntegerType::signed(8).is_signed());
        assert!(IntegerType::unsigned(8).is_unsigned());
        assert_ne!(i8_type, IntegerType::unsigned(8));
    }

    #[test]
    fn test_integer_type_can_represent() {
        assert!(IntegerType::signless(8).can_represent(-128));
        assert!(IntegerType::signless(8).can_represent(255));
        assert!(!IntegerType::signless(8).can_represent(256));
        assert!(!IntegerType::signed(8).can_represent(128));
        assert!(!IntegerType::unsigned(8).can_represent(-1));
        assert!(IntegerType::signless(1).can_represent(1));
        assert!(IntegerType::signless(64).can_represent(i64::MIN));
        assert!(!IntegerType::unsigned(64).can_represent(-1));
    }

    #[test]
    fn test_integer_type_display() {
        assert_eq!(IntegerType::signless(1).to_string(), "i1");
        assert_eq!(IntegerType::signed(8).to_string(), "si8");
        assert_eq!(IntegerType::unsigned(32).to_string(), "ui32");
    }
}
