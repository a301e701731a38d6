/*
    Defines a number
*/

/// Classification of a floating-point value.
///
/// Every bit pattern of a format falls into exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Zero,
    Subnormal,
    Normal,
    Infinity,
    Nan,
}

/// The number type.
///
/// A `Number` encodes a number with some exceptions, say NaN from IEEE-754.
/// Every operation returns a new value rounded to the representation of
/// `Self`; nothing is ever modified in place.
pub trait Number: Copy {
    /// Returns the class of this `Number`.
    fn classify(&self) -> Class;

    /// Returns true if this `Number` encodes a zero.
    fn is_zero(&self) -> bool {
        self.classify() == Class::Zero
    }

    /// Returns true if this `Number` encodes an infinity.
    fn is_infinity(&self) -> bool {
        self.classify() == Class::Infinity
    }

    /// Returns true if this `Number` does not encode a number.
    fn is_nan(&self) -> bool {
        self.classify() == Class::Nan
    }

    /// Returns true if this `Number` encodes a finite number.
    fn is_finite(&self) -> bool {
        !matches!(self.classify(), Class::Infinity | Class::Nan)
    }

    /// Negates this `Number`. Negation is exact.
    fn neg(&self) -> Self;

    /// Takes the absolute value of this `Number`. This is exact.
    fn abs(&self) -> Self;

    /// Adds this `Number` and another, rounding the result.
    fn add(&self, other: &Self) -> Self;

    /// Subtracts another `Number` from this one, rounding the result.
    fn sub(&self, other: &Self) -> Self;

    /// Multiplies this `Number` and another, rounding the result.
    fn mul(&self, other: &Self) -> Self;

    /// Divides this `Number` by another, rounding the result.
    fn div(&self, other: &Self) -> Self;
}
