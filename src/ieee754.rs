/*
    IEEE-754 single precision
*/

use std::fmt;

use crate::{Class, Number};

mod arithmetic;
mod constants;
mod convert;
mod format;
mod next;
mod numeral;
mod rounding;

pub use constants::Constant;
pub use convert::{to_float32, Source};
pub(crate) use format::{FloatNum, Format, BINARY32, BINARY64};

pub(crate) const SIGN_BIT: u32 = !(BINARY32.magnitude_mask() as u32);

/** A floating-point number as specified by the IEEE-754 standard
 *  in the `binary32` interchange format.
 *
 * A `Float32` is an immutable 4-byte value: 1 sign bit, 8 exponent bits
 * (bias 127) and 23 mantissa bits. It is created from a recognized
 * numeric source (see [`Source`]), from a raw bit pattern, or as the
 * result of an operation on other `Float32` values.
 *
 * Equality follows IEEE-754: NaN is unequal to everything, including
 * itself, and `-0.0 == 0.0`.
 */
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Float32 {
    bits: u32,
}

// Constructors and getters
impl Float32 {
    /// Creates a `Float32` from its raw bit pattern.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bit pattern of this `Float32`.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.bits
    }

    // Decodes this `Float32` into its classified form.
    #[inline]
    pub(crate) fn unpack(self) -> FloatNum {
        BINARY32.unpack(self.bits as u64)
    }

    /// Returns the sign of this `Float32`, true when negative.
    /// NaNs and zeros carry a sign too.
    pub fn sign(self) -> bool {
        match self.unpack() {
            FloatNum::Zero(s) => s,
            FloatNum::Subnormal(s, _) => s,
            FloatNum::Normal(s, _, _) => s,
            FloatNum::Infinity(s) => s,
            FloatNum::Nan(s, _, _) => s,
        }
    }

    /// Returns the class of this `Float32`.
    pub fn classify(self) -> Class {
        self.unpack().class()
    }

    /// Returns true if this `Float32` encodes a zero.
    pub fn is_zero(self) -> bool {
        self.classify() == Class::Zero
    }

    /// Returns true if this `Float32` encodes a subnormal number.
    pub fn is_subnormal(self) -> bool {
        self.classify() == Class::Subnormal
    }

    /// Returns true if this `Float32` encodes a normal number.
    pub fn is_normal(self) -> bool {
        self.classify() == Class::Normal
    }

    /// Returns true if this `Float32` encodes an infinity.
    pub fn is_infinity(self) -> bool {
        self.classify() == Class::Infinity
    }

    /// Returns true if this `Float32` encodes a NaN.
    pub fn is_nan(self) -> bool {
        self.classify() == Class::Nan
    }

    /// Returns true if this `Float32` encodes a finite number.
    pub fn is_finite(self) -> bool {
        !matches!(self.classify(), Class::Infinity | Class::Nan)
    }

    /// Returns the absolute value. Only the sign bit changes.
    pub fn abs(self) -> Self {
        Self::from_bits(self.bits & !SIGN_BIT)
    }

    /// Widens this `Float32` to `f64`. Every binary32 value is
    /// exactly representable in binary64, so this never rounds.
    pub fn to_f64(self) -> f64 {
        f64::from_bits(BINARY64.convert(&BINARY32, self.bits as u64))
    }
}

impl Number for Float32 {
    fn classify(&self) -> Class {
        Float32::classify(*self)
    }

    fn neg(&self) -> Self {
        -*self
    }

    fn abs(&self) -> Self {
        Float32::abs(*self)
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }

    fn mul(&self, other: &Self) -> Self {
        *self * *other
    }

    fn div(&self, other: &Self) -> Self {
        *self / *other
    }
}

impl fmt::Debug for Float32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Float32").field(&self.to_f64()).finish()
    }
}
