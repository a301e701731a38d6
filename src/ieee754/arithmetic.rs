/*
    Arithmetic and comparison
*/

use std::any::Any;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;

use super::*;
use crate::{Result, Round};

impl Float32 {
    // Evaluates `op` in binary64, then rounds the result to binary32.
    // binary64 has more than 2 * 24 + 2 bits of precision, so for
    // +, -, *, / the two roundings agree with a single rounding.
    fn compute(self, other: Self, op: impl FnOnce(f64, f64) -> f64) -> Self {
        op(self.to_f64(), other.to_f64()).round_to()
    }

    // Maps a non-NaN value to an integer with the same order.
    // Both zeros map to the same key.
    fn order_key(self) -> i64 {
        let magnitude = (self.bits & !SIGN_BIT) as i64;
        if self.bits & SIGN_BIT != 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Neg for Float32 {
    type Output = Float32;

    fn neg(self) -> Float32 {
        Float32::from_bits(self.bits ^ SIGN_BIT)
    }
}

impl Add for Float32 {
    type Output = Float32;

    fn add(self, rhs: Float32) -> Float32 {
        self.compute(rhs, |x, y| x + y)
    }
}

impl Sub for Float32 {
    type Output = Float32;

    fn sub(self, rhs: Float32) -> Float32 {
        self.compute(rhs, |x, y| x - y)
    }
}

impl Mul for Float32 {
    type Output = Float32;

    fn mul(self, rhs: Float32) -> Float32 {
        self.compute(rhs, |x, y| x * y)
    }
}

impl Div for Float32 {
    type Output = Float32;

    fn div(self, rhs: Float32) -> Float32 {
        self.compute(rhs, |x, y| x / y)
    }
}

impl PartialEq for Float32 {
    fn eq(&self, other: &Float32) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Float32 {
    fn partial_cmp(&self, other: &Float32) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else {
            Some(self.order_key().cmp(&other.order_key()))
        }
    }
}

// Operators against sources whose coercion never fails.
// The right-hand side is coerced first, then the `Float32` operator applies.
macro_rules! impl_mixed_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Add<$t> for Float32 {
                type Output = Float32;

                fn add(self, rhs: $t) -> Float32 {
                    self + Float32::from(rhs)
                }
            }

            impl Sub<$t> for Float32 {
                type Output = Float32;

                fn sub(self, rhs: $t) -> Float32 {
                    self - Float32::from(rhs)
                }
            }

            impl Mul<$t> for Float32 {
                type Output = Float32;

                fn mul(self, rhs: $t) -> Float32 {
                    self * Float32::from(rhs)
                }
            }

            impl Div<$t> for Float32 {
                type Output = Float32;

                fn div(self, rhs: $t) -> Float32 {
                    self / Float32::from(rhs)
                }
            }

            impl PartialEq<$t> for Float32 {
                fn eq(&self, other: &$t) -> bool {
                    <Float32 as PartialEq>::eq(self, &Float32::from(other.clone()))
                }
            }

            impl PartialOrd<$t> for Float32 {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    <Float32 as PartialOrd>::partial_cmp(self, &Float32::from(other.clone()))
                }
            }
        )*
    };
}

impl_mixed_ops!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt, BigUint,
    BigRational,
);

// Operators against any `Source`
impl Float32 {
    /// Adds a value of any recognized kind, coercing it first.
    pub fn try_add(self, rhs: impl Into<Source>) -> Result<Self> {
        Ok(self + Float32::try_from(rhs.into())?)
    }

    /// Subtracts a value of any recognized kind, coercing it first.
    pub fn try_sub(self, rhs: impl Into<Source>) -> Result<Self> {
        Ok(self - Float32::try_from(rhs.into())?)
    }

    /// Multiplies by a value of any recognized kind, coercing it first.
    pub fn try_mul(self, rhs: impl Into<Source>) -> Result<Self> {
        Ok(self * Float32::try_from(rhs.into())?)
    }

    /// Divides by a value of any recognized kind, coercing it first.
    pub fn try_div(self, rhs: impl Into<Source>) -> Result<Self> {
        Ok(self / Float32::try_from(rhs.into())?)
    }

    /// Compares with a value of any recognized kind, coercing it first.
    /// Fails if the value cannot be coerced; returns `Ok(None)` if
    /// either side is NaN.
    pub fn try_partial_cmp(self, rhs: impl Into<Source>) -> Result<Option<Ordering>> {
        let rhs = Float32::try_from(rhs.into())?;
        Ok(self.partial_cmp(&rhs))
    }

    /// Whether this is less than a value of any recognized kind.
    pub fn try_lt(self, rhs: impl Into<Source>) -> Result<bool> {
        Ok(self < Float32::try_from(rhs.into())?)
    }

    /// Whether this is at most a value of any recognized kind.
    pub fn try_le(self, rhs: impl Into<Source>) -> Result<bool> {
        Ok(self <= Float32::try_from(rhs.into())?)
    }

    /// Whether this is greater than a value of any recognized kind.
    pub fn try_gt(self, rhs: impl Into<Source>) -> Result<bool> {
        Ok(self > Float32::try_from(rhs.into())?)
    }

    /// Whether this is at least a value of any recognized kind.
    pub fn try_ge(self, rhs: impl Into<Source>) -> Result<bool> {
        Ok(self >= Float32::try_from(rhs.into())?)
    }

    /// Equality against a value of any recognized kind. Unlike the
    /// ordering comparisons this never fails: a value that cannot be
    /// coerced is simply unequal.
    pub fn eq_source(self, rhs: impl Into<Source>) -> bool {
        Float32::try_from(rhs.into()).is_ok_and(|rhs| self == rhs)
    }

    /// Negation of [`Float32::eq_source`].
    pub fn ne_source(self, rhs: impl Into<Source>) -> bool {
        !self.eq_source(rhs)
    }

    /// Equality against a value of any type. Values outside the
    /// recognized kinds are unequal to every `Float32`.
    pub fn eq_any<T: Any>(self, rhs: &T) -> bool {
        Float32::coerce(rhs).is_ok_and(|rhs| self == rhs)
    }

    /// Negation of [`Float32::eq_any`].
    pub fn ne_any<T: Any>(self, rhs: &T) -> bool {
        !self.eq_any(rhs)
    }
}
