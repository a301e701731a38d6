/*
    Conversions to and from `Float32`
*/

use std::any::{type_name, Any};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_complex::Complex64;
use num_rational::{BigRational, Ratio};
use num_traits::Zero;

use super::numeral::Numeral;
use super::*;
use crate::{Error, Result, Round};

/// The closed set of values a [`Float32`] can be built from.
///
/// Coercion is a match over these kinds only. Any other type is
/// rejected, even one that knows how to turn itself into an `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// An integer of any magnitude.
    Integer(BigInt),
    /// An exact ratio of integers.
    Rational(BigRational),
    /// A native double.
    Double(f64),
    /// A decimal or scientific float literal.
    Numeral(String),
    /// A complex number; only a zero imaginary part is accepted.
    Complex(Complex64),
    /// A `Float32`, returned as-is.
    Float32(Float32),
}

/// Builds a [`Float32`] from any recognized source.
///
/// Integers and doubles round to nearest, ties to even. Rationals are
/// rounded to `f64` first and then to binary32. Strings must be float
/// literals. Complex numbers must have a zero imaginary part.
pub fn to_float32(source: impl Into<Source>) -> Result<Float32> {
    Float32::try_from(source.into())
}

impl Float32 {
    /// Builds a `Float32` from a value of any type, accepting only the
    /// kinds of [`Source`] (plus the primitive numbers they are made of).
    /// Every other type fails with [`Error::Type`].
    pub fn coerce<T: Any>(value: &T) -> Result<Float32> {
        let any: &dyn Any = value;

        macro_rules! recognize {
            ($($t:ty),* $(,)?) => {
                $(
                    if let Some(v) = any.downcast_ref::<$t>() {
                        return Float32::try_from(Source::from(v.clone()));
                    }
                )*
            };
        }

        recognize!(
            Float32, Source, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
            usize, BigInt, BigUint, BigRational, Ratio<i64>, Complex64, String, &'static str,
        );

        log::debug!("rejected {} as a Float32 source", type_name::<T>());
        Err(Error::Type(type_name::<T>()))
    }
}

// Rounding to `Float32`

impl Round<Float32> for f64 {
    fn round_to(&self) -> Float32 {
        Float32::from_bits(BINARY32.convert(&BINARY64, self.to_bits()) as u32)
    }
}

impl Round<Float32> for BigInt {
    fn round_to(&self) -> Float32 {
        let s = self.sign() == Sign::Minus;
        Float32::from_bits(BINARY32.round_finite(s, 0, self.magnitude().clone()) as u32)
    }
}

impl Round<Float32> for BigUint {
    fn round_to(&self) -> Float32 {
        Float32::from_bits(BINARY32.round_finite(false, 0, self.clone()) as u32)
    }
}

// Rounds to binary64 first, then to binary32. The two roundings may
// disagree with a single rounding near a binary32 tie; that is the
// intended result.
impl Round<Float32> for BigRational {
    fn round_to(&self) -> Float32 {
        let (num, den) = (self.numer(), self.denom());
        let s = (num.sign() == Sign::Minus) != (den.sign() == Sign::Minus);
        let wide = if den.is_zero() {
            // only reachable through `Ratio::new_raw`
            if num.is_zero() {
                BINARY64.quiet_nan(false, 0)
            } else {
                BINARY64.infinity(s)
            }
        } else {
            BINARY64.round_ratio(s, num.magnitude(), den.magnitude())
        };
        Float32::from_bits(BINARY32.convert(&BINARY64, wide) as u32)
    }
}

// Implementing `From` for the kinds that never fail

impl From<f64> for Float32 {
    fn from(f: f64) -> Self {
        f.round_to()
    }
}

// Bit-exact: `f32` is binary32 already.
impl From<f32> for Float32 {
    fn from(f: f32) -> Self {
        Float32::from_bits(f.to_bits())
    }
}

impl From<BigInt> for Float32 {
    fn from(i: BigInt) -> Self {
        i.round_to()
    }
}

impl From<BigUint> for Float32 {
    fn from(i: BigUint) -> Self {
        i.round_to()
    }
}

impl From<BigRational> for Float32 {
    fn from(r: BigRational) -> Self {
        r.round_to()
    }
}

impl From<Ratio<i64>> for Float32 {
    fn from(r: Ratio<i64>) -> Self {
        big_ratio(r).round_to()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Float32 {
                fn from(i: $t) -> Self {
                    BigInt::from(i).round_to()
                }
            }

            impl From<$t> for Source {
                fn from(i: $t) -> Self {
                    Source::Integer(BigInt::from(i))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn big_ratio(r: Ratio<i64>) -> BigRational {
    BigRational::new_raw(BigInt::from(*r.numer()), BigInt::from(*r.denom()))
}

// Implementing the fallible conversions

impl FromStr for Float32 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (bits, out_of_range) = Numeral::parse(s)?.round(&BINARY32);
        if out_of_range {
            log::warn!("Float32 {} out of range", s.trim());
        }
        Ok(Float32::from_bits(bits as u32))
    }
}

impl TryFrom<&str> for Float32 {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<Complex64> for Float32 {
    type Error = Error;

    fn try_from(c: Complex64) -> Result<Self> {
        if c.im == 0.0 {
            Ok(Float32::from(c.re))
        } else {
            Err(Error::Range(c.to_string()))
        }
    }
}

impl TryFrom<Source> for Float32 {
    type Error = Error;

    fn try_from(source: Source) -> Result<Self> {
        match source {
            Source::Integer(i) => Ok(i.round_to()),
            Source::Rational(r) => Ok(r.round_to()),
            Source::Double(f) => Ok(f.round_to()),
            Source::Numeral(s) => s.parse(),
            Source::Complex(c) => Float32::try_from(c),
            Source::Float32(f) => Ok(f),
        }
    }
}

// Implementing `From` for `Source`

impl From<Float32> for Source {
    fn from(f: Float32) -> Self {
        Source::Float32(f)
    }
}

impl From<f32> for Source {
    fn from(f: f32) -> Self {
        Source::Float32(Float32::from(f))
    }
}

impl From<f64> for Source {
    fn from(f: f64) -> Self {
        Source::Double(f)
    }
}

impl From<BigInt> for Source {
    fn from(i: BigInt) -> Self {
        Source::Integer(i)
    }
}

impl From<BigUint> for Source {
    fn from(i: BigUint) -> Self {
        Source::Integer(BigInt::from(i))
    }
}

impl From<BigRational> for Source {
    fn from(r: BigRational) -> Self {
        Source::Rational(r)
    }
}

impl From<Ratio<i64>> for Source {
    fn from(r: Ratio<i64>) -> Self {
        Source::Rational(big_ratio(r))
    }
}

impl From<Complex64> for Source {
    fn from(c: Complex64) -> Self {
        Source::Complex(c)
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Source::Numeral(s.to_string())
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        Source::Numeral(s)
    }
}

// Implementing the widening conversions out of `Float32`

impl From<Float32> for f64 {
    fn from(f: Float32) -> Self {
        f.to_f64()
    }
}

impl From<Float32> for f32 {
    fn from(f: Float32) -> Self {
        f32::from_bits(f.to_bits())
    }
}
