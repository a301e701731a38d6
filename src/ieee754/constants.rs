/*
    Format constants
*/

use super::*;

// log10(2) as a ratio, precise enough for the floors taken below
const LOG10_2_NUM: i64 = 30103;
const LOG10_2_DEN: i64 = 100_000;

/// An entry of the constant table: either a format parameter
/// or a `Float32` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant {
    Integer(i32),
    Float(Float32),
}

impl Float32 {
    /// Number of (binary) digits in the significand.
    pub const MANT_DIG: i32 = BINARY32.prec() as i32;

    /// Number of decimal digits that survive a round trip through `Float32`.
    pub const DIG: i32 = ((Self::MANT_DIG as i64 - 1) * LOG10_2_NUM / LOG10_2_DEN) as i32;

    /// One more than the smallest exponent of a normal number.
    pub const MIN_EXP: i32 = BINARY32.emin() as i32 + 1;

    /// One more than the largest exponent of a finite number.
    pub const MAX_EXP: i32 = BINARY32.emax() as i32 + 1;

    /// Smallest `n` such that `10^n` is a normal number.
    pub const MIN_10_EXP: i32 = -(((1 - Self::MIN_EXP) as i64 * LOG10_2_NUM / LOG10_2_DEN) as i32);

    /// Largest `n` such that `10^n` is a finite number.
    pub const MAX_10_EXP: i32 = (Self::MAX_EXP as i64 * LOG10_2_NUM / LOG10_2_DEN) as i32;

    /// Smallest positive normal number.
    pub const MIN: Float32 = Float32::from_bits(BINARY32.min_normal() as u32);

    /// Largest finite number.
    pub const MAX: Float32 = Float32::from_bits(BINARY32.max_finite(false) as u32);

    /// Difference between 1 and the next larger `Float32`.
    pub const EPSILON: Float32 = Float32::from_bits(BINARY32.epsilon() as u32);

    /// Positive infinity.
    pub const INFINITY: Float32 = Float32::from_bits(BINARY32.infinity(false) as u32);

    /// A quiet NaN.
    pub const NAN: Float32 = Float32::from_bits(BINARY32.quiet_nan(false, 0) as u32);

    /// Names accepted by [`Float32::constant`].
    pub const CONSTANT_NAMES: [&'static str; 11] = [
        "MANT_DIG",
        "DIG",
        "MIN_EXP",
        "MAX_EXP",
        "MIN_10_EXP",
        "MAX_10_EXP",
        "MIN",
        "MAX",
        "EPSILON",
        "INFINITY",
        "NAN",
    ];

    /// Looks up a constant by name.
    pub fn constant(name: &str) -> Option<Constant> {
        let c = match name {
            "MANT_DIG" => Constant::Integer(Self::MANT_DIG),
            "DIG" => Constant::Integer(Self::DIG),
            "MIN_EXP" => Constant::Integer(Self::MIN_EXP),
            "MAX_EXP" => Constant::Integer(Self::MAX_EXP),
            "MIN_10_EXP" => Constant::Integer(Self::MIN_10_EXP),
            "MAX_10_EXP" => Constant::Integer(Self::MAX_10_EXP),
            "MIN" => Constant::Float(Self::MIN),
            "MAX" => Constant::Float(Self::MAX),
            "EPSILON" => Constant::Float(Self::EPSILON),
            "INFINITY" => Constant::Float(Self::INFINITY),
            "NAN" => Constant::Float(Self::NAN),
            _ => return None,
        };
        Some(c)
    }
}
