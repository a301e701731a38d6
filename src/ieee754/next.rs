/*
    Stepping by one ulp
*/

use super::*;

impl Float32 {
    /// Returns the smallest `Float32` strictly greater than this one.
    ///
    /// `MAX` steps to `INFINITY`, `INFINITY` stays put, `-INFINITY`
    /// steps to `-MAX` and NaN stays NaN. Both zeros step to the
    /// smallest positive subnormal.
    pub fn next_float(self) -> Self {
        match self.unpack() {
            FloatNum::Nan(_, _, _) | FloatNum::Infinity(false) => self,
            FloatNum::Zero(_) => Self::from_bits(BINARY32.min_subnormal() as u32),
            // moving toward zero from below shrinks the magnitude
            _ if self.sign() => Self::from_bits(self.bits - 1),
            _ => Self::from_bits(self.bits + 1),
        }
    }

    /// Returns the largest `Float32` strictly less than this one.
    ///
    /// The mirror of [`Float32::next_float`]: `-MAX` steps to
    /// `-INFINITY`, `-INFINITY` stays put, `INFINITY` steps to `MAX`
    /// and NaN stays NaN.
    pub fn prev_float(self) -> Self {
        match self.unpack() {
            FloatNum::Nan(_, _, _) | FloatNum::Infinity(true) => self,
            FloatNum::Zero(_) => Self::from_bits(SIGN_BIT | BINARY32.min_subnormal() as u32),
            _ if self.sign() => Self::from_bits(self.bits + 1),
            _ => Self::from_bits(self.bits - 1),
        }
    }
}
