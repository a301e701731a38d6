/*
    Rounding
*/

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use super::*;

// Rounding utilities
impl Format {
    // Returns true if the rounding information implies the truncated
    // significand, viewed as an integer, should be incremented by 1.
    // Round to nearest, ties to even:
    //  - no half bit => truncate
    //  - half bit and sticky bit => increment
    //  - tie => increment if lsb since we want it to be 0
    fn round_requires_increment(lsb: bool, half_bit: bool, sticky_bit: bool) -> bool {
        half_bit && (sticky_bit || lsb)
    }

    /// Rounds the value `(-1)^s * c * 2^exp` to this format and returns
    /// the packed result. Overflow rounds to infinity and underflow
    /// rounds through the subnormals down to a signed zero.
    pub(crate) fn round_finite(&self, s: bool, exp: i64, c: BigUint) -> u64 {
        if c.is_zero() {
            return self.zero(s);
        }

        // Choose the shift so the kept significand has at most PREC bits
        // and its exponent is never below EXPMIN.
        let prec = self.prec() as i64;
        let shift = i64::max(c.bits() as i64 - prec, self.expmin() - exp);

        let (c, exp) = if shift <= 0 {
            // exact: no bits are shifted off
            (c << (-shift) as u64, exp + shift)
        } else {
            // `half_bit` - MSB of the discarded part
            // `sticky_bit` - OR of the rest of the discarded part
            let shift = shift as u64;
            let half_bit = c.bit(shift - 1);
            let sticky_bit = c.trailing_zeros().is_some_and(|tz| tz < shift - 1);
            let mut c_new = c >> shift;
            let mut exp = exp + shift as i64;

            if Self::round_requires_increment(c_new.bit(0), half_bit, sticky_bit) {
                c_new += 1_u32;
                if c_new.bits() as i64 > prec {
                    // carried out of the significand
                    c_new >>= 1_u32;
                    exp += 1;
                }
            }

            (c_new, exp)
        };

        if exp > self.expmax() {
            log::trace!("rounding overflowed to infinity (exponent {})", exp);
            return self.infinity(s);
        }

        let c = c.iter_u64_digits().next().unwrap_or(0);
        if c == 0 {
            self.zero(s)
        } else if c >> self.m() != 0 {
            // leading 1 present => normal
            // EXPMIN corresponds to the biased exponent 1
            let e = (exp - self.expmin() + 1) as u64;
            self.encode(s, e, c & ((1 << self.m()) - 1))
        } else {
            // subnormal, `exp` is EXPMIN
            self.encode(s, 0, c)
        }
    }

    /// Rounds the value `(-1)^s * num / den` to this format with a single
    /// rounding and returns the packed result. `den` must be nonzero.
    pub(crate) fn round_ratio(&self, s: bool, num: &BigUint, den: &BigUint) -> u64 {
        if num.is_zero() {
            return self.zero(s);
        }

        // Scale by `2^k` so that the integer quotient has at least
        // PREC + 2 bits, then fold the remainder into a sticky bit
        // below the quotient.
        let k = self.prec() as i64 + 2 - (num.bits() as i64 - den.bits() as i64);
        let (n, d) = if k >= 0 {
            (num << k as u64, den.clone())
        } else {
            (num.clone(), den << (-k) as u64)
        };

        let (q, r) = n.div_rem(&d);
        let sticky = u32::from(!r.is_zero());
        let c = (q << 1_u32) | BigUint::from(sticky);
        self.round_finite(s, -k - 1, c)
    }

    /// Converts a packed value of format `from` to this format.
    /// NaNs stay NaNs: the most significant payload bits are kept
    /// and the result is always quiet.
    pub(crate) fn convert(&self, from: &Format, bits: u64) -> u64 {
        match from.unpack(bits) {
            FloatNum::Zero(s) => self.zero(s),
            FloatNum::Subnormal(s, c) => self.round_finite(s, from.expmin(), BigUint::from(c)),
            FloatNum::Normal(s, exp, c) => self.round_finite(s, exp, BigUint::from(c)),
            FloatNum::Infinity(s) => self.infinity(s),
            FloatNum::Nan(s, _, payload) => {
                let (src, dst) = (from.nan_payload_size(), self.nan_payload_size());
                let payload = if src < dst {
                    // payload is put in the most significant bits
                    payload << (dst - src)
                } else {
                    // only keep the most significant bits
                    payload >> (src - dst)
                };
                self.quiet_nan(s, payload)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_even() {
        // 2^24 + 1 is halfway between 2^24 and 2^24 + 2
        let bits = BINARY32.round_finite(false, 0, BigUint::from((1_u64 << 24) + 1));
        assert_eq!(bits as u32, (16777216.0_f32).to_bits());

        // 2^24 + 3 is halfway between 2^24 + 2 and 2^24 + 4
        let bits = BINARY32.round_finite(false, 0, BigUint::from((1_u64 << 24) + 3));
        assert_eq!(bits as u32, (16777220.0_f32).to_bits());
    }

    #[test]
    fn carry_into_exponent() {
        // 2^25 - 1 rounds up to 2^25
        let bits = BINARY32.round_finite(true, 0, BigUint::from((1_u64 << 25) - 1));
        assert_eq!(bits as u32, (-33554432.0_f32).to_bits());
    }

    #[test]
    fn subnormal_boundaries() {
        // smallest subnormal
        let bits = BINARY32.round_finite(false, -149, BigUint::from(1_u32));
        assert_eq!(bits as u32, 1);

        // half of the smallest subnormal is a tie with zero
        let bits = BINARY32.round_finite(false, -150, BigUint::from(1_u32));
        assert_eq!(bits as u32, 0);

        // slightly more than half rounds up
        let bits = BINARY32.round_finite(false, -151, BigUint::from(3_u32));
        assert_eq!(bits as u32, 1);

        // largest subnormal carries into the smallest normal
        let bits = BINARY32.round_finite(false, -150, BigUint::from((1_u64 << 24) - 1));
        assert_eq!(bits as u32, f32::MIN_POSITIVE.to_bits());
    }

    #[test]
    fn overflow() {
        let bits = BINARY32.round_finite(false, 128, BigUint::from(1_u32));
        assert_eq!(bits as u32, f32::INFINITY.to_bits());

        // MAX plus half an ulp is a tie that rounds to the even infinity
        let c = (BigUint::from(1_u64 << 25) - BigUint::from(1_u32)) << 103_u32;
        let bits = BINARY32.round_finite(false, 0, c);
        assert_eq!(bits as u32, f32::INFINITY.to_bits());
    }

    #[test]
    fn ratio() {
        let one = BigUint::from(1_u32);
        let three = BigUint::from(3_u32);
        assert_eq!(BINARY32.round_ratio(false, &one, &three) as u32, (1.0_f32 / 3.0).to_bits());
        assert_eq!(BINARY64.round_ratio(true, &one, &three), (-1.0_f64 / 3.0).to_bits());

        let ten = BigUint::from(10_u32);
        assert_eq!(BINARY32.round_ratio(false, &one, &ten) as u32, 0.1_f32.to_bits());
    }

    #[test]
    fn convert_nan() {
        let bits = BINARY32.convert(&BINARY64, f64::NAN.to_bits());
        assert!(f32::from_bits(bits as u32).is_nan());

        // signaling NaNs are quieted
        let snan = BINARY64.encode(false, (1 << 11) - 1, 1);
        let bits = BINARY32.convert(&BINARY64, snan);
        assert!(matches!(BINARY32.unpack(bits), FloatNum::Nan(false, false, _)));
    }
}
