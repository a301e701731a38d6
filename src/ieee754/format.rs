/*
    Binary interchange formats: parameters and bit layout
*/

use bitvec::{field::BitField, prelude::*};

use crate::Class;

type Bits = BitArray<u64, Lsb0>;

macro_rules! assert_valid_format {
    ($E:expr, $N:expr) => {
        assert!(
            (2 <= $E) && ($E <= 15),
            "invalid exponent width, must be 2 <= E <= 15"
        );
        assert!(
            (2 + $E <= $N) && ($N <= 64),
            "invalid total width, must be 2 + E <= N <= 64"
        );
    };
}

/// Parameters of a binary interchange format with `es` exponent bits
/// and `nbits` bits overall. Packed values are carried in the low
/// `nbits` bits of a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Format {
    es: usize,
    nbits: usize,
}

/// IEEE-754 single precision.
pub(crate) const BINARY32: Format = Format::new(8, 32);

/// IEEE-754 double precision.
pub(crate) const BINARY64: Format = Format::new(11, 64);

// Unpacked encoding grouped by classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FloatNum {
    // signed zero
    // => (sign)
    Zero(bool),
    // subnormal, value is `c * 2^EXPMIN`
    // => (sign, c)
    Subnormal(bool, u64),
    // normal, value is `c * 2^exp` where `c` has exactly PREC bits
    // => (sign, exp, c)
    Normal(bool, i64, u64),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign, signaling, payload)
    Nan(bool, bool, u64),
}

impl FloatNum {
    pub(crate) fn class(&self) -> Class {
        match self {
            FloatNum::Zero(_) => Class::Zero,
            FloatNum::Subnormal(_, _) => Class::Subnormal,
            FloatNum::Normal(_, _, _) => Class::Normal,
            FloatNum::Infinity(_) => Class::Infinity,
            FloatNum::Nan(_, _, _) => Class::Nan,
        }
    }
}

// Format parameters
impl Format {
    pub(crate) const fn new(es: usize, nbits: usize) -> Self {
        assert_valid_format!(es, nbits);
        Self { es, nbits }
    }

    /// Number of (binary) digits when the significand is expressed
    /// as an integer. This is just `self.m() + 1`.
    pub(crate) const fn prec(&self) -> usize {
        self.nbits - self.es
    }

    /// Bitwidth of the mantissa field.
    pub(crate) const fn m(&self) -> usize {
        self.prec() - 1
    }

    /// Exponent of the largest finite value in the form `(-1)^s 2^e m`
    /// where `m` is a fraction between 1 and 2.
    pub(crate) const fn emax(&self) -> i64 {
        (1 << (self.es - 1)) - 1
    }

    /// Exponent of the smallest normal value in the form `(-1)^s 2^e m`.
    /// This is just `1 - self.emax()`.
    pub(crate) const fn emin(&self) -> i64 {
        1 - self.emax()
    }

    /// Exponent of the largest finite value in the form `(-1)^s 2^e c`
    /// where `c` is an integer.
    pub(crate) const fn expmax(&self) -> i64 {
        self.emax() - self.m() as i64
    }

    /// Exponent of the smallest normal value in the form `(-1)^s 2^e c`
    /// where `c` is an integer.
    pub(crate) const fn expmin(&self) -> i64 {
        self.emin() - self.m() as i64
    }

    /// The exponent field bias.
    pub(crate) const fn bias(&self) -> i64 {
        self.emax()
    }

    /// Bitwidth of the NaN payload (the mantissa minus its quiet bit).
    pub(crate) const fn nan_payload_size(&self) -> usize {
        self.m() - 1
    }

    const fn exponent_ones(&self) -> u64 {
        (1 << self.es) - 1
    }

    const fn mantissa_mask(&self) -> u64 {
        (1 << self.m()) - 1
    }
}

// Packing
impl Format {
    /// Packs the sign, biased exponent and mantissa fields.
    /// The fields must already fit their widths.
    pub(crate) const fn encode(&self, s: bool, e: u64, m: u64) -> u64 {
        ((s as u64) << (self.nbits - 1)) | (e << self.m()) | m
    }

    pub(crate) const fn zero(&self, s: bool) -> u64 {
        self.encode(s, 0, 0)
    }

    pub(crate) const fn infinity(&self, s: bool) -> u64 {
        self.encode(s, self.exponent_ones(), 0)
    }

    /// A quiet NaN carrying `payload` below the quiet bit.
    pub(crate) const fn quiet_nan(&self, s: bool, payload: u64) -> u64 {
        let quiet = 1 << (self.m() - 1);
        self.encode(s, self.exponent_ones(), quiet | (payload & (quiet - 1)))
    }

    /// Largest finite magnitude.
    pub(crate) const fn max_finite(&self, s: bool) -> u64 {
        self.encode(s, self.exponent_ones() - 1, self.mantissa_mask())
    }

    /// Smallest positive normal value.
    pub(crate) const fn min_normal(&self) -> u64 {
        self.encode(false, 1, 0)
    }

    /// Smallest positive subnormal value.
    pub(crate) const fn min_subnormal(&self) -> u64 {
        self.encode(false, 0, 1)
    }

    /// Gap between 1 and the next larger representable value.
    pub(crate) const fn epsilon(&self) -> u64 {
        self.encode(false, (self.bias() - self.m() as i64) as u64, 0)
    }

    /// Mask selecting every bit but the sign.
    pub(crate) const fn magnitude_mask(&self) -> u64 {
        (1 << (self.nbits - 1)) - 1
    }

    // Splices a packed representation into the sign, exponent,
    // and mantissa field.
    fn split_packed(&self, bits: u64) -> (bool, u64, u64) {
        let bv = Bits::new(bits);
        let m = self.m();
        (
            bv[self.nbits - 1],
            bv[m..(self.nbits - 1)].load_le::<u64>(),
            bv[..m].load_le::<u64>(),
        )
    }

    /// Decodes a packed representation.
    pub(crate) fn unpack(&self, bits: u64) -> FloatNum {
        let (s, e, m) = self.split_packed(bits);
        if e == self.exponent_ones() {
            if m == 0 {
                FloatNum::Infinity(s)
            } else {
                let quiet = 1 << (self.m() - 1);
                FloatNum::Nan(s, (m & quiet) == 0, m & (quiet - 1))
            }
        } else if e == 0 {
            if m == 0 {
                FloatNum::Zero(s)
            } else {
                FloatNum::Subnormal(s, m)
            }
        } else {
            let exp = e as i64 - self.bias() - self.m() as i64;
            FloatNum::Normal(s, exp, m | (1 << self.m()))
        }
    }
}
