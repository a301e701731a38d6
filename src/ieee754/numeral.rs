/*
    Decimal and scientific numerals
*/

use std::iter::Peekable;
use std::str::Bytes;

use num_bigint::BigUint;
use num_traits::Zero;

use super::*;
use crate::{Error, Result};

// Decimal exponents beyond these bounds cannot produce a finite,
// nonzero binary32 value, whatever the digits are.
const MAX_DECIMAL_EXP: i64 = 39;
const MIN_DECIMAL_EXP: i64 = -46;

// Every binary32 midpoint has fewer significant decimal digits than this,
// so digits past it only matter as a nonzero/zero sticky digit.
const MAX_SIGNIFICANT_DIGITS: usize = 120;

/// An exactly parsed decimal numeral: `(-1)^negative * digits * 10^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Numeral {
    negative: bool,
    digits: BigUint,
    ndigits: i64,
    exponent: i64,
}

impl Numeral {
    /// Parses a float literal:
    ///
    /// ```text
    /// ws* [+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)? ws*
    /// ```
    ///
    /// where `digits` may contain single underscores between digits.
    pub(crate) fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidNumeral(s.to_string());
        let mut it = s.trim_matches(is_space).bytes().peekable();

        let negative = sign(&mut it);

        let mut digits = Digits::default();
        let mut exponent = 0_i64;

        let int_len = scan_digits(&mut it, |d| digits.push(d)).ok_or_else(invalid)?;

        let mut frac_len = 0;
        if it.peek() == Some(&b'.') {
            it.next();
            frac_len = scan_digits(&mut it, |d| {
                digits.push(d);
                exponent -= 1;
            })
            .ok_or_else(invalid)?;
        }

        if int_len == 0 && frac_len == 0 {
            return Err(invalid());
        }

        if matches!(it.peek(), Some(b'e' | b'E')) {
            it.next();
            let exp_negative = sign(&mut it);
            let mut e = 0_i64;
            let exp_len = scan_digits(&mut it, |d| {
                e = e.saturating_mul(10).saturating_add(d as i64);
            })
            .ok_or_else(invalid)?;
            if exp_len == 0 {
                return Err(invalid());
            }
            exponent = if exp_negative {
                exponent.saturating_sub(e)
            } else {
                exponent.saturating_add(e)
            };
        }

        if it.next().is_some() {
            return Err(invalid());
        }

        let (digits, ndigits, shift) = digits.finish();
        Ok(Self {
            negative,
            digits,
            ndigits,
            exponent: exponent.saturating_add(shift),
        })
    }

    /// Rounds this numeral to `fmt` with a single rounding. Values out of
    /// the range of `fmt` become infinities or zeros; the returned flag
    /// is true when that happened to a nonzero numeral.
    pub(crate) fn round(&self, fmt: &Format) -> (u64, bool) {
        let s = self.negative;
        if self.digits.is_zero() {
            return (fmt.zero(s), false);
        }

        // `10^(magnitude - 1) <= |value| < 10^magnitude`
        let magnitude = self.exponent.saturating_add(self.ndigits);
        if magnitude > MAX_DECIMAL_EXP {
            return (fmt.infinity(s), true);
        } else if magnitude < MIN_DECIMAL_EXP {
            return (fmt.zero(s), true);
        }

        let bits = if self.exponent >= 0 {
            let scale = num_traits::pow(BigUint::from(10_u32), self.exponent as usize);
            fmt.round_finite(s, 0, &self.digits * scale)
        } else {
            let scale = num_traits::pow(BigUint::from(10_u32), self.exponent.unsigned_abs() as usize);
            fmt.round_ratio(s, &self.digits, &scale)
        };

        let out_of_range = matches!(fmt.unpack(bits), FloatNum::Zero(_) | FloatNum::Infinity(_));
        (bits, out_of_range)
    }
}

// Significant digits of a numeral as they are scanned. Only the first
// `MAX_SIGNIFICANT_DIGITS` are kept; the rest are counted and folded
// into a single sticky digit.
#[derive(Default)]
struct Digits {
    kept: Vec<u8>,
    dropped: i64,
    sticky: bool,
}

impl Digits {
    fn push(&mut self, d: u8) {
        if d == 0 && self.kept.is_empty() {
            return;
        }
        if self.kept.len() < MAX_SIGNIFICANT_DIGITS {
            self.kept.push(d);
        } else {
            self.dropped += 1;
            self.sticky |= d != 0;
        }
    }

    // => (digits, significant digit count, exponent shift)
    fn finish(mut self) -> (BigUint, i64, i64) {
        if self.sticky {
            self.kept.push(1);
            self.dropped -= 1;
        }
        let digits = BigUint::from_radix_be(&self.kept, 10).unwrap_or_default();
        (digits, self.kept.len() as i64, self.dropped)
    }
}

// Whitespace skipped around a numeral, including vertical tab.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

// Consumes an optional sign, returning true if it was `-`.
fn sign(it: &mut Peekable<Bytes<'_>>) -> bool {
    match it.peek() {
        Some(b'-') => {
            it.next();
            true
        }
        Some(b'+') => {
            it.next();
            false
        }
        _ => false,
    }
}

// Consumes a run of decimal digits where an underscore may only
// appear between two digits. Returns the number of digits consumed,
// or `None` if an underscore is misplaced.
fn scan_digits(it: &mut Peekable<Bytes<'_>>, mut push: impl FnMut(u8)) -> Option<usize> {
    let mut n = 0;
    while let Some(&b) = it.peek() {
        match b {
            b'0'..=b'9' => {
                push(b - b'0');
                n += 1;
                it.next();
            }
            b'_' => {
                it.next();
                match it.peek() {
                    Some(b'0'..=b'9') if n > 0 => {}
                    _ => return None,
                }
            }
            _ => break,
        }
    }
    Some(n)
}
