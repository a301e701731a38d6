/*
    Traits relevant to rounding
*/

use crate::Number;

/// A rounding operation from some source value to a `Number`.
///
/// For any computer number system, most mathematical operators
/// can be decomposed into two operations:
///  - a real number operation: `R^n -> R`, and
///  - a rounding operation: `R -> R`.
/// `Round` is the second operation. Rounding is always to nearest,
/// ties to even, and never fails: values too large for `N` become
/// infinities and values too small become zeros.
pub trait Round<N: Number> {
    /// Rounds this value to the nearest `N`.
    fn round_to(&self) -> N;
}
