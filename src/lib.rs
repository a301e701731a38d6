/*
    Top-level
*/

//! A single-precision (IEEE-754 binary32) number type.
//!
//! [`Float32`] is a distinct value type: it is never silently promoted
//! to `f64`, and it can only be produced from a closed set of numeric
//! sources (see [`Source`]) or as the result of an operation on other
//! `Float32` values. Every result is rounded to binary32 using
//! round-to-nearest-even.
//!
//! ```
//! use float32::{to_float32, Float32};
//!
//! let x = to_float32(1).unwrap();
//! let y = to_float32("2.0").unwrap();
//! assert_eq!(x + y, 3);
//! assert_eq!(x.next_float() - x, Float32::EPSILON);
//! ```
//!
//! There is no way to obtain a `Float32` without a source value.
//!
//! ```compile_fail
//! let x = float32::Float32::default();
//! ```
//!
//! ```compile_fail
//! let x = float32::Float32::new();
//! ```

mod error;
mod number;
mod round;

pub mod ieee754;
pub use error::*;
pub use ieee754::{to_float32, Constant, Float32, Source};
pub use number::*;
pub use round::*;
