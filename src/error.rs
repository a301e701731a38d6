/*
    Errors
*/

use thiserror::Error;

/// Errors raised while coercing a value into a [`Float32`](crate::Float32).
///
/// Once both operands are `Float32` values, no operation fails:
/// special results are expressed as NaN or an infinity instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source kind is not one of the recognized numeric kinds.
    #[error("can't convert {0} into Float32")]
    Type(&'static str),
    /// The source is numeric but has no real binary32 value.
    #[error("can't convert {0} into Float32")]
    Range(String),
    /// The string is not a decimal or scientific float literal.
    #[error("invalid value for Float32(): {0:?}")]
    InvalidNumeral(String),
}

impl Error {
    /// Returns true if this is a type error.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::Type(_))
    }

    /// Returns true if this is a range error.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Error::Range(_))
    }
}

/// Result alias for coercions into [`Float32`](crate::Float32).
pub type Result<T> = std::result::Result<T, Error>;
