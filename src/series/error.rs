//! Series evaluation errors

use std::fmt;
use std::error::Error;

/// Why did a series fail to evaluate?
#[derive(Clone,PartialEq)]
pub enum SeriesError {
    /// The number of terms was negative.
    InvalidTerms(i64),
    /// A term could not be evaluated at the given expansion point.
    Domain(String),
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeriesError::InvalidTerms(n) => write!(f, "number of terms must be a non-negative integer, got {}", n),
            SeriesError::Domain(x) => write!(f, "cannot expand about '{}', expansion point must be finite", x),
        }
    }
}

impl fmt::Debug for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Error for SeriesError {}

impl SeriesError {
    pub fn domain<T: fmt::Display>(x: T) -> Self {
        Self::Domain(x.to_string())
    }
}
