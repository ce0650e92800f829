use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Configuration errors. Sorting itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Insertion-sort threshold was given as a negative number.
    NegativeThreshold(i64),

    /// Insertion-sort threshold could not be parsed as an integer.
    InvalidThreshold(String),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NegativeThreshold(value) => {
                write!(f, "insertion threshold must be non-negative, got {value}")
            }
            Self::InvalidThreshold(raw) => {
                write!(f, "insertion threshold is not an integer: {raw:?}")
            }
        }
    }
}

impl Error for SortError {}
