use std::fmt;
use std::str::FromStr;

use crate::error::SortError;

pub const DEFAULT_THRESHOLD: usize = 1000;

/// Range length at or below which quicksort hands off to insertion sort.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    pub const DEFAULT: Self = Self(DEFAULT_THRESHOLD);

    #[inline]
    pub const fn new(len: usize) -> Self {
        Self(len)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Threshold {
    type Error = SortError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| SortError::NegativeThreshold(value))
    }
}

impl FromStr for Threshold {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| SortError::InvalidThreshold(trimmed.to_owned()))?;
        Self::try_from(value)
    }
}
