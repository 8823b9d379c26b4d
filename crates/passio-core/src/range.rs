use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Inclusive range of candidate lengths.
///
/// Both bounds are at least 1 and `min <= max`; [`LengthRange::new`] is the
/// only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// Validate raw bounds as given on the command line.
    ///
    /// Signed input is accepted so that negative values produce the same
    /// error as zero instead of a parse failure.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min < 1 || max < 1 {
            return Err(Error::NonPositiveLength { min, max });
        }

        let (min, max) = match (usize::try_from(min), usize::try_from(max)) {
            (Ok(min), Ok(max)) => (min, max),
            _ => return Err(Error::NonPositiveLength { min, max }),
        };

        if min > max {
            return Err(Error::InvertedRange { min, max });
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        self.lengths().contains(&length)
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
