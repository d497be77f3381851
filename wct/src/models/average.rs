// src/models/average.rs

use serde::{Serialize, Serializer};
use std::fmt;

/// Decimal average with a fixed scale of two fractional digits.
///
/// Stored as integer hundredths, so equality is exact and binary floating
/// point never enters the computation. Any remainder on the third digit
/// rounds the second digit up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Average {
    hundredths: u64,
}

impl Average {
    pub const ZERO: Self = Self { hundredths: 0 };

    /// Average of `total_length` over `count`, rounded up to two digits.
    /// Zero when `count` is zero.
    #[must_use]
    pub fn from_ratio(total_length: u64, count: u64) -> Self {
        if count == 0 {
            return Self::ZERO;
        }
        Self {
            hundredths: total_length.saturating_mul(100).div_ceil(count),
        }
    }

    #[must_use]
    pub const fn hundredths(self) -> u64 {
        self.hundredths
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}

impl Serialize for Average {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
