//! Signed start offset of a run.

use super::TimeSpan;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the run's clock starts, relative to zero.
///
/// A negative offset gives the runner a countdown before the first split; a
/// positive one starts the clock already running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offset {
    pub value: TimeSpan,
    pub is_negative: bool,
}

impl Offset {
    pub const fn new(value: TimeSpan, is_negative: bool) -> Self {
        Self { value, is_negative }
    }

    /// Parse `[-]H:MM:SS[.fffffff]`.
    ///
    /// The sign is stripped here so the duration grammar only ever sees digits.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        match text.strip_prefix('-') {
            Some(magnitude) => Ok(Self { value: TimeSpan::parse(magnitude)?, is_negative: true }),
            None => Ok(Self { value: TimeSpan::parse(text)?, is_negative: false }),
        }
    }

    /// Offset in microseconds with the sign applied.
    pub fn signed_micros(&self) -> i128 {
        let magnitude = i128::from(self.value.as_micros());
        if self.is_negative { -magnitude } else { magnitude }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.value)
    }
}

impl FromStr for Offset {
    type Err = crate::SplitsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
