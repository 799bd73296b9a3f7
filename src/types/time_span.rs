//! Fixed-precision elapsed durations and their text grammar.
//!
//! Splits documents store every duration as `H:MM:SS.fffffff`. The hour field has
//! no fixed width, minutes and seconds are two digits, and the fraction carries
//! six real digits followed by one constant padding digit. The padding digit is
//! dropped on parse and written back as a literal `0`.

use crate::{Result, SplitsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MICROS_PER_SECOND: u64 = 1_000_000;
const MICROS_PER_MINUTE: u64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u64 = 60 * MICROS_PER_MINUTE;

/// Number of fractional digits that carry real precision.
const FRACTION_DIGITS: usize = 6;

/// An unsigned elapsed duration with microsecond precision.
///
/// Unlike a time-of-day, a `TimeSpan` does not wrap at 24 hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSpan {
    micros: u64,
}

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan { micros: 0 };

    pub const fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    /// Build a span from clock-style components.
    ///
    /// Returns `None` when minutes or seconds are 60 or more, when the fraction is
    /// a full second or more, or when the total does not fit.
    pub fn from_hms_micros(hours: u64, minutes: u64, seconds: u64, micros: u64) -> Option<Self> {
        if minutes >= 60 || seconds >= 60 || micros >= MICROS_PER_SECOND {
            return None;
        }
        let total = hours
            .checked_mul(MICROS_PER_HOUR)?
            .checked_add(minutes * MICROS_PER_MINUTE + seconds * MICROS_PER_SECOND + micros)?;
        Some(Self { micros: total })
    }

    pub const fn as_micros(self) -> u64 {
        self.micros
    }

    pub const fn hours(self) -> u64 {
        self.micros / MICROS_PER_HOUR
    }

    pub const fn minutes(self) -> u64 {
        (self.micros % MICROS_PER_HOUR) / MICROS_PER_MINUTE
    }

    pub const fn seconds(self) -> u64 {
        (self.micros % MICROS_PER_MINUTE) / MICROS_PER_SECOND
    }

    pub const fn subsec_micros(self) -> u64 {
        self.micros % MICROS_PER_SECOND
    }

    /// Convert to a standard library duration.
    pub const fn to_std(self) -> std::time::Duration {
        std::time::Duration::from_micros(self.micros)
    }

    /// Parse the unsigned `H:MM:SS[.fffffff]` grammar.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        // The fraction is cut off first: its padding character may be any char, ':' included.
        let (clock, fraction) = match text.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (text, None),
        };
        let fields: Vec<&str> = clock.split(':').collect();
        let [hours, minutes, seconds] = fields.as_slice() else {
            return Err(SplitsError::format_error(
                "time",
                format!("expected three ':'-separated fields in {text:?}"),
            ));
        };

        let hours = parse_field(hours, "hours", text)?;
        let minutes = parse_field(minutes, "minutes", text)?;
        let seconds = parse_field(seconds, "seconds", text)?;
        let micros = match fraction {
            Some(fraction) => parse_fraction(fraction, text)?,
            None => 0,
        };

        Self::from_hms_micros(hours, minutes, seconds, micros).ok_or_else(|| {
            SplitsError::format_error("time", format!("component out of range in {text:?}"))
        })
    }
}

fn parse_field(field: &str, name: &str, text: &str) -> Result<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SplitsError::format_error(
            "time",
            format!("{name} field {field:?} is not a number in {text:?}"),
        ));
    }
    field
        .parse()
        .map_err(|e| SplitsError::format_error("time", format!("{name} in {text:?}: {e}")))
}

/// Read the fractional suffix: up to six digits plus one discarded padding character.
fn parse_fraction(fraction: &str, text: &str) -> Result<u64> {
    let mut chars = fraction.chars();
    chars.next_back();
    let digits = chars.as_str();

    if digits.is_empty()
        || digits.len() > FRACTION_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(SplitsError::format_error(
            "time",
            format!("fractional seconds {fraction:?} are malformed in {text:?}"),
        ));
    }

    let scale = 10u64.pow((FRACTION_DIGITS - digits.len()) as u32);
    digits
        .parse::<u64>()
        .map(|value| value * scale)
        .map_err(|e| SplitsError::format_error("time", format!("fraction in {text:?}: {e}")))
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}.{:06}0",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.subsec_micros()
        )
    }
}

impl FromStr for TimeSpan {
    type Err = SplitsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<std::time::Duration> for TimeSpan {
    /// Sub-microsecond precision is truncated; durations beyond `u64::MAX` microseconds saturate.
    fn from(duration: std::time::Duration) -> Self {
        Self { micros: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn renders_fixed_width_layout() {
        let span = TimeSpan::from_hms_micros(0, 10, 0, 0).unwrap();
        assert_eq!(span.to_string(), "0:10:00.0000000");

        let span = TimeSpan::from_hms_micros(1, 2, 3, 45).unwrap();
        assert_eq!(span.to_string(), "1:02:03.0000450");
    }

    #[test]
    fn does_not_wrap_past_a_day() {
        let span = TimeSpan::from_hms_micros(27, 0, 5, 500_000).unwrap();
        assert_eq!(span.to_string(), "27:00:05.5000000");
        assert_eq!(TimeSpan::parse("27:00:05.5000000").unwrap(), span);
    }

    #[test]
    fn padding_character_is_discarded_not_parsed() {
        let a = TimeSpan::parse("0:00:01.1234567").unwrap();
        let b = TimeSpan::parse("0:00:01.123456X").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.subsec_micros(), 123_456);

        for padding in [':', '.', '-'] {
            let span = TimeSpan::parse(&format!("1:02:03.000045{padding}")).unwrap();
            assert_eq!(span, TimeSpan::from_hms_micros(1, 2, 3, 45).unwrap());
        }
    }

    #[test]
    fn short_fractions_are_right_padded() {
        let span = TimeSpan::parse("0:00:02.50").unwrap();
        assert_eq!(span.subsec_micros(), 500_000);
    }

    #[test]
    fn whole_seconds_need_no_fraction() {
        let span = TimeSpan::parse("2:03:04").unwrap();
        assert_eq!((span.hours(), span.minutes(), span.seconds()), (2, 3, 4));
        assert_eq!(span.subsec_micros(), 0);
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in [
            "",
            "1:02",
            "1:02:03:04",
            "1:02:03.",
            "1:02:03.0",
            "1:02:03.12345678",
            "1:02:03.12a4560",
            "a:02:03",
            "-1:02:03",
            "+1:02:03",
            "1:60:00",
            "1:00:60",
        ] {
            let result = TimeSpan::parse(bad);
            assert!(
                matches!(result, Err(SplitsError::Format { .. })),
                "{bad:?} should be a format error, got {result:?}"
            );
        }
    }

    #[test]
    fn converts_with_std_duration() {
        let span = TimeSpan::from_hms_micros(0, 1, 30, 250_000).unwrap();
        assert_eq!(span.to_std(), std::time::Duration::from_millis(90_250));
        assert_eq!(TimeSpan::from(span.to_std()), span);
    }

    proptest! {
        #[test]
        fn grammar_round_trips(
            hours in 0u64..24,
            minutes in 0u64..60,
            seconds in 0u64..60,
            micros in 0u64..1_000_000,
        ) {
            let span = TimeSpan::from_hms_micros(hours, minutes, seconds, micros).unwrap();
            let rendered = span.to_string();
            prop_assert!(rendered.ends_with('0'));
            prop_assert_eq!(TimeSpan::parse(&rendered).unwrap(), span);
        }

        #[test]
        fn parse_never_panics(text in ".*") {
            let _ = TimeSpan::parse(&text);
        }
    }
}
