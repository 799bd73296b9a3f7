//! Value types shared by every part of a splits document.
//!
//! - [`TimeSpan`] is the fixed-precision duration and owns the `H:MM:SS.fffffff` grammar
//! - [`RealTime`] / [`GameTime`] tag a span with its timing method
//! - [`Time`] pairs the two, either of which may be absent
//! - [`Offset`] is a signed span used for the run's starting point
//! - [`timestamp`] handles the calendar timestamps on attempts
//!
//! ```rust
//! use splitwrapper::types::{Offset, TimeSpan};
//!
//! let offset = Offset::parse("-0:00:03.5000000").unwrap();
//! assert!(offset.is_negative);
//! assert_eq!(offset.value, TimeSpan::from_hms_micros(0, 0, 3, 500_000).unwrap());
//! assert_eq!(offset.to_string(), "-0:00:03.5000000");
//! ```

mod offset;
mod time;
mod time_span;
pub mod timestamp;

pub use offset::Offset;
pub use time::{GameTime, RealTime, Time};
pub use time_span::TimeSpan;
