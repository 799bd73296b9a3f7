//! Type-safe reader and writer for speedrun splits documents.
//!
//! A splits document records everything a speedrun timer knows about one
//! game/category: the run's segments, the times for each comparison, the best
//! time ever achieved per segment, and the history of every attempt.
//!
//! # Features
//!
//! - **Lossless times**: durations are fixed-precision microseconds, never floats
//! - **Explicit absence**: a missing time is `None`, never a zero
//! - **Tolerant reading**: unknown elements are skipped; required fields are enforced
//! - **Compatible writing**: the full element skeleton other tools expect is always emitted
//!
//! # Quick Start
//!
//! ```rust
//! use splitwrapper::{load_from_text, to_text};
//!
//! # fn main() -> splitwrapper::Result<()> {
//! let document = r#"<Run version="1.7.0">
//!   <GameName>Foo</GameName>
//!   <CategoryName>Any%</CategoryName>
//!   <Offset>0:00:00.0000000</Offset>
//!   <AttemptCount>0</AttemptCount>
//!   <Segments>
//!     <Segment><Name>End</Name><BestSegmentTime><RealTime>0:01:30.2500000</RealTime></BestSegmentTime></Segment>
//!   </Segments>
//! </Run>"#;
//!
//! let splits = load_from_text(document)?;
//! let best = splits.segments[0].best_segment_time.real_time.unwrap();
//! assert_eq!(best.to_string(), "0:01:30.2500000");
//!
//! let written = to_text(&splits);
//! assert_eq!(load_from_text(&written)?, splits);
//! # Ok(())
//! # }
//! ```

pub mod codec;
mod error;
pub mod markup;
pub mod schema;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

pub use codec::{
    FORMAT_VERSION, WriterOptions, load_from_path, load_from_reader, load_from_text, to_text,
    to_text_with, write_to_path, write_to_path_with, write_to_writer,
};
pub use error::*;
pub use schema::{Attempt, Segment, SegmentTimes, SplitTime, Splits};
pub use types::{GameTime, Offset, RealTime, Time, TimeSpan};
