//! # Splits Document Model
//!
//! In-memory form of a splits document. The hierarchy mirrors the document:
//!
//! ```text
//! Splits (Run)
//! ├── GameName / CategoryName / Offset / AttemptCount
//! ├── AttemptHistory ── Attempt* ── Time
//! └── Segments ── Segment*
//!                 ├── SplitTimes ── SplitTime* ── Time
//!                 ├── BestSegmentTime ── Time
//!                 └── SegmentHistory ── SegmentTimes* ── Time
//! ```
//!
//! The model carries no behavior beyond structural queries. Reading and writing
//! documents lives in [`crate::codec`].

use crate::types::Offset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod attempt;
pub mod segment;

pub use attempt::Attempt;
pub use segment::{PERSONAL_BEST_COMPARISON, Segment, SegmentTimes, SplitTime};

/// Complete timing record of one game/category: the root of a splits document
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Splits {
    /// Game being run
    pub game_name: String,
    /// Category within the game (e.g. "Any%")
    pub category_name: String,
    /// Where the clock starts relative to zero
    pub offset: Offset,
    /// Number of attempts started, stored as-is.
    ///
    /// This is independent of `attempt_history.len()` and is never recomputed:
    /// pruned histories legitimately carry a larger count.
    pub attempt_count: i64,
    /// Attempts in document order
    pub attempt_history: Vec<Attempt>,
    /// Segments in run order
    pub segments: Vec<Segment>,
}

impl Splits {
    pub fn new(game_name: impl Into<String>, category_name: impl Into<String>) -> Self {
        Self { game_name: game_name.into(), category_name: category_name.into(), ..Default::default() }
    }

    /// Look up an attempt by id.
    pub fn attempt(&self, id: i32) -> Option<&Attempt> {
        self.attempt_history.iter().find(|attempt| attempt.id == id)
    }

    /// Segment history ids that do not match any attempt in the history.
    ///
    /// Parsing does not enforce this relationship; hosts that want a stricter
    /// contract can query it after loading. Returned ids are sorted and unique.
    pub fn orphaned_history_ids(&self) -> Vec<i32> {
        let known: BTreeSet<i32> = self.attempt_history.iter().map(|a| a.id).collect();
        let orphaned: BTreeSet<i32> = self
            .segments
            .iter()
            .flat_map(|segment| segment.segment_history.iter())
            .map(|entry| entry.id)
            .filter(|id| !known.contains(id))
            .collect();
        orphaned.into_iter().collect()
    }
}
