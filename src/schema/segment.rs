//! Segments and their per-comparison and per-attempt times

use crate::types::Time;
use serde::{Deserialize, Serialize};

/// Comparison used by timers for the runner's best complete run.
pub const PERSONAL_BEST_COMPARISON: &str = "Personal Best";

/// One split point of the run
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Segment {
    /// Display name of the split
    pub name: String,
    /// Cumulative time at this split, one entry per comparison
    pub split_times: Vec<SplitTime>,
    /// Best duration ever recorded for this segment alone
    pub best_segment_time: Time,
    /// Duration of this segment in each attempt that reached it
    pub segment_history: Vec<SegmentTimes>,
}

impl Segment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Time recorded for the named comparison, if the comparison exists.
    pub fn split_time(&self, comparison: &str) -> Option<&Time> {
        self.split_times.iter().find(|s| s.comparison_name == comparison).map(|s| &s.time)
    }
}

/// A comparison entry (e.g. "Personal Best") at one segment
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SplitTime {
    pub comparison_name: String,
    pub time: Time,
}

/// Duration of a segment in one attempt
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SegmentTimes {
    /// Id of the attempt this duration belongs to
    pub id: i32,
    pub time: Time,
}
