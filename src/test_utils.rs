//! Test utilities: sample runs and fixture lookup
//!
//! Shared by unit tests and (with the `benchmark` feature) the criterion benches.

#![cfg(any(test, feature = "benchmark"))]

use crate::schema::{
    Attempt, PERSONAL_BEST_COMPARISON, Segment, SegmentTimes, SplitTime, Splits,
};
use crate::types::{Offset, Time, TimeSpan};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;

/// Smallest useful document: one attempt, one segment, one comparison.
pub const MINIMAL_DOCUMENT: &str = include_str!("../test-data/minimal.lss");

/// Directory holding document fixtures, relative to the crate manifest.
pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

/// Path of a named fixture under `test-data/`.
pub fn test_data_path(name: &str) -> PathBuf {
    test_data_dir().join(name)
}

fn at(minute_offset: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|d| d.and_hms_opt(20, minute_offset % 60, 0))
        .unwrap_or_default()
}

fn span(minutes: u64, seconds: u64, micros: u64) -> TimeSpan {
    TimeSpan::from_hms_micros(0, minutes, seconds, micros).unwrap_or_default()
}

/// Completed attempt with a real time; id drives the timestamps.
pub fn sample_attempt(id: i32) -> Attempt {
    let minute = id.unsigned_abs() % 50;
    Attempt {
        id,
        started: at(minute),
        is_started_synced: true,
        ended: at(minute + 10),
        is_ended_synced: false,
        time: Time::real(span(9, 58, 123_456)),
    }
}

/// Three-segment run with a pruned history, game-time-only entries and an empty best segment.
pub fn sample_splits() -> Splits {
    let opening = Segment {
        name: "Opening".to_string(),
        split_times: vec![SplitTime {
            comparison_name: PERSONAL_BEST_COMPARISON.to_string(),
            time: Time::real(span(2, 10, 500_000)),
        }],
        best_segment_time: Time::real(span(2, 5, 0)),
        segment_history: vec![
            SegmentTimes { id: 1, time: Time::real(span(2, 10, 500_000)) },
            SegmentTimes { id: 2, time: Time::EMPTY },
        ],
    };
    let mid = Segment {
        name: "Mid".to_string(),
        split_times: vec![SplitTime {
            comparison_name: PERSONAL_BEST_COMPARISON.to_string(),
            time: Time::new(Some(span(6, 0, 1)), Some(span(5, 45, 0))),
        }],
        best_segment_time: Time::game(span(3, 30, 999_999)),
        segment_history: vec![SegmentTimes { id: 1, time: Time::game(span(3, 35, 0)) }],
    };
    let ending = Segment {
        name: "Ending".to_string(),
        split_times: vec![SplitTime {
            comparison_name: PERSONAL_BEST_COMPARISON.to_string(),
            time: Time::EMPTY,
        }],
        best_segment_time: Time::EMPTY,
        segment_history: vec![],
    };

    let mut abandoned = sample_attempt(2);
    abandoned.time = Time::EMPTY;

    Splits {
        game_name: "Foo & Friends".to_string(),
        category_name: "Any%".to_string(),
        offset: Offset::new(span(0, 1, 500_000), true),
        attempt_count: 5,
        attempt_history: vec![sample_attempt(1), abandoned],
        segments: vec![opening, mid, ending],
    }
}
