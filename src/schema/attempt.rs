//! Attempt history entries

use crate::types::Time;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One completed or abandoned attempt at the run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Attempt {
    /// Attempt id, unique within the run but not necessarily contiguous
    pub id: i32,
    /// When the attempt started
    pub started: NaiveDateTime,
    /// Whether `started` was synchronized with an external clock
    pub is_started_synced: bool,
    /// When the attempt ended
    pub ended: NaiveDateTime,
    /// Whether `ended` was synchronized with an external clock
    pub is_ended_synced: bool,
    /// Final recorded duration, absent for attempts that were reset early
    pub time: Time,
}
