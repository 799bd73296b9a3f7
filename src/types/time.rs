//! Real-time and game-time pairs.

use super::TimeSpan;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock elapsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealTime(pub TimeSpan);

/// In-game-clock elapsed duration, independent of real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameTime(pub TimeSpan);

impl RealTime {
    pub const fn value(self) -> TimeSpan {
        self.0
    }
}

impl GameTime {
    pub const fn value(self) -> TimeSpan {
        self.0
    }
}

impl fmt::Display for RealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A duration measured by either or both timing methods.
///
/// Either value may be absent. A `Time` with neither is "no time recorded",
/// which is distinct from a recorded zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Time {
    pub real_time: Option<RealTime>,
    pub game_time: Option<GameTime>,
}

impl Time {
    pub const EMPTY: Time = Time { real_time: None, game_time: None };

    pub fn new(real_time: Option<TimeSpan>, game_time: Option<TimeSpan>) -> Self {
        Self { real_time: real_time.map(RealTime), game_time: game_time.map(GameTime) }
    }

    /// A time measured only in real time.
    pub fn real(value: TimeSpan) -> Self {
        Self::new(Some(value), None)
    }

    /// A time measured only in game time.
    pub fn game(value: TimeSpan) -> Self {
        Self::new(None, Some(value))
    }

    /// True when at least one timing method carries a value.
    pub fn has_value(&self) -> bool {
        self.real_time.is_some() || self.game_time.is_some()
    }
}
