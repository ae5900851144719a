//! Value objects for run selections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Loop duration used when `--loop` is given without a positive value.
pub const DEFAULT_LOOP_MINUTES: u32 = 60;

/// Duration of a loop-mode run, always at least one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct LoopDuration(u32);

impl LoopDuration {
    /// Normalize raw user input: zero and negative values fall back to
    /// [`DEFAULT_LOOP_MINUTES`], values beyond `u32::MAX` are clamped.
    pub fn from_input(minutes: i64) -> Self {
        if minutes <= 0 {
            return Self(DEFAULT_LOOP_MINUTES);
        }
        Self(u32::try_from(minutes).unwrap_or(u32::MAX))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.0) * 60)
    }
}

impl Default for LoopDuration {
    fn default() -> Self {
        Self(DEFAULT_LOOP_MINUTES)
    }
}

impl From<LoopDuration> for u32 {
    fn from(value: LoopDuration) -> Self {
        value.0
    }
}

impl TryFrom<u32> for LoopDuration {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err("loop duration must be at least one minute".to_string());
        }
        Ok(Self(value))
    }
}

impl fmt::Display for LoopDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.0)
    }
}
