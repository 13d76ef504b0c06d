use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::bracket::AgeBracket;
use super::time::ClockTime;
use crate::error::CalcError;

/// Direction of the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// "I want to wake up at this time": solve for bedtimes.
    #[serde(alias = "wake")]
    WakeAt,
    /// "I am going to sleep at this time": solve for wake times.
    #[serde(alias = "sleep")]
    SleepAt,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::WakeAt => "wake_at",
            Mode::SleepAt => "sleep_at",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wake_at" | "wake" => Ok(Mode::WakeAt),
            "sleep_at" | "sleep" => Ok(Mode::SleepAt),
            _ => Err(CalcError::InvalidMode(s.to_string())),
        }
    }
}

/// One suggested bedtime or wake time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Number of complete sleep cycles.
    pub cycles: u32,
    /// Suggested time on the wall clock.
    pub time: ClockTime,
    /// Time between the base time and `time`, in minutes.
    pub duration_minutes: u32,
}

/// Outcome of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    pub mode: Mode,
    pub base_time: ClockTime,
    /// Always `[ideal, max(1, ideal - 1), ideal + 1]`.
    pub candidates: [Candidate; 3],
    /// Index into `candidates` of the best pick.
    pub ideal_index: usize,
    pub ideal_cycles: u32,
    pub bracket: AgeBracket,
}

impl ScheduleResult {
    /// The highlighted candidate.
    pub fn ideal(&self) -> &Candidate {
        &self.candidates[self.ideal_index]
    }
}
