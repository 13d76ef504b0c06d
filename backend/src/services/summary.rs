//! Human-readable text for a computed schedule.
//!
//! These strings are what a front end shows next to the three result rows:
//! the recommended-duration banner, the latency note, per-row labels, the
//! special note about cycle length and the suggestion line.

use crate::models::{AgeBracket, Candidate, Mode, ScheduleResult};
use crate::services::calculator::FALL_ASLEEP_LATENCY_MINUTES;

/// Format a duration as `"7h 45m"`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Row heading for a candidate time.
pub fn candidate_label(mode: Mode) -> &'static str {
    match mode {
        Mode::WakeAt => "Go to sleep at",
        Mode::SleepAt => "Recommended wake time",
    }
}

pub fn recommendation_text(bracket: &AgeBracket) -> String {
    format!(
        "Recommended Sleep Duration for {}: {}–{} hours per night",
        bracket.label, bracket.min_hours, bracket.max_hours
    )
}

pub fn latency_note() -> String {
    format!(
        "It typically takes {} minutes to fall asleep. Below are recommended times based on sleep cycles and age guidance.",
        FALL_ASLEEP_LATENCY_MINUTES
    )
}

pub fn special_note(bracket: &AgeBracket) -> String {
    format!(
        "If you wake up at one of these times, you'll rise in between {}-minute sleep cycles. \
         A good night's sleep for your age is approximately {}–{} hours.",
        bracket.cycle_minutes, bracket.min_hours, bracket.max_hours
    )
}

/// `"7h 45m Hours in Bed (5 Sleep Cycles)"`
pub fn in_bed_text(candidate: &Candidate) -> String {
    format!(
        "{} Hours in Bed ({} Sleep Cycles)",
        format_duration(candidate.duration_minutes),
        candidate.cycles
    )
}

/// Suggestion line built from the ideal candidate.
pub fn suggestion_text(result: &ScheduleResult) -> String {
    let ideal = result.ideal();
    format!(
        "For best rest, aim for around {} (about {} sleep cycles). Example: {}.",
        format_duration(ideal.duration_minutes),
        ideal.cycles,
        ideal.time
    )
}
