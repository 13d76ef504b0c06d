//! Sleep-cycle schedule computation.
//!
//! Given a base time, a direction and an age bracket, suggests three bedtimes
//! (or wake times) that fall on sleep-cycle boundaries around the
//! age-appropriate sleep duration.

use crate::models::{AgeBracket, Candidate, ClockTime, Mode, ScheduleResult};

/// Minutes assumed between lying down and falling asleep.
pub const FALL_ASLEEP_LATENCY_MINUTES: u32 = 15;

/// Target nightly sleep for a bracket, in minutes.
///
/// Midpoint of the recommended range, rounded to the nearest half hour.
pub fn target_minutes(bracket: &AgeBracket) -> u32 {
    let midpoint = f64::from(bracket.min_hours + bracket.max_hours) / 2.0;
    let half_hours = (midpoint * 2.0).round();
    (half_hours * 30.0) as u32
}

/// Cycle count closest to the bracket's target duration, never below 1.
///
/// The fall-asleep latency is subtracted regardless of direction, so both
/// modes share the same baseline.
pub fn ideal_cycles(bracket: &AgeBracket) -> u32 {
    let available = f64::from(target_minutes(bracket)) - f64::from(FALL_ASLEEP_LATENCY_MINUTES);
    let cycles = (available / f64::from(bracket.cycle_minutes)).round();
    if cycles < 1.0 {
        1
    } else {
        cycles as u32
    }
}

/// Cycle counts to offer, in display order.
pub fn candidate_cycles(ideal: u32) -> [u32; 3] {
    [ideal, ideal.saturating_sub(1).max(1), ideal + 1]
}

fn candidate(base_time: ClockTime, mode: Mode, cycles: u32, cycle_minutes: u32) -> Candidate {
    match mode {
        Mode::WakeAt => {
            let duration_minutes = cycles * cycle_minutes + FALL_ASLEEP_LATENCY_MINUTES;
            Candidate {
                cycles,
                time: base_time.offset(-i64::from(duration_minutes)),
                duration_minutes,
            }
        }
        Mode::SleepAt => {
            let duration_minutes = cycles * cycle_minutes;
            Candidate {
                cycles,
                time: base_time.offset(i64::from(duration_minutes)),
                duration_minutes,
            }
        }
    }
}

/// Compute the suggested schedule.
///
/// # Arguments
///
/// * `base_time` - Desired wake time (`Mode::WakeAt`) or bedtime (`Mode::SleepAt`)
/// * `mode` - Which of the two the caller is solving for
/// * `bracket` - Age bracket; drives cycle length and target duration
///
/// # Returns
///
/// Three candidates ordered `[ideal, ideal - 1 (min 1), ideal + 1]` and the
/// index of the ideal pick. When the ideal count is 1 the second entry
/// duplicates the first.
pub fn compute_schedule(base_time: ClockTime, mode: Mode, bracket: &AgeBracket) -> ScheduleResult {
    let ideal = ideal_cycles(bracket);
    let candidates =
        candidate_cycles(ideal).map(|c| candidate(base_time, mode, c, bracket.cycle_minutes));

    let ideal_index = candidates
        .iter()
        .position(|c| c.cycles == ideal)
        .unwrap_or(candidates.len() / 2);

    log::debug!(
        "computed schedule: mode={} base={} bracket={} ideal_cycles={} pick={}",
        mode,
        base_time,
        bracket.label,
        ideal,
        candidates[ideal_index].time
    );

    ScheduleResult {
        mode,
        base_time,
        candidates,
        ideal_index,
        ideal_cycles: ideal,
        bracket: *bracket,
    }
}
