use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::models::{AgeBracket, AgeBracketId, ClockTime, Meridiem, Mode, ScheduleResult};
use crate::services::calculator::{compute_schedule, FALL_ASLEEP_LATENCY_MINUTES};
use crate::services::summary;

/// Raw calculator input as submitted by a form: a 12-hour time, an optional
/// direction and an age bracket given either as an id or a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
    /// Defaults to `Mode::WakeAt` when omitted.
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub age_bracket: Option<String>,
}

/// Validated calculator arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub base_time: ClockTime,
    pub mode: Mode,
    pub bracket: &'static AgeBracket,
}

impl CalculateRequest {
    /// Check the request and turn it into calculator arguments.
    ///
    /// The age bracket is checked first; a request without one is rejected
    /// before the time fields are looked at.
    pub fn resolve(&self) -> CalcResult<ResolvedRequest> {
        let bracket = resolve_bracket(self.age_bracket.as_deref())?;
        let base_time = ClockTime::from_12_hour(self.hour, self.minute, self.meridiem)?;
        Ok(ResolvedRequest {
            base_time,
            mode: self.mode.unwrap_or(Mode::WakeAt),
            bracket,
        })
    }
}

/// Look up a bracket by id (`"years_18_to_25"`) or label (`"18-25 Years"`).
pub fn resolve_bracket(selection: Option<&str>) -> CalcResult<&'static AgeBracket> {
    match selection.map(str::trim) {
        None | Some("") => Err(CalcError::MissingAgeBracket),
        Some(s) => s.parse::<AgeBracketId>().map(|id| id.bracket()),
    }
}

/// One display row of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub label: String,
    pub time: String,
    pub cycles: u32,
    pub duration_minutes: u32,
    pub duration_text: String,
    pub in_bed_text: String,
    pub is_ideal: bool,
}

/// Everything a front end needs to render a calculation.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub recommendation: String,
    pub latency_note: String,
    pub fall_asleep_minutes: u32,
    pub rows: Vec<ScheduleRow>,
    pub special_note: String,
    pub suggestion: String,
    pub result: ScheduleResult,
}

impl ScheduleView {
    pub fn from_result(result: ScheduleResult) -> Self {
        let label = summary::candidate_label(result.mode);
        let rows = result
            .candidates
            .iter()
            .enumerate()
            .map(|(i, c)| ScheduleRow {
                label: label.to_string(),
                time: c.time.to_string(),
                cycles: c.cycles,
                duration_minutes: c.duration_minutes,
                duration_text: summary::format_duration(c.duration_minutes),
                in_bed_text: summary::in_bed_text(c),
                is_ideal: i == result.ideal_index,
            })
            .collect();

        Self {
            recommendation: summary::recommendation_text(&result.bracket),
            latency_note: summary::latency_note(),
            fall_asleep_minutes: FALL_ASLEEP_LATENCY_MINUTES,
            rows,
            special_note: summary::special_note(&result.bracket),
            suggestion: summary::suggestion_text(&result),
            result,
        }
    }
}

/// Resolve, compute and render in one step.
pub fn calculate(request: &CalculateRequest) -> CalcResult<ScheduleView> {
    let resolved = request.resolve()?;
    let result = compute_schedule(resolved.base_time, resolved.mode, resolved.bracket);
    Ok(ScheduleView::from_result(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(bracket: Option<&str>) -> CalculateRequest {
        CalculateRequest {
            hour: 7,
            minute: 0,
            meridiem: Meridiem::Am,
            mode: None,
            age_bracket: bracket.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_bracket_rejected() {
        assert_eq!(
            request(None).resolve().unwrap_err(),
            CalcError::MissingAgeBracket
        );
        assert_eq!(
            request(Some("   ")).resolve().unwrap_err(),
            CalcError::MissingAgeBracket
        );
    }

    #[test]
    fn test_bracket_checked_before_time() {
        let mut req = request(None);
        req.hour = 42;
        assert_eq!(req.resolve().unwrap_err(), CalcError::MissingAgeBracket);
    }

    #[test]
    fn test_mode_defaults_to_wake_at() {
        let resolved = request(Some("18-25 Years")).resolve().unwrap();
        assert_eq!(resolved.mode, Mode::WakeAt);
        assert_eq!(resolved.base_time, ClockTime::from_hm(7, 0));
        assert_eq!(resolved.bracket.id, AgeBracketId::Years18To25);
    }

    #[test]
    fn test_invalid_minute_rejected() {
        let mut req = request(Some("years_18_to_25"));
        req.minute = 75;
        assert_eq!(req.resolve().unwrap_err(), CalcError::InvalidMinute(75));
    }

    #[test]
    fn test_view_marks_single_ideal_row() {
        let view = calculate(&request(Some("years_18_to_25"))).unwrap();
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows.iter().filter(|r| r.is_ideal).count(), 1);
        assert!(view.rows[0].is_ideal);
        assert_eq!(view.rows[0].label, "Go to sleep at");
        assert_eq!(view.rows[0].time, "11:15 PM");
        assert_eq!(view.rows[0].duration_text, "7h 45m");
        assert_eq!(view.fall_asleep_minutes, 15);
    }
}
