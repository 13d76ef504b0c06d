use serde::{Deserialize, Serialize};

use crate::models::{AgeBracket, AgeBracketId};
use crate::services::calculator::{ideal_cycles, target_minutes};

/// One line of the sleep chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepChartEntry {
    pub id: AgeBracketId,
    pub label: String,
    pub min_hours: u32,
    pub max_hours: u32,
    pub cycle_minutes: u32,
    pub target_minutes: u32,
    pub ideal_cycles: u32,
}

impl From<&AgeBracket> for SleepChartEntry {
    fn from(b: &AgeBracket) -> Self {
        Self {
            id: b.id,
            label: b.label.to_string(),
            min_hours: b.min_hours,
            max_hours: b.max_hours,
            cycle_minutes: b.cycle_minutes,
            target_minutes: target_minutes(b),
            ideal_cycles: ideal_cycles(b),
        }
    }
}

/// Recommended sleep per age bracket, in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepChart {
    pub brackets: Vec<SleepChartEntry>,
    pub total: usize,
}

pub fn sleep_chart() -> SleepChart {
    let brackets: Vec<SleepChartEntry> = AgeBracket::all().iter().map(Into::into).collect();
    let total = brackets.len();
    SleepChart { brackets, total }
}
