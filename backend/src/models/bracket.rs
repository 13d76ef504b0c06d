//! Age brackets and their sleep recommendations.
//!
//! The table below is fixed: twelve rows, each pairing an age range with the
//! recommended nightly sleep duration and the sleep-cycle length used for it.
//! Infants and toddlers (0-2 years) sleep in ~50 minute cycles, everyone else
//! in ~90 minute cycles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Cycle length for brackets covering ages 0-2 years.
pub const INFANT_CYCLE_MINUTES: u32 = 50;
/// Cycle length for every older bracket.
pub const STANDARD_CYCLE_MINUTES: u32 = 90;

/// Identifier of one of the twelve age brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBracketId {
    #[serde(rename = "months_0_to_3")]
    Months0To3,
    #[serde(rename = "months_4_to_11")]
    Months4To11,
    #[serde(rename = "years_1_to_2")]
    Years1To2,
    #[serde(rename = "years_3_to_5")]
    Years3To5,
    #[serde(rename = "years_6_to_13")]
    Years6To13,
    #[serde(rename = "years_14_to_17")]
    Years14To17,
    #[serde(rename = "years_18_to_25")]
    Years18To25,
    #[serde(rename = "years_26_to_35")]
    Years26To35,
    #[serde(rename = "years_36_to_45")]
    Years36To45,
    #[serde(rename = "years_46_to_55")]
    Years46To55,
    #[serde(rename = "years_56_to_64")]
    Years56To64,
    #[serde(rename = "years_65_plus")]
    Years65Plus,
}

impl AgeBracketId {
    /// All identifiers in table order.
    pub const ALL: [AgeBracketId; 12] = [
        AgeBracketId::Months0To3,
        AgeBracketId::Months4To11,
        AgeBracketId::Years1To2,
        AgeBracketId::Years3To5,
        AgeBracketId::Years6To13,
        AgeBracketId::Years14To17,
        AgeBracketId::Years18To25,
        AgeBracketId::Years26To35,
        AgeBracketId::Years36To45,
        AgeBracketId::Years46To55,
        AgeBracketId::Years56To64,
        AgeBracketId::Years65Plus,
    ];

    /// Stable snake-case identifier, as used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracketId::Months0To3 => "months_0_to_3",
            AgeBracketId::Months4To11 => "months_4_to_11",
            AgeBracketId::Years1To2 => "years_1_to_2",
            AgeBracketId::Years3To5 => "years_3_to_5",
            AgeBracketId::Years6To13 => "years_6_to_13",
            AgeBracketId::Years14To17 => "years_14_to_17",
            AgeBracketId::Years18To25 => "years_18_to_25",
            AgeBracketId::Years26To35 => "years_26_to_35",
            AgeBracketId::Years36To45 => "years_36_to_45",
            AgeBracketId::Years46To55 => "years_46_to_55",
            AgeBracketId::Years56To64 => "years_56_to_64",
            AgeBracketId::Years65Plus => "years_65_plus",
        }
    }

    /// The table row for this bracket.
    pub fn bracket(&self) -> &'static AgeBracket {
        // Table rows are laid out in the same order as the enum variants.
        &AGE_BRACKETS[*self as usize]
    }

    /// Whether the bracket covers ages 0-2 years.
    pub fn is_under_three(&self) -> bool {
        matches!(
            self,
            AgeBracketId::Months0To3 | AgeBracketId::Months4To11 | AgeBracketId::Years1To2
        )
    }
}

impl fmt::Display for AgeBracketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeBracketId {
    type Err = CalcError;

    /// Accepts either the snake-case id or a display label such as `"18-25 Years"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AgeBracketId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == trimmed)
            .or_else(|| AgeBracket::find_by_label(trimmed).map(|b| b.id))
            .ok_or_else(|| CalcError::UnknownAgeBracket(s.to_string()))
    }
}

/// One row of the age-bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBracket {
    pub id: AgeBracketId,
    /// Display range, e.g. `"18-25 Years"`.
    pub label: &'static str,
    /// Lower bound of the recommended nightly sleep, in hours.
    pub min_hours: u32,
    /// Upper bound of the recommended nightly sleep, in hours.
    pub max_hours: u32,
    /// Length of one sleep cycle, in minutes.
    pub cycle_minutes: u32,
}

impl AgeBracket {
    const fn new(
        id: AgeBracketId,
        label: &'static str,
        min_hours: u32,
        max_hours: u32,
        cycle_minutes: u32,
    ) -> Self {
        Self {
            id,
            label,
            min_hours,
            max_hours,
            cycle_minutes,
        }
    }

    /// Leading token of the display range (`"0-3"`, `"65+"`).
    pub fn range_token(&self) -> &'static str {
        self.label.split(' ').next().unwrap_or(self.label)
    }

    /// Resolve a free-text label to a bracket.
    ///
    /// Scans the table in order and returns the first row whose range token
    /// occurs anywhere in `label`.
    pub fn find_by_label(label: &str) -> Option<&'static AgeBracket> {
        if label.trim().is_empty() {
            return None;
        }
        AGE_BRACKETS.iter().find(|b| label.contains(b.range_token()))
    }

    /// All rows in table order.
    pub fn all() -> &'static [AgeBracket] {
        &AGE_BRACKETS
    }
}

/// The fixed age-bracket table.
pub static AGE_BRACKETS: [AgeBracket; 12] = [
    AgeBracket::new(AgeBracketId::Months0To3, "0-3 Months", 14, 17, INFANT_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Months4To11, "4-11 Months", 12, 15, INFANT_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years1To2, "1-2 Years", 11, 14, INFANT_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years3To5, "3-5 Years", 10, 13, STANDARD_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years6To13, "6-13 Years", 9, 11, STANDARD_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years14To17, "14-17 Years", 8, 10, STANDARD_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years18To25, "18-25 Years", 7, 9, STANDARD_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years26To35, "26-35 Years", 7, 9, STANDARD_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years36To45, "36-45 Years", 7, 9, STANDARD_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years46To55, "46-55 Years", 7, 9, STANDARD_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years56To64, "56-64 Years", 7, 8, STANDARD_CYCLE_MINUTES),
    AgeBracket::new(AgeBracketId::Years65Plus, "65+ Years", 7, 8, STANDARD_CYCLE_MINUTES),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_ids() {
        for (i, id) in AgeBracketId::ALL.iter().enumerate() {
            assert_eq!(AGE_BRACKETS[i].id, *id);
            assert_eq!(id.bracket().id, *id);
        }
    }

    #[test]
    fn test_cycle_minutes_partition() {
        for b in AgeBracket::all() {
            assert!(b.cycle_minutes == 50 || b.cycle_minutes == 90);
            assert_eq!(b.cycle_minutes == 50, b.id.is_under_three(), "{}", b.label);
        }
    }

    #[test]
    fn test_exact_table_values() {
        let rows: Vec<(&str, u32, u32)> = AgeBracket::all()
            .iter()
            .map(|b| (b.label, b.min_hours, b.max_hours))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("0-3 Months", 14, 17),
                ("4-11 Months", 12, 15),
                ("1-2 Years", 11, 14),
                ("3-5 Years", 10, 13),
                ("6-13 Years", 9, 11),
                ("14-17 Years", 8, 10),
                ("18-25 Years", 7, 9),
                ("26-35 Years", 7, 9),
                ("36-45 Years", 7, 9),
                ("46-55 Years", 7, 9),
                ("56-64 Years", 7, 8),
                ("65+ Years", 7, 8),
            ]
        );
    }

    #[test]
    fn test_range_token() {
        assert_eq!(AgeBracketId::Months0To3.bracket().range_token(), "0-3");
        assert_eq!(AgeBracketId::Years65Plus.bracket().range_token(), "65+");
    }

    #[test]
    fn test_find_by_label() {
        let b = AgeBracket::find_by_label("18-25 Years").unwrap();
        assert_eq!(b.id, AgeBracketId::Years18To25);

        // button text may carry extra decoration around the range
        let b = AgeBracket::find_by_label("  65+ yrs ").unwrap();
        assert_eq!(b.id, AgeBracketId::Years65Plus);

        assert!(AgeBracket::find_by_label("").is_none());
        assert!(AgeBracket::find_by_label("teenager").is_none());
    }

    #[test]
    fn test_parse_id_and_label() {
        assert_eq!(
            "years_6_to_13".parse::<AgeBracketId>().unwrap(),
            AgeBracketId::Years6To13
        );
        assert_eq!(
            "4-11 Months".parse::<AgeBracketId>().unwrap(),
            AgeBracketId::Months4To11
        );
        assert_eq!(
            "elderly".parse::<AgeBracketId>(),
            Err(CalcError::UnknownAgeBracket("elderly".to_string()))
        );
    }

    #[test]
    fn test_id_serde_matches_as_str() {
        for id in AgeBracketId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            let back: AgeBracketId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }
}
