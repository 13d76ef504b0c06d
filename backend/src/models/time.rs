use serde::*;
use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

/// Minutes in one wall-clock day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Wall-clock time of day as minutes since midnight.
/// Always in `[0, 1440)`; every constructor goes through [`ClockTime::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", from = "i64")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Wrap any signed minute offset onto the 24-hour clock.
    /// Negative values land on the previous day.
    pub fn normalize(minutes: i64) -> Self {
        Self(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    /// Create from a 24-hour hour and minute, wrapping out-of-range values.
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        Self::normalize(i64::from(hour) * 60 + i64::from(minute))
    }

    /// Create from a 12-hour clock reading.
    ///
    /// `12 AM` is midnight and `12 PM` is noon. Hours outside `1..=12` and
    /// minutes outside `0..=59` are rejected.
    pub fn from_12_hour(hour: u32, minute: u32, meridiem: Meridiem) -> CalcResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(CalcError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(CalcError::InvalidMinute(minute));
        }
        let hour24 = match (meridiem, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        Ok(Self::from_hm(hour24, minute))
    }

    /// Raw minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour on the 24-hour clock (0-23).
    pub fn hour24(&self) -> u32 {
        u32::from(self.0) / 60
    }

    /// Minute within the hour (0-59).
    pub fn minute(&self) -> u32 {
        u32::from(self.0) % 60
    }

    /// Shift by a signed number of minutes, wrapping across midnight.
    pub fn offset(&self, minutes: i64) -> Self {
        Self::normalize(i64::from(self.0) + minutes)
    }

    /// 12-hour representation used for display.
    pub fn to_display(&self) -> DisplayTime {
        let h = self.hour24();
        DisplayTime {
            hour12: (h + 11) % 12 + 1,
            minute: self.minute(),
            meridiem: if h >= 12 { Meridiem::Pm } else { Meridiem::Am },
        }
    }

    /// Convert to chrono NaiveTime.
    pub fn to_naive_time(&self) -> chrono::NaiveTime {
        chrono::NaiveTime::from_num_seconds_from_midnight_opt(u32::from(self.0) * 60, 0)
            .unwrap_or(chrono::NaiveTime::MIN)
    }

    /// Create from chrono NaiveTime, truncating seconds.
    pub fn from_naive_time(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        Self::from_hm(time.hour(), time.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_display(), f)
    }
}

impl From<ClockTime> for u16 {
    fn from(t: ClockTime) -> Self {
        t.0
    }
}

impl From<i64> for ClockTime {
    fn from(minutes: i64) -> Self {
        ClockTime::normalize(minutes)
    }
}

/// AM/PM flag of a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM", alias = "am")]
    Am,
    #[serde(rename = "PM", alias = "pm")]
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridiem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            _ => Err(CalcError::InvalidMeridiem(s.to_string())),
        }
    }
}

/// A time of day in 12-hour form, e.g. `11:15 PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTime {
    pub hour12: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour12, self.minute, self.meridiem)
    }
}
