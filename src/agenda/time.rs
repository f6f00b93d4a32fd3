//! 12-hour clock helpers.
//!
//! The CLI takes appointment times the way people say them (hour 1-12, minute,
//! A.M./P.M.). These functions convert between that form and `NaiveTime`.

use crate::error::{AgendaError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "A.M."),
            Period::Pm => write!(f, "P.M."),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '.')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "am" => Ok(Period::Am),
            "pm" => Ok(Period::Pm),
            _ => Err(format!("Invalid period: {} (expected AM or PM)", s)),
        }
    }
}

/// Converts a 12-hour clock reading to a 24-hour time of day.
///
/// PM maps 1-11 to 13-23 and leaves 12 alone; AM maps 12 to 0 and leaves 1-11
/// alone.
pub fn to_time_of_day(hour: u32, minute: u32, period: Period) -> Result<NaiveTime> {
    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(AgendaError::InvalidTime { hour, minute });
    }

    let hour24 = match (period, hour) {
        (Period::Am, 12) => 0,
        (Period::Am, h) => h,
        (Period::Pm, 12) => 12,
        (Period::Pm, h) => h + 12,
    };

    NaiveTime::from_hms_opt(hour24, minute, 0).ok_or(AgendaError::InvalidTime { hour, minute })
}

/// Splits a time of day back into its 12-hour clock reading.
pub fn from_time_of_day(time: NaiveTime) -> (u32, u32, Period) {
    let (is_pm, hour12) = time.hour12();
    let period = if is_pm { Period::Pm } else { Period::Am };
    (hour12, time.minute(), period)
}
