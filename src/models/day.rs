//! Day-of-week model for the fixed seven-day roster.
//!
//! The roster week always starts on Monday. [`Day`] is ordered in week order,
//! which is also the order every scheduling pass visits days in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A day of the roster week.
///
/// # Example
///
/// ```
/// use shift_roster::models::Day;
///
/// assert_eq!(Day::ALL.len(), 7);
/// assert!(Day::Monday < Day::Sunday);
/// assert_eq!("Wednesday".parse::<Day>().unwrap(), Day::Wednesday);
/// assert_eq!(Day::Friday.to_string(), "Friday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    /// Monday, the first day of the roster week.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday, the last day of the roster week.
    Sunday,
}

impl Day {
    /// Every day of the week in roster order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Returns the English name used in CSV headers and console output.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Returns the zero-based position of the day within the week.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not an exact day name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a day of the week")]
pub struct ParseDayError(pub String);

impl FromStr for Day {
    type Err = ParseDayError;

    /// Parses the exact English day name, as required by the import header.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| ParseDayError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_days_are_in_week_order() {
        let names: Vec<&str> = Day::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec![
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }

    #[test]
    fn test_parse_requires_exact_name() {
        assert_eq!("Sunday".parse::<Day>(), Ok(Day::Sunday));
        assert_eq!(
            "sunday".parse::<Day>(),
            Err(ParseDayError("sunday".to_string()))
        );
        assert!("Sun".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_serialization() {
        assert_eq!(
            serde_json::to_string(&Day::Thursday).unwrap(),
            "\"thursday\""
        );
        let day: Day = serde_json::from_str("\"saturday\"").unwrap();
        assert_eq!(day, Day::Saturday);
    }
}
