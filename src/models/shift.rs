//! Shift kind model and shift codes.
//!
//! This module defines [`ShiftKind`], the three schedulable shifts of a day
//! plus the `NoShift` marker used by preference input to mean "unavailable".

use std::fmt;

use serde::{Deserialize, Serialize};

/// A shift within a day, or the `NoShift` availability marker.
///
/// `NoShift` only ever appears in preference input. It is never stored as a
/// preference, never assigned and never has a cell in the schedule grid.
///
/// # Example
///
/// ```
/// use shift_roster::models::ShiftKind;
///
/// assert_eq!(ShiftKind::from_code(" a "), Some(ShiftKind::Afternoon));
/// assert_eq!(ShiftKind::from_code("n"), Some(ShiftKind::NoShift));
/// assert_eq!(ShiftKind::from_code("X"), None);
/// assert_eq!(ShiftKind::Evening.code(), 'E');
/// assert!(!ShiftKind::NoShift.is_schedulable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// Morning shift.
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Evening shift.
    Evening,
    /// Unavailable that day; never schedulable.
    NoShift,
}

impl ShiftKind {
    /// The schedulable shifts in the order every pass tries them.
    pub const SCHEDULABLE: [ShiftKind; 3] =
        [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    /// Parses a single-letter shift code (`M`, `A`, `E`, `N`).
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    /// Returns `None` for anything else.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "M" => Some(ShiftKind::Morning),
            "A" => Some(ShiftKind::Afternoon),
            "E" => Some(ShiftKind::Evening),
            "N" => Some(ShiftKind::NoShift),
            _ => None,
        }
    }

    /// Returns the single-letter code for this shift kind.
    pub fn code(self) -> char {
        match self {
            ShiftKind::Morning => 'M',
            ShiftKind::Afternoon => 'A',
            ShiftKind::Evening => 'E',
            ShiftKind::NoShift => 'N',
        }
    }

    /// Returns the display name used in console output and log messages.
    pub fn name(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Evening => "Evening",
            ShiftKind::NoShift => "No Shift",
        }
    }

    /// Returns true for Morning, Afternoon and Evening.
    pub fn is_schedulable(self) -> bool {
        self != ShiftKind::NoShift
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_case_insensitively() {
        for (code, expected) in [
            ("M", ShiftKind::Morning),
            ("m", ShiftKind::Morning),
            ("A", ShiftKind::Afternoon),
            ("a", ShiftKind::Afternoon),
            ("E", ShiftKind::Evening),
            ("e", ShiftKind::Evening),
            ("N", ShiftKind::NoShift),
            ("n", ShiftKind::NoShift),
        ] {
            assert_eq!(ShiftKind::from_code(code), Some(expected), "code {}", code);
        }
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        for code in ["", "X", "MA", "Morning", "0"] {
            assert_eq!(ShiftKind::from_code(code), None, "code {:?}", code);
        }
    }

    #[test]
    fn test_code_and_from_code_agree() {
        for kind in [
            ShiftKind::Morning,
            ShiftKind::Afternoon,
            ShiftKind::Evening,
            ShiftKind::NoShift,
        ] {
            assert_eq!(ShiftKind::from_code(&kind.code().to_string()), Some(kind));
        }
    }

    #[test]
    fn test_schedulable_order_is_morning_afternoon_evening() {
        assert_eq!(
            ShiftKind::SCHEDULABLE,
            [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening]
        );
        assert!(ShiftKind::SCHEDULABLE.iter().all(|s| s.is_schedulable()));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ShiftKind::Afternoon.to_string(), "Afternoon");
        assert_eq!(ShiftKind::NoShift.to_string(), "No Shift");
    }

    #[test]
    fn test_shift_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftKind::NoShift).unwrap(),
            "\"no_shift\""
        );
        let kind: ShiftKind = serde_json::from_str("\"evening\"").unwrap();
        assert_eq!(kind, ShiftKind::Evening);
    }
}
