//! Request types for the shift roster API.
//!
//! This module defines the JSON request structures for the `/schedule` endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Day, Employee, ShiftKind};

/// Request body for the `/schedule` endpoint.
///
/// # Example
///
/// ```
/// use shift_roster::api::ScheduleRequest;
///
/// let request: ScheduleRequest = serde_json::from_str(r#"{
///     "employees": [
///         { "name": "Alice", "preferences": { "monday": ["morning"], "sunday": ["no_shift"] } }
///     ],
///     "seed": 7
/// }"#).unwrap();
/// assert_eq!(request.employees.len(), 1);
/// assert_eq!(request.seed, Some(7));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The employees to schedule, in priority order for the preference pass.
    pub employees: Vec<EmployeeRequest>,
    /// Seed for the backfill pass; the server picks one when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Employee information in a schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's name.
    pub name: String,
    /// Shifts the employee will work, by day. Missing days mean unavailable.
    #[serde(default)]
    pub preferences: BTreeMap<Day, Vec<ShiftKind>>,
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> EngineResult<Self> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let mut employee = Employee::new(name);
        for (day, shifts) in req.preferences {
            for shift in shifts {
                employee.add_preference(day, shift);
            }
        }
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_preference_order() {
        let req: EmployeeRequest = serde_json::from_str(
            r#"{ "name": " Bob ", "preferences": { "friday": ["evening", "morning", "no_shift"] } }"#,
        )
        .unwrap();

        let employee = Employee::try_from(req).unwrap();
        assert_eq!(employee.name(), "Bob");
        assert_eq!(
            employee.preferences(Day::Friday),
            &[ShiftKind::Evening, ShiftKind::Morning]
        );
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let req = EmployeeRequest {
            name: "  ".to_string(),
            preferences: BTreeMap::new(),
        };
        let err = Employee::try_from(req).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid employee field 'name': must not be empty"
        );
    }

    #[test]
    fn test_preferences_default_to_empty() {
        let req: EmployeeRequest = serde_json::from_str(r#"{ "name": "Cy" }"#).unwrap();
        assert!(req.preferences.is_empty());
    }

    #[test]
    fn test_unknown_day_fails_to_parse() {
        let result = serde_json::from_str::<EmployeeRequest>(
            r#"{ "name": "Cy", "preferences": { "funday": ["morning"] } }"#,
        );
        assert!(result.is_err());
    }
}
