//! Employee model.
//!
//! An [`Employee`] holds the shifts a worker is willing to take on each day
//! and the shifts the scheduler has actually given them. All eligibility
//! checks are evaluated fresh from that state on every call.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

use super::{Day, ShiftKind};

/// The default cap on days an employee may be assigned in one week.
pub const DEFAULT_MAX_DAYS_PER_WEEK: u32 = 5;

/// An employee taking part in one scheduling run.
///
/// The name identifies the employee in the schedule grid. Duplicate names are
/// not merged: two records with the same name are two employees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    preferences: BTreeMap<Day, Vec<ShiftKind>>,
    assignments: BTreeMap<Day, ShiftKind>,
    max_days_per_week: u32,
}

impl Employee {
    /// Creates an employee with no preferences and no assignments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
            assignments: BTreeMap::new(),
            max_days_per_week: DEFAULT_MAX_DAYS_PER_WEEK,
        }
    }

    /// Sets the weekly day cap. Only meaningful before any assignment.
    pub(crate) fn set_max_days_per_week(&mut self, max_days: u32) {
        self.max_days_per_week = max_days;
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds `shift` to the set of shifts the employee will work on `day`.
    ///
    /// `NoShift` is ignored, as is a shift already present for that day.
    /// Preferences keep the order they were added in.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::{Day, Employee, ShiftKind};
    ///
    /// let mut employee = Employee::new("Alice");
    /// employee.add_preference(Day::Monday, ShiftKind::Evening);
    /// employee.add_preference(Day::Monday, ShiftKind::NoShift);
    /// employee.add_preference(Day::Monday, ShiftKind::Morning);
    ///
    /// assert_eq!(
    ///     employee.preferences(Day::Monday),
    ///     &[ShiftKind::Evening, ShiftKind::Morning]
    /// );
    /// assert!(employee.preferences(Day::Tuesday).is_empty());
    /// ```
    pub fn add_preference(&mut self, day: Day, shift: ShiftKind) {
        if !shift.is_schedulable() {
            return;
        }
        let shifts = self.preferences.entry(day).or_default();
        if !shifts.contains(&shift) {
            shifts.push(shift);
        }
    }

    /// Returns the preferred shifts for `day`, empty when unavailable.
    pub fn preferences(&self, day: Day) -> &[ShiftKind] {
        self.preferences
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the first preferred shift for `day`, if any.
    pub fn first_preference(&self, day: Day) -> Option<ShiftKind> {
        self.preferences(day).first().copied()
    }

    /// Returns true if the employee can be drafted on `day` at all: nothing
    /// assigned that day yet and still under the weekly cap.
    ///
    /// Preferences are not consulted.
    pub fn is_available(&self, day: Day) -> bool {
        !self.is_assigned(day) && self.days_worked() < self.max_days_per_week
    }

    /// Returns true if the employee may take `shift` on `day` as a preference.
    ///
    /// Requires all of: no shift assigned that day, fewer days worked than the
    /// weekly cap, and `shift` listed among that day's preferences.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::{Day, Employee, ShiftKind};
    ///
    /// let mut employee = Employee::new("Bob");
    /// employee.add_preference(Day::Monday, ShiftKind::Morning);
    /// employee.add_preference(Day::Monday, ShiftKind::Evening);
    ///
    /// assert!(employee.can_work(Day::Monday, ShiftKind::Morning));
    /// assert!(!employee.can_work(Day::Monday, ShiftKind::Afternoon));
    ///
    /// employee.assign(Day::Monday, ShiftKind::Morning).unwrap();
    /// assert!(!employee.can_work(Day::Monday, ShiftKind::Evening));
    /// ```
    pub fn can_work(&self, day: Day, shift: ShiftKind) -> bool {
        self.is_available(day) && self.preferences(day).contains(&shift)
    }

    /// Records `shift` as the employee's assignment for `day`.
    ///
    /// Preference is not required here; the backfill pass drafts employees
    /// into shifts they did not ask for. The hard rules are enforced and a
    /// violation fails without changing any state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AssignmentRejected`] when `shift` is `NoShift`,
    /// the employee already holds a shift on `day`, or the weekly cap has
    /// been reached.
    pub fn assign(&mut self, day: Day, shift: ShiftKind) -> EngineResult<()> {
        let reason = if !shift.is_schedulable() {
            Some("No Shift cannot be assigned".to_string())
        } else if let Some(existing) = self.assigned_shift(day) {
            Some(format!("already assigned the {} shift", existing))
        } else if self.days_worked() >= self.max_days_per_week {
            Some(format!(
                "already working the maximum of {} days",
                self.max_days_per_week
            ))
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(EngineError::AssignmentRejected {
                employee: self.name.clone(),
                day,
                reason,
            });
        }

        self.assignments.insert(day, shift);
        Ok(())
    }

    /// Returns the shift assigned on `day`, if any.
    pub fn assigned_shift(&self, day: Day) -> Option<ShiftKind> {
        self.assignments.get(&day).copied()
    }

    /// Returns true if the employee holds a shift on `day`.
    pub fn is_assigned(&self, day: Day) -> bool {
        self.assignments.contains_key(&day)
    }

    /// Returns the number of days the employee has been assigned.
    pub fn days_worked(&self) -> u32 {
        self.assignments.len() as u32
    }

    /// Returns the weekly day cap applied to this employee.
    pub fn max_days_per_week(&self) -> u32 {
        self.max_days_per_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_available_all_week(shift: ShiftKind) -> Employee {
        let mut employee = Employee::new("Alice");
        for day in Day::ALL {
            employee.add_preference(day, shift);
        }
        employee
    }

    #[test]
    fn test_new_employee_has_nothing_assigned() {
        let employee = Employee::new("Alice");
        assert_eq!(employee.name(), "Alice");
        assert_eq!(employee.days_worked(), 0);
        assert_eq!(employee.max_days_per_week(), DEFAULT_MAX_DAYS_PER_WEEK);
        for day in Day::ALL {
            assert!(employee.preferences(day).is_empty());
            assert_eq!(employee.assigned_shift(day), None);
        }
    }

    #[test]
    fn test_no_shift_preference_is_ignored() {
        let mut employee = Employee::new("Alice");
        employee.add_preference(Day::Friday, ShiftKind::NoShift);
        assert!(employee.preferences(Day::Friday).is_empty());
        assert!(!employee.can_work(Day::Friday, ShiftKind::NoShift));
    }

    #[test]
    fn test_duplicate_preference_is_kept_once() {
        let mut employee = Employee::new("Alice");
        employee.add_preference(Day::Monday, ShiftKind::Morning);
        employee.add_preference(Day::Monday, ShiftKind::Morning);
        assert_eq!(employee.preferences(Day::Monday), &[ShiftKind::Morning]);
        assert_eq!(employee.first_preference(Day::Monday), Some(ShiftKind::Morning));
    }

    #[test]
    fn test_can_work_requires_preference() {
        let mut employee = Employee::new("Alice");
        employee.add_preference(Day::Monday, ShiftKind::Afternoon);
        assert!(employee.can_work(Day::Monday, ShiftKind::Afternoon));
        assert!(!employee.can_work(Day::Monday, ShiftKind::Morning));
        assert!(!employee.can_work(Day::Tuesday, ShiftKind::Afternoon));
    }

    #[test]
    fn test_can_work_false_once_day_is_assigned() {
        let mut employee = Employee::new("Alice");
        employee.add_preference(Day::Monday, ShiftKind::Morning);
        employee.add_preference(Day::Monday, ShiftKind::Afternoon);
        employee.assign(Day::Monday, ShiftKind::Morning).unwrap();

        assert!(!employee.can_work(Day::Monday, ShiftKind::Morning));
        assert!(!employee.can_work(Day::Monday, ShiftKind::Afternoon));
        assert!(!employee.is_available(Day::Monday));
    }

    #[test]
    fn test_weekly_cap_blocks_preferred_days() {
        let mut employee = employee_available_all_week(ShiftKind::Morning);
        for day in &Day::ALL[..5] {
            employee.assign(*day, ShiftKind::Morning).unwrap();
        }

        assert_eq!(employee.days_worked(), 5);
        assert!(!employee.can_work(Day::Saturday, ShiftKind::Morning));
        assert!(!employee.is_available(Day::Sunday));
    }

    #[test]
    fn test_assign_outside_preferences_is_allowed() {
        let mut employee = Employee::new("Alice");
        employee.assign(Day::Wednesday, ShiftKind::Evening).unwrap();
        assert_eq!(employee.assigned_shift(Day::Wednesday), Some(ShiftKind::Evening));
        assert_eq!(employee.days_worked(), 1);
    }

    #[test]
    fn test_second_assignment_same_day_is_rejected() {
        let mut employee = Employee::new("Alice");
        employee.assign(Day::Monday, ShiftKind::Morning).unwrap();

        let err = employee
            .assign(Day::Monday, ShiftKind::Evening)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::AssignmentRejected { day: Day::Monday, .. }
        ));
        assert_eq!(employee.assigned_shift(Day::Monday), Some(ShiftKind::Morning));
        assert_eq!(employee.days_worked(), 1);
    }

    #[test]
    fn test_assignment_past_cap_is_rejected() {
        let mut employee = Employee::new("Alice");
        for day in &Day::ALL[..5] {
            employee.assign(*day, ShiftKind::Afternoon).unwrap();
        }

        let err = employee
            .assign(Day::Saturday, ShiftKind::Afternoon)
            .unwrap_err();
        assert!(err.to_string().contains("maximum of 5 days"));
        assert_eq!(employee.days_worked(), 5);
    }

    #[test]
    fn test_no_shift_cannot_be_assigned() {
        let mut employee = Employee::new("Alice");
        assert!(employee.assign(Day::Monday, ShiftKind::NoShift).is_err());
        assert_eq!(employee.days_worked(), 0);
    }

    #[test]
    fn test_custom_cap_is_respected() {
        let mut employee = employee_available_all_week(ShiftKind::Evening);
        employee.set_max_days_per_week(2);
        employee.assign(Day::Monday, ShiftKind::Evening).unwrap();
        employee.assign(Day::Tuesday, ShiftKind::Evening).unwrap();
        assert!(!employee.can_work(Day::Wednesday, ShiftKind::Evening));
    }
}
