//! The scheduling engine.
//!
//! [`Scheduler`] owns the employees and the schedule grid for one run and is
//! the only thing that assigns shifts.

use std::time::Instant;

use chrono::Utc;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use uuid::Uuid;

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, ScheduleGrid, ScheduleReport};

use super::backfill::run_backfill_pass;
use super::preference_pass::run_preference_pass;

/// Builds the weekly schedule for a fixed set of employees.
///
/// A scheduler runs exactly once. The first call to
/// [`generate_schedule`](Scheduler::generate_schedule) consumes it; later
/// calls return [`EngineError::ScheduleAlreadyGenerated`].
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use shift_roster::models::{Day, Employee, ShiftKind};
/// use shift_roster::scheduling::Scheduler;
///
/// let mut alice = Employee::new("Alice");
/// alice.add_preference(Day::Monday, ShiftKind::Morning);
///
/// let mut scheduler = Scheduler::new(vec![alice, Employee::new("Bob")]);
/// let mut rng = StdRng::seed_from_u64(42);
/// let report = scheduler.generate_schedule(&mut rng).unwrap();
///
/// assert_eq!(report.schedule.cell(Day::Monday, ShiftKind::Morning)[0], "Alice");
/// assert!(scheduler.generate_schedule(&mut rng).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    employees: Vec<Employee>,
    grid: ScheduleGrid,
    policy: PolicyConfig,
    generated: bool,
}

impl Scheduler {
    /// Creates a scheduler with the default staffing policy.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self::with_policy(employees, PolicyConfig::default())
    }

    /// Creates a scheduler with an explicit staffing policy.
    ///
    /// The policy's weekly cap is applied to every employee.
    pub fn with_policy(mut employees: Vec<Employee>, policy: PolicyConfig) -> Self {
        for employee in employees.iter_mut() {
            employee.set_max_days_per_week(policy.max_days_per_week);
        }
        Self {
            employees,
            grid: ScheduleGrid::new(),
            policy,
            generated: false,
        }
    }

    /// Returns the employees, including their assignments once generated.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the schedule grid.
    pub fn grid(&self) -> &ScheduleGrid {
        &self.grid
    }

    /// Returns the staffing policy in force.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns true once a schedule has been generated.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Runs the preference pass followed by the backfill pass.
    ///
    /// `rng` drives every random choice of the backfill, so a seeded
    /// generator makes the whole run reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ScheduleAlreadyGenerated`] on a second call;
    /// the grid and employees are left as the first run produced them.
    pub fn generate_schedule<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> EngineResult<ScheduleReport> {
        if self.generated {
            return Err(EngineError::ScheduleAlreadyGenerated);
        }
        self.generated = true;

        let run_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(
            run_id = %run_id,
            employees = self.employees.len(),
            min_staff_per_shift = self.policy.min_staff_per_shift,
            max_days_per_week = self.policy.max_days_per_week,
            "Generating schedule"
        );

        let mut assignments = Vec::new();
        run_preference_pass(
            &mut self.employees,
            &mut self.grid,
            &self.policy,
            &mut assignments,
        )?;
        let shortfalls = run_backfill_pass(
            &mut self.employees,
            &mut self.grid,
            &self.policy,
            rng,
            &mut assignments,
        )?;

        let duration = start_time.elapsed();
        info!(
            run_id = %run_id,
            assignments = assignments.len(),
            shortfalls = shortfalls.len(),
            duration_us = duration.as_micros(),
            "Schedule generated"
        );

        Ok(ScheduleReport {
            run_id,
            generated_at: Utc::now(),
            seed: None,
            schedule: self.grid.clone(),
            assignments,
            shortfalls,
            duration_us: duration.as_micros() as u64,
        })
    }

    /// Runs [`generate_schedule`](Scheduler::generate_schedule) with a
    /// [`StdRng`] seeded from `seed`, recording the seed on the report.
    pub fn generate_seeded(&mut self, seed: u64) -> EngineResult<ScheduleReport> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut report = self.generate_schedule(&mut rng)?;
        report.seed = Some(seed);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignmentPhase, Day, ShiftKind};

    fn employee(name: &str, codes: &str) -> Employee {
        let mut employee = Employee::new(name);
        for (day, code) in Day::ALL.into_iter().zip(codes.split(',')) {
            if let Some(shift) = ShiftKind::from_code(code) {
                employee.add_preference(day, shift);
            }
        }
        employee
    }

    #[test]
    fn test_second_generation_is_rejected() {
        let mut scheduler = Scheduler::new(vec![employee("Alice", "M,M,M,M,M,N,N")]);
        let first = scheduler.generate_seeded(1).unwrap();

        let err = scheduler.generate_seeded(1).unwrap_err();
        assert!(matches!(err, EngineError::ScheduleAlreadyGenerated));
        assert_eq!(scheduler.grid(), &first.schedule);
        assert_eq!(scheduler.employees()[0].days_worked(), 5);
    }

    #[test]
    fn test_lone_employee_leaves_monday_morning_short() {
        let mut scheduler = Scheduler::new(vec![employee("Solo", "M,N,N,N,N,N,N")]);
        let report = scheduler.generate_seeded(5).unwrap();

        assert_eq!(
            report.schedule.cell(Day::Monday, ShiftKind::Morning),
            &["Solo".to_string()]
        );
        let monday_morning = report
            .shortfalls
            .iter()
            .find(|s| s.day == Day::Monday && s.shift == ShiftKind::Morning)
            .expect("Monday morning should be short");
        assert_eq!(monday_morning.assigned, 1);
    }

    #[test]
    fn test_preferences_are_honoured_before_backfill() {
        let mut scheduler = Scheduler::new(vec![
            employee("Alice", "M,A,E,N,M,A,E"),
            employee("Bob", "M,M,M,M,M,N,N"),
        ]);
        let report = scheduler.generate_seeded(11).unwrap();

        let preference: Vec<_> = report
            .assignments
            .iter()
            .take_while(|r| r.phase == AssignmentPhase::Preference)
            .map(|r| (r.employee.as_str(), r.day, r.shift))
            .collect();
        assert_eq!(preference[0], ("Alice", Day::Monday, ShiftKind::Morning));
        assert_eq!(preference[1], ("Alice", Day::Tuesday, ShiftKind::Afternoon));
        assert!(preference.contains(&("Bob", Day::Monday, ShiftKind::Morning)));
        assert_eq!(
            report.schedule.cell(Day::Monday, ShiftKind::Morning),
            &["Alice".to_string(), "Bob".to_string()]
        );
    }

    #[test]
    fn test_seed_is_reported() {
        let mut scheduler = Scheduler::new(vec![]);
        let report = scheduler.generate_seeded(77).unwrap();
        assert_eq!(report.seed, Some(77));
        assert_eq!(report.shortfalls.len(), 21);
        assert!(report.assignments.is_empty());
    }

    #[test]
    fn test_policy_cap_is_applied_to_employees() {
        let policy = PolicyConfig {
            min_staff_per_shift: 2,
            max_days_per_week: 3,
        };
        let mut scheduler = Scheduler::with_policy(
            (0..4).map(|i| Employee::new(format!("E{}", i))).collect(),
            policy,
        );
        scheduler.generate_seeded(9).unwrap();

        for employee in scheduler.employees() {
            assert_eq!(employee.max_days_per_week(), 3);
            assert!(employee.days_worked() <= 3);
        }
    }

    #[test]
    fn test_identical_seeds_give_identical_grids() {
        let roster = || {
            vec![
                employee("Alice", "M,A,E,N,M,A,E"),
                employee("Bob", "M,M,M,M,M,N,N"),
                employee("Carol", "A,A,N,E,E,M,M"),
                employee("Dave", "N,N,N,N,N,N,N"),
                employee("Erin", "E,E,E,E,E,E,E"),
            ]
        };

        let first = Scheduler::new(roster()).generate_seeded(123).unwrap();
        let second = Scheduler::new(roster()).generate_seeded(123).unwrap();
        assert_eq!(first.schedule, second.schedule);
        assert_eq!(first.assignments, second.assignments);
    }
}
