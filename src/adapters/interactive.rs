//! Interactive terminal session.
//!
//! [`Prompter`] wraps any line-oriented input and output so the same menu
//! flow runs against a real terminal or an in-memory script in tests.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::adapters::console::{render_coverage_summary, render_schedule};
use crate::adapters::csv_export::save_roster;
use crate::adapters::csv_import::load_employees;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{Day, Employee, ScheduleReport, ShiftKind};
use crate::scheduling::Scheduler;

/// A choice from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Load preferences from a CSV file.
    ImportCsv,
    /// Type preferences in one employee at a time.
    EnterManually,
    /// Leave without scheduling.
    Exit,
}

/// Line-based prompts over a reader and a writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> EngineResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `prompt` and returns the trimmed answer.
    ///
    /// End of input is an error so scripted sessions cannot loop forever.
    fn ask(&mut self, prompt: &str) -> EngineResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EngineError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )));
        }
        Ok(line.trim().to_string())
    }

    /// Shows the main menu until a valid choice is made.
    pub fn main_menu(&mut self) -> EngineResult<MenuChoice> {
        loop {
            self.say("\nEmployee Schedule Manager")?;
            self.say("1. Import schedule from CSV file")?;
            self.say("2. Enter employee preferences manually")?;
            self.say("3. Exit")?;

            match self.ask("\nEnter your choice (1-3): ")?.as_str() {
                "1" => return Ok(MenuChoice::ImportCsv),
                "2" => return Ok(MenuChoice::EnterManually),
                "3" => return Ok(MenuChoice::Exit),
                _ => self.say("Invalid choice. Please try again.")?,
            }
        }
    }

    /// Asks for a file name, returning `default` for an empty answer.
    pub fn ask_path(&mut self, label: &str, default: &str) -> EngineResult<String> {
        let answer = self.ask(&format!("{} (default: {}): ", label, default))?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    /// Asks a yes/no question; only `y` or `Y` count as yes.
    pub fn confirm(&mut self, question: &str) -> EngineResult<bool> {
        Ok(self.ask(question)?.eq_ignore_ascii_case("y"))
    }

    /// Reads one employee: a name, then a shift code for every day.
    ///
    /// Returns `None` after reporting an empty name. Invalid codes are
    /// re-asked until a valid one is given.
    pub fn read_employee(&mut self) -> EngineResult<Option<Employee>> {
        let name = self.ask("\nEnter employee name: ")?;
        if name.is_empty() {
            self.say("Error: Name cannot be empty.")?;
            return Ok(None);
        }

        let mut employee = Employee::new(name);
        self.say(
            "\nEnter shift preferences for each day (M=Morning, A=Afternoon, E=Evening, N=No Shift):",
        )?;
        for day in Day::ALL {
            loop {
                let code = self.ask(&format!("{} (M/A/E/N): ", day))?;
                match ShiftKind::from_code(&code) {
                    Some(shift) => {
                        employee.add_preference(day, shift);
                        break;
                    }
                    None => self.say("Invalid input. Please enter M, A, E, or N.")?,
                }
            }
        }
        Ok(Some(employee))
    }

    /// Reads employees until the user declines to add another.
    pub fn read_employees(&mut self) -> EngineResult<Vec<Employee>> {
        let mut employees = Vec::new();
        loop {
            if let Some(employee) = self.read_employee()? {
                employees.push(employee);
                if !self.confirm("\nAdd another employee? (y/n): ")? {
                    return Ok(employees);
                }
            }
        }
    }
}

/// Runs the full interactive flow: menu, load, schedule, render, save.
///
/// A failed import is reported and the menu shown again. Returns `None` if
/// the user exits from the menu.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &ConfigLoader,
    seed: u64,
) -> EngineResult<Option<ScheduleReport>> {
    let employees = loop {
        match prompter.main_menu()? {
            MenuChoice::ImportCsv => {
                let path = prompter.ask_path("Enter CSV filename", config.default_csv_path())?;
                match load_employees(&path) {
                    Ok(employees) => break employees,
                    Err(err) => {
                        warn!(path = %path, error = %err, "Import failed");
                        prompter.say(&format!(
                            "Error: The input CSV file cannot be used. {}",
                            err
                        ))?;
                    }
                }
            }
            MenuChoice::EnterManually => break prompter.read_employees()?,
            MenuChoice::Exit => {
                prompter.say("Exiting program.")?;
                return Ok(None);
            }
        }
    };

    let mut scheduler = Scheduler::with_policy(employees, config.policy());
    let report = scheduler.generate_seeded(seed)?;

    prompter.say(&render_schedule(&report.schedule))?;
    prompter.say(&render_coverage_summary(&report))?;

    if prompter.confirm("\nDo you want to save the schedule to a CSV file? (y/n): ")? {
        let path = prompter.ask_path("Enter filename to save", config.default_csv_path())?;
        save_roster(&path, scheduler.employees(), config.export_mode())?;
        prompter.say(&format!("Schedule saved to {}", path))?;
    }

    Ok(Some(report))
}
