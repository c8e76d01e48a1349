use crate::error::{ConsoleError, ConsoleErrorExt};
use std::io::{BufRead, Write};
use tracing::{debug, trace};
use vclass_classroom::{ClassroomRegistry, Report};

pub const MENU: &str = "Choose an option: 1. Add Classroom  2. Add Student  3. Schedule Assignment  \
                        4. Submit Assignment  5. List Classrooms  6. List Students  7. Exit";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const EXITING: &str = "Exiting...";

const PROMPT_CLASSROOM: &str = "Enter classroom name:";
const PROMPT_STUDENT: &str = "Enter student ID:";
const PROMPT_DETAILS: &str = "Enter assignment details:";

/// A menu entry selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddClassroom,
    AddStudent,
    ScheduleAssignment,
    SubmitAssignment,
    ListClassrooms,
    ListStudents,
    Exit,
}

impl MenuOption {
    /// Parses a menu line; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u8>().ok()? {
            1 => Some(Self::AddClassroom),
            2 => Some(Self::AddStudent),
            3 => Some(Self::ScheduleAssignment),
            4 => Some(Self::SubmitAssignment),
            5 => Some(Self::ListClassrooms),
            6 => Some(Self::ListStudents),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Why the console loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The operator chose the exit option.
    Requested,
    /// Input ended before an exit was requested.
    EndOfInput,
}

/// Numbered-menu loop over any line-oriented input and output.
///
/// Every prompt and status line goes to `output`; diagnostics go through `tracing`.
#[derive(Debug)]
pub struct Console<'r, R, W> {
    registry: &'r ClassroomRegistry,
    input: R,
    output: W,
    line: String,
}

impl<'r, R: BufRead, W: Write> Console<'r, R, W> {
    pub const fn new(registry: &'r ClassroomRegistry, input: R, output: W) -> Self {
        Self { registry, input, output, line: String::new() }
    }

    /// Runs until the operator exits or input ends.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Io`] if a console stream fails.
    pub fn run(&mut self) -> Result<Exit, ConsoleError> {
        loop {
            self.say(MENU)?;
            let Some(choice) = self.read_line()? else {
                return Ok(Exit::EndOfInput);
            };

            let Some(option) = MenuOption::parse(&choice) else {
                debug!(input = %choice, "Rejected menu input");
                self.say(INVALID_OPTION)?;
                continue;
            };

            trace!(?option, "Menu option selected");
            if option == MenuOption::Exit {
                self.say(EXITING)?;
                return Ok(Exit::Requested);
            }
            if self.dispatch(option)?.is_none() {
                return Ok(Exit::EndOfInput);
            }
        }
    }

    /// Handles one data-entry option. `None` means input ended mid-command.
    fn dispatch(&mut self, option: MenuOption) -> Result<Option<()>, ConsoleError> {
        match option {
            MenuOption::AddClassroom => {
                let Some(name) = self.ask(PROMPT_CLASSROOM)? else { return Ok(None) };
                let reply = self.registry.create_classroom(name).report();
                self.say(&reply)?;
            },
            MenuOption::AddStudent => {
                let Some(student) = self.ask(PROMPT_STUDENT)? else { return Ok(None) };
                let Some(class_name) = self.ask(PROMPT_CLASSROOM)? else { return Ok(None) };
                let reply = self.registry.enroll_student(student, &class_name).report();
                self.say(&reply)?;
            },
            MenuOption::ScheduleAssignment => {
                let Some(class_name) = self.ask(PROMPT_CLASSROOM)? else { return Ok(None) };
                let Some(details) = self.ask(PROMPT_DETAILS)? else { return Ok(None) };
                let reply = self.registry.schedule_assignment(&class_name, details).report();
                self.say(&reply)?;
            },
            MenuOption::SubmitAssignment => {
                let Some(student) = self.ask(PROMPT_STUDENT)? else { return Ok(None) };
                let Some(class_name) = self.ask(PROMPT_CLASSROOM)? else { return Ok(None) };
                let Some(details) = self.ask(PROMPT_DETAILS)? else { return Ok(None) };
                let result = self.registry.submit_assignment(student, &class_name, &details);
                if let Some(line) = result.as_ref().ok().and_then(|s| s.submission_line()) {
                    self.say(line)?;
                }
                self.say(&result.report())?;
            },
            MenuOption::ListClassrooms => {
                let listing = self.registry.list_classrooms().to_string();
                self.say(&listing)?;
            },
            MenuOption::ListStudents => {
                let Some(class_name) = self.ask(PROMPT_CLASSROOM)? else { return Ok(None) };
                let reply = self.registry.list_students(&class_name).report();
                self.say(&reply)?;
            },
            MenuOption::Exit => {},
        }
        Ok(Some(()))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        self.say(prompt)?;
        self.read_line()
    }

    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}").context("Failed to write to console")?;
        self.output.flush().context("Failed to flush console")
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        self.line.clear();
        let read = self.input.read_line(&mut self.line).context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = self.line.strip_suffix('\n').unwrap_or(&self.line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_owned()))
    }
}
