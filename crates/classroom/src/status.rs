use crate::error::ClassroomError;
use std::fmt;

/// A successfully applied registry operation.
///
/// `Display` renders the status line shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Created { classroom: String },
    Enrolled { student: String, classroom: String },
    Scheduled { classroom: String },
    Submitted { student: String, classroom: String, message: String, notified: usize },
}

impl Status {
    /// The submission record for [`Status::Submitted`]; `None` for other outcomes.
    #[must_use]
    pub fn submission_line(&self) -> Option<&str> {
        match self {
            Self::Submitted { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { classroom } => write!(f, "Classroom {classroom} has been created."),
            Self::Enrolled { student, classroom } => {
                write!(f, "Student {student} has been enrolled in {classroom}.")
            },
            Self::Scheduled { classroom } => {
                write!(f, "Assignment for {classroom} has been scheduled.")
            },
            Self::Submitted { student, classroom, .. } => {
                write!(f, "Assignment submitted by Student {student} in {classroom}.")
            },
        }
    }
}

/// A titled list of entries with a fallback line when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    title: String,
    empty: String,
    entries: Vec<String>,
}

impl Listing {
    pub(crate) fn new(title: impl Into<String>, empty: impl Into<String>, entries: Vec<String>) -> Self {
        Self { title: title.into(), empty: empty.into(), entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str(&self.empty);
        }
        f.write_str(&self.title)?;
        for entry in &self.entries {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

/// Collapses an operation outcome into the line shown to the operator.
pub trait Report {
    fn report(&self) -> String;
}

impl<T: fmt::Display> Report for Result<T, ClassroomError> {
    fn report(&self) -> String {
        match self {
            Ok(value) => value.to_string(),
            Err(err) => err.to_string(),
        }
    }
}
