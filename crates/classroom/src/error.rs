/// Outcomes of a registry operation that did not apply.
///
/// These are reported to the operator as status lines, never as faults; the
/// `Display` form is the exact line shown on the console.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassroomError {
    /// A classroom with this name is already registered.
    #[error("Classroom {name} already exists.")]
    DuplicateClassroom { name: String },

    /// No classroom with this name is registered.
    #[error("Error: Classroom {name} does not exist.")]
    ClassroomNotFound { name: String },
}

impl ClassroomError {
    pub(crate) fn duplicate(name: &str) -> Self {
        Self::DuplicateClassroom { name: name.to_owned() }
    }

    pub(crate) fn not_found(name: &str) -> Self {
        Self::ClassroomNotFound { name: name.to_owned() }
    }

    /// The classroom name the error refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::DuplicateClassroom { name } | Self::ClassroomNotFound { name } => name,
        }
    }
}

pub type Result<T, E = ClassroomError> = std::result::Result<T, E>;
