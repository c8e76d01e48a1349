use crate::notifier::{Listener, ListenerId, Notifier};
use std::sync::Arc;

/// A named classroom with its enrolled students and scheduled assignments.
///
/// Both sequences only grow and keep insertion order; duplicates are allowed.
/// Observation is an optional capability: a classroom starts without a
/// [`Notifier`] and gets one attached when the first listener subscribes.
#[derive(Debug, Clone)]
pub struct Classroom {
    name: String,
    students: Vec<String>,
    assignments: Vec<String>,
    notifier: Option<Arc<Notifier>>,
}

impl Classroom {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), students: Vec::new(), assignments: Vec::new(), notifier: None }
    }

    /// Creates a classroom that is observable from the start.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn students(&self) -> &[String] {
        &self.students
    }

    #[must_use]
    pub fn assignments(&self) -> &[String] {
        &self.assignments
    }

    #[must_use]
    pub fn notifier(&self) -> Option<&Arc<Notifier>> {
        self.notifier.as_ref()
    }

    pub fn add_student(&mut self, student_id: impl Into<String>) {
        self.students.push(student_id.into());
    }

    pub fn add_assignment(&mut self, details: impl Into<String>) {
        self.assignments.push(details.into());
    }

    pub fn subscribe(&mut self, listener: Arc<dyn Listener>) -> ListenerId {
        self.notifier.get_or_insert_with(Arc::default).subscribe_arc(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.notifier.as_ref().is_some_and(|n| n.unsubscribe(id))
    }

    /// The line recorded for a submission and sent to listeners.
    #[must_use]
    pub fn submission_message(&self, student_id: &str, details: &str) -> String {
        format!("Assignment submitted by Student {student_id} in {}: {details}", self.name)
    }

    #[must_use]
    pub fn snapshot(&self) -> ClassroomSnapshot {
        ClassroomSnapshot {
            name: self.name.clone(),
            students: self.students.clone(),
            assignments: self.assignments.clone(),
            listeners: self.notifier.as_ref().map_or(0, |n| n.len()),
        }
    }
}

/// Read-only copy of a classroom's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomSnapshot {
    pub name: String,
    pub students: Vec<String>,
    pub assignments: Vec<String>,
    pub listeners: usize,
}
