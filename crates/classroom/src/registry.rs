use crate::classroom::{Classroom, ClassroomSnapshot};
use crate::error::{ClassroomError, Result};
use crate::notifier::{Listener, ListenerId};
use crate::status::{Listing, Status};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// In-memory registry of classrooms keyed by their case-sensitive name.
///
/// Construct one explicitly and pass it to whoever needs it; independent
/// registries never share state. Every operation takes the single internal
/// lock once, so operations are linearizable when the registry is shared.
/// Listener callbacks run after the lock is released.
#[derive(Debug, Default)]
pub struct ClassroomRegistry {
    classrooms: RwLock<FxHashMap<String, Classroom>>,
}

impl ClassroomRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty classroom. It has no listeners until [`Self::subscribe`].
    ///
    /// # Errors
    /// [`ClassroomError::DuplicateClassroom`] if the name is taken; nothing changes.
    ///
    /// # Examples
    /// ```rust
    /// use vclass_classroom::{ClassroomError, ClassroomRegistry};
    ///
    /// let registry = ClassroomRegistry::new();
    /// assert_eq!(registry.create_classroom("Math").unwrap().to_string(), "Classroom Math has been created.");
    /// assert!(matches!(registry.create_classroom("Math"), Err(ClassroomError::DuplicateClassroom { .. })));
    /// ```
    pub fn create_classroom(&self, name: impl Into<String>) -> Result<Status> {
        let name = name.into();
        match self.classrooms.write().entry(name) {
            Entry::Occupied(entry) => {
                warn!(classroom = %entry.key(), "Classroom already exists");
                Err(ClassroomError::duplicate(entry.key()))
            },
            Entry::Vacant(entry) => {
                let classroom = entry.key().clone();
                entry.insert(Classroom::new(classroom.clone()));
                debug!(%classroom, "Classroom created");
                Ok(Status::Created { classroom })
            },
        }
    }

    /// Appends a student to a classroom. Duplicate ids are kept.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    pub fn enroll_student(&self, student_id: impl Into<String>, class_name: &str) -> Result<Status> {
        let student = student_id.into();
        self.with_classroom_mut(class_name, |classroom| classroom.add_student(student.clone()))?;
        debug!(classroom = class_name, %student, "Student enrolled");
        Ok(Status::Enrolled { student, classroom: class_name.to_owned() })
    }

    /// Appends an assignment description to a classroom.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    pub fn schedule_assignment(&self, class_name: &str, details: impl Into<String>) -> Result<Status> {
        let details = details.into();
        self.with_classroom_mut(class_name, |classroom| classroom.add_assignment(details.clone()))?;
        debug!(classroom = class_name, %details, "Assignment scheduled");
        Ok(Status::Scheduled { classroom: class_name.to_owned() })
    }

    /// Records a submission and notifies the classroom's listeners.
    ///
    /// Neither enrollment of `student_id` nor a matching scheduled assignment is
    /// required.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    pub fn submit_assignment(
        &self,
        student_id: impl Into<String>,
        class_name: &str,
        details: &str,
    ) -> Result<Status> {
        let student = student_id.into();
        let (message, notifier) = {
            let classrooms = self.classrooms.read();
            let classroom = classrooms.get(class_name).ok_or_else(|| missing(class_name))?;
            (classroom.submission_message(&student, details), classroom.notifier().cloned())
        };

        info!(classroom = class_name, %student, "{message}");
        let notified = notifier.map_or(0, |notifier| notifier.notify(&message));
        debug!(classroom = class_name, notified, "Submission fan-out complete");

        Ok(Status::Submitted { student, classroom: class_name.to_owned(), message, notified })
    }

    /// Lists classroom names. Order is unspecified.
    #[must_use]
    pub fn list_classrooms(&self) -> Listing {
        let names = self.classrooms.read().keys().cloned().collect();
        Listing::new("Classrooms:", "No classrooms available.", names)
    }

    /// Lists enrolled students in enrollment order.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    pub fn list_students(&self, class_name: &str) -> Result<Listing> {
        let students = self.with_classroom(class_name, |c| c.students().to_vec())?;
        Ok(Listing::new(
            format!("Students in {class_name}:"),
            format!("No students enrolled in {class_name}."),
            students,
        ))
    }

    /// Lists scheduled assignments in scheduling order.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    pub fn list_assignments(&self, class_name: &str) -> Result<Listing> {
        let assignments = self.with_classroom(class_name, |c| c.assignments().to_vec())?;
        Ok(Listing::new(
            format!("Assignments in {class_name}:"),
            format!("No assignments scheduled in {class_name}."),
            assignments,
        ))
    }

    /// Registers a listener for submissions in `class_name`.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    ///
    /// # Examples
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use vclass_classroom::ClassroomRegistry;
    ///
    /// let registry = ClassroomRegistry::new();
    /// registry.create_classroom("Math").unwrap();
    ///
    /// let inbox = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&inbox);
    /// registry.subscribe("Math", move |msg: &str| sink.lock().unwrap().push(msg.to_owned())).unwrap();
    ///
    /// registry.submit_assignment("S1", "Math", "HW1").unwrap();
    /// assert_eq!(inbox.lock().unwrap().len(), 1);
    /// ```
    pub fn subscribe(&self, class_name: &str, listener: impl Listener + 'static) -> Result<ListenerId> {
        self.subscribe_arc(class_name, Arc::new(listener))
    }

    /// Registers a shared listener, so the caller can keep inspecting it.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    pub fn subscribe_arc(&self, class_name: &str, listener: Arc<dyn Listener>) -> Result<ListenerId> {
        let id = self.with_classroom_mut(class_name, |classroom| classroom.subscribe(listener))?;
        debug!(classroom = class_name, %id, "Listener subscribed");
        Ok(id)
    }

    /// Removes a listener. Returns `Ok(false)` if it was not registered there.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    pub fn unsubscribe(&self, class_name: &str, id: ListenerId) -> Result<bool> {
        self.with_classroom(class_name, |classroom| classroom.unsubscribe(id))
    }

    /// Returns a copy of the classroom's current state.
    ///
    /// # Errors
    /// [`ClassroomError::ClassroomNotFound`] if `class_name` is not registered.
    pub fn snapshot(&self, class_name: &str) -> Result<ClassroomSnapshot> {
        self.with_classroom(class_name, Classroom::snapshot)
    }

    #[must_use]
    pub fn contains(&self, class_name: &str) -> bool {
        self.classrooms.read().contains_key(class_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classrooms.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classrooms.read().is_empty()
    }

    fn with_classroom<R>(&self, class_name: &str, f: impl FnOnce(&Classroom) -> R) -> Result<R> {
        self.classrooms.read().get(class_name).map(f).ok_or_else(|| missing(class_name))
    }

    fn with_classroom_mut<R>(
        &self,
        class_name: &str,
        f: impl FnOnce(&mut Classroom) -> R,
    ) -> Result<R> {
        self.classrooms.write().get_mut(class_name).map(f).ok_or_else(|| missing(class_name))
    }
}

fn missing(class_name: &str) -> ClassroomError {
    warn!(classroom = class_name, "Classroom does not exist");
    ClassroomError::not_found(class_name)
}
