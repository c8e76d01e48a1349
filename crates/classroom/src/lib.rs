//! # Classroom Registry
//!
//! In-memory registry of classrooms: creation, enrollment, assignment
//! scheduling and submission, plus listings for the console.
//!
//! ## Overview
//!
//! * [`ClassroomRegistry`] is an explicitly constructed service object. There is
//!   no process-wide instance; create one per console session (or per test).
//! * Every operation yields a value that renders to the operator's status line:
//!   [`Status`] and [`Listing`] on success, [`ClassroomError`] otherwise.
//! * Submissions fan out synchronously to the classroom's listeners through a
//!   [`Notifier`], in registration order.
//!
//! # Example
//!
//! ```rust
//! use vclass_classroom::{ClassroomRegistry, NamedListener, Report};
//! use std::sync::Arc;
//!
//! let registry = ClassroomRegistry::new();
//! registry.create_classroom("Math").unwrap();
//! registry.enroll_student("S1", "Math").unwrap();
//!
//! let instructor = Arc::new(NamedListener::new("Instructor"));
//! registry.subscribe_arc("Math", instructor.clone()).unwrap();
//! registry.submit_assignment("S1", "Math", "HW1").unwrap();
//!
//! assert_eq!(
//!     instructor.last().as_deref(),
//!     Some("Notification to Instructor: Assignment submitted by Student S1 in Math: HW1")
//! );
//! assert_eq!(registry.enroll_student("S2", "Art").report(), "Error: Classroom Art does not exist.");
//! ```

mod classroom;
mod error;
mod notifier;
mod registry;
mod status;

pub use classroom::{Classroom, ClassroomSnapshot};
pub use error::{ClassroomError, Result};
pub use notifier::{Listener, ListenerId, NamedListener, Notifier};
pub use registry::ClassroomRegistry;
pub use status::{Listing, Report, Status};
