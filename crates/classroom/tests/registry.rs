use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;
use vclass_classroom::{ClassroomError, ClassroomRegistry, NamedListener, Report, Status};

fn inbox(registry: &ClassroomRegistry, class_name: &str) -> Arc<Mutex<Vec<String>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    registry
        .subscribe(class_name, move |msg: &str| sink.lock().push(msg.to_owned()))
        .expect("classroom exists");
    seen
}

#[test]
fn duplicate_classroom_is_rejected_without_mutation() {
    let registry = ClassroomRegistry::new();
    registry.create_classroom("X").unwrap();
    registry.enroll_student("S1", "X").unwrap();

    let second = registry.create_classroom("X");
    assert_eq!(second.report(), "Classroom X already exists.");
    assert!(matches!(second, Err(ClassroomError::DuplicateClassroom { ref name }) if name == "X"));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.snapshot("X").unwrap().students, vec!["S1"], "existing room untouched");
}

#[test]
fn enrolling_into_missing_classroom_leaves_registry_unchanged() {
    let registry = ClassroomRegistry::new();
    registry.create_classroom("Math").unwrap();
    let before = registry.snapshot("Math").unwrap();

    let err = registry.enroll_student("S1", "Y").unwrap_err();
    assert_eq!(err.name(), "Y");
    assert_eq!(err.to_string(), "Error: Classroom Y does not exist.");

    assert!(!registry.contains("Y"));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.snapshot("Math").unwrap(), before);
}

#[test]
fn students_are_listed_in_enrollment_order() {
    let registry = ClassroomRegistry::new();
    registry.create_classroom("Math").unwrap();
    registry.enroll_student("S1", "Math").unwrap();
    registry.enroll_student("S2", "Math").unwrap();

    let listing = registry.list_students("Math").unwrap();
    assert_eq!(listing.entries(), ["S1", "S2"]);
    assert_eq!(listing.to_string(), "Students in Math:\nS1\nS2");
}

#[test]
fn listener_receives_exactly_one_submission_notice() {
    let registry = ClassroomRegistry::new();
    registry.create_classroom("Math").unwrap();
    registry.create_classroom("Art").unwrap();
    let math = inbox(&registry, "Math");
    let art = inbox(&registry, "Art");

    registry.schedule_assignment("Math", "HW1").unwrap();
    let status = registry.submit_assignment("S1", "Math", "HW1").unwrap();

    assert_eq!(status.to_string(), "Assignment submitted by Student S1 in Math.");
    assert!(matches!(status, Status::Submitted { notified: 1, .. }));

    let received = math.lock().clone();
    assert_eq!(received.len(), 1);
    for needle in ["S1", "Math", "HW1"] {
        assert!(received[0].contains(needle), "{needle} missing from {:?}", received[0]);
    }
    assert!(art.lock().is_empty(), "notifications are classroom-scoped");
}

#[test]
fn unsubscribed_listener_is_not_notified() {
    let registry = ClassroomRegistry::new();
    registry.create_classroom("Math").unwrap();
    let instructor = Arc::new(NamedListener::new("Instructor"));
    let id = registry.subscribe_arc("Math", instructor.clone()).unwrap();

    assert_eq!(registry.unsubscribe("Math", id), Ok(true));
    assert_eq!(registry.unsubscribe("Math", id), Ok(false));
    registry.submit_assignment("S1", "Math", "HW1").unwrap();

    assert!(instructor.last().is_none());
    assert!(registry.unsubscribe("Nope", id).is_err());
}

#[test]
fn new_classroom_starts_without_listeners() {
    let registry = ClassroomRegistry::new();
    registry.create_classroom("Math").unwrap();
    assert_eq!(registry.snapshot("Math").unwrap().listeners, 0);

    let instructor = Arc::new(NamedListener::new("Instructor"));
    registry.subscribe_arc("Math", instructor.clone()).unwrap();
    registry.submit_assignment("S1", "Math", "HW1").unwrap();
    registry.submit_assignment("S2", "Math", "HW2").unwrap();

    assert_eq!(registry.snapshot("Math").unwrap().listeners, 1);
    assert_eq!(
        instructor.last().as_deref(),
        Some("Notification to Instructor: Assignment submitted by Student S2 in Math: HW2")
    );
}

#[test]
fn submit_to_missing_classroom_is_an_error() {
    let registry = ClassroomRegistry::new();
    assert_eq!(
        registry.submit_assignment("S1", "Ghost", "HW").report(),
        "Error: Classroom Ghost does not exist."
    );
}

#[test]
fn empty_registry_listing() {
    let registry = ClassroomRegistry::new();
    let listing = registry.list_classrooms();
    assert!(listing.is_empty());
    assert_eq!(listing.to_string(), "No classrooms available.");
    assert!(registry.is_empty());
}

#[test]
fn classrooms_listing_contains_every_name() {
    let registry = ClassroomRegistry::new();
    for name in ["Math", "Art", "History"] {
        registry.create_classroom(name).unwrap();
    }

    let listing = registry.list_classrooms();
    let names: BTreeSet<&str> = listing.entries().iter().map(String::as_str).collect();
    assert_eq!(names, BTreeSet::from(["Art", "History", "Math"]));
    assert!(listing.to_string().starts_with("Classrooms:\n"));
}

#[test]
fn listings_for_empty_and_missing_classrooms() {
    let registry = ClassroomRegistry::new();
    registry.create_classroom("Math").unwrap();

    assert_eq!(
        registry.list_students("Math").report(),
        "No students enrolled in Math."
    );
    assert_eq!(
        registry.list_assignments("Math").report(),
        "No assignments scheduled in Math."
    );
    assert_eq!(registry.list_students("Y").report(), "Error: Classroom Y does not exist.");

    registry.schedule_assignment("Math", "HW1").unwrap();
    registry.schedule_assignment("Math", "HW2").unwrap();
    assert_eq!(
        registry.list_assignments("Math").report(),
        "Assignments in Math:\nHW1\nHW2"
    );
}

#[test]
fn independent_registries_do_not_share_state() {
    let first = ClassroomRegistry::new();
    let second = ClassroomRegistry::new();
    first.create_classroom("Math").unwrap();

    assert!(first.contains("Math"));
    assert!(!second.contains("Math"));
    assert!(second.create_classroom("Math").is_ok());
}

#[test]
fn shared_registry_is_linearizable_across_threads() {
    let registry = Arc::new(ClassroomRegistry::new());
    registry.create_classroom("Math").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                for i in 0..50 {
                    registry.enroll_student(format!("T{t}-{i}"), "Math").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(registry.list_students("Math").unwrap().len(), 400);
}
