use std::sync::Arc;
use vclass_classroom::{ClassroomRegistry, NamedListener};
use vclass_console::console::{EXITING, INVALID_OPTION, MENU};
use vclass_console::{Console, Exit};

fn run(registry: &ClassroomRegistry, script: &str) -> (Exit, Vec<String>) {
    let mut out = Vec::new();
    let exit = Console::new(registry, script.as_bytes(), &mut out).run().expect("console run");
    let text = String::from_utf8(out).expect("utf-8 output");
    (exit, text.lines().map(str::to_owned).collect())
}

/// Output with the menu lines removed.
fn replies(lines: &[String]) -> Vec<&str> {
    lines.iter().map(String::as_str).filter(|l| *l != MENU).collect()
}

#[test]
fn full_session_transcript() {
    let registry = ClassroomRegistry::new();
    let script = "1\nMath\n2\nS1\nMath\n2\nS2\nMath\n3\nMath\nHW1\n4\nS1\nMath\nHW1\n6\nMath\n5\n7\n";

    let (exit, lines) = run(&registry, script);

    assert_eq!(exit, Exit::Requested);
    assert_eq!(replies(&lines), vec![
        "Enter classroom name:",
        "Classroom Math has been created.",
        "Enter student ID:",
        "Enter classroom name:",
        "Student S1 has been enrolled in Math.",
        "Enter student ID:",
        "Enter classroom name:",
        "Student S2 has been enrolled in Math.",
        "Enter classroom name:",
        "Enter assignment details:",
        "Assignment for Math has been scheduled.",
        "Enter student ID:",
        "Enter classroom name:",
        "Enter assignment details:",
        "Assignment submitted by Student S1 in Math: HW1",
        "Assignment submitted by Student S1 in Math.",
        "Enter classroom name:",
        "Students in Math:",
        "S1",
        "S2",
        "Classrooms:",
        "Math",
        EXITING,
    ]);
    assert_eq!(lines.iter().filter(|l| *l == MENU).count(), 8);
}

#[test]
fn errors_are_reported_as_lines() {
    let registry = ClassroomRegistry::new();
    let script = "5\n1\nX\n1\nX\n2\nS1\nY\n6\nY\n6\nX\n4\nS1\nY\nHW\n7\n";

    let (_, lines) = run(&registry, script);
    let replies = replies(&lines);

    assert!(replies.contains(&"No classrooms available."));
    assert!(replies.contains(&"Classroom X already exists."));
    assert!(replies.contains(&"No students enrolled in X."));
    assert_eq!(replies.iter().filter(|l| **l == "Error: Classroom Y does not exist.").count(), 3);
    assert_eq!(registry.len(), 1);
}

#[test]
fn invalid_options_redisplay_menu() {
    let registry = ClassroomRegistry::new();
    let (exit, lines) = run(&registry, "9\nhello\n\n7\n");

    assert_eq!(exit, Exit::Requested);
    assert_eq!(lines, vec![
        MENU, INVALID_OPTION, MENU, INVALID_OPTION, MENU, INVALID_OPTION, MENU, EXITING,
    ]);
}

#[test]
fn end_of_input_stops_cleanly() {
    let registry = ClassroomRegistry::new();

    let (exit, lines) = run(&registry, "");
    assert_eq!(exit, Exit::EndOfInput);
    assert_eq!(lines, vec![MENU]);

    let (exit, _) = run(&registry, "2\nS1\n");
    assert_eq!(exit, Exit::EndOfInput, "input ending mid-command is not an error");
    assert!(registry.is_empty());
}

#[test]
fn programmatic_listener_sees_console_submission() {
    let registry = ClassroomRegistry::new();
    registry.create_classroom("Math").unwrap();
    let instructor = Arc::new(NamedListener::new("Instructor"));
    registry.subscribe_arc("Math", instructor.clone()).unwrap();

    run(&registry, "4\nS1\nMath\nHW1\n7\n");

    assert_eq!(
        instructor.last().as_deref(),
        Some("Notification to Instructor: Assignment submitted by Student S1 in Math: HW1")
    );
}
