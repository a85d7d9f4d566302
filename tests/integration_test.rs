// Integration tests for the menu session

use faultlab::config::{Settings, RETRY_PROMPT};
use faultlab::console::{Console, ScriptedConsole};
use faultlab::menu::{Session, SessionEnd};
use faultlab::value::registry::TypeRegistry;
use faultlab::value::Value;
use std::io::Cursor;

/// Run a whole session over `script` and return how it ended plus its transcript
fn run_session(script: &str) -> (SessionEnd, String) {
    let console = ScriptedConsole::scripted(script);
    let mut session = Session::new(console, Settings::default());
    let end = session.run().expect("Session failed");
    (end, session.into_console().transcript())
}

#[test]
fn test_exit_runs_no_scenario() {
    let (end, transcript) = run_session("0\n");

    assert_eq!(end, SessionEnd::Exit);
    assert!(transcript.contains("=== Fault Handling Tester ==="));
    assert!(transcript.contains("0. Exit"));
    assert!(transcript.ends_with("Exiting...\n"));
    assert!(!transcript.contains("Handling "));
}

#[test]
fn test_menu_lists_all_entries() {
    let (_, transcript) = run_session("0\n");

    for n in 1..=11 {
        assert!(
            transcript.contains(&format!("\n{}. ", n)),
            "menu is missing entry {}",
            n
        );
    }
}

#[test]
fn test_invalid_choice_reprompts() {
    let (end, transcript) = run_session("12\n-3\n0\n");

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(transcript.matches("Invalid choice! Try again.").count(), 2);
    // Menu shown once per iteration: two invalid choices plus the exit
    assert_eq!(transcript.matches("=== Fault Handling Tester ===").count(), 3);
    assert!(!transcript.contains("Handling "));
}

#[test]
fn test_non_integer_choice_retries_without_invalid_choice() {
    let (end, transcript) = run_session("abc\n1.5\n\n0\n");

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(transcript.matches(RETRY_PROMPT).count(), 3);
    assert!(!transcript.contains("Invalid choice!"));
    // Retries stay inside one menu iteration
    assert_eq!(transcript.matches("=== Fault Handling Tester ===").count(), 1);
    assert_eq!(transcript.matches("Enter your choice: ").count(), 4);
}

#[test]
fn test_choice_accepts_surrounding_whitespace() {
    let (end, _) = run_session("  0  \n");
    assert_eq!(end, SessionEnd::Exit);
}

#[test]
fn test_end_of_input_ends_session() {
    let (end, transcript) = run_session("");
    assert_eq!(end, SessionEnd::InputClosed);
    assert!(transcript.contains("Enter your choice: "));
}

#[test]
fn test_end_of_input_inside_scenario_ends_session() {
    // Divide asks for two numbers but only one arrives
    let (end, transcript) = run_session("6\n10\n");

    assert_eq!(end, SessionEnd::InputClosed);
    assert!(transcript.contains("Handling DivisionError"));
    assert!(!transcript.contains("occurred"));
}

#[test]
fn test_session_returns_to_menu_after_each_scenario() {
    let script = "6\n10\n0\n6\n10\n2\n11\nabc\n7\n9\n0\n";
    let (end, transcript) = run_session(script);

    println!("Session transcript:\n{}", transcript);

    assert_eq!(end, SessionEnd::Exit);
    assert!(transcript.contains("DivisionError occurred: attempt to divide by zero"));
    assert!(transcript.contains("Result: 5"));
    assert!(transcript.contains("NumberFormat occurred: "));
    assert!(transcript.contains("NullReference occurred: "));
    assert!(transcript.contains("InvalidCast occurred: "));
    // Five scenarios plus the exit: six menus
    assert_eq!(transcript.matches("=== Fault Handling Tester ===").count(), 6);
}

#[test]
fn test_array_limit_comes_from_settings() {
    let console = ScriptedConsole::scripted("8\n100\n0\n");
    let settings = Settings::default().with_max_array_len(10);
    let mut session = Session::new(console, settings);
    session.run().expect("Session failed");

    let transcript = session.console().transcript();
    assert!(transcript.contains("InvalidArgument occurred: array size 100 is outside 0..=10"));
}

#[test]
fn test_invalid_utf8_choice_is_retried() {
    let console = Console::new(Cursor::new(b"\xff\xfe\n0\n".to_vec()), Vec::<u8>::new());
    let mut session = Session::new(console, Settings::default());
    let end = session.run().expect("Session failed");

    assert_eq!(end, SessionEnd::Exit);
    let transcript = session.console().transcript();
    assert_eq!(transcript.matches(RETRY_PROMPT).count(), 1);
    assert!(!transcript.contains("Invalid choice!"));
    assert!(transcript.ends_with("Exiting...\n"));
}

#[test]
fn test_invalid_utf8_file_name_reaches_scenario() {
    let console = Console::new(Cursor::new(b"2\n\xffmissing\n0\n".to_vec()), Vec::<u8>::new());
    let mut session = Session::new(console, Settings::default());
    let end = session.run().expect("Session failed");

    assert_eq!(end, SessionEnd::Exit);
    let transcript = session.console().transcript();
    assert!(transcript.contains("FileNotFound occurred: \u{fffd}missing"));
}

#[test]
fn test_custom_registry_replaces_builtin_types() {
    let mut registry = TypeRegistry::new();
    registry.register("answer", || Value::Int(42));

    let console = ScriptedConsole::scripted("5\nanswer\n5\nint\n0\n");
    let mut session = Session::new(console, Settings::default()).with_registry(registry);
    session.run().expect("Session failed");

    let transcript = session.console().transcript();
    assert!(transcript.contains("Type loaded successfully: answer -> 42"));
    assert!(transcript.contains("SymbolNotFound occurred: int"));
}
