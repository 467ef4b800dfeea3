// tests/integration/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;
use taskgrid::config::{ensure_acyclic_from, load_and_validate};
use taskgrid::errors::TaskgridError;

fn task_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_reachable_cycle_returns_structured_error() {
    let file = task_file(
        r#"
[layout]
root = "R"

[[task]]
id = "R"
requires = ["A"]

[[task]]
id = "A"
requires = ["B"]

[[task]]
id = "B"
requires = ["A"]
"#,
    );

    let tasks = load_and_validate(file.path()).unwrap();

    match ensure_acyclic_from(&tasks, "R") {
        Err(TaskgridError::CyclicDependency(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("'R'"));
        }
        Err(e) => panic!("Expected CyclicDependency error, got: {:?}", e),
        Ok(()) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unreachable_cycle_is_accepted() {
    let file = task_file(
        r#"
[layout]
root = "R"

[[task]]
id = "R"

[[task]]
id = "X"
requires = ["Y"]

[[task]]
id = "Y"
requires = ["X"]
"#,
    );

    let tasks = load_and_validate(file.path()).unwrap();
    assert_eq!(tasks.task.len(), 3);
    assert!(ensure_acyclic_from(&tasks, "R").is_ok());
}

#[test]
fn test_duplicate_id_returns_config_error() {
    let file = task_file(
        r#"
[[task]]
id = "A"

[[task]]
id = "A"
closed = true
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskgridError::ConfigError(msg)) => {
            assert_eq!(msg, "duplicate task id 'A'");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_id_returns_config_error() {
    let file = task_file(
        r#"
[[task]]
id = "A"

[[task]]
id = "  "
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskgridError::ConfigError(msg)) => assert!(msg.contains("task #2")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_file_without_tasks_returns_config_error() {
    let file = task_file(
        r#"
[layout]
root = "R"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskgridError::ConfigError(msg)) => assert!(msg.contains("[[task]]")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_zero_columns_in_layout_returns_config_error() {
    let file = task_file(
        r#"
[layout]
columns = 0

[[task]]
id = "R"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskgridError::ConfigError(_))
    ));
}

#[test]
fn test_unknown_format_returns_toml_error() {
    let file = task_file(
        r#"
[layout]
format = "svg"

[[task]]
id = "R"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskgridError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("Roadmap.toml"));
    assert!(matches!(result, Err(TaskgridError::IoError(_))));
}

#[test]
fn test_dangling_requires_are_accepted() {
    let file = task_file(
        r#"
[layout]
root = "R"

[[task]]
id = "R"
requires = ["nowhere"]
"#,
    );

    let tasks = load_and_validate(file.path()).unwrap();
    assert_eq!(tasks.get("R").unwrap().requires, vec!["nowhere".to_string()]);
}
