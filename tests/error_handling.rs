// tests/error_handling.rs

mod common;
use crate::common::board_file;

use tasklink::config::load_and_validate;
use tasklink::errors::TaskLinkError;
use tasklink::types::{Category, Orientation};

#[test]
fn loads_full_board_file() {
    let file = board_file(
        r#"
[board]
id = "alpha"
name = "Project Alpha"

[layout]
orientation = "top-to-bottom"
rank_separation = 48

[[column]]
id = "todo"
title = "To Do"
position = 0

[[column]]
id = "done"
title = "Done"
position = 1

[[task]]
id = "task-1"
column_id = "todo"
title = "Design UI"
icon = "design"
assignee_name = "Sarah"
due_date = "2024-07-01"

[[task]]
id = "task-4"
column_id = "todo"
title = "Backend Setup"
position = 1

[[dependency]]
task_id = "task-1"
depends_on_task_id = "task-4"
"#,
    );

    let board = load_and_validate(file.path()).unwrap();

    assert_eq!(board.board.name, "Project Alpha");
    assert_eq!(board.layout.orientation, Orientation::TopToBottom);
    assert_eq!(board.layout.rank_separation, 48.0);
    assert_eq!(board.rows.tasks[0].category, Category::Design);
    assert_eq!(board.rows.tasks[1].category, Category::Planning);
    assert_eq!(board.rows.dependencies[0].id, "task-1->task-4");
}

#[test]
fn board_without_columns_is_config_error() {
    let file = board_file(
        r#"
[board]
name = "Empty"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskLinkError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        other => panic!("Expected ConfigError, got: {other:?}"),
    }
}

#[test]
fn task_in_unknown_column_is_config_error() {
    let file = board_file(
        r#"
[[column]]
id = "todo"
title = "To Do"

[[task]]
id = "a"
column_id = "archive"
title = "A"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskLinkError::ConfigError(msg)) => {
            assert!(msg.contains("unknown column"));
            assert!(msg.contains("archive"));
        }
        other => panic!("Expected ConfigError, got: {other:?}"),
    }
}

#[test]
fn duplicate_task_id_is_config_error() {
    let file = board_file(
        r#"
[[column]]
id = "todo"
title = "To Do"

[[task]]
id = "a"
column_id = "todo"
title = "A"

[[task]]
id = "a"
column_id = "todo"
title = "A again"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskLinkError::ConfigError(msg)) if msg.contains("duplicate task id")
    ));
}

#[test]
fn duplicate_dependency_id_is_config_error() {
    let file = board_file(
        r#"
[[column]]
id = "todo"
title = "To Do"

[[task]]
id = "a"
column_id = "todo"
title = "A"

[[task]]
id = "b"
column_id = "todo"
title = "B"

[[dependency]]
id = "e1"
task_id = "a"
depends_on_task_id = "b"

[[dependency]]
id = "e1"
task_id = "b"
depends_on_task_id = "a"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskLinkError::ConfigError(msg)) if msg.contains("duplicate dependency id 'e1'")
    ));
}

#[test]
fn derived_dependency_ids_never_collide() {
    let file = board_file(
        r#"
[[column]]
id = "todo"
title = "To Do"

[[task]]
id = "a"
column_id = "todo"
title = "A"

[[task]]
id = "b"
column_id = "todo"
title = "B"

[[dependency]]
task_id = "a"
depends_on_task_id = "b"

[[dependency]]
id = "a->b"
task_id = "a"
depends_on_task_id = "b"
"#,
    );

    let board = load_and_validate(file.path()).unwrap();
    let ids: Vec<&str> = board.rows.dependencies.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a->b#2", "a->b"]);
}

#[test]
fn zero_sweeps_is_config_error() {
    let file = board_file(
        r#"
[layout]
crossing_sweeps = 0

[[column]]
id = "todo"
title = "To Do"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskLinkError::ConfigError(msg)) if msg.contains("crossing_sweeps")
    ));
}

#[test]
fn dangling_dependency_is_not_an_error() {
    let file = board_file(
        r#"
[[column]]
id = "todo"
title = "To Do"

[[task]]
id = "a"
column_id = "todo"
title = "A"

[[dependency]]
id = "e1"
task_id = "a"
depends_on_task_id = "deleted-task"
"#,
    );

    let board = load_and_validate(file.path()).unwrap();
    assert_eq!(board.rows.dependencies.len(), 1);
}

#[test]
fn malformed_toml_is_toml_error() {
    let file = board_file("[[column]\nid = ");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskLinkError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_and_validate(dir.path().join("missing.toml")),
        Err(TaskLinkError::IoError(_))
    ));
}
