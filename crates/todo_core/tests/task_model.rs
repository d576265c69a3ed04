use todo_core::{display_tasks, StatusFilter, Task};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("hello", "2024-01-01");

    assert_eq!(task.id.len(), 32);
    assert_eq!(task.task, "hello");
    assert_eq!(task.due_date, "2024-01-01");
    assert!(!task.completed);
    assert!(task.is_pending());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::with_id("k3v9x1", "Call mom", "2024-05-01");
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "k3v9x1",
            "task": "Call mom",
            "dueDate": "2024-05-01",
            "completed": true
        })
    );

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn status_filter_matches_by_completion() {
    let mut done = Task::with_id("a", "done", "");
    done.toggle();
    let open = Task::with_id("b", "open", "");

    assert!(StatusFilter::All.matches(&done));
    assert!(StatusFilter::All.matches(&open));
    assert!(StatusFilter::Completed.matches(&done));
    assert!(!StatusFilter::Completed.matches(&open));
    assert!(StatusFilter::Pending.matches(&open));
    assert_eq!(StatusFilter::from("PENDING").as_str(), "pending");
}

#[test]
fn display_tasks_preserves_order_and_labels() {
    let mut done = Task::with_id("a", "done", "2024-01-01");
    done.toggle();
    let rows = display_tasks(&[done, Task::with_id("b", "open", "")]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "a");
    assert_eq!(rows[0].status, "Completed");
    assert_eq!(rows[1].due_date, "No due date");
    assert_eq!(rows[1].status, "Pending");
}
