use todo_core::db::{open_db, open_db_in_memory};
use todo_core::{KeyValueStore, SqliteKeyValueStore, StatusFilter, TaskStore};

#[test]
fn sqlite_store_get_set_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    assert!(store.get("todos").unwrap().is_none());

    store.set("todos", "[]").unwrap();
    store.set("todos", "[1]").unwrap();
    store.set("theme", "dark").unwrap();

    assert_eq!(store.get("todos").unwrap().as_deref(), Some("[1]"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn task_list_survives_database_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let (kept_id, done_id) = {
        let conn = open_db(&path).unwrap();
        let mut tasks = TaskStore::load(SqliteKeyValueStore::new(&conn)).unwrap();
        let kept = tasks.add_todo("Water the plants today", "2024-06-01").unwrap();
        let done = tasks.add_todo("Pay rent", "").unwrap();
        tasks.toggle_status(&done.id).unwrap();
        (kept.id, done.id)
    };

    let conn = open_db(&path).unwrap();
    let tasks = TaskStore::load(SqliteKeyValueStore::new(&conn)).unwrap();

    let all = tasks.filter_todos(StatusFilter::All);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, kept_id);
    assert_eq!(all[0].task, "Water the plan...");
    assert_eq!(all[0].due_date, "2024-06-01");
    assert_eq!(all[1].id, done_id);
    assert_eq!(all[1].due_date, "No due date");

    let completed = tasks.filter_todos(StatusFilter::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done_id);
}

#[test]
fn corrupt_sqlite_payload_loads_as_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKeyValueStore::new(&conn);
    storage.set("todos", "definitely not json").unwrap();

    let tasks = TaskStore::load(&storage).unwrap();
    assert!(tasks.is_empty());
    assert_eq!(
        storage.get("todos").unwrap().as_deref(),
        Some("definitely not json")
    );
}

#[test]
fn clear_all_persists_empty_array() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKeyValueStore::new(&conn);
    let mut tasks = TaskStore::load(&storage).unwrap();
    tasks.add_todo("one", "").unwrap();

    tasks.clear_all().unwrap();

    assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[]"));
}
