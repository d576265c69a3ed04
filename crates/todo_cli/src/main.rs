//! Command-line view over a SQLite-backed task store.
//!
//! # Responsibility
//! - Drive `todo_core` task operations against a local database file.
//! - Own input validation and user-facing messages, which core leaves to
//!   callers.
//!
//! Usage: `todo_cli <db-path> <command> [args]`

use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use todo_core::db::open_db;
use todo_core::{
    default_log_level, display_tasks, init_logging, SqliteKeyValueStore, StatusFilter, TaskStore,
};

const LOG_DIR_NAME: &str = "logs";

const USAGE: &str = "usage: todo_cli <db-path> <command> [args]

commands:
  list [all|pending|completed]
  add <task> [due-date]
  edit <id> <text>
  toggle <id>
  delete <id>
  clear";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List(StatusFilter),
    Add { task: String, due_date: String },
    Edit { id: String, text: String },
    Toggle(String),
    Delete(String),
    Clear,
}

fn main() -> ExitCode {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let Some((db_path, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let command = match parse_command(rest) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(message) = start_logging(db_path) {
        eprintln!("warning: logging disabled: {message}");
    }

    match run(db_path, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_run module=cli status=error error={message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Writes logs to `logs/` next to the database file.
fn start_logging(db_path: &str) -> Result<(), String> {
    let db_path = std::path::absolute(db_path).map_err(|err| err.to_string())?;
    let log_dir = db_path
        .parent()
        .map_or_else(|| PathBuf::from(LOG_DIR_NAME), |dir| dir.join(LOG_DIR_NAME));
    let log_dir_str = log_dir
        .to_str()
        .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", log_dir.display()))?;
    init_logging(default_log_level(), log_dir_str)
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    let arg = |index: usize, name: &str| {
        args.get(index)
            .cloned()
            .ok_or_else(|| format!("missing argument <{name}>"))
    };

    match args.first().map(String::as_str) {
        None | Some("list") => Ok(Command::List(
            args.get(1)
                .map(|value| StatusFilter::parse(value))
                .unwrap_or_default(),
        )),
        Some("add") => {
            let task = arg(1, "task")?;
            if task.trim().is_empty() {
                return Err("please enter a task".to_string());
            }
            Ok(Command::Add {
                task,
                due_date: args.get(2).cloned().unwrap_or_default(),
            })
        }
        Some("edit") => Ok(Command::Edit {
            id: arg(1, "id")?,
            text: arg(2, "text")?,
        }),
        Some("toggle") => Ok(Command::Toggle(arg(1, "id")?)),
        Some("delete") => Ok(Command::Delete(arg(1, "id")?)),
        Some("clear") => Ok(Command::Clear),
        Some(other) => Err(format!("unknown command `{other}`")),
    }
}

fn run(db_path: &str, command: Command) -> Result<(), String> {
    let conn = open_db(db_path).map_err(|err| err.to_string())?;
    let mut store =
        TaskStore::load(SqliteKeyValueStore::new(&conn)).map_err(|err| err.to_string())?;

    match command {
        Command::List(filter) => print_tasks(&store, filter),
        Command::Add { task, due_date } => {
            let todo = store
                .add_todo(&task, &due_date)
                .map_err(|err| err.to_string())?;
            println!("Task added successfully ({})", todo.id);
        }
        Command::Edit { id, text } => {
            match store.edit_todo(&id, &text).map_err(|err| err.to_string())? {
                Some(_) => println!("Todo updated successfully"),
                None => println!("No task found"),
            }
        }
        Command::Toggle(id) => match store.toggle_status(&id).map_err(|err| err.to_string())? {
            Some(_) => print_tasks(&store, StatusFilter::All),
            None => println!("No task found"),
        },
        Command::Delete(id) => {
            store.delete_todo(&id).map_err(|err| err.to_string())?;
            println!("Todo deleted successfully");
        }
        Command::Clear => {
            store.clear_all().map_err(|err| err.to_string())?;
            println!("All todos cleared successfully");
        }
    }

    Ok(())
}

fn print_tasks(store: &TaskStore<SqliteKeyValueStore<'_>>, filter: StatusFilter) {
    let rows = display_tasks(&store.filter_todos(filter));
    if rows.is_empty() {
        println!("No task found");
        return;
    }

    for row in rows {
        println!(
            "{:<32}  {:<17}  {:<11}  {}",
            row.id, row.task, row.due_date, row.status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use todo_core::StatusFilter;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn add_rejects_blank_task_text() {
        assert_eq!(
            parse_command(&args(&["add", ""])).unwrap_err(),
            "please enter a task"
        );
        assert!(parse_command(&args(&["add", "   ", "2024-05-01"])).is_err());
    }

    #[test]
    fn add_without_arguments_reports_missing_task() {
        assert_eq!(
            parse_command(&args(&["add"])).unwrap_err(),
            "missing argument <task>"
        );
    }

    #[test]
    fn add_defaults_due_date_to_empty() {
        assert_eq!(
            parse_command(&args(&["add", "Buy milk"])).unwrap(),
            Command::Add {
                task: "Buy milk".to_string(),
                due_date: String::new(),
            }
        );
    }

    #[test]
    fn list_falls_back_to_all_for_unknown_filter() {
        assert_eq!(
            parse_command(&args(&["list", "bogus"])).unwrap(),
            Command::List(StatusFilter::All)
        );
        assert_eq!(
            parse_command(&args(&["list", "pending"])).unwrap(),
            Command::List(StatusFilter::Pending)
        );
        assert_eq!(
            parse_command(&[]).unwrap(),
            Command::List(StatusFilter::All)
        );
    }

    #[test]
    fn edit_requires_id_and_text() {
        assert_eq!(
            parse_command(&args(&["edit", "abc"])).unwrap_err(),
            "missing argument <text>"
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(parse_command(&args(&["archive"]))
            .unwrap_err()
            .contains("unknown command `archive`"));
    }
}
