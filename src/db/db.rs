use super::error::{StoreError, StoreResult};
use super::executor::QueryExecutor;
use crate::libs::config::Config;
use crate::libs::task::Task;
use rusqlite::{Connection, OptionalExtension, Row, ToSql};
use std::fs;
use std::path::Path;
use tracing::{debug, error};

pub const DB_FILE_NAME: &str = "todolist.db";

/// Path value that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    task_id INTEGER PRIMARY KEY,
    title TEXT,
    created_at TIMESTAMP,
    due_date TIMESTAMP,
    is_complete BOOLEAN NOT NULL DEFAULT 0,
    note TEXT
);";

/// SQLite-backed query executor. Owns the connection; dropping it releases
/// the connection on every exit path.
pub struct Db {
    conn: Connection,
}

impl Db {
    /// Opens (creating if needed) the database file and ensures the schema.
    pub fn open(path: &Path) -> StoreResult<Db> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Storage {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path).map_err(|source| {
            error!(path = %path.display(), error = %source, "database connection failed");
            StoreError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> StoreResult<Db> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: IN_MEMORY.into(),
            source,
        })?;

        Self::with_connection(conn)
    }

    /// Opens the store the configuration points at.
    pub fn from_config(config: &Config) -> StoreResult<Db> {
        let path = config.database_path();
        if path.as_os_str() == IN_MEMORY {
            Self::open_in_memory()
        } else {
            Self::open(&path)
        }
    }

    fn with_connection(conn: Connection) -> StoreResult<Db> {
        let db = Db { conn };
        db.create_schema()?;
        debug!("database connection established");

        Ok(db)
    }

    fn map_task(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            task_id: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            created_at: row.get(2)?,
            due_date: row.get(3)?,
            is_complete: row.get(4)?,
            note: row.get(5)?,
        })
    }

    fn query_tasks(&self, query: &str, params: &[&dyn ToSql]) -> rusqlite::Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(query)?;
        let task_iter = stmt.query_map(params, Self::map_task)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    fn logged<T>(query: &str, result: rusqlite::Result<T>) -> StoreResult<T> {
        result.map_err(|e| {
            error!(query, error = %e, "error executing query");
            StoreError::Query(e)
        })
    }
}

impl QueryExecutor for Db {
    fn fetch_all(&self, query: &str, params: &[&dyn ToSql]) -> StoreResult<Vec<Task>> {
        debug!(query, "fetch all");
        Self::logged(query, self.query_tasks(query, params))
    }

    fn fetch_one(&self, query: &str, params: &[&dyn ToSql]) -> StoreResult<Option<Task>> {
        debug!(query, "fetch one");
        Self::logged(query, self.conn.query_row(query, params, Self::map_task).optional())
    }

    fn fetch_scalar(&self, query: &str, params: &[&dyn ToSql]) -> StoreResult<Option<i64>> {
        debug!(query, "fetch scalar");
        Self::logged(query, self.conn.query_row(query, params, |row| row.get(0)).optional())
    }

    fn execute(&self, query: &str, params: &[&dyn ToSql]) -> StoreResult<usize> {
        debug!(query, "execute");
        Self::logged(query, self.conn.execute(query, params))
    }

    fn create_schema(&self) -> StoreResult<()> {
        Self::logged(SCHEMA_TASKS, self.conn.execute(SCHEMA_TASKS, [])).map(|_| ())
    }

    fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| {
            error!(error = %e, "error closing database connection");
            StoreError::Close(e)
        })?;
        debug!("database connection closed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rusqlite::params;

    #[test]
    fn test_schema_is_idempotent() {
        let db = Db::open_in_memory().unwrap();
        db.create_schema().unwrap();
        let count = db.fetch_scalar("SELECT COUNT(*) FROM tasks", &[]).unwrap();
        assert_eq!(count, Some(0));
    }

    #[test]
    fn test_row_round_trip() {
        let db = Db::open_in_memory().unwrap();
        let created = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap().and_hms_opt(10, 50, 0).unwrap();
        let affected = db
            .execute(
                "INSERT INTO tasks (task_id, title, created_at, due_date, is_complete, note) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![1, "Task 1", created, due, false, Option::<String>::None],
            )
            .unwrap();
        assert_eq!(affected, 1);

        let task = db
            .fetch_one(
                "SELECT task_id, title, created_at, due_date, is_complete, note FROM tasks WHERE task_id = ?1",
                params![1],
            )
            .unwrap()
            .unwrap();
        assert_eq!(task, Task::new(1, "Task 1", created, due, false, None));
    }

    #[test]
    fn test_malformed_query_is_an_error() {
        let db = Db::open_in_memory().unwrap();
        let result = db.fetch_all("SELECT * FROM missing_table", &[]);
        assert!(matches!(result, Err(StoreError::Query(_))));
    }

    #[test]
    fn test_fetch_one_without_rows() {
        let db = Db::open_in_memory().unwrap();
        let task = db
            .fetch_one(
                "SELECT task_id, title, created_at, due_date, is_complete, note FROM tasks WHERE task_id = ?1",
                params![42],
            )
            .unwrap();
        assert!(task.is_none());
    }

    #[test]
    fn test_close_releases_connection() {
        let db = Db::open_in_memory().unwrap();
        assert!(db.close().is_ok());
    }
}
