//! Query executor contract.
//!
//! The task manager talks to its store only through this trait. `Db` is the
//! SQLite implementation; tests substitute a recording executor to check
//! which statements a manager operation issues.

use super::error::StoreResult;
use crate::libs::task::Task;
use rusqlite::ToSql;

/// Executes parameterized statements against a relational store.
///
/// Implementations log failures at the boundary and return them as
/// `StoreError`; they never swallow an error into an empty result.
pub trait QueryExecutor {
    /// Runs a query and maps every row to a `Task`.
    fn fetch_all(&self, query: &str, params: &[&dyn ToSql]) -> StoreResult<Vec<Task>>;

    /// Runs a query and maps the first row, if any, to a `Task`.
    fn fetch_one(&self, query: &str, params: &[&dyn ToSql]) -> StoreResult<Option<Task>>;

    /// Runs a query and returns the first column of the first row.
    fn fetch_scalar(&self, query: &str, params: &[&dyn ToSql]) -> StoreResult<Option<i64>>;

    /// Runs a statement and returns the number of affected rows.
    fn execute(&self, query: &str, params: &[&dyn ToSql]) -> StoreResult<usize>;

    /// Creates the `tasks` table if it does not exist.
    fn create_schema(&self) -> StoreResult<()>;

    /// Releases the underlying connection.
    fn close(self) -> StoreResult<()>
    where
        Self: Sized;
}
