//! Database layer for todolist.
//!
//! ## Usage
//!
//! ```rust
//! use todolist::db::{db::Db, tasks::TaskManager};
//!
//! let manager = TaskManager::new(Db::open_in_memory()?);
//! assert_eq!(manager.count_total_tasks()?, 0);
//! manager.close_connection()?;
//! # Ok::<(), todolist::db::error::StoreError>(())
//! ```

/// SQLite connection and the `QueryExecutor` implementation over it.
pub mod db;

/// Errors crossing the executor boundary.
pub mod error;

/// The executor contract the task manager is written against.
pub mod executor;

/// Task CRUD with existence checks and typed outcomes.
pub mod tasks;
