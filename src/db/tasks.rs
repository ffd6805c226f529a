//! Task manager: CRUD over the `tasks` table with explicit outcomes.
//!
//! Every mutating operation first checks that the task exists (or does not,
//! for inserts) with a count query, so "already exists" and "does not exist"
//! come back as ordinary [`TaskOutcome`] values instead of constraint
//! violations. The mutation itself is also conditional on the same
//! predicate, which keeps the write correct if the row changed between the
//! check and the statement.
//!
//! ## Usage
//!
//! ```rust
//! use todolist::db::{db::Db, tasks::{TaskManager, TaskOutcome}};
//! use todolist::libs::{formatter::parse_input_date_time, task::Task};
//!
//! let mut manager = TaskManager::new(Db::open_in_memory()?);
//! let due = parse_input_date_time("2025-06-20 10:50")?;
//! let outcome = manager.add_task(&Task::create(1, "Task 1", due, None))?;
//! assert!(matches!(outcome, TaskOutcome::Added { .. }));
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::error::{StoreError, StoreResult};
use super::executor::QueryExecutor;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use rusqlite::params;
use std::fmt::{Display, Formatter};

const COUNT_TASK_BY_ID: &str = "SELECT COUNT(*) FROM tasks WHERE task_id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
const COUNT_TASKS_BY_COMPLETION: &str = "SELECT COUNT(*) FROM tasks WHERE is_complete = ?1";
const INSERT_TASK: &str = "INSERT INTO tasks (task_id, title, created_at, due_date, is_complete, note)
    SELECT ?1, ?2, ?3, ?4, ?5, ?6
    WHERE NOT EXISTS (SELECT 1 FROM tasks WHERE task_id = ?1)";
const SELECT_TASK_BY_ID: &str = "SELECT task_id, title, created_at, due_date, is_complete, note FROM tasks WHERE task_id = ?1";
const SELECT_TASKS: &str = "SELECT task_id, title, created_at, due_date, is_complete, note FROM tasks ORDER BY task_id";
const SELECT_TASKS_BY_COMPLETION: &str =
    "SELECT task_id, title, created_at, due_date, is_complete, note FROM tasks WHERE is_complete = ?1 ORDER BY task_id";
const UPDATE_TASK: &str =
    "UPDATE tasks SET title = ?1, created_at = ?2, due_date = ?3, is_complete = MAX(is_complete, ?4), note = ?5 WHERE task_id = ?6";
const SET_COMPLETE: &str = "UPDATE tasks SET is_complete = 1 WHERE task_id = ?1 AND is_complete = 0";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE task_id = ?1";

const SEPARATOR_WIDTH: usize = 40;

/// Result of a mutating task operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Added { title: String },
    AlreadyExists { title: String },
    NotFound { task_id: i64 },
    Deleted { title: String },
    Updated { title: String },
    MarkedComplete { title: String },
    AlreadyComplete { title: String },
}

impl TaskOutcome {
    /// True when the operation changed the store.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            TaskOutcome::Added { .. } | TaskOutcome::Deleted { .. } | TaskOutcome::Updated { .. } | TaskOutcome::MarkedComplete { .. }
        )
    }

    pub fn message(&self) -> Message {
        match self {
            TaskOutcome::Added { title } => Message::TaskAdded(title.clone()),
            TaskOutcome::AlreadyExists { title } => Message::TaskAlreadyExists(title.clone()),
            TaskOutcome::NotFound { task_id } => Message::TaskNotFoundWithId(*task_id),
            TaskOutcome::Deleted { title } => Message::TaskDeleted(title.clone()),
            TaskOutcome::Updated { title } => Message::TaskUpdated(title.clone()),
            TaskOutcome::MarkedComplete { title } => Message::TaskMarkedComplete(title.clone()),
            TaskOutcome::AlreadyComplete { title } => Message::TaskAlreadyComplete(title.clone()),
        }
    }
}

impl Display for TaskOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Task counts shown in the console summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: i64,
    pub completed: i64,
    pub incomplete: i64,
}

pub struct TaskManager<E: QueryExecutor> {
    db: E,
}

impl<E: QueryExecutor> TaskManager<E> {
    pub fn new(db: E) -> Self {
        TaskManager { db }
    }

    #[cfg(test)]
    pub(crate) fn executor(&self) -> &E {
        &self.db
    }

    /// True iff a row with this id exists.
    pub fn is_task(&self, task_id: i64) -> StoreResult<bool> {
        let count = self.db.fetch_scalar(COUNT_TASK_BY_ID, params![task_id])?;
        Ok(count.unwrap_or(0) > 0)
    }

    pub fn add_task(&mut self, task: &Task) -> StoreResult<TaskOutcome> {
        let exists = TaskOutcome::AlreadyExists {
            title: task.title.clone(),
        };
        if self.is_task(task.task_id)? {
            return Ok(exists);
        }

        let inserted = self.db.execute(
            INSERT_TASK,
            params![task.task_id, task.title, task.created_at, task.due_date, task.is_complete, task.note],
        )?;
        if inserted == 0 {
            return Ok(exists);
        }

        Ok(TaskOutcome::Added {
            title: task.title.clone(),
        })
    }

    pub fn delete_task(&mut self, task_id: i64) -> StoreResult<TaskOutcome> {
        if !self.is_task(task_id)? {
            return Ok(TaskOutcome::NotFound { task_id });
        }

        // Title is only needed for the outcome; fall back to the id.
        let title = self
            .db
            .fetch_one(SELECT_TASK_BY_ID, params![task_id])?
            .map(|task| task.title)
            .unwrap_or_else(|| task_id.to_string());
        let deleted = self.db.execute(DELETE_TASK, params![task_id])?;
        if deleted == 0 {
            return Ok(TaskOutcome::NotFound { task_id });
        }

        Ok(TaskOutcome::Deleted { title })
    }

    /// Overwrites every mutable field of the row keyed by `task.task_id`.
    /// `is_complete` is only ever raised; a completed row stays completed.
    pub fn update_task(&mut self, task: &Task) -> StoreResult<TaskOutcome> {
        let missing = TaskOutcome::NotFound { task_id: task.task_id };
        if !self.is_task(task.task_id)? {
            return Ok(missing);
        }

        let updated = self.db.execute(
            UPDATE_TASK,
            params![task.title, task.created_at, task.due_date, task.is_complete, task.note, task.task_id],
        )?;
        if updated == 0 {
            return Ok(missing);
        }

        Ok(TaskOutcome::Updated {
            title: task.title.clone(),
        })
    }

    pub fn set_complete(&mut self, task_id: i64) -> StoreResult<TaskOutcome> {
        if !self.is_task(task_id)? {
            return Ok(TaskOutcome::NotFound { task_id });
        }

        let task = match self.db.fetch_one(SELECT_TASK_BY_ID, params![task_id])? {
            Some(task) => task,
            None => return Ok(TaskOutcome::NotFound { task_id }),
        };
        if task.is_complete {
            return Ok(TaskOutcome::AlreadyComplete { title: task.title });
        }

        let updated = self.db.execute(SET_COMPLETE, params![task_id])?;
        if updated == 0 {
            return Ok(TaskOutcome::AlreadyComplete { title: task.title });
        }

        Ok(TaskOutcome::MarkedComplete { title: task.title })
    }

    pub fn count_tasks(&self, filter: TaskFilter) -> StoreResult<i64> {
        let count = match filter.completion() {
            None => self.db.fetch_scalar(COUNT_TASKS, &[])?,
            Some(is_complete) => self.db.fetch_scalar(COUNT_TASKS_BY_COMPLETION, params![is_complete])?,
        };

        count.ok_or(StoreError::NoResult)
    }

    pub fn count_total_tasks(&self) -> StoreResult<i64> {
        self.count_tasks(TaskFilter::All)
    }

    pub fn count_completed_task(&self) -> StoreResult<i64> {
        self.count_tasks(TaskFilter::Completed)
    }

    pub fn count_incompleted_tasks(&self) -> StoreResult<i64> {
        self.count_tasks(TaskFilter::Incomplete)
    }

    pub fn summary(&self) -> StoreResult<TaskSummary> {
        Ok(TaskSummary {
            total: self.count_total_tasks()?,
            completed: self.count_completed_task()?,
            incomplete: self.count_incompleted_tasks()?,
        })
    }

    pub fn fetch(&self, filter: TaskFilter) -> StoreResult<Vec<Task>> {
        match filter.completion() {
            None => self.db.fetch_all(SELECT_TASKS, &[]),
            Some(is_complete) => self.db.fetch_all(SELECT_TASKS_BY_COMPLETION, params![is_complete]),
        }
    }

    pub fn show_all_tasks(&self) -> StoreResult<Vec<Task>> {
        self.fetch(TaskFilter::All)
    }

    pub fn show_completed_task(&self) -> StoreResult<Vec<Task>> {
        self.fetch(TaskFilter::Completed)
    }

    pub fn show_uncompleted_task(&self) -> StoreResult<Vec<Task>> {
        self.fetch(TaskFilter::Incomplete)
    }

    /// Existence check followed by a fetch; `None` when the id is unknown.
    pub fn get_task(&self, task_id: i64) -> StoreResult<Option<Task>> {
        if !self.is_task(task_id)? {
            return Ok(None);
        }
        self.db.fetch_one(SELECT_TASK_BY_ID, params![task_id])
    }

    /// Renders each task between separator lines.
    pub fn display_tasks(tasks: &[Task]) -> String {
        let separator = "*".repeat(SEPARATOR_WIDTH);
        tasks
            .iter()
            .map(|task| format!("{separator}\n{task}\n{separator}\n"))
            .collect()
    }

    pub fn close_connection(self) -> StoreResult<()> {
        self.db.close()
    }
}
