//! Task entity and row-set filters.
//!
//! A `Task` is a plain record for one todo item. It carries no validation of
//! its own: input parsing happens in the console layer and uniqueness is
//! enforced by the task manager against the store.

use super::formatter::{format_date_time, now_local};
use chrono::NaiveDateTime;
use std::fmt::{Display, Formatter, Result};

/// One todo item as stored in the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Caller-supplied primary key.
    pub task_id: i64,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub is_complete: bool,
    pub note: Option<String>,
}

impl Task {
    pub fn new(
        task_id: i64,
        title: &str,
        created_at: NaiveDateTime,
        due_date: NaiveDateTime,
        is_complete: bool,
        note: Option<&str>,
    ) -> Self {
        Task {
            task_id,
            title: title.to_string(),
            created_at,
            due_date,
            is_complete,
            note: note.map(str::to_string),
        }
    }

    /// Builds an incomplete task stamped with the current local time.
    pub fn create(task_id: i64, title: &str, due_date: NaiveDateTime, note: Option<&str>) -> Self {
        Self::new(task_id, title, now_local(), due_date, false, note)
    }

    pub fn task_id(&self) -> i64 {
        self.task_id
    }

    pub fn set_task_id(&mut self, task_id: i64) {
        self.task_id = task_id;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: NaiveDateTime) {
        self.created_at = created_at;
    }

    pub fn due_date(&self) -> NaiveDateTime {
        self.due_date
    }

    pub fn set_due_date(&mut self, due_date: NaiveDateTime) {
        self.due_date = due_date;
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn set_is_complete(&mut self, is_complete: bool) {
        self.is_complete = is_complete;
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn set_note(&mut self, note: Option<&str>) {
        self.note = note.map(str::to_string);
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "ID: {}", self.task_id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Created At: {}", format_date_time(&self.created_at))?;
        writeln!(f, "Due Date: {}", format_date_time(&self.due_date))?;
        writeln!(f, "Is Complete: {}", self.is_complete)?;
        write!(f, "Note: {}", self.note.as_deref().unwrap_or("None"))
    }
}

/// Selects which rows a listing or count covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Completed,
    Incomplete,
}

impl TaskFilter {
    /// Completion flag to bind for filtered queries, `None` for all rows.
    pub fn completion(&self) -> Option<bool> {
        match self {
            TaskFilter::All => None,
            TaskFilter::Completed => Some(true),
            TaskFilter::Incomplete => Some(false),
        }
    }
}
