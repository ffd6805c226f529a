//! Display implementation for todolist messages.
//!
//! All user-facing text lives here, so the console, the task manager
//! outcomes and the logging macros render the same wording.

use super::types::Message;
use crate::libs::formatter::INPUT_FORMAT;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("{} inserted to database", title),
            Message::TaskAlreadyExists(title) => format!("{} already exists", title),
            Message::TaskNotFoundWithId(id) => format!("Task ID {} does not exist", id),
            Message::TaskDeleted(title) => format!("{} deleted successfully", title),
            Message::TaskUpdated(title) => format!("{} updated successfully", title),
            Message::TaskMarkedComplete(title) => format!("{} marked complete", title),
            Message::TaskAlreadyComplete(title) => format!("{} is already complete", title),
            Message::TasksHeader => "All tasks:".to_string(),
            Message::TasksCompletedHeader => "Completed tasks:".to_string(),
            Message::TasksIncompleteHeader => "Incomplete tasks:".to_string(),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TasksSummaryHeader => "Summary:".to_string(),
            Message::SummaryTotal => "TOTAL".to_string(),
            Message::SummaryCompleted => "COMPLETED".to_string(),
            Message::SummaryIncomplete => "INCOMPLETE".to_string(),

            // === MENU MESSAGES ===
            Message::MenuTitle => "Todo list - choose an option".to_string(),
            Message::MenuShowAll => "1. Show all tasks".to_string(),
            Message::MenuShowCompleted => "2. Show completed tasks".to_string(),
            Message::MenuShowIncomplete => "3. Show incomplete tasks".to_string(),
            Message::MenuAddTask => "4. Add task".to_string(),
            Message::MenuDeleteTask => "5. Delete task".to_string(),
            Message::MenuUpdateTask => "6. Update task".to_string(),
            Message::MenuMarkComplete => "7. Mark task complete".to_string(),
            Message::MenuExit => "8. Exit".to_string(),
            Message::Goodbye => "Bye!".to_string(),

            // === PROMPTS ===
            Message::PromptTaskId => "Task ID".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD HH:MM)".to_string(),
            Message::PromptTaskNote => "Note (optional, '-' for none)".to_string(),
            Message::PromptTaskComplete => "Is the task complete?".to_string(),

            // === VALIDATION MESSAGES ===
            Message::InvalidTaskId => "Task ID must be a positive integer".to_string(),
            Message::InvalidDateTime => format!("Invalid date/time, expected format {}", INPUT_FORMAT),
            Message::EmptyTitle => "Title must not be empty".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseConnected(path) => format!("Database connection established: {}", path),
            Message::DatabaseConnectionFailed(error) => format!("Database connection failed: {}", error),
            Message::DatabaseClosed => "DB connection closed".to_string(),
            Message::DatabaseCloseFailed(error) => format!("Failed to close database connection: {}", error),
            Message::StoreOperationFailed(error) => format!("Database operation failed: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigEnvOverride(var) => format!("Database path taken from {}", var),
        };

        write!(f, "{}", text)
    }
}
