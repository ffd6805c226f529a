//! Interactive console menu.
//!
//! Presents the numbered menu, collects task fields with re-prompting on
//! invalid input, calls the task manager and renders its outcomes. The
//! manager never prints; everything the user sees is produced here.

use crate::db::error::StoreError;
use crate::db::executor::QueryExecutor;
use crate::db::tasks::{TaskManager, TaskOutcome};
use crate::libs::formatter::{parse_input_date_time, INPUT_FORMAT};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDateTime;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAll,
    ShowCompleted,
    ShowIncomplete,
    AddTask,
    DeleteTask,
    UpdateTask,
    MarkComplete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ShowAll,
        MenuChoice::ShowCompleted,
        MenuChoice::ShowIncomplete,
        MenuChoice::AddTask,
        MenuChoice::DeleteTask,
        MenuChoice::UpdateTask,
        MenuChoice::MarkComplete,
        MenuChoice::Exit,
    ];

    /// Maps a menu number (1-8) to its choice.
    pub fn from_number(number: usize) -> Option<MenuChoice> {
        number.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn label(&self) -> Message {
        match self {
            MenuChoice::ShowAll => Message::MenuShowAll,
            MenuChoice::ShowCompleted => Message::MenuShowCompleted,
            MenuChoice::ShowIncomplete => Message::MenuShowIncomplete,
            MenuChoice::AddTask => Message::MenuAddTask,
            MenuChoice::DeleteTask => Message::MenuDeleteTask,
            MenuChoice::UpdateTask => Message::MenuUpdateTask,
            MenuChoice::MarkComplete => Message::MenuMarkComplete,
            MenuChoice::Exit => Message::MenuExit,
        }
    }
}

/// Parses a task id typed by the user; ids are positive.
pub fn parse_task_id(input: &str) -> Result<i64, String> {
    match input.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Message::InvalidTaskId.to_string()),
    }
}

/// Parses a `YYYY-MM-DD HH:MM` date typed by the user.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, String> {
    parse_input_date_time(input).map_err(|_| Message::InvalidDateTime.to_string())
}

/// Marker that clears a note; an empty answer keeps a pre-filled default.
pub const NO_NOTE: &str = "-";

/// Empty input or [`NO_NOTE`] means "no note".
pub fn parse_note(input: &str) -> Option<String> {
    let note = input.trim();
    (!note.is_empty() && note != NO_NOTE).then(|| note.to_string())
}

/// Runs the menu loop until the user exits, then closes the connection.
///
/// Store failures are reported and the loop continues; prompt failures
/// (e.g. a closed terminal) end the session.
pub fn run<E: QueryExecutor>(mut manager: TaskManager<E>) -> Result<()> {
    loop {
        let choice = select_choice()?;
        if choice == MenuChoice::Exit {
            break;
        }

        if let Err(error) = handle(&mut manager, choice) {
            match error.downcast_ref::<StoreError>() {
                Some(store_error) => msg_error!(Message::StoreOperationFailed(store_error.to_string())),
                None => return Err(error),
            }
        }
    }

    match manager.close_connection() {
        Ok(()) => msg_info!(Message::DatabaseClosed),
        Err(e) => msg_error!(Message::DatabaseCloseFailed(e.to_string())),
    }
    msg_print!(Message::Goodbye);

    Ok(())
}

fn select_choice() -> Result<MenuChoice> {
    let items: Vec<String> = MenuChoice::ALL.iter().map(|choice| choice.label().to_string()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::MenuTitle.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(MenuChoice::from_number(selection + 1).unwrap_or(MenuChoice::Exit))
}

fn handle<E: QueryExecutor>(manager: &mut TaskManager<E>, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::ShowAll => show(manager, TaskFilter::All)?,
        MenuChoice::ShowCompleted => show(manager, TaskFilter::Completed)?,
        MenuChoice::ShowIncomplete => show(manager, TaskFilter::Incomplete)?,
        MenuChoice::AddTask => {
            let task_id = prompt_task_id()?;
            let title = prompt_title(None)?;
            let due_date = prompt_date_time(None)?;
            let note = prompt_note(None)?;
            let task = Task::create(task_id, &title, due_date, note.as_deref());
            report(&manager.add_task(&task)?);
        }
        MenuChoice::DeleteTask => {
            let task_id = prompt_task_id()?;
            report(&manager.delete_task(task_id)?);
        }
        MenuChoice::UpdateTask => {
            let task_id = prompt_task_id()?;
            let mut task = match manager.get_task(task_id)? {
                Some(task) => task,
                None => {
                    report(&TaskOutcome::NotFound { task_id });
                    return Ok(());
                }
            };
            msg_print!(task, true);
            task.set_title(&prompt_title(Some(task.title()))?);
            task.set_due_date(prompt_date_time(Some(task.due_date()))?);
            task.set_note(prompt_note(task.note())?.as_deref());
            if !task.is_complete() {
                task.set_is_complete(prompt_complete()?);
            }
            report(&manager.update_task(&task)?);
        }
        MenuChoice::MarkComplete => {
            let task_id = prompt_task_id()?;
            report(&manager.set_complete(task_id)?);
        }
        MenuChoice::Exit => {}
    }

    Ok(())
}

fn show<E: QueryExecutor>(manager: &TaskManager<E>, filter: TaskFilter) -> Result<()> {
    let tasks = manager.fetch(filter)?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
    } else {
        let header = match filter {
            TaskFilter::All => Message::TasksHeader,
            TaskFilter::Completed => Message::TasksCompletedHeader,
            TaskFilter::Incomplete => Message::TasksIncompleteHeader,
        };
        msg_print!(header);
        msg_print!(TaskManager::<E>::display_tasks(&tasks));
    }

    if filter == TaskFilter::All {
        msg_print!(Message::TasksSummaryHeader);
        View::summary(&manager.summary()?).printstd();
    }

    Ok(())
}

fn report(outcome: &TaskOutcome) {
    match outcome {
        outcome if outcome.is_success() => msg_success!(outcome),
        TaskOutcome::NotFound { .. } => msg_error!(outcome),
        _ => msg_warning!(outcome),
    }
}

fn prompt_task_id() -> Result<i64> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .validate_with(|input: &String| parse_task_id(input).map(|_| ()))
        .interact_text()?;

    Ok(parse_task_id(&input).map_err(anyhow::Error::msg)?)
}

fn prompt_title(current: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err(Message::EmptyTitle.to_string())
            } else {
                Ok(())
            }
        });
    if let Some(current) = current {
        input = input.default(current.to_string());
    }

    Ok(input.interact_text()?.trim().to_string())
}

fn prompt_date_time(current: Option<NaiveDateTime>) -> Result<NaiveDateTime> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .validate_with(|input: &String| parse_date_time(input).map(|_| ()));
    if let Some(current) = current {
        input = input.default(current.format(INPUT_FORMAT).to_string());
    }

    Ok(parse_date_time(&input.interact_text()?).map_err(anyhow::Error::msg)?)
}

fn prompt_note(current: Option<&str>) -> Result<Option<String>> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskNote.to_string())
        .default(current.unwrap_or_default().to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(parse_note(&input))
}

fn prompt_complete() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskComplete.to_string())
        .default(false)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::ShowAll));
        assert_eq!(MenuChoice::from_number(4), Some(MenuChoice::AddTask));
        assert_eq!(MenuChoice::from_number(8), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(9), None);
    }

    #[test]
    fn test_menu_labels_are_numbered() {
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            assert!(choice.label().to_string().starts_with(&format!("{}. ", index + 1)));
        }
    }

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id(" 12 "), Ok(12));
        assert!(parse_task_id("0").is_err());
        assert!(parse_task_id("-3").is_err());
        assert!(parse_task_id("abc").is_err());
        assert!(parse_task_id("").is_err());
    }

    #[test]
    fn test_parse_date_time() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap().and_hms_opt(10, 50, 0).unwrap();
        assert_eq!(parse_date_time("2025-06-20 10:50"), Ok(expected));
        assert!(parse_date_time("20/06/2025 10:50").is_err());
        assert!(parse_date_time("2025-06-20").is_err());
        assert!(parse_date_time("2025-13-01 10:00").is_err());
    }

    #[test]
    fn test_parse_note() {
        assert_eq!(parse_note("  "), None);
        assert_eq!(parse_note(" buy milk "), Some("buy milk".to_string()));
    }

    #[test]
    fn test_parse_note_clears_with_marker() {
        assert_eq!(parse_note(NO_NOTE), None);
        assert_eq!(parse_note(" - "), None);
        assert_eq!(parse_note("-5 degrees"), Some("-5 degrees".to_string()));
    }
}
