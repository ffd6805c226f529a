//! Date and time formatting utilities for task display and console input.
//!
//! Two formats are in play:
//!
//! - **Display**: `%m/%d/%Y %I:%M:%S %p`, fixed width, used when a task is
//!   rendered (e.g. `06/20/2025 10:50:00 AM`).
//! - **Input**: `%Y-%m-%d %H:%M`, what the console accepts when the user
//!   types a due date (e.g. `2025-06-20 10:50`).
//!
//! ## Examples
//!
//! ```rust
//! use todolist::libs::formatter::{format_date_time, parse_input_date_time};
//!
//! let due = parse_input_date_time("2025-06-20 10:50").unwrap();
//! assert_eq!(format_date_time(&due), "06/20/2025 10:50:00 AM");
//! ```

use chrono::{Local, NaiveDateTime, ParseResult, SubsecRound};

/// Format used when rendering timestamps.
pub const DISPLAY_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Format accepted from console input.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders a timestamp in the fixed-width display format.
pub fn format_date_time(date: &NaiveDateTime) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses `YYYY-MM-DD HH:MM`, ignoring surrounding whitespace.
pub fn parse_input_date_time(input: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), INPUT_FORMAT)
}

/// Current local time truncated to whole seconds, so it survives a store
/// round-trip unchanged.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
