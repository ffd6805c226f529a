//! # todolist
//!
//! An interactive command-line todo list backed by SQLite.
//!
//! ## Features
//!
//! - **Task Management**: Add, update, delete and complete tasks keyed by
//!   caller-chosen ids
//! - **Explicit Outcomes**: "already exists" and "does not exist" are
//!   returned as values, store failures as errors
//! - **Listings**: All, completed and incomplete tasks with a count summary
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
