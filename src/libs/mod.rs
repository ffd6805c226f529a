//! Core library modules: the task entity, configuration, messaging and
//! presentation helpers.

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
