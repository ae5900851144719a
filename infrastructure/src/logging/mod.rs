//! Logging adapters

pub mod history_log;

pub use history_log::JsonlHistoryLog;
