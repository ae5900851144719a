//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod binary_locator;
pub mod clock;
pub mod defaults_store;
pub mod history;
pub mod mode_progress;
pub mod process;
pub mod prompt;
