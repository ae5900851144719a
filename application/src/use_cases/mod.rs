//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod check_version;
pub mod confirm;
pub mod ensure_ready;
pub mod launch_agent;
pub mod resolve_selection;

#[cfg(test)]
pub(crate) mod test_support;
