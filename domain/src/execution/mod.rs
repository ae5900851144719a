//! Execution subdomain: modes, command lines and invocation outcomes.

pub mod command;
pub mod mode;
pub mod outcome;
pub mod review;
