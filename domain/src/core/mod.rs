//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors

pub mod error;
