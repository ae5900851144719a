//! Application-level input records.
//!
//! - [`ExplicitArgs`] - values from the command line
//! - [`EnvOverrides`] - values from environment variables

pub mod env_overrides;
pub mod explicit_args;

pub use env_overrides::EnvOverrides;
pub use explicit_args::ExplicitArgs;
