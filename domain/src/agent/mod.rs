//! Agent identities known to the launcher.

pub mod kind;
