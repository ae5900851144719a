//! Selection subdomain: the immutable description of one run.
//!
//! - [`entities::Selection`] - the resolved run request
//! - [`value_objects::LoopDuration`] - normalized loop-mode duration
//! - [`defaults::PersistedDefaults`] - stored fallback values

pub mod defaults;
pub mod entities;
pub mod value_objects;
