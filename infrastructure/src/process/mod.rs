//! Process adapters: launching agents and finding their binaries.

pub mod executor;
pub mod locator;

pub use executor::TokioProcessExecutor;
pub use locator::SearchPathLocator;
