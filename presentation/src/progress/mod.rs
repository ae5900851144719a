//! Mode progress reporting

pub mod reporter;

pub use reporter::ConsoleModeReporter;
