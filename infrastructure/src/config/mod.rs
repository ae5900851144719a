//! Configuration adapters

pub mod defaults_file;

pub use defaults_file::TomlDefaultsStore;
