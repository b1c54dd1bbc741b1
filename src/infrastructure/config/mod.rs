//! Configuration infrastructure
//!
//! Hierarchical configuration loading with figment and post-load validation.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
