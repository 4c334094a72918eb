//! Project discovery, configuration, and record loading

pub mod config;
pub mod loader;
pub mod project;

pub use config::Config;
pub use project::{Project, ProjectError, RecordKind};
