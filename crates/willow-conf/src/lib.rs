//! # Willow Conf
//!
//! Settings management for Willow applications: the run mode
//! (dev/stage/prod/test), debug level, and asset path resolution, loaded
//! from prefixed environment variables or a TOML file.
//!
//! Settings are built once during startup and passed to the application by
//! value; nothing here is process-global.

pub mod env;
pub mod settings;

pub use env::Env;
pub use settings::{Mode, Settings};
