//! Error taxonomy module.
//!
//! Re-exports the workspace error types from `willow-core`.

pub use willow_core::exception::{Error, Result};
