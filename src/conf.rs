//! Settings management module.
//!
//! Re-exports the run mode and settings types from `willow-conf`.

pub use willow_conf::{Env, Mode, Settings};
