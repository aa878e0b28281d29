//! HTTP boundary types module.
//!
//! Re-exports the request/response primitives and handler trait from
//! `willow-core`.

pub use willow_core::http::{FnHandler, Handler, Request, Response};
