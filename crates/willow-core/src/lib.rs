//! # Willow Core
//!
//! Shared foundation for the Willow workspace: the error taxonomy used by
//! every crate and the minimal HTTP primitives (request, response, handler
//! trait) that callback routes and the error reporter are written against.
//!
//! Request dispatch itself lives in the host engine, not here; these types
//! only describe what crosses that boundary.

pub mod exception;
pub mod http;

pub use exception::{Error, Result};
pub use http::{FnHandler, Handler, Request, Response};
