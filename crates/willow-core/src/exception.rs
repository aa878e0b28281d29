//! Error types shared across the Willow workspace.
//!
//! Construction-time errors (invalid builder arguments, duplicate route
//! names) are fatal to startup: a route table that fails to build is a
//! configuration bug, and the application refuses to serve. Absent-name
//! lookups after the freeze point are not errors at all; they surface as
//! `Option::None` from the router.

use thiserror::Error;

/// Errors raised while assembling and installing the route table.
#[derive(Debug, Error)]
pub enum Error {
	/// A builder call received an argument it cannot accept, such as an
	/// empty route name or pattern. Raised at the offending call, never
	/// deferred.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// Two routes across the aggregated collections share a name. Route
	/// names are unique per router, so this is detected when collections
	/// are merged.
	#[error("Duplicate route name: {name} declared by both {first_owner} and {second_owner}")]
	DuplicateRouteName {
		/// The colliding route name.
		name: String,
		/// Owner of the route that claimed the name first.
		first_owner: String,
		/// Owner of the route that collided with it.
		second_owner: String,
	},

	/// Settings could not be loaded or parsed.
	#[error("Configuration error: {0}")]
	Config(String),

	/// A callback handler failed while serving a request.
	#[error("Handler error: {0}")]
	Handler(String),

	/// I/O failure while reading configuration.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
