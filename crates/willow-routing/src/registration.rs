//! The outbound seam: registration tuples consumed by the host engine.

use crate::route::HandlerRef;
use http::Method;
use std::fmt;
use willow_core::Result;

/// One entry of the flattened route table, in the shape the host engine
/// registers: `(method, name, pattern, type suffix, handler, ttl, kbps)`.
#[derive(Debug, Clone)]
pub struct RouteRegistration {
	pub method: Method,
	pub name: String,
	pub pattern: String,
	pub type_suffix: String,
	pub handler: HandlerRef,
	pub ttl: u32,
	pub kbps: u32,
}

impl RouteRegistration {
	/// The engine-facing registration rule,
	/// e.g. `GET @home: / [ajax]`.
	pub fn rule(&self) -> String {
		format!(
			"{} @{}: {}{}",
			self.method, self.name, self.pattern, self.type_suffix
		)
	}
}

impl fmt::Display for RouteRegistration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.rule())
	}
}

/// The host dispatch engine's route table, as seen from this side of the
/// boundary. The router walks its frozen table and registers every route
/// in order; URL matching and dispatch happen entirely behind this trait.
pub trait DispatchEngine {
	fn register(&mut self, registration: RouteRegistration) -> Result<()>;
}
