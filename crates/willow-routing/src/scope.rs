//! The fluent cursor over the route most recently started.

use crate::collection::RouteCollection;
use crate::route::{Flag, HandlerSpec, Route};
use http::Method;
use std::sync::Arc;
use willow_core::{Handler, Result};

/// A fluent cursor over exactly one in-progress route.
///
/// The scope owns the collection while the chain runs, so only the route
/// most recently started can be mutated; starting the next route moves
/// the collection into a fresh scope. [`build`](Self::build) ends the
/// chain and hands the finalized collection back.
///
/// # Examples
///
/// ```
/// use willow_routing::RouteCollection;
///
/// let collection = RouteCollection::create("app::Api")
///     .get("status", "/status")?
///     .static_handler("status")
///     .ttl(5)
///     .ajax()
///     .build();
///
/// let route = &collection.routes()[0];
/// assert_eq!(route.ttl(), 5);
/// assert_eq!(route.type_suffix(), " [ajax]");
/// # Ok::<(), willow_core::Error>(())
/// ```
#[derive(Debug)]
pub struct RouteScope {
	collection: RouteCollection,
}

impl RouteScope {
	pub(crate) fn new(collection: RouteCollection) -> Self {
		Self { collection }
	}

	/// Bind the route to `action`, invoked as an instance method of the
	/// owning controller. The engine constructs the controller per
	/// request, so instance lifecycle hooks run before the action.
	pub fn handler(mut self, action: impl Into<String>) -> Self {
		self.collection.last_route_mut().set_handler(HandlerSpec::Instance {
			action: action.into(),
		});
		self
	}

	/// Bind the route to `action`, invoked as an associated function of
	/// the owning controller with no instance construction. For
	/// stateless endpoints.
	pub fn static_handler(mut self, action: impl Into<String>) -> Self {
		self.collection.last_route_mut().set_handler(HandlerSpec::Static {
			action: action.into(),
		});
		self
	}

	/// Bind the route to a raw routing expression passed to the engine
	/// verbatim, e.g. `@controller->@action` for fully data-driven
	/// routing.
	pub fn dynamic_handler(mut self, expression: impl Into<String>) -> Self {
		self.collection
			.last_route_mut()
			.set_handler(HandlerSpec::Raw(expression.into()));
		self
	}

	/// Bind the route to a callback invoked directly by the engine,
	/// bypassing controller resolution.
	pub fn callback<H: Handler + 'static>(mut self, handler: H) -> Self {
		self.collection
			.last_route_mut()
			.set_handler(HandlerSpec::Callback(Arc::new(handler)));
		self
	}

	/// Cache the response for `seconds`; 0 disables caching.
	pub fn ttl(mut self, seconds: u32) -> Self {
		self.collection.last_route_mut().set_ttl(seconds);
		self
	}

	/// Throttle the response to `limit` KiB/s; 0 disables throttling.
	pub fn kbps(mut self, limit: u32) -> Self {
		self.collection.last_route_mut().set_kbps(limit);
		self
	}

	pub fn ajax(mut self) -> Self {
		self.collection.last_route_mut().add_flag(Flag::Ajax);
		self
	}

	pub fn cli(mut self) -> Self {
		self.collection.last_route_mut().add_flag(Flag::Cli);
		self
	}

	pub fn sync(mut self) -> Self {
		self.collection.last_route_mut().add_flag(Flag::Sync);
		self
	}

	/// Start the next route on the owning collection; same contract as
	/// [`RouteCollection::route`].
	pub fn route(
		self,
		method: Method,
		name: impl Into<String>,
		pattern: impl Into<String>,
	) -> Result<RouteScope> {
		self.collection.route(method, name, pattern)
	}

	pub fn get(self, name: impl Into<String>, pattern: impl Into<String>) -> Result<RouteScope> {
		self.route(Method::GET, name, pattern)
	}

	pub fn post(self, name: impl Into<String>, pattern: impl Into<String>) -> Result<RouteScope> {
		self.route(Method::POST, name, pattern)
	}

	pub fn put(self, name: impl Into<String>, pattern: impl Into<String>) -> Result<RouteScope> {
		self.route(Method::PUT, name, pattern)
	}

	pub fn delete(
		self,
		name: impl Into<String>,
		pattern: impl Into<String>,
	) -> Result<RouteScope> {
		self.route(Method::DELETE, name, pattern)
	}

	/// The route currently under construction.
	pub fn current(&self) -> &Route {
		self.collection.last_route()
	}

	/// End the chain and return the finalized collection.
	pub fn build(self) -> RouteCollection {
		self.collection
	}
}
