//! Ordered route declarations for one controller.

use crate::route::Route;
use crate::scope::RouteScope;
use http::Method;
use willow_core::{Error, Result};

/// The ordered sequence of routes declared by one controller.
///
/// Starting a route hands back a [`RouteScope`] over it; the chain ends
/// with [`RouteScope::build`], which returns the finalized collection.
/// Name uniqueness is a whole-table property and is checked later, when
/// collections are merged by [`Router::of`](crate::Router::of).
///
/// # Examples
///
/// ```
/// use willow_routing::RouteCollection;
///
/// let collection = RouteCollection::create("app::Pages")
///     .get("home", "/")?
///     .handler("index")
///     .build();
/// assert_eq!(collection.routes().len(), 1);
/// # Ok::<(), willow_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteCollection {
	owner: &'static str,
	routes: Vec<Route>,
}

impl RouteCollection {
	/// An empty collection bound to the given owner type name.
	pub fn create(owner: &'static str) -> Self {
		Self {
			owner,
			routes: Vec::new(),
		}
	}

	/// An empty collection owned by the controller type `C`.
	pub fn for_type<C: ?Sized + 'static>() -> Self {
		Self::create(std::any::type_name::<C>())
	}

	/// Start a new route with the given method, name and URL pattern and
	/// return the scope over it. Fails immediately on an empty name or
	/// pattern; nothing is appended in that case.
	pub fn route(
		mut self,
		method: Method,
		name: impl Into<String>,
		pattern: impl Into<String>,
	) -> Result<RouteScope> {
		let name = name.into();
		let pattern = pattern.into();
		if name.is_empty() {
			return Err(Error::InvalidArgument(
				"route name must not be empty".to_string(),
			));
		}
		if pattern.is_empty() {
			return Err(Error::InvalidArgument(format!(
				"route {} has an empty pattern",
				name
			)));
		}

		self.routes.push(Route::new(method, name, pattern, self.owner));
		Ok(RouteScope::new(self))
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

	/// The controller type this collection is bound to.
	pub fn owner(&self) -> &'static str {
		self.owner
	}

	/// The routes declared so far, in declaration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	pub(crate) fn last_route_mut(&mut self) -> &mut Route {
		// A scope only exists after a route has been started.
		self.routes.last_mut().expect("scope without a started route")
	}

	pub(crate) fn last_route(&self) -> &Route {
		self.routes.last().expect("scope without a started route")
	}

	pub(crate) fn into_routes(self) -> Vec<Route> {
		self.routes
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_name_rejected_before_append() {
		let err = RouteCollection::create("app::Pages")
			.route(Method::GET, "", "/x")
			.unwrap_err();
		assert!(matches!(err, Error::InvalidArgument(_)));
	}

	#[test]
	fn test_empty_pattern_rejected() {
		let err = RouteCollection::create("app::Pages")
			.get("home", "")
			.unwrap_err();
		assert!(matches!(err, Error::InvalidArgument(_)));
	}

	#[test]
	fn test_routes_kept_in_declaration_order() -> Result<()> {
		let collection = RouteCollection::create("app::Pages")
			.get("home", "/")?
			.handler("index")
			.post("save", "/save")?
			.handler("save")
			.delete("remove", "/items/@id")?
			.handler("remove")
			.build();

		let names: Vec<_> = collection.routes().iter().map(|r| r.name()).collect();
		assert_eq!(names, ["home", "save", "remove"]);
		assert_eq!(collection.routes()[1].method(), &Method::POST);
		Ok(())
	}

	#[test]
	fn test_for_type_uses_type_name() {
		struct Pages;
		let collection = RouteCollection::for_type::<Pages>();
		assert!(collection.owner().ends_with("Pages"));
	}
}
