//! The aggregated, name-unique, read-only route table.

use crate::collection::RouteCollection;
use crate::registration::{DispatchEngine, RouteRegistration};
use crate::route::Route;
use std::collections::HashMap;
use willow_core::{Error, Result};

/// The merged route table across every registered controller.
///
/// Built once from the collections supplied at startup, immutable
/// afterwards: lookups never mutate, so a router can be shared across
/// request workers behind an `Arc` without synchronization.
///
/// # Examples
///
/// ```
/// use willow_routing::{RouteCollection, Router};
///
/// let pages = RouteCollection::create("app::Pages")
///     .get("home", "/")?
///     .handler("index")
///     .build();
/// let router = Router::of(vec![pages])?;
///
/// assert!(router.route("home").is_some());
/// assert!(router.route("absent").is_none());
/// # Ok::<(), willow_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Router {
	routes: Vec<Route>,
	by_name: HashMap<String, usize>,
	by_owner: HashMap<&'static str, Vec<usize>>,
}

impl Router {
	/// Merge the given collections into one table, preserving collection
	/// order and declaration order within each collection.
	///
	/// Fails with [`Error::DuplicateRouteName`] when two routes anywhere
	/// in the input share a name, and with [`Error::InvalidArgument`]
	/// when a route was finalized without a handler. Either failure is a
	/// configuration bug and aborts startup; there is no partial table.
	pub fn of(collections: Vec<RouteCollection>) -> Result<Self> {
		let mut routes = Vec::new();
		let mut by_name: HashMap<String, usize> = HashMap::new();
		let mut by_owner: HashMap<&'static str, Vec<usize>> = HashMap::new();

		for collection in collections {
			for route in collection.into_routes() {
				if route.handler_spec().is_none() {
					return Err(Error::InvalidArgument(format!(
						"route {} has no handler",
						route.name()
					)));
				}

				let index = routes.len();
				if let Some(&existing) = by_name.get(route.name()) {
					let first: &Route = &routes[existing];
					return Err(Error::DuplicateRouteName {
						name: route.name().to_string(),
						first_owner: first.owner().to_string(),
						second_owner: route.owner().to_string(),
					});
				}
				by_name.insert(route.name().to_string(), index);
				by_owner.entry(route.owner()).or_default().push(index);
				routes.push(route);
			}
		}

		Ok(Self {
			routes,
			by_name,
			by_owner,
		})
	}

	/// The full table, in registration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// The subsequence of routes declared by `owner`, order preserved.
	pub fn routes_for(&self, owner: &str) -> Vec<&Route> {
		self.by_owner
			.get(owner)
			.map(|indices| indices.iter().map(|&i| &self.routes[i]).collect())
			.unwrap_or_default()
	}

	/// Exact lookup by route name. Absence is a normal outcome, not an
	/// error, and there is no partial matching.
	pub fn route(&self, name: &str) -> Option<&Route> {
		self.by_name.get(name).map(|&i| &self.routes[i])
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// The registration tuples for the host engine, one per route in
	/// table order.
	pub fn registrations(&self) -> impl Iterator<Item = RouteRegistration> + '_ {
		self.routes.iter().map(|route| RouteRegistration {
			method: route.method().clone(),
			name: route.name().to_string(),
			pattern: route.pattern().to_string(),
			type_suffix: route.type_suffix(),
			handler: route
				.handler()
				.expect("router never holds a handlerless route"),
			ttl: route.ttl(),
			kbps: route.kbps(),
		})
	}

	/// Register every route with the host engine, in table order.
	pub fn install(&self, engine: &mut dyn DispatchEngine) -> Result<()> {
		for registration in self.registrations() {
			tracing::debug!(rule = %registration, "registering route");
			engine.register(registration)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::Method;

	fn pages() -> RouteCollection {
		RouteCollection::create("app::Pages")
			.get("home", "/")
			.unwrap()
			.handler("index")
			.get("about", "/about")
			.unwrap()
			.handler("about")
			.build()
	}

	fn api() -> RouteCollection {
		RouteCollection::create("app::Api")
			.get("status", "/status")
			.unwrap()
			.static_handler("status")
			.build()
	}

	#[test]
	fn test_flatten_preserves_order() -> Result<()> {
		let router = Router::of(vec![pages(), api()])?;
		let names: Vec<_> = router.routes().iter().map(|r| r.name()).collect();
		assert_eq!(names, ["home", "about", "status"]);
		Ok(())
	}

	#[test]
	fn test_lookup_by_name_is_exact() -> Result<()> {
		let router = Router::of(vec![pages()])?;
		assert_eq!(router.route("home").unwrap().pattern(), "/");
		// No partial matching.
		assert!(router.route("hom").is_none());
		assert!(router.route("homepage").is_none());
		Ok(())
	}

	#[test]
	fn test_lookup_by_owner() -> Result<()> {
		let router = Router::of(vec![pages(), api()])?;
		let page_routes = router.routes_for("app::Pages");
		assert_eq!(page_routes.len(), 2);
		assert_eq!(page_routes[0].name(), "home");
		assert_eq!(router.routes_for("app::Api").len(), 1);
		assert!(router.routes_for("app::Unknown").is_empty());
		Ok(())
	}

	#[test]
	fn test_duplicate_name_across_collections() {
		let other = RouteCollection::create("app::Admin")
			.get("home", "/admin")
			.unwrap()
			.handler("index")
			.build();

		let err = Router::of(vec![pages(), other]).unwrap_err();
		match err {
			Error::DuplicateRouteName {
				name,
				first_owner,
				second_owner,
			} => {
				assert_eq!(name, "home");
				assert_eq!(first_owner, "app::Pages");
				assert_eq!(second_owner, "app::Admin");
			}
			other => panic!("expected DuplicateRouteName, got {:?}", other),
		}
	}

	#[test]
	fn test_route_without_handler_rejected() {
		let collection = RouteCollection::create("app::Pages")
			.get("home", "/")
			.unwrap()
			.build();
		assert!(matches!(
			Router::of(vec![collection]),
			Err(Error::InvalidArgument(_))
		));
	}

	#[test]
	fn test_registrations_carry_route_data() -> Result<()> {
		let collection = RouteCollection::create("app::Api")
			.route(Method::POST, "upload", "/upload")?
			.handler("upload")
			.ttl(60)
			.kbps(512)
			.sync()
			.build();
		let router = Router::of(vec![collection])?;

		let registration = router.registrations().next().unwrap();
		assert_eq!(registration.method, Method::POST);
		assert_eq!(registration.ttl, 60);
		assert_eq!(registration.kbps, 512);
		assert_eq!(registration.rule(), "POST @upload: /upload [sync]");
		assert_eq!(registration.handler.token(), Some("app::Api->upload"));
		Ok(())
	}
}
