//! Application bootstrap: equip once, pass the result around.

use std::sync::Arc;
use willow_conf::Settings;
use willow_core::Result;
use willow_routing::{DispatchEngine, RouteCollection, Router};

/// An equipped application: settings plus the frozen route table.
///
/// `equip` runs once, single-threaded, before any request is served. Any
/// failure while the table is built aborts startup; a malformed route
/// table is a configuration bug, not something to serve around. After
/// `equip` returns the application is read-only and cheap to share.
///
/// # Examples
///
/// ```
/// use willow::app::App;
/// use willow::conf::Settings;
/// use willow::routing::RouteCollection;
///
/// let pages = RouteCollection::create("app::Pages")
///     .get("home", "/")?
///     .handler("index")
///     .build();
///
/// let app = App::equip(Settings::default(), vec![pages])?;
/// assert_eq!(app.router().len(), 1);
/// # Ok::<(), willow::exception::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct App {
	settings: Settings,
	router: Arc<Router>,
}

impl App {
	/// Build the route table from every controller's collection and wrap
	/// it with the given settings.
	pub fn equip(settings: Settings, collections: Vec<RouteCollection>) -> Result<Self> {
		let router = Router::of(collections)?;
		tracing::info!(
			mode = %settings.mode(),
			routes = router.len(),
			"application equipped"
		);
		Ok(Self {
			settings,
			router: Arc::new(router),
		})
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn router(&self) -> &Router {
		&self.router
	}

	/// A shareable handle to the route table, for request workers.
	pub fn router_handle(&self) -> Arc<Router> {
		Arc::clone(&self.router)
	}

	/// Push the whole table to the host engine, in table order.
	pub fn install(&self, engine: &mut dyn DispatchEngine) -> Result<()> {
		self.router.install(engine)
	}
}
