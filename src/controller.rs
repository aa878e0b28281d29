//! The controller seam: types that declare routes.

use willow_core::Result;
use willow_routing::RouteCollection;

/// A controller declares its routes once, at startup.
///
/// The host engine resolves the instance- and static-bound handler tokens
/// back to the controller at dispatch time; instance-bound actions run
/// after the controller's per-request setup, so any pre-route hook the
/// engine supports fires first.
///
/// # Examples
///
/// ```
/// use willow::controller::Controller;
/// use willow::exception::Result;
/// use willow::routing::RouteCollection;
///
/// struct Pages;
///
/// impl Controller for Pages {
///     fn routes() -> Result<RouteCollection> {
///         Ok(Self::collection()
///             .get("home", "/")?
///             .handler("index")
///             .build())
///     }
/// }
///
/// let collection = Pages::routes().unwrap();
/// assert_eq!(collection.owner(), Pages::name());
/// ```
pub trait Controller {
	/// The routes this controller declares.
	fn routes() -> Result<RouteCollection>
	where
		Self: Sized;

	/// The owner identity used in the route table.
	fn name() -> &'static str
	where
		Self: Sized + 'static,
	{
		std::any::type_name::<Self>()
	}

	/// An empty collection bound to this controller.
	fn collection() -> RouteCollection
	where
		Self: Sized + 'static,
	{
		RouteCollection::for_type::<Self>()
	}
}
