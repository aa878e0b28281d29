//! Routing module.
//!
//! Re-exports the route table types from `willow-routing`.

pub use willow_routing::{
	DispatchEngine, Flag, FlagSet, HandlerRef, HandlerSpec, Route, RouteCollection,
	RouteRegistration, RouteScope, Router,
};
