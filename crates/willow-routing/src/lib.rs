//! # Willow Routing
//!
//! Named route declaration for controllers, and aggregation of those
//! declarations into the single read-only table handed to the host
//! dispatch engine.
//!
//! A controller declares its routes once through the fluent builder:
//!
//! ```
//! use willow_routing::{RouteCollection, Router};
//!
//! let collection = RouteCollection::create("app::Pages")
//!     .get("home", "/")?
//!     .handler("index")
//!     .get("list", "/items")?
//!     .static_handler("list")
//!     .build();
//!
//! let router = Router::of(vec![collection])?;
//! assert_eq!(router.routes().len(), 2);
//! # Ok::<(), willow_core::Error>(())
//! ```
//!
//! The router enforces global name uniqueness when collections are merged
//! and is immutable afterwards; request matching and dispatch belong to
//! the host engine, which consumes the table through [`DispatchEngine`].

pub mod collection;
pub mod registration;
pub mod route;
pub mod router;
pub mod scope;

pub use collection::RouteCollection;
pub use registration::{DispatchEngine, RouteRegistration};
pub use route::{Flag, FlagSet, HandlerRef, HandlerSpec, Route};
pub use router::Router;
pub use scope::RouteScope;
