//! # Willow
//!
//! A convenience layer over an external request-dispatch engine: controllers
//! declare named routes through a fluent builder, the router aggregates them
//! under global name uniqueness, and the application hands the flattened
//! table to the host engine at startup.
//!
//! Willow does not parse URLs, match patterns, or dispatch requests; that is
//! the host engine's job. This crate owns the route table that engine
//! consumes, plus the ambient pieces around it: settings, the controller
//! seam, and structured error reporting.
//!
//! ## Quick Example
//!
//! ```
//! use willow::prelude::*;
//!
//! struct Pages;
//!
//! impl Controller for Pages {
//!     fn routes() -> Result<RouteCollection> {
//!         Ok(Self::collection()
//!             .get("home", "/")?
//!             .handler("index")
//!             .get("list", "/items")?
//!             .static_handler("list")
//!             .build())
//!     }
//! }
//!
//! let app = App::equip(Settings::default(), vec![Pages::routes()?])?;
//! assert_eq!(app.router().len(), 2);
//! # Ok::<(), willow::exception::Error>(())
//! ```
//!
//! The equipped [`App`] is an explicitly constructed value: build it once at
//! startup and pass it to whatever performs dispatch, rather than reaching
//! for process-wide state.

pub mod app;
pub mod conf;
pub mod controller;
pub mod error_report;
pub mod exception;
pub mod http;
pub mod prelude;
pub mod routing;

pub use app::App;
pub use controller::Controller;
pub use error_report::ErrorReport;
