//! Commonly used types, importable in one line.

pub use crate::app::App;
pub use crate::conf::{Mode, Settings};
pub use crate::controller::Controller;
pub use crate::error_report::ErrorReport;
pub use crate::exception::{Error, Result};
pub use crate::http::{FnHandler, Handler, Request, Response};
pub use crate::routing::{DispatchEngine, RouteCollection, RouteRegistration, Router};
