//! The route entity: one named endpoint declaration.

use http::Method;
use std::fmt;
use std::sync::Arc;
use willow_core::Handler;

/// Behavioral flag on a route, matched to the host engine's route
/// modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
	/// Route only answers XML HTTP requests.
	Ajax,
	/// Route is reachable from the command line only.
	Cli,
	/// Response is delivered synchronously (output buffering off).
	Sync,
}

/// The set of flags on a route. Flags are only ever added, never cleared;
/// adding a present flag is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
	ajax: bool,
	cli: bool,
	sync: bool,
}

impl FlagSet {
	pub fn insert(&mut self, flag: Flag) {
		match flag {
			Flag::Ajax => self.ajax = true,
			Flag::Cli => self.cli = true,
			Flag::Sync => self.sync = true,
		}
	}

	pub fn contains(&self, flag: Flag) -> bool {
		match flag {
			Flag::Ajax => self.ajax,
			Flag::Cli => self.cli,
			Flag::Sync => self.sync,
		}
	}

	pub fn is_empty(&self) -> bool {
		!(self.ajax || self.cli || self.sync)
	}

	/// The route type suffix appended to the registration rule: one
	/// ` [flag]` marker per active flag, in fixed ajax, sync, cli order.
	pub fn suffix(&self) -> String {
		let mut suffix = String::new();
		if self.ajax {
			suffix.push_str(" [ajax]");
		}
		if self.sync {
			suffix.push_str(" [sync]");
		}
		if self.cli {
			suffix.push_str(" [cli]");
		}
		suffix
	}
}

/// How a route binds to executable code.
///
/// Modeled as a sum type rather than the string punctuation conventions
/// the host engine understands; the punctuated token is derived at
/// emission time.
#[derive(Clone)]
pub enum HandlerSpec {
	/// Instantiate the owning controller and invoke `action` on the
	/// instance, so instance lifecycle hooks run first.
	Instance { action: String },
	/// Invoke `action` as an associated function of the owning
	/// controller, with no instance construction.
	Static { action: String },
	/// A raw routing expression passed to the engine verbatim. May itself
	/// contain placeholder tokens the engine resolves from the URL
	/// pattern at request time; bypasses the safety of the other modes.
	Raw(String),
	/// A handler invoked directly, bypassing controller resolution.
	Callback(Arc<dyn Handler>),
}

impl fmt::Debug for HandlerSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HandlerSpec::Instance { action } => {
				f.debug_struct("Instance").field("action", action).finish()
			}
			HandlerSpec::Static { action } => {
				f.debug_struct("Static").field("action", action).finish()
			}
			HandlerSpec::Raw(expr) => f.debug_tuple("Raw").field(expr).finish(),
			HandlerSpec::Callback(_) => f.write_str("Callback(..)"),
		}
	}
}

/// The handler reference a route resolves to in the registration table:
/// an invocation token the engine parses, or a callback passed through
/// opaquely.
#[derive(Clone)]
pub enum HandlerRef {
	Token(String),
	Callback(Arc<dyn Handler>),
}

impl HandlerRef {
	/// The invocation token, when this reference is one.
	pub fn token(&self) -> Option<&str> {
		match self {
			HandlerRef::Token(token) => Some(token),
			HandlerRef::Callback(_) => None,
		}
	}

	/// The callback handler, when this reference is one.
	pub fn callback(&self) -> Option<&Arc<dyn Handler>> {
		match self {
			HandlerRef::Token(_) => None,
			HandlerRef::Callback(handler) => Some(handler),
		}
	}
}

impl fmt::Debug for HandlerRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HandlerRef::Token(token) => f.debug_tuple("Token").field(token).finish(),
			HandlerRef::Callback(_) => f.write_str("Callback(..)"),
		}
	}
}

/// One named endpoint declaration.
///
/// Built through [`RouteCollection`](crate::RouteCollection) and its
/// scope, frozen once the owning router is constructed. Exactly one
/// handler spec is held at a time; a later handler setter silently
/// replaces the earlier one.
#[derive(Debug, Clone)]
pub struct Route {
	method: Method,
	name: String,
	pattern: String,
	handler: Option<HandlerSpec>,
	ttl: u32,
	kbps: u32,
	flags: FlagSet,
	owner: &'static str,
}

impl Route {
	pub(crate) fn new(
		method: Method,
		name: String,
		pattern: String,
		owner: &'static str,
	) -> Self {
		Self {
			method,
			name,
			pattern,
			handler: None,
			ttl: 0,
			kbps: 0,
			flags: FlagSet::default(),
			owner,
		}
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Cache lifetime in seconds; 0 means uncached.
	pub fn ttl(&self) -> u32 {
		self.ttl
	}

	/// Throttle limit in KiB/s; 0 means unthrottled.
	pub fn kbps(&self) -> u32 {
		self.kbps
	}

	pub fn flags(&self) -> FlagSet {
		self.flags
	}

	/// The controller type that declared this route.
	pub fn owner(&self) -> &'static str {
		self.owner
	}

	/// The route type suffix derived from the flag set (see
	/// [`FlagSet::suffix`]).
	pub fn type_suffix(&self) -> String {
		self.flags.suffix()
	}

	pub(crate) fn handler_spec(&self) -> Option<&HandlerSpec> {
		self.handler.as_ref()
	}

	/// Resolve the handler reference the registration table carries:
	/// `Owner->action` for instance binding, `Owner::action` for static
	/// binding, the raw expression verbatim, or the callback itself.
	/// `None` until a handler setter has been called.
	pub fn handler(&self) -> Option<HandlerRef> {
		match &self.handler {
			Some(HandlerSpec::Instance { action }) => {
				Some(HandlerRef::Token(format!("{}->{}", self.owner, action)))
			}
			Some(HandlerSpec::Static { action }) => {
				Some(HandlerRef::Token(format!("{}::{}", self.owner, action)))
			}
			Some(HandlerSpec::Raw(expr)) => Some(HandlerRef::Token(expr.clone())),
			Some(HandlerSpec::Callback(handler)) => {
				Some(HandlerRef::Callback(Arc::clone(handler)))
			}
			None => None,
		}
	}

	pub(crate) fn set_handler(&mut self, spec: HandlerSpec) {
		// Last write wins.
		self.handler = Some(spec);
	}

	pub(crate) fn set_ttl(&mut self, seconds: u32) {
		self.ttl = seconds;
	}

	pub(crate) fn set_kbps(&mut self, limit: u32) {
		self.kbps = limit;
	}

	pub(crate) fn add_flag(&mut self, flag: Flag) {
		self.flags.insert(flag);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn route() -> Route {
		Route::new(
			Method::GET,
			"home".to_string(),
			"/".to_string(),
			"app::Pages",
		)
	}

	#[test]
	fn test_defaults() {
		let route = route();
		assert_eq!(route.ttl(), 0);
		assert_eq!(route.kbps(), 0);
		assert!(route.flags().is_empty());
		assert!(route.handler().is_none());
		assert_eq!(route.type_suffix(), "");
	}

	#[test]
	fn test_flag_suffix_fixed_order() {
		let mut route = route();
		route.add_flag(Flag::Cli);
		route.add_flag(Flag::Ajax);
		// Suffix order is ajax, sync, cli regardless of insertion order.
		assert_eq!(route.type_suffix(), " [ajax] [cli]");

		route.add_flag(Flag::Sync);
		assert_eq!(route.type_suffix(), " [ajax] [sync] [cli]");
	}

	#[test]
	fn test_flag_insert_idempotent() {
		let mut route = route();
		route.add_flag(Flag::Ajax);
		let once = route.flags();
		route.add_flag(Flag::Ajax);
		assert_eq!(route.flags(), once);
	}

	#[test]
	fn test_handler_tokens() {
		let mut route = route();

		route.set_handler(HandlerSpec::Instance {
			action: "index".to_string(),
		});
		assert_eq!(
			route.handler().unwrap().token(),
			Some("app::Pages->index")
		);

		route.set_handler(HandlerSpec::Static {
			action: "version".to_string(),
		});
		assert_eq!(
			route.handler().unwrap().token(),
			Some("app::Pages::version")
		);

		route.set_handler(HandlerSpec::Raw("@controller->@action".to_string()));
		assert_eq!(
			route.handler().unwrap().token(),
			Some("@controller->@action")
		);
	}

	#[test]
	fn test_last_handler_setter_wins() {
		let mut route = route();
		route.set_handler(HandlerSpec::Instance {
			action: "index".to_string(),
		});
		route.set_handler(HandlerSpec::Static {
			action: "other".to_string(),
		});
		assert!(matches!(
			route.handler_spec(),
			Some(HandlerSpec::Static { action }) if action == "other"
		));
	}
}
