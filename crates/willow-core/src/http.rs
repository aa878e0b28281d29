//! Minimal HTTP primitives for the host-engine boundary.
//!
//! The host dispatch engine owns the real request cycle; these types carry
//! just enough of it for callback handlers and the error reporter to be
//! written and tested without the engine present.

use crate::exception::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use std::collections::HashMap;
use std::str::FromStr;

/// A request as handed over by the host engine.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub path: String,
	/// Parameters bound from URL pattern placeholders.
	pub path_params: HashMap<String, String>,
	/// Parameters from the query string.
	pub query_params: HashMap<String, String>,
	pub headers: HashMap<String, String>,
	pub body: Bytes,
}

impl Request {
	/// Create a request with the given method and path and no parameters.
	///
	/// # Examples
	///
	/// ```
	/// use http::Method;
	/// use willow_core::http::Request;
	///
	/// let request = Request::new(Method::GET, "/items");
	/// assert_eq!(request.path, "/items");
	/// assert!(request.path_params.is_empty());
	/// ```
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			path_params: HashMap::new(),
			query_params: HashMap::new(),
			headers: HashMap::new(),
			body: Bytes::new(),
		}
	}

	/// Bind a path parameter.
	pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.path_params.insert(name.into(), value.into());
		self
	}

	/// Bind a query parameter.
	pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query_params.insert(name.into(), value.into());
		self
	}

	/// Set the request body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Read a path parameter, parsed to `T`. Falls back to `default` when
	/// the parameter is absent or fails to parse.
	///
	/// # Examples
	///
	/// ```
	/// use http::Method;
	/// use willow_core::http::Request;
	///
	/// let request = Request::new(Method::GET, "/items/7").with_path_param("id", "7");
	/// assert_eq!(request.path_param("id", 0_i64), 7);
	/// assert_eq!(request.path_param("missing", 0_i64), 0);
	/// ```
	pub fn path_param<T: FromStr>(&self, name: &str, default: T) -> T {
		parse_or(self.path_params.get(name), default)
	}

	/// Read a query parameter, parsed to `T`, with a fallback default.
	pub fn query_param<T: FromStr>(&self, name: &str, default: T) -> T {
		parse_or(self.query_params.get(name), default)
	}

	/// Read a parameter by name, preferring the URL path binding over the
	/// query string.
	pub fn param<T: FromStr>(&self, name: &str, default: T) -> T {
		if self.path_params.contains_key(name) {
			self.path_param(name, default)
		} else {
			self.query_param(name, default)
		}
	}

	/// Get a request header value by name.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).map(String::as_str)
	}

	/// True when the Accept or Content-Type header names a JSON payload.
	pub fn is_json(&self) -> bool {
		self.header("Accept").is_some_and(|v| v.contains("json"))
			|| self.header("Content-Type").is_some_and(|v| v.contains("json"))
	}
}

fn parse_or<T: FromStr>(value: Option<&String>, default: T) -> T {
	value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// A response handed back to the host engine.
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HashMap<String, String>,
	pub body: Bytes,
}

impl Response {
	/// An empty 200 response.
	pub fn ok() -> Self {
		Self::with_status(StatusCode::OK)
	}

	/// An empty response with the given status.
	pub fn with_status(status: StatusCode) -> Self {
		Self {
			status,
			headers: HashMap::new(),
			body: Bytes::new(),
		}
	}

	/// Set the response body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set a response header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());
		self
	}

	/// A JSON response serialized from `value`.
	///
	/// # Examples
	///
	/// ```
	/// use willow_core::http::Response;
	///
	/// let response = Response::json(&serde_json::json!({"id": 7})).unwrap();
	/// assert_eq!(response.headers.get("Content-Type").unwrap(), "application/json");
	/// ```
	pub fn json<T: serde::Serialize>(value: &T) -> Result<Self> {
		let body = serde_json::to_vec(value)
			.map_err(|e| crate::Error::Handler(format!("JSON serialization failed: {}", e)))?;
		Ok(Self::ok()
			.with_header("Content-Type", "application/json")
			.with_body(body))
	}
}

/// Executable endpoint logic, invoked by the host engine.
///
/// Callback routes carry an `Arc<dyn Handler>` straight through the route
/// table to the engine, bypassing controller resolution.
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Adapter turning a plain async function into a [`Handler`].
///
/// # Examples
///
/// ```
/// use willow_core::http::{FnHandler, Request, Response};
/// use willow_core::Result;
///
/// async fn health(_request: Request) -> Result<Response> {
///     Ok(Response::ok())
/// }
///
/// let handler = FnHandler::new(health);
/// ```
pub struct FnHandler<F> {
	func: F,
}

impl<F> FnHandler<F> {
	pub fn new(func: F) -> Self {
		Self { func }
	}
}

#[async_trait]
impl<F, Fut> Handler for FnHandler<F>
where
	F: Fn(Request) -> Fut + Send + Sync,
	Fut: std::future::Future<Output = Result<Response>> + Send,
{
	async fn handle(&self, request: Request) -> Result<Response> {
		(self.func)(request).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_path_param_parsing() {
		let request = Request::new(Method::GET, "/params/12")
			.with_path_param("id", "12")
			.with_query_param("a", "3")
			.with_query_param("b", "NaN");

		assert_eq!(request.path_param("id", 0_i64), 12);
		assert_eq!(request.query_param("a", 0_i64), 3);
		// Unparseable values fall back to the default.
		assert_eq!(request.query_param("b", 0_i64), 0);
		assert_eq!(request.query_param("absent", 42_i64), 42);
	}

	#[test]
	fn test_param_prefers_path_binding() {
		let request = Request::new(Method::GET, "/params/12")
			.with_path_param("id", "12")
			.with_query_param("id", "99");
		assert_eq!(request.param("id", 0_i64), 12);

		let query_only = Request::new(Method::GET, "/params").with_query_param("id", "99");
		assert_eq!(query_only.param("id", 0_i64), 99);
	}

	#[test]
	fn test_is_json_request() {
		let request =
			Request::new(Method::GET, "/").with_query_param("x", "1");
		assert!(!request.is_json());

		let mut json_request = Request::new(Method::GET, "/");
		json_request
			.headers
			.insert("Accept".to_string(), "application/json".to_string());
		assert!(json_request.is_json());
	}

	#[tokio::test]
	async fn test_fn_handler_invokes_function() {
		let handler = FnHandler::new(|_request: Request| async {
			Ok(Response::ok().with_body("index"))
		});
		let response = handler
			.handle(Request::new(Method::GET, "/"))
			.await
			.unwrap();
		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.body, Bytes::from("index"));
	}
}
