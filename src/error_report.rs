//! Structured error reporting.
//!
//! The host engine surfaces failures as a structured record (status code,
//! short status text, context, optional stack trace). This module consumes
//! that record: it logs it and renders a JSON response for API-shaped
//! requests. View-layer rendering of error pages stays with the embedding
//! application.

use serde::{Deserialize, Serialize};
use willow_conf::Settings;
use willow_core::http::Response;

/// The structured error record handed over by the host engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
	/// HTTP status code, e.g. 404 or 500.
	pub code: u16,
	/// Short description of the status, e.g. "Not Found".
	pub status: String,
	/// Error context.
	pub text: String,
	/// Stack trace, when the engine captured one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub trace: Option<String>,
}

impl ErrorReport {
	pub fn new(code: u16, status: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			code,
			status: status.into(),
			text: text.into(),
			trace: None,
		}
	}

	pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
		self.trace = Some(trace.into());
		self
	}

	/// Log the report. The trace is included for server errors only when
	/// debug output is enabled.
	pub fn log(&self, settings: &Settings) {
		if self.include_trace(settings)
			&& let Some(trace) = &self.trace
		{
			tracing::error!(
				code = self.code,
				status = %self.status,
				trace = %trace,
				"{}",
				self.text
			);
		} else {
			tracing::error!(code = self.code, status = %self.status, "{}", self.text);
		}
	}

	/// Render the report as a JSON response, logging it on the way. Client
	/// errors (4xx) never carry a trace; server errors carry one only when
	/// debug output is enabled.
	pub fn render(&self, settings: &Settings) -> Response {
		self.log(settings);

		let mut report = self.clone();
		if !self.include_trace(settings) {
			report.trace = None;
		}

		let status = http::StatusCode::from_u16(self.code)
			.unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
		let body = serde_json::to_vec(&report).unwrap_or_default();
		Response::with_status(status)
			.with_header("Content-Type", "application/json")
			.with_body(body)
	}

	fn include_trace(&self, settings: &Settings) -> bool {
		self.code >= 500 && settings.debug() > 0
	}
}
