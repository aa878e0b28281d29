//! Environment variable handling with prefix support.

use std::env;

/// Environment variable reader with an optional prefix.
///
/// # Examples
///
/// ```
/// use willow_conf::Env;
///
/// let env = Env::new().with_prefix("WILLOW_");
/// // Reads WILLOW_MODE, falling back to the default when unset.
/// let mode = env.str("MODE", "dev");
/// assert!(!mode.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env {
	prefix: Option<String>,
}

impl Env {
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix applied to every variable lookup.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn key(&self, name: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, name),
			None => name.to_string(),
		}
	}

	/// Read a string value, falling back to `default` when the variable is
	/// unset or empty.
	pub fn str(&self, name: &str, default: &str) -> String {
		match env::var(self.key(name)) {
			Ok(val) if !val.is_empty() => val,
			_ => default.to_string(),
		}
	}

	/// Read a string value, `None` when unset or empty.
	pub fn opt(&self, name: &str) -> Option<String> {
		env::var(self.key(name)).ok().filter(|v| !v.is_empty())
	}

	/// Read an unsigned integer, falling back to `default` when unset or
	/// unparseable.
	pub fn uint(&self, name: &str, default: u32) -> u32 {
		env::var(self.key(name))
			.ok()
			.and_then(|v| v.parse().ok())
			.unwrap_or(default)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_prefix_applied_to_lookups() {
		// SAFETY: test-local variable name, not read concurrently.
		unsafe { env::set_var("WILLOW_ENV_TEST_VALUE", "stage") };
		let env = Env::new().with_prefix("WILLOW_");
		assert_eq!(env.str("ENV_TEST_VALUE", "dev"), "stage");
		unsafe { env::remove_var("WILLOW_ENV_TEST_VALUE") };
	}

	#[test]
	fn test_defaults_for_missing_and_unparseable() {
		let env = Env::new().with_prefix("WILLOW_");
		assert_eq!(env.str("ENV_TEST_MISSING", "dev"), "dev");
		assert_eq!(env.uint("ENV_TEST_MISSING", 3), 3);
		assert!(env.opt("ENV_TEST_MISSING").is_none());

		unsafe { env::set_var("WILLOW_ENV_TEST_BAD_INT", "not-a-number") };
		assert_eq!(env.uint("ENV_TEST_BAD_INT", 2), 2);
		unsafe { env::remove_var("WILLOW_ENV_TEST_BAD_INT") };
	}
}
