//! Application settings: run mode, debug level, and asset resolution.

use crate::env::Env;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use willow_core::{Error, Result};

/// The application run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
	#[default]
	Dev,
	Stage,
	Prod,
	Test,
}

impl FromStr for Mode {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"dev" => Ok(Mode::Dev),
			"stage" => Ok(Mode::Stage),
			"prod" => Ok(Mode::Prod),
			"test" => Ok(Mode::Test),
			other => Err(Error::Config(format!("unknown mode: {}", other))),
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Mode::Dev => "dev",
			Mode::Stage => "stage",
			Mode::Prod => "prod",
			Mode::Test => "test",
		};
		f.write_str(name)
	}
}

/// Settings assembled once at startup.
///
/// # Examples
///
/// ```
/// use willow_conf::{Mode, Settings};
///
/// let settings = Settings::default().with_mode(Mode::Prod);
/// assert!(settings.is_deployed());
/// assert_eq!(settings.asset("app.js", false), "/assets/dist/app.js");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
	mode: Mode,
	/// Debug verbosity, 0 (errors only) through 3 (everything). Mirrors
	/// the host engine's DEBUG level; 0 also suppresses stack traces in
	/// rendered error reports.
	debug: u32,
	/// Base URL prefix the application is mounted under.
	base_url: String,
	assets_path: String,
	logs_dir: String,
	log_name: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			mode: Mode::Dev,
			debug: 3,
			base_url: String::new(),
			assets_path: "/assets".to_string(),
			logs_dir: "logs".to_string(),
			log_name: "app.log".to_string(),
		}
	}
}

impl Settings {
	/// Load settings from `WILLOW_`-prefixed environment variables,
	/// falling back to defaults for anything unset.
	pub fn from_env() -> Result<Self> {
		let env = Env::new().with_prefix("WILLOW_");
		let mode = match env.opt("MODE") {
			Some(raw) => raw.parse()?,
			None => Mode::Dev,
		};
		Ok(Self {
			mode,
			debug: env.uint("DEBUG", 3),
			base_url: env.str("BASE_URL", ""),
			assets_path: env.str("ASSETS_PATH", "/assets"),
			logs_dir: env.str("LOGS_DIR", "logs"),
			log_name: env.str("LOG_NAME", "app.log"),
		})
	}

	/// Load settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let raw = std::fs::read_to_string(path)?;
		toml::from_str(&raw).map_err(|e| Error::Config(format!("invalid settings file: {}", e)))
	}

	pub fn with_mode(mut self, mode: Mode) -> Self {
		self.mode = mode;
		self
	}

	pub fn with_debug(mut self, debug: u32) -> Self {
		self.debug = debug;
		self
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn debug(&self) -> u32 {
		self.debug
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn logs_dir(&self) -> &str {
		&self.logs_dir
	}

	pub fn log_name(&self) -> &str {
		&self.log_name
	}

	pub fn is_dev(&self) -> bool {
		self.mode == Mode::Dev
	}

	pub fn is_stage(&self) -> bool {
		self.mode == Mode::Stage
	}

	pub fn is_prod(&self) -> bool {
		self.mode == Mode::Prod
	}

	pub fn is_test(&self) -> bool {
		self.mode == Mode::Test
	}

	/// True when running on a host (stage or prod).
	pub fn is_deployed(&self) -> bool {
		self.is_stage() || self.is_prod()
	}

	/// Resolve the path to a web asset. Deployed applications serve the
	/// minified `dist/` variant of js and css assets; `dist` forces it.
	pub fn asset(&self, name: &str, dist: bool) -> String {
		let minified =
			dist || (self.is_deployed() && (name.ends_with("js") || name.ends_with("css")));
		if minified {
			format!("{}{}/dist/{}", self.base_url, self.assets_path, name)
		} else {
			format!("{}{}/{}", self.base_url, self.assets_path, name)
		}
	}
}
