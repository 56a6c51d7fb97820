//! User configuration.
//!
//! Holds the defaults a new search starts from and where per-user state such as the search history is kept.
//! Stored as JSON in `$XDG_CONFIG_HOME/pkgsearch/config.json`.

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::search::{FilterSpec, SearchMode, SearchFields, DEFAULT_HISTORY_LIMIT};

const APP_DIR: &str = "pkgsearch";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	data_dir: PathBuf,
	default_mode: SearchMode,
	default_case_sensitive: bool,
	default_fields: SearchFields,
	history_limit: usize,
}

/// Resolves a base directory from an XDG variable, falling back to `$HOME/<fallback>`.
fn base_dir(var: &str, fallback: &str) -> PathBuf {
	#[cfg(target_os = "windows")]
	let home = std::env::var_os("APPDATA").map(PathBuf::from);

	#[cfg(not(target_os = "windows"))]
	let home = std::env::var_os("HOME").map(|h| PathBuf::from(h).join(fallback));

	std::env::var_os(var)
		.filter(|v| !v.is_empty())
		.map(PathBuf::from)
		.or(home)
		.unwrap_or_else(|| PathBuf::from("."))
}

impl Default for Config {
	fn default() -> Self {
		Self {
			data_dir: base_dir("XDG_DATA_HOME", ".local/share").join(APP_DIR),
			default_mode: SearchMode::default(),
			default_case_sensitive: false,
			default_fields: SearchFields::default(),
			history_limit: DEFAULT_HISTORY_LIMIT,
		}
	}
}

impl Config {
	/// Where [`load_from_disk()`](Config::load_from_disk()) looks for the config file.
	pub fn config_path() -> PathBuf {
		base_dir("XDG_CONFIG_HOME", ".config").join(APP_DIR).join(CONFIG_FILE)
	}

	/// Loads the config from [`config_path()`](Config::config_path()).
	/// # Errors
	/// - [`IO`](crate::Error::IO) when the file is missing or unreadable.
	/// - [`SerdeJSON`](crate::Error::SerdeJSON) when the file is not a valid config.
	pub fn load_from_disk() -> crate::Result<Self> {
		Self::load_from_file(Self::config_path())
	}

	pub fn load_from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
		let path = path.as_ref();
		log::debug!("Loading config from {}", path.display());
		let file = std::fs::File::open(path)?;
		let config = serde_json::from_reader(std::io::BufReader::new(file))?;
		Ok(config)
	}

	pub fn save_to_file(&self, path: impl AsRef<Path>) -> crate::Result<()> {
		let path = path.as_ref();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		let file = std::fs::File::create(path)?;
		serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
		log::debug!("Saved config to {}", path.display());
		Ok(())
	}

	/// Builds a filter for `search_text` using the configured defaults.
	pub fn filter_spec(&self, search_text: impl Into<String>) -> FilterSpec {
		FilterSpec::new(search_text)
			.with_mode(self.default_mode)
			.with_case_sensitive(self.default_case_sensitive)
			.with_fields(self.default_fields.clone())
	}

	pub fn data_dir(&self) -> &PathBuf {
		&self.data_dir
	}
	/// returns if the directory is valid or not.
	pub fn set_data_dir(&mut self, data_dir: PathBuf) -> bool {
		if data_dir.is_dir() {
			self.data_dir = data_dir;
			true
		} else {
			false
		}
	}

	pub fn default_mode(&self) -> SearchMode {
		self.default_mode
	}
	pub fn set_default_mode(&mut self, mode: SearchMode) {
		self.default_mode = mode;
	}

	pub fn default_case_sensitive(&self) -> bool {
		self.default_case_sensitive
	}
	pub fn set_default_case_sensitive(&mut self, case_sensitive: bool) {
		self.default_case_sensitive = case_sensitive;
	}

	pub fn default_fields(&self) -> &SearchFields {
		&self.default_fields
	}
	pub fn set_default_fields(&mut self, fields: SearchFields) {
		self.default_fields = fields;
	}

	pub fn history_limit(&self) -> usize {
		self.history_limit
	}
	pub fn set_history_limit(&mut self, history_limit: usize) {
		self.history_limit = history_limit;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::SearchField;

	#[test]
	fn filter_spec_uses_defaults() {
		let mut config = Config::default();
		config.set_default_mode(SearchMode::UseWildcards);
		config.set_default_case_sensitive(true);
		config.set_default_fields(SearchFields::none().with(SearchField::Provides));

		let spec = config.filter_spec("lib*");
		assert_eq!(spec.search_text, "lib*");
		assert_eq!(spec.mode, SearchMode::UseWildcards);
		assert!(spec.case_sensitive);
		assert!(spec.fields.contains(SearchField::Provides));
		assert!(!spec.fields.contains(SearchField::Name));
	}

	#[test] fn set_data_dir_rejects_missing_directory() { assert!(!Config::default().set_data_dir(PathBuf::from("/nonexistent/pkgsearch/data"))) }
	#[test] fn missing_fields_use_defaults() { assert_eq!(serde_json::from_str::<Config>(r#"{"history_limit": 3}"#).unwrap().default_mode(), SearchMode::Contains) }
}
