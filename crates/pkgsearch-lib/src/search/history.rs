use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

const HISTORY_FILE: &str = "history.json";

/// Number of search texts kept unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Previously used search texts, most recent first.
///
/// Pushing a text that is already present moves it to the front instead of storing it twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
	limit: usize,
	entries: VecDeque<String>,
}

impl Default for SearchHistory {
	fn default() -> Self {
		Self::new(DEFAULT_HISTORY_LIMIT)
	}
}

impl SearchHistory {
	pub fn new(limit: usize) -> Self {
		Self {
			limit,
			entries: VecDeque::with_capacity(limit),
		}
	}

	/// Records `text`. Returns false when the text was blank and nothing was recorded.
	pub fn push(&mut self, text: &str) -> bool {
		let text = text.trim();
		if text.is_empty() || self.limit == 0 {
			return false
		}
		if let Some(i) = self.entries.iter().position(|e| e == text) {
			self.entries.remove(i);
		}
		self.entries.push_front(text.to_string());
		self.entries.truncate(self.limit);
		true
	}

	pub fn entries(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(String::as_str)
	}

	pub fn latest(&self) -> Option<&str> {
		self.entries.front().map(String::as_str)
	}

	pub fn limit(&self) -> usize {
		self.limit
	}

	/// Drops the oldest entries if there are more than `limit`.
	pub fn set_limit(&mut self, limit: usize) {
		self.limit = limit;
		self.entries.truncate(limit);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Loads the history from the data directory. A missing file is an empty history.
	///
	/// The limit always comes from `config`.
	pub fn load_from_disk(config: &crate::Config) -> crate::Result<Self> {
		let path = config.data_dir().join(HISTORY_FILE);
		let file = match std::fs::File::open(&path) {
			Ok(f) => f,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				log::debug!("No search history at {}", path.display());
				return Ok(Self::new(config.history_limit()))
			},
			Err(e) => return Err(e.into()),
		};
		let mut history: SearchHistory = serde_json::from_reader(std::io::BufReader::new(file))?;
		history.set_limit(config.history_limit());
		Ok(history)
	}

	pub fn save_to_disk(&self, config: &crate::Config) -> crate::Result<()> {
		std::fs::create_dir_all(config.data_dir())?;
		let path = config.data_dir().join(HISTORY_FILE);
		let file = std::fs::File::create(&path)?;
		serde_json::to_writer(std::io::BufWriter::new(file), self)?;
		log::trace!("Saved {} history entries to {}", self.len(), path.display());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeated_text_moves_to_front() {
		let mut history = SearchHistory::new(5);
		history.push("vim");
		history.push("emacs");
		history.push("vim");
		assert_eq!(history.entries().collect::<Vec<_>>(), ["vim", "emacs"]);
	}

	#[test]
	fn oldest_entries_are_dropped() {
		let mut history = SearchHistory::new(2);
		for text in ["a", "b", "c"] {
			history.push(text);
		}
		assert_eq!(history.entries().collect::<Vec<_>>(), ["c", "b"]);
	}

	#[test] fn default_limit_matches_config() { assert_eq!(SearchHistory::default().limit(), crate::Config::default().history_limit()) }
	#[test] fn blank_text_is_ignored() { assert!(!SearchHistory::new(3).push("  ")) }
	#[test] fn text_is_trimmed() { let mut h = SearchHistory::new(3); h.push(" vim "); assert_eq!(h.latest(), Some("vim")) }
	#[test] fn zero_limit_records_nothing() { let mut h = SearchHistory::new(0); h.push("vim"); assert!(h.is_empty()) }
	#[test] fn lowering_limit_truncates() { let mut h = SearchHistory::new(3); h.push("a"); h.push("b"); h.set_limit(1); assert_eq!(h.entries().collect::<Vec<_>>(), ["b"]) }
}
