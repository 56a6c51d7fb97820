use super::*;

/// The state behind a package search view: current settings, previous search texts and the
/// number of matches of the last pass.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
	spec: FilterSpec,
	history: SearchHistory,
	match_count: MatchCount,
}

impl SearchFilter {
	pub fn new(spec: FilterSpec, history: SearchHistory) -> Self {
		Self {
			spec,
			history,
			match_count: MatchCount::default(),
		}
	}

	/// Empty search with the configured defaults and an empty history.
	pub fn from_config(config: &crate::Config) -> Self {
		Self::new(config.filter_spec(""), SearchHistory::new(config.history_limit()))
	}

	pub fn spec(&self) -> &FilterSpec {
		&self.spec
	}

	pub fn spec_mut(&mut self) -> &mut FilterSpec {
		&mut self.spec
	}

	pub fn set_search_text(&mut self, text: impl Into<String>) {
		self.spec.search_text = text.into();
	}

	pub fn history(&self) -> &SearchHistory {
		&self.history
	}

	pub fn history_mut(&mut self) -> &mut SearchHistory {
		&mut self.history
	}

	pub fn match_count(&self) -> usize {
		self.match_count.get()
	}

	/// Checks a single record against the current settings. Matches add to the match count.
	pub fn check<R: PackageRecord + ?Sized>(&mut self, record: &R) -> crate::Result<bool> {
		Ok(matches(record, &self.spec, &mut self.match_count)?)
	}

	/// Runs a complete pass over `records`, remembering the search text.
	/// Returns the number of matches.
	/// # Errors
	/// - [`Pattern`](crate::Error::Pattern) when the search text is invalid for the mode. `listener` is not called.
	pub fn filter<I, L>(&mut self, records: I, listener: &mut L) -> crate::Result<usize>
	where
		I: IntoIterator,
		I::Item: PackageRecord,
		L: FilterListener<I::Item>,
	{
		self.history.push(&self.spec.search_text);
		let pass = filter_pass(records, &self.spec, &mut self.match_count, listener)?;
		Ok(pass.run())
	}

	/// [`filter()`](SearchFilter::filter) if the view is `visible`, otherwise does nothing and returns `None`.
	pub fn filter_if<I, L>(&mut self, visible: bool, records: I, listener: &mut L) -> crate::Result<Option<usize>>
	where
		I: IntoIterator,
		I::Item: PackageRecord,
		L: FilterListener<I::Item>,
	{
		if !visible {
			return Ok(None)
		}
		self.filter(records, listener).map(Some)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pool::Resolvable;

	#[test]
	fn filter_records_history_and_count() {
		let records = vec![Resolvable::package("vim", "9"), Resolvable::package("gvim", "9")];
		let mut filter = SearchFilter::new(FilterSpec::new("vim"), SearchHistory::new(5));
		assert_eq!(filter.filter(&records, &mut ()).unwrap(), 2);
		assert_eq!(filter.match_count(), 2);
		assert_eq!(filter.history().latest(), Some("vim"));
	}

	#[test]
	fn hidden_view_does_not_filter() {
		let records = vec![Resolvable::package("vim", "9")];
		let mut filter = SearchFilter::new(FilterSpec::new("vim"), SearchHistory::new(5));
		assert_eq!(filter.filter_if(false, &records, &mut ()).unwrap(), None);
		assert!(filter.history().is_empty());
	}

	#[test]
	fn check_adds_to_count() {
		let mut filter = SearchFilter::default();
		filter.set_search_text("vim");
		assert!(filter.check(&Resolvable::package("vim", "9")).unwrap());
		assert!(!filter.check(&Resolvable::package("nano", "7")).unwrap());
		assert_eq!(filter.match_count(), 1);
	}
}
