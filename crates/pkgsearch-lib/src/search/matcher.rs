use super::*;
use super::pattern::Pattern;

/// Number of matches found, owned by whoever drives the search.
///
/// A filter pass resets it when it starts, [`matches()`] only ever increments it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchCount(usize);

impl MatchCount {
	pub fn get(&self) -> usize {
		self.0
	}

	pub fn increment(&mut self) {
		self.0 += 1;
	}

	pub fn reset(&mut self) {
		self.0 = 0;
	}
}

/// A [`FilterSpec`] compiled for repeated use.
#[derive(Debug, Clone)]
pub struct Matcher {
	/// `None` when there is no search text.
	pattern: Option<Pattern>,
	fields: SearchFields,
}

impl Matcher {
	/// # Errors
	/// - [`PatternError`] when the search text is not a valid wildcard or regular expression for the mode.
	pub fn new(spec: &FilterSpec) -> Result<Self, PatternError> {
		if !spec.has_search_text() {
			return Ok(Self { pattern: None, fields: spec.fields.clone() })
		}
		let pattern = pattern::compile(spec)?;
		log::trace!("Compiled {} search as {}", spec.mode, pattern.describe());
		Ok(Self {
			pattern: Some(pattern),
			fields: spec.fields.clone(),
		})
	}

	/// True when the spec had no search text. Such a matcher matches nothing.
	pub fn is_empty(&self) -> bool {
		self.pattern.is_none()
	}

	pub fn fields(&self) -> &SearchFields {
		&self.fields
	}

	/// Tests a single value, ignoring the field selection.
	pub fn is_value_match(&self, value: &str) -> bool {
		self.pattern.as_ref().is_some_and(|p| p.is_match(value))
	}

	/// Does any selected field of `record` match.
	pub fn is_match<R: PackageRecord + ?Sized>(&self, record: &R) -> bool {
		let Some(pattern) = &self.pattern else {
			return false
		};
		self.fields.iter().any(|field| match field {
			SearchField::Name => pattern.is_match(record.name()),
			SearchField::Summary => record.summary().is_some_and(|s| pattern.is_match(s)),
			SearchField::Description => record.description().is_some_and(|s| pattern.is_match(s)),
			SearchField::Keywords => record.keywords().iter().any(|k| pattern.is_match(k)),
			SearchField::Requires => record.requires().iter().any(|c| pattern.is_match(c.as_str())),
			SearchField::Provides => record.provides().iter().any(|c| pattern.is_match(c.as_str())),
			SearchField::FileList => record.file_list().iter().any(|f| pattern.is_match(f)),
		})
	}
}

/// Checks one record against `spec`, counting it in `counter` when it matches.
///
/// Compiles the pattern on every call; use a [`Matcher`] when checking many records.
pub fn matches<R: PackageRecord + ?Sized>(record: &R, spec: &FilterSpec, counter: &mut MatchCount) -> Result<bool, PatternError> {
	let matched = Matcher::new(spec)?.is_match(record);
	if matched {
		counter.increment();
	}
	Ok(matched)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pool::{Resolvable, KindData, PackageData};

	fn firefox() -> Resolvable {
		let data = PackageData {
			keywords: vec!["browser".into(), "web".into()],
			file_list: vec!["/usr/bin/firefox".into(), "/usr/lib64/firefox/libxul.so".into()],
			..Default::default()
		};
		Resolvable::new("MozillaFirefox", "118.0", KindData::Package(data))
			.with_summary("Mozilla Firefox Web Browser")
			.with_requires(["libc.so.6()(64bit)", "mozilla-nss >= 3.90"])
			.with_provides(["web_browser", "firefox = 118.0"])
	}

	fn check(spec: FilterSpec) -> bool {
		matches(&firefox(), &spec, &mut MatchCount::default()).unwrap()
	}

	#[test] fn contains_is_case_insensitive_by_default() { assert!(check(FilterSpec::new("firefox"))) }
	#[test] fn contains_respects_case_sensitivity() { assert!(!check(FilterSpec::new("firefox").with_case_sensitive(true).with_fields(SearchFields::none().with(SearchField::Name)))) }
	#[test] fn begins_with_is_a_prefix_test() { assert!(!check(FilterSpec::new("firefox").with_mode(SearchMode::BeginsWith).with_fields(SearchFields::none().with(SearchField::Name)))) }
	#[test] fn exact_needs_whole_value() { assert!(check(FilterSpec::new("web").with_mode(SearchMode::ExactMatch))) }
	#[test] fn keywords_match_any_element() { assert!(check(FilterSpec::new("browser").with_mode(SearchMode::ExactMatch).with_fields(SearchFields::none().with(SearchField::Keywords)))) }
	#[test] fn unselected_fields_are_ignored() { assert!(!check(FilterSpec::new("libxul"))) }
	#[test] fn file_list_is_searched_when_selected() { assert!(check(FilterSpec::new("libxul").with_field(SearchField::FileList))) }
	#[test] fn requires_text_is_matched() { assert!(check(FilterSpec::new("mozilla-nss >=").with_fields(SearchFields::none().with(SearchField::Requires)))) }
	#[test] fn provides_text_is_matched() { assert!(check(FilterSpec::new("^firefox = ").with_mode(SearchMode::UseRegExp).with_fields(SearchFields::none().with(SearchField::Provides)))) }
	#[test] fn no_fields_never_match() { assert!(!check(FilterSpec::new("firefox").with_fields(SearchFields::none()))) }
	#[test] fn empty_text_never_matches() { assert!(!check(FilterSpec::new("").with_fields(SearchFields::all()))) }
	#[test] fn missing_description_never_matches() { assert!(!check(FilterSpec::new("*").with_mode(SearchMode::UseWildcards).with_fields(SearchFields::none().with(SearchField::Description)))) }

	#[test]
	fn counter_counts_matches_only() {
		let mut counter = MatchCount::default();
		let ff = firefox();
		matches(&ff, &FilterSpec::new("firefox"), &mut counter).unwrap();
		matches(&ff, &FilterSpec::new("chromium"), &mut counter).unwrap();
		matches(&ff, &FilterSpec::new("browser"), &mut counter).unwrap();
		assert_eq!(counter.get(), 2);
	}

	#[test]
	fn invalid_regex_is_an_error() {
		let mut counter = MatchCount::default();
		assert!(matches(&firefox(), &FilterSpec::new("(firefox").with_mode(SearchMode::UseRegExp), &mut counter).is_err());
		assert_eq!(counter.get(), 0);
	}

	#[test]
	fn empty_matcher_reports_empty() {
		let matcher = Matcher::new(&FilterSpec::new("")).unwrap();
		assert!(matcher.is_empty());
		assert!(!matcher.is_value_match(""));
	}
}
