use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

/// How the search text is compared against field values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
	#[default]
	#[serde(rename = "contains")]
	Contains,
	#[serde(rename = "begins-with")]
	BeginsWith,
	#[serde(rename = "exact")]
	ExactMatch,
	/// `*` and `?` glob, matched against the whole value.
	#[serde(rename = "wildcard")]
	UseWildcards,
	/// Regular expression searched anywhere in the value.
	#[serde(rename = "regex")]
	UseRegExp,
}

impl SearchMode {
	pub const ALL: [SearchMode; 5] = [SearchMode::Contains, SearchMode::BeginsWith, SearchMode::ExactMatch, SearchMode::UseWildcards, SearchMode::UseRegExp];

	pub fn as_str(&self) -> &'static str {
		match self {
			SearchMode::Contains => "contains",
			SearchMode::BeginsWith => "begins-with",
			SearchMode::ExactMatch => "exact",
			SearchMode::UseWildcards => "wildcard",
			SearchMode::UseRegExp => "regex",
		}
	}
}

impl std::fmt::Display for SearchMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for SearchMode {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"contains" => Ok(SearchMode::Contains),
			"begins-with" | "prefix" => Ok(SearchMode::BeginsWith),
			"exact" | "exact-match" => Ok(SearchMode::ExactMatch),
			"wildcard" | "wildcards" | "glob" => Ok(SearchMode::UseWildcards),
			"regex" | "regexp" => Ok(SearchMode::UseRegExp),
			other => Err(crate::Error::Parse(format!("unknown search mode \"{}\"", other))),
		}
	}
}

/// A record field the search text can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchField {
	Name,
	Keywords,
	Summary,
	Description,
	Requires,
	Provides,
	FileList,
}

impl SearchField {
	pub const ALL: [SearchField; 7] = [
		SearchField::Name,
		SearchField::Keywords,
		SearchField::Summary,
		SearchField::Description,
		SearchField::Requires,
		SearchField::Provides,
		SearchField::FileList,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			SearchField::Name => "name",
			SearchField::Keywords => "keywords",
			SearchField::Summary => "summary",
			SearchField::Description => "description",
			SearchField::Requires => "requires",
			SearchField::Provides => "provides",
			SearchField::FileList => "file-list",
		}
	}
}

impl std::fmt::Display for SearchField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for SearchField {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		SearchField::ALL.into_iter()
			.find(|f| f.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| crate::Error::Parse(format!("unknown search field \"{}\"", s)))
	}
}

/// The set of fields a search looks at.
///
/// Defaults to name, keywords and summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchFields(BTreeSet<SearchField>);

impl Default for SearchFields {
	fn default() -> Self {
		Self::none()
			.with(SearchField::Name)
			.with(SearchField::Keywords)
			.with(SearchField::Summary)
	}
}

impl SearchFields {
	pub fn none() -> Self {
		Self(BTreeSet::new())
	}

	pub fn all() -> Self {
		SearchField::ALL.into_iter().collect()
	}

	pub fn with(mut self, field: SearchField) -> Self {
		self.0.insert(field);
		self
	}

	pub fn insert(&mut self, field: SearchField) -> bool {
		self.0.insert(field)
	}

	pub fn remove(&mut self, field: SearchField) -> bool {
		self.0.remove(&field)
	}

	pub fn contains(&self, field: SearchField) -> bool {
		self.0.contains(&field)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = SearchField> + '_ {
		self.0.iter().copied()
	}
}

impl FromIterator<SearchField> for SearchFields {
	fn from_iter<T: IntoIterator<Item = SearchField>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Parses a comma separated list such as `name,summary`. `all` selects every field.
impl std::str::FromStr for SearchFields {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.trim().eq_ignore_ascii_case("all") {
			return Ok(Self::all())
		}
		s.split(',')
			.filter(|f| !f.trim().is_empty())
			.map(str::parse::<SearchField>)
			.collect()
	}
}

impl std::fmt::Display for SearchFields {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let names: Vec<&str> = self.0.iter().map(SearchField::as_str).collect();
		f.write_str(&names.join(","))
	}
}

/// What to search for and where.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
	pub search_text: String,
	pub mode: SearchMode,
	pub case_sensitive: bool,
	pub fields: SearchFields,
}

impl FilterSpec {
	pub fn new(search_text: impl Into<String>) -> Self {
		Self {
			search_text: search_text.into(),
			..Default::default()
		}
	}

	pub fn with_mode(mut self, mode: SearchMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
		self.case_sensitive = case_sensitive;
		self
	}

	pub fn with_fields(mut self, fields: SearchFields) -> Self {
		self.fields = fields;
		self
	}

	pub fn with_field(mut self, field: SearchField) -> Self {
		self.fields.insert(field);
		self
	}

	/// An empty search text means no filtering at all, not "match everything".
	pub fn has_search_text(&self) -> bool {
		!self.search_text.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test] fn default_fields() { assert_eq!(SearchFields::default().to_string(), "name,keywords,summary") }
	#[test] fn fields_parse_list() { assert_eq!("summary, file-list".parse::<SearchFields>().unwrap(), SearchFields::none().with(SearchField::Summary).with(SearchField::FileList)) }
	#[test] fn fields_parse_all() { assert_eq!("all".parse::<SearchFields>().unwrap().len(), 7) }
	#[test] fn fields_reject_unknown() { assert!("name,size".parse::<SearchFields>().is_err()) }
	#[test] fn mode_round_trips_through_display() { assert!(SearchMode::ALL.iter().all(|m| m.to_string().parse::<SearchMode>().unwrap() == *m)) }
	#[test] fn mode_accepts_aliases() { assert_eq!("RegExp".parse::<SearchMode>().unwrap(), SearchMode::UseRegExp) }
	#[test] fn mode_serializes_like_display() { assert_eq!(serde_json::to_string(&SearchMode::BeginsWith).unwrap(), "\"begins-with\"") }
	#[test] fn default_spec_is_case_insensitive_contains() { assert_eq!((FilterSpec::default().mode, FilterSpec::default().case_sensitive), (SearchMode::Contains, false)) }
	#[test] fn empty_text_has_no_search_text() { assert!(!FilterSpec::new("").has_search_text()) }
}
