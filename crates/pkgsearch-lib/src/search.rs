//! # Package search
//!
//! Matching of package records against a user's search settings.
//!
//! # Usage
//! 1. Describe the search with a [`FilterSpec`].
//! 1. For a single record call [`matches()`], or compile a [`Matcher`] once and call [`Matcher::is_match()`].
//! 1. For a whole pool use [`filter_pass()`] with a [`FilterListener`] to get notified of the
//! start, every match and the end of the pass.
//! 1. [`SearchFilter`] bundles a spec with its [`SearchHistory`] and match count, the way a search view uses them.

mod record;
pub use record::PackageRecord;

mod spec;
pub use spec::FilterSpec;
pub use spec::SearchMode;
pub use spec::SearchField;
pub use spec::SearchFields;

mod pattern;
pub use pattern::PatternError;

mod matcher;
pub use matcher::Matcher;
pub use matcher::MatchCount;
pub use matcher::matches;

mod iterator;
pub use iterator::SearchMatches;
pub use iterator::SearchMatchesExt;

mod pass;
pub use pass::filter_pass;
pub use pass::FilterPass;
pub use pass::PassState;
pub use pass::FilterListener;
pub use pass::FilterEvent;
pub use pass::EventLog;
pub use pass::EMPTY_SEARCH_MESSAGE;
pub use pass::NO_RESULTS_MESSAGE;

mod history;
pub use history::SearchHistory;
pub use history::DEFAULT_HISTORY_LIMIT;

mod filter;
pub use filter::SearchFilter;
