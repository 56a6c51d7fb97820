//! Translation of a [`FilterSpec`] into a compiled pattern: a direct text comparison or a regular expression.

use std::borrow::Cow;
use regex::{Regex, RegexBuilder};

use super::{FilterSpec, SearchMode};

/// The search text can't be turned into a usable pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
	#[error("invalid regular expression \"{pattern}\": {reason}")]
	InvalidRegex { pattern: String, reason: String },
	#[error("invalid wildcard pattern \"{pattern}\": {reason}")]
	InvalidWildcard { pattern: String, reason: String },
}

impl PatternError {
	pub fn pattern(&self) -> &str {
		match self {
			PatternError::InvalidRegex { pattern, .. } | PatternError::InvalidWildcard { pattern, .. } => pattern,
		}
	}
}

/// How a literal search text is compared against a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Comparison {
	Substring,
	Prefix,
	Whole,
}

/// A compiled search text.
///
/// Literal modes are compared directly so any text, however long, is a valid search.
#[derive(Debug, Clone)]
pub(crate) enum Pattern {
	Literal {
		comparison: Comparison,
		/// Already case folded when `case_sensitive` is false.
		text: String,
		case_sensitive: bool,
	},
	Regex(Regex),
}

impl Pattern {
	pub(crate) fn is_match(&self, value: &str) -> bool {
		match self {
			Pattern::Regex(re) => re.is_match(value),
			Pattern::Literal { comparison, text, case_sensitive } => {
				let value = if *case_sensitive { Cow::Borrowed(value) } else { Cow::Owned(fold_case(value)) };
				match comparison {
					Comparison::Substring => value.contains(text.as_str()),
					Comparison::Prefix => value.starts_with(text.as_str()),
					Comparison::Whole => *value == **text,
				}
			},
		}
	}

	/// Short description for logging.
	pub(crate) fn describe(&self) -> String {
		match self {
			Pattern::Regex(re) => format!("/{}/", re.as_str()),
			Pattern::Literal { comparison, text, .. } => format!("{:?} of {} chars", comparison, text.chars().count()),
		}
	}
}

/// Lower cases one character at a time so that folding never depends on the surrounding text.
fn fold_case(s: &str) -> String {
	s.chars().flat_map(char::to_lowercase).collect()
}

/// Compiles the search text of `spec` according to its mode and case sensitivity.
///
/// Literal modes never fail, only [`UseWildcards`](SearchMode::UseWildcards) and
/// [`UseRegExp`](SearchMode::UseRegExp) can.
pub(crate) fn compile(spec: &FilterSpec) -> Result<Pattern, PatternError> {
	let text = spec.search_text.as_str();
	let comparison = match spec.mode {
		SearchMode::Contains => Comparison::Substring,
		SearchMode::BeginsWith => Comparison::Prefix,
		SearchMode::ExactMatch => Comparison::Whole,
		SearchMode::UseWildcards => return compile_regex(spec, &wildcard_to_regex(text)?).map(Pattern::Regex),
		SearchMode::UseRegExp => return compile_regex(spec, text).map(Pattern::Regex),
	};
	Ok(Pattern::Literal {
		comparison,
		text: if spec.case_sensitive { text.to_string() } else { fold_case(text) },
		case_sensitive: spec.case_sensitive,
	})
}

fn compile_regex(spec: &FilterSpec, source: &str) -> Result<Regex, PatternError> {
	RegexBuilder::new(source)
		.case_insensitive(!spec.case_sensitive)
		.dot_matches_new_line(spec.mode == SearchMode::UseWildcards)
		.build()
		.map_err(|e| {
			let pattern = spec.search_text.clone();
			let reason = e.to_string();
			match spec.mode {
				SearchMode::UseWildcards => PatternError::InvalidWildcard { pattern, reason },
				_ => PatternError::InvalidRegex { pattern, reason },
			}
		})
}

fn escape_char(c: char) -> String {
	regex::escape(c.encode_utf8(&mut [0; 4]))
}

/// Translates a glob into an anchored regular expression.
///
/// `*` is any run of characters, `?` at most one character, `[...]` and `[!...]` character classes
/// and `\` makes the next character literal.
fn wildcard_to_regex(pattern: &str) -> Result<String, PatternError> {
	let invalid = |reason: &str| PatternError::InvalidWildcard { pattern: pattern.to_string(), reason: reason.to_string() };

	let mut out = String::with_capacity(pattern.len() * 2 + 2);
	out.push('^');

	let mut chars = pattern.chars().peekable();
	while let Some(c) = chars.next() {
		match c {
			'*' => out.push_str(".*"),
			'?' => out.push_str(".?"),
			'\\' => match chars.next() {
				Some(escaped) => out.push_str(&escape_char(escaped)),
				None => return Err(invalid("trailing escape character")),
			},
			'[' => {
				out.push('[');
				if matches!(chars.peek(), Some('!') | Some('^')) {
					chars.next();
					out.push('^');
				}
				let mut members = 0;
				let mut closed = false;
				while let Some(c) = chars.next() {
					match c {
						/* A leading `]` is a member, not the end of the class */
						']' if members > 0 => { closed = true; break; },
						'\\' => match chars.next() {
							Some(escaped) => out.push_str(&escape_char(escaped)),
							None => return Err(invalid("trailing escape character")),
						},
						'-' if members > 0 && chars.peek().is_some_and(|n| *n != ']') => {
							out.push('-');
							continue;
						},
						c => out.push_str(&escape_char(c)),
					}
					members += 1;
				}
				if !closed {
					return Err(invalid("unclosed character class"))
				}
				out.push(']');
			},
			c => out.push_str(&escape_char(c)),
		}
	}

	out.push('$');
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn wildcard(text: &str) -> Result<Pattern, PatternError> {
		compile(&FilterSpec::new(text).with_mode(SearchMode::UseWildcards).with_case_sensitive(true))
	}

	#[test] fn star_is_any_run() { assert_eq!(wildcard_to_regex("fire*").unwrap(), "^fire.*$") }
	#[test] fn question_mark_is_optional_char() { assert_eq!(wildcard_to_regex("a?c").unwrap(), "^a.?c$") }
	#[test] fn dots_are_literal() { assert!(!wildcard("lib?.so").unwrap().is_match("libXso")) }
	#[test] fn class_matches_members() { assert!(wildcard("python3[0-9]").unwrap().is_match("python39")) }
	#[test] fn negated_class() { assert!(!wildcard("python3[!0-9]").unwrap().is_match("python39")) }
	#[test] fn leading_bracket_is_member() { assert!(wildcard("a[]]").unwrap().is_match("a]")) }
	#[test] fn escaped_star_is_literal() { assert!(!wildcard(r"a\*").unwrap().is_match("ab")) }
	#[test] fn unclosed_class_fails() { assert!(matches!(wildcard("lib[abc"), Err(PatternError::InvalidWildcard { .. }))) }
	#[test] fn empty_class_fails() { assert!(wildcard("a[]").is_err()) }
	#[test] fn trailing_escape_fails() { assert!(wildcard("abc\\").is_err()) }
	#[test] fn reversed_range_fails() { assert!(matches!(wildcard("[z-a]"), Err(PatternError::InvalidWildcard { .. }))) }
	#[test] fn star_crosses_lines() { assert!(wildcard("a*b").unwrap().is_match("a\nb")) }

	#[test]
	fn regex_errors_keep_the_pattern() {
		let err = compile(&FilterSpec::new("lib(foo").with_mode(SearchMode::UseRegExp)).unwrap_err();
		assert_eq!(err.pattern(), "lib(foo");
		assert!(matches!(err, PatternError::InvalidRegex { .. }));
	}

	#[test]
	fn literal_modes_escape_metacharacters() {
		let pattern = compile(&FilterSpec::new("c++").with_mode(SearchMode::ExactMatch)).unwrap();
		assert!(pattern.is_match("C++"));
		assert!(!pattern.is_match("c++-devel"));
	}

	#[test] fn folding_is_per_character() { assert!(compile(&FilterSpec::new("Σ")).unwrap().is_match("ΑΣ")) }
	#[test] fn literal_case_sensitive_prefix() { assert!(!compile(&FilterSpec::new("Lib").with_mode(SearchMode::BeginsWith).with_case_sensitive(true)).unwrap().is_match("libfoo")) }
}
