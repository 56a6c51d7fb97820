use serde::{Serialize, Deserialize};

/// Relational operator of a versioned capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
	Less,
	LessEqual,
	Equal,
	GreaterEqual,
	Greater,
	NotEqual,
}

impl Relation {
	pub fn as_str(&self) -> &'static str {
		match self {
			Relation::Less => "<",
			Relation::LessEqual => "<=",
			Relation::Equal => "=",
			Relation::GreaterEqual => ">=",
			Relation::Greater => ">",
			Relation::NotEqual => "!=",
		}
	}
}

impl std::fmt::Display for Relation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Relation {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"<" => Ok(Relation::Less),
			"<=" => Ok(Relation::LessEqual),
			"=" | "==" => Ok(Relation::Equal),
			">=" => Ok(Relation::GreaterEqual),
			">" => Ok(Relation::Greater),
			"!=" => Ok(Relation::NotEqual),
			_ => Err(crate::Error::Parse(format!("unknown relation \"{}\"", s))),
		}
	}
}

/// A provides or requires expression such as `perl >= 5.10` or `libc.so.6()(64bit)`.
///
/// Searching only ever looks at the text. The name, relation and edition are split out for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Capability {
	text: String,
}

impl Capability {
	/// The text is kept as given, only the parsed accessors ignore surrounding whitespace.
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	fn parts(&self) -> (&str, Option<(Relation, &str)>) {
		let tokens: Vec<&str> = self.text.split_whitespace().collect();
		if let [name, op, edition] = tokens.as_slice() {
			if let Ok(rel) = op.parse::<Relation>() {
				return (*name, Some((rel, *edition)))
			}
		}
		(self.text.trim(), None)
	}

	pub fn name(&self) -> &str {
		self.parts().0
	}

	pub fn relation(&self) -> Option<Relation> {
		self.parts().1.map(|(rel, _)| rel)
	}

	pub fn edition(&self) -> Option<&str> {
		self.parts().1.map(|(_, edition)| edition)
	}
}

impl From<String> for Capability {
	fn from(value: String) -> Self { Self::new(value) }
}

impl From<&str> for Capability {
	fn from(value: &str) -> Self { Self::new(value) }
}

impl From<Capability> for String {
	fn from(value: Capability) -> Self { value.text }
}

impl AsRef<str> for Capability {
	fn as_ref(&self) -> &str {
		&self.text
	}
}

impl std::fmt::Display for Capability {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn versioned_capability_is_split() {
		let cap = Capability::new("perl >= 5.10");
		assert_eq!(cap.name(), "perl");
		assert_eq!(cap.relation(), Some(Relation::GreaterEqual));
		assert_eq!(cap.edition(), Some("5.10"));
	}

	#[test] fn bare_capability_is_all_name() { assert_eq!(Capability::new("libc.so.6()(64bit)").name(), "libc.so.6()(64bit)") }
	#[test] fn unknown_operator_is_not_split() { assert_eq!(Capability::new("foo ~> 1").relation(), None) }
	#[test] fn text_is_kept_verbatim() { assert_eq!(Capability::new("  web_browser \n").as_str(), "  web_browser \n") }
	#[test] fn name_ignores_surrounding_whitespace() { assert_eq!(Capability::new("  web_browser \n").name(), "web_browser") }
	#[test] fn serializes_as_plain_string() { assert_eq!(serde_json::to_string(&Capability::new("a = 1")).unwrap(), "\"a = 1\"") }
}
