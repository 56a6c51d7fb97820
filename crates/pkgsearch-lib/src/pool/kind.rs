use serde::{Serialize, Deserialize};

/// The type of a resolvable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
	/// A normal installable package.
	#[default] Package,
	/// A group of packages installed together for one purpose.
	Pattern,
	/// An update for already installed packages.
	Patch,
	/// A distribution or add-on product.
	Product,
}

impl Kind {
	pub const ALL: [Kind; 4] = [Kind::Package, Kind::Pattern, Kind::Patch, Kind::Product];

	pub fn as_str(&self) -> &'static str {
		match self {
			Kind::Package => "package",
			Kind::Pattern => "pattern",
			Kind::Patch => "patch",
			Kind::Product => "product",
		}
	}
}

impl std::fmt::Display for Kind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Kind {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Kind::ALL.into_iter()
			.find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| crate::Error::Parse(format!("unknown resolvable kind \"{}\"", s)))
	}
}

/// Kind specific data of a resolvable.
///
/// Use `match` or the `as_*` accessors to get at the data of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum KindData {
	Package(PackageData),
	Pattern(PatternData),
	Patch(PatchData),
	Product(ProductData),
}

impl Default for KindData {
	fn default() -> Self {
		KindData::Package(PackageData::default())
	}
}

impl KindData {
	pub fn kind(&self) -> Kind {
		match self {
			KindData::Package(_) => Kind::Package,
			KindData::Pattern(_) => Kind::Pattern,
			KindData::Patch(_) => Kind::Patch,
			KindData::Product(_) => Kind::Product,
		}
	}

	pub fn as_package(&self) -> Option<&PackageData> {
		match self {
			KindData::Package(p) => Some(p),
			_ => None,
		}
	}

	pub fn as_pattern(&self) -> Option<&PatternData> {
		match self {
			KindData::Pattern(p) => Some(p),
			_ => None,
		}
	}

	pub fn as_patch(&self) -> Option<&PatchData> {
		match self {
			KindData::Patch(p) => Some(p),
			_ => None,
		}
	}

	pub fn as_product(&self) -> Option<&ProductData> {
		match self {
			KindData::Product(p) => Some(p),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageData {
	pub keywords: Vec<String>,
	pub file_list: Vec<String>,
	pub group: Option<String>,
	pub install_size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternData {
	pub category: Option<String>,
	pub user_visible: bool,
	/// Sort key within the category.
	pub order: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchData {
	pub category: PatchCategory,
	/// Requires user interaction such as accepting a license or a reboot.
	pub interactive: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchCategory {
	Security,
	Recommended,
	Optional,
	Feature,
	Document,
	#[default] Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductData {
	pub short_name: Option<String>,
	pub vendor: Option<String>,
}
