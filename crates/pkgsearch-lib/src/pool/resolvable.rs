use serde::{Serialize, Deserialize};

use super::*;

/// A single installable unit: a package, pattern, patch or product in one version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolvable {
	pub name: String,
	#[serde(default)]
	pub version: String,
	#[serde(default)]
	pub arch: String,
	#[serde(default)]
	pub summary: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub requires: Vec<Capability>,
	#[serde(default)]
	pub provides: Vec<Capability>,
	/// Alias of the repository this resolvable comes from. `None` for installed-only objects.
	#[serde(default)]
	pub repository: Option<String>,
	#[serde(default)]
	pub data: KindData,
}

impl Resolvable {
	pub fn new(name: impl Into<String>, version: impl Into<String>, data: KindData) -> Self {
		Self {
			name: name.into(),
			version: version.into(),
			arch: String::new(),
			summary: None,
			description: None,
			requires: Vec::new(),
			provides: Vec::new(),
			repository: None,
			data,
		}
	}

	/// Convenience for a package without keywords or files.
	pub fn package(name: impl Into<String>, version: impl Into<String>) -> Self {
		Self::new(name, version, KindData::Package(PackageData::default()))
	}

	pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
		self.arch = arch.into();
		self
	}

	pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
		self.summary = Some(summary.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_requires<I, C>(mut self, requires: I) -> Self
	where I: IntoIterator<Item = C>, C: Into<Capability>
	{
		self.requires = requires.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_provides<I, C>(mut self, provides: I) -> Self
	where I: IntoIterator<Item = C>, C: Into<Capability>
	{
		self.provides = provides.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_repository(mut self, alias: impl Into<String>) -> Self {
		self.repository = Some(alias.into());
		self
	}

	pub fn kind(&self) -> Kind {
		self.data.kind()
	}

	/// Keywords are only recorded for packages.
	pub fn keywords(&self) -> &[String] {
		match &self.data {
			KindData::Package(p) => &p.keywords,
			KindData::Pattern(_) | KindData::Patch(_) | KindData::Product(_) => &[],
		}
	}

	/// Files are only recorded for packages.
	pub fn file_list(&self) -> &[String] {
		match &self.data {
			KindData::Package(p) => &p.file_list,
			KindData::Pattern(_) | KindData::Patch(_) | KindData::Product(_) => &[],
		}
	}
}

impl std::fmt::Display for Resolvable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name)?;
		if !self.version.is_empty() {
			write!(f, "-{}", self.version)?;
		}
		if !self.arch.is_empty() {
			write!(f, ".{}", self.arch)?;
		}
		Ok(())
	}
}
