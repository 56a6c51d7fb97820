//! # Package pool
//!
//! The in-memory catalogue of everything the package library knows about: one [`Selectable`] per
//! name and kind, across all configured repositories.
//!
//! Pools are usually produced by the package library and handed over as JSON,
//! see [`Pool::load_from_file()`].

use std::path::Path;
use serde::{Serialize, Deserialize};

mod kind;
pub use kind::Kind;
pub use kind::KindData;
pub use kind::PackageData;
pub use kind::PatternData;
pub use kind::PatchData;
pub use kind::PatchCategory;
pub use kind::ProductData;

mod capability;
pub use capability::Capability;
pub use capability::Relation;

mod resolvable;
pub use resolvable::Resolvable;

mod status;
pub use status::Status;

mod selectable;
pub use selectable::Selectable;

/// A configured package source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
	pub alias: String,
	pub name: String,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default = "enabled_by_default")]
	pub enabled: bool,
}

fn enabled_by_default() -> bool { true }

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pool {
	#[serde(default)]
	repositories: Vec<Repository>,
	#[serde(default)]
	selectables: Vec<Selectable>,
}

impl Pool {
	/// # Errors
	/// - [`Validation`](crate::Error::Validation) when a resolvable refers to an unknown repository.
	pub fn new(selectables: Vec<Selectable>, repositories: Vec<Repository>) -> crate::Result<Self> {
		let pool = Self { repositories, selectables };
		pool.validate()?;
		Ok(pool)
	}

	pub fn from_json_str(json: &str) -> crate::Result<Self> {
		let pool: Pool = serde_json::from_str(json)?;
		pool.validate()?;
		Ok(pool)
	}

	pub fn load_from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
		let path = path.as_ref();
		log::debug!("Loading pool from {}", path.display());
		let json = std::fs::read_to_string(path)?;
		let pool = Self::from_json_str(&json)?;
		log::debug!("Loaded {} selectables from {} repositories", pool.len(), pool.repositories.len());
		Ok(pool)
	}

	pub fn save_to_file(&self, path: impl AsRef<Path>) -> crate::Result<()> {
		let file = std::fs::File::create(path)?;
		serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
		Ok(())
	}

	fn validate(&self) -> crate::Result<()> {
		if self.repositories.is_empty() {
			return Ok(())
		}
		let objects = self.selectables.iter()
			.flat_map(|s| s.installed_obj().into_iter().chain(s.candidate_obj()));
		for obj in objects {
			if let Some(alias) = &obj.repository {
				if !self.repositories.iter().any(|r| &r.alias == alias) {
					return Err(crate::Error::Validation(format!("`{}` refers to unknown repository `{}`", obj, alias)))
				}
			}
		}
		Ok(())
	}

	pub fn selectables(&self) -> &[Selectable] {
		&self.selectables
	}

	/// Iterates the selectables of one kind in catalogue order.
	pub fn by_kind(&self, kind: Kind) -> impl Iterator<Item = &Selectable> + '_ {
		self.selectables.iter().filter(move |s| s.kind() == kind)
	}

	pub fn packages(&self) -> impl Iterator<Item = &Selectable> + '_ {
		self.by_kind(Kind::Package)
	}

	pub fn patterns(&self) -> impl Iterator<Item = &Selectable> + '_ {
		self.by_kind(Kind::Pattern)
	}

	pub fn patches(&self) -> impl Iterator<Item = &Selectable> + '_ {
		self.by_kind(Kind::Patch)
	}

	pub fn products(&self) -> impl Iterator<Item = &Selectable> + '_ {
		self.by_kind(Kind::Product)
	}

	pub fn repositories(&self) -> &[Repository] {
		&self.repositories
	}

	pub fn find(&self, name: &str, kind: Kind) -> Option<&Selectable> {
		self.selectables.iter().find(|s| s.kind() == kind && s.name() == name)
	}

	pub fn find_mut(&mut self, name: &str, kind: Kind) -> Option<&mut Selectable> {
		self.selectables.iter_mut().find(|s| s.kind() == kind && s.name() == name)
	}

	pub fn len(&self) -> usize {
		self.selectables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.selectables.is_empty()
	}
}
