use serde::{Serialize, Deserialize};

use super::*;

/// All objects of one name and kind as the user sees them: what is installed, what could be installed,
/// and what is going to happen to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSelectable", into = "RawSelectable")]
pub struct Selectable {
	name: String,
	kind: Kind,
	installed: Option<Resolvable>,
	candidate: Option<Resolvable>,
	status: Status,
}

/// Serialized form, checked by [`Selectable::with_status`] on the way in.
#[derive(Serialize, Deserialize)]
struct RawSelectable {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	installed: Option<Resolvable>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	candidate: Option<Resolvable>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	status: Option<Status>,
}

impl TryFrom<RawSelectable> for Selectable {
	type Error = crate::Error;
	fn try_from(raw: RawSelectable) -> Result<Self, Self::Error> {
		let selectable = Selectable::new(raw.installed, raw.candidate)?;
		match raw.status {
			Some(status) => selectable.with_status(status),
			None => Ok(selectable),
		}
	}
}

impl From<Selectable> for RawSelectable {
	fn from(value: Selectable) -> Self {
		RawSelectable {
			installed: value.installed,
			candidate: value.candidate,
			status: Some(value.status),
		}
	}
}

impl Selectable {
	/// Creates a selectable from its installed and candidate objects.
	///
	/// The initial status is [`KeepInstalled`](Status::KeepInstalled) when something is installed,
	/// [`NoInst`](Status::NoInst) otherwise.
	/// # Errors
	/// - [`Validation`](crate::Error::Validation) when both objects are missing or they differ in name or kind.
	pub fn new(installed: Option<Resolvable>, candidate: Option<Resolvable>) -> crate::Result<Self> {
		let (name, kind) = match (&installed, &candidate) {
			(None, None) => return Err(crate::Error::Validation("selectable has neither an installed nor a candidate object".to_string())),
			(Some(i), Some(c)) if i.name != c.name || i.kind() != c.kind() => {
				return Err(crate::Error::Validation(format!("installed object `{}` ({}) does not match candidate `{}` ({})", i.name, i.kind(), c.name, c.kind())))
			},
			(Some(obj), _) | (None, Some(obj)) => (obj.name.clone(), obj.kind()),
		};

		let status = if installed.is_some() { Status::KeepInstalled } else { Status::NoInst };

		Ok(Self {
			name,
			kind,
			installed,
			candidate,
			status,
		})
	}

	pub fn with_status(mut self, status: Status) -> crate::Result<Self> {
		self.set_status(status)?;
		Ok(self)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> Kind {
		self.kind
	}

	pub fn status(&self) -> Status {
		self.status
	}

	/// Changes the status, refusing transitions the available objects can't satisfy.
	/// # Errors
	/// - [`InvalidStatus`](crate::Error::InvalidStatus)
	pub fn set_status(&mut self, status: Status) -> crate::Result<()> {
		if !status.is_valid_for(self.has_installed_obj(), self.has_candidate_obj()) {
			return Err(crate::Error::InvalidStatus { name: self.name.clone(), status })
		}
		log::trace!("Changing status of {} {} from {} to {}", self.kind, self.name, self.status, status);
		self.status = status;
		Ok(())
	}

	pub fn installed_obj(&self) -> Option<&Resolvable> {
		self.installed.as_ref()
	}

	pub fn candidate_obj(&self) -> Option<&Resolvable> {
		self.candidate.as_ref()
	}

	pub fn has_installed_obj(&self) -> bool {
		self.installed.is_some()
	}

	pub fn has_candidate_obj(&self) -> bool {
		self.candidate.is_some()
	}

	/// The object representing this selectable: the candidate if there is one, else the installed object.
	pub fn the_obj(&self) -> Option<&Resolvable> {
		self.candidate.as_ref().or(self.installed.as_ref())
	}

	/// Is the candidate different from what is installed.
	pub fn has_update(&self) -> bool {
		match (&self.installed, &self.candidate) {
			(Some(i), Some(c)) => i.version != c.version,
			_ => false,
		}
	}
}
