use serde::{Serialize, Deserialize};

/// Installation status of a [`Selectable`](super::Selectable).
///
/// `Auto*` variants are set by the dependency solver rather than the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
	/// Not installed and not going to be.
	#[default] NoInst,
	Install,
	AutoInstall,
	KeepInstalled,
	Update,
	AutoUpdate,
	Del,
	AutoDel,
	/// Never install this, not even to satisfy a dependency.
	Taboo,
	/// Never touch the installed version.
	Protected,
}

impl Status {
	/// Is an object of this selectable currently on the system.
	pub fn is_installed(&self) -> bool {
		matches!(self, Status::KeepInstalled | Status::Update | Status::AutoUpdate | Status::Del | Status::AutoDel | Status::Protected)
	}

	/// Will committing the transaction change the system.
	pub fn is_modified(&self) -> bool {
		matches!(self, Status::Install | Status::AutoInstall | Status::Update | Status::AutoUpdate | Status::Del | Status::AutoDel)
	}

	pub fn is_auto(&self) -> bool {
		matches!(self, Status::AutoInstall | Status::AutoUpdate | Status::AutoDel)
	}

	/// Whether a selectable with the given objects can be in this status.
	pub fn is_valid_for(&self, has_installed: bool, has_candidate: bool) -> bool {
		match self {
			Status::NoInst | Status::Taboo => !has_installed,
			Status::Install | Status::AutoInstall => !has_installed && has_candidate,
			Status::Update | Status::AutoUpdate => has_installed && has_candidate,
			Status::KeepInstalled | Status::Del | Status::AutoDel | Status::Protected => has_installed,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Status::NoInst => "no-inst",
			Status::Install => "install",
			Status::AutoInstall => "auto-install",
			Status::KeepInstalled => "keep-installed",
			Status::Update => "update",
			Status::AutoUpdate => "auto-update",
			Status::Del => "del",
			Status::AutoDel => "auto-del",
			Status::Taboo => "taboo",
			Status::Protected => "protected",
		}
	}
}

impl std::fmt::Display for Status {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
