use crate::pool::{Capability, Resolvable, Selectable};

/// Read-only view of the searchable fields of a package-like record.
///
/// Missing values are reported as empty and simply never match.
pub trait PackageRecord {
	fn name(&self) -> &str;
	fn summary(&self) -> Option<&str> { None }
	fn description(&self) -> Option<&str> { None }
	fn keywords(&self) -> &[String] { &[] }
	fn requires(&self) -> &[Capability] { &[] }
	fn provides(&self) -> &[Capability] { &[] }
	fn file_list(&self) -> &[String] { &[] }
}

impl PackageRecord for Resolvable {
	fn name(&self) -> &str { &self.name }
	fn summary(&self) -> Option<&str> { self.summary.as_deref() }
	fn description(&self) -> Option<&str> { self.description.as_deref() }
	fn keywords(&self) -> &[String] { Resolvable::keywords(self) }
	fn requires(&self) -> &[Capability] { &self.requires }
	fn provides(&self) -> &[Capability] { &self.provides }
	fn file_list(&self) -> &[String] { Resolvable::file_list(self) }
}

/// Searches [`Selectable::the_obj()`].
impl PackageRecord for Selectable {
	fn name(&self) -> &str { Selectable::name(self) }
	fn summary(&self) -> Option<&str> { self.the_obj().and_then(|o| o.summary.as_deref()) }
	fn description(&self) -> Option<&str> { self.the_obj().and_then(|o| o.description.as_deref()) }
	fn keywords(&self) -> &[String] { self.the_obj().map_or(&[][..], |o| o.keywords()) }
	fn requires(&self) -> &[Capability] { self.the_obj().map_or(&[][..], |o| o.requires.as_slice()) }
	fn provides(&self) -> &[Capability] { self.the_obj().map_or(&[][..], |o| o.provides.as_slice()) }
	fn file_list(&self) -> &[String] { self.the_obj().map_or(&[][..], |o| o.file_list()) }
}

macro_rules! delegate_record {
	($($ptr:ty),*) => {$(
		impl<T: PackageRecord + ?Sized> PackageRecord for $ptr {
			fn name(&self) -> &str { (**self).name() }
			fn summary(&self) -> Option<&str> { (**self).summary() }
			fn description(&self) -> Option<&str> { (**self).description() }
			fn keywords(&self) -> &[String] { (**self).keywords() }
			fn requires(&self) -> &[Capability] { (**self).requires() }
			fn provides(&self) -> &[Capability] { (**self).provides() }
			fn file_list(&self) -> &[String] { (**self).file_list() }
		}
	)*};
}

delegate_record!(&T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>);
