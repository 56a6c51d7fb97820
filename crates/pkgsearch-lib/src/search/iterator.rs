use super::*;

pub struct SearchMatches<'m, I>
where
	I: Iterator,
	I::Item: PackageRecord,
{
	matcher: &'m Matcher,
	underlying: I,
}

impl<'m, I> Iterator for SearchMatches<'m, I>
where
	I: Iterator,
	I::Item: PackageRecord,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		for record in self.underlying.by_ref() {
			if self.matcher.is_match(&record) {
				return Some(record)
			}
		}
		None
	}
}

pub trait SearchMatchesExt: Iterator
{
	/// Filters the iterator to records matching `matcher`, without counting or notifying anyone.
	fn search_matches(self, matcher: &Matcher) -> SearchMatches<'_, Self>
	where
		Self: Sized,
		Self::Item: PackageRecord,
	{
		SearchMatches { underlying: self, matcher }
	}
}

impl<I: Iterator> SearchMatchesExt for I {}
