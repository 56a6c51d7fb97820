//! A single filter run over a sequence of records.

use super::*;

/// Advisory sent instead of searching when there is no search text.
pub const EMPTY_SEARCH_MESSAGE: &str = "Enter search text.";
/// Advisory sent at the end of a pass that found nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results.";

/// Receives the progress of a [`FilterPass`].
///
/// Every pass calls [`filter_start`](FilterListener::filter_start) once, then
/// [`filter_match`](FilterListener::filter_match) for each match in input order, then
/// [`filter_finished`](FilterListener::filter_finished) once.
pub trait FilterListener<R: ?Sized> {
	/// Clear any previous results here.
	fn filter_start(&mut self) {}
	fn filter_match(&mut self, _record: &R) {}
	fn filter_finished(&mut self) {}
	/// A short note for the user, e.g. why nothing was found.
	fn message(&mut self, _text: &str) {}
}

impl<R: ?Sized> FilterListener<R> for () {}

/// A listener callback as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
	Start,
	/// Name of the matching record.
	Match(String),
	Finished,
	Message(String),
}

/// Collects every event of a pass in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventLog {
	events: Vec<FilterEvent>,
}

impl EventLog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn events(&self) -> &[FilterEvent] {
		&self.events
	}

	pub fn into_events(self) -> Vec<FilterEvent> {
		self.events
	}

	pub fn match_names(&self) -> Vec<&str> {
		self.events.iter()
			.filter_map(|e| match e {
				FilterEvent::Match(name) => Some(name.as_str()),
				_ => None,
			})
			.collect()
	}

	pub fn messages(&self) -> Vec<&str> {
		self.events.iter()
			.filter_map(|e| match e {
				FilterEvent::Message(text) => Some(text.as_str()),
				_ => None,
			})
			.collect()
	}

	pub fn clear(&mut self) {
		self.events.clear();
	}
}

impl<R: PackageRecord + ?Sized> FilterListener<R> for EventLog {
	fn filter_start(&mut self) { self.events.push(FilterEvent::Start) }
	fn filter_match(&mut self, record: &R) { self.events.push(FilterEvent::Match(record.name().to_string())) }
	fn filter_finished(&mut self) { self.events.push(FilterEvent::Finished) }
	fn message(&mut self, text: &str) { self.events.push(FilterEvent::Message(text.to_string())) }
}

fn send_event(tx: &std::sync::mpsc::Sender<FilterEvent>, event: FilterEvent) {
	if let Err(e) = tx.send(event) {
		log::warn!("Dropping filter event {:?}, receiver is gone", e.0);
	}
}

/// Forwards events over a channel, e.g. to a UI thread.
impl<R: PackageRecord + ?Sized> FilterListener<R> for std::sync::mpsc::Sender<FilterEvent> {
	fn filter_start(&mut self) { send_event(self, FilterEvent::Start) }
	fn filter_match(&mut self, record: &R) { send_event(self, FilterEvent::Match(record.name().to_string())) }
	fn filter_finished(&mut self) { send_event(self, FilterEvent::Finished) }
	fn message(&mut self, text: &str) { send_event(self, FilterEvent::Message(text.to_string())) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
	/// Nothing has been pulled from the pass yet.
	Idle,
	Running,
	/// The source is exhausted and `filter_finished` was sent. The pass can't be restarted.
	Finished,
}

/// Lazy, one-shot sequence of the records matching a [`Matcher`].
///
/// Created by [`filter_pass()`]. Records are pulled from the source only as the pass is iterated.
pub struct FilterPass<'a, I, L> {
	records: I,
	matcher: Matcher,
	counter: &'a mut MatchCount,
	listener: &'a mut L,
	state: PassState,
}

/// Starts a filter pass over `records`.
///
/// The pattern is compiled up front, so an invalid pattern fails here before any record is looked at
/// and before `listener` hears anything.
/// `counter` is reset once the pass starts and then counts its matches.
/// # Errors
/// - [`PatternError`] from compiling the search text.
pub fn filter_pass<'a, I, L>(records: I, spec: &FilterSpec, counter: &'a mut MatchCount, listener: &'a mut L) -> Result<FilterPass<'a, I::IntoIter, L>, PatternError>
where
	I: IntoIterator,
	I::Item: PackageRecord,
	L: FilterListener<I::Item>,
{
	let matcher = Matcher::new(spec)?;
	Ok(FilterPass::new(records.into_iter(), matcher, counter, listener))
}

impl<'a, I, L> FilterPass<'a, I, L>
where
	I: Iterator,
	I::Item: PackageRecord,
	L: FilterListener<I::Item>,
{
	pub fn new(records: I, matcher: Matcher, counter: &'a mut MatchCount, listener: &'a mut L) -> Self {
		Self {
			records,
			matcher,
			counter,
			listener,
			state: PassState::Idle,
		}
	}

	pub fn state(&self) -> PassState {
		self.state
	}

	/// Matches found so far.
	pub fn match_count(&self) -> usize {
		self.counter.get()
	}

	/// Drives the pass to the end and returns the number of matches.
	pub fn run(mut self) -> usize {
		while self.next().is_some() {}
		self.counter.get()
	}

	fn start(&mut self) {
		self.state = PassState::Running;
		self.counter.reset();
		log::debug!("Filter pass started");
		self.listener.filter_start();
	}

	fn finish(&mut self) {
		if self.counter.get() == 0 && !self.matcher.is_empty() {
			self.listener.message(NO_RESULTS_MESSAGE);
		}
		self.state = PassState::Finished;
		log::debug!("Filter pass finished with {} matches", self.counter.get());
		self.listener.filter_finished();
	}
}

impl<'a, I, L> Iterator for FilterPass<'a, I, L>
where
	I: Iterator,
	I::Item: PackageRecord,
	L: FilterListener<I::Item>,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		match self.state {
			PassState::Finished => return None,
			PassState::Idle => {
				self.start();
				if self.matcher.is_empty() {
					self.listener.message(EMPTY_SEARCH_MESSAGE);
					self.finish();
					return None
				}
			},
			PassState::Running => {},
		}

		for record in self.records.by_ref() {
			if self.matcher.is_match(&record) {
				self.counter.increment();
				self.listener.filter_match(&record);
				return Some(record)
			}
		}

		self.finish();
		None
	}
}

impl<'a, I, L> std::iter::FusedIterator for FilterPass<'a, I, L>
where
	I: Iterator,
	I::Item: PackageRecord,
	L: FilterListener<I::Item>,
{}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pool::Resolvable;

	fn records() -> Vec<Resolvable> {
		["libfoo", "vim", "libbar", "emacs"].into_iter().map(|n| Resolvable::package(n, "1")).collect()
	}

	#[test]
	fn events_follow_input_order() {
		let records = records();
		let mut counter = MatchCount::default();
		let mut log = EventLog::new();
		let count = filter_pass(&records, &FilterSpec::new("lib"), &mut counter, &mut log).unwrap().run();
		assert_eq!(count, 2);
		assert_eq!(log.events(), [
			FilterEvent::Start,
			FilterEvent::Match("libfoo".into()),
			FilterEvent::Match("libbar".into()),
			FilterEvent::Finished,
		]);
	}

	#[test]
	fn pass_is_lazy() {
		let records = records();
		let mut counter = MatchCount::default();
		let mut log = EventLog::new();
		let mut pass = filter_pass(&records, &FilterSpec::new("lib"), &mut counter, &mut log).unwrap();
		assert_eq!(pass.state(), PassState::Idle);
		assert_eq!(pass.next().map(|r| r.name.as_str()), Some("libfoo"));
		assert_eq!(pass.state(), PassState::Running);
		assert_eq!(pass.match_count(), 1);
		drop(pass);
		assert_eq!(log.events(), [FilterEvent::Start, FilterEvent::Match("libfoo".into())]);
	}

	#[test]
	fn finished_pass_stays_finished() {
		let records = records();
		let mut counter = MatchCount::default();
		let mut log = EventLog::new();
		let mut pass = filter_pass(&records, &FilterSpec::new("vim"), &mut counter, &mut log).unwrap();
		assert!(pass.next().is_some());
		assert!(pass.next().is_none());
		assert_eq!(pass.state(), PassState::Finished);
		assert!(pass.next().is_none());
		drop(pass);
		assert_eq!(log.events().iter().filter(|e| **e == FilterEvent::Finished).count(), 1);
	}

	#[test]
	fn counter_is_reset_on_start() {
		let records = records();
		let mut counter = MatchCount::default();
		counter.increment();
		counter.increment();
		assert_eq!(filter_pass(&records, &FilterSpec::new("emacs"), &mut counter, &mut ()).unwrap().run(), 1);
		assert_eq!(counter.get(), 1);
	}

	#[test]
	fn no_results_message() {
		let records = records();
		let mut log = EventLog::new();
		filter_pass(&records, &FilterSpec::new("nano"), &mut MatchCount::default(), &mut log).unwrap().run();
		assert_eq!(log.events(), [FilterEvent::Start, FilterEvent::Message(NO_RESULTS_MESSAGE.into()), FilterEvent::Finished]);
	}
}
