use pkgsearch::pool::Kind;
use pkgsearch::search::*;
use pkgsearch::Selectable;

fn options() -> getopts::Options {
	let mut opts = getopts::Options::new();
	opts.optflag( "h", "help",           "Show help");
	opts.optflag( "v", "verbose",        "Show status and repository of matches, debug logging");
	opts.optopt(  "m", "mode",           "How to match: contains, begins-with, exact, wildcard or regex", "MODE");
	opts.optflag( "c", "case-sensitive", "Match upper and lower case exactly");
	opts.optopt(  "f", "fields",         "Comma separated fields to search: name, keywords, summary, description, requires, provides, file-list or all", "FIELDS");
	opts.optopt(  "k", "kind",           "What to search: package, pattern, patch, product or all (default package)", "KIND");
	opts.optflag( "H", "history",        "List previous search texts");
	opts.parsing_style(getopts::ParsingStyle::FloatingFrees);
	opts
}

fn main() -> std::process::ExitCode {
	let opts = options();

	/* Parse console input */
	let args: Vec<String> = std::env::args().collect();
	let parsed_options = match opts.parse(&args[1..]) {
		Ok(m)  => { m }
		Err(e) => { eprintln!("Unable to parse options: {}", e); return std::process::ExitCode::FAILURE }
	};

	if parsed_options.opt_present("h") {
		eprintln!("{}", opts.usage("Usage: pkgsearch-terminal [options] POOL_FILE [SEARCH_TEXT]"));
		return std::process::ExitCode::SUCCESS;
	}

	let verbose = parsed_options.opt_present("v");
	env_logger::Builder::new()
		.filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn })
		.parse_default_env()
		.init();

	let config = pkgsearch::Config::load_from_disk().unwrap_or_else(|e| {
		log::warn!("Failed to read config file: {}", e);
		log::warn!("Using default config.");
		pkgsearch::Config::default()
	});

	match run(&config, &parsed_options, verbose) {
		Ok(_) => std::process::ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			eprintln!("{}", e);
			std::process::ExitCode::FAILURE
		},
	}
}

fn run(config: &pkgsearch::Config, parsed_options: &getopts::Matches, verbose: bool) -> Result<(), Error> {
	let history = SearchHistory::load_from_disk(config).unwrap_or_else(|e| {
		log::warn!("Failed to read search history: {}", e);
		SearchHistory::new(config.history_limit())
	});

	if parsed_options.opt_present("H") {
		for text in history.entries() {
			println!("{}", text);
		}
		return Ok(());
	}

	let pool_path = parsed_options.free.first().ok_or(Error::MissingArgument("POOL_FILE"))?;
	let search_text = parsed_options.free.get(1).cloned().unwrap_or_default();

	let mut spec = config.filter_spec(search_text);
	if let Some(mode) = parsed_options.opt_str("m") {
		spec.mode = mode.parse()?;
	}
	if parsed_options.opt_present("c") {
		spec.case_sensitive = true;
	}
	if let Some(fields) = parsed_options.opt_str("f") {
		spec.fields = fields.parse()?;
	}
	let kind = match parsed_options.opt_str("k").as_deref() {
		None => Some(Kind::Package),
		Some(k) if k.eq_ignore_ascii_case("all") => None,
		Some(k) => Some(k.parse::<Kind>()?),
	};

	let pool = pkgsearch::Pool::load_from_file(pool_path)?;
	let records: Box<dyn Iterator<Item = &Selectable> + '_> = match kind {
		Some(kind) => Box::new(pool.by_kind(kind)),
		None => Box::new(pool.selectables().iter()),
	};

	log::debug!("Searching {} for {:?} ({}, fields: {})", pool_path, spec.search_text, spec.mode, spec.fields);

	let mut filter = SearchFilter::new(spec, history);
	let mut printer = PrintListener { verbose };
	let result = filter.filter(records, &mut printer);

	/* Also saved when the pattern is invalid */
	if let Err(e) = filter.history().save_to_disk(config) {
		log::warn!("Failed to save search history: {}", e);
	}

	println!("{} matches", result?);
	Ok(())
}

/// Prints every match as `name-version  summary`.
struct PrintListener {
	verbose: bool,
}

impl<'p> FilterListener<&'p Selectable> for PrintListener {
	fn filter_match(&mut self, record: &&'p Selectable) {
		let Some(obj) = record.the_obj() else {
			return
		};
		println!("{}\t{}", obj, obj.summary.as_deref().unwrap_or_default());
		if self.verbose {
			println!("\tstatus: {}, repository: {}", record.status(), obj.repository.as_deref().unwrap_or("@System"));
		}
	}

	fn message(&mut self, text: &str) {
		println!("{}", text);
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("pkgsearch error: {0}")]
	PkgSearch(#[from] pkgsearch::Error),
	#[error("Missing argument: {0}")]
	MissingArgument(&'static str),
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixture {
		_dir: tempfile::TempDir,
		pool: String,
		config: pkgsearch::Config,
	}

	fn fixture() -> Fixture {
		let (dir, path) = pkgsearch_test_utils::temp_pool_dir().expect("failed to write pool");
		let mut config = pkgsearch::Config::default();
		assert!(config.set_data_dir(dir.path().to_path_buf()));
		Fixture { pool: path.to_string_lossy().into_owned(), config, _dir: dir }
	}

	fn run_with(fixture: &Fixture, args: &[&str]) -> Result<(), Error> {
		let parsed = options().parse(args).expect("failed to parse options");
		run(&fixture.config, &parsed, false)
	}

	fn latest_search(fixture: &Fixture) -> Option<String> {
		SearchHistory::load_from_disk(&fixture.config).unwrap().latest().map(str::to_string)
	}

	#[test]
	fn search_is_saved_to_history() {
		let f = fixture();
		run_with(&f, &[f.pool.as_str(), "fire"]).unwrap();
		assert_eq!(latest_search(&f).as_deref(), Some("fire"));
	}

	#[test]
	fn invalid_regex_fails_but_is_remembered() {
		let f = fixture();
		let res = run_with(&f, &["-m", "regex", f.pool.as_str(), "lib("]);
		assert!(matches!(res, Err(Error::PkgSearch(pkgsearch::Error::Pattern(_)))));
		assert_eq!(latest_search(&f).as_deref(), Some("lib("));
	}

	#[test]
	fn invalid_wildcard_fails() {
		let f = fixture();
		assert!(matches!(run_with(&f, &["-m", "wildcard", f.pool.as_str(), "lib[abc"]), Err(Error::PkgSearch(pkgsearch::Error::Pattern(_)))));
	}

	#[test] fn pool_file_is_required() { let f = fixture(); assert!(matches!(run_with(&f, &[]), Err(Error::MissingArgument(_)))) }
	#[test] fn missing_pool_file_is_an_io_error() { let f = fixture(); assert!(matches!(run_with(&f, &["/nonexistent/pkgsearch/pool.json", "vim"]), Err(Error::PkgSearch(pkgsearch::Error::IO(_))))) }
	#[test] fn unknown_mode_is_rejected() { let f = fixture(); assert!(matches!(run_with(&f, &["-m", "fuzzy", f.pool.as_str(), "vim"]), Err(Error::PkgSearch(pkgsearch::Error::Parse(_))))) }
	#[test] fn unknown_field_is_rejected() { let f = fixture(); assert!(matches!(run_with(&f, &["-f", "name,size", f.pool.as_str(), "vim"]), Err(Error::PkgSearch(pkgsearch::Error::Parse(_))))) }
	#[test] fn unknown_kind_is_rejected() { let f = fixture(); assert!(matches!(run_with(&f, &["-k", "srcpackage", f.pool.as_str(), "vim"]), Err(Error::PkgSearch(pkgsearch::Error::Parse(_))))) }
	#[test] fn all_kinds_can_be_searched() { let f = fixture(); assert!(run_with(&f, &["-k", "all", "-f", "all", f.pool.as_str(), "security"]).is_ok()) }
	#[test] fn empty_search_text_is_not_an_error() { let f = fixture(); assert!(run_with(&f, &[f.pool.as_str()]).is_ok()) }

	#[test]
	fn history_listing_needs_no_pool() {
		let f = fixture();
		run_with(&f, &[f.pool.as_str(), "vim"]).unwrap();
		assert!(run_with(&f, &["-H"]).is_ok());
		assert_eq!(latest_search(&f).as_deref(), Some("vim"));
	}
}
