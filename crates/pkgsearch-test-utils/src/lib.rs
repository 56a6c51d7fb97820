//! Various helper functions for testing
//!
//! functions in this module should use results and not use any panics to avoid confusion in callers

use pkgsearch::pool::*;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
	#[error("pkgsearch error: {0}")]
	PkgSearch(#[from] pkgsearch::Error),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
}

fn package(name: &str, version: &str, keywords: &[&str], file_list: &[&str]) -> Resolvable {
	let data = PackageData {
		keywords: keywords.iter().map(|k| k.to_string()).collect(),
		file_list: file_list.iter().map(|f| f.to_string()).collect(),
		..Default::default()
	};
	Resolvable::new(name, version, KindData::Package(data))
		.with_arch("x86_64")
		.with_repository("oss")
}

/// A small pool with a few packages and one of every other kind.
///
/// Packages in catalogue order: `MozillaFirefox`, `vim`, `libfoo1`, `firefox-esr-branding`.
pub fn sample_pool() -> Result<Pool, FixtureError> {
	let firefox_installed = package("MozillaFirefox", "117.0", &["browser", "web"], &["/usr/bin/firefox"])
		.with_summary("Mozilla Firefox Web Browser");
	let firefox = package("MozillaFirefox", "118.0", &["browser", "web"], &["/usr/bin/firefox", "/usr/lib64/firefox/libxul.so"])
		.with_summary("Mozilla Firefox Web Browser")
		.with_description("Mozilla Firefox is a standalone web browser, designed for standards compliance and performance.")
		.with_requires(["libc.so.6()(64bit)", "mozilla-nss >= 3.90"])
		.with_provides(["web_browser", "firefox = 118.0"]);

	let vim = package("vim", "9.0.1894", &["editor"], &["/usr/bin/vim"])
		.with_summary("Vi IMproved")
		.with_requires(["libc.so.6()(64bit)"])
		.with_provides(["vi", "vim = 9.0.1894"]);

	let libfoo = package("libfoo1", "1.2.0", &[], &["/usr/lib64/libfoo.so.1", "/usr/lib64/libfoo.so"])
		.with_summary("Shared library for foo")
		.with_provides(["libfoo.so.1()(64bit)"]);

	let branding = package("firefox-esr-branding", "102", &[], &[])
		.with_summary("Branding for Firefox ESR");

	let base = Resolvable::new("base", "20230101", KindData::Pattern(PatternData { category: Some("Base Technologies".into()), user_visible: true, order: Some("1000".into()) }))
		.with_summary("Minimal Base System")
		.with_repository("oss");

	let patch = Resolvable::new("openSUSE-2023-42", "1", KindData::Patch(PatchData { category: PatchCategory::Security, interactive: false }))
		.with_summary("Security update for MozillaFirefox")
		.with_repository("update");

	let product = Resolvable::new("openSUSE", "15.5", KindData::Product(ProductData { short_name: Some("openSUSE Leap".into()), vendor: Some("openSUSE".into()) }))
		.with_summary("openSUSE Leap 15.5");

	let selectables = vec![
		Selectable::new(Some(firefox_installed), Some(firefox))?.with_status(Status::Update)?,
		Selectable::new(None, Some(vim))?,
		Selectable::new(Some(libfoo), None)?,
		Selectable::new(None, Some(branding))?.with_status(Status::Taboo)?,
		Selectable::new(Some(base), None)?,
		Selectable::new(None, Some(patch))?,
		Selectable::new(Some(product), None)?,
	];

	let repositories = vec![
		Repository { alias: "oss".into(), name: "Main Repository".into(), url: Some("https://download.opensuse.org/distribution/leap/15.5/repo/oss/".into()), enabled: true },
		Repository { alias: "update".into(), name: "Main Update Repository".into(), url: Some("https://download.opensuse.org/update/leap/15.5/oss".into()), enabled: true },
	];

	Ok(Pool::new(selectables, repositories)?)
}

/// Writes [`sample_pool()`] as JSON into `dir` and returns the file path.
pub fn write_sample_pool(dir: &std::path::Path) -> Result<std::path::PathBuf, FixtureError> {
	let path = dir.join("pool.json");
	sample_pool()?.save_to_file(&path)?;
	Ok(path)
}

/// A temporary directory holding [`sample_pool()`] as `pool.json`.
pub fn temp_pool_dir() -> Result<(tempfile::TempDir, std::path::PathBuf), FixtureError> {
	let dir = tempfile::tempdir()?;
	let path = write_sample_pool(dir.path())?;
	Ok((dir, path))
}

/// A bare package carrying only `name` and the given summary, for quick matcher tests.
pub fn named(name: &str, summary: &str) -> Resolvable {
	Resolvable::package(name, "1.0").with_summary(summary)
}

/// Serializes a pool to a JSON string.
pub fn pool_json(pool: &Pool) -> Result<String, FixtureError> {
	Ok(serde_json::to_string(pool)?)
}
