//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("pattern error: {0}")]
	Pattern(#[from] crate::search::PatternError),
	#[error("parsing error: {0}")]
	Parse(String),
	#[error("validation error: {0}")]
	Validation(String),
	#[error("status `{status}` is not valid for `{name}`")]
	InvalidStatus {
		name: String,
		status: crate::pool::Status,
	},
}
