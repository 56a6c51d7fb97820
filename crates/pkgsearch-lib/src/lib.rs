pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::Config;

pub mod pool;
pub use pool::Pool;
pub use pool::Selectable;
pub use pool::Resolvable;

pub mod search;
pub use search::FilterSpec;
pub use search::Matcher;
pub use search::PackageRecord;
pub use search::PatternError;
