pub mod errors;
pub mod types;

pub use errors::{ConfigError, EngineError, LectorError, ResourceError};
pub use types::{RewriteMode, Theme};

pub type Result<T> = std::result::Result<T, LectorError>;
