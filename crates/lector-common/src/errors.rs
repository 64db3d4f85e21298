use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("resource read error: {0}")]
    Io(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("rewriter output is {produced} bytes, below the minimum of {minimum}")]
    OutputTooShort { produced: usize, minimum: u32 },

    #[error("malformed document: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LectorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
