use std::path::PathBuf;

/// Errors raised while loading event batches or configuration.
/// Rendering itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn config(message: impl Into<String>) -> Self { Self::Config(message.into()) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
