// crates/cli/src/error.rs
use std::io;
use thiserror::Error;
use wcount_engine::error::describe_io;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] wcount_engine::error::EngineError),

    #[error("invalid configuration: {0}")]
    Config(#[from] wcount_engine::config::ConfigBuilderError),

    #[error("write error: {}", describe_io(.0))]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// The reader of our stdout went away, e.g. `wcount big | head -1`.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            Self::Json(e) => std::error::Error::source(e)
                .and_then(|cause| cause.downcast_ref::<io::Error>())
                .is_some_and(|cause| cause.kind() == io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
