use std::io;
use thiserror::Error;

/// Why one source could not be counted.
///
/// Display renders `<name>: <cause>`; the CLI prefixes the tool name.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{name}: {}", describe_io(.source))]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{name}: {}", describe_io(.source))]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{name}: cancelled")]
    Cancelled { name: String },

    #[error("{name}: worker panicked: {message}")]
    Panicked { name: String, message: String },

    #[error("{name}: worker exited without reporting a result")]
    Lost { name: String },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// OS description of `err` without the `(os error N)` suffix.
#[must_use]
pub fn describe_io(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(idx) if err.raw_os_error().is_some() => text[..idx].to_owned(),
        _ => text,
    }
}
