// crates/engine/src/lib.rs
pub mod cancel;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod format;
pub mod options;
pub mod processor;
pub mod source;
pub mod worker;

use crate::config::Config;
use crate::coordinator::{Coordinator, RunReport};
use crate::error::Result;
use crate::source::{FsOpener, SourceOpener};

pub use wcount_core::{Counts, Metric, MetricSet, Totals};

/// Count every configured source from the real filesystem and stdin.
///
/// # Errors
///
/// Returns an error only when workers cannot be started.
/// Per-source failures are collected in `RunReport::results`.
pub fn run(config: &Config) -> Result<RunReport> {
    run_with(config, &FsOpener)
}

/// Same as [`run`], reading sources through `opener`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<O: SourceOpener + ?Sized>(config: &Config, opener: &O) -> Result<RunReport> {
    Coordinator::new(config, opener).execute()
}
