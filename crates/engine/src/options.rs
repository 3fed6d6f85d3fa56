use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Classic fixed-width `wc` columns.
    #[default]
    Wc,
    /// One JSON object per line.
    Jsonl,
}

/// How workers are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// One OS thread per source.
    PerSource,
    /// A fixed-size pool; sources beyond its size wait their turn.
    Pool(usize),
}
