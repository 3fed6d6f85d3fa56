#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod counter;
pub mod stats;

pub use config::{Metric, MetricSet};
pub use counter::{StreamCounter, count_bytes, is_separator};
pub use stats::{Counts, Totals};
