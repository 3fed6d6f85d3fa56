// crates/engine/src/format.rs
use crate::worker::CountResult;
use std::fmt::Write;
use wcount_core::{Counts, MetricSet};

pub const TOTAL_LABEL: &str = "total";

/// Width of one numeric column.
pub const COLUMN_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label<'a> {
    /// Standard input prints no label at all.
    Stdin,
    Named(&'a str),
    Total,
}

impl<'a> Label<'a> {
    #[must_use]
    pub fn for_result(result: &'a CountResult) -> Self {
        if result.source.is_stdin() {
            Self::Stdin
        } else {
            Self::Named(&result.label)
        }
    }
}

/// Render one `wc` line, newline included.
#[must_use]
pub fn format_line(counts: &Counts, metrics: MetricSet, label: Label<'_>) -> String {
    let mut line = String::with_capacity(COLUMN_WIDTH * 3 + 16);
    for (_, value) in metrics.columns(counts) {
        let _ = write!(line, "{value:>COLUMN_WIDTH$}");
    }
    match label {
        Label::Stdin => {}
        Label::Named(name) => {
            line.push(' ');
            line.push_str(name);
        }
        Label::Total => {
            line.push(' ');
            line.push_str(TOTAL_LABEL);
        }
    }
    line.push('\n');
    line
}
