// crates/core/src/config.rs
use crate::stats::Counts;

/// One countable quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Lines,
    Words,
    Bytes,
}

impl Metric {
    /// Column order used by every output format.
    pub const ORDER: [Self; 3] = [Self::Lines, Self::Words, Self::Bytes];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Words => "words",
            Self::Bytes => "bytes",
        }
    }

    #[must_use]
    pub const fn value(self, counts: &Counts) -> u64 {
        match self {
            Self::Lines => counts.lines,
            Self::Words => counts.words,
            Self::Bytes => counts.bytes,
        }
    }
}

/// Which metrics the caller asked to see.
///
/// An empty set means "everything", matching plain `wc` with no flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetricSet {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
}

impl MetricSet {
    pub const ALL: Self = Self::new(true, true, true);

    #[must_use]
    pub const fn new(lines: bool, words: bool, bytes: bool) -> Self {
        Self {
            lines,
            words,
            bytes,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.lines || self.words || self.bytes)
    }

    /// Resolves the implicit "all metrics" default.
    #[must_use]
    pub const fn effective(self) -> Self {
        if self.is_empty() { Self::ALL } else { self }
    }

    #[must_use]
    pub const fn contains(self, metric: Metric) -> bool {
        let set = self.effective();
        match metric {
            Metric::Lines => set.lines,
            Metric::Words => set.words,
            Metric::Bytes => set.bytes,
        }
    }

    /// Enabled `(metric, value)` pairs of `counts`, in [`Metric::ORDER`].
    pub fn columns(self, counts: &Counts) -> impl Iterator<Item = (Metric, u64)> {
        let set = self.effective();
        Metric::ORDER
            .into_iter()
            .filter(move |&metric| set.contains(metric))
            .map(move |metric| (metric, metric.value(counts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_enables_everything() {
        let set = MetricSet::default();
        assert!(set.is_empty());
        assert_eq!(set.effective(), MetricSet::ALL);
        assert!(Metric::ORDER.iter().all(|m| set.contains(*m)));
    }

    #[test]
    fn columns_keep_fixed_order() {
        let counts = Counts::new(3, 5, 7);
        let set = MetricSet::new(false, true, true);
        let mut cols = set.columns(&counts);
        assert_eq!(cols.next(), Some((Metric::Words, 5)));
        assert_eq!(cols.next(), Some((Metric::Bytes, 7)));
        assert_eq!(cols.next(), None);
    }

    #[test]
    fn metric_value_reads_matching_field() {
        let counts = Counts::new(1, 2, 3);
        let values = Metric::ORDER.map(|m| m.value(&counts));
        assert_eq!(values, [1, 2, 3]);
    }
}
