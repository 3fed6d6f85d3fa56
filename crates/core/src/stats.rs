// crates/core/src/stats.rs
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Line/word/byte triple for one source (or a sum of sources).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    /// Newline-delimited lines, plus one for a trailing unterminated line.
    pub lines: u64,
    /// Maximal runs of non-whitespace bytes.
    pub words: u64,
    /// Exact number of bytes read.
    pub bytes: u64,
}

impl Counts {
    #[inline]
    #[must_use]
    pub const fn new(lines: u64, words: u64, bytes: u64) -> Self {
        Self {
            lines,
            words,
            bytes,
        }
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.lines == 0 && self.words == 0 && self.bytes == 0
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            lines: self.lines + rhs.lines,
            words: self.words + rhs.words,
            bytes: self.bytes + rhs.bytes,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> AddAssign<&'a Counts> for Counts {
    fn add_assign(&mut self, rhs: &'a Counts) {
        *self = *self + *rhs;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Counts> for Counts {
    fn sum<I: Iterator<Item = &'a Counts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Running sum of every successful source in a run.
///
/// Only the coordinating thread touches this; workers hand over finished
/// [`Counts`] values instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub counts: Counts,
    /// Number of sources absorbed so far.
    pub sources: usize,
}

impl Totals {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: Counts::zero(),
            sources: 0,
        }
    }

    pub fn absorb(&mut self, counts: &Counts) {
        self.counts += counts;
        self.sources += 1;
    }
}

impl<'a> FromIterator<&'a Counts> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a Counts>>(iter: I) -> Self {
        let mut totals = Self::new();
        for counts in iter {
            totals.absorb(counts);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_by_ref() {
        let values = [Counts::new(2, 2, 4), Counts::new(1, 1, 2)];
        let total: Counts = values.iter().sum();
        assert_eq!(total, Counts::new(3, 3, 6));
    }

    #[test]
    fn totals_absorb_tracks_sources() {
        let mut totals = Totals::new();
        totals.absorb(&Counts::new(1, 2, 13));
        totals.absorb(&Counts::zero());
        assert_eq!(totals.sources, 2);
        assert_eq!(totals.counts, Counts::new(1, 2, 13));
    }

    #[test]
    fn totals_from_iter_of_nothing_is_zero() {
        let totals: Totals = core::iter::empty::<&Counts>().collect();
        assert_eq!(totals, Totals::new());
        assert!(totals.counts.is_zero());
    }
}
