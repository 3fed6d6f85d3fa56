// crates/core/src/counter.rs
use crate::stats::Counts;

/// Word separators: space, `\t`, `\n`, `\x0B`, `\x0C` and `\r`.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
#[inline]
#[must_use]
pub const fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Incremental line/word/byte counter.
///
/// Feed it chunks of any size in order; the result does not depend on where
/// the chunk boundaries fall. Memory use is constant.
#[derive(Debug, Default, Clone)]
pub struct StreamCounter {
    newlines: u64,
    words: u64,
    bytes: u64,
    in_word: bool,
    last: Option<u8>,
}

impl StreamCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            newlines: 0,
            words: 0,
            bytes: 0,
            in_word: false,
            last: None,
        }
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        let Some(&last) = chunk.last() else {
            return;
        };

        self.bytes += chunk.len() as u64;
        self.newlines += bytecount::count(chunk, b'\n') as u64;

        // A word is counted at its first byte; the flag survives chunk boundaries.
        let mut in_word = self.in_word;
        let mut words = 0u64;
        for &b in chunk {
            if is_separator(b) {
                in_word = false;
            } else if !in_word {
                in_word = true;
                words += 1;
            }
        }
        self.in_word = in_word;
        self.words += words;
        self.last = Some(last);
    }

    /// Counts so far, including a trailing line that lacks its `\n`.
    #[must_use]
    pub const fn snapshot(&self) -> Counts {
        let unterminated = match self.last {
            Some(b) => b != b'\n',
            None => false,
        };
        Counts {
            lines: self.newlines + unterminated as u64,
            words: self.words,
            bytes: self.bytes,
        }
    }

    #[must_use]
    pub const fn finish(self) -> Counts {
        self.snapshot()
    }
}

/// Count lines/words/bytes of an in-memory buffer.
#[must_use]
pub fn count_bytes(input: &[u8]) -> Counts {
    let mut counter = StreamCounter::new();
    counter.feed(input);
    counter.finish()
}
