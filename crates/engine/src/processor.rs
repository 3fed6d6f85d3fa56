// crates/engine/src/processor.rs
use crate::cancel::CancelToken;
use std::io::{self, ErrorKind, Read};
use wcount_core::{Counts, StreamCounter};

/// Default size of the per-worker read buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug)]
pub enum CountError {
    Io(io::Error),
    Cancelled,
}

impl From<io::Error> for CountError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Stream `reader` to EOF through a single `buffer_size` buffer.
///
/// Counts gathered before an error are dropped with the counter.
///
/// # Errors
/// Returns [`CountError::Io`] on a read failure and [`CountError::Cancelled`]
/// when `cancel` fires between two reads.
pub fn count_reader<R: Read + ?Sized>(
    reader: &mut R,
    buffer_size: usize,
    cancel: &CancelToken,
) -> Result<Counts, CountError> {
    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut counter = StreamCounter::new();

    loop {
        if cancel.is_cancelled() {
            return Err(CountError::Cancelled);
        }
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            // EINTR は読み直す
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        counter.feed(&buf[..n]);
    }

    Ok(counter.finish())
}
