// crates/engine/src/worker.rs
use crate::cancel::CancelToken;
use crate::error::SourceError;
use crate::processor::{CountError, count_reader};
use crate::source::{SourceDescriptor, SourceOpener};
use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use wcount_core::Counts;

/// Outcome of counting one source. Produced once, never mutated.
#[derive(Debug)]
pub struct CountResult {
    pub label: String,
    pub source: SourceDescriptor,
    pub outcome: Result<Counts, SourceError>,
}

impl CountResult {
    #[must_use]
    pub fn counts(&self) -> Option<&Counts> {
        self.outcome.as_ref().ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<&SourceError> {
        self.outcome.as_ref().err()
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub(crate) fn lost(source: &SourceDescriptor) -> Self {
        Self {
            label: source.label().into_owned(),
            source: source.clone(),
            outcome: Err(SourceError::Lost {
                name: source.display_name().into_owned(),
            }),
        }
    }
}

/// Counts exactly one source and never lets its failure escape.
pub struct SourceWorker<'a, O: SourceOpener + ?Sized> {
    source: &'a SourceDescriptor,
    opener: &'a O,
    buffer_size: usize,
    cancel: &'a CancelToken,
    /// `true` only for the first stdin source in argument order.
    owns_stdin: bool,
}

impl<'a, O: SourceOpener + ?Sized> SourceWorker<'a, O> {
    pub const fn new(
        source: &'a SourceDescriptor,
        opener: &'a O,
        buffer_size: usize,
        cancel: &'a CancelToken,
        owns_stdin: bool,
    ) -> Self {
        Self {
            source,
            opener,
            buffer_size,
            cancel,
            owns_stdin,
        }
    }

    pub fn run(self) -> CountResult {
        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| self.count())) {
            Ok(outcome) => outcome,
            Err(payload) => Err(SourceError::Panicked {
                name: self.source.display_name().into_owned(),
                message: panic_message(payload.as_ref()),
            }),
        };

        if let Err(e) = &outcome {
            log::warn!("{e}");
        }

        CountResult {
            label: self.source.label().into_owned(),
            source: self.source.clone(),
            outcome,
        }
    }

    fn count(&self) -> Result<Counts, SourceError> {
        let name = || self.source.display_name().into_owned();

        // 2番目以降の `-` は先頭の `-` が読み切った後の stdin、つまり EOF
        let mut reader: Box<dyn io::Read + '_> = if self.source.is_stdin() && !self.owns_stdin {
            Box::new(io::empty())
        } else {
            self.opener
                .open(self.source)
                .map_err(|source| SourceError::Open {
                    name: name(),
                    source,
                })?
        };

        let counts =
            count_reader(&mut reader, self.buffer_size, self.cancel).map_err(|e| match e {
                CountError::Io(source) => SourceError::Read {
                    name: name(),
                    source,
                },
                CountError::Cancelled => SourceError::Cancelled { name: name() },
            })?;

        log::debug!(
            "{}: lines={} words={} bytes={}",
            self.source.display_name(),
            counts.lines,
            counts.words,
            counts.bytes
        );
        Ok(counts)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
