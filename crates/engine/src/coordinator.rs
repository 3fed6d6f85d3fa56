// crates/engine/src/coordinator.rs
use crate::cancel::CancelToken;
use crate::config::Config;
use crate::error::{EngineError, Result, SourceError};
use crate::options::Dispatch;
use crate::source::{SourceDescriptor, SourceOpener};
use crate::worker::{CountResult, SourceWorker};
use crossbeam_channel::Sender;
use std::thread;
use wcount_core::Totals;

/// Everything a run produced, in argument order.
#[derive(Debug)]
pub struct RunReport {
    pub results: Vec<CountResult>,
    /// Sum over the successful results only.
    pub totals: Totals,
}

impl RunReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| !r.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &SourceError> {
        self.results.iter().filter_map(CountResult::error)
    }

    /// A total line is printed only when more than one source was given.
    #[must_use]
    pub fn needs_total(&self) -> bool {
        self.results.len() > 1
    }
}

type Slot = (usize, CountResult);

/// Fans sources out to workers and folds their results back in order.
pub struct Coordinator<'a, O: SourceOpener + ?Sized> {
    config: &'a Config,
    opener: &'a O,
    cancel: CancelToken,
}

impl<'a, O: SourceOpener + ?Sized> Coordinator<'a, O> {
    pub fn new(config: &'a Config, opener: &'a O) -> Self {
        Self {
            config,
            opener,
            cancel: CancelToken::new(),
        }
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Count every source and wait for all of them.
    ///
    /// # Errors
    /// Fails only when workers cannot be started. Per-source failures are
    /// reported inside the returned [`RunReport`].
    pub fn execute(&self) -> Result<RunReport> {
        let sources = self.config.effective_sources();
        let n = sources.len();
        let dispatch = self.config.dispatch();
        log::debug!("dispatching {n} source(s) with {dispatch:?}");

        // Capacity n: a finished worker never waits on the coordinator.
        let (tx, rx) = crossbeam_channel::bounded::<Slot>(n);
        // Only the first `-` reads the live stream, whatever the completion order.
        let stdin_owner = sources.iter().position(SourceDescriptor::is_stdin);

        match dispatch {
            Dispatch::PerSource => self.spawn_threads(&sources, stdin_owner, &tx)?,
            Dispatch::Pool(size) => self.spawn_pool(size, &sources, stdin_owner, &tx)?,
        }
        drop(tx);

        let mut slots: Vec<Option<CountResult>> = (0..n).map(|_| None).collect();
        for (index, result) in rx.iter() {
            slots[index] = Some(result);
        }

        let results: Vec<CountResult> = slots
            .into_iter()
            .zip(sources.iter())
            .map(|(slot, source)| slot.unwrap_or_else(|| CountResult::lost(source)))
            .collect();

        let totals: Totals = results.iter().filter_map(CountResult::counts).collect();
        log::info!(
            "counted {} of {} source(s): lines={} words={} bytes={}",
            totals.sources,
            n,
            totals.counts.lines,
            totals.counts.words,
            totals.counts.bytes
        );

        Ok(RunReport { results, totals })
    }

    fn worker<'s>(
        &'s self,
        source: &'s SourceDescriptor,
        owns_stdin: bool,
    ) -> SourceWorker<'s, O> {
        SourceWorker::new(
            source,
            self.opener,
            self.config.buffer_size,
            &self.cancel,
            owns_stdin,
        )
    }

    fn spawn_threads(
        &self,
        sources: &[SourceDescriptor],
        stdin_owner: Option<usize>,
        tx: &Sender<Slot>,
    ) -> Result<()> {
        thread::scope(|scope| -> Result<()> {
            for (index, source) in sources.iter().enumerate() {
                let tx = tx.clone();
                let worker = self.worker(source, stdin_owner == Some(index));
                thread::Builder::new()
                    .name(format!("wcount-worker-{index}"))
                    .spawn_scoped(scope, move || {
                        let _ = tx.send((index, worker.run()));
                    })
                    .map_err(EngineError::Spawn)?;
            }
            Ok(())
        })
    }

    fn spawn_pool(
        &self,
        size: usize,
        sources: &[SourceDescriptor],
        stdin_owner: Option<usize>,
        tx: &Sender<Slot>,
    ) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(size)
            .thread_name(|i| format!("wcount-pool-{i}"))
            .build()?;

        pool.scope(|scope| {
            for (index, source) in sources.iter().enumerate() {
                let tx = tx.clone();
                let worker = self.worker(source, stdin_owner == Some(index));
                scope.spawn(move |_| {
                    let _ = tx.send((index, worker.run()));
                });
            }
        });
        Ok(())
    }
}
