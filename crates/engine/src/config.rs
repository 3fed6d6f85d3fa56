use crate::options::{Dispatch, OutputFormat};
use crate::processor::DEFAULT_BUFFER_SIZE;
use crate::source::SourceDescriptor;
use derive_builder::Builder;
use std::borrow::Cow;
use wcount_core::MetricSet;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Sources in argument order. Empty means standard input.
    #[builder(default)]
    pub sources: Vec<SourceDescriptor>,
    #[builder(default)]
    pub metrics: MetricSet,
    /// `None` runs one thread per source; `Some(0)` sizes the pool to the CPU count.
    #[builder(default)]
    pub jobs: Option<usize>,
    #[builder(default = "DEFAULT_BUFFER_SIZE")]
    pub buffer_size: usize,
    #[builder(default)]
    pub format: OutputFormat,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.buffer_size == Some(0) {
            return Err("buffer size must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: vec![],
            metrics: MetricSet::default(),
            jobs: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn effective_sources(&self) -> Cow<'_, [SourceDescriptor]> {
        if self.sources.is_empty() {
            Cow::Owned(vec![SourceDescriptor::Stdin])
        } else {
            Cow::Borrowed(&self.sources)
        }
    }

    #[must_use]
    pub fn dispatch(&self) -> Dispatch {
        match self.jobs {
            None => Dispatch::PerSource,
            Some(0) => Dispatch::Pool(num_cpus::get()),
            Some(n) => Dispatch::Pool(n),
        }
    }
}
