// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
use wcount_engine::MetricSet;
use wcount_engine::options as engine_options;
use wcount_engine::source::SourceDescriptor;

pub use wcount_engine::config::{Config, ConfigBuilder};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let sources: Vec<_> = args
            .files
            .iter()
            .map(|path| SourceDescriptor::from_arg(path))
            .collect();
        let metrics = MetricSet::new(args.lines, args.words, args.bytes);
        let format: engine_options::OutputFormat = args.format.into();

        let config = ConfigBuilder::default()
            .sources(sources)
            .metrics(metrics)
            .jobs(args.jobs)
            .buffer_size(args.buffer_size.0)
            .format(format)
            .build()?;
        Ok(config)
    }
}

// CLI -> engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::OutputFormat, engine_options::OutputFormat, Wc, Jsonl);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        Config::try_from(Args::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn no_flags_means_all_metrics() {
        let config = config(&["wcount", "a"]);
        assert!(config.metrics.is_empty());
        assert_eq!(config.metrics.effective(), MetricSet::ALL);
    }

    #[test]
    fn dash_becomes_stdin() {
        let config = config(&["wcount", "-c", "-", "a"]);
        assert_eq!(config.sources[0], SourceDescriptor::Stdin);
        assert_eq!(config.metrics, MetricSet::new(false, false, true));
    }

    #[test]
    fn zero_buffer_is_a_config_error() {
        let args = Args::try_parse_from(["wcount", "--buffer-size", "0"]).unwrap();
        assert!(matches!(Config::try_from(args), Err(AppError::Config(_))));
    }
}
