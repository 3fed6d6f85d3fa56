// crates/cli/src/args.rs
use crate::options::OutputFormat;
use crate::parsers::{SizeArg, parse_jobs};
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wcount",
    version = crate::VERSION,
    about = "Count lines, words and bytes in files or standard input",
    long_about = "Count lines, words and bytes in each FILE, and print a total line when \
                  more than one FILE is given. With no FILE, or when FILE is -, read \
                  standard input. Files are counted concurrently; output always follows \
                  argument order."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Print the newline counts
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// Print the word counts
    #[arg(short = 'w', long)]
    pub words: bool,

    /// Print the byte counts
    #[arg(short = 'c', long)]
    pub bytes: bool,

    /// Count at most N sources at once (0 = one per CPU). Default: all at once
    #[arg(short = 'j', long, value_name = "N", value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// Read buffer per source (e.g. 8K, 1MiB)
    #[arg(long, value_name = "SIZE", default_value = "64K")]
    pub buffer_size: SizeArg,

    /// Output format
    #[arg(long, value_enum, default_value = "wc")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Files to count; `-` is standard input
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
