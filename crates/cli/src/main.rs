use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use wcount_cli::args::Args;
use wcount_cli::config::Config;
use wcount_cli::error::Result;
use wcount_cli::{TOOL_NAME, logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        // 出力先が閉じられた場合は何も言わずに終了
        Err(e) if e.is_broken_pipe() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{TOOL_NAME}: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when at least one source failed.
fn run(args: Args) -> Result<bool> {
    let config = Config::try_from(args)?;
    log::debug!("{config:?}");
    let report = wcount_engine::run(&config)?;

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    presentation::write_report(&report, &config, &mut out, &mut err)?;

    Ok(!report.has_failures())
}
