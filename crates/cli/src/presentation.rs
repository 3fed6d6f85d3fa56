// crates/cli/src/presentation.rs
use crate::TOOL_NAME;
use crate::config::Config;
use crate::error::Result;
use serde_json::{Map, Value};
use std::io::Write;
use wcount_engine::coordinator::RunReport;
use wcount_engine::format::{Label, TOTAL_LABEL, format_line};
use wcount_engine::options::OutputFormat;
use wcount_engine::{Counts, MetricSet};

/// Write per-source lines in argument order, then the total line.
///
/// Failed sources go to `err` as `wcount: <cause>` and print nothing on `out`.
///
/// # Errors
/// Returns an error if either stream cannot be written.
pub fn write_report<W: Write, E: Write>(
    report: &RunReport,
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match config.format {
        OutputFormat::Wc => write_wc(report, config.metrics, out, err)?,
        OutputFormat::Jsonl => write_jsonl(report, config.metrics, out, err)?,
    }
    out.flush()?;
    Ok(())
}

fn write_wc<W: Write, E: Write>(
    report: &RunReport,
    metrics: MetricSet,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    for result in &report.results {
        match &result.outcome {
            Ok(counts) => {
                let line = format_line(counts, metrics, Label::for_result(result));
                out.write_all(line.as_bytes())?;
            }
            Err(e) => report_error(out, err, e)?,
        }
    }

    if report.needs_total() {
        let line = format_line(&report.totals.counts, metrics, Label::Total);
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

fn write_jsonl<W: Write, E: Write>(
    report: &RunReport,
    metrics: MetricSet,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    for result in &report.results {
        match &result.outcome {
            Ok(counts) => {
                let record = json_record("file", Some(&result.label), counts, metrics);
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }
            Err(e) => report_error(out, err, e)?,
        }
    }

    if report.needs_total() {
        let mut record = json_record("total", Some(TOTAL_LABEL), &report.totals.counts, metrics);
        if let Value::Object(obj) = &mut record {
            obj.insert("sources".to_string(), report.totals.sources.into());
        }
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }
    Ok(())
}

fn report_error<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    e: &wcount_engine::error::SourceError,
) -> Result<()> {
    // Keep stdout and stderr interleaved in argument order on a terminal.
    out.flush()?;
    writeln!(err, "{TOOL_NAME}: {e}")?;
    Ok(())
}

fn json_record(kind: &str, label: Option<&str>, counts: &Counts, metrics: MetricSet) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), kind.into());
    if let Some(label) = label {
        obj.insert("label".to_string(), label.into());
    }
    for (metric, value) in metrics.columns(counts) {
        obj.insert(metric.name().to_string(), value.into());
    }
    Value::Object(obj)
}
