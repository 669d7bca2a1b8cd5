use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// What `probe` learned about one container file.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub path: String,
    pub valid: bool,
    pub vendor_prefix: bool,
    pub frames: usize,
    pub payload_bytes: usize,
    pub truncated: bool,
    pub end_marker: bool,
    pub sample_rate: u32,
    pub duration_ms: u64,
}

pub fn print_probe(report: &ProbeReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"])
                .add_row(vec!["path".to_string(), report.path.clone()])
                .add_row(vec!["header".to_string(), header_label(report).to_string()])
                .add_row(vec!["frames".to_string(), report.frames.to_string()])
                .add_row(vec![
                    "payload bytes".to_string(),
                    report.payload_bytes.to_string(),
                ])
                .add_row(vec![
                    "end marker".to_string(),
                    yes_no(report.end_marker).to_string(),
                ])
                .add_row(vec![
                    "truncated".to_string(),
                    yes_no(report.truncated).to_string(),
                ])
                .add_row(vec![
                    "duration".to_string(),
                    format!("{} ms @ {} Hz", report.duration_ms, report.sample_rate),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{}: {} frames={} payload={}B duration={}ms@{}Hz end_marker={} truncated={}",
                report.path,
                header_label(report),
                report.frames,
                report.payload_bytes,
                report.duration_ms,
                report.sample_rate,
                yes_no(report.end_marker),
                yes_no(report.truncated),
            );
        }
    }
}

fn header_label(report: &ProbeReport) -> &'static str {
    match (report.valid, report.vendor_prefix) {
        (false, _) => "invalid",
        (true, true) => "silk-v3 (vendor-prefixed)",
        (true, false) => "silk-v3 (bare)",
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
