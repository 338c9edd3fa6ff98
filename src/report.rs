use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::audit::{ArchiveUsage, AuditReport, CollisionReport};
use crate::cli::OutputFormat;
use crate::resolve::UsageTag;

/// Which side of the partition to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Useful,
    Useless,
}

impl Mode {
    pub fn tag(self) -> UsageTag {
        match self {
            Mode::Useful => UsageTag::Used,
            Mode::Useless => UsageTag::Unused,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Useful => "useful",
            Mode::Useless => "useless",
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    mode: Mode,
    library: String,
    scanned_jars: usize,
    archives: Vec<&'a ArchiveUsage>,
    used_classes: &'a BTreeSet<String>,
    unmatched: &'a BTreeSet<String>,
    collisions: &'a [CollisionReport],
    duration_ms: u64,
}

pub fn render(report: &AuditReport, mode: Mode, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, mode)),
        OutputFormat::Json => {
            let json = JsonReport {
                mode,
                library: report.library.to_string_lossy().to_string(),
                scanned_jars: report.archives.len(),
                archives: report.partition(mode).collect(),
                used_classes: &report.used_classes,
                unmatched: &report.unmatched,
                collisions: &report.collisions,
                duration_ms: report.duration_ms,
            };
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

/// One `useful: <jar>` / `useless: <jar>` line per archive in the partition.
pub fn render_text(report: &AuditReport, mode: Mode) -> String {
    let mut out = String::new();
    for archive in report.partition(mode) {
        out.push_str(&format!("{}: {}\n", mode.label(), archive.name));
    }
    out
}
