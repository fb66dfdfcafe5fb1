//! Output formats for scan results
//!
//! - `json` / `yaml`: the serialized [`AnalysisResult`]
//! - `report`: human-readable error lines with positions
//! - `treeviz`: the structure tree
//! - `spans`: every located tag span, before matching

pub mod report;
pub mod treeviz;

pub use report::to_report_str;
pub use treeviz::to_treeviz_str;

use crate::analysis::AnalysisResult;
use crate::config::LexyConfig;
use crate::error::LexyError;
use crate::scanning::{SpanScanner, TagKind};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Report,
    Treeviz,
    Spans,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::Yaml,
        Format::Report,
        Format::Treeviz,
        Format::Spans,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Report => "report",
            Format::Treeviz => "treeviz",
            Format::Spans => "spans",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Format {
    type Err = LexyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Format::ALL.iter().map(Format::name).collect();
                LexyError::Format(format!(
                    "unknown format '{}' (available: {})",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// Render one scanned document.
pub fn render(
    format: Format,
    source: &str,
    result: &AnalysisResult,
    config: &LexyConfig,
) -> Result<String, LexyError> {
    let output = match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            json
        }
        Format::Yaml => serde_yaml::to_string(result)?,
        Format::Report => to_report_str(source, result, config),
        Format::Treeviz => to_treeviz_str(&result.structure),
        Format::Spans => to_spans_str(source),
    };
    Ok(output)
}

/// One line per tag span: kind, char range, raw text.
pub fn to_spans_str(source: &str) -> String {
    SpanScanner::new(source)
        .map(|span| {
            let kind = match span.kind() {
                TagKind::Opening => "open ",
                TagKind::Closing => "close",
            };
            format!("{} {}\n", kind, span)
        })
        .collect()
}
