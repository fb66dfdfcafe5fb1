//! Human-readable error report
//!
//! One line per error record, in discovery order, followed by a summary:
//!
//! ```text
//! 18:29  Unopened  </ul>
//! 30:13  Unopened  </footr>  (unknown tag)
//! 15:29  Unclosed  <u>  hint: Possible misspelled tag: ul
//! 28:13  Unclosed  <footer>  hint: Possible misspelled tag: footr
//! 4 error(s): 2 unopened, 2 unclosed, 2 with hints
//! ```
//!
//! Names missing from the configured known-tag vocabulary are flagged as unknown.

use crate::analysis::{AnalysisResult, ErrorRecord};
use crate::config::LexyConfig;
use crate::location::SourceLocation;

pub fn to_report_str(source: &str, result: &AnalysisResult, config: &LexyConfig) -> String {
    let location = SourceLocation::new(source);
    let mut report = String::new();

    for record in &result.errors {
        report.push_str(&format_record(&location, record, config));
        report.push('\n');
    }

    report.push_str(&result.summary().to_string());
    report.push('\n');

    if result.path_desyncs > 0 {
        report.push_str(&format!(
            "{} closing tag(s) desynchronized the structure path\n",
            result.path_desyncs
        ));
    }
    report
}

fn format_record(location: &SourceLocation, record: &ErrorRecord, config: &LexyConfig) -> String {
    let position = location.char_to_position(record.span.start);
    let mut line = format!("{}  {}  {}", position, record.error, record.span.raw);
    if let Some(hint) = &record.hint {
        line.push_str("  hint: ");
        line.push_str(hint);
    }
    if !config.is_known_tag(record.tag()) {
        line.push_str("  (unknown tag)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_defaults;
    use crate::matching::scan;

    #[test]
    fn reports_records_with_positions_and_hints() {
        let source = "<nav>\n  <u><li>x</li></ul>\n</nav>";
        let result = scan(source);
        let config = load_defaults().unwrap();
        insta::assert_snapshot!(to_report_str(source, &result, &config), @r"
        2:16  Unopened  </ul>
        2:3  Unclosed  <u>  hint: Possible misspelled tag: ul
        2 error(s): 1 unopened, 1 unclosed, 1 with hints
        1 closing tag(s) desynchronized the structure path
        ");
    }

    #[test]
    fn flags_unknown_tags() {
        let source = "<footer></footr>";
        let result = scan(source);
        let config = load_defaults().unwrap();
        let report = to_report_str(source, &result, &config);
        let first = report.lines().next().unwrap();
        assert_eq!(first, "1:9  Unopened  </footr>  (unknown tag)");
    }

    #[test]
    fn clean_document_reports_summary_only() {
        let source = "<p>fine</p>";
        let result = scan(source);
        let config = load_defaults().unwrap();
        assert_eq!(
            to_report_str(source, &result, &config),
            "no errors (1 tags in structure)\n"
        );
    }
}
