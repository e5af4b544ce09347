//! Text summary builder for CLI output.
//!
//! Formats a [`RunReport`] as human-readable lines for text mode.

use crate::model::RunReport;

/// Label printed in front of the result line.
pub const RESULT_LABEL: &str = "Longest Increasing Subsequence:";

/// Pre-formatted lines for text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary. The result line always comes first so scripts can
/// read it with `head -n1`.
pub fn build_text_summary(report: &RunReport, detailed: bool) -> TextSummary {
    let mut lines = vec![format!("{RESULT_LABEL} {}", report.output)];

    if detailed {
        lines.push(format!("Tokens: {}", report.token_count));
        if let Some(run) = report.run {
            lines.push(format!("Run: start {}, length {}", run.start, run.len));
        }
    }

    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::analyze;

    #[test]
    fn test_result_line_only() {
        let report = analyze("6 1 5 9 2").unwrap();
        let summary = build_text_summary(&report, false);
        assert_eq!(
            summary.lines,
            vec!["Longest Increasing Subsequence: 1 5 9".to_string()]
        );
    }

    #[test]
    fn test_detailed_lines() {
        let report = analyze("6 2 4 6 1 5 9 2").unwrap();
        let summary = build_text_summary(&report, true);
        assert_eq!(summary.lines.len(), 3);
        assert_eq!(summary.lines[0], "Longest Increasing Subsequence: 2 4 6");
        assert_eq!(summary.lines[1], "Tokens: 8");
        assert_eq!(summary.lines[2], "Run: start 1, length 3");
    }

    #[test]
    fn test_detailed_without_run() {
        let report = analyze("").unwrap();
        let summary = build_text_summary(&report, true);
        assert_eq!(
            summary.lines,
            vec![
                "Longest Increasing Subsequence: ".to_string(),
                "Tokens: 0".to_string()
            ]
        );
    }
}
