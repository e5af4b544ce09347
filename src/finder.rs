//! Longest contiguous strictly increasing run.
//!
//! Everything here is pure: text goes in, integers and runs come out. Prompting,
//! printing and exporting live in the CLI layer.

use crate::error::ParseError;
use crate::model::{Run, RunReport};

/// Split `text` on whitespace and parse every token as a signed base-10 integer.
///
/// Blank input yields an empty sequence. The first bad token aborts the parse;
/// no partial sequence is returned.
pub fn parse(text: &str) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .map_err(|e| ParseError::from_int_error(&e, token, position))
        })
        .collect()
}

/// Locate the longest strictly increasing run in a single pass.
///
/// Ties go to the earliest run: a later run only replaces the best when it is
/// strictly longer. Returns `None` for an empty sequence.
pub fn find_longest_increasing_run(seq: &[i64]) -> Option<Run> {
    if seq.is_empty() {
        return None;
    }

    let mut best = Run { start: 0, len: 1 };
    let mut current = Run { start: 0, len: 1 };

    for i in 1..seq.len() {
        if seq[i] > seq[i - 1] {
            current.len += 1;
        } else {
            if current.len > best.len {
                best = current;
            }
            current = Run { start: i, len: 1 };
        }
    }

    // The last run is never closed inside the loop.
    if current.len > best.len {
        best = current;
    }

    Some(best)
}

/// Join integers with a single space.
pub fn format_run(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse `text` and return the earliest longest increasing run as a
/// space-separated string. Blank input gives an empty string.
pub fn find_longest_increasing_subsequence(text: &str) -> Result<String, ParseError> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }

    let numbers = parse(text)?;
    match numbers.as_slice() {
        [] => Ok(String::new()),
        [only] => Ok(only.to_string()),
        _ => Ok(find_longest_increasing_run(&numbers)
            .map(|run| format_run(&numbers[run.range()]))
            .unwrap_or_default()),
    }
}

/// Parse once and collect everything the presentation layers need.
pub fn analyze(text: &str) -> Result<RunReport, ParseError> {
    let numbers = parse(text)?;
    let run = find_longest_increasing_run(&numbers);
    let values = run
        .map(|r| numbers[r.range()].to_vec())
        .unwrap_or_default();

    Ok(RunReport {
        timestamp_utc: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "now".into()),
        token_count: numbers.len(),
        run,
        output: format_run(&values),
        values,
    })
}
