//! JSON and CSV export of a run report.

use crate::model::RunReport;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

pub fn export_json(path: &Path, report: &RunReport) -> Result<()> {
    ensure_parent_dir(path)?;
    let data = serde_json::to_vec_pretty(report).context("serialize report")?;
    fs::write(path, data).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported JSON report");
    Ok(())
}

/// One row per element of the run: its offset within the run, its index in the
/// input sequence and its value.
pub fn export_csv(path: &Path, report: &RunReport) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = String::from("position,index,value\n");
    for (position, (index, value)) in report.indexed_values().enumerate() {
        out.push_str(&format!("{position},{index},{value}\n"));
    }

    let mut file =
        fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    file.write_all(out.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = report.values.len(), "exported CSV report");
    Ok(())
}
