//! Split-test feed ingestion.
//!
//! A feed is one row per send: the campaign, the test group it belongs to and
//! its delivery and engagement counts. Several sends may share a group label.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{cli::Metric, ranking::GroupEntry};

/// One send of a split test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRow {
    #[serde(default)]
    pub campaign: String,
    pub group: String,
    pub delivered: u64,
    #[serde(default)]
    pub unique_opens: u64,
    #[serde(default)]
    pub unique_clicks: u64,
}

fn successes(metric: Metric, row: &FeedRow) -> u64 {
    match metric {
        Metric::Opens => row.unique_opens,
        Metric::Clicks => row.unique_clicks,
    }
}

/// Read a feed from `.csv` or `.json`.
pub fn load_rows(path: &Path) -> Result<Vec<FeedRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let rows = match ext.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("json") => read_json(path)?,
        _ => return Err(anyhow!("unsupported feed format: {}", path.display())),
    };
    info!(path = %path.display(), rows = rows.len(), "loaded feed");
    Ok(rows)
}

fn read_csv(path: &Path) -> Result<Vec<FeedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<FeedRow>().enumerate() {
        let row = record.with_context(|| format!("parsing row {} of {}", idx + 1, path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

fn read_json(path: &Path) -> Result<Vec<FeedRow>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

/// Sum sends into one entry per group, in first-seen order.
///
/// Fails when a group's summed successes or deliveries exceed `u64`.
pub fn aggregate_groups(rows: &[FeedRow], metric: Metric) -> Result<Vec<GroupEntry>> {
    let mut groups: IndexMap<&str, (u64, u64)> = IndexMap::new();
    for row in rows {
        let entry = groups.entry(row.group.as_str()).or_insert((0, 0));
        entry.0 = entry
            .0
            .checked_add(successes(metric, row))
            .ok_or_else(|| anyhow!("success count overflows for group {}", row.group))?;
        entry.1 = entry
            .1
            .checked_add(row.delivered)
            .ok_or_else(|| anyhow!("delivered count overflows for group {}", row.group))?;
    }
    debug!(groups = groups.len(), ?metric, "aggregated feed");
    Ok(groups
        .into_iter()
        .map(|(label, (success, trials))| GroupEntry::new(label, success, trials))
        .collect())
}

/// Load a feed and aggregate it into groups.
pub fn load_groups(path: &Path, metric: Metric) -> Result<Vec<GroupEntry>> {
    let rows = load_rows(path)?;
    aggregate_groups(&rows, metric).with_context(|| format!("aggregating {}", path.display()))
}
