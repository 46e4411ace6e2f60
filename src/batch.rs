//! Result aggregation for single and bulk checks.
//!
//! Each entry runs parse, classify and probe on its own, and one entry's
//! failure never affects another. Bulk runs may keep several probes in
//! flight, but records always come back in input order.

use crate::classify::{classify, AddressClass};
use crate::error::BatchError;
use crate::probe::{ProbeOutcome, Prober};
use crate::types::{parse_entries, AddressEntry};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

/// Port cell value when an entry carried no port.
pub const NO_PORT: &str = "N/A";

/// Result of checking one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Address text as entered.
    pub address: String,
    /// Port text as entered, if any.
    pub port: Option<String>,
    /// Scope of the address.
    pub class: AddressClass,
    /// What the probe found.
    pub outcome: ProbeOutcome,
}

impl ResultRecord {
    /// Port for display, `N/A` when none was given.
    pub fn port_cell(&self) -> &str {
        self.port.as_deref().unwrap_or(NO_PORT)
    }

    /// Human-readable status.
    pub fn status(&self) -> String {
        self.outcome.status()
    }
}

/// All records produced by one bulk run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Records in input order.
    pub records: Vec<ResultRecord>,
}

impl BatchReport {
    /// Entries whose probe succeeded.
    pub fn reachable(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    /// Entries that were probed and failed.
    pub fn failed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, ProbeOutcome::Failed(_)))
            .count()
    }

    /// Entries skipped because the address was invalid.
    pub fn invalid(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, ProbeOutcome::Skipped(_)))
            .count()
    }
}

/// Classify and probe one entry.
pub async fn check_entry(prober: &Prober, entry: AddressEntry) -> ResultRecord {
    let classified = classify(&entry.address);
    let outcome = prober.probe(&classified, entry.port.as_deref()).await;

    ResultRecord {
        address: entry.address,
        port: entry.port,
        class: classified.class(),
        outcome,
    }
}

/// Check an address given with a separate, optional port field.
pub async fn check_single(prober: &Prober, address: &str, port: Option<&str>) -> ResultRecord {
    check_entry(prober, AddressEntry::single(address, port)).await
}

/// Check every non-blank line of `raw`.
///
/// At most `concurrency` probes are in flight; `1` checks entries strictly
/// one after another. Blank input is rejected before anything is probed.
pub async fn run_batch(
    prober: &Prober,
    raw: &str,
    concurrency: usize,
    progress: Option<&ProgressBar>,
) -> Result<BatchReport, BatchError> {
    if raw.trim().is_empty() {
        return Err(BatchError::EmptyInput);
    }

    let started_at = Utc::now();
    let start = Instant::now();

    let records: Vec<ResultRecord> = stream::iter(parse_entries(raw))
        .map(move |entry| async move {
            let record = check_entry(prober, entry).await;
            if let Some(pb) = progress {
                pb.inc(1);
                pb.set_message(record.address.clone());
            }
            record
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let report = BatchReport {
        started_at,
        duration_ms: start.elapsed().as_millis() as u64,
        records,
    };

    info!(
        entries = report.records.len(),
        reachable = report.reachable(),
        failed = report.failed(),
        invalid = report.invalid(),
        duration_ms = report.duration_ms,
        "batch complete"
    );

    Ok(report)
}
