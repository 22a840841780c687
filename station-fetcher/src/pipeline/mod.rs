//! The fetch → extract → dedup → write run.
//!
//! Each stage owns its output and hands it to the next; nothing is shared
//! between runs. Progress and outcome are printed to stdout for the
//! operator; diagnostics go through `tracing`.

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::RunConfig;
use crate::dedup::{Aggregated, aggregate};
use crate::domain::Station;
use crate::extract::extract_all;
use crate::output::{StationDocument, write_snapshot};
use crate::overpass::OverpassClient;

#[cfg(test)]
mod pipeline_tests;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The fetch failed or returned no elements. Nothing was written.
    NoData,
    /// Elements were fetched but none survived filtering. Nothing was written.
    NoValidStations,
    /// The snapshot was written.
    Saved { count: usize, path: PathBuf },
    /// The snapshot could not be written.
    WriteFailed { path: PathBuf },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Saved { .. })
    }
}

/// Run the whole pipeline once.
pub async fn run(config: &RunConfig) -> RunOutcome {
    let elements = fetch_stage(config).await;
    if elements.is_empty() {
        return RunOutcome::NoData;
    }

    let stations = process_stage(&elements);
    if stations.is_empty() {
        return RunOutcome::NoValidStations;
    }

    write_stage(stations, config)
}

/// Fetch raw elements, reporting any failure and returning an empty list.
pub async fn fetch_stage(config: &RunConfig) -> Vec<serde_json::Value> {
    println!("Querying Overpass API for train stations in China...");

    let client = match OverpassClient::new(config.overpass.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            println!("  ✗ Request failed: {e}");
            return Vec::new();
        }
    };

    match client.fetch_elements().await {
        Ok(elements) => {
            println!("  → Successfully retrieved {} station records", elements.len());
            elements
        }
        Err(e) => {
            error!(error = %e, url = client.base_url(), "Overpass request failed");
            println!("  ✗ Request failed: {e}");
            Vec::new()
        }
    }
}

/// Extract, filter and deduplicate.
pub fn process_stage(elements: &[serde_json::Value]) -> Vec<Station> {
    println!("Processing station data...");

    let extracted = extract_all(elements);
    let skipped = elements.len() - extracted.len();

    let Aggregated {
        stations,
        nameless,
        duplicates,
    } = aggregate(extracted);

    info!(
        retained = stations.len(),
        malformed = skipped,
        nameless,
        duplicates,
        "processed elements"
    );
    println!("  → Processed {} unique stations", stations.len());
    stations
}

/// Wrap in a document and write it.
pub fn write_stage(stations: Vec<Station>, config: &RunConfig) -> RunOutcome {
    let path = config.output_path.clone();
    let count = stations.len();
    let document = StationDocument::now(stations);

    match write_snapshot(&document, &path) {
        Ok(()) => {
            println!("  → Successfully saved {count} stations to {}", path.display());
            RunOutcome::Saved { count, path }
        }
        Err(e) => {
            error!(error = %e, "failed to save snapshot");
            println!("  ✗ Failed to save to {}: {e}", path.display());
            RunOutcome::WriteFailed { path }
        }
    }
}
