//! The snapshot document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Station;

pub const DATA_SOURCE: &str = "OpenStreetMap via Overpass API";
pub const DESCRIPTION: &str = "Railway stations and stops in China";

/// Format of `generated_at`, always in UTC.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Snapshot metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_stations: usize,
    pub data_source: String,
    pub generated_at: String,
    pub description: String,
}

/// Top-level output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDocument {
    pub metadata: Metadata,
    pub stations: Vec<Station>,
}

impl StationDocument {
    /// Wrap `stations` with metadata stamped at `generated_at`.
    pub fn new(stations: Vec<Station>, generated_at: DateTime<Utc>) -> Self {
        Self {
            metadata: Metadata {
                total_stations: stations.len(),
                data_source: DATA_SOURCE.to_string(),
                generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
                description: DESCRIPTION.to_string(),
            },
            stations,
        }
    }

    /// Wrap `stations` with metadata stamped now.
    pub fn now(stations: Vec<Station>) -> Self {
        Self::new(stations, Utc::now())
    }
}
