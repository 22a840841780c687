//! Station record types.
//!
//! Field names follow the output document: `name`, `location`,
//! `station_info` and `osm_data` are nested objects under each station.

use serde::{Deserialize, Serialize};

use super::coord::CoordKey;
use super::kind::StationType;
use super::level::ImportanceLevel;

/// OSM element type recorded in provenance. Only nodes are queried.
pub const OSM_NODE: &str = "node";

/// A railway station derived from one OSM node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name: StationName,
    pub location: Location,
    pub station_info: StationInfo,
    pub osm_data: OsmData,
}

impl Station {
    /// Whether the station carries any name at all.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// The duplicate-detection key for this station's location.
    pub fn coord_key(&self) -> CoordKey {
        CoordKey::new(self.location.latitude, self.location.longitude)
    }
}

/// Names of a station in the scripts we know about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationName {
    /// Chinese name as tagged in OSM.
    pub chinese: String,
    /// English name, either tagged or romanized from the Chinese name.
    pub english: String,
    /// Name in a local language, if tagged.
    pub local: String,
}

impl StationName {
    pub fn is_empty(&self) -> bool {
        self.chinese.is_empty() && self.english.is_empty() && self.local.is_empty()
    }
}

/// WGS84 position as reported by OSM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Classification and operator details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    #[serde(rename = "type")]
    pub station_type: StationType,
    pub level: ImportanceLevel,
    pub operator: String,
    pub operator_en: String,
    pub network: String,
}

/// Where the record came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsmData {
    pub osm_id: i64,
    pub osm_type: String,
    pub last_updated: String,
}

impl OsmData {
    pub fn node(osm_id: i64, last_updated: impl Into<String>) -> Self {
        Self {
            osm_id,
            osm_type: OSM_NODE.to_string(),
            last_updated: last_updated.into(),
        }
    }
}
