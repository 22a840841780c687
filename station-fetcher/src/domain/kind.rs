//! Station classification from OSM tags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What kind of railway feature a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationType {
    RailwayStation,
    RailwayHalt,
    SubwayEntrance,
    TramStop,
    PublicTransportStation,
    StopPosition,
    Unknown,
}

impl StationType {
    /// Classify a node from its tags.
    ///
    /// Rules are tried in order and the first match wins, so a node tagged
    /// both `railway=halt` and `public_transport=station` is a halt.
    pub fn classify(tags: &HashMap<String, String>) -> Self {
        let tag = |key: &str| tags.get(key).map(String::as_str).unwrap_or("");

        match (tag("railway"), tag("public_transport"), tag("amenity")) {
            ("station", _, _) | (_, _, "train_station") => StationType::RailwayStation,
            ("halt", _, _) => StationType::RailwayHalt,
            ("subway_entrance", _, _) => StationType::SubwayEntrance,
            ("tram_stop", _, _) => StationType::TramStop,
            (_, "station", _) => StationType::PublicTransportStation,
            (_, "stop_position", _) => StationType::StopPosition,
            _ => StationType::Unknown,
        }
    }

    /// The label used in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::RailwayStation => "railway_station",
            StationType::RailwayHalt => "railway_halt",
            StationType::SubwayEntrance => "subway_entrance",
            StationType::TramStop => "tram_stop",
            StationType::PublicTransportStation => "public_transport_station",
            StationType::StopPosition => "stop_position",
            StationType::Unknown => "unknown",
        }
    }
}
