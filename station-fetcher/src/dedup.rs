//! Filtering and duplicate removal.
//!
//! Stations are kept in first-seen order. A station is dropped if it has
//! no name at all, or if an earlier station already occupies the same
//! [`CoordKey`]. The key ignores station type, so co-located features of
//! different kinds collapse to whichever came first.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{CoordKey, Station};

/// Result of aggregating a batch of stations.
#[derive(Debug, Clone, Default)]
pub struct Aggregated {
    /// Retained stations in input order.
    pub stations: Vec<Station>,
    /// Stations dropped for having no name.
    pub nameless: usize,
    /// Stations dropped because their location was already taken.
    pub duplicates: usize,
}

/// Filter and deduplicate `stations`.
pub fn aggregate(stations: impl IntoIterator<Item = Station>) -> Aggregated {
    let mut seen: HashSet<CoordKey> = HashSet::new();
    let mut out = Aggregated::default();

    for station in stations {
        if !station.has_name() {
            out.nameless += 1;
            continue;
        }

        let key = station.coord_key();
        if !seen.insert(key) {
            debug!(
                id = station.id,
                kind = station.station_info.station_type.as_str(),
                lat = key.latitude(),
                lon = key.longitude(),
                "dropping duplicate location"
            );
            out.duplicates += 1;
            continue;
        }

        out.stations.push(station);
    }

    out
}

/// Filter and deduplicate, keeping only the retained stations.
pub fn collect_unique(stations: impl IntoIterator<Item = Station>) -> Vec<Station> {
    aggregate(stations).stations
}
