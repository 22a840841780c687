//! Element conversion.

use serde::Deserialize;
use tracing::warn;

use crate::domain::{ImportanceLevel, Location, OsmData, Station, StationInfo, StationType};
use crate::overpass::RawElement;

use super::error::ExtractError;
use super::names::resolve_names;

/// Build a station from one raw Overpass element.
///
/// Fails only if the element lacks an `id`, `lat` or `lon`, or has a field
/// of the wrong type. A station with no names is still returned; dropping
/// it is the aggregator's decision.
pub fn extract_station(value: &serde_json::Value) -> Result<Station, ExtractError> {
    let element = RawElement::deserialize(value).map_err(|e| ExtractError::malformed(value, &e))?;

    let name = resolve_names(&element);
    let level = ImportanceLevel::from_chinese_name(&name.chinese);
    let tag = |key: &str| element.tag(key).unwrap_or_default().to_string();

    Ok(Station {
        id: element.id,
        location: Location {
            latitude: element.lat,
            longitude: element.lon,
        },
        station_info: StationInfo {
            station_type: StationType::classify(&element.tags),
            level,
            operator: tag("operator"),
            operator_en: tag("operator:en"),
            network: tag("network"),
        },
        osm_data: OsmData::node(element.id, tag("lastUpdate")),
        name,
    })
}

/// Extract every element, skipping (and logging) the ones that fail.
///
/// Output order follows input order.
pub fn extract_all(elements: &[serde_json::Value]) -> Vec<Station> {
    elements
        .iter()
        .filter_map(|value| match extract_station(value) {
            Ok(station) => Some(station),
            Err(e) => {
                warn!(error = %e, "skipping element");
                None
            }
        })
        .collect()
}
