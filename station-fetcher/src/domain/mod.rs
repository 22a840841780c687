//! Domain types for the station snapshot.
//!
//! A [`Station`] is built once per raw element and never mutated after
//! that. The heuristic fields ([`StationType`], [`ImportanceLevel`]) are
//! derived from OSM tags and names by small ordered rule sets.

mod coord;
mod kind;
mod level;
mod station;

pub use coord::CoordKey;
pub use kind::StationType;
pub use level::ImportanceLevel;
pub use station::{Location, OsmData, Station, StationInfo, StationName};
