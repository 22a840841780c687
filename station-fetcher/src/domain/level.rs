//! Station importance heuristic.

use serde::{Deserialize, Serialize};

/// Markers in a Chinese name that indicate high-speed rail.
const HIGH_SPEED_MARKERS: [&str; 2] = ["高铁", "高速"];

/// Markers in a Chinese name that indicate a train station.
const STATION_MARKERS: [&str; 2] = ["火车站", "站"];

/// Three-tier importance rank, serialized as `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ImportanceLevel {
    /// Anything else: stops, entrances, unnamed features.
    Minor = 1,
    /// An ordinary train station.
    Station = 2,
    /// A high-speed rail station.
    HighSpeed = 3,
}

impl ImportanceLevel {
    /// Rank a station by substrings of its Chinese name.
    ///
    /// High-speed markers are checked first, so a name containing both
    /// kinds of marker is always [`ImportanceLevel::HighSpeed`].
    pub fn from_chinese_name(name: &str) -> Self {
        let contains_any = |markers: &[&str]| markers.iter().any(|m| name.contains(m));

        if contains_any(&HIGH_SPEED_MARKERS) {
            ImportanceLevel::HighSpeed
        } else if contains_any(&STATION_MARKERS) {
            ImportanceLevel::Station
        } else {
            ImportanceLevel::Minor
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<ImportanceLevel> for u8 {
    fn from(level: ImportanceLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for ImportanceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ImportanceLevel::Minor),
            2 => Ok(ImportanceLevel::Station),
            3 => Ok(ImportanceLevel::HighSpeed),
            other => Err(format!("invalid importance level: {other}")),
        }
    }
}
