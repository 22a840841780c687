//! Run configuration.
//!
//! The fetcher takes no command-line arguments. Defaults can be overridden
//! through environment variables:
//!
//! - `OVERPASS_URL`: interpreter endpoint
//! - `OVERPASS_TIMEOUT_SECS`: client timeout in seconds
//! - `STATIONS_OUTPUT`: output file path

use std::path::PathBuf;

use tracing::warn;

use crate::output::DEFAULT_OUTPUT_PATH;
use crate::overpass::OverpassConfig;

pub const ENV_OVERPASS_URL: &str = "OVERPASS_URL";
pub const ENV_TIMEOUT_SECS: &str = "OVERPASS_TIMEOUT_SECS";
pub const ENV_OUTPUT_PATH: &str = "STATIONS_OUTPUT";

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Overpass client settings
    pub overpass: OverpassConfig,
    /// Where the snapshot is written
    pub output_path: PathBuf,
}

impl RunConfig {
    pub fn new(overpass: OverpassConfig, output_path: impl Into<PathBuf>) -> Self {
        Self {
            overpass,
            output_path: output_path.into(),
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a key lookup, falling back to defaults.
    ///
    /// Empty values count as unset. An unparsable timeout is logged and
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut overpass = OverpassConfig::new();
        if let Some(url) = get(ENV_OVERPASS_URL) {
            overpass = overpass.with_base_url(url);
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => overpass = overpass.with_timeout(secs),
                _ => warn!(
                    value = %raw,
                    default = overpass.timeout_secs,
                    "ignoring invalid {ENV_TIMEOUT_SECS}"
                ),
            }
        }

        let output_path = get(ENV_OUTPUT_PATH).unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        Self::new(overpass, output_path)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(OverpassConfig::new(), DEFAULT_OUTPUT_PATH)
    }
}
