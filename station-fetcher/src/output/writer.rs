//! Atomic snapshot writer.
//!
//! The document is serialized into a temporary file next to the target
//! and renamed over it, so readers see either the old file or the complete
//! new one. Output is UTF-8 with non-ASCII text written literally.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use super::document::StationDocument;
use super::error::OutputError;

pub const DEFAULT_OUTPUT_PATH: &str = "stations.json";

/// Write `document` to `path`, creating parent directories if needed.
pub fn write_snapshot(document: &StationDocument, path: &Path) -> Result<(), OutputError> {
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }

    tmp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), stations = document.stations.len(), "wrote snapshot");
    Ok(())
}

/// Read a snapshot previously written by [`write_snapshot`].
pub fn read_snapshot(path: &Path) -> Result<StationDocument, OutputError> {
    let file = File::open(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
