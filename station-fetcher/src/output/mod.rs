//! JSON snapshot output.

mod document;
mod error;
mod writer;

pub use document::{DATA_SOURCE, DESCRIPTION, Metadata, StationDocument};
pub use error::OutputError;
pub use writer::{DEFAULT_OUTPUT_PATH, read_snapshot, write_snapshot};
