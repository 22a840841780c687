//! Raw Overpass element → [`Station`](crate::domain::Station) conversion.
//!
//! Extraction is a pure function of one element. Failures are per-record
//! and never abort a batch; see [`extract_all`].

mod convert;
mod error;
mod names;
mod romanize;
mod words;

pub use convert::{extract_all, extract_station};
pub use error::ExtractError;
pub use names::resolve_names;
pub use romanize::romanize;
