//! Overpass API client.
//!
//! Sends the fixed railway query for China to an Overpass interpreter and
//! returns the raw `elements` of the response. Elements are left as
//! untyped JSON so that decoding failures stay local to one record.

mod client;
mod error;
mod query;
mod types;

pub use client::{OverpassClient, OverpassConfig};
pub use error::OverpassError;
pub use query::CHINA_RAILWAY_QUERY;
pub use types::{OverpassResponse, RawElement};
