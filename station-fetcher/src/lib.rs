//! China railway station snapshot fetcher.
//!
//! A one-shot batch job: query OpenStreetMap through the Overpass API for
//! railway stations in China, turn each node into a [`domain::Station`],
//! drop nameless and co-located duplicates, and write a JSON snapshot.

pub mod config;
pub mod dedup;
pub mod domain;
pub mod extract;
pub mod output;
pub mod overpass;
pub mod pipeline;
