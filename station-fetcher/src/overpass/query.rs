//! The Overpass QL query for railway stations in China.

/// Every railway-related node inside China's administrative boundary.
///
/// The server-side timeout is 600 s; the client allows longer so that a
/// slow but successful query is not cut off.
pub const CHINA_RAILWAY_QUERY: &str = r#"
[out:json][timeout:600];
area["name"="China"]["boundary"="administrative"]->.china;
(
  node["railway"="station"](area.china);
  node["railway"="halt"](area.china);
  node["railway"="subway_entrance"](area.china);
  node["railway"="tram_stop"](area.china);
  node["public_transport"="station"](area.china);
  node["public_transport"="stop_position"]["railway"](area.china);
  node["amenity"="train_station"](area.china);
);
out body;
"#;
