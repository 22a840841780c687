//! Overpass JSON response types.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level Overpass interpreter response.
///
/// Only the fields we use are decoded. Elements stay as raw JSON and are
/// decoded one at a time by the extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,

    /// Set by Overpass when the query hit a runtime problem (e.g. timeout
    /// or memory exhaustion). The element list may be truncated.
    #[serde(default)]
    pub remark: Option<String>,
}

/// One OSM node as returned by `out body`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl RawElement {
    /// Look up a tag, treating an empty value the same as a missing one.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response() {
        let json = r#"{
            "version": 0.6,
            "generator": "Overpass API",
            "elements": [
                {"type": "node", "id": 1, "lat": 39.9, "lon": 116.4, "tags": {"name": "北京站"}}
            ]
        }"#;

        let response: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.elements.len(), 1);
        assert!(response.remark.is_none());
    }

    #[test]
    fn missing_elements_is_empty() {
        let response: OverpassResponse = serde_json::from_str(r#"{"version": 0.6}"#).unwrap();
        assert!(response.elements.is_empty());
    }

    #[test]
    fn remark_is_kept() {
        let json = r#"{"elements": [], "remark": "runtime error: Query timed out"}"#;
        let response: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.remark.as_deref(),
            Some("runtime error: Query timed out")
        );
    }

    #[test]
    fn parse_element_without_tags() {
        let element: RawElement =
            serde_json::from_str(r#"{"type": "node", "id": 7, "lat": 1.5, "lon": 2.5}"#).unwrap();
        assert_eq!(element.id, 7);
        assert!(element.tags.is_empty());
    }

    #[test]
    fn empty_tag_reads_as_missing() {
        let element: RawElement = serde_json::from_str(
            r#"{"id": 7, "lat": 1.5, "lon": 2.5, "tags": {"name:zh": "", "name": "西安站"}}"#,
        )
        .unwrap();
        assert_eq!(element.tag("name:zh"), None);
        assert_eq!(element.tag("name"), Some("西安站"));
        assert_eq!(element.tag("operator"), None);
    }
}
