//! Extraction error types.

/// Why a single raw element could not become a station.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Element is missing a required field or has one of the wrong type
    #[error("malformed element {id}: {message}")]
    Malformed { id: String, message: String },
}

impl ExtractError {
    /// Build a `Malformed` error, labelling the element by its raw `id`.
    pub fn malformed(element: &serde_json::Value, err: &serde_json::Error) -> Self {
        let id = match element.get("id") {
            Some(id) => id.to_string(),
            None => "unknown".to_string(),
        };
        ExtractError::Malformed {
            id,
            message: err.to_string(),
        }
    }
}
