use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid feature kind '{kind}', expected 'waypoint' or 'track'")]
    InvalidFeatureKind { kind: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Invalid world description: {0}")]
    InvalidDescription(serde_json::Error),
}

/// Failures while encoding the final JSON text.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("non-finite coordinate {value} in feature {feature}")]
    NonFiniteCoordinate { feature: usize, value: f64 },

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(SerializationError::Json(e))
    }
}

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
