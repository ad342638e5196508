use serde_json::Value;
use thiserror::Error;

/// Structural problems found while reading GeoJSON that claims a polygonal type
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{geometry} has no coordinates member")]
    MissingCoordinates { geometry: &'static str },

    #[error("expected an array at {path}, found {found}")]
    ExpectedArray { path: String, found: &'static str },

    #[error("expected a number at {path}, found {found}")]
    ExpectedNumber { path: String, found: &'static str },

    #[error("{path}: {source}")]
    InFeature {
        path: String,
        source: Box<GeometryError>,
    },
}

/// Name of a JSON value's kind, for error messages
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
