pub mod document;
pub mod error;
pub mod parser;

pub use document::{DocumentConverter, convert_document};
pub use error::GeometryError;
pub use parser::parse_geometry;

use serde_json::Value;

use crate::domain::Conversion;
use crate::geometry::walker::convert;

/// Parse and convert one GeoJSON geometry value
///
/// A value without `type` gives [`Conversion::NotGeometry`]; unsupported
/// types come back unchanged after a logged diagnostic.
pub fn convert_value(value: &Value, dims: Option<usize>) -> Result<Conversion, GeometryError> {
    Ok(match parse_geometry(value)? {
        Conversion::Geometry(geometry) => Conversion::Geometry(convert(&geometry, dims)),
        Conversion::NotGeometry => Conversion::NotGeometry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_value_examples() {
        let cases = [
            (
                json!({"type": "Polygon", "coordinates": [[[0, 0], [0, 0]]]}),
                json!({"type": "Polygon", "coordinates": [[[0.0, 0.0], [0.0, 0.0]]]}),
            ),
            (
                json!({"type": "MultiPolygon", "coordinates": [[[[0, 0]]], [[[0, 0]]]]}),
                json!({"type": "MultiPolygon", "coordinates": [[[[0.0, 0.0]]], [[[0.0, 0.0]]]]}),
            ),
            (
                json!({"type": "Polygon", "coordinates": [[[0, 0], [1]]]}),
                json!({"type": "Polygon", "coordinates": [[[0.0, 0.0]]]}),
            ),
            (
                json!({"type": "LineString", "coordinates": [[0, 0]]}),
                json!({"type": "LineString", "coordinates": [[0, 0]]}),
            ),
            (json!({}), json!([])),
            (
                json!({"type": "Polygon", "coordinates": [[[0, 0, 42]]], "dims": 3}),
                json!({"type": "Polygon", "coordinates": [[[0.0, 0.0, 42.0]]], "dims": 3}),
            ),
        ];

        for (input, expected) in cases {
            let output = convert_value(&input, None).unwrap();
            assert_eq!(output.to_value(), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_foreign_members_survive() {
        let input = json!({
            "type": "MultiPolygon",
            "coordinates": [],
            "crs": {"type": "name", "properties": {"name": "EPSG:3857"}},
            "bbox": [0, 0, 1, 1]
        });
        let output = convert_value(&input, None).unwrap().to_value();
        assert_eq!(output["crs"], input["crs"]);
        assert_eq!(output["bbox"], input["bbox"]);
        assert_eq!(output["coordinates"], json!([]));
    }
}
