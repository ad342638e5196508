use serde_json::{Map, Value};

use super::error::{GeometryError, kind_of};
use crate::domain::{Conversion, GeoJsonGeometry, Geometry, PolygonRings, Position, Ring};

/// Parse a GeoJSON geometry object into the tagged geometry type
///
/// # Algorithm
/// 1. Anything that is not an object with a `type` member is not a geometry
/// 2. `Polygon` / `MultiPolygon` coordinates are read into nested vectors
/// 3. Other types keep their `type` and `coordinates` values verbatim
/// 4. `dims` and remaining members are carried alongside
///
/// # Returns
/// * `Ok(Conversion::NotGeometry)` - no `type` member
/// * `Err` - a polygonal type whose coordinates are not nested number arrays
pub fn parse_geometry(value: &Value) -> Result<Conversion, GeometryError> {
    let Value::Object(object) = value else {
        return Ok(Conversion::NotGeometry);
    };
    let Some(type_value) = object.get("type") else {
        return Ok(Conversion::NotGeometry);
    };

    let coordinates = object.get("coordinates");
    let geometry = match type_value.as_str() {
        Some("Polygon") => Geometry::Polygon(parse_polygon(
            require_coordinates(coordinates, "Polygon")?,
            "coordinates",
        )?),
        Some("MultiPolygon") => Geometry::MultiPolygon(parse_multipolygon(require_coordinates(
            coordinates,
            "MultiPolygon",
        )?)?),
        _ => Geometry::Unsupported {
            type_value: type_value.clone(),
            coordinates: coordinates.cloned(),
        },
    };

    let members: Map<String, Value> = object
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "type" | "coordinates" | "dims"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(Conversion::Geometry(GeoJsonGeometry {
        geometry,
        dims: object.get("dims").cloned(),
        members,
    }))
}

fn require_coordinates<'a>(
    coordinates: Option<&'a Value>,
    geometry: &'static str,
) -> Result<&'a Value, GeometryError> {
    coordinates.ok_or(GeometryError::MissingCoordinates { geometry })
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, GeometryError> {
    value.as_array().ok_or_else(|| GeometryError::ExpectedArray {
        path: path.to_string(),
        found: kind_of(value),
    })
}

fn parse_multipolygon(value: &Value) -> Result<Vec<PolygonRings>, GeometryError> {
    as_array(value, "coordinates")?
        .iter()
        .enumerate()
        .map(|(i, polygon)| parse_polygon(polygon, &format!("coordinates[{}]", i)))
        .collect()
}

fn parse_polygon(value: &Value, path: &str) -> Result<PolygonRings, GeometryError> {
    as_array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, ring)| parse_ring(ring, &format!("{}[{}]", path, i)))
        .collect()
}

fn parse_ring(value: &Value, path: &str) -> Result<Ring, GeometryError> {
    as_array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, position)| parse_position(position, &format!("{}[{}]", path, i)))
        .collect()
}

fn parse_position(value: &Value, path: &str) -> Result<Position, GeometryError> {
    as_array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, ordinate)| {
            ordinate
                .as_f64()
                .ok_or_else(|| GeometryError::ExpectedNumber {
                    path: format!("{}[{}]", path, i),
                    found: kind_of(ordinate),
                })
        })
        .collect()
}
