use geo::{LineString, MultiPolygon, Polygon};

use crate::domain::{Geometry, Ring};

fn ring_to_line_string(ring: &Ring) -> LineString<f64> {
    ring.iter()
        .map(|p| {
            let x = p.first().copied().unwrap_or(f64::NAN);
            let y = p.get(1).copied().unwrap_or(f64::NAN);
            geo::coord! { x: x, y: y }
        })
        .collect()
}

/// Build a `geo` polygon from rings; the first ring is the exterior
///
/// Returns `None` for a polygon without rings. Z and M are dropped.
pub fn to_geo_polygon(rings: &[Ring]) -> Option<Polygon<f64>> {
    let (exterior, interiors) = rings.split_first()?;
    Some(Polygon::new(
        ring_to_line_string(exterior),
        interiors.iter().map(ring_to_line_string).collect(),
    ))
}

/// Convert a polygonal geometry into its `geo` equivalent
///
/// Ring-less polygons inside a MultiPolygon are skipped.
pub fn to_geo(geometry: &Geometry) -> Option<geo::Geometry<f64>> {
    match geometry {
        Geometry::Polygon(rings) => to_geo_polygon(rings).map(geo::Geometry::Polygon),
        Geometry::MultiPolygon(polygons) => Some(geo::Geometry::MultiPolygon(MultiPolygon::new(
            polygons.iter().filter_map(|p| to_geo_polygon(p)).collect(),
        ))),
        Geometry::Unsupported { .. } => None,
    }
}
