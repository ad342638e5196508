//! Applies the point projection to every position of a polygonal geometry
//!
//! Rings are converted position by position. A position carrying fewer
//! ordinates than `dims` ends its ring: everything converted before it is
//! kept, it and everything after it are dropped. Z and M are copied through
//! when `dims` asks for them; ordinates past the fourth never are.

use super::projection::project;
use crate::domain::{GeoJsonGeometry, Geometry, PolygonRings, Position, Ring};

/// Convert a geometry, returning a new one and leaving `input` untouched
///
/// `dims` is the caller's ordinate count; a `dims` member on the geometry
/// takes precedence. Unsupported types are reported through `log` and
/// returned as they were.
pub fn convert(input: &GeoJsonGeometry, dims: Option<usize>) -> GeoJsonGeometry {
    let dims = input.effective_dims(dims);
    GeoJsonGeometry {
        geometry: convert_geometry(&input.geometry, dims),
        dims: input.dims.clone(),
        members: input.members.clone(),
    }
}

/// Convert a geometry by replacing its coordinates in place
pub fn convert_in_place(geometry: &mut GeoJsonGeometry, dims: Option<usize>) {
    let dims = geometry.effective_dims(dims);
    match &mut geometry.geometry {
        Geometry::Polygon(rings) => *rings = convert_polygon(rings, dims),
        Geometry::MultiPolygon(polygons) => {
            *polygons = polygons.iter().map(|p| convert_polygon(p, dims)).collect();
        }
        unsupported => report_unsupported(unsupported),
    }
}

/// Convert the coordinates of an already resolved geometry
pub fn convert_geometry(geometry: &Geometry, dims: usize) -> Geometry {
    match geometry {
        Geometry::Polygon(rings) => Geometry::Polygon(convert_polygon(rings, dims)),
        Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(
            polygons.iter().map(|p| convert_polygon(p, dims)).collect(),
        ),
        unsupported => {
            report_unsupported(unsupported);
            unsupported.clone()
        }
    }
}

pub fn convert_polygon(rings: &[Ring], dims: usize) -> PolygonRings {
    rings.iter().map(|ring| convert_ring(ring, dims)).collect()
}

/// Convert one ring, stopping at the first position shorter than `dims`
pub fn convert_ring(ring: &[Position], dims: usize) -> Ring {
    ring.iter()
        .map_while(|position| convert_position(position, dims))
        .collect()
}

/// Project X/Y of one position and carry Z (dims > 2) and M (dims > 3)
///
/// Returns `None` when the position has fewer than `dims` ordinates. With
/// `dims` below 2 a missing X or Y reads as NaN.
pub fn convert_position(position: &[f64], dims: usize) -> Option<Position> {
    if position.len() < dims {
        return None;
    }

    let x = position.first().copied().unwrap_or(f64::NAN);
    let y = position.get(1).copied().unwrap_or(f64::NAN);
    let mut converted = project(x, y).to_vec();

    // len >= dims, so these indices exist
    if dims > 2 {
        converted.push(position[2]);
    }
    if dims > 3 {
        converted.push(position[3]);
    }

    Some(converted)
}

fn report_unsupported(geometry: &Geometry) {
    log::error!("Unknown Geojson format: {}", geometry.type_name());
}
