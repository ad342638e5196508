pub mod geometry;

pub use geometry::{
    Conversion, DEFAULT_DIMS, GeoJsonGeometry, Geometry, PolygonRings, Position, Ring, parse_dims,
};
