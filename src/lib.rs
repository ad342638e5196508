//! merc2geo - Convert Web Mercator (EPSG:3857) GeoJSON polygons to WGS84 degrees

pub mod config;
pub mod domain;
pub mod geojson;
pub mod geometry;

pub use domain::{Conversion, GeoJsonGeometry, Geometry};
pub use geojson::{GeometryError, convert_document, convert_value};
pub use geometry::{convert, convert_in_place, project};
