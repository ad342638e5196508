pub mod bounds;
pub mod interop;
pub mod projection;
pub mod validation;
pub mod walker;

pub use bounds::Bounds;
pub use interop::{to_geo, to_geo_polygon};
pub use projection::{MERCATOR_HALF_EXTENT, project};
pub use validation::ConversionReport;
pub use walker::{convert, convert_geometry, convert_in_place, convert_position, convert_ring};
