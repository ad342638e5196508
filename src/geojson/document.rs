use serde_json::Value;

use super::error::{GeometryError, kind_of};
use super::parser::parse_geometry;
use crate::domain::Conversion;
use crate::geometry::validation::ConversionReport;
use crate::geometry::walker::convert;

/// Converts whole GeoJSON documents: a bare geometry, a Feature or a
/// FeatureCollection
///
/// Every geometry that passes through is recorded in the report.
#[derive(Debug, Default)]
pub struct DocumentConverter {
    dims: Option<usize>,
    report: ConversionReport,
}

impl DocumentConverter {
    pub fn new(dims: Option<usize>) -> Self {
        Self {
            dims,
            report: ConversionReport::default(),
        }
    }

    pub fn report(&self) -> &ConversionReport {
        &self.report
    }

    pub fn into_report(self) -> ConversionReport {
        self.report
    }

    /// Convert a document, returning the converted copy
    pub fn convert(&mut self, document: &Value) -> Result<Value, GeometryError> {
        match document.get("type").and_then(Value::as_str) {
            Some("Feature") => self.convert_feature(document, "geometry"),
            Some("FeatureCollection") => self.convert_collection(document),
            _ => self.convert_geometry(document),
        }
    }

    /// Convert a single geometry object
    pub fn convert_geometry(&mut self, value: &Value) -> Result<Value, GeometryError> {
        let conversion = match parse_geometry(value)? {
            Conversion::NotGeometry => Conversion::NotGeometry,
            Conversion::Geometry(source) => {
                let converted = convert(&source, self.dims);
                self.report.record(&source, &converted);
                Conversion::Geometry(converted)
            }
        };
        Ok(conversion.to_value())
    }

    fn convert_feature(&mut self, feature: &Value, path: &str) -> Result<Value, GeometryError> {
        let mut feature = feature.clone();
        if let Some(geometry) = feature.get_mut("geometry")
            && !geometry.is_null()
        {
            *geometry =
                self.convert_geometry(geometry)
                    .map_err(|source| GeometryError::InFeature {
                        path: path.to_string(),
                        source: Box::new(source),
                    })?;
        }
        Ok(feature)
    }

    fn convert_collection(&mut self, collection: &Value) -> Result<Value, GeometryError> {
        let features = match collection.get("features") {
            Some(Value::Array(features)) => features,
            other => {
                return Err(GeometryError::ExpectedArray {
                    path: "features".to_string(),
                    found: other.map(kind_of).unwrap_or("nothing"),
                });
            }
        };

        let converted = features
            .iter()
            .enumerate()
            .map(|(i, feature)| self.convert_feature(feature, &format!("features[{}]", i)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut collection = collection.clone();
        collection["features"] = Value::Array(converted);
        Ok(collection)
    }
}

/// Convert a GeoJSON document with default settings
pub fn convert_document(document: &Value, dims: Option<usize>) -> Result<Value, GeometryError> {
    DocumentConverter::new(dims).convert(document)
}
