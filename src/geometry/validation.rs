//! Conversion inspection
//!
//! The walker truncates rings silently and lets NaN/Inf flow through. This
//! module compares a source geometry with its converted counterpart and
//! reports what happened, for callers that want to know:
//! - Rings shortened by an under-dimensioned position
//! - Output positions with NaN/Inf ordinates
//! - Geometry types that were passed through unconverted

use super::bounds::Bounds;
use crate::domain::{GeoJsonGeometry, Ring};

/// Accumulated result of one or more conversions
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Geometries converted (supported types only)
    pub geometries: usize,
    /// Geometries passed through because their type is not polygonal
    pub unsupported: usize,
    pub polygons: usize,
    pub rings: usize,
    /// Positions read from the source rings
    pub positions_in: usize,
    /// Positions written to the converted rings
    pub positions_out: usize,
    /// Rings that lost positions to truncation
    pub truncated_rings: usize,
    /// Output positions with NaN/Inf ordinates
    pub non_finite: usize,
    /// Bounds of all converted coordinates
    pub bounds: Option<Bounds>,
    pub warnings: Vec<String>,
}

impl ConversionReport {
    /// Compare a source geometry with its converted form and add the result
    pub fn record(&mut self, source: &GeoJsonGeometry, converted: &GeoJsonGeometry) {
        if !converted.geometry.is_supported() {
            self.unsupported += 1;
            self.warnings.push(format!(
                "Geometry type {} passed through unconverted",
                converted.geometry.type_name()
            ));
            return;
        }
        self.geometries += 1;

        let source_polygons = source.geometry.polygons();
        let converted_polygons = converted.geometry.polygons();
        self.polygons += converted_polygons.len();

        for (p, (before, after)) in source_polygons.iter().zip(&converted_polygons).enumerate() {
            for (r, (ring_in, ring_out)) in before.iter().zip(after.iter()).enumerate() {
                self.record_ring(p, r, ring_in, ring_out);
            }
        }

        if let Some(b) = Bounds::from_geometry(&converted.geometry) {
            self.bounds = Some(match self.bounds.take() {
                Some(mut existing) => {
                    existing.merge(&b);
                    existing
                }
                None => b,
            });
        }
    }

    fn record_ring(&mut self, polygon: usize, ring: usize, ring_in: &Ring, ring_out: &Ring) {
        self.rings += 1;
        self.positions_in += ring_in.len();
        self.positions_out += ring_out.len();

        if ring_out.len() < ring_in.len() {
            self.truncated_rings += 1;
            self.warnings.push(format!(
                "Polygon {} ring {} truncated at position {} of {}",
                polygon,
                ring,
                ring_out.len(),
                ring_in.len()
            ));
        }

        self.non_finite += ring_out
            .iter()
            .filter(|position| position.iter().any(|o| !o.is_finite()))
            .count();
    }

    /// Check if anything was lost or became non-finite
    pub fn has_issues(&self) -> bool {
        self.truncated_rings > 0 || self.non_finite > 0 || self.unsupported > 0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!(
                "Converted {} geometries, {} rings, {} positions, no issues",
                self.geometries, self.rings, self.positions_out
            )
        } else {
            format!(
                "Converted {} geometries ({} unsupported), {} rings, {}/{} positions kept, {} truncated rings, {} non-finite positions",
                self.geometries,
                self.unsupported,
                self.rings,
                self.positions_out,
                self.positions_in,
                self.truncated_rings,
                self.non_finite
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Geometry;
    use crate::geometry::walker::convert;
    use serde_json::json;

    #[test]
    fn test_clean_conversion() {
        let source = GeoJsonGeometry::new(Geometry::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![100_000.0, 0.0],
            vec![100_000.0, 100_000.0],
            vec![0.0, 0.0],
        ]]));
        let converted = convert(&source, None);

        let mut report = ConversionReport::default();
        report.record(&source, &converted);

        assert!(!report.has_issues());
        assert_eq!(report.geometries, 1);
        assert_eq!(report.rings, 1);
        assert_eq!(report.positions_out, 4);
        let bounds = report.bounds.as_ref().unwrap();
        assert_eq!(bounds.min_x, 0.0);
        assert!(bounds.max_x > 0.89 && bounds.max_x < 0.9);
        assert!(report.summary().contains("no issues"));
    }

    #[test]
    fn test_truncated_ring_counted() {
        let source = GeoJsonGeometry::new(Geometry::MultiPolygon(vec![
            vec![vec![vec![0.0, 0.0]]],
            vec![vec![vec![0.0, 0.0], vec![1.0], vec![2.0, 2.0]]],
        ]));
        let converted = convert(&source, None);

        let mut report = ConversionReport::default();
        report.record(&source, &converted);

        assert!(report.has_issues());
        assert_eq!(report.polygons, 2);
        assert_eq!(report.truncated_rings, 1);
        assert_eq!(report.positions_in, 4);
        assert_eq!(report.positions_out, 2);
        assert!(report.warnings[0].contains("Polygon 1 ring 0 truncated"));
    }

    #[test]
    fn test_non_finite_counted() {
        let source = GeoJsonGeometry::new(Geometry::Polygon(vec![vec![vec![f64::NAN, 0.0]]]));
        let converted = convert(&source, None);

        let mut report = ConversionReport::default();
        report.record(&source, &converted);

        assert_eq!(report.non_finite, 1);
        assert!(report.bounds.is_none());
    }

    #[test]
    fn test_unsupported_counted() {
        let source = GeoJsonGeometry::new(Geometry::Unsupported {
            type_value: json!("Point"),
            coordinates: Some(json!([0, 0])),
        });

        let mut report = ConversionReport::default();
        report.record(&source, &source);

        assert_eq!(report.unsupported, 1);
        assert_eq!(report.geometries, 0);
        assert!(report.summary().contains("1 unsupported"));
    }
}
