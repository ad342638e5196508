use crate::domain::{Geometry, Position};

/// Bounding box of converted coordinates (degrees)
///
/// Non-finite ordinates are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of positions
    pub fn from_positions(positions: &[Position]) -> Option<Self> {
        let mut bounds = Self::empty();
        bounds.expand(positions);
        bounds.non_empty()
    }

    /// Bounds of every position of every ring of a polygonal geometry
    pub fn from_geometry(geometry: &Geometry) -> Option<Self> {
        let mut bounds = Self::empty();
        for polygon in geometry.polygons() {
            for ring in polygon {
                bounds.expand(ring);
            }
        }
        bounds.non_empty()
    }

    /// Expand bounds to include another set of positions
    pub fn expand(&mut self, positions: &[Position]) {
        for position in positions {
            let (Some(&x), Some(&y)) = (position.first(), position.get(1)) else {
                continue;
            };
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            self.min_x = self.min_x.min(x);
            self.max_x = self.max_x.max(x);
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
    }

    /// Grow to cover another box
    pub fn merge(&mut self, other: &Bounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn empty() -> Self {
        Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
        }
    }

    fn non_empty(self) -> Option<Self> {
        (self.min_x <= self.max_x).then_some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_positions() {
        let positions = vec![vec![0.0, 0.0], vec![10.0, 20.0, 99.0], vec![5.0, 10.0]];
        let bounds = Bounds::from_positions(&positions).unwrap();

        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 10.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 20.0);
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 20.0);
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let positions = vec![vec![f64::NAN, 1.0], vec![2.0, 3.0]];
        let bounds = Bounds::from_positions(&positions).unwrap();
        assert_eq!(bounds.min_x, 2.0);
        assert_eq!(bounds.max_y, 3.0);

        assert!(Bounds::from_positions(&[vec![f64::NAN, f64::NAN]]).is_none());
        assert!(Bounds::from_positions(&[]).is_none());
    }

    #[test]
    fn test_bounds_from_multipolygon() {
        let geometry = Geometry::MultiPolygon(vec![
            vec![vec![vec![-10.0, -5.0]]],
            vec![vec![vec![30.0, 40.0]], vec![vec![0.0, 0.0]]],
        ]);
        let bounds = Bounds::from_geometry(&geometry).unwrap();
        assert_eq!(bounds.min_x, -10.0);
        assert_eq!(bounds.max_x, 30.0);
        assert_eq!(bounds.min_y, -5.0);
        assert_eq!(bounds.max_y, 40.0);
    }

    #[test]
    fn test_merge() {
        let mut a = Bounds::from_positions(&[vec![0.0, 0.0]]).unwrap();
        let b = Bounds::from_positions(&[vec![3.0, -2.0]]).unwrap();
        a.merge(&b);
        assert_eq!(a.max_x, 3.0);
        assert_eq!(a.min_y, -2.0);
    }
}
