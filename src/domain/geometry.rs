use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Ordinates of one coordinate tuple: X, Y and optionally Z and M
pub type Position = Vec<f64>;

/// Closed sequence of positions forming one polygon boundary
pub type Ring = Vec<Position>;

/// Outer boundary followed by its holes
pub type PolygonRings = Vec<Ring>;

/// Ordinates per position when neither the caller nor the geometry says otherwise
pub const DEFAULT_DIMS: usize = 2;

/// Geometry kinds the converter understands
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(PolygonRings),
    MultiPolygon(Vec<PolygonRings>),
    /// Any other `type`, kept verbatim so it can be handed back untouched
    Unsupported {
        type_value: Value,
        coordinates: Option<Value>,
    },
}

impl Geometry {
    /// The GeoJSON `type` this geometry was read from
    pub fn type_name(&self) -> String {
        match self {
            Geometry::Polygon(_) => "Polygon".to_string(),
            Geometry::MultiPolygon(_) => "MultiPolygon".to_string(),
            Geometry::Unsupported { type_value, .. } => match type_value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Geometry::Unsupported { .. })
    }

    /// All polygons of the geometry, a single one for `Polygon`
    pub fn polygons(&self) -> Vec<&PolygonRings> {
        match self {
            Geometry::Polygon(rings) => vec![rings],
            Geometry::MultiPolygon(polygons) => polygons.iter().collect(),
            Geometry::Unsupported { .. } => Vec::new(),
        }
    }

    fn coordinates_value(&self) -> Option<Value> {
        match self {
            Geometry::Polygon(rings) => Some(polygon_value(rings)),
            Geometry::MultiPolygon(polygons) => {
                Some(Value::Array(polygons.iter().map(|p| polygon_value(p)).collect()))
            }
            Geometry::Unsupported { coordinates, .. } => coordinates.clone(),
        }
    }
}

fn polygon_value(rings: &[Ring]) -> Value {
    Value::Array(
        rings
            .iter()
            .map(|ring| {
                Value::Array(
                    ring.iter()
                        .map(|position| {
                            // Non-finite ordinates become null, like JSON.stringify
                            Value::Array(position.iter().map(|&o| Value::from(o)).collect())
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

/// A GeoJSON geometry object together with everything else it carried
///
/// `dims` is the raw `dims` member, kept as written so it serializes back
/// unchanged. `members` holds every other foreign member (`crs`, `bbox`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonGeometry {
    pub geometry: Geometry,
    pub dims: Option<Value>,
    pub members: Map<String, Value>,
}

impl GeoJsonGeometry {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            dims: None,
            members: Map::new(),
        }
    }

    pub fn with_dims(mut self, dims: impl Into<Value>) -> Self {
        self.dims = Some(dims.into());
        self
    }

    /// The `dims` member parsed as an integer, if present and parseable
    pub fn declared_dims(&self) -> Option<usize> {
        self.dims.as_ref().and_then(parse_dims)
    }

    /// Dims to convert with
    ///
    /// A declared `dims` member always wins; one that does not parse counts
    /// as 0, which disables truncation and Z/M copying. Otherwise the caller's
    /// value is used, with 0 or `None` meaning [`DEFAULT_DIMS`].
    pub fn effective_dims(&self, requested: Option<usize>) -> usize {
        match &self.dims {
            Some(_) => self.declared_dims().unwrap_or(0),
            None => match requested {
                None | Some(0) => DEFAULT_DIMS,
                Some(n) => n,
            },
        }
    }

    pub fn to_value(&self) -> Value {
        let mut object = self.members.clone();
        let type_value = match &self.geometry {
            Geometry::Unsupported { type_value, .. } => type_value.clone(),
            other => Value::String(other.type_name()),
        };
        object.insert("type".to_string(), type_value);
        if let Some(coordinates) = self.geometry.coordinates_value() {
            object.insert("coordinates".to_string(), coordinates);
        }
        if let Some(dims) = &self.dims {
            object.insert("dims".to_string(), dims.clone());
        }
        Value::Object(object)
    }
}

impl From<GeoJsonGeometry> for Value {
    fn from(geometry: GeoJsonGeometry) -> Self {
        geometry.to_value()
    }
}

/// Outcome of reading and converting one GeoJSON value
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// The input had no `type` member; serializes as an empty array
    NotGeometry,
    Geometry(GeoJsonGeometry),
}

impl Conversion {
    pub fn geometry(&self) -> Option<&GeoJsonGeometry> {
        match self {
            Conversion::NotGeometry => None,
            Conversion::Geometry(g) => Some(g),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Conversion::NotGeometry => Value::Array(Vec::new()),
            Conversion::Geometry(g) => g.to_value(),
        }
    }
}

impl Serialize for Conversion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Parse a `dims` member written either as a number or a string
///
/// Strings are read by their leading integer (`" 3d"` is 3). Fractions are
/// truncated and negatives clamp to 0. Anything else yields `None`.
pub fn parse_dims(value: &Value) -> Option<usize> {
    let n = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => {
                let f = n.as_f64()?;
                if !f.is_finite() {
                    return None;
                }
                f.trunc() as i64
            }
        },
        Value::String(s) => leading_integer(s)?,
        _ => return None,
    };
    usize::try_from(n.max(0)).ok()
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
