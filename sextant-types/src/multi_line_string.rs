use geojson::{Position, Value};

use crate::geometry::Geometry;
use crate::geometry_set::{GeometrySet, SetKind};
use crate::geometry_type::{GeometryType, MultiLineStringKind};
use crate::line_string::LineString;

/// Set of line strings.
pub type MultiLineString = GeometrySet<LineString, MultiLineStringKind>;

impl SetKind<LineString> for MultiLineStringKind {
    const TYPE: GeometryType = GeometryType::MultiLineString;

    fn wrap(set: MultiLineString) -> Geometry {
        Geometry::MultiLineString(set)
    }

    fn unwrap(geometry: Geometry) -> Result<MultiLineString, Geometry> {
        match geometry {
            Geometry::MultiLineString(multi_line) => Ok(multi_line),
            other => Err(other),
        }
    }

    fn geojson_value(coordinates: Vec<Vec<Position>>) -> Value {
        Value::MultiLineString(coordinates)
    }

    fn geojson_coordinates(value: Value) -> Result<Vec<Vec<Position>>, Value> {
        match value {
            Value::MultiLineString(coordinates) => Ok(coordinates),
            other => Err(other),
        }
    }
}

impl MultiLineString {
    /// Lines of the set.
    pub fn line_strings(&self) -> &[LineString] {
        self.items()
    }
}
