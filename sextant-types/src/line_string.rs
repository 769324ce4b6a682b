use geojson::{Position, Value};

use crate::geometry::Geometry;
use crate::geometry_set::{GeometrySet, SetKind};
use crate::geometry_type::{GeometryType, LineStringKind};
use crate::point::Point;

/// Ordered sequence of at least one point.
pub type LineString = GeometrySet<Point, LineStringKind>;

impl SetKind<Point> for LineStringKind {
    const TYPE: GeometryType = GeometryType::LineString;
    const MIN_ITEMS: usize = 1;
    const NESTED_WKB: bool = false;

    fn wrap(set: LineString) -> Geometry {
        Geometry::LineString(set)
    }

    fn unwrap(geometry: Geometry) -> Result<LineString, Geometry> {
        match geometry {
            Geometry::LineString(line) => Ok(line),
            other => Err(other),
        }
    }

    fn geojson_value(coordinates: Vec<Position>) -> Value {
        Value::LineString(coordinates)
    }

    fn geojson_coordinates(value: Value) -> Result<Vec<Position>, Value> {
        match value {
            Value::LineString(coordinates) => Ok(coordinates),
            other => Err(other),
        }
    }
}

impl LineString {
    /// Points of the line.
    pub fn points(&self) -> &[Point] {
        self.items()
    }

    /// Returns true if the line is not empty and its first point equals the last one.
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.first() == self.last()
    }
}
