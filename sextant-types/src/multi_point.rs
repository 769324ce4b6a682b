use geojson::{Position, Value};

use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::geometry_set::{GeometrySet, SetKind};
use crate::geometry_type::{GeometryType, MultiPointKind};
use crate::point::Point;
use crate::traits::GeometryElement;
use crate::wkt::WktParser;

/// Set of points.
pub type MultiPoint = GeometrySet<Point, MultiPointKind>;

impl SetKind<Point> for MultiPointKind {
    const TYPE: GeometryType = GeometryType::MultiPoint;

    fn wrap(set: MultiPoint) -> Geometry {
        Geometry::MultiPoint(set)
    }

    fn unwrap(geometry: Geometry) -> Result<MultiPoint, Geometry> {
        match geometry {
            Geometry::MultiPoint(multi_point) => Ok(multi_point),
            other => Err(other),
        }
    }

    fn geojson_value(coordinates: Vec<Position>) -> Value {
        Value::MultiPoint(coordinates)
    }

    fn geojson_coordinates(value: Value) -> Result<Vec<Position>, Value> {
        match value {
            Value::MultiPoint(coordinates) => Ok(coordinates),
            other => Err(other),
        }
    }

    // Both `MULTIPOINT(1 2,3 4)` and `MULTIPOINT((1 2),(3 4))` are in use.
    fn read_wkt_item(parser: &mut WktParser<'_>) -> Result<Point, GeometryError> {
        if !parser.at_left_paren()? {
            return Point::read_wkt_item(parser);
        }

        parser.left_paren()?;
        let point = Point::read_wkt_item(parser)?;
        parser.right_paren()?;
        Ok(point)
    }
}

impl MultiPoint {
    /// Points of the set.
    pub fn points(&self) -> &[Point] {
        self.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::GeometryValue;

    #[test]
    fn mixed_point_forms() {
        let multi_point = MultiPoint::from_wkt("MULTIPOINT((1 2), 3 4)").expect("valid wkt");
        assert_eq!(
            multi_point.points(),
            &[Point::from_xy(1.0, 2.0), Point::from_xy(3.0, 4.0)]
        );
    }
}
