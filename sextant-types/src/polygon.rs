use geojson::{Position, Value};

use crate::geojson::normalize_rings;
use crate::geometry::Geometry;
use crate::geometry_set::{GeometrySet, SetKind};
use crate::geometry_type::{GeometryType, PolygonKind};
use crate::line_string::LineString;
use crate::traits::GeometryElement;

/// Polygon with the outer ring first and holes after it.
///
/// Rings are stored as given: they do not have to be closed and may have any number of points. When written to GeoJSON
/// every ring is closed and padded, and empty rings are left out, see [`crate::geojson::normalize_ring`]. WKT and
/// WKB keep the rings as they are.
pub type Polygon = GeometrySet<LineString, PolygonKind>;

impl SetKind<LineString> for PolygonKind {
    const TYPE: GeometryType = GeometryType::Polygon;
    const MIN_ITEMS: usize = 1;
    const NESTED_WKB: bool = false;

    fn wrap(set: Polygon) -> Geometry {
        Geometry::Polygon(set)
    }

    fn unwrap(geometry: Geometry) -> Result<Polygon, Geometry> {
        match geometry {
            Geometry::Polygon(polygon) => Ok(polygon),
            other => Err(other),
        }
    }

    fn geojson_value(coordinates: Vec<Vec<Position>>) -> Value {
        Value::Polygon(coordinates)
    }

    fn geojson_coordinates(value: Value) -> Result<Vec<Vec<Position>>, Value> {
        match value {
            Value::Polygon(coordinates) => Ok(coordinates),
            other => Err(other),
        }
    }

    fn item_coordinates(items: &[LineString]) -> Vec<Vec<Position>> {
        normalize_rings(items.iter().map(LineString::to_coordinates).collect())
    }
}

impl Polygon {
    /// Outer ring. `None` only for a polygon nested in a multipolygon that was parsed without rings.
    pub fn exterior(&self) -> Option<&LineString> {
        self.first()
    }

    /// Holes.
    pub fn interiors(&self) -> &[LineString] {
        self.items().get(1..).unwrap_or_default()
    }

    /// All rings, the outer one first.
    pub fn rings(&self) -> &[LineString] {
        self.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use crate::traits::GeometryValue;

    fn ring(coords: &[(f64, f64)]) -> LineString {
        LineString::new(coords.iter().map(|&(x, y)| Point::from_xy(x, y)).collect())
            .expect("valid ring")
    }

    #[test]
    fn rings() {
        let outer = ring(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        let hole = ring(&[(1.0, 1.0), (2.0, 1.0), (1.0, 2.0)]);
        let polygon = Polygon::new(vec![outer.clone(), hole.clone()]).expect("valid polygon");

        assert_eq!(polygon.exterior(), Some(&outer));
        assert_eq!(polygon.interiors(), &[hole]);
        assert_eq!(polygon.rings().len(), 2);

        let simple = Polygon::new(vec![outer]).expect("valid polygon");
        assert!(simple.interiors().is_empty());
    }

    #[test]
    fn geojson_normalization_leaves_storage_untouched() {
        let polygon =
            Polygon::new(vec![ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])]).expect("valid polygon");

        let geojson = polygon.to_geojson();
        assert_matches::assert_matches!(
            &geojson.value,
            Value::Polygon(rings) if rings[0].len() == 4
        );
        assert_eq!(polygon[0].len(), 3);
        assert_eq!(polygon.to_wkt(), "POLYGON((0 0,1 0,0 1))");
    }
}
