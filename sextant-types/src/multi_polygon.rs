use geojson::{PolygonType, Value};

use crate::geometry::Geometry;
use crate::geometry_set::{GeometrySet, SetKind};
use crate::geometry_type::{GeometryType, MultiPolygonKind};
use crate::polygon::Polygon;

/// Set of polygons. Rings of every polygon are normalized when written to GeoJSON, same as for a single
/// [`Polygon`].
pub type MultiPolygon = GeometrySet<Polygon, MultiPolygonKind>;

impl SetKind<Polygon> for MultiPolygonKind {
    const TYPE: GeometryType = GeometryType::MultiPolygon;

    fn wrap(set: MultiPolygon) -> Geometry {
        Geometry::MultiPolygon(set)
    }

    fn unwrap(geometry: Geometry) -> Result<MultiPolygon, Geometry> {
        match geometry {
            Geometry::MultiPolygon(multi_polygon) => Ok(multi_polygon),
            other => Err(other),
        }
    }

    fn geojson_value(coordinates: Vec<PolygonType>) -> Value {
        Value::MultiPolygon(coordinates)
    }

    fn geojson_coordinates(value: Value) -> Result<Vec<PolygonType>, Value> {
        match value {
            Value::MultiPolygon(coordinates) => Ok(coordinates),
            other => Err(other),
        }
    }
}

impl MultiPolygon {
    /// Polygons of the set.
    pub fn polygons(&self) -> &[Polygon] {
        self.items()
    }
}
