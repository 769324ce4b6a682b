use geojson::Value;

use crate::geometry::Geometry;
use crate::geometry_set::{GeometrySet, SetKind};
use crate::geometry_type::{GeometryCollectionKind, GeometryType};

/// Set of geometries of any type, including other collections.
pub type GeometryCollection = GeometrySet<Geometry, GeometryCollectionKind>;

impl SetKind<Geometry> for GeometryCollectionKind {
    const TYPE: GeometryType = GeometryType::GeometryCollection;

    fn wrap(set: GeometryCollection) -> Geometry {
        Geometry::GeometryCollection(set)
    }

    fn unwrap(geometry: Geometry) -> Result<GeometryCollection, Geometry> {
        match geometry {
            Geometry::GeometryCollection(collection) => Ok(collection),
            other => Err(other),
        }
    }

    fn geojson_value(coordinates: Vec<geojson::Geometry>) -> Value {
        Value::GeometryCollection(coordinates)
    }

    fn geojson_coordinates(value: Value) -> Result<Vec<geojson::Geometry>, Value> {
        match value {
            Value::GeometryCollection(geometries) => Ok(geometries),
            other => Err(other),
        }
    }
}

impl GeometryCollection {
    /// Geometries of the collection.
    pub fn geometries(&self) -> &[Geometry] {
        self.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::GeometryValue;
    use crate::{LineString, Point};
    use serde_json::json;

    #[test]
    fn geojson() {
        let collection = GeometryCollection::new(vec![
            Point::from_xy(1.0, 2.0).into(),
            LineString::new(vec![Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 1.0)])
                .expect("valid line")
                .into(),
        ])
        .expect("valid collection");

        let value = collection.to_geojson_value();
        assert_eq!(
            value,
            json!({
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Point", "coordinates": [1.0, 2.0]},
                    {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]},
                ],
            })
        );
        assert_eq!(GeometryCollection::from_geojson_value(value), Ok(collection));
    }
}
