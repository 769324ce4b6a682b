//! GeoJSON codec.
//!
//! Geometries are written as GeoJSON geometry objects with `[x, y]` (`[longitude, latitude]`) positions. GeoJSON
//! linear rings must be closed and have at least four positions, so polygon rings are normalized on every write with
//! [`normalize_ring`]. The stored polygon is not changed by that.
//!
//! The reader takes a geometry object or a `Feature` with a geometry. Rings are read as given, without checks for
//! closure.

use geojson::Value;
use serde::Deserialize;

use crate::error::GeometryError;
use crate::geometry_type::GeometryType;
use crate::traits::GeometryValue;

mod position;
mod ring;

pub(crate) use position::{point_from_position, position_from_point};
pub(crate) use ring::normalize_rings;
pub use ring::{normalize_ring, MIN_RING_POSITIONS};

const FEATURE: &str = "Feature";

/// Type of the geometry a GeoJSON value describes.
pub(crate) fn value_type(value: &Value) -> GeometryType {
    match value {
        Value::Point(_) => GeometryType::Point,
        Value::LineString(_) => GeometryType::LineString,
        Value::Polygon(_) => GeometryType::Polygon,
        Value::MultiPoint(_) => GeometryType::MultiPoint,
        Value::MultiLineString(_) => GeometryType::MultiLineString,
        Value::MultiPolygon(_) => GeometryType::MultiPolygon,
        Value::GeometryCollection(_) => GeometryType::GeometryCollection,
    }
}

pub(crate) fn unexpected_type(expected: GeometryType, found: &Value) -> GeometryError {
    GeometryError::UnexpectedGeoJsonType {
        expected,
        found: value_type(found),
    }
}

pub(crate) fn from_json_value<G: GeometryValue>(
    value: serde_json::Value,
) -> Result<G, GeometryError> {
    let value = geometry_of_feature(value)?;
    let geometry = geojson::Geometry::deserialize(&value).map_err(|err| {
        log::debug!("Failed to read GeoJSON geometry: {err}");
        GeometryError::malformed_geojson(
            &value.to_string(),
            format!("a GeoJSON geometry object ({err})"),
        )
    })?;

    G::from_geojson(geometry)
}

/// Takes the geometry out of a `Feature`. Other values are returned as is.
fn geometry_of_feature(value: serde_json::Value) -> Result<serde_json::Value, GeometryError> {
    let serde_json::Value::Object(mut object) = value else {
        return Ok(value);
    };

    if object.get("type").and_then(serde_json::Value::as_str) != Some(FEATURE) {
        return Ok(serde_json::Value::Object(object));
    }

    match object.remove("geometry") {
        Some(geometry) if !geometry.is_null() => Ok(geometry),
        _ => Err(GeometryError::malformed_geojson(
            &serde_json::Value::Object(object).to_string(),
            "a Feature with a geometry",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Geometry, LineString, Point, Polygon};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn point() {
        let point = Point::from_xy(30.0, 10.0);
        assert_eq!(
            point.to_geojson_value(),
            json!({"type": "Point", "coordinates": [30.0, 10.0]})
        );
        assert_eq!(
            Point::from_geojson_value(json!({"type": "Point", "coordinates": [30, 10]})),
            Ok(point)
        );
    }

    #[test]
    fn polygon_rings_are_normalized() {
        let polygon = Polygon::from_wkt("POLYGON((0 0,1 0,0 1),(0.2 0.2),())").expect("valid wkt");
        assert_eq!(
            polygon.to_geojson_value(),
            json!({
                "type": "Polygon",
                "coordinates": [
                    [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]],
                    [[0.2, 0.2], [0.2, 0.2], [0.2, 0.2], [0.2, 0.2]],
                ],
            })
        );
    }

    #[test]
    fn line_string_is_not_normalized() {
        let line = LineString::from_wkt("LINESTRING(0 0,1 1)").expect("valid wkt");
        let text = line.to_geojson_string();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).ok(),
            Some(json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}))
        );
        assert_eq!(LineString::from_geojson_str(&text), Ok(line));
    }

    #[test]
    fn feature_geometry_is_used() {
        let feature = json!({
            "type": "Feature",
            "properties": {"name": "origin"},
            "geometry": {"type": "Point", "coordinates": [0, 0]},
        });
        assert_eq!(Point::from_geojson_value(feature), Ok(Point::new(0.0, 0.0)));

        let empty = json!({"type": "Feature", "properties": {}, "geometry": null});
        assert_matches!(
            Geometry::from_geojson_value(empty),
            Err(GeometryError::MalformedGeoJson { expected, .. }) if expected == "a Feature with a geometry"
        );
    }

    #[test]
    fn type_mismatch() {
        let line = json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]});
        assert_eq!(
            Polygon::from_geojson_value(line),
            Err(GeometryError::UnexpectedGeoJsonType {
                expected: GeometryType::Polygon,
                found: GeometryType::LineString,
            })
        );
    }

    #[test]
    fn malformed() {
        let cases = [
            json!({"type": "Polygon"}),
            json!({"type": "Polygon", "coordinates": [[0, 0], [1, 1]]}),
            json!({"type": "Point", "coordinates": ["a", "b"]}),
            json!({"type": "Circle", "coordinates": [0, 0]}),
            json!([0, 0]),
        ];
        for case in cases {
            assert_matches!(
                Geometry::from_geojson_value(case),
                Err(GeometryError::MalformedGeoJson { .. })
            );
        }

        assert_matches!(
            Point::from_geojson_str("{\"type\": \"Point\", "),
            Err(GeometryError::MalformedGeoJson { .. })
        );
    }
}
