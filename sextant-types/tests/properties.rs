use assert_matches::assert_matches;
use serde_json::json;

use sextant_types::{
    Geometry, GeometryCollection, GeometryError, GeometryType, GeometryValue, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

fn line(coords: &[(f64, f64)]) -> LineString {
    LineString::new(coords.iter().map(|&(x, y)| Point::from_xy(x, y)).collect())
        .expect("valid line")
}

fn sample_geometries() -> Vec<Geometry> {
    let triangle = line(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let square = line(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
    let hole = line(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
    let polygon = Polygon::new(vec![square.clone(), hole]).expect("valid polygon");
    let open_polygon = Polygon::new(vec![triangle.clone()]).expect("valid polygon");

    vec![
        Point::from_xy(30.0, 10.0).into(),
        Point::from_xy(-122.4194155, 37.7749295).into(),
        triangle.clone().into(),
        polygon.clone().into(),
        open_polygon.clone().into(),
        MultiPoint::new(vec![Point::from_xy(1.0, 2.0), Point::from_xy(3.0, 4.0)])
            .expect("valid multipoint")
            .into(),
        MultiLineString::new(vec![triangle.clone(), square])
            .expect("valid multilinestring")
            .into(),
        MultiPolygon::new(vec![polygon, open_polygon])
            .expect("valid multipolygon")
            .into(),
        GeometryCollection::new(vec![
            Point::from_xy(0.5, 0.5).into(),
            triangle.into(),
            GeometryCollection::new(vec![]).expect("valid").into(),
        ])
        .expect("valid collection")
        .into(),
        MultiPoint::new(vec![]).expect("valid").into(),
        MultiLineString::from_wkt("MULTILINESTRING((0 0,1 1),())")
            .expect("valid wkt")
            .into(),
        MultiPolygon::from_wkt("MULTIPOLYGON(())")
            .expect("valid wkt")
            .into(),
    ]
}

#[test]
fn wkt_round_trip() {
    for geometry in sample_geometries() {
        let wkt = geometry.to_wkt();
        assert_eq!(Geometry::from_wkt(&wkt).as_ref(), Ok(&geometry), "{wkt}");
    }
}

#[test]
fn wkt_round_trip_of_concrete_types() {
    let polygon = Polygon::from_wkt("POLYGON((0 0,1 0,0 1),(0.1 0.1,0.2 0.1,0.1 0.2))")
        .expect("valid wkt");
    assert_eq!(Polygon::from_wkt(&polygon.to_wkt()), Ok(polygon));

    let collection = GeometryCollection::from_wkt(
        "GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10),MULTIPOLYGON(((0 0,1 0,0 1))))",
    )
    .expect("valid wkt");
    assert_eq!(
        GeometryCollection::from_wkt(&collection.to_wkt()),
        Ok(collection)
    );
}

#[test]
fn wkb_round_trip() {
    for geometry in sample_geometries() {
        assert_eq!(Geometry::from_wkb(&geometry.to_wkb()).as_ref(), Ok(&geometry));
    }
}

#[test]
fn geojson_round_trip_of_well_formed_polygons() {
    let polygon = Polygon::from_wkt("POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,2 1,2 2,1 1))")
        .expect("valid wkt");
    assert_eq!(Polygon::from_geojson(polygon.to_geojson()), Ok(polygon.clone()));
    assert_eq!(
        Polygon::from_geojson_str(&polygon.to_geojson_string()),
        Ok(polygon)
    );
}

#[test]
fn geojson_round_trip_closes_open_polygons() {
    let open = Polygon::from_wkt("POLYGON((0 0,1 0,0 1))").expect("valid wkt");
    let closed = Polygon::from_wkt("POLYGON((0 0,1 0,0 1,0 0))").expect("valid wkt");
    assert_eq!(Polygon::from_geojson(open.to_geojson()), Ok(closed));
}

#[test]
fn open_triangle_gets_closed() {
    let polygon = Polygon::new(vec![line(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])])
        .expect("valid polygon");

    assert_eq!(
        polygon.to_geojson_value(),
        json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]],
        })
    );
}

#[test]
fn closed_ring_is_not_extended() {
    let polygon = Polygon::new(vec![line(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)])])
        .expect("valid polygon");

    let value = polygon.to_geojson_value();
    assert_eq!(value["coordinates"][0].as_array().map(Vec::len), Some(4));
}

#[test]
fn empty_ring_is_skipped() {
    let polygon = Polygon::from_wkt("POLYGON(())").expect("valid wkt");
    assert_eq!(polygon.len(), 1);
    assert!(polygon[0].is_empty());
    assert_eq!(
        polygon.to_geojson_value(),
        json!({"type": "Polygon", "coordinates": []})
    );

    let with_hole = Polygon::from_wkt("POLYGON((0 0,1 0,0 1),())").expect("valid wkt");
    assert_eq!(
        with_hole.to_geojson_value()["coordinates"]
            .as_array()
            .map(Vec::len),
        Some(1)
    );

    let from_geojson =
        Polygon::from_geojson_value(json!({"type": "Polygon", "coordinates": [[]]}))
            .expect("valid geojson");
    assert!(from_geojson[0].is_empty());
}

#[test]
fn type_mismatch_is_not_coerced() {
    let result = Polygon::from_geojson_value(
        json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]}),
    );
    assert_eq!(
        result,
        Err(GeometryError::UnexpectedGeoJsonType {
            expected: GeometryType::Polygon,
            found: GeometryType::LineString,
        })
    );

    assert_matches!(
        Point::from_geojson_str(r#"{"type": "MultiPoint", "coordinates": [[0, 0]]}"#),
        Err(GeometryError::UnexpectedGeoJsonType { .. })
    );
}

#[test]
fn coordinate_order() {
    let point = Point::from_wkt("POINT(30 10)").expect("valid wkt");
    assert_eq!(point.lng(), 30.0);
    assert_eq!(point.lat(), 10.0);
    assert_eq!(
        point.to_geojson_value(),
        json!({"type": "Point", "coordinates": [30.0, 10.0]})
    );

    let back = Point::from_geojson_value(json!({"type": "Point", "coordinates": [30.0, 10.0]}))
        .expect("valid geojson");
    assert_eq!(back.to_wkt(), "POINT(30 10)");
    assert_eq!(back, Point::new(10.0, 30.0));
}

#[test]
fn malformed_wkt_is_rejected() {
    assert_matches!(
        Polygon::from_wkt("POLYGON(1 2, 3 4"),
        Err(GeometryError::MalformedWkt { .. })
    );
    assert_matches!(
        Polygon::from_wkt("POLYGON((1 2, 3 4)"),
        Err(GeometryError::MalformedWkt { .. })
    );
    assert_matches!(
        Geometry::from_wkt("POLYGON((1 2, 3 4)))"),
        Err(GeometryError::MalformedWkt { .. })
    );
}

#[test]
fn error_messages_name_input_and_expectation() {
    let error = Polygon::from_wkt("POLYGON(1 2, 3 4").expect_err("malformed wkt");
    insta::assert_snapshot!(error, @"malformed WKT at `1 2, 3 4`: expected `(`");
}

#[test]
fn srid_is_a_side_channel() {
    let polygon = Polygon::from_wkt("POLYGON((0 0,1 0,0 1))")
        .expect("valid wkt")
        .with_srid(4326);
    assert_eq!(polygon.srid(), Some(4326));
    assert_eq!(polygon.to_wkt(), "POLYGON((0 0,1 0,0 1))");

    let parsed = Polygon::from_wkt(&polygon.to_wkt()).expect("valid wkt");
    assert_eq!(parsed.srid(), None);
    assert_eq!(parsed, polygon);
}
