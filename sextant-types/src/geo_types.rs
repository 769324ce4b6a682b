//! Conversions to and from the [`geo_types`] geometries.
//!
//! Converting into `geo_types` never fails. Note that `geo_types::Polygon` closes its rings on construction, so the
//! conversion closes open rings too. Converting back fails with [`GeometryError::InvalidGeometryStructure`] for
//! geometries that cannot be represented, e.g. a line string without points.

use geo_types::Coord;

use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::geometry_collection::GeometryCollection;
use crate::line_string::LineString;
use crate::multi_line_string::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Coord {
            x: point.x(),
            y: point.y(),
        }
    }
}

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Point::from_xy(coord.x, coord.y)
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(point: Point) -> Self {
        geo_types::Point(point.into())
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(point: geo_types::Point<f64>) -> Self {
        point.0.into()
    }
}

impl From<LineString> for geo_types::LineString<f64> {
    fn from(line: LineString) -> Self {
        geo_types::LineString::new(line.into_iter().map(Coord::from).collect())
    }
}

impl TryFrom<geo_types::LineString<f64>> for LineString {
    type Error = GeometryError;

    fn try_from(line: geo_types::LineString<f64>) -> Result<Self, Self::Error> {
        LineString::new(line.into_iter().map(Point::from).collect())
    }
}

impl From<geo_types::Line<f64>> for LineString {
    fn from(line: geo_types::Line<f64>) -> Self {
        LineString::from_parts(vec![line.start.into(), line.end.into()])
    }
}

fn line_from_geo(line: geo_types::LineString<f64>) -> LineString {
    LineString::from_parts(line.into_iter().map(Point::from).collect())
}

fn polygon_from_geo(polygon: geo_types::Polygon<f64>) -> Polygon {
    let (exterior, interiors) = polygon.into_inner();
    Polygon::from_parts(
        std::iter::once(exterior)
            .chain(interiors)
            .map(line_from_geo)
            .collect(),
    )
}

impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(polygon: Polygon) -> Self {
        let mut rings = polygon.into_iter().map(geo_types::LineString::from);
        let exterior = rings
            .next()
            .unwrap_or_else(|| geo_types::LineString::new(vec![]));
        geo_types::Polygon::new(exterior, rings.collect())
    }
}

impl TryFrom<geo_types::Polygon<f64>> for Polygon {
    type Error = GeometryError;

    fn try_from(polygon: geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        if polygon.exterior().0.is_empty() {
            return Err(GeometryError::InvalidGeometryStructure(
                "Polygon exterior has no points".to_string(),
            ));
        }

        Ok(polygon_from_geo(polygon))
    }
}

impl From<geo_types::Rect<f64>> for Polygon {
    fn from(rect: geo_types::Rect<f64>) -> Self {
        polygon_from_geo(rect.to_polygon())
    }
}

impl From<geo_types::Triangle<f64>> for Polygon {
    fn from(triangle: geo_types::Triangle<f64>) -> Self {
        polygon_from_geo(triangle.to_polygon())
    }
}

impl From<MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(multi_point: MultiPoint) -> Self {
        geo_types::MultiPoint(multi_point.into_iter().map(geo_types::Point::from).collect())
    }
}

impl From<geo_types::MultiPoint<f64>> for MultiPoint {
    fn from(multi_point: geo_types::MultiPoint<f64>) -> Self {
        MultiPoint::from_parts(multi_point.0.into_iter().map(Point::from).collect())
    }
}

impl From<MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(multi_line: MultiLineString) -> Self {
        geo_types::MultiLineString(
            multi_line
                .into_iter()
                .map(geo_types::LineString::from)
                .collect(),
        )
    }
}

impl From<geo_types::MultiLineString<f64>> for MultiLineString {
    fn from(multi_line: geo_types::MultiLineString<f64>) -> Self {
        MultiLineString::from_parts(multi_line.0.into_iter().map(line_from_geo).collect())
    }
}

impl From<MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(multi_polygon: MultiPolygon) -> Self {
        geo_types::MultiPolygon(
            multi_polygon
                .into_iter()
                .map(geo_types::Polygon::from)
                .collect(),
        )
    }
}

impl TryFrom<geo_types::MultiPolygon<f64>> for MultiPolygon {
    type Error = GeometryError;

    fn try_from(multi_polygon: geo_types::MultiPolygon<f64>) -> Result<Self, Self::Error> {
        let polygons = multi_polygon
            .0
            .into_iter()
            .map(Polygon::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        MultiPolygon::new(polygons)
    }
}

impl From<GeometryCollection> for geo_types::GeometryCollection<f64> {
    fn from(collection: GeometryCollection) -> Self {
        geo_types::GeometryCollection(
            collection
                .into_iter()
                .map(geo_types::Geometry::from)
                .collect(),
        )
    }
}

impl TryFrom<geo_types::GeometryCollection<f64>> for GeometryCollection {
    type Error = GeometryError;

    fn try_from(collection: geo_types::GeometryCollection<f64>) -> Result<Self, Self::Error> {
        let geometries = collection
            .0
            .into_iter()
            .map(Geometry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        GeometryCollection::new(geometries)
    }
}

impl From<Geometry> for geo_types::Geometry<f64> {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Point(point) => Self::Point(point.into()),
            Geometry::LineString(line) => Self::LineString(line.into()),
            Geometry::Polygon(polygon) => Self::Polygon(polygon.into()),
            Geometry::MultiPoint(multi_point) => Self::MultiPoint(multi_point.into()),
            Geometry::MultiLineString(multi_line) => Self::MultiLineString(multi_line.into()),
            Geometry::MultiPolygon(multi_polygon) => Self::MultiPolygon(multi_polygon.into()),
            Geometry::GeometryCollection(collection) => Self::GeometryCollection(collection.into()),
        }
    }
}

impl TryFrom<geo_types::Geometry<f64>> for Geometry {
    type Error = GeometryError;

    fn try_from(geometry: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        use geo_types::Geometry as Geo;

        Ok(match geometry {
            Geo::Point(point) => Point::from(point).into(),
            Geo::Line(line) => LineString::from(line).into(),
            Geo::LineString(line) => LineString::try_from(line)?.into(),
            Geo::Polygon(polygon) => Polygon::try_from(polygon)?.into(),
            Geo::MultiPoint(multi_point) => MultiPoint::from(multi_point).into(),
            Geo::MultiLineString(multi_line) => MultiLineString::from(multi_line).into(),
            Geo::MultiPolygon(multi_polygon) => MultiPolygon::try_from(multi_polygon)?.into(),
            Geo::GeometryCollection(collection) => GeometryCollection::try_from(collection)?.into(),
            Geo::Rect(rect) => Polygon::from(rect).into(),
            Geo::Triangle(triangle) => Polygon::from(triangle).into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::GeometryValue;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geo_types::{coord, point, polygon};

    #[test]
    fn point() {
        let point: geo_types::Point<f64> = Point::new(10.0, 30.0).into();
        assert_eq!(point, point!(x: 30.0, y: 10.0));
        assert_eq!(Point::from(point), Point::new(10.0, 30.0));
    }

    #[test]
    fn polygon() {
        let geo = polygon![
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 0.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 1.0)]],
        ];
        let polygon = Polygon::try_from(geo.clone()).expect("valid polygon");
        assert_eq!(
            polygon.to_wkt(),
            "POLYGON((0 0,4 0,4 4,0 0),(1 1,2 1,2 2,1 1))"
        );
        assert_eq!(geo_types::Polygon::from(polygon), geo);
    }

    #[test]
    fn open_rings_are_closed_by_geo_types() {
        let polygon = Polygon::from_wkt("POLYGON((0 0,1 0,0 1))").expect("valid wkt");
        let geo = geo_types::Polygon::from(polygon);
        assert_eq!(geo.exterior().0.len(), 4);
    }

    #[test]
    fn empty_geometries_are_rejected() {
        let empty_line = geo_types::LineString::<f64>::new(vec![]);
        assert_matches!(
            LineString::try_from(empty_line.clone()),
            Err(GeometryError::InvalidGeometryStructure(_))
        );
        assert_matches!(
            Polygon::try_from(geo_types::Polygon::new(empty_line, vec![])),
            Err(GeometryError::InvalidGeometryStructure(_))
        );
    }

    #[test]
    fn shapes_without_counterpart() {
        let line = geo_types::Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 2.0 });
        assert_eq!(LineString::from(line).to_wkt(), "LINESTRING(0 0,1 2)");

        let rect = geo_types::Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 1.0 });
        let polygon = Polygon::from(rect);
        assert_eq!(polygon[0].len(), 5);
        assert!(polygon[0].is_closed());

        let triangle = geo_types::Triangle::new(
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 },
        );
        let geometry = Geometry::try_from(geo_types::Geometry::Triangle(triangle))
            .expect("valid geometry");
        assert_eq!(geometry.geometry_type(), crate::GeometryType::Polygon);
    }

    #[test]
    fn collection() {
        let geometry = Geometry::from_wkt(
            "GEOMETRYCOLLECTION(POINT(0.1 0.2),MULTIPOINT(1 2,3 4),MULTILINESTRING((0 0,1 1)))",
        )
        .expect("valid wkt");

        let geo = geo_types::Geometry::from(geometry.clone());
        let geo_types::Geometry::GeometryCollection(collection) = &geo else {
            panic!("expected a collection, got {geo:?}");
        };
        assert_eq!(collection.0.len(), 3);

        let geo_types::Geometry::Point(first) = &collection.0[0] else {
            panic!("expected a point, got {:?}", collection.0[0]);
        };
        assert_abs_diff_eq!(first.x(), 0.1);
        assert_abs_diff_eq!(first.y(), 0.2);

        assert_eq!(Geometry::try_from(geo), Ok(geometry));
    }
}
