use std::fmt::{Display, Formatter};

use crate::error::GeometryError;
use crate::geometry_collection::GeometryCollection;
use crate::geometry_set::{GeometrySet, SetKind};
use crate::geometry_type::GeometryType;
use crate::line_string::LineString;
use crate::multi_line_string::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::traits::{GeometryElement, GeometryValue};
use crate::wkb::{self, WkbReader};
use crate::wkt::WktParser;

/// Maximum number of geometry collections nested into each other that WKT and WKB readers accept.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Geometry of any type.
///
/// Parsing into `Geometry` accepts every type, the variant is chosen by the keyword, the WKB type code or the GeoJSON
/// `type` member.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Point.
    Point(Point),
    /// Line string.
    LineString(LineString),
    /// Polygon.
    Polygon(Polygon),
    /// Multipoint.
    MultiPoint(MultiPoint),
    /// Multi line string.
    MultiLineString(MultiLineString),
    /// Multipolygon.
    MultiPolygon(MultiPolygon),
    /// Geometry collection.
    GeometryCollection(GeometryCollection),
}

macro_rules! dispatch {
    ($geometry:expr, $inner:ident => $body:expr) => {
        match $geometry {
            Geometry::Point($inner) => $body,
            Geometry::LineString($inner) => $body,
            Geometry::Polygon($inner) => $body,
            Geometry::MultiPoint($inner) => $body,
            Geometry::MultiLineString($inner) => $body,
            Geometry::MultiPolygon($inner) => $body,
            Geometry::GeometryCollection($inner) => $body,
        }
    };
}

impl Geometry {
    /// Sets the spatial reference id of the geometry.
    pub fn with_srid(self, srid: u32) -> Self {
        dispatch!(self, inner => inner.with_srid(srid).into())
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl<G: GeometryElement, K: SetKind<G>> From<GeometrySet<G, K>> for Geometry {
    fn from(value: GeometrySet<G, K>) -> Self {
        K::wrap(value)
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::wkt::write_wkt(self, f)
    }
}

impl GeometryValue for Geometry {
    fn geometry_type(&self) -> GeometryType {
        dispatch!(self, inner => inner.geometry_type())
    }

    fn srid(&self) -> Option<u32> {
        dispatch!(self, inner => inner.srid())
    }

    fn to_geojson(&self) -> geojson::Geometry {
        dispatch!(self, inner => inner.to_geojson())
    }

    fn from_geojson(geometry: geojson::Geometry) -> Result<Self, GeometryError> {
        match crate::geojson::value_type(&geometry.value) {
            GeometryType::Point => Point::from_geojson(geometry).map(Self::from),
            GeometryType::LineString => LineString::from_geojson(geometry).map(Self::from),
            GeometryType::Polygon => Polygon::from_geojson(geometry).map(Self::from),
            GeometryType::MultiPoint => MultiPoint::from_geojson(geometry).map(Self::from),
            GeometryType::MultiLineString => {
                MultiLineString::from_geojson(geometry).map(Self::from)
            }
            GeometryType::MultiPolygon => MultiPolygon::from_geojson(geometry).map(Self::from),
            GeometryType::GeometryCollection => {
                GeometryCollection::from_geojson(geometry).map(Self::from)
            }
        }
    }

    fn write_wkt_body(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, inner => inner.write_wkt_body(f))
    }

    fn read_wkt_body(
        geometry_type: GeometryType,
        parser: &mut WktParser<'_>,
    ) -> Result<Self, GeometryError> {
        match geometry_type {
            GeometryType::Point => Point::read_wkt_body(geometry_type, parser).map(Self::from),
            GeometryType::LineString => {
                LineString::read_wkt_body(geometry_type, parser).map(Self::from)
            }
            GeometryType::Polygon => Polygon::read_wkt_body(geometry_type, parser).map(Self::from),
            GeometryType::MultiPoint => {
                MultiPoint::read_wkt_body(geometry_type, parser).map(Self::from)
            }
            GeometryType::MultiLineString => {
                MultiLineString::read_wkt_body(geometry_type, parser).map(Self::from)
            }
            GeometryType::MultiPolygon => {
                MultiPolygon::read_wkt_body(geometry_type, parser).map(Self::from)
            }
            GeometryType::GeometryCollection => {
                GeometryCollection::read_wkt_body(geometry_type, parser).map(Self::from)
            }
        }
    }

    fn write_wkb_body(&self, buf: &mut Vec<u8>) {
        dispatch!(self, inner => inner.write_wkb_body(buf))
    }

    fn read_wkb_body(
        geometry_type: GeometryType,
        reader: &mut WkbReader<'_>,
    ) -> Result<Self, GeometryError> {
        match geometry_type {
            GeometryType::Point => Point::read_wkb_body(geometry_type, reader).map(Self::from),
            GeometryType::LineString => {
                LineString::read_wkb_body(geometry_type, reader).map(Self::from)
            }
            GeometryType::Polygon => Polygon::read_wkb_body(geometry_type, reader).map(Self::from),
            GeometryType::MultiPoint => {
                MultiPoint::read_wkb_body(geometry_type, reader).map(Self::from)
            }
            GeometryType::MultiLineString => {
                MultiLineString::read_wkb_body(geometry_type, reader).map(Self::from)
            }
            GeometryType::MultiPolygon => {
                MultiPolygon::read_wkb_body(geometry_type, reader).map(Self::from)
            }
            GeometryType::GeometryCollection => {
                GeometryCollection::read_wkb_body(geometry_type, reader).map(Self::from)
            }
        }
    }
}

/// Inside a collection a geometry is written in full, with its keyword or WKB header.
impl GeometryElement for Geometry {
    type Coordinates = geojson::Geometry;

    fn to_coordinates(&self) -> geojson::Geometry {
        self.to_geojson()
    }

    fn from_coordinates(coordinates: geojson::Geometry) -> Result<Self, GeometryError> {
        Self::from_geojson(coordinates)
    }

    fn write_wkt_item(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::wkt::write_wkt(self, f)
    }

    fn read_wkt_item(parser: &mut WktParser<'_>) -> Result<Self, GeometryError> {
        parser.nested(|parser| {
            let geometry_type = parser.read_keyword()?;
            Self::read_wkt_body(geometry_type, parser)
        })
    }

    fn write_wkb_item(&self, buf: &mut Vec<u8>) {
        wkb::write_geometry(self, buf);
    }

    fn read_wkb_item(reader: &mut WkbReader<'_>) -> Result<Self, GeometryError> {
        wkb::read_member(reader)
    }

    fn into_geometry(self) -> Geometry {
        self
    }

    fn try_from_geometry(geometry: Geometry) -> Result<Self, GeometryError> {
        Ok(geometry)
    }
}
