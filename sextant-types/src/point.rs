use std::fmt::{Display, Formatter};

use bytes::BufMut;
use geojson::{Position, Value};

use crate::error::GeometryError;
use crate::geojson::{point_from_position, position_from_point, unexpected_type};
use crate::geometry::Geometry;
use crate::geometry_type::GeometryType;
use crate::traits::{GeometryElement, GeometryValue};
use crate::wkb::WkbReader;
use crate::wkt::WktParser;

/// A 2d point with an optional spatial reference id.
///
/// The point stores latitude and longitude. In x/y terms `x` is the longitude (easting) and `y` is the latitude
/// (northing), and that is the order every format writes them in: `x y` in WKT and `[x, y]` in GeoJSON.
///
/// Points compare by coordinates only, the SRID does not take part in equality.
///
/// Coordinates are expected to be finite. WKB stores any `f64`, but WKT and GeoJSON have no notation for NaN or
/// infinity: such a point is written as `NaN`/`inf` in WKT, which the WKT reader rejects, and as `null` in GeoJSON.
/// Use [`Point::try_new`] to construct points from untrusted numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    lat: f64,
    lng: f64,
    srid: Option<u32>,
}

impl Point {
    /// Creates a new point from latitude and longitude.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            srid: None,
        }
    }

    /// Creates a new point from `x` (longitude) and `y` (latitude).
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(y, x)
    }

    /// Creates a new point from latitude and longitude, failing with
    /// [`GeometryError::InvalidGeometryStructure`] if either of them is NaN or infinite.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, GeometryError> {
        let point = Self::new(lat, lng);
        if point.is_finite() {
            Ok(point)
        } else {
            Err(GeometryError::InvalidGeometryStructure(format!(
                "point coordinates must be finite, got {lat} {lng}"
            )))
        }
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Sets the spatial reference id of the point.
    pub const fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    /// Latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// X coordinate, same as [`Point::lng`].
    pub fn x(&self) -> f64 {
        self.lng
    }

    /// Y coordinate, same as [`Point::lat`].
    pub fn y(&self) -> f64 {
        self.lat
    }

    /// Parses a `x y` coordinate pair, e.g. `"30 10"`.
    pub fn from_pair(pair: &str) -> Result<Self, GeometryError> {
        let mut parser = WktParser::new(pair);
        let point = Self::read_wkt_item(&mut parser)?;
        parser.finish()?;
        Ok(point)
    }

    /// Formats the point as a `x y` coordinate pair.
    pub fn to_pair(&self) -> String {
        format!("{} {}", self.x(), self.y())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::wkt::write_wkt(self, f)
    }
}

impl GeometryValue for Point {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn srid(&self) -> Option<u32> {
        self.srid
    }

    fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(Value::Point(self.to_coordinates()))
    }

    fn from_geojson(geometry: geojson::Geometry) -> Result<Self, GeometryError> {
        match geometry.value {
            Value::Point(position) => Self::from_coordinates(position),
            other => Err(unexpected_type(GeometryType::Point, &other)),
        }
    }

    fn write_wkt_body(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        self.write_wkt_item(f)?;
        f.write_str(")")
    }

    fn read_wkt_body(
        geometry_type: GeometryType,
        parser: &mut WktParser<'_>,
    ) -> Result<Self, GeometryError> {
        parser.expect_type(GeometryType::Point, geometry_type)?;
        parser.left_paren()?;
        let point = Self::read_wkt_item(parser)?;
        parser.right_paren()?;
        Ok(point)
    }

    fn write_wkb_body(&self, buf: &mut Vec<u8>) {
        self.write_wkb_item(buf);
    }

    fn read_wkb_body(
        geometry_type: GeometryType,
        reader: &mut WkbReader<'_>,
    ) -> Result<Self, GeometryError> {
        reader.expect_type(GeometryType::Point, geometry_type)?;
        Self::read_wkb_item(reader)
    }
}

impl GeometryElement for Point {
    type Coordinates = Position;

    fn to_coordinates(&self) -> Position {
        position_from_point(self)
    }

    fn from_coordinates(coordinates: Position) -> Result<Self, GeometryError> {
        point_from_position(coordinates)
    }

    fn write_wkt_item(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x(), self.y())
    }

    fn read_wkt_item(parser: &mut WktParser<'_>) -> Result<Self, GeometryError> {
        let x = parser.read_number()?;
        let y = parser.read_number()?;
        Ok(Self::from_xy(x, y))
    }

    fn write_wkb_item(&self, buf: &mut Vec<u8>) {
        buf.put_f64_le(self.x());
        buf.put_f64_le(self.y());
    }

    fn read_wkb_item(reader: &mut WkbReader<'_>) -> Result<Self, GeometryError> {
        let x = reader.read_f64()?;
        let y = reader.read_f64()?;
        Ok(Self::from_xy(x, y))
    }

    fn into_geometry(self) -> Geometry {
        Geometry::Point(self)
    }

    fn try_from_geometry(geometry: Geometry) -> Result<Self, GeometryError> {
        match geometry {
            Geometry::Point(point) => Ok(point),
            other => Err(GeometryError::InvalidGeometryStructure(format!(
                "expected Point, got {}",
                other.geometry_type()
            ))),
        }
    }
}
