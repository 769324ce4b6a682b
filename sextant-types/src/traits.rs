//! Capability traits shared by all geometry types.
//!
//! [`GeometryValue`] is the public face of a geometry: the format conversions available for every type.
//! [`GeometryElement`] describes how a value is written and read when it is an item of a composite geometry. The
//! codecs are written once against these two traits, the types only provide their keyword and shape.

use std::fmt::Formatter;

use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::geometry_type::GeometryType;
use crate::wkb::WkbReader;
use crate::wkt::WktParser;

/// A geometry that can be converted to and from WKT, WKB and GeoJSON.
pub trait GeometryValue: Sized {
    /// Type of the geometry.
    fn geometry_type(&self) -> GeometryType;

    /// Spatial reference id of the geometry, if one was set.
    ///
    /// For composite geometries this is the id of the whole composite, ids of the items are not consulted.
    fn srid(&self) -> Option<u32>;

    /// Converts the geometry into a GeoJSON geometry object.
    ///
    /// Positions are `[x, y]`, i.e. `[longitude, latitude]`. Polygon rings are closed and padded to at least four
    /// positions, see [`crate::geojson`].
    fn to_geojson(&self) -> geojson::Geometry;

    /// Builds the geometry from a GeoJSON geometry object.
    fn from_geojson(geometry: geojson::Geometry) -> Result<Self, GeometryError>;

    /// Writes everything that follows the WKT keyword.
    #[doc(hidden)]
    fn write_wkt_body(&self, f: &mut Formatter<'_>) -> std::fmt::Result;

    /// Reads everything that follows the WKT keyword. The keyword is already consumed and passed in as
    /// `geometry_type`.
    #[doc(hidden)]
    fn read_wkt_body(
        geometry_type: GeometryType,
        parser: &mut WktParser<'_>,
    ) -> Result<Self, GeometryError>;

    /// Writes everything that follows the WKB header.
    #[doc(hidden)]
    fn write_wkb_body(&self, buf: &mut Vec<u8>);

    /// Reads everything that follows the WKB header.
    #[doc(hidden)]
    fn read_wkb_body(
        geometry_type: GeometryType,
        reader: &mut WkbReader<'_>,
    ) -> Result<Self, GeometryError>;

    /// Serializes the geometry as WKT, e.g. `POLYGON((0 0,1 0,0 1))`.
    fn to_wkt(&self) -> String {
        crate::wkt::to_wkt(self)
    }

    /// Parses WKT text.
    ///
    /// Fails with [`GeometryError::MalformedWkt`] if the text is not valid WKT or describes a geometry of another
    /// type. The returned value has no SRID.
    fn from_wkt(wkt: &str) -> Result<Self, GeometryError> {
        crate::wkt::from_wkt(wkt)
    }

    /// Serializes the geometry as little-endian WKB.
    fn to_wkb(&self) -> Vec<u8> {
        crate::wkb::to_wkb(self)
    }

    /// Parses WKB in either byte order.
    fn from_wkb(wkb: &[u8]) -> Result<Self, GeometryError> {
        crate::wkb::from_wkb(wkb)
    }

    /// Converts the geometry into a GeoJSON geometry as a JSON value.
    fn to_geojson_value(&self) -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::from(&self.to_geojson()))
    }

    /// Builds the geometry from a JSON value holding a GeoJSON geometry or a `Feature` with a geometry.
    fn from_geojson_value(value: serde_json::Value) -> Result<Self, GeometryError> {
        crate::geojson::from_json_value(value)
    }

    /// Serializes the geometry as GeoJSON text.
    fn to_geojson_string(&self) -> String {
        self.to_geojson_value().to_string()
    }

    /// Parses GeoJSON text holding a geometry or a `Feature` with a geometry.
    fn from_geojson_str(json: &str) -> Result<Self, GeometryError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|err| GeometryError::malformed_geojson(json, format!("JSON text ({err})")))?;
        Self::from_geojson_value(value)
    }
}

/// A geometry that can be an item of a composite geometry.
///
/// Items are written differently from standalone geometries: a point inside a line string is just `x y` in WKT and a
/// bare position in GeoJSON. Items read through this trait are stored as given, minimum item counts are only checked
/// for standalone geometries.
pub trait GeometryElement: GeometryValue {
    /// GeoJSON representation of the item inside its parent's `coordinates`.
    type Coordinates;

    /// Converts the item into GeoJSON coordinates.
    fn to_coordinates(&self) -> Self::Coordinates;

    /// Builds the item from GeoJSON coordinates.
    fn from_coordinates(coordinates: Self::Coordinates) -> Result<Self, GeometryError>;

    /// Writes the item as a part of its parent's WKT body.
    #[doc(hidden)]
    fn write_wkt_item(&self, f: &mut Formatter<'_>) -> std::fmt::Result;

    /// Reads the item from its parent's WKT body.
    #[doc(hidden)]
    fn read_wkt_item(parser: &mut WktParser<'_>) -> Result<Self, GeometryError>;

    /// Writes the item as a part of its parent's WKB body without a header.
    #[doc(hidden)]
    fn write_wkb_item(&self, buf: &mut Vec<u8>);

    /// Reads a headerless item from its parent's WKB body.
    #[doc(hidden)]
    fn read_wkb_item(reader: &mut WkbReader<'_>) -> Result<Self, GeometryError>;

    /// Reads a member of a multi geometry or a collection, after its WKB header. Same as
    /// [`GeometryValue::read_wkb_body`] unless the type stores its members as given.
    #[doc(hidden)]
    fn read_wkb_member(
        geometry_type: GeometryType,
        reader: &mut WkbReader<'_>,
    ) -> Result<Self, GeometryError> {
        Self::read_wkb_body(geometry_type, reader)
    }

    /// Wraps the item into [`Geometry`].
    fn into_geometry(self) -> Geometry;

    /// Extracts the item from [`Geometry`].
    ///
    /// Fails with [`GeometryError::InvalidGeometryStructure`] if the geometry is of another type.
    fn try_from_geometry(geometry: Geometry) -> Result<Self, GeometryError>;
}
