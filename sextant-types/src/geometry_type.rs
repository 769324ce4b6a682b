//! Geometry type tags.
//!
//! [`GeometryType`] is the runtime tag of a geometry and holds the names every format uses for it. The `*Kind` structs
//! are zero-sized markers that select the shape of a [`GeometrySet`](crate::GeometrySet), see
//! [`SetKind`](crate::SetKind).

use std::fmt::{Display, Formatter};

/// Type of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// Single point.
    Point,
    /// Sequence of points.
    LineString,
    /// Outer ring with optional holes.
    Polygon,
    /// Set of points.
    MultiPoint,
    /// Set of line strings.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
    /// Set of geometries of any type.
    GeometryCollection,
}

impl GeometryType {
    /// All geometry types.
    pub const ALL: [GeometryType; 7] = [
        GeometryType::Point,
        GeometryType::LineString,
        GeometryType::Polygon,
        GeometryType::MultiPoint,
        GeometryType::MultiLineString,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
    ];

    /// Uppercase WKT keyword, e.g. `MULTIPOLYGON`.
    pub const fn wkt_keyword(self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Finds the type by its WKT keyword. Case insensitive.
    pub fn from_wkt_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.wkt_keyword().eq_ignore_ascii_case(keyword))
    }

    /// Value of the `type` member of a GeoJSON geometry object.
    pub const fn geojson_name(self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Type code used in WKB.
    pub const fn wkb_code(self) -> u32 {
        match self {
            GeometryType::Point => 1,
            GeometryType::LineString => 2,
            GeometryType::Polygon => 3,
            GeometryType::MultiPoint => 4,
            GeometryType::MultiLineString => 5,
            GeometryType::MultiPolygon => 6,
            GeometryType::GeometryCollection => 7,
        }
    }

    /// Finds the type by its 2D WKB code.
    pub fn from_wkb_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.wkb_code() == code)
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.geojson_name())
    }
}

/// Line string marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct LineStringKind;

/// Polygon marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PolygonKind;

/// Multipoint marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiPointKind;

/// Multi line string marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiLineStringKind;

/// Multipolygon marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiPolygonKind;

/// Geometry collection marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct GeometryCollectionKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            GeometryType::from_wkt_keyword("polygon"),
            Some(GeometryType::Polygon)
        );
        assert_eq!(
            GeometryType::from_wkt_keyword("GeometryCollection"),
            Some(GeometryType::GeometryCollection)
        );
        assert_eq!(GeometryType::from_wkt_keyword("CIRCLE"), None);
    }

    #[test]
    fn wkb_codes() {
        for geometry_type in GeometryType::ALL {
            assert_eq!(
                GeometryType::from_wkb_code(geometry_type.wkb_code()),
                Some(geometry_type)
            );
        }
        assert_eq!(GeometryType::from_wkb_code(1001), None);
    }
}
