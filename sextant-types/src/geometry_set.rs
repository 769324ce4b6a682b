use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::Deref;

use bytes::BufMut;

use crate::error::GeometryError;
use crate::geojson::unexpected_type;
use crate::geometry::Geometry;
use crate::geometry_type::GeometryType;
use crate::traits::{GeometryElement, GeometryValue};
use crate::wkb::{self, WkbReader};
use crate::wkt::WktParser;

/// Shape of a [`GeometrySet`].
///
/// Implemented by the zero-sized `*Kind` markers. A kind fixes the type tag, the way the set nests its items in each
/// format and the minimum number of items.
pub trait SetKind<G: GeometryElement>: Sized {
    /// Type of the set.
    const TYPE: GeometryType;
    /// Minimum number of items of a standalone set.
    const MIN_ITEMS: usize = 0;
    /// Whether the items are written to WKB as full geometries with their own headers.
    const NESTED_WKB: bool = true;

    /// Wraps the set into [`Geometry`].
    fn wrap(set: GeometrySet<G, Self>) -> Geometry;

    /// Extracts the set from [`Geometry`], returning the geometry back if it has another type.
    fn unwrap(geometry: Geometry) -> Result<GeometrySet<G, Self>, Geometry>;

    /// Builds the GeoJSON value of the set from the coordinates of its items.
    fn geojson_value(coordinates: Vec<G::Coordinates>) -> geojson::Value;

    /// Takes the coordinates of the items out of a GeoJSON value, returning the value back if it has another type.
    fn geojson_coordinates(
        value: geojson::Value,
    ) -> Result<Vec<G::Coordinates>, geojson::Value>;

    /// GeoJSON coordinates of the items.
    fn item_coordinates(items: &[G]) -> Vec<G::Coordinates> {
        items.iter().map(G::to_coordinates).collect()
    }

    /// Reads one item of the WKT body.
    fn read_wkt_item(parser: &mut WktParser<'_>) -> Result<G, GeometryError> {
        G::read_wkt_item(parser)
    }
}

/// Ordered set of geometries of type `G`.
///
/// This is the storage of every composite geometry, the kind `K` tells which one. Use the aliases
/// ([`LineString`](crate::LineString), [`Polygon`](crate::Polygon), etc.) rather than this type directly.
///
/// The set dereferences to a slice of its items. Sets compare by items only, the SRID does not take part in
/// equality.
pub struct GeometrySet<G, K> {
    items: Vec<G>,
    srid: Option<u32>,
    kind: PhantomData<K>,
}

impl<G, K> GeometrySet<G, K> {
    /// Creates a set without checking the number of items.
    pub(crate) fn from_parts(items: Vec<G>) -> Self {
        Self {
            items,
            srid: None,
            kind: PhantomData,
        }
    }

    /// Sets the spatial reference id of the whole set.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    /// Items of the set.
    pub fn items(&self) -> &[G] {
        &self.items
    }

    /// Consumes the set and returns its items.
    pub fn into_items(self) -> Vec<G> {
        self.items
    }
}

impl<G: GeometryElement, K: SetKind<G>> GeometrySet<G, K> {
    /// Creates a new set.
    ///
    /// Fails with [`GeometryError::InvalidGeometryStructure`] if there are fewer items than the kind requires, e.g.
    /// for a line string without points.
    pub fn new(items: Vec<G>) -> Result<Self, GeometryError> {
        if items.len() < K::MIN_ITEMS {
            return Err(GeometryError::InvalidGeometryStructure(format!(
                "{} requires at least {} item(s), got {}",
                K::TYPE,
                K::MIN_ITEMS,
                items.len()
            )));
        }

        Ok(Self::from_parts(items))
    }

    /// Creates a new set from arbitrary geometries.
    ///
    /// Fails with [`GeometryError::InvalidGeometryStructure`] if any of the geometries is not of the item type, e.g. a
    /// multipoint given as a polygon ring.
    pub fn try_from_geometries(geometries: Vec<Geometry>) -> Result<Self, GeometryError> {
        let items = geometries
            .into_iter()
            .map(G::try_from_geometry)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }
}

impl<G, K> Deref for GeometrySet<G, K> {
    type Target = [G];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a, G, K> IntoIterator for &'a GeometrySet<G, K> {
    type Item = &'a G;
    type IntoIter = std::slice::Iter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<G, K> IntoIterator for GeometrySet<G, K> {
    type Item = G;
    type IntoIter = std::vec::IntoIter<G>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<G: Clone, K> Clone for GeometrySet<G, K> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            srid: self.srid,
            kind: PhantomData,
        }
    }
}

impl<G: PartialEq, K> PartialEq for GeometrySet<G, K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<G: Debug, K: Debug + Default> Debug for GeometrySet<G, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometrySet")
            .field("kind", &K::default())
            .field("items", &self.items)
            .field("srid", &self.srid)
            .finish()
    }
}

impl<G: GeometryElement, K: SetKind<G>> Display for GeometrySet<G, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::wkt::write_wkt(self, f)
    }
}

impl<G: GeometryElement, K: SetKind<G>> GeometryValue for GeometrySet<G, K> {
    fn geometry_type(&self) -> GeometryType {
        K::TYPE
    }

    fn srid(&self) -> Option<u32> {
        self.srid
    }

    fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(K::geojson_value(self.to_coordinates()))
    }

    fn from_geojson(geometry: geojson::Geometry) -> Result<Self, GeometryError> {
        let coordinates = K::geojson_coordinates(geometry.value)
            .map_err(|value| unexpected_type(K::TYPE, &value))?;
        let items = coordinates
            .into_iter()
            .map(G::from_coordinates)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(items)
    }

    fn write_wkt_body(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_wkt_item(f)
    }

    fn read_wkt_body(
        geometry_type: GeometryType,
        parser: &mut WktParser<'_>,
    ) -> Result<Self, GeometryError> {
        parser.expect_type(K::TYPE, geometry_type)?;
        Self::new(parser.read_list(K::read_wkt_item)?)
    }

    fn write_wkb_body(&self, buf: &mut Vec<u8>) {
        self.write_wkb_item(buf);
    }

    fn read_wkb_body(
        geometry_type: GeometryType,
        reader: &mut WkbReader<'_>,
    ) -> Result<Self, GeometryError> {
        reader.expect_type(K::TYPE, geometry_type)?;
        Self::new(read_wkb_items::<G, K>(reader)?)
    }
}

impl<G: GeometryElement, K: SetKind<G>> GeometryElement for GeometrySet<G, K> {
    type Coordinates = Vec<G::Coordinates>;

    fn to_coordinates(&self) -> Self::Coordinates {
        K::item_coordinates(&self.items)
    }

    fn from_coordinates(coordinates: Self::Coordinates) -> Result<Self, GeometryError> {
        let items = coordinates
            .into_iter()
            .map(G::from_coordinates)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_parts(items))
    }

    fn write_wkt_item(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            item.write_wkt_item(f)?;
        }
        f.write_str(")")
    }

    fn read_wkt_item(parser: &mut WktParser<'_>) -> Result<Self, GeometryError> {
        Ok(Self::from_parts(parser.read_list(K::read_wkt_item)?))
    }

    fn write_wkb_item(&self, buf: &mut Vec<u8>) {
        buf.put_u32_le(self.items.len() as u32);
        for item in &self.items {
            if K::NESTED_WKB {
                wkb::write_geometry(item, buf);
            } else {
                item.write_wkb_item(buf);
            }
        }
    }

    fn read_wkb_item(reader: &mut WkbReader<'_>) -> Result<Self, GeometryError> {
        Ok(Self::from_parts(read_wkb_items::<G, K>(reader)?))
    }

    fn read_wkb_member(
        geometry_type: GeometryType,
        reader: &mut WkbReader<'_>,
    ) -> Result<Self, GeometryError> {
        reader.expect_type(K::TYPE, geometry_type)?;
        Self::read_wkb_item(reader)
    }

    fn into_geometry(self) -> Geometry {
        K::wrap(self)
    }

    fn try_from_geometry(geometry: Geometry) -> Result<Self, GeometryError> {
        K::unwrap(geometry).map_err(|other| {
            GeometryError::InvalidGeometryStructure(format!(
                "expected {}, got {}",
                K::TYPE,
                other.geometry_type()
            ))
        })
    }
}

fn read_wkb_items<G: GeometryElement, K: SetKind<G>>(
    reader: &mut WkbReader<'_>,
) -> Result<Vec<G>, GeometryError> {
    let count = reader.read_count()?;
    (0..count)
        .map(|_| {
            if K::NESTED_WKB {
                wkb::read_member(reader)
            } else {
                G::read_wkb_item(reader)
            }
        })
        .collect()
}
