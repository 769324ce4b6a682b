//! Every geometry is serialized as its GeoJSON geometry object, the same way as
//! [`GeometryValue::to_geojson`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geometry::Geometry;
use crate::geometry_set::{GeometrySet, SetKind};
use crate::point::Point;
use crate::traits::{GeometryElement, GeometryValue};

fn serialize_geometry<G: GeometryValue, S: Serializer>(
    geometry: &G,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    geometry.to_geojson().serialize(serializer)
}

fn deserialize_geometry<'de, G: GeometryValue, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<G, D::Error> {
    let geometry = geojson::Geometry::deserialize(deserializer)?;
    G::from_geojson(geometry).map_err(D::Error::custom)
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_geometry(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_geometry(deserializer)
    }
}

impl<G: GeometryElement, K: SetKind<G>> Serialize for GeometrySet<G, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_geometry(self, serializer)
    }
}

impl<'de, G: GeometryElement, K: SetKind<G>> Deserialize<'de> for GeometrySet<G, K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_geometry(deserializer)
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_geometry(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_geometry(deserializer)
    }
}
