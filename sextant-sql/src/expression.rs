use std::fmt::{Display, Formatter};

use sextant_types::{Geometry, GeometryValue};

/// SRID bound for geometries that have none.
pub const DEFAULT_SRID: u32 = 0;

/// Geometry wrapped into the SQL call that constructs it from WKT and SRID.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialExpression<G = Geometry> {
    value: G,
}

impl<G: GeometryValue> SpatialExpression<G> {
    /// Call template with placeholders for the WKT text and the SRID, in that order.
    pub const SQL: &'static str = "ST_GeomFromText(?, ?)";

    /// Creates a new expression.
    pub fn new(value: G) -> Self {
        Self { value }
    }

    /// Call template, same as [`Self::SQL`].
    pub fn sql(&self) -> &'static str {
        Self::SQL
    }

    /// WKT text of the geometry.
    pub fn wkt(&self) -> String {
        self.value.to_wkt()
    }

    /// SRID of the geometry, or [`DEFAULT_SRID`] if it has none.
    pub fn srid(&self) -> u32 {
        self.value.srid().unwrap_or(DEFAULT_SRID)
    }

    /// Values for the placeholders of [`Self::SQL`].
    pub fn bindings(&self) -> (String, u32) {
        (self.wkt(), self.srid())
    }

    /// Wrapped geometry.
    pub fn value(&self) -> &G {
        &self.value
    }

    /// Consumes the expression and returns the geometry.
    pub fn into_value(self) -> G {
        self.value
    }
}

impl<G: GeometryValue> From<G> for SpatialExpression<G> {
    fn from(value: G) -> Self {
        Self::new(value)
    }
}

impl<G: GeometryValue> Display for SpatialExpression<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::SQL)
    }
}
