//! Query expression adapter for `sextant` geometries.
//!
//! A [`SpatialExpression`] pairs a geometry with the `ST_GeomFromText(?, ?)` call that builds it on the database side.
//! The caller binds the WKT text and the SRID returned by [`SpatialExpression::bindings`] to the two placeholders.

mod expression;
pub use expression::{SpatialExpression, DEFAULT_SRID};

pub use sextant_types::{Geometry, GeometryValue};
