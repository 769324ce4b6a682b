//! Geometry value types with WKT, WKB and GeoJSON codecs.
//!
//! All geometries are immutable values: [`Point`], the composites built on [`GeometrySet`] ([`LineString`],
//! [`Polygon`], [`MultiPoint`], [`MultiLineString`], [`MultiPolygon`], [`GeometryCollection`]) and the [`Geometry`]
//! enum over all of them. Conversions are provided by the [`GeometryValue`] trait.
//!
//! ```
//! use sextant_types::{GeometryValue, Polygon};
//!
//! let polygon = Polygon::from_wkt("POLYGON((0 0,1 0,0 1))")?;
//! assert_eq!(polygon.to_wkt(), "POLYGON((0 0,1 0,0 1))");
//!
//! // GeoJSON rings are closed on the way out.
//! assert_eq!(
//!     polygon.to_geojson_value()["coordinates"][0].as_array().map(Vec::len),
//!     Some(4)
//! );
//! # Ok::<(), sextant_types::GeometryError>(())
//! ```

mod error;
pub use error::GeometryError;

mod geometry_type;
pub use geometry_type::*;

mod traits;
pub use traits::{GeometryElement, GeometryValue};

mod point;
pub use point::Point;

mod geometry_set;
pub use geometry_set::{GeometrySet, SetKind};

mod line_string;
pub use line_string::LineString;

mod polygon;
pub use polygon::Polygon;

mod multi_point;
pub use multi_point::MultiPoint;

mod multi_line_string;
pub use multi_line_string::MultiLineString;

mod multi_polygon;
pub use multi_polygon::MultiPolygon;

mod geometry_collection;
pub use geometry_collection::GeometryCollection;

mod geometry;
pub use geometry::{Geometry, MAX_NESTING_DEPTH};

pub mod geojson;
pub mod wkb;
pub mod wkt;

mod serde_impls;

#[cfg(feature = "geo-types")]
pub mod geo_types;
