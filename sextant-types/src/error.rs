//! Error type used by the crate.

use thiserror::Error;

use crate::geometry_type::GeometryType;

const EXCERPT_LEN: usize = 40;

/// Error enum.
///
/// Every fallible operation of the crate returns this error. A failed parse never produces a partially built
/// geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Text does not follow the WKT grammar.
    #[error("malformed WKT at `{excerpt}`: expected {expected}")]
    MalformedWkt {
        /// Input starting at the position where parsing stopped.
        excerpt: String,
        /// What was expected at that position.
        expected: String,
    },
    /// Structure is not a GeoJSON geometry object.
    #[error("malformed GeoJSON `{excerpt}`: expected {expected}")]
    MalformedGeoJson {
        /// Beginning of the offending JSON.
        excerpt: String,
        /// What was expected instead.
        expected: String,
    },
    /// GeoJSON geometry is valid, but of a different type than the one being constructed.
    #[error("unexpected GeoJSON type: expected {expected}, got {found}")]
    UnexpectedGeoJsonType {
        /// Requested geometry type.
        expected: GeometryType,
        /// Type found in the input.
        found: GeometryType,
    },
    /// Bytes are not valid WKB.
    #[error("malformed WKB: {0}")]
    MalformedWkb(String),
    /// A composite geometry was given an empty or mismatched set of items.
    #[error("invalid geometry structure: {0}")]
    InvalidGeometryStructure(String),
}

impl GeometryError {
    pub(crate) fn malformed_wkt(input: &str, expected: impl Into<String>) -> Self {
        Self::MalformedWkt {
            excerpt: excerpt(input),
            expected: expected.into(),
        }
    }

    pub(crate) fn malformed_geojson(input: &str, expected: impl Into<String>) -> Self {
        Self::MalformedGeoJson {
            excerpt: excerpt(input),
            expected: expected.into(),
        }
    }
}

/// Shortens the input for error messages.
fn excerpt(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return "<end of input>".to_string();
    }

    let mut chars = input.chars();
    let head: String = chars.by_ref().take(EXCERPT_LEN).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
