//! WKT (well-known text) codec.
//!
//! Geometries are written as `KEYWORD(BODY)`, where the body is the comma separated list of the items, e.g.
//! `POLYGON((0 0,1 0,0 1),(0.1 0.1,0.2 0.1,0.1 0.2))`. Coordinates are written as `x y` with the shortest decimal
//! representation that reads back to the same number. Empty composites are written as `KEYWORD()`.
//!
//! The reader accepts any whitespace between tokens, keywords in any case, `KEYWORD EMPTY` for the types that may be
//! empty, and both `MULTIPOINT(1 2,3 4)` and `MULTIPOINT((1 2),(3 4))`. Rings are not required to be closed and have no
//! minimum size: WKT is stored as given.

use std::fmt::{Display, Formatter};

use crate::error::GeometryError;
use crate::traits::GeometryValue;

mod parser;
pub use parser::WktParser;

struct Wkt<'a, G>(&'a G);

impl<G: GeometryValue> Display for Wkt<'_, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_wkt(self.0, f)
    }
}

pub(crate) fn write_wkt<G: GeometryValue>(
    geometry: &G,
    f: &mut Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(geometry.geometry_type().wkt_keyword())?;
    geometry.write_wkt_body(f)
}

pub(crate) fn to_wkt<G: GeometryValue>(geometry: &G) -> String {
    Wkt(geometry).to_string()
}

pub(crate) fn from_wkt<G: GeometryValue>(wkt: &str) -> Result<G, GeometryError> {
    read_wkt(wkt).inspect_err(|err| log::debug!("Failed to read WKT: {err}"))
}

fn read_wkt<G: GeometryValue>(wkt: &str) -> Result<G, GeometryError> {
    let mut parser = WktParser::new(wkt);
    let geometry_type = parser.read_keyword()?;
    let geometry = G::read_wkt_body(geometry_type, &mut parser)?;
    parser.finish()?;

    Ok(geometry)
}
