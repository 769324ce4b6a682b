//! The only place where GeoJSON positions and points meet.

use geojson::Position;

use crate::error::GeometryError;
use crate::point::Point;

/// `[longitude, latitude]`
pub(crate) fn position_from_point(point: &Point) -> Position {
    vec![point.lng(), point.lat()]
}

/// Altitude and any further members of the position are dropped.
pub(crate) fn point_from_position(position: Position) -> Result<Point, GeometryError> {
    match position.as_slice() {
        &[lng, lat, ..] => Ok(Point::new(lat, lng)),
        _ => Err(GeometryError::malformed_geojson(
            &format!("{position:?}"),
            "a position with at least two numbers",
        )),
    }
}
