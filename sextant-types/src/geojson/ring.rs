use geojson::Position;

/// Minimum number of positions in a GeoJSON linear ring.
pub const MIN_RING_POSITIONS: usize = 4;

/// Turns a ring into a valid GeoJSON linear ring.
///
/// The ring is closed by appending its first position if the last one differs, and then padded with the first
/// position up to [`MIN_RING_POSITIONS`]. Returns `None` for an empty ring, which has nothing to close.
pub fn normalize_ring(mut ring: Vec<Position>) -> Option<Vec<Position>> {
    let first = ring.first()?.clone();
    if ring.last() != Some(&first) {
        ring.push(first.clone());
    }

    if ring.len() < MIN_RING_POSITIONS {
        ring.resize(MIN_RING_POSITIONS, first);
    }

    Some(ring)
}

/// Normalizes every ring of a polygon and drops the empty ones.
pub(crate) fn normalize_rings(rings: Vec<Vec<Position>>) -> Vec<Vec<Position>> {
    rings
        .into_iter()
        .enumerate()
        .filter_map(|(index, ring)| {
            let len = ring.len();
            let normalized = normalize_ring(ring);
            match &normalized {
                None => log::debug!("Empty ring {index} is left out of GeoJSON polygon"),
                Some(ring) if ring.len() != len => log::trace!(
                    "Ring {index} is closed and padded from {len} to {} positions",
                    ring.len()
                ),
                Some(_) => {}
            }

            normalized
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[[f64; 2]]) -> Vec<Position> {
        coords.iter().map(|c| c.to_vec()).collect()
    }

    #[test]
    fn open_triangle_is_closed() {
        assert_eq!(
            normalize_ring(ring(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])),
            Some(ring(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]))
        );
    }

    #[test]
    fn closed_ring_is_kept() {
        let closed = ring(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]);
        assert_eq!(normalize_ring(closed.clone()), Some(closed));

        let open_square = ring(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(normalize_ring(open_square).map(|r| r.len()), Some(5));
    }

    #[test]
    fn degenerate_rings_are_padded() {
        assert_eq!(
            normalize_ring(ring(&[[2.0, 3.0]])),
            Some(ring(&[[2.0, 3.0]; 4]))
        );
        assert_eq!(
            normalize_ring(ring(&[[0.0, 0.0], [1.0, 1.0]])),
            Some(ring(&[[0.0, 0.0], [1.0, 1.0], [0.0, 0.0], [0.0, 0.0]]))
        );
        assert_eq!(
            normalize_ring(ring(&[[0.0, 0.0], [0.0, 0.0]])),
            Some(ring(&[[0.0, 0.0]; 4]))
        );
    }

    #[test]
    fn empty_rings_are_dropped() {
        assert_eq!(normalize_ring(vec![]), None);

        let rings = normalize_rings(vec![vec![], ring(&[[1.0, 1.0]]), vec![]]);
        assert_eq!(rings, vec![ring(&[[1.0, 1.0]; 4])]);
    }
}
