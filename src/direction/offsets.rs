//! Neighbor-offset cube enumeration

use crate::core::types::IVec3;

/// Enumerate every offset of the axis-aligned cube of the given radius,
/// excluding the origin, in lexicographic (dx, dy, dz) order.
///
/// A radius of 2 yields the 124 offsets of the 5x5x5 neighborhood.
/// Returns a fresh, finite iterator on every call. Panics if `radius`
/// is not positive.
pub fn cube_offsets(radius: i32) -> impl Iterator<Item = IVec3> {
    assert!(radius > 0, "cube radius must be positive, got {radius}");
    (-radius..=radius).flat_map(move |dx| {
        (-radius..=radius).flat_map(move |dy| {
            (-radius..=radius).filter_map(move |dz| {
                let offset = IVec3::new(dx, dy, dz);
                (offset != IVec3::ZERO).then_some(offset)
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_radius_2_yields_124_offsets() {
        let offsets: Vec<IVec3> = cube_offsets(2).collect();
        assert_eq!(offsets.len(), 124);

        let unique: HashSet<(i32, i32, i32)> =
            offsets.iter().map(|o| (o.x, o.y, o.z)).collect();
        assert_eq!(unique.len(), 124);
    }

    #[test]
    fn test_origin_is_excluded() {
        assert!(cube_offsets(2).all(|o| o != IVec3::ZERO));
    }

    #[test]
    fn test_order_is_lexicographic() {
        let offsets: Vec<IVec3> = cube_offsets(1).collect();
        assert_eq!(offsets.len(), 26);
        assert_eq!(offsets[0], IVec3::new(-1, -1, -1));
        assert_eq!(offsets[25], IVec3::new(1, 1, 1));

        let keys: Vec<(i32, i32, i32)> = offsets.iter().map(|o| (o.x, o.y, o.z)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_restartable() {
        let first: Vec<IVec3> = cube_offsets(2).collect();
        let second: Vec<IVec3> = cube_offsets(2).collect();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_radius_rejected() {
        cube_offsets(0).count();
    }
}
