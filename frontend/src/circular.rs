/// Moves `index` by `delta` positions around a ring of `len` items.
/// Returns 0 for an empty ring.
pub fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

/// Signed offset from `active` to `index` along the shorter way round,
/// always within `[-len/2, len/2)`.
pub fn distance(index: usize, active: usize, len: usize) -> isize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let half = len / 2;
    (index as isize - active as isize + half).rem_euclid(len) - half
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_both_directions() {
        assert_eq!(step(4, 1, 5), 0);
        assert_eq!(step(0, -1, 5), 4);
        assert_eq!(step(2, 7, 5), 4);
        assert_eq!(step(1, -8, 5), 3);
        assert_eq!(step(0, 1, 1), 0);
        assert_eq!(step(3, 1, 0), 0);
    }

    #[test]
    fn distance_stays_in_half_open_range() {
        for len in 1..=14usize {
            for active in 0..len {
                for index in 0..len {
                    let d = distance(index, active, len);
                    // d in [-len/2, len/2), compared in doubled units so odd lengths work
                    assert!(2 * d >= -(len as isize), "len {len} active {active} index {index} -> {d}");
                    assert!(2 * d < len as isize, "len {len} active {active} index {index} -> {d}");
                    assert_eq!(step(active, d, len), index);
                }
            }
        }
    }

    #[test]
    fn distance_picks_shorter_side() {
        assert_eq!(distance(12, 0, 13), -1);
        assert_eq!(distance(1, 12, 13), 2);
        assert_eq!(distance(3, 3, 13), 0);
        // halfway on an even ring resolves to the negative side
        assert_eq!(distance(2, 0, 4), -2);
    }
}
