//! Board shape selection.

/// Smallest and largest allowed side length for curve-generated boards.
pub const MIN_SIDE: u32 = 4;
pub const MAX_SIDE: u32 = 10;

/// Pick `(rows, cols)` for at least `pair_count` pairs.
///
/// Chooses the smallest even area that fits `2 * pair_count` cards with both
/// sides in `[MIN_SIDE, MAX_SIDE]`, breaking ties by the squarest shape.
/// `rows <= cols`. Requests beyond a full 10x10 board get 10x10.
#[must_use]
pub fn grid_shape(pair_count: u32) -> (u32, u32) {
    let needed = pair_count * 2;
    let mut best: Option<(u32, u32)> = None;

    for rows in MIN_SIDE..=MAX_SIDE {
        for cols in rows..=MAX_SIDE {
            let area = rows * cols;
            if area < needed || area % 2 != 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((r, c)) => {
                    let best_area = r * c;
                    area < best_area || (area == best_area && cols - rows < c - r)
                }
            };
            if better {
                best = Some((rows, cols));
            }
        }
    }

    best.unwrap_or((MAX_SIDE, MAX_SIDE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fits() {
        assert_eq!(grid_shape(8), (4, 4));
        assert_eq!(grid_shape(10), (4, 5));
        assert_eq!(grid_shape(12), (4, 6));
        assert_eq!(grid_shape(15), (5, 6));
        assert_eq!(grid_shape(18), (6, 6));
    }

    #[test]
    fn test_rounds_up_when_no_exact_fit() {
        // 66 cards has no factorization inside [4,10]; 7x10 is next.
        assert_eq!(grid_shape(33), (7, 10));
    }

    #[test]
    fn test_small_requests_use_minimum_board() {
        assert_eq!(grid_shape(1), (4, 4));
    }

    #[test]
    fn test_oversized_request() {
        assert_eq!(grid_shape(80), (10, 10));
    }

    #[test]
    fn test_area_is_even_and_sides_bounded() {
        for pairs in 1..=50 {
            let (r, c) = grid_shape(pairs);
            assert!((MIN_SIDE..=MAX_SIDE).contains(&r));
            assert!((MIN_SIDE..=MAX_SIDE).contains(&c));
            assert_eq!((r * c) % 2, 0);
            assert!(r * c >= pairs * 2);
        }
    }
}
