//! Lattice polygon areas and integer cycle arithmetic.

use crate::coordinate::Coordinate;

/// Calculate the area enclosed by a closed polygon using the shoelace formula.
///
/// `boundary` must list the polygon's vertices in the order they are traced around it, in either
/// rotational direction; the last vertex connects back to the first. An odd doubled area is
/// rounded down. Returns `None` on overflow.
#[must_use]
pub fn shoelace_area(boundary: &[Coordinate]) -> Option<u64> {
    let successors = boundary.iter().cycle().skip(1);
    let doubled = boundary
        .iter()
        .zip(successors)
        .try_fold(0i64, |sum, (current, next)| {
            let forward = current.x().checked_mul(next.y())?;
            let backward = next.x().checked_mul(current.y())?;
            sum.checked_add(forward.checked_sub(backward)?)
        })?;
    Some(doubled.unsigned_abs() / 2)
}

/// Count the lattice points strictly inside a polygon using Pick's theorem.
///
/// `area` is the polygon's enclosed area and `boundary` the number of lattice points on its
/// edges. Returns `None` if the inputs imply a negative count.
#[must_use]
pub fn interior_points(area: u64, boundary: u64) -> Option<u64> {
    area.checked_add(1)?.checked_sub(boundary / 2)
}

#[must_use]
pub fn greatest_common_divisor(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Combine cycle lengths into the first step at which every cycle completes together.
///
/// The least common multiple of no values is 1, and any zero makes the result 0. Returns `None`
/// on overflow.
#[must_use]
pub fn least_common_multiple(values: &[u64]) -> Option<u64> {
    values.iter().try_fold(1u64, |lcm, &value| {
        if lcm == 0 || value == 0 {
            return Some(0);
        }
        (lcm / greatest_common_divisor(lcm, value)).checked_mul(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinates(pairs: &[(i64, i64)]) -> Vec<Coordinate> {
        pairs.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn ring_area_and_interior() {
        let ring = coordinates(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (2, 1),
            (2, 0),
            (1, 0),
        ]);
        let area = shoelace_area(&ring).expect("area should not overflow");
        assert_eq!(area, 4);
        assert_eq!(interior_points(area, 8), Some(1));
    }

    #[test]
    fn shoelace_ignores_winding() {
        let mut triangle = coordinates(&[(0, 0), (4, 0), (0, 3)]);
        assert_eq!(shoelace_area(&triangle), Some(6));
        triangle.reverse();
        assert_eq!(shoelace_area(&triangle), Some(6));
    }

    #[test]
    fn degenerate_polygons_have_no_area() {
        assert_eq!(shoelace_area(&[]), Some(0));
        assert_eq!(shoelace_area(&coordinates(&[(3, 4)])), Some(0));
        assert_eq!(shoelace_area(&coordinates(&[(0, 0), (5, 5)])), Some(0));
    }

    #[test]
    fn shoelace_reports_overflow() {
        let huge = coordinates(&[(0, 0), (i64::MAX, 0), (i64::MAX, i64::MAX)]);
        assert_eq!(shoelace_area(&huge), None);
    }

    #[test]
    fn interior_rejects_inconsistent_counts() {
        assert_eq!(interior_points(1, 10), None);
        assert_eq!(interior_points(1, 4), Some(0));
    }

    #[test]
    fn gcd_of_coprimes_is_one() {
        assert_eq!(greatest_common_divisor(12, 18), 6);
        assert_eq!(greatest_common_divisor(7, 13), 1);
        assert_eq!(greatest_common_divisor(0, 5), 5);
    }

    #[test]
    fn lcm_combines_cycles() {
        assert_eq!(least_common_multiple(&[2, 3]), Some(6));
        assert_eq!(least_common_multiple(&[4, 6, 10]), Some(60));
        assert_eq!(least_common_multiple(&[]), Some(1));
        assert_eq!(least_common_multiple(&[5, 0]), Some(0));
        assert_eq!(least_common_multiple(&[u64::MAX, u64::MAX - 1]), None);
    }
}
