//! Utilities for generating examples, benchmarks, and test cases.

use crate::Point;

/// An `n` by `n` grid of points, with spacing `step`.
///
/// Every row and column is a segment once `n >= 4`, as are plenty of
/// diagonals, so this is a good stress test for merging.
pub fn grid(n: i32, step: i32) -> Vec<Point> {
    let mut ret = Vec::new();
    for x in 0..n {
        for y in 0..n {
            ret.push(Point::new(x * step, y * step));
        }
    }
    ret
}

/// `arms` rays of `len` points each, all meeting at the origin.
///
/// The rays go around the compass, so with more than four arms the
/// opposite rays start joining up into single segments.
pub fn star(arms: usize, len: i32) -> Vec<Point> {
    const DIRECTIONS: [(i32, i32); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];

    let mut ret = vec![Point::new(0, 0)];
    for &(dx, dy) in DIRECTIONS.iter().cycle().take(arms) {
        for i in 1..len {
            ret.push(Point::new(i * dx, i * dy));
        }
    }
    ret
}

/// Points on a parabola, `y = x^2`, of which no three are collinear.
///
/// This is the worst case for the amount of sorting per segment found.
pub fn parabola(n: i32) -> Vec<Point> {
    (-n / 2..n - n / 2).map(|x| Point::new(x, x * x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FastCollinear;

    #[test]
    fn grid_segments() {
        // Rows, columns and the two long diagonals.
        assert_eq!(FastCollinear::new(&grid(4, 10)).number_of_segments(), 10);
    }

    #[test]
    fn star_segments() {
        assert_eq!(FastCollinear::new(&star(8, 4)).number_of_segments(), 4);
        assert_eq!(FastCollinear::new(&star(3, 4)).number_of_segments(), 3);
        assert_eq!(FastCollinear::new(&star(6, 4)).number_of_segments(), 4);
    }

    #[test]
    fn parabola_segments() {
        assert_eq!(FastCollinear::new(&parabola(40)).number_of_segments(), 0);
    }
}
