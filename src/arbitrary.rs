//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;

use crate::Point;

/// Generate an arbitrary coordinate in some range.
pub fn coordinate_in_range(
    start: i32,
    end: i32,
    u: &mut Unstructured<'_>,
) -> Result<i32, arbitrary::Error> {
    u.int_in_range(start..=end)
}

// Small enough that unplanted points are often collinear by accident.
fn coordinate(u: &mut Unstructured<'_>) -> Result<i32, arbitrary::Error> {
    coordinate_in_range(-16, 16, u)
}

fn point(u: &mut Unstructured<'_>) -> Result<Point, arbitrary::Error> {
    Ok(Point::new(coordinate(u)?, coordinate(u)?))
}

/// Generate points evenly spaced along a line: a start point, a step, and a count.
///
/// The step is never zero, so the points are distinct.
pub fn planted_line(u: &mut Unstructured<'_>) -> Result<Vec<Point>, arbitrary::Error> {
    let start = point(u)?;
    let mut dx = coordinate_in_range(-4, 4, u)?;
    let dy = coordinate_in_range(-4, 4, u)?;
    if dx == 0 && dy == 0 {
        dx = 1;
    }
    let count = u.int_in_range(3..=7)?;
    Ok((0..count)
        .map(|i| Point::new(start.x + i * dx, start.y + i * dy))
        .collect())
}

/// Generate an arbitrary point set with a bias towards many collinear points.
///
/// The set is made up of some evenly spaced lines, some scattered points, and
/// some repeats of points that are already in the set, all shuffled together.
pub fn point_set(u: &mut Unstructured<'_>) -> Result<Vec<Point>, arbitrary::Error> {
    let mut ret = Vec::new();

    let lines = u.int_in_range(0..=4)?;
    for _ in 0..lines {
        ret.extend(planted_line(u)?);
    }

    let scattered = u.int_in_range(0..=16)?;
    for _ in 0..scattered {
        ret.push(point(u)?);
    }

    let repeats = u.int_in_range(0..=4)?;
    for _ in 0..repeats {
        if ret.is_empty() {
            break;
        }
        let idx = u.choose_index(ret.len())?;
        ret.push(ret[idx]);
    }

    // Fisher-Yates, so that input order isn't correlated with position.
    for i in (1..ret.len()).rev() {
        let j = u.int_in_range(0..=i)?;
        ret.swap(i, j);
    }
    Ok(ret)
}
