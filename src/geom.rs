//! Geometric primitives: points, slopes between them, segments and lines.

use crate::slope::{gcd, Slope};

/// A two-dimensional point with integer coordinates.
///
/// Points are sorted by `y` and then by `x`. Restricted to the points of a
/// single line, this order is monotone along the line, which is what lets
/// us read off the extreme points of a collinear run from its first and
/// last elements.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// The slope of the line from `self` to `other`.
    ///
    /// This is total: coincident points get [`Slope::Coincident`] and
    /// vertical pairs get [`Slope::Vertical`].
    pub fn slope_to(&self, other: &Point) -> Slope {
        Slope::between(*self, *other)
    }

    /// The Euclidean distance between `self` and `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    pub(crate) fn delta(&self, other: &Point) -> (i64, i64) {
        (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        )
    }

    /// Convert to a `kurbo` point, for drawing.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x.into(), self.y.into())
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points.
///
/// The endpoints are stored in sorted order, so `p <= q`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    /// The smaller endpoint.
    pub p: Point,
    /// The larger endpoint.
    pub q: Point,
}

impl std::fmt::Debug for LineSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -- {:?}", self.p, self.q)
    }
}

impl std::fmt::Display for LineSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}

impl LineSegment {
    /// Create a new segment, putting the endpoints in order.
    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            LineSegment { p: a, q: b }
        } else {
            LineSegment { p: b, q: a }
        }
    }

    /// The Euclidean length of this segment.
    pub fn length(&self) -> f64 {
        self.p.distance(&self.q)
    }

    /// The line through this segment.
    pub fn line(&self) -> Line {
        Line::through(self.p, self.q)
    }

    /// Does `point` lie on this segment (endpoints included)?
    pub fn contains(&self, point: &Point) -> bool {
        self.line().contains(point) && self.p <= *point && *point <= self.q
    }

    /// Assuming `other` lies on the same line, do the two spans share at least one point?
    pub(crate) fn overlaps(&self, other: &LineSegment) -> bool {
        self.p <= other.q && other.p <= self.q
    }

    /// Assuming `other` lies on the same line, the smallest segment covering both.
    pub(crate) fn union(&self, other: &LineSegment) -> LineSegment {
        LineSegment {
            p: self.p.min(other.p),
            q: self.q.max(other.q),
        }
    }

    /// Convert to a `kurbo` line, for drawing.
    pub fn to_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new(self.p.to_kurbo(), self.q.to_kurbo())
    }
}

/// An infinite line through two distinct integer points, in a canonical form.
///
/// The direction `(dx, dy)` is reduced to lowest terms and points "forward" in
/// the point order: `dy > 0`, or `dy == 0` and `dx > 0`. The offset is
/// `dy * x - dx * y` for any point on the line. Two pairs of points produce
/// equal lines exactly when all four points are collinear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    dx: i64,
    dy: i64,
    offset: i128,
}

impl Line {
    /// The line through `a` and `b`.
    ///
    /// `a` and `b` should be distinct; if they aren't, the result is a
    /// degenerate line that contains only `a`.
    pub fn through(a: Point, b: Point) -> Line {
        debug_assert!(a != b, "no unique line through {a:?} and itself");

        let (dx, dy) = a.delta(&b);
        let g = gcd(dx, dy).max(1) as i64;
        let (dx, dy) = (dx / g, dy / g);
        let (dx, dy) = if dy > 0 || (dy == 0 && dx > 0) {
            (dx, dy)
        } else {
            (-dx, -dy)
        };
        Line {
            dx,
            dy,
            offset: Self::offset_of(dx, dy, &a),
        }
    }

    fn offset_of(dx: i64, dy: i64, p: &Point) -> i128 {
        i128::from(dy) * i128::from(p.x) - i128::from(dx) * i128::from(p.y)
    }

    /// Does `point` lie on this line?
    pub fn contains(&self, point: &Point) -> bool {
        Self::offset_of(self.dx, self.dy, point) == self.offset
    }

    /// The slope of this line.
    pub fn slope(&self) -> Slope {
        Slope::from_delta(self.dx, self.dy)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use kurbo::ParamCurveArclen;
    use proptest::prelude::*;

    pub fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // Small coordinates, so that random points are often collinear.
    pub fn small_point() -> BoxedStrategy<Point> {
        (-12i32..=12, -12i32..=12)
            .prop_map(|(x, y)| Point::new(x, y))
            .boxed()
    }

    #[test]
    fn points_sort_by_y_first() {
        let mut points = vec![p(3, 1), p(0, 2), p(1, 1), p(-5, 0)];
        points.sort();
        assert_eq!(points, vec![p(-5, 0), p(1, 1), p(3, 1), p(0, 2)]);
    }

    #[test]
    fn distance() {
        assert_eq!(p(0, 0).distance(&p(3, 4)), 5.0);
        assert_eq!(p(2, 2).distance(&p(2, 2)), 0.0);
        assert_eq!(p(i32::MIN, 0).distance(&p(i32::MAX, 0)), u32::MAX as f64);
    }

    #[test]
    fn segment_display() {
        let seg = LineSegment::new(p(20000, 21000), p(3000, 4000));
        assert_eq!(seg.to_string(), "(3000, 4000) -> (20000, 21000)");
        assert_eq!(format!("{seg:?}"), "(3000, 4000) -- (20000, 21000)");
    }

    #[test]
    fn segment_contains() {
        let seg = LineSegment::new(p(0, 0), p(6, 3));
        assert!(seg.contains(&p(2, 1)));
        assert!(seg.contains(&p(6, 3)));
        assert!(!seg.contains(&p(8, 4)));
        assert!(!seg.contains(&p(2, 2)));
    }

    #[test]
    fn kurbo_length_agrees() {
        let seg = LineSegment::new(p(-3, 7), p(9, 2));
        assert!((seg.to_kurbo().arclen(1e-9) - seg.length()).abs() < 1e-9);
    }

    #[test]
    fn serialize() {
        let seg = LineSegment::new(p(1, 5), p(1, 1));
        assert_eq!(
            serde_json::to_string(&seg).unwrap(),
            r#"{"p":{"x":1,"y":1},"q":{"x":1,"y":5}}"#
        );
    }

    #[test]
    fn lines() {
        assert_eq!(Line::through(p(0, 0), p(2, 2)), Line::through(p(5, 5), p(-1, -1)));
        assert_ne!(Line::through(p(0, 0), p(2, 2)), Line::through(p(0, 1), p(2, 3)));
        assert_eq!(Line::through(p(4, 1), p(0, 1)), Line::through(p(9, 1), p(10, 1)));
        assert_eq!(Line::through(p(3, 9), p(3, -2)).slope(), Slope::Vertical);
        assert_eq!(Line::through(p(0, 0), p(-4, 2)).slope(), p(0, 0).slope_to(&p(2, -1)));
        assert!(Line::through(p(i32::MIN, i32::MIN), p(i32::MAX, i32::MAX)).contains(&p(7, 7)));
    }

    proptest! {
        #[test]
        fn line_identity_is_collinearity(a in small_point(), b in small_point(), c in small_point(), d in small_point()) {
            prop_assume!(a != b && c != d);
            let collinear = Line::through(a, b).contains(&c) && Line::through(a, b).contains(&d);
            prop_assert_eq!(Line::through(a, b) == Line::through(c, d), collinear);
        }

        #[test]
        fn point_order_is_monotone_along_lines(a in small_point(), b in small_point(), k in 1i32..5) {
            prop_assume!(a != b);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            let beyond = Point::new(hi.x + k * (hi.x - lo.x), hi.y + k * (hi.y - lo.y));
            prop_assert!(hi < beyond);
            prop_assert!(lo.distance(&beyond) > lo.distance(&hi));
        }
    }
}
