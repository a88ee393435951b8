//! Exact slopes between integer points.

use std::cmp::Ordering;

use crate::Point;

/// The slope of the line from one point to another.
///
/// Slopes are compared exactly, so two pairs of points get equal slopes if and
/// only if the lines through them are parallel (or the same). The ordering
/// matches the real-valued slope, with two sentinels at the ends:
/// [`Slope::Coincident`] is smaller than everything and [`Slope::Vertical`] is
/// bigger than everything.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slope {
    /// The two points have the same coordinates.
    Coincident,
    /// A non-vertical line, with slope `rise / run`.
    ///
    /// The fraction is in lowest terms and `run` is positive, so every slope
    /// has exactly one representation. Horizontal lines have `rise == 0` and
    /// `run == 1`.
    Finite {
        /// The numerator.
        rise: i64,
        /// The denominator. Always positive.
        run: i64,
    },
    /// The two points differ only in their `y` coordinate.
    Vertical,
}

pub(crate) fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Slope {
    /// The slope of the line from `from` to `to`.
    pub fn between(from: Point, to: Point) -> Slope {
        let (dx, dy) = from.delta(&to);
        Slope::from_delta(dx, dy)
    }

    pub(crate) fn from_delta(dx: i64, dy: i64) -> Slope {
        if dx == 0 && dy == 0 {
            Slope::Coincident
        } else if dx == 0 {
            Slope::Vertical
        } else {
            let g = gcd(dx, dy) as i64;
            let sign = dx.signum();
            Slope::Finite {
                rise: sign * dy / g,
                run: sign * dx / g,
            }
        }
    }

    /// Is this a real slope, as opposed to the slope between two identical points?
    pub fn is_proper(&self) -> bool {
        *self != Slope::Coincident
    }

    /// The slope as a floating-point number.
    ///
    /// Coincident points map to negative infinity, vertical lines to positive
    /// infinity, and horizontal lines to positive zero.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Slope::Coincident => f64::NEG_INFINITY,
            Slope::Vertical => f64::INFINITY,
            Slope::Finite { rise: 0, .. } => 0.0,
            Slope::Finite { rise, run } => rise as f64 / run as f64,
        }
    }
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Slope::Coincident, Slope::Coincident) | (Slope::Vertical, Slope::Vertical) => {
                Ordering::Equal
            }
            (Slope::Coincident, _) | (_, Slope::Vertical) => Ordering::Less,
            (_, Slope::Coincident) | (Slope::Vertical, _) => Ordering::Greater,
            (
                Slope::Finite { rise: r0, run: d0 },
                Slope::Finite { rise: r1, run: d1 },
            ) => (i128::from(*r0) * i128::from(*d1)).cmp(&(i128::from(*r1) * i128::from(*d0))),
        }
    }
}

impl PartialOrd for Slope {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Slope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slope::Coincident => write!(f, "coincident"),
            Slope::Vertical => write!(f, "vertical"),
            Slope::Finite { rise, run } => write!(f, "{rise}/{run}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::tests::{p, small_point};
    use proptest::prelude::*;

    #[test]
    fn sentinels() {
        assert_eq!(p(3, 4).slope_to(&p(3, 4)), Slope::Coincident);
        assert_eq!(p(3, 4).slope_to(&p(3, -4)), Slope::Vertical);
        assert_eq!(p(3, 4).slope_to(&p(-3, 4)), Slope::Finite { rise: 0, run: 1 });

        assert_eq!(p(3, 4).slope_to(&p(3, 4)).to_f64(), f64::NEG_INFINITY);
        assert_eq!(p(3, 4).slope_to(&p(3, 9)).to_f64(), f64::INFINITY);
        let horizontal = p(3, 4).slope_to(&p(-3, 4)).to_f64();
        assert_eq!(horizontal, 0.0);
        assert!(horizontal.is_sign_positive());
    }

    #[test]
    fn sentinel_order() {
        let horizontal = p(0, 0).slope_to(&p(1, 0));
        let steep = p(0, 0).slope_to(&p(1, 1000));
        let shallow_down = p(0, 0).slope_to(&p(1000, -1));
        assert!(Slope::Coincident < shallow_down);
        assert!(shallow_down < horizontal);
        assert!(horizontal < steep);
        assert!(steep < Slope::Vertical);
        assert!(!Slope::Coincident.is_proper());
        assert!(Slope::Vertical.is_proper());
    }

    #[test]
    fn reduced() {
        assert_eq!(p(0, 0).slope_to(&p(2, 4)), p(7, 7).slope_to(&p(4, 1)));
        assert_eq!(
            p(0, 0).slope_to(&p(-6, 4)),
            Slope::Finite { rise: -2, run: 3 }
        );
        assert_eq!(format!("{:?}", p(0, 0).slope_to(&p(-6, 4))), "-2/3");
    }

    #[test]
    fn extreme_coordinates() {
        let a = p(i32::MIN, i32::MIN);
        let b = p(i32::MAX, i32::MAX);
        let c = p(i32::MAX, i32::MAX - 1);
        assert_eq!(a.slope_to(&b), Slope::Finite { rise: 1, run: 1 });
        assert!(a.slope_to(&c) < a.slope_to(&b));
    }

    // These differ by about 2^-62, below the resolution of an `f64` near 1.
    #[test]
    fn exact_where_floats_are_not() {
        let a = i32::MAX;
        let s0 = p(0, 0).slope_to(&p(a, a - 1));
        let s1 = p(0, 0).slope_to(&p(a - 1, a - 2));
        assert_ne!(s0, s1);
        assert!(s1 < s0);
    }

    proptest! {
        #[test]
        fn order_matches_floats(a in small_point(), b in small_point(), c in small_point(), d in small_point()) {
            let s0 = a.slope_to(&b);
            let s1 = c.slope_to(&d);
            // Small coordinates, so the float quotients are accurate enough to order.
            prop_assert_eq!(s0.cmp(&s1), s0.to_f64().partial_cmp(&s1.to_f64()).unwrap());
        }

        #[test]
        fn symmetric(a in small_point(), b in small_point()) {
            prop_assert_eq!(a.slope_to(&b), b.slope_to(&a));
        }
    }
}
