//! Turning slope groups into candidate segments.

use crate::{classify::SlopeGroup, LineSegment, Point, Slope};

/// A segment found from a single pivot, before checking it against the segments found so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentCandidate {
    /// The smaller endpoint.
    pub p: Point,
    /// The larger endpoint.
    pub q: Point,
    /// The slope of the segment.
    pub slope: Slope,
    /// The distance between the endpoints.
    ///
    /// Merging compares the endpoints exactly; this is only reported in logs.
    pub distance: f64,
}

impl SegmentCandidate {
    /// A candidate with endpoints `a` and `b`, in either order.
    pub fn new(a: Point, b: Point) -> Self {
        let LineSegment { p, q } = LineSegment::new(a, b);
        SegmentCandidate {
            p,
            q,
            slope: p.slope_to(&q),
            distance: p.distance(&q),
        }
    }

    /// The candidate segment for a slope group, if the group and its pivot
    /// have at least `min_points` distinct points between them.
    ///
    /// The endpoints are the two points of the group (including the pivot)
    /// that are furthest apart. Because the group is sorted along its line,
    /// these are just the smallest and largest of the pivot and the group's
    /// two ends.
    pub fn from_group(group: &SlopeGroup<'_>, min_points: usize) -> Option<Self> {
        if group.len() + 1 < min_points || group.distinct_len() + 1 < min_points {
            return None;
        }

        let pivot = group.pivot();
        let p = pivot.min(group.first());
        let q = pivot.max(group.last());
        debug_assert!(p != q);
        debug_assert_eq!(p.slope_to(&q), group.slope());

        Some(SegmentCandidate {
            p,
            q,
            slope: group.slope(),
            distance: p.distance(&q),
        })
    }

    /// The candidate as a plain segment.
    pub fn segment(&self) -> LineSegment {
        LineSegment {
            p: self.p,
            q: self.q,
        }
    }
}
