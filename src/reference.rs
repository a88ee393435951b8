//! A slow and simple way to find collinear segments, for testing the fast one.

use std::collections::{BTreeSet, HashMap};

use crate::{Line, LineSegment, Point};

/// Finds every maximal segment through at least `min_points` distinct points
/// of `points`, by collecting the points on the line through every pair.
///
/// Takes `O(n^2)` time and space. The result is sorted the same way as
/// [`FastCollinear::segments`](crate::FastCollinear::segments).
pub fn reference_segments(points: &[Point], min_points: usize) -> Vec<LineSegment> {
    let mut lines: HashMap<Line, BTreeSet<Point>> = HashMap::new();
    for (i, a) in points.iter().enumerate() {
        for b in &points[(i + 1)..] {
            if a != b {
                let on_line = lines.entry(Line::through(*a, *b)).or_default();
                on_line.insert(*a);
                on_line.insert(*b);
            }
        }
    }

    let mut ret: Vec<_> = lines
        .into_values()
        .filter(|on_line| on_line.len() >= min_points)
        .filter_map(|on_line| Some(LineSegment::new(*on_line.first()?, *on_line.last()?)))
        .collect();
    ret.sort_unstable_by_key(|s| (s.p, s.q));
    ret
}
