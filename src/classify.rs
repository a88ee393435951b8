//! Grouping points by their slope relative to a pivot.

use crate::{Point, Slope};

/// Sorts points by the slope they make with a pivot.
///
/// A classifier owns a scratch buffer that is reused from one pivot to the
/// next, so that classifying every point of an `n`-point set in turn needs
/// only `O(n)` extra space.
#[derive(Clone, Debug, Default)]
pub struct SlopeClassifier {
    scratch: Vec<(Slope, Point)>,
}

impl SlopeClassifier {
    /// Creates a classifier with room for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        SlopeClassifier {
            scratch: Vec::with_capacity(n),
        }
    }

    /// Groups every point except `points[pivot]` by its slope relative to `points[pivot]`.
    ///
    /// Other copies of the pivot (that is, other indices with the same
    /// coordinates) are kept apart from the real slope groups; see
    /// [`SlopeGroups::coincident`].
    ///
    /// # Panics
    ///
    /// Panics if `pivot` is out of bounds.
    pub fn classify(&mut self, pivot: usize, points: &[Point]) -> SlopeGroups<'_> {
        let origin = points[pivot];
        self.scratch.clear();
        self.scratch.extend(
            points
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != pivot)
                .map(|(_, q)| (origin.slope_to(q), *q)),
        );
        // Sorting by point within each slope puts every group in order along its line.
        self.scratch.sort_unstable();

        let coincident = self
            .scratch
            .partition_point(|(slope, _)| !slope.is_proper());
        SlopeGroups {
            pivot: origin,
            coincident,
            entries: &self.scratch,
        }
    }
}

/// The other points of a point set, sorted by their slope relative to a pivot.
#[derive(Clone, Debug)]
pub struct SlopeGroups<'a> {
    pivot: Point,
    coincident: usize,
    entries: &'a [(Slope, Point)],
}

impl<'a> SlopeGroups<'a> {
    /// The point that all slopes are measured from.
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// How many other points have the same coordinates as the pivot.
    pub fn coincident(&self) -> usize {
        self.coincident
    }

    /// Iterates over the groups of points sharing a slope with the pivot, in increasing order of slope.
    ///
    /// Copies of the pivot are not included in any group.
    pub fn iter(&self) -> impl Iterator<Item = SlopeGroup<'a>> + '_ {
        let entries: &'a [(Slope, Point)] = self.entries;
        let pivot = self.pivot;
        entries[self.coincident..]
            .chunk_by(|(s0, _), (s1, _)| s0 == s1)
            .map(move |members| SlopeGroup {
                pivot,
                slope: members[0].0,
                members,
            })
    }
}

/// All the points that are collinear with a pivot along a single slope.
#[derive(Clone, Copy, Debug)]
pub struct SlopeGroup<'a> {
    pivot: Point,
    slope: Slope,
    // Non-empty, all with the same slope, sorted by point.
    members: &'a [(Slope, Point)],
}

impl<'a> SlopeGroup<'a> {
    /// The pivot this group was measured from. It is not one of the members.
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// The slope shared by the pivot and every member.
    pub fn slope(&self) -> Slope {
        self.slope
    }

    /// The number of members, counting repeated points separately.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// The number of members with distinct coordinates.
    pub fn distinct_len(&self) -> usize {
        1 + self
            .members
            .windows(2)
            .filter(|pair| pair[0].1 != pair[1].1)
            .count()
    }

    /// The members, in increasing point order (and therefore in order along the line).
    pub fn points(&self) -> impl Iterator<Item = Point> + 'a {
        self.members.iter().map(|(_, q)| *q)
    }

    /// The smallest member.
    pub fn first(&self) -> Point {
        self.members[0].1
    }

    /// The largest member.
    pub fn last(&self) -> Point {
        self.members[self.members.len() - 1].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::tests::p;

    fn groups(pivot: usize, points: &[Point]) -> Vec<(Slope, Vec<Point>)> {
        let mut classifier = SlopeClassifier::default();
        let groups = classifier.classify(pivot, points);
        groups.iter().map(|g| (g.slope(), g.points().collect())).collect()
    }

    #[test]
    fn groups_by_slope() {
        let points = [p(0, 0), p(1, 1), p(2, 0), p(-3, -3), p(0, 5), p(5, 0), p(2, 2)];
        let found = groups(0, &points);
        assert_eq!(
            found,
            vec![
                (Slope::Finite { rise: 0, run: 1 }, vec![p(2, 0), p(5, 0)]),
                (Slope::Finite { rise: 1, run: 1 }, vec![p(-3, -3), p(1, 1), p(2, 2)]),
                (Slope::Vertical, vec![p(0, 5)]),
            ]
        );
    }

    #[test]
    fn points_on_both_sides_share_a_group() {
        let points = [p(1, 2), p(3, 4), p(-1, 0), p(0, 1), p(2, 3)];
        let found = groups(3, &points);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1, vec![p(-1, 0), p(1, 2), p(2, 3), p(3, 4)]);
    }

    #[test]
    fn duplicates_of_the_pivot_are_set_aside() {
        let points = [p(1, 1), p(1, 1), p(2, 2), p(1, 1), p(3, 3)];
        let mut classifier = SlopeClassifier::with_capacity(points.len());
        let groups = classifier.classify(0, &points);
        assert_eq!(groups.pivot(), p(1, 1));
        assert_eq!(groups.coincident(), 2);

        let found: Vec<_> = groups.iter().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].len(), 2);
        assert_eq!(found[0].points().collect::<Vec<_>>(), vec![p(2, 2), p(3, 3)]);
    }

    #[test]
    fn duplicates_of_other_points_count_once() {
        let points = [p(0, 0), p(2, 2), p(1, 1), p(2, 2), p(3, 3)];
        let mut classifier = SlopeClassifier::default();
        let groups = classifier.classify(0, &points);
        let group = groups.iter().next().unwrap();
        assert_eq!(group.len(), 4);
        assert_eq!(group.distinct_len(), 3);
        assert_eq!(group.first(), p(1, 1));
        assert_eq!(group.last(), p(3, 3));
        assert_eq!(group.pivot(), p(0, 0));
    }

    #[test]
    fn lonely_pivot() {
        let points = [p(7, 7)];
        let mut classifier = SlopeClassifier::default();
        let groups = classifier.classify(0, &points);
        assert_eq!(groups.coincident(), 0);
        assert_eq!(groups.iter().count(), 0);
    }
}
