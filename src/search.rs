//! The pivot-by-pivot search for maximal collinear segments.

use crate::{
    candidate::SegmentCandidate,
    classify::SlopeClassifier,
    merge::{Merge, SegmentSet},
    Error, LineSegment, Point,
};

/// Parameters for [`FastCollinear::with_options`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// The smallest number of distinct collinear points that counts as a segment.
    ///
    /// Defaults to 4. Must be at least 2.
    pub min_points: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { min_points: 4 }
    }
}

impl Options {
    /// Sets the number of distinct collinear points needed to form a segment.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.min_points < 2 {
            Err(Error::MinPoints(self.min_points))
        } else {
            Ok(())
        }
    }
}

/// All the maximal line segments through at least four points of a point set.
///
/// For each point `p` in turn, the other points are sorted by the slope they
/// make with `p`, so that points collinear with `p` end up next to each other.
/// Every run of at least three equal slopes (not counting repeated points)
/// gives a segment through `p`, and these are merged into a [`SegmentSet`]
/// so that each maximal segment is reported once. This takes `O(n^2 log n)`
/// time and `O(n)` space beyond the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FastCollinear {
    segments: Vec<LineSegment>,
}

impl FastCollinear {
    /// Finds every maximal segment through four or more of `points`.
    ///
    /// Repeated points are allowed, but a point only counts once towards a
    /// segment no matter how many times it appears.
    pub fn new(points: &[Point]) -> Self {
        FastCollinear {
            segments: search(points, Options::default().min_points),
        }
    }

    /// Like [`FastCollinear::new`], with a custom segment size.
    pub fn with_options(points: &[Point], options: &Options) -> Result<Self, Error> {
        options.validate()?;
        Ok(FastCollinear {
            segments: search(points, options.min_points),
        })
    }

    /// The segments that were found, sorted by their endpoints.
    ///
    /// Each segment's endpoints are the two extreme points on it.
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// The number of segments that were found.
    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    /// Writes the segments, one per line, like `(x1, y1) -> (x2, y2)`.
    pub fn write_line_segments(&self, mut out: impl std::io::Write) -> std::io::Result<()> {
        for seg in &self.segments {
            writeln!(out, "{seg}")?;
        }
        Ok(())
    }

    /// Prints the segments to standard output, one per line.
    pub fn print_line_segments(&self) {
        print!("{self}");
    }
}

impl std::fmt::Display for FastCollinear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for seg in &self.segments {
            writeln!(f, "{seg}")?;
        }
        Ok(())
    }
}

fn search(points: &[Point], min_points: usize) -> Vec<LineSegment> {
    let _span = tracing::debug_span!("search", points = points.len(), min_points).entered();

    let mut classifier = SlopeClassifier::with_capacity(points.len());
    let mut found = SegmentSet::default();
    let mut candidates = 0usize;
    let mut extended = 0usize;

    for pivot in 0..points.len() {
        let groups = classifier.classify(pivot, points);
        for group in groups.iter() {
            let Some(candidate) = SegmentCandidate::from_group(&group, min_points) else {
                continue;
            };
            candidates += 1;
            if let Merge::Extended(_) = found.insert(&candidate) {
                extended += 1;
            }
        }
    }

    tracing::debug!(
        candidates,
        extended,
        segments = found.len(),
        "finished collinear search"
    );
    found.into_segments()
}

/// Property checks against [`crate::reference`], driven by `arbitrary` input.
///
/// These are public so that the fuzz targets can use them.
#[cfg(any(test, feature = "arbitrary"))]
pub mod arbtests {
    use arbitrary::Unstructured;

    use super::*;

    /// Checks that the fast search agrees with the reference search on an arbitrary point set.
    pub fn matches_reference(u: &mut Unstructured<'_>) -> arbitrary::Result<()> {
        let points = crate::arbitrary::point_set(u)?;
        let min_points = u.int_in_range(2..=6)?;
        let options = Options::default().with_min_points(min_points);

        let fast = FastCollinear::with_options(&points, &options)
            .expect("min_points is at least 2");
        let reference = crate::reference::reference_segments(&points, min_points);
        assert_eq!(fast.segments(), reference.as_slice(), "points: {points:?}");
        Ok(())
    }

    /// Checks that every reported segment has enough points on it, and that no
    /// two reported segments overlap on the same line.
    pub fn segments_are_maximal(u: &mut Unstructured<'_>) -> arbitrary::Result<()> {
        let points = crate::arbitrary::point_set(u)?;
        let fast = FastCollinear::new(&points);

        for seg in fast.segments() {
            let mut on_seg: Vec<_> = points.iter().filter(|q| seg.contains(q)).collect();
            on_seg.sort();
            on_seg.dedup();
            assert!(on_seg.len() >= 4, "{seg} has only {on_seg:?}");
            assert_eq!(on_seg.first(), Some(&&seg.p));
            assert_eq!(on_seg.last(), Some(&&seg.q));

            // No point beyond the ends is collinear, or the segment could be longer.
            let line = seg.line();
            assert!(points.iter().all(|q| !line.contains(q) || seg.contains(q)));
        }

        for (i, s) in fast.segments().iter().enumerate() {
            for t in &fast.segments()[(i + 1)..] {
                assert!(s.line() != t.line(), "{s} and {t} are on the same line");
            }
        }
        Ok(())
    }
}
