//! Merging candidate segments into a set of maximal segments.

use std::collections::HashMap;

use crate::{candidate::SegmentCandidate, Line, LineSegment};

/// An index into a [`SegmentSet`].
///
/// Indices are stable while segments are only added or extended. When one
/// insertion bridges two or more stored segments, the absorbed ones are
/// removed and the last segment may move into a freed slot.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SegIdx(pub usize);

impl std::fmt::Debug for SegIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s_{}", self.0)
    }
}

/// What happened to a candidate when it was inserted into a [`SegmentSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Merge {
    /// The candidate didn't touch any known segment, and was added as a new one.
    Novel(SegIdx),
    /// The candidate overlapped a known segment and made it longer.
    Extended(SegIdx),
    /// The candidate was already covered by a known segment, and was discarded.
    Subsegment(SegIdx),
}

impl Merge {
    /// The index of the segment that now covers the candidate.
    pub fn index(&self) -> SegIdx {
        match *self {
            Merge::Novel(idx) | Merge::Extended(idx) | Merge::Subsegment(idx) => idx,
        }
    }
}

#[derive(Clone, Debug)]
struct MaximalSegment {
    segment: LineSegment,
    line: Line,
}

/// The maximal segments discovered so far.
///
/// Two segments are considered parts of the same maximal segment if they lie
/// on the same line (checked exactly, not by comparing slopes) and their
/// spans overlap or touch. The set maintains the invariant that no two of its
/// segments are like that.
#[derive(Clone, Debug, Default)]
pub struct SegmentSet {
    segs: Vec<MaximalSegment>,
    by_line: HashMap<Line, Vec<SegIdx>>,
}

impl SegmentSet {
    /// The number of segments in this set.
    pub fn len(&self) -> usize {
        self.segs.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// Iterate over all segments in this set, in no particular order.
    pub fn segments(&self) -> impl Iterator<Item = &LineSegment> {
        self.segs.iter().map(|s| &s.segment)
    }

    /// Adds a candidate to this set, merging it with any known segments it overlaps.
    pub fn insert(&mut self, candidate: &SegmentCandidate) -> Merge {
        let incoming = candidate.segment();
        let line = incoming.line();

        let mut overlapping: Vec<SegIdx> = self
            .by_line
            .get(&line)
            .into_iter()
            .flatten()
            .copied()
            .filter(|idx| self[*idx].overlaps(&incoming))
            .collect();
        overlapping.sort_unstable();

        let Some((&survivor, absorbed)) = overlapping.split_first() else {
            let idx = SegIdx(self.segs.len());
            self.segs.push(MaximalSegment {
                segment: incoming,
                line,
            });
            self.by_line.entry(line).or_default().push(idx);
            tracing::trace!(
                ?idx,
                segment = %incoming,
                length = candidate.distance,
                "new segment"
            );
            return Merge::Novel(idx);
        };

        let merged = absorbed
            .iter()
            .fold(self[survivor].union(&incoming), |acc, idx| {
                acc.union(&self[*idx])
            });
        if merged == self[survivor] {
            tracing::trace!(
                idx = ?survivor,
                segment = %incoming,
                length = candidate.distance,
                "discarded subsegment"
            );
            return Merge::Subsegment(survivor);
        }

        // Removing from the back means the survivor, which has the smallest index, never moves.
        for idx in absorbed.iter().rev() {
            self.remove(*idx);
        }
        tracing::trace!(
            idx = ?survivor,
            from = %self[survivor],
            to = %merged,
            length = merged.length(),
            "extended segment"
        );
        self.segs[survivor.0].segment = merged;
        Merge::Extended(survivor)
    }

    fn remove(&mut self, idx: SegIdx) {
        let last = SegIdx(self.segs.len() - 1);
        let removed = self.segs.swap_remove(idx.0);
        if let Some(bucket) = self.by_line.get_mut(&removed.line) {
            bucket.retain(|i| *i != idx);
        }

        if idx != last {
            let moved_line = self.segs[idx.0].line;
            if let Some(bucket) = self.by_line.get_mut(&moved_line) {
                for i in bucket.iter_mut().filter(|i| **i == last) {
                    *i = idx;
                }
            }
        }
    }

    /// Consumes this set, returning its segments sorted by their endpoints.
    pub fn into_segments(self) -> Vec<LineSegment> {
        let mut ret: Vec<_> = self.segs.into_iter().map(|s| s.segment).collect();
        ret.sort_unstable_by_key(|s| (s.p, s.q));
        ret
    }
}

impl std::ops::Index<SegIdx> for SegmentSet {
    type Output = LineSegment;

    fn index(&self, index: SegIdx) -> &Self::Output {
        &self.segs[index.0].segment
    }
}
