#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
mod candidate;
mod classify;
mod geom;
mod merge;
mod parse;
mod search;
mod slope;

#[cfg(feature = "generators")]
pub mod generators;

// pub so that we can use it in fuzz tests, but it's really for checking the fast search
#[doc(hidden)]
pub mod reference;

pub use candidate::SegmentCandidate;
pub use classify::{SlopeClassifier, SlopeGroup, SlopeGroups};
pub use geom::{Line, LineSegment, Point};
pub use merge::{Merge, SegIdx, SegmentSet};
pub use parse::{parse_points, ParseError, ParseErrorKind};
#[cfg(any(test, feature = "arbitrary"))]
pub use search::arbtests;
pub use search::{FastCollinear, Options};
pub use slope::Slope;

/// Something went wrong setting up or reading the input to a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested segment size was too small to make sense.
    MinPoints(usize),
    /// The point set couldn't be read.
    Parse(ParseError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MinPoints(n) => write!(f, "a segment needs at least 2 points, not {n}"),
            Error::Parse(e) => write!(f, "could not read points: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MinPoints(_) => None,
            Error::Parse(e) => Some(e),
        }
    }
}
