//! Reading point sets from text.
//!
//! The format is a point count on the first line, followed by one point per
//! line as two whitespace-separated integers:
//!
//! ```text
//! 4
//! 10000      0
//!     0  10000
//!  3000   7000
//!  7000   3000
//! ```
//!
//! Blank lines are ignored everywhere.

use crate::{Error, Point};

/// What went wrong while reading a point set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input had no count line.
    MissingCount,
    /// The count line wasn't a non-negative integer.
    BadCount(String),
    /// A point line had this many fields, instead of two.
    WrongArity(usize),
    /// A coordinate wasn't an integer that fits in an `i32`.
    BadCoordinate(String),
    /// The number of points didn't match the count line.
    CountMismatch {
        /// The number on the count line.
        expected: usize,
        /// The number of points actually read.
        found: usize,
    },
}

/// An error reading a point set, and where it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// The one-based line number of the problem. For a count mismatch, this
    /// is the number of lines in the input.
    pub line: usize,
    /// The problem.
    pub kind: ParseErrorKind,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::MissingCount => write!(f, "expected a point count"),
            ParseErrorKind::BadCount(s) => write!(f, "invalid point count {s:?}"),
            ParseErrorKind::WrongArity(n) => write!(f, "expected 2 coordinates, found {n}"),
            ParseErrorKind::BadCoordinate(s) => write!(f, "invalid coordinate {s:?}"),
            ParseErrorKind::CountMismatch { expected, found } => {
                write!(f, "expected {expected} points, found {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn coordinate(token: &str, line: usize) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError {
        line,
        kind: ParseErrorKind::BadCoordinate(token.to_owned()),
    })
}

/// Reads a point set in the format described in the [module docs](self).
pub fn parse_points(input: &str) -> Result<Vec<Point>, Error> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((count_line, count)) = lines.next() else {
        return Err(ParseError {
            line: 1,
            kind: ParseErrorKind::MissingCount,
        }
        .into());
    };
    let expected: usize = count.parse().map_err(|_| ParseError {
        line: count_line,
        kind: ParseErrorKind::BadCount(count.to_owned()),
    })?;

    // Every point takes up at least a byte of input.
    let mut points = Vec::with_capacity(expected.min(input.len()));
    for (line, text) in lines {
        let fields: Vec<_> = text.split_whitespace().collect();
        let &[x, y] = fields.as_slice() else {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::WrongArity(fields.len()),
            }
            .into());
        };
        points.push(Point::new(coordinate(x, line)?, coordinate(y, line)?));
    }

    if points.len() != expected {
        return Err(ParseError {
            line: input.lines().count(),
            kind: ParseErrorKind::CountMismatch {
                expected,
                found: points.len(),
            },
        }
        .into());
    }

    Ok(points)
}
