//! Machine paths: ordered point sequences tagged with a working role.

use crate::error::PathError;
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Working role of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Cut all the way through the stock
    Cut,
    /// Score the surface without cutting through
    Score,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cut => write!(f, "cutting"),
            Self::Score => write!(f, "scoring"),
        }
    }
}

/// A continuous sequence of points worked at a single depth.
///
/// The point list is never empty once built through [`MachinePath::new`] or
/// [`MachinePath::from_start`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPath")]
pub struct MachinePath {
    role: Role,
    points: Vec<Point>,
}

#[derive(Deserialize)]
struct RawPath {
    role: Role,
    points: Vec<Point>,
}

impl TryFrom<RawPath> for MachinePath {
    type Error = PathError;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        MachinePath::new(raw.role, raw.points)
    }
}

impl MachinePath {
    /// Create a path from a non-empty point list
    pub fn new(role: Role, points: impl IntoIterator<Item = Point>) -> Result<Self, PathError> {
        let points: Vec<Point> = points.into_iter().collect();
        if points.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self { role, points })
    }

    /// Create a single point path
    pub fn from_start(role: Role, start: Point) -> Self {
        Self {
            role,
            points: vec![start],
        }
    }

    /// Role of this path
    pub fn role(&self) -> Role {
        self.role
    }

    /// First point
    pub fn first(&self) -> Result<Point, PathError> {
        self.points.first().copied().ok_or(PathError::Empty)
    }

    /// Last point
    pub fn last(&self) -> Result<Point, PathError> {
        self.points.last().copied().ok_or(PathError::Empty)
    }

    /// All points in traversal order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a single point
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Reverse the traversal direction in place
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Total polyline length
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Whether the path returns to its starting point
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Absorb `other` if the two paths share an endpoint.
    ///
    /// Endpoint pairs are tried in this order: other starts where this
    /// ends (append), other ends where this starts (prepend), both end at
    /// the same point (append reversed), both start at the same point
    /// (prepend reversed). The shared point is kept once. Returns `false`
    /// and leaves both paths untouched when the roles differ or no endpoint
    /// is shared.
    pub fn join(&mut self, other: &MachinePath) -> bool {
        if other.role != self.role {
            return false;
        }

        if self.points.is_empty() {
            self.points.clone_from(&other.points);
            return true;
        }

        let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) else {
            return false;
        };
        let (Some(&other_first), Some(&other_last)) = (other.points.first(), other.points.last())
        else {
            return false;
        };

        let incoming = other.points.len() - 1;

        if other_first == last {
            self.points.reserve(incoming);
            self.points.extend(other.points.iter().skip(1));
        } else if other_last == first {
            self.prepend(other.points[..incoming].iter().copied(), incoming);
        } else if other_last == last {
            self.points.reserve(incoming);
            self.points.extend(other.points.iter().rev().skip(1));
        } else if other_first == first {
            self.prepend(other.points.iter().rev().take(incoming).copied(), incoming);
        } else {
            return false;
        }

        true
    }

    fn prepend(&mut self, points: impl Iterator<Item = Point>, count: usize) {
        let mut joined = Vec::with_capacity(self.points.len() + count);
        joined.extend(points);
        joined.append(&mut self.points);
        self.points = joined;
    }
}
