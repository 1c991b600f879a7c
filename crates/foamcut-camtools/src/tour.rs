//! Tour planning: the order and direction in which paths are run.
//!
//! The planner never changes a path's geometry. It only picks which path
//! comes next and whether to run it end-to-start.

use foamcut_core::{MachinePath, PathError, Point};
use tracing::debug;

/// A path scheduled for emission
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPath {
    /// The path, already reversed if `reversed` is set
    pub path: MachinePath,
    /// Whether the path runs end-to-start relative to its input order
    pub reversed: bool,
    /// Straight-line travel from the previous position to the path start
    pub travel: f64,
}

/// Orders paths to keep non-cutting travel short
pub trait TourPlanner {
    /// Order every path in `paths`, starting from `start`.
    ///
    /// Each input path appears exactly once in the result.
    fn plan(&self, start: Point, paths: Vec<MachinePath>) -> Result<Vec<PlannedPath>, PathError>;
}

/// Greedy nearest-endpoint planner.
///
/// Repeatedly runs the unvisited path whose first or last point is closest
/// to the current position. Ties keep the earlier path, and a path's first
/// point wins over its own last point.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestEndpoint;

impl TourPlanner for NearestEndpoint {
    fn plan(&self, start: Point, paths: Vec<MachinePath>) -> Result<Vec<PlannedPath>, PathError> {
        let mut pending = paths;
        let mut tour = Vec::with_capacity(pending.len());
        let mut current = start;

        while !pending.is_empty() {
            let mut best: Option<(usize, bool, f64)> = None;
            for (index, path) in pending.iter().enumerate() {
                let to_first = current.distance_to(&path.first()?);
                if best.is_none_or(|(_, _, d)| to_first < d) {
                    best = Some((index, false, to_first));
                }
                let to_last = current.distance_to(&path.last()?);
                if best.is_none_or(|(_, _, d)| to_last < d) {
                    best = Some((index, true, to_last));
                }
            }

            let Some((index, reversed, travel)) = best else {
                break;
            };
            let mut path = pending.remove(index);
            if reversed {
                path.reverse();
            }
            current = path.last()?;
            debug!(reversed, travel, remaining = pending.len(), "planned path");
            tour.push(PlannedPath {
                path,
                reversed,
                travel,
            });
        }

        Ok(tour)
    }
}

/// Plan a tour with [`NearestEndpoint`]
pub fn plan_tour(start: Point, paths: Vec<MachinePath>) -> Result<Vec<PlannedPath>, PathError> {
    NearestEndpoint.plan(start, paths)
}

/// Total travel distance of a planned tour
pub fn total_travel(tour: &[PlannedPath]) -> f64 {
    tour.iter().map(|planned| planned.travel).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use foamcut_core::Role;

    fn segment(from: (f64, f64), to: (f64, f64)) -> MachinePath {
        MachinePath::new(Role::Cut, [Point::from(from), Point::from(to)]).unwrap()
    }

    #[test]
    fn test_empty_tour() {
        let tour = plan_tour(Point::origin(), Vec::new()).unwrap();
        assert!(tour.is_empty());
        assert_eq!(total_travel(&tour), 0.0);
    }

    #[test]
    fn test_nearest_first() {
        let far = segment((100.0, 0.0), (110.0, 0.0));
        let near = segment((1.0, 0.0), (5.0, 0.0));
        let tour = plan_tour(Point::origin(), vec![far.clone(), near.clone()]).unwrap();

        assert_eq!(tour.len(), 2);
        assert_eq!(tour[0].path, near);
        assert!(!tour[0].reversed);
        assert_eq!(tour[0].travel, 1.0);
        assert_eq!(tour[1].path, far);
        assert_eq!(tour[1].travel, 95.0);
        assert_eq!(total_travel(&tour), 96.0);
    }

    #[test]
    fn test_reversed_when_last_is_closer() {
        let path = segment((10.0, 0.0), (2.0, 0.0));
        let tour = plan_tour(Point::origin(), vec![path]).unwrap();

        assert!(tour[0].reversed);
        assert_eq!(tour[0].path.first().unwrap(), Point::new(2.0, 0.0));
        assert_eq!(tour[0].travel, 2.0);
    }

    #[test]
    fn test_ties_keep_earlier_path_and_first_point() {
        let a = segment((3.0, 0.0), (0.0, 3.0));
        let b = segment((-3.0, 0.0), (0.0, -3.0));
        let tour = plan_tour(Point::origin(), vec![a.clone(), b]).unwrap();

        assert_eq!(tour[0].path, a);
        assert!(!tour[0].reversed);
    }

    #[test]
    fn test_closed_path_not_reversed() {
        let square = MachinePath::new(
            Role::Score,
            [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)].map(Point::from),
        )
        .unwrap();
        let tour = plan_tour(Point::new(5.0, 5.0), vec![square.clone()]).unwrap();
        assert!(!tour[0].reversed);
        assert_eq!(tour[0].path, square);
    }
}
