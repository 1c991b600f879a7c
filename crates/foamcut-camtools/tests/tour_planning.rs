use foamcut_camtools::{plan_tour, total_travel, PlannedPath, TourPlanner};
use foamcut_core::{MachinePath, PathError, Point, Role};

fn segment(from: (f64, f64), to: (f64, f64)) -> MachinePath {
    MachinePath::new(Role::Cut, [Point::from(from), Point::from(to)]).unwrap()
}

#[test]
fn test_greedy_order() {
    let a = segment((0.0, 0.0), (1.0, 0.0));
    let b = segment((5.0, 0.0), (6.0, 0.0));

    let tour = plan_tour(Point::origin(), vec![b.clone(), a.clone()]).unwrap();
    assert_eq!(tour.len(), 2);
    assert_eq!(tour[0].path, a);
    assert_eq!(tour[1].path, b);
    assert!(!tour[0].reversed && !tour[1].reversed);
    assert_eq!(total_travel(&tour), 4.0);
}

#[test]
fn test_reversal_chains_endpoints() {
    let tour = plan_tour(
        Point::origin(),
        vec![
            segment((10.0, 0.0), (1.0, 0.0)),
            segment((10.0, 5.0), (20.0, 5.0)),
        ],
    )
    .unwrap();

    assert!(tour[0].reversed);
    assert_eq!(tour[0].path.last().unwrap(), Point::new(10.0, 0.0));
    assert!(!tour[1].reversed);
    assert_eq!(tour[1].travel, 5.0);
}

#[test]
fn test_every_path_visited_once() {
    let paths: Vec<_> = (0..10)
        .map(|i| segment((i as f64 * 3.0, 1.0), (i as f64 * 3.0 + 1.0, 2.0)))
        .collect();
    let tour = plan_tour(Point::new(100.0, 100.0), paths.clone()).unwrap();

    assert_eq!(tour.len(), paths.len());
    for path in &paths {
        let visits = tour
            .iter()
            .filter(|planned| {
                let mut original = planned.path.clone();
                if planned.reversed {
                    original.reverse();
                }
                &original == path
            })
            .count();
        assert_eq!(visits, 1);
    }
}

/// Runs paths in input order without reversing any
struct InputOrder;

impl TourPlanner for InputOrder {
    fn plan(&self, start: Point, paths: Vec<MachinePath>) -> Result<Vec<PlannedPath>, PathError> {
        let mut current = start;
        paths
            .into_iter()
            .map(|path| -> Result<PlannedPath, PathError> {
                let travel = current.distance_to(&path.first()?);
                current = path.last()?;
                Ok(PlannedPath {
                    path,
                    reversed: false,
                    travel,
                })
            })
            .collect()
    }
}

#[test]
fn test_custom_planner() {
    use foamcut_camtools::{CodeBuilder, Instruction};
    use foamcut_core::MachineConfig;

    let builder = CodeBuilder::with_planner(MachineConfig::default(), InputOrder);
    let program = builder
        .build_program(vec![
            segment((50.0, 0.0), (60.0, 0.0)),
            segment((1.0, 0.0), (2.0, 0.0)),
        ])
        .unwrap();

    let first_travel = program
        .motions()
        .find(|i| matches!(i, Instruction::Travel { .. }))
        .cloned();
    assert_eq!(
        first_travel,
        Some(Instruction::Travel {
            dx: 50.0,
            dy: 0.0,
            feed: 6000.0,
            comment: Some("moving to start of path at (abs) [50,0]".to_string())
        })
    );
}
