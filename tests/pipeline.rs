use foamcut::{
    classify_paths, generate_program, generate_program_auto_origin, init_logging, write_program,
    Instruction, Point, RawFragment, RgbColor, Role, Settings,
};
use tempfile::TempDir;

const BLACK: RgbColor = RgbColor::new(0, 0, 0);
const RED: RgbColor = RgbColor::new(255, 0, 0);
const GREEN: RgbColor = RgbColor::new(0, 255, 0);

fn fragment(color: RgbColor, groups: &[&str], coords: &[(f64, f64)]) -> RawFragment {
    RawFragment {
        color,
        groups: groups.iter().map(|g| g.to_string()).collect(),
        points: coords.iter().map(|&c| Point::from(c)).collect(),
    }
}

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.classification.cut_colors = vec![BLACK];
    settings.classification.score_colors = vec![RED];
    settings
}

#[test]
fn test_classify_paths_drops_ignored() {
    let paths = classify_paths(
        vec![
            fragment(BLACK, &[], &[(0.0, 0.0), (1.0, 0.0)]),
            fragment(GREEN, &[], &[(5.0, 5.0), (6.0, 5.0)]),
            fragment(RED, &[], &[(2.0, 0.0), (3.0, 0.0)]),
        ],
        &settings().classification.classifier(),
    )
    .unwrap();

    let roles: Vec<_> = paths.iter().map(|p| p.role()).collect();
    assert_eq!(roles, vec![Role::Cut, Role::Score]);
}

#[test]
fn test_classify_paths_rejects_empty_fragment() {
    let result = classify_paths(
        vec![fragment(BLACK, &[], &[])],
        &settings().classification.classifier(),
    );
    assert!(result.is_err());
}

#[test]
fn test_group_filter() {
    let mut settings = settings();
    settings.classification.include_groups = vec!["outline".to_string()];

    let program = generate_program(
        vec![
            fragment(BLACK, &["outline"], &[(0.0, 0.0), (10.0, 0.0)]),
            fragment(BLACK, &["notes"], &[(0.0, 5.0), (10.0, 5.0)]),
        ],
        &settings,
    )
    .unwrap();

    let cuts = program
        .motions()
        .filter(|i| matches!(i, Instruction::Cut { .. }))
        .count();
    assert_eq!(cuts, 1);
}

#[test]
fn test_generate_program_end_to_end() {
    let program = generate_program(
        vec![fragment(BLACK, &[], &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])],
        &settings(),
    )
    .unwrap();

    let gcode = program.to_gcode();
    assert!(gcode.starts_with("G90\nG0 Z20.000 F1500\n"));
    assert!(gcode.contains("G1 X10.000 Y0.000 F900\nG1 X0.000 Y10.000 F900\n"));
    assert!(gcode.ends_with("G0 X-10.000 Y-10.000 F6000 ; return to starting coordinates\n"));
}

#[test]
fn test_auto_origin() {
    let program = generate_program_auto_origin(
        vec![fragment(BLACK, &[], &[(20.0, 30.0), (25.0, 30.0)])],
        &settings(),
        None,
        Some(0.0),
    )
    .unwrap();

    let gcode = program.to_gcode();
    assert!(gcode.contains("; machine state coordinates reset to [20,0]"));
    assert!(gcode.contains("G0 X0.000 Y30.000 F6000 ; moving to start of path at (abs) [20,30]"));
}

#[test]
fn test_invalid_machine_settings() {
    let mut settings = settings();
    settings.machine.feed_rates.plunge = 0.0;

    let err = generate_program(
        vec![fragment(BLACK, &[], &[(0.0, 0.0), (1.0, 0.0)])],
        &settings,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("Feed rate 'plunge'"));
}

#[test]
fn test_write_program() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("part.gcode");

    let program = generate_program(
        vec![fragment(RED, &[], &[(0.0, 0.0), (4.0, 3.0)])],
        &settings(),
    )
    .unwrap();
    write_program(&program, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, program.to_gcode());
    assert!(written.contains("G1 Z5.000 F1500"));
}

#[test]
fn test_write_program_to_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("part.gcode");
    let program = generate_program(Vec::new(), &settings()).unwrap();
    assert!(write_program(&program, &path).is_err());
}

#[test]
fn test_init_logging_only_once() {
    let _ = init_logging();
    assert!(init_logging().is_err());
}
