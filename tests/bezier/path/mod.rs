/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::Rng;

use path_regions::bezier::path::*;
use path_regions::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn single_square() -> PathElement {
    PathElement {
        fill_rule: FillRule::NonZero,
        commands: vec![
            Command::Move { x: 0.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 10.0, relative: false },
            Command::Line { x: 0.0, y: 10.0, relative: false },
            Command::Close,
        ],
    }
}

fn square_with_opposite_oriented_hole(fill_rule: FillRule) -> PathElement {
    PathElement {
        fill_rule,
        commands: vec![
            Command::Move { x: 0.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 10.0, relative: false },
            Command::Line { x: 0.0, y: 10.0, relative: false },
            Command::Close,
            Command::Move { x: 2.0, y: 2.0, relative: false },
            Command::Line { x: 2.0, y: 8.0, relative: false },
            Command::Line { x: 8.0, y: 8.0, relative: false },
            Command::Line { x: 8.0, y: 2.0, relative: false },
            Command::Close,
        ],
    }
}

fn two_same_orientation_squares(fill_rule: FillRule) -> PathElement {
    PathElement {
        fill_rule,
        commands: vec![
            Command::Move { x: 0.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 10.0, relative: false },
            Command::Line { x: 0.0, y: 10.0, relative: false },
            Command::Close,
            Command::Move { x: 2.0, y: 2.0, relative: false },
            Command::Line { x: 8.0, y: 2.0, relative: false },
            Command::Line { x: 8.0, y: 8.0, relative: false },
            Command::Line { x: 2.0, y: 8.0, relative: false },
            Command::Close,
        ],
    }
}

fn bowtie(fill_rule: FillRule) -> PathElement {
    PathElement {
        fill_rule,
        commands: vec![
            Command::Move { x: 0.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 10.0, relative: false },
            Command::Line { x: 10.0, y: 0.0, relative: false },
            Command::Line { x: 0.0, y: 10.0, relative: false },
            Command::Close,
        ],
    }
}

fn cubic_self_intersection() -> PathElement {
    PathElement {
        fill_rule: FillRule::NonZero,
        commands: vec![
            Command::Move { x: 0.0, y: 0.0, relative: false },
            Command::CubicBez {
                c1x: 20.0,
                c1y: 30.0,
                c2x: -10.0,
                c2y: 30.0,
                x: 10.0,
                y: 0.0,
                relative: false,
            },
            Command::Close,
        ],
    }
}

/// Applies a similarity transform (rotation, uniform positive scale, translation) to every
/// absolute point a command carries, leaving its topology untouched
fn transform_command(command: Command, angle: f64, scale: f64, tx: f64, ty: f64) -> Command {
    let (sin, cos) = angle.sin_cos();
    let map = |x: f64, y: f64| -> (f64, f64) {
        let rx = x * cos - y * sin;
        let ry = x * sin + y * cos;
        (rx * scale + tx, ry * scale + ty)
    };

    match command {
        Command::Move { x, y, relative } => {
            let (x, y) = map(x, y);
            Command::Move { x, y, relative }
        }
        Command::Line { x, y, relative } => {
            let (x, y) = map(x, y);
            Command::Line { x, y, relative }
        }
        Command::CubicBez { c1x, c1y, c2x, c2y, x, y, relative } => {
            let (c1x, c1y) = map(c1x, c1y);
            let (c2x, c2y) = map(c2x, c2y);
            let (x, y) = map(x, y);
            Command::CubicBez { c1x, c1y, c2x, c2y, x, y, relative }
        }
        other => other,
    }
}

fn transform_path(path: &PathElement, angle: f64, scale: f64, tx: f64, ty: f64) -> PathElement {
    PathElement {
        fill_rule: path.fill_rule,
        commands: path
            .commands
            .iter()
            .map(|&command| transform_command(command, angle, scale, tx, ty))
            .collect(),
    }
}

#[test]
fn scenario_1_single_square_is_one_fill_region() {
    init_logging();

    let regions = process(&single_square()).unwrap();

    assert_eq!(regions.len(), 1);
    assert!(!regions[0].is_hole);
    assert_eq!(regions[0].fragment_ids.len(), 4);
}

#[test]
fn scenario_2_square_with_opposite_oriented_hole_nests_under_its_outer() {
    init_logging();

    let regions = process(&square_with_opposite_oriented_hole(FillRule::NonZero)).unwrap();
    assert_eq!(regions.len(), 2);

    let outer = regions.iter().find(|r| r.parent_region_id.is_none()).unwrap();
    let inner = regions.iter().find(|r| r.parent_region_id.is_some()).unwrap();

    assert!(!outer.is_hole);
    assert!(inner.is_hole);
    assert_eq!(inner.parent_region_id, Some(outer.id));
}

#[test]
fn scenario_3_two_same_orientation_squares_nonzero_both_fill() {
    init_logging();

    let regions = process(&two_same_orientation_squares(FillRule::NonZero)).unwrap();

    assert_eq!(regions.len(), 2);
    assert!(regions.iter().all(|r| !r.is_hole));
}

#[test]
fn scenario_4_two_same_orientation_squares_evenodd_inner_is_a_hole() {
    init_logging();

    let regions = process(&two_same_orientation_squares(FillRule::EvenOdd)).unwrap();
    assert_eq!(regions.len(), 2);

    let outer = regions.iter().find(|r| r.parent_region_id.is_none()).unwrap();
    let inner = regions.iter().find(|r| r.parent_region_id.is_some()).unwrap();

    assert!(!outer.is_hole);
    assert!(inner.is_hole);
}

#[test]
fn scenario_5_bowtie_is_two_non_hole_regions_under_either_fill_rule() {
    init_logging();

    let non_zero = process(&bowtie(FillRule::NonZero)).unwrap();
    assert_eq!(non_zero.len(), 2);
    assert!(non_zero.iter().all(|r| !r.is_hole));

    let even_odd = process(&bowtie(FillRule::EvenOdd)).unwrap();
    assert_eq!(even_odd.len(), 2);
    assert!(even_odd.iter().all(|r| !r.is_hole));
}

#[test]
fn scenario_6_cubic_self_intersection_splits_into_two_bounded_faces() {
    init_logging();

    let regions = process(&cubic_self_intersection()).unwrap();

    // Euler's formula on the resulting planar graph (3 vertices, 4 edges, connected) gives
    // 3 faces including the unbounded one, so 2 bounded regions: the small loop the curve draws
    // at its self-intersection and the larger region traced by the rest of the curve.
    assert_eq!(regions.len(), 2);
    assert!(regions.iter().any(|r| !r.is_hole));
    assert!(regions.iter().all(|r| !r.fragment_ids.is_empty()));
}

#[test]
fn process_is_idempotent_across_every_scenario() {
    for path in [
        single_square(),
        square_with_opposite_oriented_hole(FillRule::NonZero),
        two_same_orientation_squares(FillRule::EvenOdd),
        bowtie(FillRule::NonZero),
        cubic_self_intersection(),
    ] {
        let first = process(&path).unwrap();
        let second = process(&path).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.is_hole, b.is_hole);
            assert_eq!(a.fragment_ids.len(), b.fragment_ids.len());
        }
    }
}

#[test]
fn region_count_is_invariant_under_random_similarity_transforms() {
    init_logging();

    let mut rng = rand::thread_rng();
    let baseline = process(&square_with_opposite_oriented_hole(FillRule::NonZero)).unwrap();

    for _ in 0..20 {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let scale = rng.gen_range(0.5..5.0);
        let tx = rng.gen_range(-50.0..50.0);
        let ty = rng.gen_range(-50.0..50.0);

        let transformed_path = transform_path(
            &square_with_opposite_oriented_hole(FillRule::NonZero),
            angle,
            scale,
            tx,
            ty,
        );
        let regions = process(&transformed_path).unwrap();

        assert_eq!(regions.len(), baseline.len());
        let mut expected_holes: Vec<bool> = baseline.iter().map(|r| r.is_hole).collect();
        let mut actual_holes: Vec<bool> = regions.iter().map(|r| r.is_hole).collect();
        expected_holes.sort();
        actual_holes.sort();
        assert_eq!(expected_holes, actual_holes);
    }
}

#[test]
fn process_with_config_tolerates_a_coarser_face_sample_count() {
    init_logging();

    let mut config = PipelineConfig::default();
    config.face_sample_count = 64;

    let regions = process_with_config(&bowtie(FillRule::NonZero), &config).unwrap();
    assert_eq!(regions.len(), 2);
}
