/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use path_regions::bezier::*;
use path_regions::geo::{Coord2, Coordinate};

mod path;

#[test]
fn curve_evaluates_its_own_endpoints() {
    let curve = Curve::from_points(
        Coord2(0.0, 0.0),
        (Coord2(2.0, 4.0), Coord2(6.0, 4.0)),
        Coord2(8.0, 0.0),
    );

    assert_eq!(curve.point_at_pos(0.0), curve.start_point());
    assert_eq!(curve.point_at_pos(1.0), curve.end_point());
}

#[test]
fn quadratic_midpoint_sits_on_the_de_casteljau_average() {
    let (p0, p1, p2) = (Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let mid = quadratic_point_at_pos(p0, p1, p2, 0.5);

    assert_eq!(mid, Coord2(5.0, 5.0));
}

#[test]
fn sample_cubic_returns_the_requested_point_count_and_matching_endpoints() {
    let (p0, p1, p2, p3) = (
        Coord2(0.0, 0.0),
        Coord2(2.0, 6.0),
        Coord2(8.0, 6.0),
        Coord2(10.0, 0.0),
    );
    let points = sample_cubic(p0, p1, p2, p3, 20);

    assert_eq!(points.len(), 20);
    assert_eq!(points[0], p0);
    assert_eq!(points[19], p3);
}

#[test]
fn subdivide_cubic_halves_share_the_split_point() {
    let (p0, p1, p2, p3) = (
        Coord2(0.0, 0.0),
        Coord2(2.0, 6.0),
        Coord2(8.0, 6.0),
        Coord2(10.0, 0.0),
    );

    let (head, tail) = subdivide_cubic(0.5, p0, p1, p2, p3);
    let split_point = cubic_point_at_pos(p0, p1, p2, p3, 0.5);

    assert_eq!(head.3, split_point);
    assert_eq!(tail.0, split_point);
}

#[test]
fn section_cubic_over_the_full_range_reproduces_the_original_control_points() {
    let (p0, p1, p2, p3) = (
        Coord2(0.0, 0.0),
        Coord2(2.0, 6.0),
        Coord2(8.0, 6.0),
        Coord2(10.0, 0.0),
    );

    let (s0, s1, s2, s3) = section_cubic(0.0, 1.0, p0, p1, p2, p3);

    assert_eq!(s0, p0);
    assert_eq!(s3, p3);
    let direct_mid = cubic_point_at_pos(p0, p1, p2, p3, 0.5);
    let sectioned_mid = cubic_point_at_pos(s0, s1, s2, s3, 0.5);
    assert!(direct_mid.distance_to(&sectioned_mid) < 1e-9);
}

#[test]
fn section_quadratic_mid_range_lies_on_the_parent_curve() {
    let (p0, p1, p2) = (Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));

    let (s0, s1, s2) = section_quadratic(0.25, 0.75, p0, p1, p2);
    let expected_start = quadratic_point_at_pos(p0, p1, p2, 0.25);
    let expected_end = quadratic_point_at_pos(p0, p1, p2, 0.75);

    assert!(s0.distance_to(&expected_start) < 1e-9);
    assert!(s2.distance_to(&expected_end) < 1e-9);
}

#[test]
fn cubic_tangent_at_the_endpoints_points_along_the_adjoining_control_segment() {
    let (p0, p1, p2, p3) = (
        Coord2(0.0, 0.0),
        Coord2(1.0, 0.0),
        Coord2(2.0, 1.0),
        Coord2(3.0, 1.0),
    );

    let start_tangent = cubic_tangent(p0, p1, p2, p3, 0.0);
    assert!(start_tangent.0 > 0.0);
    assert_eq!(start_tangent.1, 0.0);
}

#[test]
fn quadratic_tangent_direction_flips_with_reversed_control_points() {
    let (p0, p1, p2) = (Coord2(0.0, 0.0), Coord2(5.0, 5.0), Coord2(10.0, 0.0));

    let forward = quadratic_tangent(p0, p1, p2, 0.5);
    let reversed = quadratic_tangent(p2, p1, p0, 0.5);

    assert!((forward.0 + reversed.0).abs() < 1e-9);
    assert!((forward.1 + reversed.1).abs() < 1e-9);
}
