/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use path_regions::geo::Coord2;
use path_regions::line::*;

#[test]
fn crossing_lines_agree_on_their_intersection_regardless_of_argument_order() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let line2 = (Coord2(0.0, 10.0), Coord2(10.0, 0.0));

    let (t_a, t_b) = line_intersects_line(&line1, &line2).unwrap();
    let (t_b_swapped, t_a_swapped) = line_intersects_line(&line2, &line1).unwrap();

    assert!((t_a - t_a_swapped).abs() < 1e-10);
    assert!((t_b - t_b_swapped).abs() < 1e-10);
}

#[test]
fn parallel_lines_never_intersect() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let line2 = (Coord2(0.0, 3.0), Coord2(-10.0, 3.0));

    assert!(line_intersects_line(&line1, &line2).is_none());
}

#[test]
fn line_coefficients_hold_for_every_point_on_the_line() {
    let line = (Coord2(1.0, 1.0), Coord2(5.0, 9.0));
    let (a, b, c) = line_coefficients(&line);

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let x = 1.0 + (5.0 - 1.0) * t;
        let y = 1.0 + (9.0 - 1.0) * t;
        assert!((a * x + b * y + c).abs() < 1e-9);
    }
}

#[test]
fn is_left_reverses_sign_when_the_query_point_crosses_the_line() {
    let p0 = Coord2(0.0, 0.0);
    let p1 = Coord2(10.0, 0.0);

    assert!(is_left(p0, p1, Coord2(5.0, 2.0)) > 0.0);
    assert!(is_left(p0, p1, Coord2(5.0, -2.0)) < 0.0);
    assert_eq!(is_left(p0, p1, Coord2(5.0, 0.0)), 0.0);
}
