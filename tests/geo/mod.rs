/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use path_regions::geo::*;

fn square() -> Vec<Coord2> {
    vec![
        Coord2(0.0, 0.0),
        Coord2(10.0, 0.0),
        Coord2(10.0, 10.0),
        Coord2(0.0, 10.0),
    ]
}

#[test]
fn distance_to_is_symmetric_across_the_public_api() {
    let a = Coord2(1.0, 1.0);
    let b = Coord2(4.0, 5.0);

    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(a.distance_to(&b), b.distance_to(&a));
}

#[test]
fn is_near_to_respects_its_threshold() {
    let a = Coord2(0.0, 0.0);
    let b = Coord2(0.0, 0.05);

    assert!(a.is_near_to(&b, 0.1));
    assert!(!a.is_near_to(&b, 0.01));
}

#[test]
fn shoelace_area_sign_tracks_winding_direction() {
    let ccw = square();
    let mut cw = ccw.clone();
    cw.reverse();

    assert!(shoelace_signed_area(&ccw) > 0.0);
    assert!(shoelace_signed_area(&cw) < 0.0);
    assert_eq!(shoelace_signed_area(&ccw), -shoelace_signed_area(&cw));
}

#[test]
fn point_in_polygon_agrees_with_its_hole() {
    let outer = square();
    let hole = vec![
        Coord2(3.0, 3.0),
        Coord2(7.0, 3.0),
        Coord2(7.0, 7.0),
        Coord2(3.0, 7.0),
    ];

    assert!(is_point_inside_polygon(Coord2(5.0, 5.0), &outer));
    assert!(is_point_inside_polygon(Coord2(5.0, 5.0), &hole));
    assert!(is_polygon_inside_polygon(&hole, &outer));
    assert!(!is_polygon_inside_polygon(&outer, &hole));
}

#[test]
fn bounding_box_union_contains_both_inputs() {
    let a = Bounds2::from_min_max(Coord2(0.0, 0.0), Coord2(5.0, 5.0));
    let b = Bounds2::from_min_max(Coord2(3.0, -2.0), Coord2(9.0, 4.0));

    let union = a.union_bounds(b);

    assert!(union.contains_bounds(&a, 0.0));
    assert!(union.contains_bounds(&b, 0.0));
    assert_eq!(union.area(), (9.0 - 0.0) * (5.0 - -2.0));
}

#[test]
fn strict_containment_rejects_equal_bounds() {
    let bounds = Bounds2::from_min_max(Coord2(0.0, 0.0), Coord2(10.0, 10.0));

    assert!(!bounds.strictly_contains_bounds(&bounds, 1e-10));

    let inner = Bounds2::from_min_max(Coord2(1.0, 1.0), Coord2(9.0, 9.0));
    assert!(bounds.strictly_contains_bounds(&inner, 1e-10));
}
