/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;
use crate::consts::EPSILON_INTERSECT;
use crate::line::is_left;

///
/// Signed shoelace area of a closed polygon given as an ordered point list
///
/// Positive for a counter-clockwise winding, negative for clockwise. The polygon is assumed
/// closed (the last point connects back to the first); the caller does not need to repeat the
/// first point at the end.
///
pub fn shoelace_signed_area(polygon: &[Coord2]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..polygon.len() {
        let p0 = polygon[i];
        let p1 = polygon[(i + 1) % polygon.len()];
        sum += p0.0 * p1.1 - p1.0 * p0.1;
    }

    sum / 2.0
}

///
/// True if `point` lies on segment `a`-`b`, within `EPSILON_INTERSECT`
///
/// Collinearity is tested via the cross product; the dot-product projection then confirms the
/// point falls between the two endpoints rather than on their shared infinite line.
///
pub fn is_point_on_segment(point: Coord2, a: Coord2, b: Coord2) -> bool {
    let ab = b - a;
    let ap = point - a;

    let cross = ab.cross(ap);
    if cross.abs() >= EPSILON_INTERSECT {
        return false;
    }

    let dot = ab.dot(&ap);
    let squared_length = ab.dot(&ab);
    dot >= -EPSILON_INTERSECT && dot <= squared_length + EPSILON_INTERSECT
}

///
/// Nonzero-winding point-in-polygon test using a horizontal ray and `is_left` to determine
/// crossing direction
///
/// `polygon` is an ordered, implicitly-closed point list (as with `shoelace_signed_area`, the
/// first point is not repeated at the end). Points lying exactly on an edge are reported as
/// inside.
///
pub fn is_point_inside_polygon(point: Coord2, polygon: &[Coord2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut winding_number = 0i32;
    let n = polygon.len();

    for i in 0..n {
        let p0 = polygon[i];
        let p1 = polygon[(i + 1) % n];

        if is_point_on_segment(point, p0, p1) {
            return true;
        }

        if p0.1 <= point.1 {
            if p1.1 > point.1 && is_left(p0, p1, point) > 0.0 {
                winding_number += 1;
            }
        } else if p1.1 <= point.1 && is_left(p0, p1, point) < 0.0 {
            winding_number -= 1;
        }
    }

    winding_number != 0
}

///
/// True if every vertex of `inner` lies inside or on the edge of `outer`
///
pub fn is_polygon_inside_polygon(inner: &[Coord2], outer: &[Coord2]) -> bool {
    inner
        .iter()
        .all(|&point| is_point_inside_polygon(point, outer))
}
