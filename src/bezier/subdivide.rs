/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Splits a cubic bezier curve at `t` via de Casteljau's algorithm, returning the control points
/// of the two resulting sub-curves, which share the point at `t`
///
pub fn subdivide_cubic<Point: Coordinate>(
    t: f64,
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
) -> ((Point, Point, Point, Point), (Point, Point, Point, Point)) {
    let p01 = p0 + (p1 - p0) * t;
    let p12 = p1 + (p2 - p1) * t;
    let p23 = p2 + (p3 - p2) * t;

    let p012 = p01 + (p12 - p01) * t;
    let p123 = p12 + (p23 - p12) * t;

    let p0123 = p012 + (p123 - p012) * t;

    ((p0, p01, p012, p0123), (p0123, p123, p23, p3))
}

///
/// Splits a quadratic bezier curve at `t`, returning the control points of the two resulting
/// sub-curves
///
pub fn subdivide_quadratic<Point: Coordinate>(
    t: f64,
    p0: Point,
    p1: Point,
    p2: Point,
) -> ((Point, Point, Point), (Point, Point, Point)) {
    let p01 = p0 + (p1 - p0) * t;
    let p12 = p1 + (p2 - p1) * t;

    let p012 = p01 + (p12 - p01) * t;

    ((p0, p01, p012), (p012, p12, p2))
}

///
/// Returns the control points of the cubic sub-curve spanning `[t_min, t_max]`
///
/// Matches splitting at `t_min`, then splitting the tail at `(t_max - t_min) / (1 - t_min)` of
/// its own range.
///
pub fn section_cubic<Point: Coordinate>(
    t_min: f64,
    t_max: f64,
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
) -> (Point, Point, Point, Point) {
    let (_, tail) = subdivide_cubic(t_min, p0, p1, p2, p3);
    let (tail_p0, tail_p1, tail_p2, tail_p3) = tail;

    if (1.0 - t_min).abs() < 1e-12 {
        return (tail_p0, tail_p1, tail_p2, tail_p3);
    }

    let t_within_tail = (t_max - t_min) / (1.0 - t_min);
    let (head, _) = subdivide_cubic(t_within_tail, tail_p0, tail_p1, tail_p2, tail_p3);
    head
}

///
/// Returns the control points of the quadratic sub-curve spanning `[t_min, t_max]`
///
pub fn section_quadratic<Point: Coordinate>(
    t_min: f64,
    t_max: f64,
    p0: Point,
    p1: Point,
    p2: Point,
) -> (Point, Point, Point) {
    let (_, tail) = subdivide_quadratic(t_min, p0, p1, p2);
    let (tail_p0, tail_p1, tail_p2) = tail;

    if (1.0 - t_min).abs() < 1e-12 {
        return (tail_p0, tail_p1, tail_p2);
    }

    let t_within_tail = (t_max - t_min) / (1.0 - t_min);
    let (head, _) = subdivide_quadratic(t_within_tail, tail_p0, tail_p1, tail_p2);
    head
}
