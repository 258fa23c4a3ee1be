/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::derivative::*;
use crate::geo::*;

///
/// The tangent vector of a cubic bezier curve at `t`, via its Bernstein derivative
///
pub fn cubic_tangent<Point: Coordinate>(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let (d1, d2, d3) = derivative4(p0, p1, p2, p3);
    quadratic_derivative_at_pos(d1, d2, d3, t)
}

///
/// The tangent vector of a quadratic bezier curve at `t`
///
pub fn quadratic_tangent<Point: Coordinate>(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let (d1, d2) = derivative3(p0, p1, p2);
    linear_derivative_at_pos(d1, d2, t)
}

#[inline]
fn quadratic_derivative_at_pos<Point: Coordinate>(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

#[inline]
fn linear_derivative_at_pos<Point: Coordinate>(p0: Point, p1: Point, t: f64) -> Point {
    p0 + (p1 - p0) * t
}
