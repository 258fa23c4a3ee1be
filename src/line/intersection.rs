/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::line::*;
use crate::geo::*;

///
/// Finds the `t` values at which two straight lines intersect, using Cramer's rule on the two
/// segments' direction vectors
///
/// Returns `None` when the lines are parallel (including coincident). Otherwise returns
/// `(t_a, t_b)`, the position along each line (`0` at its start, `1` at its end) at which the
/// infinite extensions of the two lines cross. The caller is responsible for deciding whether
/// `t_a`/`t_b` fall within the segments themselves.
///
pub fn line_intersects_line<L1, L2>(line1: &L1, line2: &L2) -> Option<(f64, f64)>
where
    L1: Line,
    L2: Line<Point = L1::Point>,
    L1::Point: Coordinate2D,
{
    let (p1, p2) = line1.points();
    let (p3, p4) = line2.points();

    let d1x = p2.x() - p1.x();
    let d1y = p2.y() - p1.y();
    let d2x = p4.x() - p3.x();
    let d2y = p4.y() - p3.y();

    let denominator = d1x * d2y - d1y * d2x;
    if denominator.abs() < 1e-12 {
        return None;
    }

    let dx = p3.x() - p1.x();
    let dy = p3.y() - p1.y();

    let t_a = (dx * d2y - dy * d2x) / denominator;
    let t_b = (dx * d1y - dy * d1x) / denominator;

    Some((t_a, t_b))
}
