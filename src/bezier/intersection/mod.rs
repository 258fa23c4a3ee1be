/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Finding where sampled path polylines cross themselves and each other
//!

use crate::consts::EPSILON_INTERSECT;
use crate::geo::Coord2;
use crate::line::line_intersects_line;

///
/// A single crossing between two segments of a path's sampled polyline
///
/// `i_segment_a`/`i_segment_b` and `t_a`/`t_b` are expressed against the global sample sequence
/// for the path (all subpaths concatenated in order), not against any one subpath.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Coord2,
    pub i_segment_a: usize,
    pub i_segment_b: usize,
    pub t_a: f64,
    pub t_b: f64,
}

///
/// Finds every crossing among the segments of a single dense sample polyline
///
/// Segments that share an endpoint (`j == i + 1`) are skipped, since they always meet there and
/// that meeting isn't a crossing. The polyline is assumed closed: the segment from the last point
/// back to the first is included.
///
pub fn self_intersections(samples: &[Coord2]) -> Vec<Intersection> {
    let mut found = vec![];
    let n = samples.len();
    if n < 4 {
        return found;
    }

    for i in 0..n {
        let a0 = samples[i];
        let a1 = samples[(i + 1) % n];

        // j ranges over segments that don't touch segment i at either endpoint
        let mut j = i + 2;
        let j_max = if i == 0 { n - 1 } else { n };
        while j < j_max {
            let b0 = samples[j];
            let b1 = samples[(j + 1) % n];

            if let Some(crossing) = segment_crossing(a0, a1, b0, b1, i, j) {
                found.push(crossing);
            }

            j += 1;
        }
    }

    found
}

///
/// Finds every crossing between two distinct dense sample polylines
///
/// Indices in the returned `Intersection`s are local to each polyline's own sample sequence;
/// callers combining multiple subpaths are responsible for offsetting them into a shared global
/// index space.
///
pub fn pairwise_intersections(samples_a: &[Coord2], samples_b: &[Coord2]) -> Vec<Intersection> {
    let mut found = vec![];
    let n_a = samples_a.len();
    let n_b = samples_b.len();
    if n_a < 2 || n_b < 2 {
        return found;
    }

    for i in 0..n_a {
        let a0 = samples_a[i];
        let a1 = samples_a[(i + 1) % n_a];

        for j in 0..n_b {
            let b0 = samples_b[j];
            let b1 = samples_b[(j + 1) % n_b];

            if let Some(crossing) = segment_crossing(a0, a1, b0, b1, i, j) {
                found.push(crossing);
            }
        }
    }

    found
}

fn segment_crossing(a0: Coord2, a1: Coord2, b0: Coord2, b1: Coord2, i: usize, j: usize) -> Option<Intersection> {
    let (t_a, t_b) = line_intersects_line(&(a0, a1), &(b0, b1))?;

    if t_a > EPSILON_INTERSECT && t_a < 1.0 - EPSILON_INTERSECT && t_b > EPSILON_INTERSECT && t_b < 1.0 - EPSILON_INTERSECT {
        let point = a0 + (a1 - a0) * t_a;
        Some(Intersection {
            point,
            i_segment_a: i,
            i_segment_b: j,
            t_a,
            t_b,
        })
    } else {
        None
    }
}
