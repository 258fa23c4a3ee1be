/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::command::*;
use crate::bezier::{sample_cubic, sample_quadratic};
use crate::error::PathError;
use crate::geo::Coord2;

///
/// A subpath's dense sample-point sequence together with its commands, enriched with the sample
/// index range each one contributed
///
pub struct SampledSubpath {
    pub samples: Vec<Coord2>,
    pub commands: Vec<AbsCommand>,
}

///
/// Converts an absolutized subpath into a dense polyline, recording the first/last sample index
/// each command contributes
///
/// Lines contribute exactly two samples; Bezier commands contribute `sample_count` inclusive
/// samples. Adjacent commands share their boundary sample (the last point pushed for one command
/// is reused as the first point of the next), so the returned sample sequence has no duplicate
/// points at command boundaries.
///
pub fn sample_subpath(subpath: &Subpath, sample_count: usize) -> Result<SampledSubpath, PathError> {
    if subpath.commands.is_empty() {
        return Err(PathError::MalformedSubpath {
            index: 0,
            message: "subpath has no geometry commands to sample".to_string(),
        });
    }

    let mut samples: Vec<Coord2> = Vec::new();
    let mut commands = subpath.commands.clone();

    for (idx, command) in commands.iter_mut().enumerate() {
        let points = match command.geometry {
            AbsGeometry::Line { start, end } => vec![start, end],
            AbsGeometry::Quadratic { start, control, end } => {
                sample_quadratic(start, control, end, sample_count)
            }
            AbsGeometry::Cubic { start, control1, control2, end } => {
                sample_cubic(start, control1, control2, end, sample_count)
            }
        };

        if points.len() < 2 {
            return Err(PathError::MalformedSubpath {
                index: idx,
                message: "command sampled to fewer than two points".to_string(),
            });
        }

        let i_first = if idx == 0 {
            samples.push(points[0]);
            samples.len() - 1
        } else {
            samples.len() - 1
        };

        samples.extend(points.into_iter().skip(1));
        let i_last = samples.len() - 1;

        command.i_first_point = Some(i_first);
        command.i_last_point = Some(i_last);
    }

    if samples.is_empty() {
        return Err(PathError::MalformedSubpath {
            index: 0,
            message: "sampling produced zero points".to_string(),
        });
    }

    Ok(SampledSubpath { samples, commands })
}
