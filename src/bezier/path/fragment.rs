/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::command::*;
use super::sampler::SampledSubpath;
use crate::bezier::intersection::{pairwise_intersections, self_intersections};
use crate::bezier::{cubic_tangent, quadratic_tangent, sample_cubic, sample_quadratic, section_cubic, section_quadratic};
use crate::config::PipelineConfig;
use crate::error::PathError;
use crate::geo::Coord2;

use log::trace;

/// A stable handle into the path's fragment store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(pub u32);

///
/// A maximal sub-arc of one input command lying between consecutive intersection parameters:
/// the atomic geometric unit everything past the split planner works with
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fragment {
    Line { start: Coord2, end: Coord2, i_command: usize, i_subpath: usize },
    Quadratic { start: Coord2, control: Coord2, end: Coord2, i_command: usize, i_subpath: usize },
    Cubic { start: Coord2, control1: Coord2, control2: Coord2, end: Coord2, i_command: usize, i_subpath: usize },
}

impl Fragment {
    #[inline]
    pub fn start(&self) -> Coord2 {
        match *self {
            Fragment::Line { start, .. } => start,
            Fragment::Quadratic { start, .. } => start,
            Fragment::Cubic { start, .. } => start,
        }
    }

    #[inline]
    pub fn end(&self) -> Coord2 {
        match *self {
            Fragment::Line { end, .. } => end,
            Fragment::Quadratic { end, .. } => end,
            Fragment::Cubic { end, .. } => end,
        }
    }

    #[inline]
    pub fn i_command(&self) -> usize {
        match *self {
            Fragment::Line { i_command, .. } => i_command,
            Fragment::Quadratic { i_command, .. } => i_command,
            Fragment::Cubic { i_command, .. } => i_command,
        }
    }

    /// The subpath this fragment was cut from, used to trace a region's winding back to the
    /// original command direction that drew it
    #[inline]
    pub fn i_subpath(&self) -> usize {
        match *self {
            Fragment::Line { i_subpath, .. } => i_subpath,
            Fragment::Quadratic { i_subpath, .. } => i_subpath,
            Fragment::Cubic { i_subpath, .. } => i_subpath,
        }
    }

    /// Tangent vector at `t`, used for angular ordering at a planar-graph vertex
    pub fn tangent_at(&self, t: f64) -> Coord2 {
        match *self {
            Fragment::Line { start, end, .. } => end - start,
            Fragment::Quadratic { start, control, end, .. } => quadratic_tangent(start, control, end, t),
            Fragment::Cubic { start, control1, control2, end, .. } => {
                cubic_tangent(start, control1, control2, end, t)
            }
        }
    }

    /// `n` inclusive points sampled at uniform `t` along this fragment
    pub fn sample(&self, n: usize) -> Vec<Coord2> {
        match *self {
            Fragment::Line { start, end, .. } => {
                let steps = (n.max(2) - 1) as f64;
                (0..n.max(2))
                    .map(|idx| start + (end - start) * (idx as f64 / steps))
                    .collect()
            }
            Fragment::Quadratic { start, control, end, .. } => sample_quadratic(start, control, end, n.max(2)),
            Fragment::Cubic { start, control1, control2, end, .. } => {
                sample_cubic(start, control1, control2, end, n.max(2))
            }
        }
    }
}

/// Per-subpath, per-command lists of `t` values at which that command must be cut
pub type SplitPlan = Vec<Vec<Vec<f64>>>;

///
/// Finds every self- and inter-subpath intersection among a path's sampled subpaths, and maps
/// each one back to a (command, command-local `t`) split point
///
/// Subpaths are assumed closed (their last sample duplicates their first), so the trailing sample
/// is dropped before intersection-finding: the resulting segment indices still index directly into
/// each subpath's full sample sequence, since nothing before that trailing duplicate moves.
///
pub fn compute_split_plan(
    sampled: &[SampledSubpath],
    config: &PipelineConfig,
) -> Result<SplitPlan, PathError> {
    let mut buckets: SplitPlan = sampled
        .iter()
        .map(|subpath| vec![vec![]; subpath.commands.len()])
        .collect();

    let trimmed: Vec<&[Coord2]> = sampled
        .iter()
        .map(|subpath| &subpath.samples[..subpath.samples.len() - 1])
        .collect();

    for (s_idx, samples) in trimmed.iter().enumerate() {
        let crossings = self_intersections(samples);
        trace!("subpath {}: {} self-intersections", s_idx, crossings.len());
        for crossing in crossings {
            add_to_bucket(&sampled[s_idx].commands, &mut buckets[s_idx], crossing.i_segment_a, crossing.t_a)?;
            add_to_bucket(&sampled[s_idx].commands, &mut buckets[s_idx], crossing.i_segment_b, crossing.t_b)?;
        }
    }

    for s_idx in 0..trimmed.len() {
        for t_idx in (s_idx + 1)..trimmed.len() {
            let crossings = pairwise_intersections(trimmed[s_idx], trimmed[t_idx]);
            trace!("subpaths {}/{}: {} pairwise intersections", s_idx, t_idx, crossings.len());
            for crossing in crossings {
                add_to_bucket(&sampled[s_idx].commands, &mut buckets[s_idx], crossing.i_segment_a, crossing.t_a)?;
                add_to_bucket(&sampled[t_idx].commands, &mut buckets[t_idx], crossing.i_segment_b, crossing.t_b)?;
            }
        }
    }

    for subpath_buckets in buckets.iter_mut() {
        for bucket in subpath_buckets.iter_mut() {
            bucket.sort_by(|a, b| a.partial_cmp(b).expect("intersection t is never NaN"));
            bucket.dedup_by(|a, b| (*a - *b).abs() < config.epsilon_intersect);
        }
    }

    Ok(buckets)
}

fn add_to_bucket(
    commands: &[AbsCommand],
    subpath_buckets: &mut [Vec<f64>],
    segment_index: usize,
    t_local: f64,
) -> Result<(), PathError> {
    let (command_idx, t) = segment_to_command_t(commands, segment_index, t_local).ok_or_else(|| {
        PathError::InternalInvariantViolation {
            message: format!("intersection segment {} does not map to any command", segment_index),
        }
    })?;

    if !(0.0..=1.0).contains(&t) {
        return Err(PathError::InternalInvariantViolation {
            message: format!("mapped intersection t {} outside [0, 1] for command {}", t, command_idx),
        });
    }

    subpath_buckets[command_idx].push(t);
    Ok(())
}

/// Converts a (global sample segment index, local segment `t`) pair into (command index,
/// command-local `t`): a linear map over sample-space, accepted as a sufficient
/// approximation given the sampler's fixed resolution
fn segment_to_command_t(commands: &[AbsCommand], segment_index: usize, t_local: f64) -> Option<(usize, f64)> {
    for (idx, command) in commands.iter().enumerate() {
        let (first, last) = (command.i_first_point?, command.i_last_point?);
        if segment_index >= first && segment_index < last {
            let span = (last - first) as f64;
            let t = ((segment_index - first) as f64 + t_local) / span;
            return Some((idx, t));
        }
    }
    None
}

///
/// Subdivides every command of every subpath at its split plan's `t` values, producing the
/// path's flat fragment store
///
/// A command whose only interval is too narrow to keep (for example, a command with zero length)
/// still contributes one straight closing fragment spanning its full range, so fragment coverage
/// of the subpath never has a gap.
///
pub fn build_fragments(sampled: &[SampledSubpath], plan: &SplitPlan, config: &PipelineConfig) -> Vec<Fragment> {
    let mut fragments = Vec::new();

    for (s_idx, subpath) in sampled.iter().enumerate() {
        for (c_idx, command) in subpath.commands.iter().enumerate() {
            let mut ts = vec![0.0];
            ts.extend(plan[s_idx][c_idx].iter().copied());
            ts.push(1.0);
            ts.dedup_by(|a, b| (*a - *b).abs() < config.epsilon_intersect);

            let mut produced = 0usize;
            for window in ts.windows(2) {
                let (t0, t1) = (window[0], window[1]);
                if t1 - t0 > config.epsilon_intersect {
                    fragments.push(make_fragment(command, t0, t1, c_idx, s_idx));
                    produced += 1;
                }
            }

            if produced == 0 {
                trace!("subpath {} command {}: degenerate split, inserting closing fragment", s_idx, c_idx);
                fragments.push(Fragment::Line {
                    start: command.geometry.start(),
                    end: command.geometry.end(),
                    i_command: c_idx,
                    i_subpath: s_idx,
                });
            }
        }
    }

    fragments
}

fn make_fragment(command: &AbsCommand, t0: f64, t1: f64, i_command: usize, i_subpath: usize) -> Fragment {
    match command.geometry {
        AbsGeometry::Line { start, end } => Fragment::Line {
            start: start + (end - start) * t0,
            end: start + (end - start) * t1,
            i_command,
            i_subpath,
        },
        AbsGeometry::Quadratic { start, control, end } => {
            let (p0, p1, p2) = section_quadratic(t0, t1, start, control, end);
            Fragment::Quadratic { start: p0, control: p1, end: p2, i_command, i_subpath }
        }
        AbsGeometry::Cubic { start, control1, control2, end } => {
            let (p0, p1, p2, p3) = section_cubic(t0, t1, start, control1, control2, end);
            Fragment::Cubic { start: p0, control1: p1, control2: p2, end: p3, i_command, i_subpath }
        }
    }
}

///
/// Sign of each subpath's own shoelace area, computed from its pre-fragmentation sample polyline
///
/// A region's winding contribution is a property of the direction its source subpath was
/// originally drawn in, not of whichever direction the planar-graph face walk happens to
/// traverse its boundary when the two differ (fragments crossing other subpaths can leave a
/// bounded face traced in either rotational sense regardless of how its source was drawn).
pub fn subpath_orientations(sampled: &[SampledSubpath]) -> Vec<f64> {
    sampled
        .iter()
        .map(|subpath| {
            let trimmed = &subpath.samples[..subpath.samples.len() - 1];
            let area = crate::geo::shoelace_signed_area(trimmed);
            if area >= 0.0 {
                1.0
            } else {
                -1.0
            }
        })
        .collect()
}
