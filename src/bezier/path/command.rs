/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::Coord2;

///
/// The fill rule requested for a path element
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

///
/// A raw path command, as it arrives from the (out-of-core) tokenizer
///
/// Each geometry-carrying variant comes in an absolute or relative flavour, matching the SVG path
/// grammar this pipeline's commands are modelled on. Elliptical arcs have no variant here: they are
/// rejected by the normalizer with `PathError::UnsupportedCommand`.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Move { x: f64, y: f64, relative: bool },
    Line { x: f64, y: f64, relative: bool },
    HLine { x: f64, relative: bool },
    VLine { y: f64, relative: bool },
    QuadBez { cx: f64, cy: f64, x: f64, y: f64, relative: bool },
    QuadBezSmooth { x: f64, y: f64, relative: bool },
    CubicBez { c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64, relative: bool },
    CubicBezSmooth { c2x: f64, c2y: f64, x: f64, y: f64, relative: bool },
    Close,
}

///
/// A single input path: its fill rule plus the raw command list
///
#[derive(Clone, Debug, PartialEq)]
pub struct PathElement {
    pub fill_rule: FillRule,
    pub commands: Vec<Command>,
}

///
/// The geometric kind an absolutized command actually draws (or `None` for `Move`/`Close`-as-marker)
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AbsGeometry {
    Line { start: Coord2, end: Coord2 },
    Quadratic { start: Coord2, control: Coord2, end: Coord2 },
    Cubic { start: Coord2, control1: Coord2, control2: Coord2, end: Coord2 },
}

impl AbsGeometry {
    #[inline]
    pub fn start(&self) -> Coord2 {
        match *self {
            AbsGeometry::Line { start, .. } => start,
            AbsGeometry::Quadratic { start, .. } => start,
            AbsGeometry::Cubic { start, .. } => start,
        }
    }

    #[inline]
    pub fn end(&self) -> Coord2 {
        match *self {
            AbsGeometry::Line { end, .. } => end,
            AbsGeometry::Quadratic { end, .. } => end,
            AbsGeometry::Cubic { end, .. } => end,
        }
    }
}

///
/// A geometry command after absolutization, with its coordinates resolved to a single `AbsGeometry`
///
/// `i_command` is this command's index within its subpath. `i_first_point`/`i_last_point` are
/// filled in by the sampler once the subpath's dense polyline has been produced; they are `None`
/// for commands that contribute no samples (there are none left after normalization, since `Move`
/// commands are consumed while splitting subpaths, but the field stays optional since not every
/// command is guaranteed to have been sampled yet at construction time).
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbsCommand {
    pub i_command: usize,
    pub geometry: AbsGeometry,
    /// The resolved reflected control point used for this command, if it was a smooth variant
    pub previous_control_point: Option<Coord2>,
    pub i_first_point: Option<usize>,
    pub i_last_point: Option<usize>,
    /// True if this command was synthesized by the normalizer to close the subpath
    pub synthetic: bool,
}

///
/// An absolutized, normalized subpath: an ordered run of `AbsCommand`s starting at a `Move` and
/// closing back on itself
///
#[derive(Clone, Debug, PartialEq)]
pub struct Subpath {
    pub start: Coord2,
    pub commands: Vec<AbsCommand>,
}
