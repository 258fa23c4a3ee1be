/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Turns a path built from Bezier commands into a set of filled regions
//!
//! A path arrives as a single [`PathElement`]: a list of SVG-style draw [`Command`]s plus a
//! [`FillRule`]. This module takes that input through to an ordered list of closed,
//! non-self-intersecting, correctly classified [`Region`]s:
//!
//! ```
//! # use path_regions::bezier::path::*;
//! # use path_regions::config::PipelineConfig;
//! #
//! let square = PathElement {
//!     fill_rule: FillRule::NonZero,
//!     commands: vec![
//!         Command::Move { x: 0.0, y: 0.0, relative: false },
//!         Command::Line { x: 10.0, y: 0.0, relative: false },
//!         Command::Line { x: 10.0, y: 10.0, relative: false },
//!         Command::Line { x: 0.0, y: 10.0, relative: false },
//!         Command::Close,
//!     ],
//! };
//!
//! let regions = path_to_regions(&square, &PipelineConfig::default()).unwrap();
//! assert_eq!(regions.len(), 1);
//! ```
//!
//! The pipeline runs in stages: [`normalize_path`] absolutizes and closes every subpath,
//! [`sample_subpath`] turns each into a dense polyline, [`compute_split_plan`] and
//! [`build_fragments`] cut every command at its intersection points, [`graph`] assembles the
//! fragments into a planar graph and walks its bounded faces, and [`classify`]/[`order`] turn
//! those faces into fill-rule-aware, correctly nested, deduplicated regions.
//!

mod classify;
mod command;
mod fragment;
mod graph;
mod normalize;
mod order;
mod sampler;

pub use self::classify::*;
pub use self::command::*;
pub use self::fragment::*;
pub use self::graph::{Face, PlanarGraph};
pub use self::normalize::*;
pub use self::order::*;
pub use self::sampler::*;

use crate::config::PipelineConfig;
use crate::error::PathError;

///
/// Runs the full pipeline over a single path element and returns its regions in parent-first
/// draw order
///
pub fn path_to_regions(path: &PathElement, config: &PipelineConfig) -> Result<Vec<Region>, PathError> {
    let subpaths = normalize_path(&path.commands)?;
    let sampled: Vec<_> = subpaths
        .iter()
        .map(|subpath| sample_subpath(subpath, config.intersect_sample_count))
        .collect::<Result<_, _>>()?;

    let plan = compute_split_plan(&sampled, config)?;
    let fragments = build_fragments(&sampled, &plan, config);
    let orientations = subpath_orientations(&sampled);

    let graph = PlanarGraph::build(&fragments, config)?;
    let faces = graph.extract_faces(config)?;

    let regions = classify_regions(&graph, &fragments, &faces, &orientations, path.fill_rule, config)?;

    Ok(order_regions(regions))
}
