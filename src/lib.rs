/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # path_regions
//!
//! Converts a vector drawing expressed as filled paths (lines plus quadratic and cubic Bezier
//! curves, with `nonzero` or `evenodd` fill rules) into an ordered list of closed, non-overlapping
//! filled regions with a parent/hole hierarchy, suitable for a downstream constructive solid
//! sketch emitter.
//!
//! ```
//! # use path_regions::*;
//! # use path_regions::bezier::path::*;
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
//! let regions = process(&square).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert!(!regions[0].is_hole);
//! ```
//!
//! The pipeline is a single-threaded, synchronous, pure function of its input: `process()` (and
//! the tunable-tolerance `process_with_config()`) allocate their own fragment store, planar graph
//! and region list per call and share no state across invocations. Elliptical arcs and anything
//! past fill geometry (stroking, clipping, text, gradients, hit-testing) are out of scope; feed
//! those concerns to your own front end before handing paths to this crate.
//!

#[macro_use]
mod test_assert;

pub mod bezier;
pub mod config;
pub mod consts;
pub mod error;
pub mod geo;
pub mod line;

pub use self::bezier::path::{path_to_regions, Command, FillRule, PathElement, Region};
pub use self::bezier::{BezierCurve, BezierCurveFactory, Curve};
pub use self::config::PipelineConfig;
pub use self::error::PathError;
pub use self::geo::Coord2;

///
/// Runs the region-extraction pipeline over a single path element using the specification's
/// fixed tolerances
///
pub fn process(path: &PathElement) -> Result<Vec<Region>, PathError> {
    process_with_config(path, &PipelineConfig::default())
}

///
/// Runs the region-extraction pipeline with caller-supplied tolerances, for tuning resolution or
/// coincidence tolerance away from the compiled-in defaults
///
pub fn process_with_config(path: &PathElement, config: &PipelineConfig) -> Result<Vec<Region>, PathError> {
    path_to_regions(path, config)
}
