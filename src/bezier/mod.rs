/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for describing, querying and manipulating Bezier curves
//!
//! ```
//! # use path_regions::*;
//! # use path_regions::bezier::*;
//! #
//! let curve = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
//! let mid_point = curve.point_at_pos(0.5);
//! ```
//!
//! Anything that implements the `BezierCurve` trait can be manipulated by the functions in this crate. The `Curve` type
//! is provided as a basic implementation for defining bezier curves, but the trait can be defined on any type that
//! represents a bezier curve.
//!
//! For routines that deal with paths made up of bezier curves and the region-extraction pipeline built on top of
//! them, see the `path` namespace.
//!

mod curve;
mod derivative;
mod solve;
mod subdivide;
mod tangent;

pub mod intersection;
pub mod path;

pub use curve::*;
pub use derivative::*;
pub use solve::*;
pub use subdivide::*;
pub use tangent::*;

pub use super::geo::*;
