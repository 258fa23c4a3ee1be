/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Length we consider a 'close' distance (we may round to this precision or cut out points that are closer than this)
pub const CLOSE_DISTANCE: f64 = 0.01;

/// Difference between 't' values on a bezier curve for values considered the same
pub const SMALL_T_DISTANCE: f64 = 0.000001;

/// Tolerance used throughout the region pipeline for point coincidence, segment-parameter
/// acceptance and winding-number cancellation
pub const EPSILON_INTERSECT: f64 = 1e-4;

/// Inclusive sample count used when flattening a Bezier command for intersection testing
pub const INTERSECT_SAMPLE_COUNT: usize = 50;

/// Inclusive sample count used when flattening a fragment's boundary for face extraction
///
/// The specification allows substituting adaptive recursive flattening to a chord tolerance of
/// around 1e-3 instead; this crate takes the fixed-count route, matching the rest of the pipeline's
/// preference for deterministic, non-adaptive sampling.
pub const FACE_SAMPLE_COUNT: usize = 10_000;

/// Slack applied when comparing bounding boxes for strict containment (a region is never
/// considered its own container)
pub const STRICT_CONTAINMENT_SLACK: f64 = 1e-10;

/// Side length of a spatial-grid cell used for vertex merging in the planar graph; twice
/// `EPSILON_INTERSECT` so a 3x3 block of cells always covers every point within `EPSILON_INTERSECT`
/// of a candidate
pub const VERTEX_MERGE_CELL_SIZE: f64 = 2.0 * EPSILON_INTERSECT;
