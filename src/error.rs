/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///
/// Everything that can go wrong while turning a path element into regions
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PathError {
    /// A command the pipeline has no geometry for (currently: elliptical arcs)
    #[error("unsupported command at index {index}: {message}")]
    UnsupportedCommand { index: usize, message: String },

    /// A subpath's command stream doesn't parse into valid geometry (e.g. no leading `Move`)
    #[error("malformed subpath at index {index}: {message}")]
    MalformedSubpath { index: usize, message: String },

    /// A subpath could not be closed even after appending a synthetic closing segment
    #[error("subpath at index {index} is not closed: {message}")]
    NotClosed { index: usize, message: String },

    /// A subpath collapses to a point or a line with zero enclosed area
    #[error("degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// The pipeline reached a state one of its own invariants rules out; this always indicates a
    /// bug rather than bad input
    #[error("internal invariant violated: {message}")]
    InternalInvariantViolation { message: String },
}
