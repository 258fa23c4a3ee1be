/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

///
/// Overridable tolerances for a single `process_with_config` call
///
/// `Default` reproduces the specification's fixed constants exactly, so `process()` (which uses
/// `PipelineConfig::default()`) behaves as the external contract requires. Embedding code can tune
/// resolution (for example, a smaller `face_sample_count` for a quick preview render) without
/// touching the crate's compiled-in defaults.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Coincidence/tolerance used for vertex merging and segment-parameter acceptance
    pub epsilon_intersect: f64,
    /// Inclusive sample count used per Bezier command when finding intersections
    pub intersect_sample_count: usize,
    /// Inclusive sample count used per fragment when flattening a face's boundary
    pub face_sample_count: usize,
    /// Slack applied when comparing bounding boxes for strict containment
    pub strict_containment_slack: f64,
}

impl Default for PipelineConfig {
    fn default() -> PipelineConfig {
        PipelineConfig {
            epsilon_intersect: EPSILON_INTERSECT,
            intersect_sample_count: INTERSECT_SAMPLE_COUNT,
            face_sample_count: FACE_SAMPLE_COUNT,
            strict_containment_slack: STRICT_CONTAINMENT_SLACK,
        }
    }
}

impl PipelineConfig {
    /// The side length of a vertex-merging grid cell implied by this config's `epsilon_intersect`
    #[inline]
    pub fn vertex_merge_cell_size(&self) -> f64 {
        2.0 * self.epsilon_intersect
    }
}
