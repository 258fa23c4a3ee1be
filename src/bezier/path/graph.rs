/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fragment::{Fragment, FragmentId};
use crate::config::PipelineConfig;
use crate::error::PathError;
use crate::geo::{shoelace_signed_area, Coord2, Coordinate};

use itertools::Itertools;
use log::trace;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub u32);

#[derive(Clone, Copy, Debug)]
struct HalfEdge {
    fragment: FragmentId,
    reversed: bool,
    from: VertexId,
    to: VertexId,
    twin: HalfEdgeId,
}

///
/// The merged-vertex, half-edge planar graph built from a path's fragment store
///
pub struct PlanarGraph<'a> {
    fragments: &'a [Fragment],
    vertices: Vec<Coord2>,
    half_edges: Vec<HalfEdge>,
    /// Outgoing half-edges at each vertex, sorted by the angle of their departure tangent
    outgoing: Vec<Vec<HalfEdgeId>>,
}

///
/// One closed cycle of half-edges bounding a face, expressed as the underlying fragment ids and
/// whether each one was traversed against its own natural (start-to-end) direction
///
#[derive(Clone, Debug)]
pub struct Face {
    pub fragments: Vec<(FragmentId, bool)>,
}

impl<'a> PlanarGraph<'a> {
    ///
    /// Builds the planar graph for a path's full fragment store: merges coincident endpoints via
    /// a spatial grid, creates a twinned half-edge pair per fragment, and sorts each vertex's
    /// outgoing half-edges by departure angle
    ///
    pub fn build(fragments: &'a [Fragment], config: &PipelineConfig) -> Result<PlanarGraph<'a>, PathError> {
        let cell_size = config.vertex_merge_cell_size();
        let mut grid: HashMap<(i64, i64), Vec<VertexId>> = HashMap::new();
        let mut vertices: Vec<Coord2> = Vec::new();

        let mut vertex_for = |point: Coord2, vertices: &mut Vec<Coord2>, grid: &mut HashMap<(i64, i64), Vec<VertexId>>| -> VertexId {
            let cell = cell_of(point, cell_size);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let neighbour_cell = (cell.0 + dx, cell.1 + dy);
                    if let Some(candidates) = grid.get(&neighbour_cell) {
                        for &candidate in candidates {
                            if vertices[candidate.0 as usize].distance_to(&point) < config.epsilon_intersect {
                                return candidate;
                            }
                        }
                    }
                }
            }

            let id = VertexId(vertices.len() as u32);
            vertices.push(point);
            grid.entry(cell).or_insert_with(Vec::new).push(id);
            id
        };

        let mut half_edges = Vec::with_capacity(fragments.len() * 2);
        for (idx, fragment) in fragments.iter().enumerate() {
            let fragment_id = FragmentId(idx as u32);
            let from = vertex_for(fragment.start(), &mut vertices, &mut grid);
            let to = vertex_for(fragment.end(), &mut vertices, &mut grid);

            let forward_id = HalfEdgeId(half_edges.len() as u32);
            let reverse_id = HalfEdgeId(half_edges.len() as u32 + 1);

            half_edges.push(HalfEdge { fragment: fragment_id, reversed: false, from, to, twin: reverse_id });
            half_edges.push(HalfEdge { fragment: fragment_id, reversed: true, from: to, to: from, twin: forward_id });
        }

        trace!("planar graph: {} fragments merged into {} vertices", fragments.len(), vertices.len());

        let mut outgoing: Vec<Vec<HalfEdgeId>> = vec![vec![]; vertices.len()];
        for (idx, he) in half_edges.iter().enumerate() {
            outgoing[he.from.0 as usize].push(HalfEdgeId(idx as u32));
        }

        for (vertex_idx, edges) in outgoing.iter_mut().enumerate() {
            edges.sort_by(|&a, &b| {
                let angle_a = departure_angle(fragments, &half_edges[a.0 as usize]);
                let angle_b = departure_angle(fragments, &half_edges[b.0 as usize]);
                angle_a
                    .partial_cmp(&angle_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| half_edges[a.0 as usize].fragment.0.cmp(&half_edges[b.0 as usize].fragment.0))
            });
            let _ = vertex_idx;
        }

        Ok(PlanarGraph { fragments, vertices, half_edges, outgoing })
    }

    /// No two merged vertices lie within `EPSILON` of one another
    pub fn vertices_are_distinct(&self, epsilon: f64) -> bool {
        for i in 0..self.vertices.len() {
            for j in (i + 1)..self.vertices.len() {
                if self.vertices[i].distance_to(&self.vertices[j]) < epsilon {
                    return false;
                }
            }
        }
        true
    }

    /// The half-edge immediately following `twin(he)` in `he`'s destination vertex's angularly
    /// sorted outgoing list: the standard rotation-system `next` pointer for face tracing
    fn next(&self, he: HalfEdgeId) -> HalfEdgeId {
        let edge = self.half_edges[he.0 as usize];
        let twin = edge.twin;
        let around = &self.outgoing[edge.to.0 as usize];
        let position = around.iter().position(|&id| id == twin).expect("twin is always outgoing from its own vertex");
        let next = around[(position + 1) % around.len()];
        test_assert!(self.half_edges[next.0 as usize].from == edge.to);
        next
    }

    ///
    /// Walks every half-edge into face cycles, drops the unbounded face(s), and filters out any
    /// cycle whose fragment set is a strict subset of another (the figure-eight case)
    ///
    pub fn extract_faces(&self, config: &PipelineConfig) -> Result<Vec<Face>, PathError> {
        let mut visited = vec![false; self.half_edges.len()];
        let mut cycles: Vec<Vec<HalfEdgeId>> = Vec::new();

        for start in 0..self.half_edges.len() {
            if visited[start] {
                continue;
            }

            let mut cycle = Vec::new();
            let mut current = HalfEdgeId(start as u32);
            loop {
                if visited[current.0 as usize] {
                    if current.0 as usize != start {
                        return Err(PathError::InternalInvariantViolation {
                            message: "face walk re-entered a half-edge without returning to its start".to_string(),
                        });
                    }
                    break;
                }
                visited[current.0 as usize] = true;
                cycle.push(current);
                current = self.next(current);
            }

            cycles.push(cycle);
        }

        let faces: Vec<Face> = cycles.into_iter().map(|cycle| self.consolidate(cycle)).collect();

        let mut bounded: Vec<Face> = Vec::new();
        for face in faces {
            let polyline = self.face_polyline(&face, config.face_sample_count);
            if polyline.len() < 3 {
                continue;
            }
            if shoelace_signed_area(&polyline) > 0.0 {
                bounded.push(face);
            }
        }

        Ok(drop_subset_faces(bounded))
    }

    /// Merges consecutive half-edges in a cycle that reference the same fragment into one entry
    fn consolidate(&self, cycle: Vec<HalfEdgeId>) -> Face {
        let mut fragments: Vec<(FragmentId, bool)> = Vec::new();
        for he_id in cycle {
            let he = self.half_edges[he_id.0 as usize];
            if let Some(last) = fragments.last() {
                if last.0 == he.fragment {
                    continue;
                }
            }
            fragments.push((he.fragment, he.reversed));
        }
        Face { fragments }
    }

    /// The face's boundary polyline, built by concatenating each fragment's dense samples,
    /// reversed where the cycle traverses it against its natural direction
    pub fn face_polyline(&self, face: &Face, sample_count: usize) -> Vec<Coord2> {
        let mut points = Vec::new();
        for &(fragment_id, reversed) in &face.fragments {
            let fragment = &self.fragments[fragment_id.0 as usize];
            let mut samples = fragment.sample(sample_count.max(2));
            if reversed {
                samples.reverse();
            }
            if points.last() == samples.first() {
                points.extend(samples.into_iter().skip(1));
            } else {
                points.extend(samples);
            }
        }
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        points
    }
}

fn cell_of(point: Coord2, cell_size: f64) -> (i64, i64) {
    ((point.0 / cell_size).floor() as i64, (point.1 / cell_size).floor() as i64)
}

fn departure_angle(fragments: &[Fragment], he: &HalfEdge) -> f64 {
    let fragment = &fragments[he.fragment.0 as usize];
    let tangent = if !he.reversed {
        fragment.tangent_at(0.0)
    } else {
        fragment.tangent_at(1.0) * -1.0
    };
    tangent.1.atan2(tangent.0)
}

/// Removes any face whose fragment-id set is a strict subset of another face's
fn drop_subset_faces(faces: Vec<Face>) -> Vec<Face> {
    let id_sets: Vec<std::collections::HashSet<FragmentId>> = faces
        .iter()
        .map(|face| face.fragments.iter().map(|&(id, _)| id).collect())
        .collect();

    faces
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| {
            let this_set = &id_sets[*idx];
            !id_sets.iter().enumerate().any(|(other_idx, other_set)| {
                other_idx != *idx && this_set.is_subset(other_set) && this_set.len() < other_set.len()
            })
        })
        .map(|(_, face)| face)
        .unique_by(|face| face.fragments.iter().map(|&(id, _)| id.0).collect::<Vec<_>>())
        .collect()
}
