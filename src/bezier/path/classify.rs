/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::command::FillRule;
use super::fragment::{Fragment, FragmentId};
use super::graph::{Face, PlanarGraph};
use crate::config::PipelineConfig;
use crate::error::PathError;
use crate::geo::{is_point_inside_polygon, is_polygon_inside_polygon, BoundingBox, Bounds2, Coord2};

///
/// A closed face together with its classification: fill or hole, winding numbers, and the
/// containment hierarchy it sits in
///
#[derive(Clone, Debug)]
pub struct Region {
    pub id: usize,
    pub fragment_ids: Vec<FragmentId>,
    pub fragment_reversed: Vec<bool>,
    pub bounding_box: Bounds2,
    pub test_point: Coord2,
    pub is_hole: bool,
    pub basic_winding_number: f64,
    pub total_winding_number: f64,
    pub parent_region_id: Option<usize>,
}

impl Region {
    /// The region's boundary as a dense, closed polyline (fragment samples, concatenated and
    /// reversed per `fragment_reversed`)
    pub fn polyline(&self, graph: &PlanarGraph, face: &Face, sample_count: usize) -> Vec<Coord2> {
        graph.face_polyline(face, sample_count)
    }
}

///
/// Classifies every bounded face of a path's planar graph into a `Region`, under the given fill
/// rule
///
pub fn classify_regions(
    graph: &PlanarGraph,
    fragments: &[Fragment],
    faces: &[Face],
    subpath_orientations: &[f64],
    fill_rule: FillRule,
    config: &PipelineConfig,
) -> Result<Vec<Region>, PathError> {
    if faces.is_empty() {
        return Err(PathError::DegenerateGeometry {
            message: "no bounded region could be extracted from this path".to_string(),
        });
    }

    struct Candidate {
        face: Face,
        polygon: Vec<Coord2>,
        bounding_box: Bounds2,
        test_point: Coord2,
        basic_winding_number: f64,
    }

    let mut candidates: Vec<Candidate> = Vec::with_capacity(faces.len());
    for face in faces {
        let polygon = graph.face_polyline(face, config.face_sample_count);
        if polygon.len() < 3 {
            return Err(PathError::DegenerateGeometry {
                message: "a face's boundary collapsed to fewer than three points".to_string(),
            });
        }

        let bounding_box = bounding_box_of(&polygon);
        let test_point = interior_test_point(&polygon, &bounding_box, config);
        let basic_winding_number = basic_winding_number_of(fragments, face, subpath_orientations);

        candidates.push(Candidate { face: face.clone(), polygon, bounding_box, test_point, basic_winding_number });
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        candidates[b]
            .bounding_box
            .area()
            .partial_cmp(&candidates[a].bounding_box.area())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut parent_of: Vec<Option<usize>> = vec![None; candidates.len()];
    for (rank, &idx) in order.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for &other_idx in order.iter().take(rank) {
            if !candidates[other_idx]
                .bounding_box
                .strictly_contains_bounds(&candidates[idx].bounding_box, config.strict_containment_slack)
            {
                continue;
            }
            if !is_polygon_inside_polygon(&candidates[idx].polygon, &candidates[other_idx].polygon) {
                continue;
            }

            let area = candidates[other_idx].bounding_box.area();
            if best.map_or(true, |(_, best_area)| area < best_area) {
                best = Some((other_idx, area));
            }
        }
        parent_of[idx] = best.map(|(parent_idx, _)| parent_idx);
    }

    let mut depth: Vec<usize> = vec![0; candidates.len()];
    for &idx in &order {
        depth[idx] = match parent_of[idx] {
            Some(parent_idx) => depth[parent_idx] + 1,
            None => 0,
        };
    }

    let mut total_winding: Vec<f64> = vec![0.0; candidates.len()];
    for &idx in order.iter().rev() {
        let mut sum = candidates[idx].basic_winding_number;
        let mut cursor = parent_of[idx];
        while let Some(parent_idx) = cursor {
            sum += candidates[parent_idx].basic_winding_number;
            cursor = parent_of[parent_idx];
        }
        total_winding[idx] = sum;
    }

    let regions = candidates
        .into_iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let is_hole = match fill_rule {
                FillRule::EvenOdd => depth[idx] % 2 == 1,
                FillRule::NonZero => total_winding[idx] == 0.0,
            };

            let (fragment_ids, fragment_reversed) = candidate
                .face
                .fragments
                .iter()
                .map(|&(id, reversed)| (id, reversed))
                .unzip();

            Region {
                id: idx,
                fragment_ids,
                fragment_reversed,
                bounding_box: candidate.bounding_box,
                test_point: candidate.test_point,
                is_hole,
                basic_winding_number: candidate.basic_winding_number,
                total_winding_number: total_winding[idx],
                parent_region_id: parent_of[idx],
            }
        })
        .collect();

    Ok(regions)
}

fn bounding_box_of(polygon: &[Coord2]) -> Bounds2 {
    let mut min = polygon[0];
    let mut max = polygon[0];
    for &point in &polygon[1..] {
        min = Coord2(f64::min(min.0, point.0), f64::min(min.1, point.1));
        max = Coord2(f64::max(max.0, point.0), f64::max(max.1, point.1));
    }
    Bounds2::from_min_max(min, max)
}

/// A point inside the face polygon, used as the representative for inside/outside tests
///
/// Tries the bounding-box centroid first; if that lands outside (a concave face), falls back to
/// an inward-offset midpoint of the first boundary segment; as a last resort, returns the
/// centroid unverified.
fn interior_test_point(polygon: &[Coord2], bounding_box: &Bounds2, config: &PipelineConfig) -> Coord2 {
    let centroid = Coord2((bounding_box.min().0 + bounding_box.max().0) / 2.0, (bounding_box.min().1 + bounding_box.max().1) / 2.0);
    if is_point_inside_polygon(centroid, polygon) {
        return centroid;
    }

    let a = polygon[0];
    let b = polygon[1 % polygon.len()];
    let midpoint = Coord2((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
    let edge = b - a;
    let length = (edge.0 * edge.0 + edge.1 * edge.1).sqrt();
    if length > 0.0 {
        let normal = Coord2(-edge.1 / length, edge.0 / length);
        let offset = config.epsilon_intersect * 10.0;
        let inward = midpoint + normal * offset;
        if is_point_inside_polygon(inward, polygon) {
            return inward;
        }
        let outward = midpoint + normal * -offset;
        if is_point_inside_polygon(outward, polygon) {
            return outward;
        }
    }

    centroid
}

/// The sign of the original subpath that contributed this face's boundary, read off its first
/// fragment
fn basic_winding_number_of(fragments: &[Fragment], face: &Face, subpath_orientations: &[f64]) -> f64 {
    let (fragment_id, _) = face.fragments[0];
    let subpath = fragments[fragment_id.0 as usize].i_subpath();
    subpath_orientations[subpath]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bezier::path::{build_fragments, compute_split_plan, normalize_path, sample_subpath, subpath_orientations, Command};

    fn classify(commands: &[Command], fill_rule: FillRule) -> Vec<Region> {
        let config = PipelineConfig::default();
        let subpaths = normalize_path(commands).unwrap();
        let sampled: Vec<_> = subpaths.iter().map(|s| sample_subpath(s, config.intersect_sample_count).unwrap()).collect();
        let plan = compute_split_plan(&sampled, &config).unwrap();
        let fragments = build_fragments(&sampled, &plan, &config);
        let orientations = subpath_orientations(&sampled);

        let graph = PlanarGraph::build(&fragments, &config).unwrap();
        let faces = graph.extract_faces(&config).unwrap();

        classify_regions(&graph, &fragments, &faces, &orientations, fill_rule, &config).unwrap()
    }

    fn square_ccw() -> Vec<Command> {
        vec![
            Command::Move { x: 0.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 10.0, relative: false },
            Command::Line { x: 0.0, y: 10.0, relative: false },
            Command::Close,
        ]
    }

    #[test]
    fn single_cw_square_is_a_fill() {
        let commands = vec![
            Command::Move { x: 0.0, y: 0.0, relative: false },
            Command::Line { x: 0.0, y: 10.0, relative: false },
            Command::Line { x: 10.0, y: 10.0, relative: false },
            Command::Line { x: 10.0, y: 0.0, relative: false },
            Command::Close,
        ];
        let regions = classify(&commands, FillRule::NonZero);
        assert_eq!(regions.len(), 1);
        assert!(!regions[0].is_hole);
    }

    #[test]
    fn square_with_opposite_oriented_inner_hole_nonzero() {
        let mut commands = square_ccw();
        commands.extend(vec![
            Command::Move { x: 2.0, y: 2.0, relative: false },
            Command::Line { x: 2.0, y: 8.0, relative: false },
            Command::Line { x: 8.0, y: 8.0, relative: false },
            Command::Line { x: 8.0, y: 2.0, relative: false },
            Command::Close,
        ]);
        let regions = classify(&commands, FillRule::NonZero);
        assert_eq!(regions.len(), 2);

        let outer = regions.iter().find(|r| r.parent_region_id.is_none()).unwrap();
        let inner = regions.iter().find(|r| r.parent_region_id.is_some()).unwrap();
        assert!(!outer.is_hole);
        assert!(inner.is_hole);
        assert_eq!(inner.parent_region_id, Some(outer.id));
    }

    #[test]
    fn two_same_orientation_concentric_squares_nonzero_both_fill() {
        let mut commands = square_ccw();
        commands.extend(vec![
            Command::Move { x: 2.0, y: 2.0, relative: false },
            Command::Line { x: 8.0, y: 2.0, relative: false },
            Command::Line { x: 8.0, y: 8.0, relative: false },
            Command::Line { x: 2.0, y: 8.0, relative: false },
            Command::Close,
        ]);
        let regions = classify(&commands, FillRule::NonZero);
        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(|r| !r.is_hole));
    }

    #[test]
    fn two_same_orientation_concentric_squares_evenodd_inner_is_hole() {
        let mut commands = square_ccw();
        commands.extend(vec![
            Command::Move { x: 2.0, y: 2.0, relative: false },
            Command::Line { x: 8.0, y: 2.0, relative: false },
            Command::Line { x: 8.0, y: 8.0, relative: false },
            Command::Line { x: 2.0, y: 8.0, relative: false },
            Command::Close,
        ]);
        let regions = classify(&commands, FillRule::EvenOdd);
        assert_eq!(regions.len(), 2);

        let outer = regions.iter().find(|r| r.parent_region_id.is_none()).unwrap();
        let inner = regions.iter().find(|r| r.parent_region_id.is_some()).unwrap();
        assert!(!outer.is_hole);
        assert!(inner.is_hole);
    }

    #[test]
    fn bowtie_yields_two_non_hole_regions_under_nonzero_and_evenodd() {
        let commands = vec![
            Command::Move { x: 0.0, y: 0.0, relative: false },
            Command::Line { x: 10.0, y: 10.0, relative: false },
            Command::Line { x: 10.0, y: 0.0, relative: false },
            Command::Line { x: 0.0, y: 10.0, relative: false },
            Command::Close,
        ];
        let non_zero = classify(&commands, FillRule::NonZero);
        assert_eq!(non_zero.len(), 2);
        assert!(non_zero.iter().all(|r| !r.is_hole));

        let even_odd = classify(&commands, FillRule::EvenOdd);
        assert_eq!(even_odd.len(), 2);
        assert!(even_odd.iter().all(|r| !r.is_hole));
    }
}
