/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::classify::Region;
use std::collections::HashMap;

///
/// Removes redundant regions and flattens the rest into parent-first draw order
///
/// A non-hole region whose immediate parent is also non-hole contributes no additional area: the
/// parent already fills it, so downstream emission does not need to draw it separately. Once
/// those are dropped, every surviving region's parent (walking up through any dropped ancestors)
/// is remapped to the nearest surviving one, ids are reassigned densely, and the list is ordered
/// so a region always appears after its parent.
///
pub fn order_regions(regions: Vec<Region>) -> Vec<Region> {
    let is_hole: HashMap<usize, bool> = regions.iter().map(|r| (r.id, r.is_hole)).collect();
    let parent_of: HashMap<usize, Option<usize>> = regions.iter().map(|r| (r.id, r.parent_region_id)).collect();

    let is_redundant = |id: usize| -> bool {
        !is_hole[&id] && parent_of[&id].map_or(false, |parent_id| !is_hole[&parent_id])
    };

    let nearest_surviving_ancestor = |mut cursor: Option<usize>| -> Option<usize> {
        while let Some(id) = cursor {
            if !is_redundant(id) {
                return Some(id);
            }
            cursor = parent_of[&id];
        }
        None
    };

    let mut surviving: Vec<Region> = regions
        .into_iter()
        .filter(|region| !is_redundant(region.id))
        .map(|mut region| {
            region.parent_region_id = nearest_surviving_ancestor(region.parent_region_id);
            region
        })
        .collect();

    let parent_lookup: HashMap<usize, Option<usize>> =
        surviving.iter().map(|r| (r.id, r.parent_region_id)).collect();
    let depth: HashMap<usize, usize> =
        surviving.iter().map(|r| (r.id, depth_of(r.id, &parent_lookup))).collect();

    surviving.sort_by_key(|region| depth[&region.id]);

    let id_remap: HashMap<usize, usize> =
        surviving.iter().enumerate().map(|(new_id, region)| (region.id, new_id)).collect();

    surviving
        .into_iter()
        .enumerate()
        .map(|(new_id, mut region)| {
            region.parent_region_id = region.parent_region_id.map(|old_parent| id_remap[&old_parent]);
            region.id = new_id;
            region
        })
        .collect()
}

fn depth_of(id: usize, parent_of: &HashMap<usize, Option<usize>>) -> usize {
    match parent_of[&id] {
        None => 0,
        Some(parent_id) => 1 + depth_of(parent_id, parent_of),
    }
}
