/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

///
/// Trait implemented by types that describe something defined in terms of a particular point type
///
pub trait Geo {
    /// The type of a point in this item
    type Point: Coordinate;
}
