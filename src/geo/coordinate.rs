/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Sub};

///
/// Trait implemented by types that can be used as a coordinate in a geometric computation
///
/// A coordinate is a fixed-size tuple of `f64` components. Implementing this trait on a type
/// makes it possible to use that type anywhere the library expects a point, a vector, or a
/// single coordinate value (`f64` itself implements `Coordinate` with `len() == 1`).
///
pub trait Coordinate:
    Clone + Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    ///
    /// Creates a new coordinate from a slice of components
    ///
    fn from_components(components: &[f64]) -> Self;

    /// The origin of this coordinate space
    fn origin() -> Self;

    /// Number of components in this coordinate
    fn len() -> usize;

    /// Retrieves the component at the specified index
    fn get(&self, index: usize) -> f64;

    /// Component-wise maximum of two coordinates
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    /// Component-wise minimum of two coordinates
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    /// Euclidean distance between this coordinate and another
    fn distance_to(&self, target: &Self) -> f64;

    /// Dot product between this coordinate and another
    fn dot(&self, target: &Self) -> f64;

    ///
    /// True if this coordinate is within `distance` of `target` in every dimension
    ///
    #[inline]
    fn is_near_to(&self, target: &Self, distance: f64) -> bool {
        self.distance_to(target) <= distance
    }
}
