/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;
use super::coordinate::*;
use super::geo::*;

///
/// Trait implemented by axis-aligned bounding box types
///
pub trait BoundingBox: Geo + Clone {
    /// Creates a new bounding box from a minimum and maximum point
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self;

    /// The minimum (bottom-left) point of this bounding box
    fn min(&self) -> Self::Point;

    /// The maximum (top-right) point of this bounding box
    fn max(&self) -> Self::Point;

    ///
    /// Combines this bounding box with another, returning the smallest box containing both
    ///
    #[inline]
    fn union_bounds(self, other: Self) -> Self {
        Self::from_min_max(
            Self::Point::from_smallest_components(self.min(), other.min()),
            Self::Point::from_biggest_components(self.max(), other.max()),
        )
    }

    ///
    /// True if `inner`'s bounds are contained within this bounding box, allowing `slack` of
    /// tolerance so near-equal edges still count as contained
    ///
    fn contains_bounds(&self, inner: &Self, slack: f64) -> bool
    where
        Self::Point: Coordinate2D,
    {
        let (smin, smax) = (self.min(), self.max());
        let (imin, imax) = (inner.min(), inner.max());

        smin.x() <= imin.x() + slack
            && smin.y() <= imin.y() + slack
            && smax.x() >= imax.x() - slack
            && smax.y() >= imax.y() - slack
    }

    ///
    /// Strictly contains `inner`: like `contains_bounds`, but the outer box must be strictly
    /// bigger than the inner box by at least `slack` on every side (used to reject a region being
    /// considered its own container)
    ///
    fn strictly_contains_bounds(&self, inner: &Self, slack: f64) -> bool
    where
        Self::Point: Coordinate2D,
    {
        let (smin, smax) = (self.min(), self.max());
        let (imin, imax) = (inner.min(), inner.max());

        smin.x() <= imin.x() - slack
            && smin.y() <= imin.y() - slack
            && smax.x() >= imax.x() + slack
            && smax.y() >= imax.y() + slack
            && (smax.x() - smin.x()) > (imax.x() - imin.x())
            && (smax.y() - smin.y()) > (imax.y() - imin.y())
    }

    ///
    /// The area of this bounding box (`(xMax - xMin) * (yMax - yMin)`)
    ///
    fn area(&self) -> f64
    where
        Self::Point: Coordinate2D,
    {
        let (min, max) = (self.min(), self.max());
        (max.x() - min.x()) * (max.y() - min.y())
    }
}

/// A simple axis-aligned bounding box over `Coord2` points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<Point: Clone>(pub Point, pub Point);

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point = Point;
}

impl<Point: Coordinate> BoundingBox for Bounds<Point> {
    #[inline]
    fn from_min_max(min: Point, max: Point) -> Bounds<Point> {
        Bounds(min, max)
    }

    #[inline]
    fn min(&self) -> Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Point {
        self.1
    }
}

/// Convenience alias for the bounding box type used throughout the 2D pipeline
pub type Bounds2 = Bounds<Coord2>;
