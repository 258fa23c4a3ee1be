/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Trait implemented by things that represent a straight line between two points
///
/// The simplest implementation is a tuple of two points of the same `Coordinate` type.
///
pub trait Line: Geo + Clone {
    /// Returns the two points that make up this line, in order (start, end)
    fn points(&self) -> (Self::Point, Self::Point);

    #[inline]
    fn start(&self) -> Self::Point {
        self.points().0
    }

    #[inline]
    fn end(&self) -> Self::Point {
        self.points().1
    }

    ///
    /// The point at a given distance `t` along this line, where `t=0` is the start and `t=1` is
    /// the end (`t` may lie outside `[0, 1]` to extrapolate the line)
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let (start, end) = self.points();
        start + (end - start) * t
    }

    ///
    /// The squared length of this line, avoiding a `sqrt` call when only relative lengths matter
    ///
    #[inline]
    fn squared_length(&self) -> f64 {
        let (start, end) = self.points();
        start.distance_to(&end).powi(2)
    }
}

impl<Point: Coordinate> Geo for (Point, Point) {
    type Point = Point;
}

impl<Point: Coordinate> Line for (Point, Point) {
    #[inline]
    fn points(&self) -> (Point, Point) {
        (self.0, self.1)
    }
}
