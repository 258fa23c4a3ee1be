/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Trait implemented by things that represent a cubic bezier curve
///
pub trait BezierCurve: Geo + Clone {
    fn start_point(&self) -> Self::Point;
    fn end_point(&self) -> Self::Point;
    fn control_points(&self) -> (Self::Point, Self::Point);

    #[inline]
    fn all_points(&self) -> (Self::Point, (Self::Point, Self::Point), Self::Point) {
        (self.start_point(), self.control_points(), self.end_point())
    }

    ///
    /// Evaluates this curve at `t` using the cubic Bernstein basis
    ///
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let (w1, (w2, w3), w4) = self.all_points();
        cubic_point_at_pos(w1, w2, w3, w4, t)
    }

    ///
    /// A loose bounding box: the bounds of the convex hull of the curve's four control points
    ///
    /// This always contains the curve (a cubic bezier curve lies within the convex hull of its
    /// control points) but is not tight against the curve itself.
    ///
    fn fast_bounding_box<Bounds: BoundingBox<Point = Self::Point>>(&self) -> Bounds {
        let (w1, (w2, w3), w4) = self.all_points();
        let min = Self::Point::from_smallest_components(
            Self::Point::from_smallest_components(w1, w2),
            Self::Point::from_smallest_components(w3, w4),
        );
        let max = Self::Point::from_biggest_components(
            Self::Point::from_biggest_components(w1, w2),
            Self::Point::from_biggest_components(w3, w4),
        );
        Bounds::from_min_max(min, max)
    }

    ///
    /// A tight bounding box, approximated by densely sampling the curve
    ///
    fn bounding_box<Bounds: BoundingBox<Point = Self::Point>>(&self) -> Bounds {
        const SAMPLES: usize = 64;
        let points = sample_cubic(
            self.start_point(),
            self.control_points().0,
            self.control_points().1,
            self.end_point(),
            SAMPLES,
        );

        let mut min = points[0];
        let mut max = points[0];
        for point in points.into_iter().skip(1) {
            min = Self::Point::from_smallest_components(min, point);
            max = Self::Point::from_biggest_components(max, point);
        }

        Bounds::from_min_max(min, max)
    }
}

///
/// Trait implemented by bezier curve types that can be constructed from their control points
///
pub trait BezierCurveFactory: BezierCurve {
    fn from_points(
        start: Self::Point,
        control_points: (Self::Point, Self::Point),
        end: Self::Point,
    ) -> Self;
}

/// A simple, owned cubic bezier curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve<Point> {
    pub start_point: Point,
    pub control_points: (Point, Point),
    pub end_point: Point,
}

impl<Point: Coordinate> Geo for Curve<Point> {
    type Point = Point;
}

impl<Point: Coordinate> BezierCurve for Curve<Point> {
    #[inline]
    fn start_point(&self) -> Point {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Point {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Point, Point) {
        self.control_points
    }
}

impl<Point: Coordinate> BezierCurveFactory for Curve<Point> {
    #[inline]
    fn from_points(start: Point, control_points: (Point, Point), end: Point) -> Curve<Point> {
        Curve {
            start_point: start,
            control_points,
            end_point: end,
        }
    }
}

///
/// Evaluates a quadratic bezier curve at `t` using the standard Bernstein form
///
#[inline]
pub fn quadratic_point_at_pos<Point: Coordinate>(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

///
/// Evaluates a cubic bezier curve at `t` using the standard Bernstein form
///
#[inline]
pub fn cubic_point_at_pos<Point: Coordinate>(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    t: f64,
) -> Point {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;

    p0 * (mt2 * mt) + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * (t2 * t)
}

///
/// Returns `n` inclusive points sampled at uniform `t` along a quadratic bezier curve
///
pub fn sample_quadratic<Point: Coordinate>(p0: Point, p1: Point, p2: Point, n: usize) -> Vec<Point> {
    debug_assert!(n >= 2);
    let steps = (n - 1) as f64;

    (0..n)
        .map(|idx| quadratic_point_at_pos(p0, p1, p2, idx as f64 / steps))
        .collect()
}

///
/// Returns `n` inclusive points sampled at uniform `t` along a cubic bezier curve
///
pub fn sample_cubic<Point: Coordinate>(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    n: usize,
) -> Vec<Point> {
    debug_assert!(n >= 2);
    let steps = (n - 1) as f64;

    (0..n)
        .map(|idx| cubic_point_at_pos(p0, p1, p2, p3, idx as f64 / steps))
        .collect()
}
