//! Points, lines, circles, rectangles and polygons.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::tolerance::{modulo, Tolerance};

/// A location in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0., 0.);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The Manhattan (taxicab) distance to `other`.
    #[inline]
    pub fn manhattan(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Compare both coordinates under the tolerance.
    #[inline]
    pub fn nearly_equal(&self, other: &Point, tol: Tolerance) -> bool {
        tol.nearly_equal(self.x, other.x) && tol.nearly_equal(self.y, other.y)
    }
}

/// A line through two points `a` and `b`.
///
/// The two points orient the line; transforms preserve them individually.
/// Intersection treats the line as infinite rather than as a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    #[inline]
    pub const fn new(a: Point, b: Point) -> Line {
        Line { a, b }
    }

    /// The distance between the two defining points.
    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    /// The point halfway between the two defining points.
    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::new((self.a.x + self.b.x) / 2., (self.a.y + self.b.y) / 2.)
    }

    /// Compare endpoints under the tolerance. With `unordered` set, the
    /// lines also match when their endpoints are swapped.
    pub fn same(&self, other: &Line, unordered: bool, tol: Tolerance) -> bool {
        let forward = self.a.nearly_equal(&other.a, tol) && self.b.nearly_equal(&other.b, tol);
        if unordered {
            forward
                || (self.a.nearly_equal(&other.b, tol) && self.b.nearly_equal(&other.a, tol))
        } else {
            forward
        }
    }
}

/// A circle with a center and a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Create a circle. The sign of `radius` is dropped.
    #[inline]
    pub fn new(center: Point, radius: f64) -> Circle {
        Circle {
            center,
            radius: radius.abs(),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.abs();
    }
}

/// An axis-aligned rectangle anchored at `origin`.
///
/// `width` and `height` may be negative; the rectangle then extends in the
/// negative direction and its measures use the absolute values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Point, width: f64, height: f64) -> Rect {
        Rect {
            origin,
            width,
            height,
        }
    }
}

/// A polygon given by its vertices in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    ///
    /// # Panics
    ///
    /// Panics when `points` is empty.
    pub fn new(points: Vec<Point>) -> Polygon {
        assert!(!points.is_empty(), "A polygon requires at least one point");
        Polygon { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Area and boundary length of closed figures.
///
/// # Examples
///
/// ```
/// use arithmetica::geometry::{Measure, Point, Rect};
///
/// let r = Rect::new(Point::new(1., 1.), 3., -2.);
/// assert_eq!(r.area(), 6.);
/// assert_eq!(r.circumference(), 10.);
/// ```
pub trait Measure {
    fn area(&self) -> f64;
    fn circumference(&self) -> f64;
}

impl Measure for Circle {
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[inline]
    fn circumference(&self) -> f64 {
        TAU * self.radius
    }
}

impl Measure for Rect {
    #[inline]
    fn area(&self) -> f64 {
        (self.width * self.height).abs()
    }

    #[inline]
    fn circumference(&self) -> f64 {
        2. * (self.width.abs() + self.height.abs())
    }
}

impl Measure for Polygon {
    /// The enclosed area by the shoelace formula, independent of the winding
    /// direction. Self-intersecting polygons yield the signed sum of their
    /// loops.
    fn area(&self) -> f64 {
        let n = self.points.len();
        let mut twice = 0.;
        for i in 0..n {
            let p = &self.points[i];
            let q = &self.points[(i + 1) % n];
            twice += p.x * q.y - q.x * p.y;
        }
        twice.abs() / 2.
    }

    /// The perimeter, including the closing edge back to the first vertex.
    fn circumference(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].distance(&self.points[(i + 1) % n]))
            .sum()
    }
}

/// The directed angle at vertex `b`, measured counterclockwise from the ray
/// towards `c` to the ray towards `a`, normalized to `[0, 2π)`.
pub fn angle(a: Point, b: Point, c: Point) -> f64 {
    let raw = (a.y - b.y).atan2(a.x - b.x) - (c.y - b.y).atan2(c.x - b.x);
    modulo(raw, TAU)
}

/// Whether two lines have the same slope under the tolerance. Two vertical
/// lines are parallel; a vertical and a non-vertical line never are.
pub fn is_parallel(l1: &Line, l2: &Line, tol: Tolerance) -> bool {
    let run1 = l1.b.x - l1.a.x;
    let run2 = l2.b.x - l2.a.x;
    let vertical1 = tol.is_zero(run1);
    let vertical2 = tol.is_zero(run2);
    if vertical1 || vertical2 {
        return vertical1 && vertical2;
    }
    let slope1 = (l1.b.y - l1.a.y) / run1;
    let slope2 = (l2.b.y - l2.a.y) / run2;
    tol.nearly_equal(slope1, slope2)
}
