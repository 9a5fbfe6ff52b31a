//! Plane geometry: shape primitives, rigid transforms, and intersection.
//!
//! The closed [`Shape`] enum carries one of five primitives and drives the
//! dispatch in [`transform`] and [`intersect`]. Shape pairs without an
//! implemented operation surface as [`GeometryError`] values rather than
//! silently doing nothing.
//!
//! # Examples
//!
//! ```
//! use arithmetica::geometry::{intersect, Line, Point, Shape};
//! use arithmetica::tolerance::Tolerance;
//!
//! let h = Shape::from(Line::new(Point::new(-1., 0.), Point::new(1., 0.)));
//! let v = Shape::from(Line::new(Point::new(0., -1.), Point::new(0., 1.)));
//!
//! let crossings = intersect(&[h, v], Tolerance::DEFAULT).unwrap();
//! assert_eq!(crossings, vec![Point::new(0., 0.)]);
//! ```

pub mod intersect;
pub mod primitives;
pub mod transform;

pub use intersect::intersect;
pub use primitives::{angle, is_parallel, Circle, Line, Measure, Point, Polygon, Rect};
pub use transform::{reflect, reflect_point, rotate, rotate_point};

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::tolerance::Tolerance;

/// Errors that can occur when performing shape operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The operation is not defined for this shape.
    Unsupported {
        operation: &'static str,
        shape: &'static str,
    },
    /// No intersection routine exists for this pair of shapes.
    NotImplemented {
        left: &'static str,
        right: &'static str,
    },
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Unsupported { operation, shape } => {
                write!(f, "Cannot {} a {}", operation, shape)
            }
            GeometryError::NotImplemented { left, right } => {
                write!(
                    f,
                    "The intersection of a {} and a {} is not implemented",
                    left, right
                )
            }
        }
    }
}

/// A tagged plane shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Rect(Rect),
    Polygon(Polygon),
}

impl Shape {
    /// The lowercase name of the variant, used in error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Line(_) => "line",
            Shape::Circle(_) => "circle",
            Shape::Rect(_) => "rect",
            Shape::Polygon(_) => "polygon",
        }
    }

    /// Structural equality under the tolerance. Different variants are never
    /// equal; `unordered` lets two lines match with their endpoints swapped.
    pub fn same(&self, other: &Shape, unordered: bool, tol: Tolerance) -> bool {
        match (self, other) {
            (Shape::Point(p1), Shape::Point(p2)) => p1.nearly_equal(p2, tol),
            (Shape::Line(l1), Shape::Line(l2)) => l1.same(l2, unordered, tol),
            (Shape::Circle(c1), Shape::Circle(c2)) => {
                c1.center().nearly_equal(&c2.center(), tol)
                    && tol.nearly_equal(c1.radius(), c2.radius())
            }
            (Shape::Rect(r1), Shape::Rect(r2)) => {
                r1.origin.nearly_equal(&r2.origin, tol)
                    && tol.nearly_equal(r1.width, r2.width)
                    && tol.nearly_equal(r1.height, r2.height)
            }
            (Shape::Polygon(p1), Shape::Polygon(p2)) => {
                p1.points().len() == p2.points().len()
                    && p1
                        .points()
                        .iter()
                        .zip(p2.points())
                        .all(|(a, b)| a.nearly_equal(b, tol))
            }
            _ => false,
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Shape {
        Shape::Point(p)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Shape {
        Shape::Line(l)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Shape {
        Shape::Circle(c)
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Shape {
        Shape::Rect(r)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Shape {
        Shape::Polygon(p)
    }
}
