//! Reflections and rotations.

use super::primitives::{Circle, Line, Point, Polygon};
use super::{GeometryError, Shape};

/// Reflect `p` across the infinite line through `axis`.
///
/// A degenerate axis whose endpoints coincide mirrors through that point
/// instead.
pub fn reflect_point(p: Point, axis: &Line) -> Point {
    let dx = axis.b.x - axis.a.x;
    let dy = axis.b.y - axis.a.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0. {
        return Point::new(2. * axis.a.x - p.x, 2. * axis.a.y - p.y);
    }
    let t = ((p.x - axis.a.x) * dx + (p.y - axis.a.y) * dy) / len2;
    let foot = Point::new(axis.a.x + t * dx, axis.a.y + t * dy);
    Point::new(2. * foot.x - p.x, 2. * foot.y - p.y)
}

/// Rotate `p` by `radians` counterclockwise about `center`.
pub fn rotate_point(p: Point, center: Point, radians: f64) -> Point {
    let (sin, cos) = radians.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Reflect a shape across a line, point by point.
///
/// Rectangles are rejected: their reflection is generally not axis-aligned
/// and cannot be represented as a [`Rect`](super::Rect).
pub fn reflect(shape: &Shape, axis: &Line) -> Result<Shape, GeometryError> {
    match shape {
        Shape::Point(p) => Ok(Shape::Point(reflect_point(*p, axis))),
        Shape::Line(l) => Ok(Shape::Line(Line::new(
            reflect_point(l.a, axis),
            reflect_point(l.b, axis),
        ))),
        Shape::Circle(c) => Ok(Shape::Circle(Circle::new(
            reflect_point(c.center(), axis),
            c.radius(),
        ))),
        Shape::Rect(_) => Err(GeometryError::Unsupported {
            operation: "reflect",
            shape: shape.kind(),
        }),
        Shape::Polygon(p) => Ok(Shape::Polygon(Polygon::new(
            p.points().iter().map(|&v| reflect_point(v, axis)).collect(),
        ))),
    }
}

/// Rotate a shape counterclockwise about `center`, point by point.
///
/// Rectangles are rejected for the same reason as in [`reflect`].
pub fn rotate(shape: &Shape, center: Point, radians: f64) -> Result<Shape, GeometryError> {
    match shape {
        Shape::Point(p) => Ok(Shape::Point(rotate_point(*p, center, radians))),
        Shape::Line(l) => Ok(Shape::Line(Line::new(
            rotate_point(l.a, center, radians),
            rotate_point(l.b, center, radians),
        ))),
        Shape::Circle(c) => Ok(Shape::Circle(Circle::new(
            rotate_point(c.center(), center, radians),
            c.radius(),
        ))),
        Shape::Rect(_) => Err(GeometryError::Unsupported {
            operation: "rotate",
            shape: shape.kind(),
        }),
        Shape::Polygon(p) => Ok(Shape::Polygon(Polygon::new(
            p.points()
                .iter()
                .map(|&v| rotate_point(v, center, radians))
                .collect(),
        ))),
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::super::{GeometryError, Shape};
    use super::{reflect, reflect_point, rotate, rotate_point};
    use crate::geometry::{Circle, Line, Point, Polygon, Rect};
    use crate::tolerance::Tolerance;

    #[test]
    fn point_reflection() {
        let x_axis = Line::new(Point::new(0., 0.), Point::new(1., 0.));
        assert_eq!(reflect_point(Point::new(3., 4.), &x_axis), Point::new(3., -4.));

        let diagonal = Line::new(Point::new(0., 0.), Point::new(1., 1.));
        assert_eq!(reflect_point(Point::new(3., 0.), &diagonal), Point::new(0., 3.));

        // axis that does not pass through the origin
        let shifted = Line::new(Point::new(0., 2.), Point::new(1., 2.));
        assert_eq!(reflect_point(Point::new(5., 0.), &shifted), Point::new(5., 4.));

        // reflecting twice returns to the start
        let axis = Line::new(Point::new(1., -2.), Point::new(4., 7.));
        let p = Point::new(-3., 0.5);
        let twice = reflect_point(reflect_point(p, &axis), &axis);
        assert!(twice.nearly_equal(&p, Tolerance::DEFAULT));
    }

    #[test]
    fn degenerate_axis_mirrors_through_its_point() {
        let pin = Line::new(Point::new(1., 1.), Point::new(1., 1.));
        assert_eq!(reflect_point(Point::new(3., 0.), &pin), Point::new(-1., 2.));
    }

    #[test]
    fn point_rotation() {
        let tol = Tolerance::DEFAULT;

        let r = rotate_point(Point::new(1., 0.), Point::ORIGIN, FRAC_PI_2);
        assert!(r.nearly_equal(&Point::new(0., 1.), tol));

        let r = rotate_point(Point::new(2., 1.), Point::new(1., 1.), PI);
        assert!(r.nearly_equal(&Point::new(0., 1.), tol));

        // a full turn is the identity
        let p = Point::new(-2.5, 0.75);
        let r = rotate_point(p, Point::new(3., -4.), 2. * PI);
        assert!(r.nearly_equal(&p, tol));
    }

    #[test]
    fn shape_reflection() {
        let tol = Tolerance::DEFAULT;
        let x_axis = Line::new(Point::new(0., 0.), Point::new(1., 0.));

        let c = Shape::from(Circle::new(Point::new(2., 3.), 1.5));
        let mirrored = reflect(&c, &x_axis).unwrap();
        let expected = Shape::from(Circle::new(Point::new(2., -3.), 1.5));
        assert!(mirrored.same(&expected, false, tol));

        let l = Shape::from(Line::new(Point::new(0., 1.), Point::new(2., 2.)));
        let mirrored = reflect(&l, &x_axis).unwrap();
        let expected = Shape::from(Line::new(Point::new(0., -1.), Point::new(2., -2.)));
        assert!(mirrored.same(&expected, false, tol));
    }

    #[test]
    fn shape_rotation() {
        let tol = Tolerance::DEFAULT;

        let square = Shape::from(Polygon::new(vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(1., 1.),
            Point::new(0., 1.),
        ]));
        let turned = rotate(&square, Point::ORIGIN, FRAC_PI_2).unwrap();
        let expected = Shape::from(Polygon::new(vec![
            Point::new(0., 0.),
            Point::new(0., 1.),
            Point::new(-1., 1.),
            Point::new(-1., 0.),
        ]));
        assert!(turned.same(&expected, false, tol));
    }

    #[test]
    fn rects_are_rejected() {
        let r = Shape::from(Rect::new(Point::new(0., 0.), 2., 1.));
        let axis = Line::new(Point::new(0., 0.), Point::new(1., 1.));

        let err = reflect(&r, &axis).unwrap_err();
        assert_eq!(
            err,
            GeometryError::Unsupported {
                operation: "reflect",
                shape: "rect"
            }
        );
        assert_eq!(err.to_string(), "Cannot reflect a rect");

        assert!(rotate(&r, Point::ORIGIN, 1.).is_err());
    }
}
