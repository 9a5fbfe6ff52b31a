//! Intersection points of shape collections.

use super::primitives::{Circle, Line, Point};
use super::{GeometryError, Shape};
use crate::tolerance::Tolerance;

/// All intersection points among the given shapes, collected over each pair
/// in input order.
///
/// Parallel and coincident lines contribute no points, as do separate,
/// nested and concentric circle pairs. A pair of shapes without an
/// intersection routine aborts the whole call with
/// [`GeometryError::NotImplemented`].
///
/// # Examples
///
/// ```
/// use arithmetica::geometry::{intersect, Circle, Point, Shape};
/// use arithmetica::tolerance::Tolerance;
///
/// let c1 = Shape::from(Circle::new(Point::new(0., 0.), 5.));
/// let c2 = Shape::from(Circle::new(Point::new(6., 0.), 5.));
///
/// let points = intersect(&[c1, c2], Tolerance::DEFAULT).unwrap();
/// assert_eq!(points, vec![Point::new(3., 4.), Point::new(3., -4.)]);
/// ```
pub fn intersect(shapes: &[Shape], tol: Tolerance) -> Result<Vec<Point>, GeometryError> {
    let mut points = vec![];
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            points.extend(intersect_pair(a, b, tol)?);
        }
    }
    Ok(points)
}

fn intersect_pair(a: &Shape, b: &Shape, tol: Tolerance) -> Result<Vec<Point>, GeometryError> {
    match (a, b) {
        (Shape::Line(l1), Shape::Line(l2)) => Ok(line_line(l1, l2, tol)),
        (Shape::Circle(c1), Shape::Circle(c2)) => Ok(circle_circle(c1, c2, tol)),
        _ => Err(GeometryError::NotImplemented {
            left: a.kind(),
            right: b.kind(),
        }),
    }
}

/// Where two infinite lines cross. Parallel or coincident lines yield
/// nothing, as no single crossing point exists.
fn line_line(l1: &Line, l2: &Line, tol: Tolerance) -> Vec<Point> {
    let d1x = l1.b.x - l1.a.x;
    let d1y = l1.b.y - l1.a.y;
    let d2x = l2.b.x - l2.a.x;
    let d2y = l2.b.y - l2.a.y;

    let denom = d1x * d2y - d1y * d2x;
    if tol.is_zero(denom) {
        return vec![];
    }

    let t = ((l2.a.x - l1.a.x) * d2y - (l2.a.y - l1.a.y) * d2x) / denom;
    vec![Point::new(l1.a.x + t * d1x, l1.a.y + t * d1y)]
}

/// Where two circles cross, via the radical line: the chord midpoint sits at
/// distance `a` from the first center along the center line, the crossings
/// at height `h` on either side.
fn circle_circle(c1: &Circle, c2: &Circle, tol: Tolerance) -> Vec<Point> {
    let p1 = c1.center();
    let p2 = c2.center();
    let r1 = c1.radius();
    let r2 = c2.radius();

    let d = p1.distance(&p2);
    if tol.is_zero(d) {
        // concentric, either identical or disjoint
        return vec![];
    }
    if d > r1 + r2 + tol.epsilon() || d < (r1 - r2).abs() - tol.epsilon() {
        return vec![];
    }

    let a = (d * d + r1 * r1 - r2 * r2) / (2. * d);
    let h = (r1 * r1 - a * a).max(0.).sqrt();

    let ux = (p2.x - p1.x) / d;
    let uy = (p2.y - p1.y) / d;
    let mid = Point::new(p1.x + a * ux, p1.y + a * uy);

    if tol.is_zero(h) {
        return vec![mid];
    }
    vec![
        Point::new(mid.x - h * uy, mid.y + h * ux),
        Point::new(mid.x + h * uy, mid.y - h * ux),
    ]
}

#[cfg(test)]
mod test {
    use super::super::{GeometryError, Shape};
    use super::intersect;
    use crate::geometry::{Circle, Line, Point, Rect};
    use crate::tolerance::Tolerance;

    fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Shape {
        Shape::from(Line::new(Point::new(ax, ay), Point::new(bx, by)))
    }

    #[test]
    fn crossing_lines() {
        let tol = Tolerance::DEFAULT;

        let points = intersect(&[line(-1., 0., 1., 0.), line(0., -1., 0., 1.)], tol).unwrap();
        assert_eq!(points, vec![Point::new(0., 0.)]);

        let points = intersect(&[line(0., 0., 2., 2.), line(0., 2., 2., 0.)], tol).unwrap();
        assert_eq!(points, vec![Point::new(1., 1.)]);

        // lines extend beyond their defining points
        let points = intersect(&[line(0., 0., 1., 0.), line(5., -1., 5., 1.)], tol).unwrap();
        assert_eq!(points, vec![Point::new(5., 0.)]);
    }

    #[test]
    fn parallel_lines_never_cross() {
        let tol = Tolerance::DEFAULT;

        let points = intersect(&[line(0., 0., 1., 1.), line(0., 1., 1., 2.)], tol).unwrap();
        assert!(points.is_empty());

        // a coincident pair has no unique crossing either
        let points = intersect(&[line(0., 0., 1., 1.), line(2., 2., 3., 3.)], tol).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn crossing_circles() {
        let tol = Tolerance::DEFAULT;
        let c1 = Shape::from(Circle::new(Point::new(0., 0.), 5.));
        let c2 = Shape::from(Circle::new(Point::new(6., 0.), 5.));

        let points = intersect(&[c1, c2], tol).unwrap();
        assert_eq!(points, vec![Point::new(3., 4.), Point::new(3., -4.)]);
    }

    #[test]
    fn tangent_circles() {
        let tol = Tolerance::DEFAULT;

        let c1 = Shape::from(Circle::new(Point::new(0., 0.), 1.));
        let c2 = Shape::from(Circle::new(Point::new(2., 0.), 1.));
        let points = intersect(&[c1, c2], tol).unwrap();
        assert_eq!(points, vec![Point::new(1., 0.)]);

        // tangency from the inside
        let outer = Shape::from(Circle::new(Point::new(0., 0.), 2.));
        let inner = Shape::from(Circle::new(Point::new(1., 0.), 1.));
        let points = intersect(&[outer, inner], tol).unwrap();
        assert_eq!(points, vec![Point::new(2., 0.)]);
    }

    #[test]
    fn disjoint_circles() {
        let tol = Tolerance::DEFAULT;

        let far = [
            Shape::from(Circle::new(Point::new(0., 0.), 1.)),
            Shape::from(Circle::new(Point::new(5., 0.), 1.)),
        ];
        assert!(intersect(&far, tol).unwrap().is_empty());

        let nested = [
            Shape::from(Circle::new(Point::new(0., 0.), 5.)),
            Shape::from(Circle::new(Point::new(1., 0.), 1.)),
        ];
        assert!(intersect(&nested, tol).unwrap().is_empty());

        let concentric = [
            Shape::from(Circle::new(Point::new(0., 0.), 2.)),
            Shape::from(Circle::new(Point::new(0., 0.), 3.)),
        ];
        assert!(intersect(&concentric, tol).unwrap().is_empty());
    }

    #[test]
    fn three_lines_pairwise() {
        let tol = Tolerance::DEFAULT;
        let shapes = [
            line(0., 0., 4., 0.),
            line(0., 0., 0., 4.),
            line(0., 4., 4., 0.),
        ];

        let points = intersect(&shapes, tol).unwrap();
        assert_eq!(
            points,
            vec![Point::new(0., 0.), Point::new(4., 0.), Point::new(0., 4.)]
        );
    }

    #[test]
    fn few_shapes_cross_nowhere() {
        let tol = Tolerance::DEFAULT;
        assert_eq!(intersect(&[], tol).unwrap(), vec![]);
        assert_eq!(intersect(&[line(0., 0., 1., 1.)], tol).unwrap(), vec![]);
    }

    #[test]
    fn unsupported_pairs() {
        let tol = Tolerance::DEFAULT;
        let p = Shape::from(Point::new(0., 0.));
        let l = line(0., 0., 1., 1.);

        let err = intersect(&[p, l.clone()], tol).unwrap_err();
        assert_eq!(
            err,
            GeometryError::NotImplemented {
                left: "point",
                right: "line"
            }
        );
        assert_eq!(
            err.to_string(),
            "The intersection of a point and a line is not implemented"
        );

        // one bad pair aborts the whole query
        let r = Shape::from(Rect::new(Point::new(0., 0.), 1., 1.));
        let shapes = [l.clone(), line(0., 1., 1., 0.), r];
        assert!(intersect(&shapes, tol).is_err());
    }
}
