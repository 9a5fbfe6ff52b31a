use std::fmt::{self, Display, Formatter, Write};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// An n-dimensional vector of `f64` entries.
///
/// Element-wise operations accept operands of different lengths by reading
/// absent entries of the shorter vector as zero; the result takes the longer
/// length.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create a new vector from a list of scalars.
    pub fn new(data: Vec<f64>) -> Vector {
        Vector { data }
    }

    /// Create a zero vector of the given length.
    pub fn zeros(len: usize) -> Vector {
        Vector {
            data: vec![0.; len],
        }
    }

    /// Create a vector with every entry set to `value`.
    pub fn filled(len: usize, value: f64) -> Vector {
        Vector {
            data: vec![value; len],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// The `i`th entry, reading entries past the end as zero.
    #[inline]
    fn at(&self, i: usize) -> f64 {
        self.data.get(i).copied().unwrap_or(0.)
    }

    /// The sum of all entries.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// The arithmetic mean of the entries; `NaN` for the empty vector.
    pub fn average(&self) -> f64 {
        self.total() / self.data.len() as f64
    }

    pub fn norm_squared(&self) -> f64 {
        self.data.iter().map(|e| e * e).sum()
    }

    /// The Euclidean magnitude.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit length. A zero vector divides through by a zero norm
    /// and yields `NaN` entries.
    pub fn normalized(&self) -> Vector {
        let n = self.norm();
        Vector {
            data: self.data.iter().map(|e| e / n).collect(),
        }
    }

    /// The Euclidean scalar product of two vectors.
    pub fn dot(&self, rhs: &Vector) -> f64 {
        self.data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// The planar cross product `x1 * y2 - y1 * x2` of the first two
    /// components.
    pub fn cross2(&self, rhs: &Vector) -> f64 {
        self.at(0) * rhs.at(1) - self.at(1) * rhs.at(0)
    }

    /// Compute the Euclidean cross product in three dimensions.
    pub fn cross3(&self, rhs: &Vector) -> Vector {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Vectors do not have equal dimension: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }
        if self.data.len() != 3 {
            panic!(
                "Vectors must be three-dimensional instead of {}",
                self.data.len(),
            );
        }

        Vector {
            data: vec![
                self.data[1] * rhs.data[2] - self.data[2] * rhs.data[1],
                self.data[2] * rhs.data[0] - self.data[0] * rhs.data[2],
                self.data[0] * rhs.data[1] - self.data[1] * rhs.data[0],
            ],
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Vector {
        Vector { data }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// Get the `i`th entry of the vector.
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    /// Get the `i`th entry of the vector.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    /// Add two vectors, zero-padding the shorter operand.
    fn add(self, rhs: &Vector) -> Vector {
        let len = self.data.len().max(rhs.data.len());
        Vector {
            data: (0..len).map(|i| self.at(i) + rhs.at(i)).collect(),
        }
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        if self.data.len() < rhs.data.len() {
            self.data.resize(rhs.data.len(), 0.);
        }
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a += b;
        }
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    /// Subtract two vectors, zero-padding the shorter operand.
    fn sub(self, rhs: &Vector) -> Vector {
        let len = self.data.len().max(rhs.data.len());
        Vector {
            data: (0..len).map(|i| self.at(i) - rhs.at(i)).collect(),
        }
    }
}

impl SubAssign<&Vector> for Vector {
    fn sub_assign(&mut self, rhs: &Vector) {
        if self.data.len() < rhs.data.len() {
            self.data.resize(rhs.data.len(), 0.);
        }
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a -= b;
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, rhs: f64) -> Vector {
        for x in &mut self.data {
            *x *= rhs;
        }
        self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.clone() * rhs
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(mut self, rhs: f64) -> Vector {
        for x in &mut self.data {
            *x /= rhs;
        }
        self
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        self.clone() / rhs
    }
}

impl Neg for Vector {
    type Output = Vector;

    /// Negate each entry of the vector.
    fn neg(mut self) -> Vector {
        for e in &mut self.data {
            *e = -*e;
        }
        self
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            Display::fmt(e, f)?;
        }
        f.write_char('}')
    }
}

#[cfg(test)]
mod test {
    use super::Vector;

    #[test]
    fn totals() {
        let v = Vector::new(vec![1., 2., 3., 4.]);
        assert_eq!(v.total(), 10.);
        assert_eq!(v.average(), 2.5);
        assert_eq!(v.len(), 4);

        assert_eq!(Vector::zeros(3).total(), 0.);
        assert_eq!(Vector::filled(2, 7.).total(), 14.);
        assert!(Vector::new(vec![]).average().is_nan());
    }

    #[test]
    fn norms() {
        let v = Vector::new(vec![3., 4.]);
        assert_eq!(v.norm(), 5.);
        assert_eq!(v.norm_squared(), 25.);

        let u = v.normalized();
        assert_eq!(u, Vector::new(vec![0.6, 0.8]));
        assert!((u.norm() - 1.).abs() < 1e-12);

        // a zero vector has no direction
        let z = Vector::zeros(2).normalized();
        assert!(z.iter().all(|e| e.is_nan()));
    }

    #[test]
    fn products() {
        let a = Vector::new(vec![1., 2., 3.]);
        let b = Vector::new(vec![4., 5.]);
        assert_eq!(a.dot(&b), 14.);
        assert_eq!(b.dot(&a), 14.);

        assert_eq!(Vector::new(vec![1., 0.]).cross2(&Vector::new(vec![0., 1.])), 1.);
        assert_eq!(Vector::new(vec![3., 4.]).cross2(&Vector::new(vec![1., 2.])), 2.);
        assert_eq!(Vector::new(vec![5.]).cross2(&Vector::new(vec![1., 2.])), 10.);

        let e1 = Vector::new(vec![1., 0., 0.]);
        let e2 = Vector::new(vec![0., 1., 0.]);
        assert_eq!(e1.cross3(&e2), Vector::new(vec![0., 0., 1.]));
        assert_eq!(e2.cross3(&e1), Vector::new(vec![0., 0., -1.]));
    }

    #[test]
    #[should_panic]
    fn cross_wrong_dimension() {
        let a = Vector::new(vec![1., 2.]);
        let b = Vector::new(vec![3., 4.]);
        let _ = a.cross3(&b);
    }

    #[test]
    fn elementwise() {
        let a = Vector::new(vec![1., 2.]);
        let b = Vector::new(vec![3., 4., 5.]);

        assert_eq!(&a + &b, Vector::new(vec![4., 6., 5.]));
        assert_eq!(&a - &b, Vector::new(vec![-2., -2., -5.]));
        assert_eq!(&b - &a, Vector::new(vec![2., 2., 5.]));

        let mut c = a.clone();
        c += &b;
        assert_eq!(c, Vector::new(vec![4., 6., 5.]));

        let mut d = b.clone();
        d -= &a;
        assert_eq!(d, Vector::new(vec![2., 2., 5.]));

        assert_eq!(a.clone() * 2., Vector::new(vec![2., 4.]));
        assert_eq!(b.clone() / 2., Vector::new(vec![1.5, 2., 2.5]));
        assert_eq!(-a.clone(), Vector::new(vec![-1., -2.]));

        let mut e = Vector::zeros(2);
        e[1] = 9.;
        assert_eq!(e[1], 9.);
    }

    #[test]
    fn printing() {
        assert_eq!(format!("{}", Vector::new(vec![1., 2.5, -3.])), "{1,2.5,-3}");
        assert_eq!(format!("{}", Vector::new(vec![])), "{}");
    }
}
