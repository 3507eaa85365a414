use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub};

use super::Vector;
use crate::orientation::Orientation;
use crate::{GeoFloat, GeoScalar};

/// Immutable 2-D point. Arithmetic is affine: subtracting two points gives
/// a [`Vector`], adding a vector to a point gives a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point<T> {
  pub x: T,
  pub y: T,
}

impl<T> Point<T> {
  pub const fn new(x: T, y: T) -> Point<T> {
    Point { x, y }
  }

  pub fn as_vec(&self) -> Vector<T>
  where
    T: Clone,
  {
    Vector::new(self.x.clone(), self.y.clone())
  }
}

impl<T: GeoScalar> Point<T> {
  pub fn zero() -> Point<T> {
    Point::new(T::zero(), T::zero())
  }

  /// Turn direction of the walk `self` -> `q` -> `r`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Lexicographic order for sorting: primary key `x`, tie-break `y`,
  /// both compared through the tolerance-aware sign.
  pub fn lex_cmp(&self, other: &Point<T>) -> Ordering {
    self
      .x
      .cmp_tol(&other.x)
      .then_with(|| self.y.cmp_tol(&other.y))
  }

  /// Equality within the scalar tolerance.
  pub fn eq_tol(&self, other: &Point<T>) -> bool {
    self.lex_cmp(other) == Ordering::Equal
  }

  pub fn squared_distance_to(&self, other: &Point<T>) -> T {
    (other - self).squared_magnitude()
  }

  /// Compare the distances `self`->`p` and `self`->`q` without a square
  /// root, so it is available on the exact instantiations.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self
      .squared_distance_to(p)
      .cmp_tol(&self.squared_distance_to(q))
  }
}

impl<T: GeoFloat> Point<T> {
  pub fn distance_to(&self, other: &Point<T>) -> T {
    self.squared_distance_to(other).sqrt()
  }

  pub fn midpoint(&self, other: &Point<T>) -> Point<T> {
    let half = T::from_constant(1) / T::from_constant(2);
    self + &((other - self) * half)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point::new(point.0, point.1)
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point::new(vector.x, vector.y)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Affine arithmetic

// &point - &point = vector
impl<'a, 'b, T> Sub<&'a Point<T>> for &'b Point<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;
  fn sub(self, other: &'a Point<T>) -> Vector<T> {
    Vector::new(
      self.x.clone() - other.x.clone(),
      self.y.clone() - other.y.clone(),
    )
  }
}

// point - point = vector
impl<T> Sub<Point<T>> for Point<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;
  fn sub(self, other: Point<T>) -> Vector<T> {
    Sub::sub(&self, &other)
  }
}

// &point + &vector = point
impl<'a, 'b, T> Add<&'a Vector<T>> for &'b Point<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Point<T>;
  fn add(self, other: &'a Vector<T>) -> Point<T> {
    Point::new(
      self.x.clone() + other.x.clone(),
      self.y.clone() + other.y.clone(),
    )
  }
}

// point + vector = point
impl<T> Add<Vector<T>> for Point<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Point<T>;
  fn add(self, other: Vector<T>) -> Point<T> {
    Add::add(&self, &other)
  }
}

// &point - &vector = point
impl<'a, 'b, T> Sub<&'a Vector<T>> for &'b Point<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Point<T>;
  fn sub(self, other: &'a Vector<T>) -> Point<T> {
    Point::new(
      self.x.clone() - other.x.clone(),
      self.y.clone() - other.y.clone(),
    )
  }
}

// point += vector
impl<T> AddAssign<Vector<T>> for Point<T>
where
  T: AddAssign<T>,
{
  fn add_assign(&mut self, other: Vector<T>) {
    self.x += other.x;
    self.y += other.y;
  }
}

// -point = point mirrored through the origin
impl<T> Neg for &Point<T>
where
  T: Neg<Output = T> + Clone,
{
  type Output = Point<T>;
  fn neg(self) -> Point<T> {
    Point::new(self.x.clone().neg(), self.y.clone().neg())
  }
}

impl<T> Neg for Point<T>
where
  T: Neg<Output = T> + Clone,
{
  type Output = Point<T>;
  fn neg(self) -> Point<T> {
    Neg::neg(&self)
  }
}
