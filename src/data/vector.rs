use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use crate::{Error, GeoFloat, GeoScalar};

/// Displacement between two [points](super::Point).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector<T> {
  pub x: T,
  pub y: T,
}

impl<T> Vector<T> {
  pub const fn new(x: T, y: T) -> Vector<T> {
    Vector { x, y }
  }
}

impl<T: GeoScalar> Vector<T> {
  pub fn zero() -> Vector<T> {
    Vector::new(T::zero(), T::zero())
  }

  pub fn dot(&self, other: &Vector<T>) -> T {
    self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
  }

  /// 2-D cross product (determinant). Anti-commutative: operand order
  /// carries the orientation sign.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  pub fn is_zero(&self) -> bool {
    self.x.sgn() == Ordering::Equal && self.y.sgn() == Ordering::Equal
  }

  // Angular rank groups: the lower half-plane, the origin, the positive
  // x-axis, the upper half-plane, the negative x-axis.
  fn quadrant_rank(&self) -> u8 {
    match self.y.sgn() {
      Ordering::Less => 1,
      Ordering::Greater => 4,
      Ordering::Equal => match self.x.sgn() {
        Ordering::Less => 5,
        Ordering::Greater => 3,
        Ordering::Equal => 2,
      },
    }
  }

  /// Total angular order around the origin: rank group first, then cross
  /// product within a group, then squared magnitude as the tie-break.
  /// This is the order the Minkowski edge merge walks in.
  pub fn cmp_around_origin(&self, other: &Vector<T>) -> Ordering {
    let ra = self.quadrant_rank();
    let rb = other.quadrant_rank();
    if ra != rb {
      return ra.cmp(&rb);
    }
    match self.cross(other).sgn() {
      Ordering::Greater => Ordering::Less,
      Ordering::Less => Ordering::Greater,
      Ordering::Equal => self
        .squared_magnitude()
        .cmp_tol(&other.squared_magnitude()),
    }
  }
}

impl<T: GeoFloat> Vector<T> {
  pub fn magnitude(&self) -> T {
    self.squared_magnitude().sqrt()
  }

  /// Vector of magnitude one in the same direction.
  pub fn unit(&self) -> Result<Vector<T>, Error> {
    if self.is_zero() {
      return Err(Error::ZeroVector);
    }
    let len = self.magnitude();
    Ok(Vector::new(self.x / len, self.y / len))
  }

  /// Signed scalar projection of `self` onto `onto`.
  pub fn project_scalar(&self, onto: &Vector<T>) -> Result<T, Error> {
    if onto.is_zero() {
      return Err(Error::ZeroVector);
    }
    Ok(self.dot(onto) / onto.magnitude())
  }

  /// Angle between the two vectors in radians, in `[0, pi]`. The cosine is
  /// clamped to `[-1, 1]` to guard `acos` against floating round-off.
  pub fn angle_to(&self, other: &Vector<T>) -> Result<T, Error> {
    if self.is_zero() || other.is_zero() {
      return Err(Error::ZeroVector);
    }
    let cos = self.dot(other) / (self.magnitude() * other.magnitude());
    Ok(cos.max(-T::one()).min(T::one()).acos())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arithmetic

impl<'a, 'b, T> Add<&'a Vector<T>> for &'b Vector<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Vector<T>;
  fn add(self, other: &'a Vector<T>) -> Vector<T> {
    Vector::new(
      self.x.clone() + other.x.clone(),
      self.y.clone() + other.y.clone(),
    )
  }
}

impl<T> Add<Vector<T>> for Vector<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Vector<T>;
  fn add(self, other: Vector<T>) -> Vector<T> {
    Add::add(&self, &other)
  }
}

impl<'a, 'b, T> Sub<&'a Vector<T>> for &'b Vector<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;
  fn sub(self, other: &'a Vector<T>) -> Vector<T> {
    Vector::new(
      self.x.clone() - other.x.clone(),
      self.y.clone() - other.y.clone(),
    )
  }
}

impl<T> Sub<Vector<T>> for Vector<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;
  fn sub(self, other: Vector<T>) -> Vector<T> {
    Sub::sub(&self, &other)
  }
}

// vector * scalar
impl<T> Mul<T> for Vector<T>
where
  T: Mul<T, Output = T> + Clone,
{
  type Output = Vector<T>;
  fn mul(self, other: T) -> Vector<T> {
    Vector::new(self.x * other.clone(), self.y * other)
  }
}

impl<'a, T> Mul<T> for &'a Vector<T>
where
  T: Mul<T, Output = T> + Clone,
{
  type Output = Vector<T>;
  fn mul(self, other: T) -> Vector<T> {
    Vector::new(self.x.clone() * other.clone(), self.y.clone() * other)
  }
}

impl<T> Neg for Vector<T>
where
  T: Neg<Output = T> + Clone,
{
  type Output = Vector<T>;
  fn neg(self) -> Vector<T> {
    Vector::new(self.x.neg(), self.y.neg())
  }
}
