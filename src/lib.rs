#![deny(clippy::cast_lossless)]
//! Planar geometry primitives for contest programming: points, segments,
//! polygons and convex polygons, generic over a tolerance-aware scalar.
//!
//! Every geometric predicate in the crate funnels through a single
//! three-valued sign classifier, [`GeoScalar::sgn`]. The integer
//! instantiations classify exactly; the floating instantiations treat any
//! value within a fixed absolute tolerance of zero as zero. Operations that
//! need square roots or division (lengths, distances, projections, angles)
//! are only available on the floating instantiations, marked by
//! [`GeoFloat`].
use num_traits::*;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::*;

pub mod algorithms;
pub mod data;
mod matrix;
mod modular;
mod orientation;

pub use matrix::{Matrix, MatrixField};
pub use modular::{Mint, ModInt};
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// Unit vector or angle of a zero-length vector.
  ZeroVector,
  /// Intersection point of two parallel segments.
  ParallelSegments,
  /// Two consecutive line segments are either colinear or oriented clockwise.
  ConvexViolation,
  ClockWiseViolation,
  /// Rotational volume of a polygon without a mirror axis.
  NoSymmetryAxis,
  SingularMatrix,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::ZeroVector => write!(f, "Zero-length vector"),
      Error::ParallelSegments => write!(f, "Segments are parallel"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::NoSymmetryAxis => write!(f, "Polygon has no mirror axis"),
      Error::SingularMatrix => write!(f, "Matrix is singular"),
    }
  }
}

impl std::error::Error for Error {}

/// Numeric field for geometric types.
///
/// The sign classifier is the correctness-critical primitive: orientation,
/// parallelism, containment and intersection tests are all expressed through
/// it. `Ordering::Equal` plays the role of "zero within tolerance".
pub trait GeoScalar:
  std::fmt::Debug
  + Clone
  + PartialOrd
  + Neg<Output = Self>
  + NumAssignOps
  + NumOps<Self, Self>
  + Sum
  + Zero
  + One
{
  /// Absolute tolerance used by [`GeoScalar::sgn`]. Zero for the exact
  /// integer instantiations.
  fn tolerance() -> Self;

  /// Three-valued sign of `self`: values within the tolerance of zero
  /// classify as `Equal`.
  fn sgn(&self) -> Ordering {
    self.sgn_with(&Self::tolerance())
  }

  /// Sign classification against a caller-chosen absolute tolerance.
  /// Exact instantiations ignore `eps`.
  fn sgn_with(&self, eps: &Self) -> Ordering;

  /// Tolerance-aware comparison: the sign of `self - other`.
  fn cmp_tol(&self, other: &Self) -> Ordering {
    (self.clone() - other.clone()).sgn()
  }

  fn from_constant(val: i8) -> Self;
}

/// Floating instantiations of [`GeoScalar`]. Metric operations (lengths,
/// distances, unit vectors, angles, intersection points, symmetry axes,
/// volumes, bounding rectangles) require this.
pub trait GeoFloat: GeoScalar + Float + FloatConst {}

macro_rules! exact_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl GeoScalar for $ty {
        fn tolerance() -> Self {
          0
        }
        fn sgn_with(&self, _eps: &Self) -> Ordering {
          self.cmp(&0)
        }
        fn cmp_tol(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
        fn from_constant(val: i8) -> Self {
          val as $ty
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $ty:ty, $eps:expr ) => {
    impl GeoScalar for $ty {
      fn tolerance() -> Self {
        $eps
      }
      fn sgn_with(&self, eps: &Self) -> Ordering {
        if self.abs() <= *eps {
          Ordering::Equal
        } else if *self > 0.0 {
          Ordering::Greater
        } else {
          Ordering::Less
        }
      }
      fn from_constant(val: i8) -> Self {
        val as $ty
      }
    }

    impl GeoFloat for $ty {}
  };
}

exact_precision!(i8, i16, i32, i64, i128, isize);
floating_precision!(f32, 1e-6);
// 1e-10 is part of the documented contract of the f64 instantiation.
floating_precision!(f64, 1e-10);

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact_sign() {
    assert_eq!(0i64.sgn(), Ordering::Equal);
    assert_eq!((-7i64).sgn(), Ordering::Less);
    assert_eq!(7i64.sgn(), Ordering::Greater);
  }

  #[test]
  fn tolerant_sign() {
    assert_eq!(0.0f64.sgn(), Ordering::Equal);
    assert_eq!(1e-11f64.sgn(), Ordering::Equal);
    assert_eq!((-1e-11f64).sgn(), Ordering::Equal);
    assert_eq!(1e-9f64.sgn(), Ordering::Greater);
    assert_eq!((-1e-9f64).sgn(), Ordering::Less);
  }

  #[test]
  fn sign_override() {
    assert_eq!(0.5f64.sgn_with(&1.0), Ordering::Equal);
    // Exact instantiations ignore the override.
    assert_eq!(1i64.sgn_with(&10), Ordering::Greater);
  }

  #[test]
  fn tolerant_cmp() {
    assert_eq!(1.0f64.cmp_tol(&(1.0 + 1e-12)), Ordering::Equal);
    assert_eq!(1.0f64.cmp_tol(&2.0), Ordering::Less);
    assert_eq!(2.0f64.cmp_tol(&1.0), Ordering::Greater);
  }
}
