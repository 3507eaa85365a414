use std::cmp::Ordering;

use super::{Point, Vector};
use crate::orientation::Orientation;
use crate::{Error, GeoFloat, GeoScalar};

/// Directed line segment from `src` to `dst`. The direction matters: it
/// defines the left/right half-planes that [`Segment::side`] classifies
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<T> {
  pub src: Point<T>,
  pub dst: Point<T>,
}

impl<T> Segment<T> {
  pub const fn new(src: Point<T>, dst: Point<T>) -> Segment<T> {
    Segment { src, dst }
  }
}

impl<T: GeoScalar> Segment<T> {
  pub fn direction(&self) -> Vector<T> {
    &self.dst - &self.src
  }

  /// Side of the segment's carrier line the point lies on:
  /// `CounterClockWise` is strictly left, `ClockWise` strictly right,
  /// `CoLinear` on the line. The fundamental orientation predicate.
  pub fn side(&self, pt: &Point<T>) -> Orientation {
    Orientation::from_sign(self.direction().cross(&(pt - &self.src)).sgn())
  }

  /// True iff the point is collinear with the segment and inside the span
  /// between the endpoints (endpoints included).
  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.side(pt).is_colinear()
      && (pt - &self.src).dot(&(pt - &self.dst)).sgn() != Ordering::Greater
  }

  pub fn is_parallel(&self, other: &Segment<T>) -> bool {
    self.direction().cross(&other.direction()).sgn() == Ordering::Equal
  }

  /// One-sided segment intersection test: true iff `other`'s endpoints do
  /// not lie strictly on the same side of this segment's carrier line.
  /// A full proper-or-touching test requires calling this both ways:
  /// `a.straddles(&b) && b.straddles(&a)`.
  pub fn straddles(&self, other: &Segment<T>) -> bool {
    let su = self.side(&other.src);
    let sv = self.side(&other.dst);
    su.is_colinear() || sv.is_colinear() || su != sv
  }

  /// Twice the signed area of the triangle `(src, dst, pt)`: the sign
  /// encodes orientation, the magnitude encodes distance times length.
  pub fn signed_area2_to(&self, pt: &Point<T>) -> T {
    (pt - &self.src).cross(&(pt - &self.dst))
  }

  pub fn squared_length(&self) -> T {
    self.direction().squared_magnitude()
  }
}

impl<T: GeoFloat> Segment<T> {
  pub fn length(&self) -> T {
    self.squared_length().sqrt()
  }

  /// Intersection of the two carrier lines. Fails on parallel segments
  /// rather than dividing by zero; check [`Segment::is_parallel`] when
  /// overlap matters.
  pub fn intersection_point(&self, other: &Segment<T>) -> Result<Point<T>, Error> {
    let d1 = self.direction();
    let d2 = other.direction();
    let denom = d1.cross(&d2);
    if denom.sgn() == Ordering::Equal {
      return Err(Error::ParallelSegments);
    }
    let t = d2.cross(&(&self.src - &other.src)) / denom;
    Ok(&self.src + &(d1 * t))
  }

  /// Distance from the point to the carrier line.
  pub fn line_distance_to(&self, pt: &Point<T>) -> T {
    self.signed_area2_to(pt).abs() / self.length()
  }

  /// Distance from the point to the segment itself: the perpendicular
  /// distance counts only when the foot of the perpendicular falls within
  /// the span; otherwise the nearest endpoint wins.
  pub fn distance_to(&self, pt: &Point<T>) -> T {
    let endpoints = self
      .src
      .distance_to(pt)
      .min(self.dst.distance_to(pt));
    if self.squared_length().sgn() == Ordering::Equal {
      return endpoints;
    }
    let d = self.direction();
    let past_src = (pt - &self.src).dot(&d).sgn() != Ordering::Less;
    let before_dst = (pt - &self.dst).dot(&d).sgn() != Ordering::Greater;
    if past_src && before_dst {
      endpoints.min(self.line_distance_to(pt))
    } else {
      endpoints
    }
  }

  /// Orthogonal projection of the point onto the carrier line. Not clamped
  /// to the segment span.
  pub fn project(&self, pt: &Point<T>) -> Point<T> {
    let d = self.direction();
    let t = (pt - &self.src).dot(&d) / d.squared_magnitude();
    &self.src + &(d * t)
  }
}
