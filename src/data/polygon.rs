use std::cmp::Ordering;

use super::{Point, PointLocation, Segment};
use crate::{Error, GeoFloat, GeoScalar};

mod convex;
pub use convex::*;

mod symmetry;
pub use symmetry::*;

/// Ordered vertex ring, traversed counter-clockwise by convention. The CCW
/// convention is documented, not enforced: winding signs and area signs
/// assume it, and [`Polygon::ensure_ccw`] is the explicit fix-up. The
/// polygon-level analyses (symmetry, volume) additionally assume the ring
/// is simple.
#[derive(Debug, Clone)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T>>,
}

impl<T: GeoScalar> Polygon<T> {
  pub fn new(points: Vec<Point<T>>) -> Result<Polygon<T>, Error> {
    if points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    Ok(Polygon::new_unchecked(points))
  }

  pub fn new_unchecked(points: Vec<Point<T>>) -> Polygon<T> {
    Polygon { points }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn point(&self, idx: usize) -> &Point<T> {
    &self.points[idx]
  }

  /// Cyclic successor of a vertex index.
  pub fn next(&self, idx: usize) -> usize {
    if idx == self.points.len() - 1 {
      0
    } else {
      idx + 1
    }
  }

  /// Cyclic predecessor of a vertex index.
  pub fn prev(&self, idx: usize) -> usize {
    if idx == 0 {
      self.points.len() - 1
    } else {
      idx - 1
    }
  }

  /// Directed boundary edge from vertex `idx` to its successor.
  pub fn edge(&self, idx: usize) -> Segment<T> {
    Segment::new(
      self.points[idx].clone(),
      self.points[self.next(idx)].clone(),
    )
  }

  pub fn iter_edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
    (0..self.points.len()).map(move |i| self.edge(i))
  }

  /// $O(n)$ winding number of the ring around `pt`, or `None` when the
  /// point lies on an edge. For simple CCW rings the winding number is 0
  /// outside and 1 inside, but simplicity is not assumed here.
  pub fn winding_number(&self, pt: &Point<T>) -> Option<isize> {
    let mut winding = 0isize;
    for s in self.iter_edges() {
      if s.contains(pt) {
        return None;
      }
      let dy = s.src.y.cmp_tol(&s.dst.y);
      if dy == Ordering::Equal {
        continue;
      }
      let side = s.side(pt);
      if dy == Ordering::Less && side.is_cw() {
        continue;
      }
      if dy == Ordering::Greater && side.is_ccw() {
        continue;
      }
      let src_below = s.src.y.cmp_tol(&pt.y) == Ordering::Less;
      let dst_below = s.dst.y.cmp_tol(&pt.y) == Ordering::Less;
      if src_below && !dst_below {
        winding += 1;
      }
      if !src_below && dst_below {
        winding -= 1;
      }
    }
    Some(winding)
  }

  /// $O(n)$ point-in-polygon test through the winding number.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.winding_number(pt) {
      None => PointLocation::OnBoundary,
      Some(0) => PointLocation::Outside,
      Some(_) => PointLocation::Inside,
    }
  }

  /// Twice the signed area (Shoelace formula). Positive iff the ring is
  /// counter-clockwise. Exact on the integer instantiations.
  pub fn signed_area_2x(&self) -> T {
    self
      .iter_edges()
      .map(|s| s.src.as_vec().cross(&s.dst.as_vec()))
      .sum()
  }

  /// Reverse the vertex order if the ring is clockwise.
  pub fn ensure_ccw(&mut self) {
    if self.signed_area_2x().sgn() != Ordering::Greater {
      self.points.reverse();
    }
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    if self.signed_area_2x().sgn() != Ordering::Greater {
      return Err(Error::ClockWiseViolation);
    }
    Ok(())
  }

  /// The ring mirrored through the origin. Point-wise negation keeps the
  /// traversal order, so a CCW ring stays CCW. This is the explicit
  /// pre-negation step required by
  /// [`PolygonConvex::min_distance_to`](super::PolygonConvex::min_distance_to).
  pub fn reflected(&self) -> Polygon<T> {
    Polygon {
      points: self.points.iter().map(|p| -p).collect(),
    }
  }
}

impl<T: GeoFloat> Polygon<T> {
  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  pub fn perimeter(&self) -> T {
    self.iter_edges().map(|s| s.length()).sum()
  }
}
