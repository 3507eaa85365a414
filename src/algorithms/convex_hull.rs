use std::cmp::Ordering;

use crate::data::{Point, Polygon, PolygonConvex};
use crate::orientation::Orientation;
use crate::{Error, GeoScalar};

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Algorithms
//
// Properties:
//    All Ok results are valid convex polygons, possibly degenerate.
//    No points are outside the resulting convex polygon.
//    Idempotent: hulling a hull returns the same vertex ring.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// Andrew's monotone-chain algorithm: the points are sorted by the
/// tolerance-aware lexicographic order, then the lower and upper chains are
/// built with strictly-left-turn pops and joined. Colinear and clockwise
/// triples are discarded, so the result never has three colinear vertices.
///
/// When every input point is equal or colinear the hull degenerates to one
/// or two vertices; this is a legal output, accepted by the degenerate
/// cases of the [`PolygonConvex`] operations.
///
/// # Errors
/// Will return an error iff the input set is empty.
///
/// # Examples
///
/// ```rust
/// # use planar::algorithms::convex_hull;
/// # use planar::data::Point;
/// # use planar::Error;
/// let empty_set: Vec<Point<i64>> = vec![];
/// assert_eq!(convex_hull(empty_set).err(), Some(Error::InsufficientVertices));
///
/// let hull = convex_hull(vec![
///   Point::new(0, 0),
///   Point::new(2, 0),
///   Point::new(1, 0), // interior of the bottom edge: dropped
///   Point::new(1, 1),
/// ]).unwrap();
/// assert_eq!(hull.len(), 3);
/// ```
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Result<PolygonConvex<T>, Error>
where
  T: GeoScalar,
{
  if pts.is_empty() {
    return Err(Error::InsufficientVertices);
  }
  pts.sort_unstable_by(Point::lex_cmp);
  pts.dedup_by(|a, b| a.lex_cmp(b) == Ordering::Equal);
  if pts.len() < 3 {
    return Ok(PolygonConvex::new_unchecked(Polygon::new_unchecked(pts)));
  }

  let mut chain: Vec<Point<T>> = Vec::with_capacity(pts.len() + 1);
  let keeps_left_turn = |chain: &[Point<T>], pt: &Point<T>| {
    Orientation::new(&chain[chain.len() - 2], &chain[chain.len() - 1], pt).is_ccw()
  };

  for pt in pts.iter() {
    while chain.len() > 1 && !keeps_left_turn(&chain, pt) {
      chain.pop();
    }
    chain.push(pt.clone());
  }
  let lower_len = chain.len();
  for pt in pts.iter().rev().skip(1) {
    while chain.len() > lower_len && !keeps_left_turn(&chain, pt) {
      chain.pop();
    }
    chain.push(pt.clone());
  }
  // The upper chain closes on the first point again.
  chain.pop();

  Ok(PolygonConvex::new_unchecked(Polygon::new_unchecked(chain)))
}
