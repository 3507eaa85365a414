use claims::debug_assert_ok;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::cmp::Ordering;
use std::ops::{Add, Deref};

use super::Polygon;
use crate::data::{Point, PointLocation, Segment, Vector};
use crate::orientation::Orientation;
use crate::{Error, GeoFloat, GeoScalar};

/// Strictly convex CCW polygon. The invariant (no concave or colinear
/// vertex triples, counter-clockwise order) is established by
/// [hull construction](crate::algorithms::convex_hull) and assumed, never
/// re-validated, by every other operation; violating it gives undefined
/// results. Degenerate hulls of one or two vertices are permitted.
#[derive(Debug, Clone)]
pub struct PolygonConvex<T>(Polygon<T>);

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl<T> PolygonConvex<T>
where
  T: GeoScalar,
{
  /// $O(1)$ Assume that a polygon is strictly convex and counter-clockwise.
  pub fn new_unchecked(poly: Polygon<T>) -> PolygonConvex<T> {
    let convex = PolygonConvex(poly);
    debug_assert_ok!(convex.validate());
    convex
  }

  /// $O(n \log n)$ Hull of an arbitrary point set; see
  /// [`algorithms::convex_hull`](crate::algorithms::convex_hull).
  pub fn hull(points: Vec<Point<T>>) -> Result<PolygonConvex<T>, Error> {
    crate::algorithms::convex_hull(points)
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    if self.0.points.is_empty() {
      return Err(Error::InsufficientVertices);
    }
    // One- and two-vertex hulls are legal degenerate outputs.
    if self.0.points.len() < 3 {
      return Ok(());
    }
    for i in 0..self.0.points.len() {
      let p1 = &self.0.points[self.0.prev(i)];
      let p2 = &self.0.points[i];
      let p3 = &self.0.points[self.0.next(i)];
      if !Orientation::new(p1, p2, p3).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    self.0.validate()
  }

  /// $O(\log n)$ Locate a point relative to the hull. Anchored at vertex
  /// 0: a binary search by angular position finds the wedge containing the
  /// query, which is then classified against that wedge's hull edge.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let pts = &self.0.points;
    let n = pts.len();
    if n == 1 {
      return if pts[0].eq_tol(pt) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      };
    }
    if n == 2 {
      return if Segment::new(pts[0].clone(), pts[1].clone()).contains(pt) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      };
    }
    let p0 = &pts[0];
    let e1 = p0.orientation(&pts[1], pt);
    if e1.is_cw() {
      return PointLocation::Outside;
    }
    let e2 = p0.orientation(&pts[n - 1], pt);
    if e2.is_ccw() {
      return PointLocation::Outside;
    }
    // On the boundary rays out of the anchor the wedge degenerates; both
    // rays are hull edges there.
    if e1.is_colinear() {
      return if Segment::new(p0.clone(), pts[1].clone()).contains(pt) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      };
    }
    if e2.is_colinear() {
      return if Segment::new(pts[n - 1].clone(), p0.clone()).contains(pt) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      };
    }
    let mut lower = 1;
    let mut upper = n - 1;
    while lower + 1 < upper {
      let middle = (lower + upper) / 2;
      if p0.orientation(&pts[middle], pt).is_ccw() {
        lower = middle;
      } else {
        upper = middle;
      }
    }
    match Orientation::new(&pts[lower], &pts[upper], pt) {
      Orientation::ClockWise => PointLocation::Outside,
      Orientation::CoLinear => PointLocation::OnBoundary,
      Orientation::CounterClockWise => PointLocation::Inside,
    }
  }

  /// $O(n)$ Enumerate antipodal pairs with rotating calipers: for every
  /// hull edge the opposite pointer advances while the directed area to
  /// the next vertex does not decrease, and `visit(src, dst, antipode)`
  /// fires for every pair on the way. Requires at least three vertices;
  /// does nothing on degenerate hulls.
  pub fn rotating_calipers<F>(&self, mut visit: F)
  where
    F: FnMut(&Point<T>, &Point<T>, &Point<T>),
  {
    let pts = &self.0.points;
    let n = pts.len();
    if n < 3 {
      return;
    }
    let area2 = |a: &Point<T>, b: &Point<T>, c: &Point<T>| (b - a).cross(&(c - a));
    let mut j = 1;
    for i in 0..n {
      let a = &pts[i];
      let b = &pts[self.0.next(i)];
      loop {
        visit(a, b, &pts[j]);
        let cur = area2(a, b, &pts[j]);
        let nxt = area2(a, b, &pts[self.0.next(j)]);
        if nxt.cmp_tol(&cur) != Ordering::Less {
          j = self.0.next(j);
        } else {
          break;
        }
      }
    }
  }

  /// $O(n)$ Squared diameter of the hull: the largest squared distance
  /// between any two vertices, via the caliper sweep. Exact on the integer
  /// instantiations.
  pub fn diameter2(&self) -> T {
    let pts = &self.0.points;
    match pts.len() {
      0 | 1 => T::zero(),
      2 => pts[0].squared_distance_to(&pts[1]),
      _ => {
        let mut best = T::zero();
        self.rotating_calipers(|a, b, c| {
          for d in [a.squared_distance_to(c), b.squared_distance_to(c)] {
            if d.cmp_tol(&best) == Ordering::Greater {
              best = d;
            }
          }
        });
        best
      }
    }
  }

  /// $O(1)$
  pub fn polygon(&self) -> &Polygon<T> {
    &self.0
  }

  /// The hull mirrored through the origin; still strictly convex and CCW.
  pub fn reflected(&self) -> PolygonConvex<T> {
    PolygonConvex::new_unchecked(self.0.reflected())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Minkowski sum

// Index of the angularly smallest edge vector; both merge inputs start
// there so the merged sequence is globally sorted.
fn first_edge<T: GeoScalar>(edges: &[Vector<T>]) -> usize {
  let mut best = 0;
  for i in 1..edges.len() {
    if edges[i].cmp_around_origin(&edges[best]) == Ordering::Less {
      best = i;
    }
  }
  best
}

fn minkowski_sum<T: GeoScalar>(a: &Polygon<T>, b: &Polygon<T>) -> PolygonConvex<T> {
  // The edge-vector merge needs a full ring on both sides; degenerate
  // operands reduce to hulling the pairwise vertex sums.
  if a.len() < 3 || b.len() < 3 {
    let sums: Vec<Point<T>> = a
      .points()
      .iter()
      .flat_map(|p| {
        b.points()
          .iter()
          .map(move |q| Point::new(p.x.clone() + q.x.clone(), p.y.clone() + q.y.clone()))
      })
      .collect();
    return crate::algorithms::convex_hull(sums).expect("hull of a non-empty point set");
  }

  let ea: Vec<Vector<T>> = (0..a.len()).map(|i| a.edge(i).direction()).collect();
  let eb: Vec<Vector<T>> = (0..b.len()).map(|i| b.edge(i).direction()).collect();
  let sa = first_edge(&ea);
  let sb = first_edge(&eb);

  // Both start vertices support the same extreme direction, so their sum
  // is a vertex of the result.
  let mut cursor = Point::new(
    a.point(sa).x.clone() + b.point(sb).x.clone(),
    a.point(sa).y.clone() + b.point(sb).y.clone(),
  );
  let mut candidates: Vec<Point<T>> = Vec::with_capacity(a.len() + b.len());
  candidates.push(cursor.clone());
  let (mut i, mut j) = (0, 0);
  while i < ea.len() || j < eb.len() {
    let from_a = if i == ea.len() {
      false
    } else if j == eb.len() {
      true
    } else {
      ea[(sa + i) % ea.len()].cmp_around_origin(&eb[(sb + j) % eb.len()]) != Ordering::Greater
    };
    let v = if from_a {
      i += 1;
      &ea[(sa + i - 1) % ea.len()]
    } else {
      j += 1;
      &eb[(sb + j - 1) % eb.len()]
    };
    cursor = &cursor + v;
    candidates.push(cursor.clone());
  }
  // The edge vectors of a closed ring sum to zero; the final candidate is
  // the start again.
  candidates.pop();

  // Drop vertices that are not strictly convex under the same left-turn
  // test hull construction uses (adjacent parallel edges merge here).
  let mut out: Vec<Point<T>> = Vec::with_capacity(candidates.len());
  for pt in candidates {
    while out.len() > 1
      && !Orientation::new(&out[out.len() - 2], &out[out.len() - 1], &pt).is_ccw()
    {
      out.pop();
    }
    out.push(pt);
  }
  // The seam back to the start vertex can also hide a colinear run, when
  // the two rings' angularly-last edges are parallel.
  while out.len() > 2
    && !Orientation::new(&out[out.len() - 2], &out[out.len() - 1], &out[0]).is_ccw()
  {
    out.pop();
  }
  PolygonConvex::new_unchecked(Polygon::new_unchecked(out))
}

// &convex + &convex: the Minkowski sum. Correct only because both operands
// are convex; the result has at most |P| + |Q| vertices.
impl<'a, 'b, T> Add<&'b PolygonConvex<T>> for &'a PolygonConvex<T>
where
  T: GeoScalar,
{
  type Output = PolygonConvex<T>;
  fn add(self, other: &'b PolygonConvex<T>) -> PolygonConvex<T> {
    minkowski_sum(&self.0, &other.0)
  }
}

impl<T> Add<PolygonConvex<T>> for PolygonConvex<T>
where
  T: GeoScalar,
{
  type Output = PolygonConvex<T>;
  fn add(self, other: PolygonConvex<T>) -> PolygonConvex<T> {
    &self + &other
  }
}

///////////////////////////////////////////////////////////////////////////////
// Metric operations

impl<T> PolygonConvex<T>
where
  T: GeoFloat,
{
  /// $O(n)$ Minimum distance between this hull and another one.
  ///
  /// PRECONDITION: `other` must already be mirrored through the origin
  /// (see [`PolygonConvex::reflected`]); this routine sums the two hulls
  /// as given and measures from the origin to the boundary of the result.
  /// Passing an un-negated hull silently measures the wrong body.
  pub fn min_distance_to(&self, other: &PolygonConvex<T>) -> T {
    let sum = self + other;
    let origin = Point::zero();
    match sum.locate(&origin) {
      PointLocation::Outside => sum
        .iter_edges()
        .map(|e| e.distance_to(&origin))
        .fold(T::infinity(), |acc, d| acc.min(d)),
      _ => T::zero(),
    }
  }

  /// $O(n)$ Minimum-area rectangle covering the hull, by the four-pointer
  /// caliper sweep: for every candidate edge direction the farthest vertex
  /// and the two perpendicular support vertices advance monotonically, and
  /// the best rectangle is rebuilt from its four support lines. Ties keep
  /// the first candidate evaluated.
  pub fn min_area_rectangle(&self) -> Result<Polygon<T>, Error> {
    let pts = &self.0.points;
    let n = pts.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    let nx = |i: usize| if i == n - 1 { 0 } else { i + 1 };

    let mut j = 1;
    let mut r = 1;
    let mut l = 0;
    let mut best: Option<(T, usize, usize, usize, usize)> = None;
    for i in 0..n {
      let a = &pts[i];
      let d = &pts[nx(i)] - a;
      let height = |k: usize| d.cross(&(&pts[k] - a));
      let span = |k: usize| d.dot(&(&pts[k] - a));

      while height(nx(j)).cmp_tol(&height(j)) != Ordering::Less {
        j = nx(j);
      }
      while span(nx(r)).cmp_tol(&span(r)) != Ordering::Less {
        r = nx(r);
      }
      if i == 0 {
        l = j;
      }
      while span(nx(l)).cmp_tol(&span(l)) != Ordering::Greater {
        l = nx(l);
      }

      let area = height(j) * (span(r) - span(l)) / d.squared_magnitude();
      let improved = match &best {
        None => true,
        Some((best_area, ..)) => area.cmp_tol(best_area) == Ordering::Less,
      };
      if improved {
        best = Some((area, i, j, l, r));
      }
    }

    let (_, i, j, l, r) = best.expect("at least one candidate edge");
    let a = &pts[i];
    let b = &pts[nx(i)];
    let d = b - a;
    let perp = Vector::new(-d.y, d.x);
    let base = Segment::new(a.clone(), b.clone());
    let top = Segment::new(pts[j].clone(), &pts[j] + &d);
    let left = Segment::new(pts[l].clone(), &pts[l] + &perp);
    let right = Segment::new(pts[r].clone(), &pts[r] + &perp);
    Ok(Polygon::new_unchecked(vec![
      base.intersection_point(&left)?,
      base.intersection_point(&right)?,
      top.intersection_point(&right)?,
      top.intersection_point(&left)?,
    ]))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Random sampling

impl<T> PolygonConvex<T>
where
  T: GeoFloat + SampleUniform,
{
  /// $O(n \log n)$ Sample a random convex polygon with up to `n` vertices:
  /// random edge deltas summing to zero, sorted by angle and accumulated
  /// into a ring, then hulled to clean up colinear runs.
  pub fn random<R>(n: usize, rng: &mut R) -> PolygonConvex<T>
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    loop {
      let mut deltas: Vec<Vector<T>> = Vec::with_capacity(n);
      let mut sum = Vector::zero();
      for _ in 0..n - 1 {
        let v = Vector::new(
          rng.gen_range(-T::one()..T::one()),
          rng.gen_range(-T::one()..T::one()),
        );
        sum = &sum + &v;
        deltas.push(v);
      }
      deltas.push(-sum);
      deltas.sort_unstable_by(|a, b| a.cmp_around_origin(b));
      let mut cursor: Point<T> = Point::zero();
      let pts: Vec<Point<T>> = deltas
        .into_iter()
        .map(|v| {
          cursor += v;
          cursor
        })
        .collect();
      // All-colinear samples hull down to a degenerate ring; try again.
      match crate::algorithms::convex_hull(pts) {
        Ok(hull) if hull.len() >= 3 => return hull,
        _ => continue,
      }
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl<T: GeoScalar> Deref for PolygonConvex<T> {
  type Target = Polygon<T>;
  fn deref(&self) -> &Self::Target {
    self.polygon()
  }
}

impl<T> From<PolygonConvex<T>> for Polygon<T> {
  fn from(convex: PolygonConvex<T>) -> Polygon<T> {
    convex.0
  }
}

impl<'a, T> From<&'a PolygonConvex<T>> for &'a Polygon<T> {
  fn from(convex: &'a PolygonConvex<T>) -> &'a Polygon<T> {
    &convex.0
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_ok, assert_some};
  use proptest::prelude::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  fn unit_square() -> PolygonConvex<i64> {
    assert_ok!(PolygonConvex::hull(vec![
      Point::new(0, 0),
      Point::new(1, 0),
      Point::new(1, 1),
      Point::new(0, 1),
    ]))
  }

  #[test]
  fn unit_square_diameter() {
    assert_eq!(unit_square().diameter2(), 2);
  }

  #[test]
  fn degenerate_diameter() {
    let single: PolygonConvex<i64> = assert_ok!(PolygonConvex::hull(vec![Point::new(3, 3)]));
    assert_eq!(single.diameter2(), 0);
    let segment: PolygonConvex<i64> = assert_ok!(PolygonConvex::hull(vec![
      Point::new(0, 0),
      Point::new(3, 4),
      Point::new(6, 8),
    ]));
    assert_eq!(segment.len(), 2);
    assert_eq!(segment.diameter2(), 100);
  }

  #[test]
  fn locate_in_degenerate_hulls() {
    let single: PolygonConvex<i64> = assert_ok!(PolygonConvex::hull(vec![Point::new(3, 3)]));
    assert_eq!(single.locate(&Point::new(3, 3)), PointLocation::OnBoundary);
    assert_eq!(single.locate(&Point::new(3, 4)), PointLocation::Outside);

    let segment: PolygonConvex<i64> = assert_ok!(PolygonConvex::hull(vec![
      Point::new(0, 0),
      Point::new(4, 0),
    ]));
    assert_eq!(segment.locate(&Point::new(2, 0)), PointLocation::OnBoundary);
    assert_eq!(segment.locate(&Point::new(2, 1)), PointLocation::Outside);
  }

  #[test]
  fn locate_in_square() {
    let square = unit_square();
    assert_eq!(square.locate(&Point::new(0, 0)), PointLocation::OnBoundary);
    assert_eq!(square.locate(&Point::new(1, 1)), PointLocation::OnBoundary);
    assert_eq!(square.locate(&Point::new(2, 2)), PointLocation::Outside);
    assert_eq!(square.locate(&Point::new(0, -1)), PointLocation::Outside);
  }

  #[test]
  fn minkowski_of_axis_squares() {
    let a = unit_square();
    let b: PolygonConvex<i64> = assert_ok!(PolygonConvex::hull(vec![
      Point::new(0, 0),
      Point::new(2, 0),
      Point::new(2, 2),
      Point::new(0, 2),
    ]));
    let sum = &a + &b;
    assert_ok!(sum.validate());
    // Parallel edges merge: a square plus a square is a square.
    assert_eq!(sum.len(), 4);
    assert_eq!(sum.signed_area_2x(), 18);
  }

  #[test]
  fn minkowski_square_plus_diamond_is_an_octagon() {
    let square = unit_square();
    let diamond: PolygonConvex<i64> = assert_ok!(PolygonConvex::hull(vec![
      Point::new(2, 0),
      Point::new(0, 2),
      Point::new(-2, 0),
      Point::new(0, -2),
    ]));
    let sum = &square + &diamond;
    assert_ok!(sum.validate());
    assert_eq!(sum.len(), 8);
  }

  #[test]
  fn minkowski_with_degenerate_operand() {
    let square = unit_square();
    let point: PolygonConvex<i64> = assert_ok!(PolygonConvex::hull(vec![Point::new(10, 20)]));
    let translated = &square + &point;
    assert_eq!(translated.len(), 4);
    assert_eq!(
      translated.locate(&Point::new(10, 20)),
      PointLocation::OnBoundary
    );
  }

  #[test]
  fn distance_between_separated_squares() {
    let a: PolygonConvex<f64> = assert_ok!(PolygonConvex::hull(vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 1.0),
    ]));
    let b: PolygonConvex<f64> = assert_ok!(PolygonConvex::hull(vec![
      Point::new(3.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(4.0, 1.0),
      Point::new(3.0, 1.0),
    ]));
    let d = a.min_distance_to(&b.reflected());
    assert!((d - 2.0).abs() < 1e-9, "{}", d);
    // Overlapping hulls are at distance zero.
    assert_eq!(a.min_distance_to(&a.reflected()), 0.0);
  }

  #[test]
  fn min_area_rectangle_of_rotated_rectangle() {
    // A 3 x 2 rectangle rotated by 30 degrees; the cover must recover its
    // area.
    let (sin, cos) = std::f64::consts::FRAC_PI_6.sin_cos();
    let rotate = |x: f64, y: f64| Point::new(x * cos - y * sin, x * sin + y * cos);
    let hull: PolygonConvex<f64> = assert_ok!(PolygonConvex::hull(vec![
      rotate(0.0, 0.0),
      rotate(3.0, 0.0),
      rotate(3.0, 2.0),
      rotate(0.0, 2.0),
    ]));
    let cover = assert_ok!(hull.min_area_rectangle());
    assert!((cover.signed_area() - 6.0).abs() < 1e-9);
  }

  #[test]
  fn min_area_rectangle_of_triangle() {
    // Right triangle with legs 4 and 3: the best cover is the 4 x 3 box
    // halved, area 12.
    let hull: PolygonConvex<f64> = assert_ok!(PolygonConvex::hull(vec![
      Point::new(0.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(0.0, 3.0),
    ]));
    let cover = assert_ok!(hull.min_area_rectangle());
    assert!((cover.signed_area() - 12.0).abs() < 1e-9);
  }

  #[test]
  fn random_convex_polygons_are_valid() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for n in [3usize, 5, 10, 50] {
      let poly: PolygonConvex<f64> = PolygonConvex::random(n, &mut rng);
      assert_ok!(poly.validate());
      assert!(poly.len() <= n);
    }
  }

  proptest! {
    #[test]
    fn locate_agrees_with_winding(pts in point_cloud_i64(), queries in point_cloud_i64()) {
      if let Ok(hull) = PolygonConvex::hull(pts) {
        if hull.len() >= 3 {
          for q in queries.iter().chain(hull.points()) {
            prop_assert_eq!(hull.locate(q), hull.polygon().locate(q));
          }
        }
      }
    }

    #[test]
    fn diameter_is_max_pairwise_distance(pts in point_cloud_i64()) {
      if let Ok(hull) = PolygonConvex::hull(pts.clone()) {
        if hull.len() >= 3 {
          let brute = pts
            .iter()
            .flat_map(|p| pts.iter().map(move |q| p.squared_distance_to(q)))
            .max();
          prop_assert_eq!(hull.diameter2(), assert_some!(brute));
        }
      }
    }

    #[test]
    fn minkowski_sum_is_commutative(a in point_cloud_i64(), b in point_cloud_i64()) {
      let pa = PolygonConvex::hull(a).unwrap();
      let pb = PolygonConvex::hull(b).unwrap();
      let ab = &pa + &pb;
      let ba = &pb + &pa;
      prop_assert_eq!(ab.len(), ba.len());
      prop_assert!(ab
        .points()
        .iter()
        .zip(ba.points())
        .all(|(p, q)| p.eq_tol(q)));
      // Vertex bound and validity.
      prop_assert!(ab.len() <= pa.len() + pb.len());
      prop_assert_eq!(ab.validate().err(), None);
    }

    #[test]
    fn self_difference_contains_origin(pts in point_cloud_f64()) {
      if let Ok(hull) = PolygonConvex::hull(pts) {
        if hull.len() >= 3 {
          prop_assert!(hull.min_distance_to(&hull.reflected()) == 0.0);
        }
      }
    }
  }
}
