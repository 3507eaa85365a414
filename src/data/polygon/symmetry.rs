use std::cmp::Ordering;

use super::Polygon;
use crate::data::Segment;
use crate::{Error, GeoFloat, GeoScalar};

/// Mirror axis of a polygon. For an odd ring every axis joins a vertex to
/// the opposite edge midpoint; for an even ring an axis joins either two
/// opposite vertices (`through_vertex`) or two opposite edge midpoints.
/// Indices are vertex indices for vertex axes and edge indices (edge `i`
/// runs from vertex `i` to `i + 1`) for edge axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetryAxis {
  pub index: usize,
  pub through_vertex: bool,
}

// Per-vertex feature for the palindrome scan: the interior angle plus the
// two incident edge lengths. A mirrored vertex sees its edges swapped.
#[derive(Debug, Clone, Copy)]
struct VertexMark<T> {
  angle: T,
  inbound: T,
  outbound: T,
}

fn mirror<T: GeoFloat>(a: &VertexMark<T>, b: &VertexMark<T>) -> bool {
  a.angle.cmp_tol(&b.angle) == Ordering::Equal
    && a.inbound.cmp_tol(&b.outbound) == Ordering::Equal
    && a.outbound.cmp_tol(&b.inbound) == Ordering::Equal
}

// Manacher scan, odd centers: d[i] counts the matched layers around center
// i, the center itself included. Unlike the textbook string case the
// relation is not reflexive, so d[i] == 0 when seq[i] fails to mirror
// itself.
fn palindromic_radii<M, F>(seq: &[M], eq: F) -> Vec<usize>
where
  F: Fn(&M, &M) -> bool,
{
  let n = seq.len();
  let mut d = vec![0usize; n];
  let mut l: isize = 0;
  let mut r: isize = -1;
  for i in 0..n {
    let ii = i as isize;
    let mut k: usize = if ii > r {
      0
    } else {
      d[(l + r - ii) as usize].min((r - ii + 1) as usize)
    };
    while i + k < n && i >= k && eq(&seq[i - k], &seq[i + k]) {
      k += 1;
    }
    d[i] = k;
    if ii + k as isize - 1 > r {
      l = ii - k as isize + 1;
      r = ii + k as isize - 1;
    }
  }
  d
}

// Manacher scan, even centers: d[i] counts the matched pairs around the
// gap between positions i - 1 and i.
fn even_palindromic_radii<M, F>(seq: &[M], eq: F) -> Vec<usize>
where
  F: Fn(&M, &M) -> bool,
{
  let n = seq.len();
  let mut d = vec![0usize; n];
  let mut l: isize = 0;
  let mut r: isize = -1;
  for i in 0..n {
    let ii = i as isize;
    let mut k: usize = if ii > r {
      0
    } else {
      d[(l + r - ii + 1) as usize].min((r - ii + 1) as usize)
    };
    while i + k < n && i >= k + 1 && eq(&seq[i - k - 1], &seq[i + k]) {
      k += 1;
    }
    d[i] = k;
    if ii + k as isize - 1 > r {
      l = ii - k as isize;
      r = ii + k as isize - 1;
    }
  }
  d
}

impl<T: GeoFloat> Polygon<T> {
  fn vertex_marks(&self) -> Option<Vec<VertexMark<T>>> {
    let n = self.points.len();
    let mut marks = Vec::with_capacity(n);
    for i in 0..n {
      let cur = &self.points[i];
      let to_prev = &self.points[self.prev(i)] - cur;
      let to_next = &self.points[self.next(i)] - cur;
      // A repeated vertex has no interior angle; no axis is well-defined.
      let angle = to_prev.angle_to(&to_next).ok()?;
      marks.push(VertexMark {
        angle,
        inbound: to_prev.magnitude(),
        outbound: to_next.magnitude(),
      });
    }
    Some(marks)
  }

  /// $O(n)$ All axes of reflective symmetry of the ring, found by a
  /// Manacher palindrome scan over the doubled cyclic sequence of
  /// per-vertex `(angle, edge length)` features. Assumes a simple ring;
  /// returns an empty list for rings with fewer than three vertices or
  /// repeated consecutive vertices.
  pub fn symmetry_axes(&self) -> Vec<SymmetryAxis> {
    let n = self.points.len();
    if n < 3 {
      return Vec::new();
    }
    let marks = match self.vertex_marks() {
      Some(marks) => marks,
      None => return Vec::new(),
    };
    let doubled: Vec<VertexMark<T>> = marks.iter().chain(marks.iter()).copied().collect();
    let d1 = palindromic_radii(&doubled, mirror);

    let mut axes = Vec::new();
    if n % 2 == 1 {
      // Every axis of an odd ring is centered on a vertex; the opposite
      // edge midpoint comes for free.
      let rad = (n - 1) / 2;
      let start = (n + 1) / 2;
      for c in start..start + n {
        if d1[c] > rad {
          axes.push(SymmetryAxis {
            index: c % n,
            through_vertex: true,
          });
        }
      }
    } else {
      // Vertex axes join vertex v to vertex v + n/2; each geometric axis
      // is reported once, at its lower index.
      let half = n / 2;
      for c in n..n + half {
        if d1[c] > half {
          axes.push(SymmetryAxis {
            index: c - n,
            through_vertex: true,
          });
        }
      }
      let d2 = even_palindromic_radii(&doubled, mirror);
      for e in 0..half {
        if d2[e + half + 1] >= half {
          axes.push(SymmetryAxis {
            index: e,
            through_vertex: false,
          });
        }
      }
    }
    axes.sort_by_key(|axis| (axis.index, !axis.through_vertex));
    axes
  }

  /// The geometric line of a symmetry axis, as the segment between the two
  /// boundary features it passes through (a vertex or an edge midpoint on
  /// each end).
  pub fn axis_segment(&self, axis: &SymmetryAxis) -> Segment<T> {
    let n = self.points.len();
    let half = n / 2;
    let mid = |e: usize| self.points[e].midpoint(&self.points[self.next(e)]);
    if n % 2 == 1 {
      let (v, e) = if axis.through_vertex {
        (axis.index % n, (axis.index + half) % n)
      } else {
        ((axis.index + half + 1) % n, axis.index % n)
      };
      Segment::new(self.points[v].clone(), mid(e))
    } else if axis.through_vertex {
      let v = axis.index % n;
      Segment::new(self.points[v].clone(), self.points[(v + half) % n].clone())
    } else {
      let e = axis.index % n;
      Segment::new(mid(e), mid((e + half) % n))
    }
  }

  /// Volume of the solid obtained by revolving the ring about the given
  /// mirror axis. Walks the profile on the left of the directed axis; each
  /// edge with both endpoints on that side (or on the axis) contributes a
  /// signed cone-frustum slice `pi * h * (r1^2 + r1*r2 + r2^2) / 3`, and
  /// the signed slices telescope to the enclosed volume. Geometrically
  /// meaningful only when the axis is a true mirror axis of the ring.
  pub fn rotational_volume_about(&self, axis: &SymmetryAxis) -> T {
    let seg = self.axis_segment(axis);
    let d = seg.direction();
    let len = d.magnitude();
    let mut total = T::zero();
    for s in self.iter_edges() {
      if seg.side(&s.src).is_cw() || seg.side(&s.dst).is_cw() {
        continue;
      }
      let r1 = seg.line_distance_to(&s.src);
      let r2 = seg.line_distance_to(&s.dst);
      let t1 = (&s.src - &seg.src).dot(&d) / len;
      let t2 = (&s.dst - &seg.src).dot(&d) / len;
      total = total + (t2 - t1) * (r1 * r1 + r1 * r2 + r2 * r2);
    }
    (total * T::PI() / T::from_constant(3)).abs()
  }

  /// Volume of the solid of revolution the ring describes around its own
  /// symmetry: no axis fails with [`Error::NoSymmetryAxis`]; exactly one
  /// axis revolves the profile about it; two or more axes make the shape a
  /// sphere equivalent whose radius is the farthest vertex distance from
  /// the axes' common point.
  pub fn rotational_volume(&self) -> Result<T, Error> {
    let axes = self.symmetry_axes();
    match axes.len() {
      0 => Err(Error::NoSymmetryAxis),
      1 => Ok(self.rotational_volume_about(&axes[0])),
      _ => {
        let center = self
          .axis_segment(&axes[0])
          .intersection_point(&self.axis_segment(&axes[1]))?;
        let r = self
          .points
          .iter()
          .map(|p| center.squared_distance_to(p))
          .fold(T::zero(), |acc, d| acc.max(d))
          .sqrt();
        let four_thirds = T::from_constant(4) / T::from_constant(3);
        Ok(four_thirds * T::PI() * r * r * r)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;

  use claims::{assert_err, assert_ok};
  use std::f64::consts::PI;

  fn square() -> Polygon<f64> {
    Polygon::new_unchecked(vec![
      Point::new(0.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(4.0, 4.0),
      Point::new(0.0, 4.0),
    ])
  }

  fn regular_ngon(n: usize) -> Polygon<f64> {
    let pts = (0..n)
      .map(|k| {
        let theta = 2.0 * PI * (k as f64) / (n as f64);
        Point::new(theta.cos(), theta.sin())
      })
      .collect();
    Polygon::new_unchecked(pts)
  }

  #[test]
  fn hexagon_has_six_axes() {
    let axes = regular_ngon(6).symmetry_axes();
    assert_eq!(axes.len(), 6);
    assert_eq!(axes.iter().filter(|a| a.through_vertex).count(), 3);
    assert_eq!(axes.iter().filter(|a| !a.through_vertex).count(), 3);
  }

  #[test]
  fn pentagon_has_five_vertex_axes() {
    let axes = regular_ngon(5).symmetry_axes();
    assert_eq!(axes.len(), 5);
    assert!(axes.iter().all(|a| a.through_vertex));
  }

  #[test]
  fn square_axes_and_their_lines() {
    let square = square();
    let axes = square.symmetry_axes();
    assert_eq!(axes.len(), 4);

    // The edge axis at the bottom edge is the vertical midline.
    let vertical = SymmetryAxis {
      index: 0,
      through_vertex: false,
    };
    assert!(axes.contains(&vertical));
    let seg = square.axis_segment(&vertical);
    assert!(seg.src.eq_tol(&Point::new(2.0, 0.0)));
    assert!(seg.dst.eq_tol(&Point::new(2.0, 4.0)));

    // Vertex axes are the diagonals.
    let diagonal = square.axis_segment(&SymmetryAxis {
      index: 0,
      through_vertex: true,
    });
    assert!(diagonal.src.eq_tol(&Point::new(0.0, 0.0)));
    assert!(diagonal.dst.eq_tol(&Point::new(4.0, 4.0)));
  }

  #[test]
  fn rectangle_has_two_edge_axes() {
    let rect = Polygon::new_unchecked(vec![
      Point::new(0.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(4.0, 2.0),
      Point::new(0.0, 2.0),
    ]);
    let axes = rect.symmetry_axes();
    assert_eq!(axes.len(), 2);
    assert!(axes.iter().all(|a| !a.through_vertex));
  }

  #[test]
  fn scalene_triangle_has_no_axis() {
    let tri = Polygon::new_unchecked(vec![
      Point::new(0.0, 0.0),
      Point::new(5.0, 0.0),
      Point::new(1.0, 2.0),
    ]);
    assert_eq!(tri.symmetry_axes(), Vec::new());
    assert_err!(tri.rotational_volume());
  }

  #[test]
  fn square_spun_about_vertical_axis_is_a_cylinder() {
    // Radius 2, height 4: pi * 2^2 * 4.
    let vol = square().rotational_volume_about(&SymmetryAxis {
      index: 0,
      through_vertex: false,
    });
    assert!((vol - 16.0 * PI).abs() < 1e-9, "{}", vol);
  }

  #[test]
  fn trapezoid_spins_into_a_cone_frustum() {
    // Isosceles trapezoid: exactly one axis, so the autonomous form
    // revolves about it. r1 = 2, r2 = 1, h = 3.
    let trapezoid = Polygon::new_unchecked(vec![
      Point::new(-2.0, 0.0),
      Point::new(2.0, 0.0),
      Point::new(1.0, 3.0),
      Point::new(-1.0, 3.0),
    ]);
    assert_eq!(trapezoid.symmetry_axes().len(), 1);
    let vol = assert_ok!(trapezoid.rotational_volume());
    assert!((vol - 7.0 * PI).abs() < 1e-9, "{}", vol);
  }

  #[test]
  fn isosceles_triangle_spins_into_a_cone() {
    let tri = Polygon::new_unchecked(vec![
      Point::new(-1.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(0.0, 2.0),
    ]);
    let axes = tri.symmetry_axes();
    assert_eq!(
      axes,
      vec![SymmetryAxis {
        index: 2,
        through_vertex: true
      }]
    );
    let vol = assert_ok!(tri.rotational_volume());
    assert!((vol - 2.0 * PI / 3.0).abs() < 1e-9, "{}", vol);
  }

  #[test]
  fn hexagon_with_many_axes_is_a_sphere() {
    // Unit circumradius: 4/3 * pi.
    let vol = assert_ok!(regular_ngon(6).rotational_volume());
    assert!((vol - 4.0 * PI / 3.0).abs() < 1e-9, "{}", vol);
  }
}
