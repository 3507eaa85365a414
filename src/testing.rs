// Proptest strategies shared by the unit tests. Coordinate ranges are kept
// small enough that integer cross products cannot overflow and float
// results stay far from the tolerance threshold.
use crate::data::{Point, Polygon};

use proptest::collection::vec;
use proptest::prelude::*;

pub fn any_point_i64() -> impl Strategy<Value = Point<i64>> {
  (-100i64..100, -100i64..100).prop_map(|(x, y)| Point::new(x, y))
}

pub fn any_point_f64() -> impl Strategy<Value = Point<f64>> {
  (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| Point::new(x, y))
}

pub fn point_cloud_i64() -> impl Strategy<Value = Vec<Point<i64>>> {
  vec(any_point_i64(), 1..20)
}

pub fn point_cloud_f64() -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_point_f64(), 1..20)
}

// An arbitrary vertex ring: not necessarily simple or CCW, which is what
// the ring-level invariant tests want.
pub fn any_polygon_i64() -> impl Strategy<Value = Polygon<i64>> {
  vec(any_point_i64(), 3..16).prop_map(Polygon::new_unchecked)
}
