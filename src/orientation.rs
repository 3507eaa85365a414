use std::cmp::Ordering;

use crate::data::Point;
use crate::GeoScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Classified through the sign of the cross product
  /// `(p2 - p1) x (p3 - p1)`, so collinearity is tolerance-based on the
  /// floating instantiations and exact on the integer ones.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use planar::data::Point;
  /// # use planar::Orientation;
  /// let p1 = Point::new(0, 0);
  /// let p2 = Point::new(0, 1); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0, 2)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1, 2)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1, 2)).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: GeoScalar,
  {
    Orientation::from_sign((p2 - p1).cross(&(p3 - p1)).sgn())
  }

  /// Turn corresponding to a sign produced by [`GeoScalar::sgn`]:
  /// positive cross products are counter-clockwise.
  pub fn from_sign(sign: Ordering) -> Orientation {
    match sign {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::data::Point;

  #[test]
  fn turns() {
    assert_eq!(
      Orientation::new(&Point::new(0, 0), &Point::new(1, 1), &Point::new(2, 2)),
      Orientation::CoLinear
    );
    assert_eq!(
      Orientation::new(&Point::new(0, 0), &Point::new(0, 1), &Point::new(2, 2)),
      Orientation::ClockWise
    );
    assert_eq!(
      Orientation::new(&Point::new(0, 0), &Point::new(0, 1), &Point::new(-2, 2)),
      Orientation::CounterClockWise
    );
    assert_eq!(
      Orientation::new(&Point::new(0, 0), &Point::new(0, 0), &Point::new(0, 0)),
      Orientation::CoLinear
    );
  }

  #[test]
  fn near_colinear_f64() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(1.0, 1.0);
    let p3 = Point::new(2.0, 2.0 + 1e-12);
    assert_eq!(Orientation::new(&p1, &p2, &p3), Orientation::CoLinear);
  }

  #[test]
  fn reverse_turns() {
    let abc = Orientation::new(&Point::new(0, 0), &Point::new(2, 1), &Point::new(3, 3));
    let cba = Orientation::new(&Point::new(3, 3), &Point::new(2, 1), &Point::new(0, 0));
    assert_eq!(abc, cba.reverse());
  }
}
