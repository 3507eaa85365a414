use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::matrix::MatrixField;

/// Integer in the ring Z/M. The value is kept reduced into `[0, M)`;
/// negative inputs wrap. `M` must be prime for [`ModInt::inv`] (and
/// therefore division) to be correct, and must fit in 62 bits so sums
/// never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModInt<const M: u64>(u64);

/// The modulus most counting problems ask for.
pub type Mint = ModInt<998_244_353>;

impl<const M: u64> ModInt<M> {
  pub fn new(value: i64) -> ModInt<M> {
    ModInt(value.rem_euclid(M as i64) as u64)
  }

  pub fn value(self) -> u64 {
    self.0
  }

  /// Binary exponentiation; negative exponents go through the inverse.
  pub fn pow(self, exp: i64) -> ModInt<M> {
    if exp < 0 {
      self.inv().pow_unsigned(exp.unsigned_abs())
    } else {
      self.pow_unsigned(exp as u64)
    }
  }

  fn pow_unsigned(self, mut exp: u64) -> ModInt<M> {
    let mut res = ModInt(1 % M);
    let mut base = self;
    while exp > 0 {
      if exp & 1 == 1 {
        res = res * base;
      }
      base = base * base;
      exp >>= 1;
    }
    res
  }

  /// Multiplicative inverse by Fermat's little theorem.
  pub fn inv(self) -> ModInt<M> {
    self.pow_unsigned(M - 2)
  }
}

impl<const M: u64> Add for ModInt<M> {
  type Output = ModInt<M>;
  fn add(self, other: ModInt<M>) -> ModInt<M> {
    let t = self.0 + other.0;
    ModInt(if t < M { t } else { t - M })
  }
}

impl<const M: u64> Sub for ModInt<M> {
  type Output = ModInt<M>;
  fn sub(self, other: ModInt<M>) -> ModInt<M> {
    ModInt(if self.0 >= other.0 {
      self.0 - other.0
    } else {
      self.0 + M - other.0
    })
  }
}

impl<const M: u64> Mul for ModInt<M> {
  type Output = ModInt<M>;
  fn mul(self, other: ModInt<M>) -> ModInt<M> {
    ModInt((u128::from(self.0) * u128::from(other.0) % u128::from(M)) as u64)
  }
}

impl<const M: u64> Div for ModInt<M> {
  type Output = ModInt<M>;
  fn div(self, other: ModInt<M>) -> ModInt<M> {
    self * other.inv()
  }
}

impl<const M: u64> Neg for ModInt<M> {
  type Output = ModInt<M>;
  fn neg(self) -> ModInt<M> {
    ModInt::zero() - self
  }
}

impl<const M: u64> AddAssign for ModInt<M> {
  fn add_assign(&mut self, other: ModInt<M>) {
    *self = *self + other;
  }
}

impl<const M: u64> SubAssign for ModInt<M> {
  fn sub_assign(&mut self, other: ModInt<M>) {
    *self = *self - other;
  }
}

impl<const M: u64> MulAssign for ModInt<M> {
  fn mul_assign(&mut self, other: ModInt<M>) {
    *self = *self * other;
  }
}

impl<const M: u64> DivAssign for ModInt<M> {
  fn div_assign(&mut self, other: ModInt<M>) {
    *self = *self / other;
  }
}

impl<const M: u64> Zero for ModInt<M> {
  fn zero() -> ModInt<M> {
    ModInt(0)
  }
  fn is_zero(&self) -> bool {
    self.0 == 0
  }
}

impl<const M: u64> One for ModInt<M> {
  fn one() -> ModInt<M> {
    ModInt(1 % M)
  }
}

impl<const M: u64> MatrixField for ModInt<M> {
  fn recip(&self) -> ModInt<M> {
    self.inv()
  }
}

impl<const M: u64> From<u64> for ModInt<M> {
  fn from(value: u64) -> ModInt<M> {
    ModInt(value % M)
  }
}

impl<const M: u64> From<i64> for ModInt<M> {
  fn from(value: i64) -> ModInt<M> {
    ModInt::new(value)
  }
}

impl<const M: u64> fmt::Display for ModInt<M> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
