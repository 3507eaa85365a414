use num_traits::{One, Zero};
use std::ops::AddAssign;
use std::ops::Index;
use std::ops::IndexMut;
use std::ops::Mul;
use std::ops::SubAssign;

use crate::Error;

pub trait MatrixMul: Clone + Zero + AddAssign + Mul<Self, Output = Self> {}

impl<T> MatrixMul for T where T: Clone + Zero + AddAssign + Mul<Self, Output = Self> {}

/// Field operations needed by Gauss-Jordan elimination. Implemented by the
/// floating scalars and by [`ModInt`](crate::ModInt), so matrices over
/// either invert with the same code.
pub trait MatrixField: MatrixMul + One + PartialEq + SubAssign {
  /// Multiplicative inverse. Only called on non-zero values.
  fn recip(&self) -> Self;
}

impl MatrixField for f32 {
  fn recip(&self) -> f32 {
    1.0 / self
  }
}

impl MatrixField for f64 {
  fn recip(&self) -> f64 {
    1.0 / self
  }
}

/// Dense row-major matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
  nrows: usize,
  ncols: usize,
  elements: Vec<T>,
}

impl<T> Matrix<T> {
  pub fn new(nrows: usize, ncols: usize) -> Matrix<T>
  where
    T: Zero,
  {
    let mut vec = Vec::with_capacity(nrows * ncols);
    for _i in 0..nrows * ncols {
      vec.push(T::zero())
    }
    Matrix {
      nrows,
      ncols,
      elements: vec,
    }
  }

  pub fn from_rows(rows: Vec<Vec<T>>) -> Matrix<T> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    let elements: Vec<T> = rows
      .into_iter()
      .flat_map(|row| {
        assert_eq!(row.len(), ncols);
        row
      })
      .collect();
    Matrix {
      nrows,
      ncols,
      elements,
    }
  }

  pub fn identity(n: usize) -> Matrix<T>
  where
    T: Zero + One,
  {
    let mut out = Matrix::new(n, n);
    for i in 0..n {
      out[(i, i)] = T::one();
    }
    out
  }

  fn validate(&self) {
    assert_eq!(self.elements.len(), self.nrows * self.ncols)
  }

  pub fn nrows(&self) -> usize {
    self.nrows
  }

  pub fn ncols(&self) -> usize {
    self.ncols
  }

  fn swap_rows(&mut self, a: usize, b: usize) {
    if a == b {
      return;
    }
    for j in 0..self.ncols {
      self.elements.swap(a * self.ncols + j, b * self.ncols + j);
    }
  }

  /// Matrix power by binary exponentiation. Square matrices only.
  pub fn pow(&self, mut exp: u64) -> Matrix<T>
  where
    T: MatrixMul + One,
  {
    assert_eq!(self.nrows, self.ncols);
    let mut out = Matrix::identity(self.nrows);
    let mut base = self.clone();
    while exp > 0 {
      if exp & 1 == 1 {
        out = &out * &base;
      }
      base = &base * &base;
      exp >>= 1;
    }
    out
  }

  /// Gauss-Jordan inverse, flagging singular inputs instead of producing
  /// garbage. Pivots are chosen as the first non-zero entry in the column,
  /// which is correct over any field.
  pub fn inverse(&self) -> Result<Matrix<T>, Error>
  where
    T: MatrixField,
  {
    assert_eq!(self.nrows, self.ncols);
    let n = self.nrows;
    let mut x = self.clone();
    let mut y: Matrix<T> = Matrix::identity(n);
    for i in 0..n {
      let pivot = (i..n)
        .find(|&k| x[(k, i)] != T::zero())
        .ok_or(Error::SingularMatrix)?;
      x.swap_rows(i, pivot);
      y.swap_rows(i, pivot);
      let scale = x[(i, i)].recip();
      for j in 0..n {
        x[(i, j)] = x[(i, j)].clone() * scale.clone();
        y[(i, j)] = y[(i, j)].clone() * scale.clone();
      }
      for k in 0..n {
        if k == i {
          continue;
        }
        let w = x[(k, i)].clone();
        if w == T::zero() {
          continue;
        }
        for j in 0..n {
          let xv = x[(i, j)].clone() * w.clone();
          x[(k, j)] -= xv;
          let yv = y[(i, j)].clone() * w.clone();
          y[(k, j)] -= yv;
        }
      }
    }
    Ok(y)
  }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
  type Output = T;
  fn index(&self, key: (usize, usize)) -> &T {
    self.elements.index(key.0 * self.ncols + key.1)
  }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
  fn index_mut(&mut self, key: (usize, usize)) -> &mut T {
    self.elements.index_mut(key.0 * self.ncols + key.1)
  }
}

impl<'a, 'b, T> Mul<&'b Matrix<T>> for &'a Matrix<T>
where
  T: MatrixMul,
{
  type Output = Matrix<T>;
  // n*m * m*p = n*p
  fn mul(self, other: &Matrix<T>) -> Matrix<T> {
    let n = self.nrows;
    let m = self.ncols;
    let p = other.ncols;
    assert_eq!(self.ncols, other.nrows);
    let mut out = Matrix::new(n, p);
    for i in 0..n {
      for j in 0..p {
        for k in 0..m {
          out[(i, j)] += self[(i, k)].clone() * other[(k, j)].clone()
        }
      }
    }
    out.validate();
    out
  }
}

impl<'a, T> Mul<Matrix<T>> for &'a Matrix<T>
where
  T: MatrixMul,
{
  type Output = Matrix<T>;
  fn mul(self, other: Matrix<T>) -> Matrix<T> {
    self * &other
  }
}

impl<'a, T> Mul<&'a Matrix<T>> for Matrix<T>
where
  T: MatrixMul,
{
  type Output = Matrix<T>;
  fn mul(self, other: &Matrix<T>) -> Matrix<T> {
    &self * other
  }
}

impl<T> Mul<Matrix<T>> for Matrix<T>
where
  T: MatrixMul,
{
  type Output = Matrix<T>;
  fn mul(self, other: Matrix<T>) -> Matrix<T> {
    &self * &other
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Mint;

  use claims::{assert_err, assert_ok};

  #[test]
  fn multiply() {
    let a = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]]);
    let b = Matrix::from_rows(vec![vec![5i64, 6], vec![7, 8]]);
    let c = &a * &b;
    assert_eq!(c, Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]));
  }

  #[test]
  fn fibonacci_by_matrix_power() {
    let step = Matrix::from_rows(vec![vec![1u64, 1], vec![1, 0]]);
    let f = step.pow(10);
    // F(10) = 55, F(11) = 89.
    assert_eq!(f[(0, 0)], 89);
    assert_eq!(f[(0, 1)], 55);
    assert_eq!(step.pow(0), Matrix::identity(2));
  }

  #[test]
  fn inverse_of_float_matrix() {
    let a = Matrix::from_rows(vec![vec![4.0f64, 7.0], vec![2.0, 6.0]]);
    let inv = assert_ok!(a.inverse());
    let product = &a * &inv;
    for i in 0..2 {
      for j in 0..2 {
        let expect = if i == j { 1.0 } else { 0.0 };
        assert!((product[(i, j)] - expect).abs() < 1e-9);
      }
    }
  }

  #[test]
  fn inverse_needs_a_row_swap() {
    let a = Matrix::from_rows(vec![vec![0.0f64, 1.0], vec![1.0, 0.0]]);
    let inv = assert_ok!(a.inverse());
    assert_eq!(&a * &inv, Matrix::identity(2));
  }

  #[test]
  fn singular_matrix_is_flagged() {
    let a = Matrix::from_rows(vec![vec![1.0f64, 2.0], vec![2.0, 4.0]]);
    assert_err!(a.inverse());
  }

  #[test]
  fn inverse_over_a_prime_field() {
    let a = Matrix::from_rows(vec![
      vec![Mint::new(1), Mint::new(2)],
      vec![Mint::new(3), Mint::new(4)],
    ]);
    let inv = assert_ok!(a.inverse());
    assert_eq!(&a * &inv, Matrix::identity(2));
  }
}
