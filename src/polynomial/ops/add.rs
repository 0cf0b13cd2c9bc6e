// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use super::util::{result_tolerance, unwrap_or_panic};
use crate::error::{PolynomialError, Result};
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use num_traits::{CheckedAdd, Zero};
use std::cmp::max;
use std::ops::{Add, AddAssign};

impl<T: Coefficient> Polynomial<T> {
    /// Pairwise sum followed by degree reduction.
    ///
    /// Fails with [`PolynomialError::ArithmeticOverflow`] if an integer sum
    /// leaves the coefficient range.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        let tolerance = result_tolerance(self, rhs, "addition");
        let degree = max(self.degree, rhs.degree);
        let mut retval = Self::zeroed(degree + 1, tolerance);
        retval.degree = degree;
        for power in 0..=degree {
            let sum = self
                .coefficient(power)
                .try_add(&rhs.coefficient(power))
                .ok_or_else(|| PolynomialError::overflow("addition"))?;
            retval.set(power, sum);
        }
        retval.reduce_degree();
        Ok(retval)
    }
}

impl<T: Coefficient> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self + &rhs;
    }
}

impl<'a, T: Coefficient> AddAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Polynomial<T>) -> Self::Output {
        &self + &rhs
    }
}

impl<'a, T: Coefficient> Add<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: &'a Polynomial<T>) -> Self::Output {
        &self + rhs
    }
}

impl<'a, T: Coefficient> Add<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Polynomial<T>) -> Self::Output {
        self + &rhs
    }
}

impl<'a, T: Coefficient> Add for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    /// # Panics
    ///
    /// on integer overflow; see [`Polynomial::try_add`]
    fn add(self, rhs: Self) -> Self::Output {
        unwrap_or_panic(self.try_add(rhs))
    }
}

impl<T: Coefficient> CheckedAdd for Polynomial<T> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.try_add(rhs).ok()
    }
}

impl<T: Coefficient> Zero for Polynomial<T>
where
    T::Tolerance: Default,
{
    fn zero() -> Self {
        Self::zeroed(1, Default::default())
    }
    fn set_zero(&mut self) {
        for coefficient in self.coefficients.iter_mut() {
            coefficient.set_zero();
        }
        self.degree = 0;
    }
    fn is_zero(&self) -> bool {
        self.degree == 0 && !self.is_significant(&self.coefficients[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tolerance;
    use crate::polynomial::ops::util::tests::test_op_helper;

    fn poly(coefficients: &[i32]) -> Polynomial<i32> {
        Polynomial::from_coefficients(coefficients).unwrap()
    }

    #[test]
    fn test_add() {
        let test = |l: &[i32], r: &[i32], expected: &[i32]| {
            test_op_helper(
                poly(l),
                poly(r),
                &poly(expected),
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                CheckedAdd::checked_add,
            );
        };
        test(&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]);
        test(&[0, 0, 0], &[1, 2, 3, 4], &[1, 2, 3, 4]);
        test(&[1, 2, 3, 4], &[0, 0, 0], &[1, 2, 3, 4]);
        test(&[3, 2, 1], &[1, 2, 3, 4], &[4, 4, 4, 4]);
        test(&[-1, -2, -3, 0, 5], &[1, 2, 3, 4], &[0, 0, 0, 4, 5]);
    }

    #[test]
    fn test_add_reduces_degree() {
        let p = poly(&[1, 1]);
        let sum = &p + &-&p;
        assert_eq!(sum.degree(), 0);
        assert_eq!(sum.capacity(), 2);
        assert_eq!(sum.coefficient(0), 0);
        assert!(sum.is_zero());
        assert_eq!(sum.to_string(), "0");

        let sum = poly(&[1, 2, 3, 4]) + poly(&[0, 0, 1, -4]);
        assert_eq!(sum.degree(), 2);
        assert_eq!(sum.coefficients(), &[1, 2, 4]);
    }

    #[test]
    fn test_add_float_cancellation() {
        let tolerance = Tolerance::new(1e-6).unwrap();
        let l = Polynomial::from_coefficients_with(&[1.0, 0.1, 0.3], tolerance).unwrap();
        let r = Polynomial::from_coefficients_with(&[1.0, 0.2, -0.3 + 1e-9], tolerance).unwrap();
        let sum = l + r;
        assert_eq!(sum.degree(), 1);
        assert_eq!(sum.to_string(), "0.30000000000000004x + 2");
    }

    #[test]
    fn test_add_overflow() {
        let l = poly(&[1, i32::MAX]);
        let r = poly(&[1, 1]);
        assert!(matches!(
            l.try_add(&r),
            Err(PolynomialError::ArithmeticOverflow { operation: "addition" })
        ));
        assert_eq!(CheckedAdd::checked_add(&l, &r), None);
    }

    #[test]
    fn test_zero() {
        let mut p = poly(&[4, 5, 6]);
        assert!(!p.is_zero());
        p.set_zero();
        assert!(p.is_zero());
        assert_eq!(p.capacity(), 3);
        assert_eq!(p, Polynomial::zero());
        assert_eq!(poly(&[7, 8]) + Polynomial::zero(), poly(&[7, 8]));
    }
}
