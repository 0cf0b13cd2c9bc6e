// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use super::util::{result_tolerance, unwrap_or_panic};
use crate::error::{PolynomialError, Result};
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use num_traits::{CheckedMul, One};
use std::ops::{Mul, MulAssign};
use tracing::instrument;

impl<T: Coefficient> Polynomial<T> {
    /// Full convolution of the coefficients followed by degree reduction.
    ///
    /// Fails with [`PolynomialError::ArithmeticOverflow`] if an integer
    /// product or partial sum leaves the coefficient range.
    #[instrument(skip_all, level = "trace")]
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        let tolerance = result_tolerance(self, rhs, "multiplication");
        let degree = self.degree + rhs.degree;
        let mut retval = Self::zeroed(degree + 1, tolerance);
        retval.degree = degree;
        for l_index in 0..=self.degree {
            let l = self.coefficients[l_index];
            for r_index in 0..=rhs.degree {
                let index = l_index + r_index;
                let sum = l
                    .try_mul(&rhs.coefficients[r_index])
                    .and_then(|product| retval.coefficients[index].try_add(&product))
                    .ok_or_else(|| PolynomialError::overflow("multiplication"))?;
                retval.set(index, sum);
            }
        }
        retval.reduce_degree();
        Ok(retval)
    }
}

impl<'a, T: Coefficient> Mul for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    /// # Panics
    ///
    /// on integer overflow; see [`Polynomial::try_mul`]
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        unwrap_or_panic(self.try_mul(rhs))
    }
}

impl<'a, T: Coefficient> Mul<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

impl<'a, T: Coefficient> Mul<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: Coefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<'a, T: Coefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Coefficient> CheckedMul for Polynomial<T> {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.try_mul(rhs).ok()
    }
}

impl<T: Coefficient + One> One for Polynomial<T>
where
    T::Tolerance: Default,
{
    fn one() -> Self {
        let mut retval = Self::zeroed(1, Default::default());
        retval.coefficients[0] = T::one();
        retval
    }
}
