// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use super::util::unwrap_or_panic;
use crate::error::Result;
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use num_traits::CheckedSub;
use std::ops::{Sub, SubAssign};

impl<T: Coefficient> Polynomial<T> {
    /// `self + (-rhs)`
    ///
    /// An integer `rhs` coefficient equal to its type's minimum can't be
    /// negated, so it is reported as
    /// [`ArithmeticOverflow`](crate::error::PolynomialError::ArithmeticOverflow)
    /// even when the true difference fits.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.try_add(&rhs.try_neg()?)
    }
}

impl<T: Coefficient> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self - &rhs;
    }
}

impl<'a, T: Coefficient> SubAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self - rhs;
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Self::Output {
        &self - &rhs
    }
}

impl<'a, T: Coefficient> Sub<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: &'a Polynomial<T>) -> Self::Output {
        &self - rhs
    }
}

impl<'a, T: Coefficient> Sub<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Self::Output {
        self - &rhs
    }
}

impl<'a, T: Coefficient> Sub for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    /// # Panics
    ///
    /// on integer overflow; see [`Polynomial::try_sub`]
    fn sub(self, rhs: Self) -> Self::Output {
        unwrap_or_panic(self.try_sub(rhs))
    }
}

impl<T: Coefficient> CheckedSub for Polynomial<T> {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.try_sub(rhs).ok()
    }
}
