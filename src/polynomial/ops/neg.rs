// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use super::util::unwrap_or_panic;
use crate::error::{PolynomialError, Result};
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use num_traits::CheckedNeg;
use std::ops::Neg;

impl<T: Coefficient> Polynomial<T> {
    /// Negates every coefficient up to the degree.
    ///
    /// Fails with [`PolynomialError::ArithmeticOverflow`] when an integer
    /// coefficient is the minimum value of its type.
    pub fn try_neg(&self) -> Result<Self> {
        let mut retval = self.copy_of();
        for power in 0..=retval.degree {
            let negated = retval.coefficients[power]
                .try_neg()
                .ok_or_else(|| PolynomialError::overflow("negation"))?;
            retval.coefficients[power] = negated;
        }
        Ok(retval)
    }
}

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Polynomial<T>;
    /// # Panics
    ///
    /// on integer overflow; see [`Polynomial::try_neg`]
    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

impl<'a, T: Coefficient> Neg for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        unwrap_or_panic(self.try_neg())
    }
}

impl<T: Coefficient> CheckedNeg for Polynomial<T> {
    fn checked_neg(&self) -> Option<Self> {
        self.try_neg().ok()
    }
}
