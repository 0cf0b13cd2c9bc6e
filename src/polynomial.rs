// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::{PolynomialError, Result};
use crate::traits::{Coefficient, PolynomialEval};
use crate::util::Sign;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;
use tracing::trace;

mod ops;

/// A dense single-variable polynomial.
///
/// the term at index `n` is `self.coefficient(n) * pow(x, n)`
///
/// # Invariants
///
/// * every coefficient above `self.degree()` is logically zero: it is either
///   zero or insignificant under `self.tolerance()`
/// * `self.capacity() >= self.degree() + 1`
pub struct Polynomial<T: Coefficient> {
    coefficients: Vec<T>,
    degree: usize,
    tolerance: T::Tolerance,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a polynomial whose coefficient of `x^n` is `coefficients[n]`.
    ///
    /// Fails with [`PolynomialError::InvalidArgument`] if `coefficients` is
    /// empty.
    pub fn from_coefficients_with(coefficients: &[T], tolerance: T::Tolerance) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(PolynomialError::InvalidArgument(
                "coefficients length must be greater than zero".into(),
            ));
        }
        let mut retval = Self::zeroed(coefficients.len(), tolerance);
        for (power, coefficient) in coefficients.iter().enumerate() {
            retval.set(power, *coefficient);
        }
        Ok(retval)
    }
    /// Creates the zero polynomial backed by `capacity` coefficients.
    ///
    /// Fails with [`PolynomialError::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity_with(capacity: usize, tolerance: T::Tolerance) -> Result<Self> {
        if capacity == 0 {
            return Err(PolynomialError::InvalidArgument(
                "capacity cannot be less or equal to zero".into(),
            ));
        }
        Ok(Self::zeroed(capacity, tolerance))
    }
    fn zeroed(capacity: usize, tolerance: T::Tolerance) -> Self {
        debug_assert!(capacity > 0);
        Self {
            coefficients: vec![T::zero(); capacity],
            degree: 0,
            tolerance,
        }
    }
    /// Deep copy with the same capacity, degree and tolerance.
    pub fn copy_of(&self) -> Self {
        let mut retval = Self::zeroed(self.capacity(), self.tolerance);
        retval.coefficients[..=self.degree].copy_from_slice(self.coefficients());
        retval.degree = self.degree;
        retval
    }
    pub fn degree(&self) -> usize {
        self.degree
    }
    /// length of the backing buffer
    pub fn capacity(&self) -> usize {
        self.coefficients.len()
    }
    pub fn tolerance(&self) -> T::Tolerance {
        self.tolerance
    }
    /// coefficients of `x^0` through `x^degree`
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients[..=self.degree]
    }
    pub fn iter(&self) -> slice::Iter<T> {
        self.coefficients().iter()
    }
    /// Coefficient of `x^power`, zero above the degree.
    ///
    /// Fails with [`PolynomialError::IndexOutOfRange`] if `power` is negative.
    pub fn get(&self, power: isize) -> Result<T> {
        if power < 0 {
            return Err(PolynomialError::IndexOutOfRange { power });
        }
        Ok(self.coefficient(power as usize))
    }
    /// Coefficient of `x^power`, zero above the degree.
    pub fn coefficient(&self, power: usize) -> T {
        if power > self.degree {
            T::zero()
        } else {
            self.coefficients[power]
        }
    }
    /// Writes a coefficient, growing the buffer to `2 * power + 1` if needed.
    ///
    /// Raises the degree when a significant value lands above it but never
    /// lowers it; see [`Polynomial::reduce_degree`].
    pub(crate) fn set(&mut self, power: usize, value: T) {
        if power >= self.capacity() {
            self.coefficients.resize(2 * power + 1, T::zero());
        }
        self.coefficients[power] = value;
        if power > self.degree && self.is_significant(&value) {
            self.degree = power;
        }
    }
    /// Lowers the degree past insignificant leading coefficients. The buffer
    /// keeps its length.
    pub(crate) fn reduce_degree(&mut self) {
        let original = self.degree;
        while self.degree > 0 && !self.is_significant(&self.coefficients[self.degree]) {
            self.degree -= 1;
        }
        if self.degree != original {
            trace!(from = original, to = self.degree, "reduced polynomial degree");
        }
    }
    pub(crate) fn is_significant(&self, value: &T) -> bool {
        value.is_significant(&self.tolerance)
    }
    fn significant_sign(&self, value: &T) -> Option<Sign> {
        if self.is_significant(value) {
            Sign::new(value)
        } else {
            None
        }
    }
    /// Computes `P(x)`, accumulating from the highest power down and skipping
    /// insignificant terms.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut retval = 0.0;
        for (power, coefficient) in self.iter().enumerate().rev() {
            if self.is_significant(coefficient) {
                retval += x.powi(power as i32) * coefficient.to_f64_lossy();
            }
        }
        retval
    }
    /// Order-sensitive mix of the coefficients `0..=degree` and the degree.
    pub fn hash_code(&self) -> u64 {
        let hash = self.iter().fold(0u64, |hash, coefficient| {
            (hash << 5).wrapping_add(hash) ^ coefficient.hash_key()
        });
        hash.wrapping_mul(397) ^ self.degree as u64
    }
}

impl<T: Coefficient> Polynomial<T>
where
    T::Tolerance: Default,
{
    /// [`Polynomial::from_coefficients_with`] using the default (exact) tolerance
    pub fn from_coefficients(coefficients: &[T]) -> Result<Self> {
        Self::from_coefficients_with(coefficients, Default::default())
    }
    /// [`Polynomial::with_capacity_with`] using the default (exact) tolerance
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_with(capacity, Default::default())
    }
}

impl<T: Coefficient> TryFrom<Vec<T>> for Polynomial<T>
where
    T::Tolerance: Default,
{
    type Error = PolynomialError;
    fn try_from(coefficients: Vec<T>) -> Result<Self> {
        Self::from_coefficients(&coefficients)
    }
}

impl<T: Coefficient> Clone for Polynomial<T> {
    fn clone(&self) -> Self {
        self.copy_of()
    }
}

impl<T: Coefficient> fmt::Debug for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("coefficients", &self.coefficients())
            .field("degree", &self.degree)
            .field("capacity", &self.capacity())
            .field("tolerance", &self.tolerance)
            .finish()
    }
}

impl<T: Coefficient> PartialEq for Polynomial<T> {
    /// tolerances and degrees match and every coefficient `0..=degree`
    /// agrees under that tolerance
    fn eq(&self, rhs: &Self) -> bool {
        self.tolerance == rhs.tolerance
            && self.degree == rhs.degree
            && self
                .iter()
                .zip(rhs.iter())
                .all(|(l, r)| l.approx_eq(r, &self.tolerance))
    }
}

impl<T: Coefficient<Tolerance = crate::config::Exact> + Eq> Eq for Polynomial<T> {}

impl<T: Coefficient> Hash for Polynomial<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<'a, T: Coefficient> PolynomialEval<f64> for &'a Polynomial<T> {
    fn eval(self, x: &f64) -> f64 {
        self.evaluate(*x)
    }
}

impl<'a, T: Coefficient> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Coefficient> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let leading = self.coefficient(self.degree);
        match self.significant_sign(&leading) {
            None => return write!(f, "0"),
            Some(Sign::Negative) => write!(f, "-{}", leading.format_magnitude())?,
            Some(Sign::Positive) => write!(f, "{}", leading.format_magnitude())?,
        }
        match self.degree {
            0 => {}
            1 => write!(f, "x")?,
            degree => write!(f, "x^{}", degree)?,
        }
        for power in (0..self.degree).rev() {
            let coefficient = self.coefficients[power];
            let sign = match self.significant_sign(&coefficient) {
                Some(sign) => sign,
                None => continue,
            };
            f.write_str(sign.separator())?;
            if power == 0 || !coefficient.is_unit_magnitude(&self.tolerance) {
                f.write_str(&coefficient.format_magnitude())?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
        }
        Ok(())
    }
}
