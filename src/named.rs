// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Function forms of the polynomial operations that accept absent operands.
//!
//! These exist for callers that carry polynomials as `Option`s (for example
//! values pulled from a lookup) and want a [`PolynomialError::NullReference`]
//! rather than an `unwrap`. Absent operands are reported left to right.

use crate::error::{PolynomialError, Result};
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;

fn require<'a, T>(value: Option<&'a T>, argument: &'static str) -> Result<&'a T> {
    value.ok_or_else(|| PolynomialError::null(argument))
}

/// Fails with [`PolynomialError::NullReference`] if `coefficients` is absent
/// and [`PolynomialError::InvalidArgument`] if it is empty.
pub fn from_coefficients<T: Coefficient>(
    coefficients: Option<&[T]>,
    tolerance: T::Tolerance,
) -> Result<Polynomial<T>> {
    let coefficients = coefficients.ok_or_else(|| PolynomialError::null("coefficients"))?;
    Polynomial::from_coefficients_with(coefficients, tolerance)
}

/// Fails with [`PolynomialError::InvalidArgument`] if `capacity <= 0`.
pub fn with_capacity<T: Coefficient>(
    capacity: isize,
    tolerance: T::Tolerance,
) -> Result<Polynomial<T>> {
    if capacity <= 0 {
        return Err(PolynomialError::InvalidArgument(format!(
            "capacity {} cannot be less or equal to zero",
            capacity
        )));
    }
    Polynomial::with_capacity_with(capacity as usize, tolerance)
}

pub fn copy_of<T: Coefficient>(source: Option<&Polynomial<T>>) -> Result<Polynomial<T>> {
    Ok(require(source, "source")?.copy_of())
}

/// unary `+`
pub fn identity<T: Coefficient>(operand: Option<&Polynomial<T>>) -> Result<&Polynomial<T>> {
    require(operand, "operand")
}

pub fn negate<T: Coefficient>(operand: Option<&Polynomial<T>>) -> Result<Polynomial<T>> {
    require(operand, "operand")?.try_neg()
}

pub fn add<T: Coefficient>(
    left: Option<&Polynomial<T>>,
    right: Option<&Polynomial<T>>,
) -> Result<Polynomial<T>> {
    require(left, "left")?.try_add(require(right, "right")?)
}

pub fn subtract<T: Coefficient>(
    left: Option<&Polynomial<T>>,
    right: Option<&Polynomial<T>>,
) -> Result<Polynomial<T>> {
    require(left, "left")?.try_sub(require(right, "right")?)
}

pub fn multiply<T: Coefficient>(
    left: Option<&Polynomial<T>>,
    right: Option<&Polynomial<T>>,
) -> Result<Polynomial<T>> {
    require(left, "left")?.try_mul(require(right, "right")?)
}
