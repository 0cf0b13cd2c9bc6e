// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::config::{Exact, Tolerance};
use crate::util::group_thousands;
use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, Float, ToPrimitive, Zero};
use std::fmt;

/// Numeric kind a [`Polynomial`](crate::polynomial::Polynomial) can hold.
///
/// Integer kinds pair with [`Exact`] and report overflow; floating kinds pair
/// with [`Tolerance`] and never overflow.
pub trait Coefficient: Copy + PartialOrd + Zero + fmt::Debug {
    /// what decides whether a coefficient counts as zero
    type Tolerance: Copy + fmt::Debug + PartialEq;

    fn is_significant(&self, tolerance: &Self::Tolerance) -> bool;
    fn approx_eq(&self, rhs: &Self, tolerance: &Self::Tolerance) -> bool;
    /// `abs(self) == 1`, within tolerance for floating kinds
    fn is_unit_magnitude(&self, tolerance: &Self::Tolerance) -> bool;
    fn try_neg(&self) -> Option<Self>;
    fn try_add(&self, rhs: &Self) -> Option<Self>;
    fn try_mul(&self, rhs: &Self) -> Option<Self>;
    fn to_f64_lossy(&self) -> f64;
    /// per-coefficient input to the polynomial hash; values equal under
    /// [`Coefficient::approx_eq`] must produce the same key
    fn hash_key(&self) -> u64;
    /// `abs(self)` with thousands grouping, e.g. `1,234`
    fn format_magnitude(&self) -> String;
}

macro_rules! impl_integer_coefficient {
    ($($t:ty),*) => {
        $(
            impl Coefficient for $t {
                type Tolerance = Exact;
                fn is_significant(&self, _tolerance: &Exact) -> bool {
                    *self != 0
                }
                fn approx_eq(&self, rhs: &Self, _tolerance: &Exact) -> bool {
                    self == rhs
                }
                fn is_unit_magnitude(&self, _tolerance: &Exact) -> bool {
                    *self == 1 || *self == -1
                }
                fn try_neg(&self) -> Option<Self> {
                    CheckedNeg::checked_neg(self)
                }
                fn try_add(&self, rhs: &Self) -> Option<Self> {
                    CheckedAdd::checked_add(self, rhs)
                }
                fn try_mul(&self, rhs: &Self) -> Option<Self> {
                    CheckedMul::checked_mul(self, rhs)
                }
                fn to_f64_lossy(&self) -> f64 {
                    ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
                }
                fn hash_key(&self) -> u64 {
                    *self as i128 as u64
                }
                fn format_magnitude(&self) -> String {
                    group_thousands(&self.unsigned_abs().to_string())
                }
            }
        )*
    };
}

impl_integer_coefficient!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_coefficient {
    ($($t:ty),*) => {
        $(
            impl Coefficient for $t {
                type Tolerance = Tolerance;
                fn is_significant(&self, tolerance: &Tolerance) -> bool {
                    (Float::abs(*self) as f64) > tolerance.get()
                }
                fn approx_eq(&self, rhs: &Self, tolerance: &Tolerance) -> bool {
                    (Float::abs(*self - *rhs) as f64) <= tolerance.get()
                }
                fn is_unit_magnitude(&self, tolerance: &Tolerance) -> bool {
                    (Float::abs(*self) - 1.0).approx_eq(&0.0, tolerance)
                }
                fn try_neg(&self) -> Option<Self> {
                    Some(-*self)
                }
                fn try_add(&self, rhs: &Self) -> Option<Self> {
                    Some(*self + *rhs)
                }
                fn try_mul(&self, rhs: &Self) -> Option<Self> {
                    Some(*self * *rhs)
                }
                fn to_f64_lossy(&self) -> f64 {
                    *self as f64
                }
                fn hash_key(&self) -> u64 {
                    // tolerance equality is not transitive, so no bit pattern
                    // can be hashed consistently with it
                    0
                }
                fn format_magnitude(&self) -> String {
                    let digits = Float::abs(*self).to_string();
                    match digits.find('.') {
                        Some(point) => {
                            let mut retval = group_thousands(&digits[..point]);
                            retval.push_str(&digits[point..]);
                            retval
                        }
                        None => group_thousands(&digits),
                    }
                }
            }
        )*
    };
}

impl_float_coefficient!(f32, f64);

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coefficient() {
        assert!(5i32.is_significant(&Exact));
        assert!(!0i64.is_significant(&Exact));
        assert!((-1i8).is_unit_magnitude(&Exact));
        assert!(!2i8.is_unit_magnitude(&Exact));
        assert_eq!(i32::MIN.try_neg(), None);
        assert_eq!(i32::MAX.try_add(&1), None);
        assert_eq!(i64::MAX.try_mul(&2), None);
        assert_eq!(7i16.try_mul(&-3), Some(-21));
        assert_eq!((-1234567i32).format_magnitude(), "1,234,567");
        assert_eq!(i8::MIN.format_magnitude(), "128");
        assert_eq!((-3i64).hash_key(), (-3i32).hash_key());
    }

    #[test]
    fn test_float_coefficient() {
        let tolerance = Tolerance::new(1e-6).unwrap();
        assert!(1e-3f64.is_significant(&tolerance));
        assert!(!1e-7f64.is_significant(&tolerance));
        assert!(!(-1e-6f64).is_significant(&tolerance));
        assert!(1.0f64.approx_eq(&1.0000001, &tolerance));
        assert!((-1.0000001f64).is_unit_magnitude(&tolerance));
        assert!(!0.5f32.is_unit_magnitude(&tolerance));
        assert_eq!(1234567.25f64.format_magnitude(), "1,234,567.25");
        assert_eq!((-12.0f64).format_magnitude(), "12");
        assert_eq!(0.5f64.format_magnitude(), "0.5");
        assert_eq!(1.0f64.hash_key(), 1.0000001f64.hash_key());
    }
}
