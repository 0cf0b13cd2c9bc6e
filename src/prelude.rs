// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    config::{Exact, Tolerance},
    polynomial::Polynomial,
    traits::{Coefficient as _, PolynomialEval as _},
};
pub use num_traits::{
    CheckedAdd as _, CheckedMul as _, CheckedNeg as _, CheckedSub as _, One as _, Zero as _,
};
