// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::Result;
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use tracing::warn;

/// binary results carry `lhs.tolerance()`
pub(crate) fn result_tolerance<T: Coefficient>(
    lhs: &Polynomial<T>,
    rhs: &Polynomial<T>,
    operation: &'static str,
) -> T::Tolerance {
    if lhs.tolerance != rhs.tolerance {
        warn!(
            operation,
            lhs = ?lhs.tolerance,
            rhs = ?rhs.tolerance,
            "operands have different tolerances, using the left one"
        );
    }
    lhs.tolerance
}

/// `std::ops` impls can't report overflow, so they panic the way integer
/// operators do
pub(crate) fn unwrap_or_panic<T: Coefficient>(result: Result<Polynomial<T>>) -> Polynomial<T> {
    match result {
        Ok(retval) => retval,
        Err(err) => panic!("{}", err),
    }
}
