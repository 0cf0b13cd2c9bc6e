// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Dense single-variable polynomials over integer or floating coefficients.
//!
//! Integer polynomials treat every non-zero coefficient as significant and
//! report overflow instead of wrapping. Floating polynomials carry a
//! [`Tolerance`] and treat coefficients whose magnitude does not exceed it as
//! zero.
//!
//! ```
//! use dense_polynomial::Polynomial;
//!
//! let p = Polynomial::from_coefficients(&[3, 2, 1]).unwrap();
//! let q = Polynomial::from_coefficients(&[1, 2, 4]).unwrap();
//! assert_eq!((&p * &q).to_string(), "4x^4 + 10x^3 + 17x^2 + 8x + 3");
//! assert_eq!(p.evaluate(2.0), 11.0);
//! ```
pub mod config;
pub mod error;
pub mod named;
pub mod polynomial;
pub mod prelude;
pub mod traits;
pub mod util;

#[cfg(test)]
mod proptests;

pub use config::{Exact, Tolerance};
pub use error::{PolynomialError, Result};
pub use polynomial::Polynomial;
