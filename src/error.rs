// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use thiserror::Error;

/// Result type alias using [`PolynomialError`]
pub type Result<T> = std::result::Result<T, PolynomialError>;

/// Errors raised by polynomial construction, access and arithmetic.
///
/// All of these indicate a programming error at the call site; nothing in
/// this crate retries or recovers from them.
#[derive(Error, Debug)]
pub enum PolynomialError {
    /// A required operand was absent
    #[error("{argument} cannot be absent")]
    NullReference {
        /// name of the missing argument
        argument: &'static str,
    },

    /// An argument was present but unusable
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A negative power was requested
    #[error("power {power} cannot be less than zero")]
    IndexOutOfRange {
        /// the requested power
        power: isize,
    },

    /// Integer coefficient arithmetic left the representable range
    #[error("arithmetic overflow in polynomial {operation}")]
    ArithmeticOverflow {
        /// the operation that overflowed
        operation: &'static str,
    },

    /// The tolerance setting could not be turned into a [`Tolerance`](crate::config::Tolerance)
    #[error("configuration error: {reason}")]
    ConfigurationError {
        /// what was wrong with the setting
        reason: String,
        /// the parse or range error behind `reason`
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl PolynomialError {
    pub(crate) fn null(argument: &'static str) -> Self {
        PolynomialError::NullReference { argument }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        PolynomialError::ArithmeticOverflow { operation }
    }

    pub(crate) fn configuration<E>(reason: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PolynomialError::ConfigurationError {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }
}
