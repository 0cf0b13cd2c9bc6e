// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::{PolynomialError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// settings key the tolerance is read from by [`Tolerance::from_settings`]
pub const EPSILON_SETTING_KEY: &str = "epsilon";

/// Tolerance of integer coefficients: any non-zero value is significant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Exact;

/// Threshold at or below which a floating coefficient counts as zero.
///
/// # Invariants
///
/// `0 < self.get() < 1`
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

#[derive(Debug)]
struct OutOfRange(f64);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "epsilon {} must be positive and less than one", self.0)
    }
}

impl std::error::Error for OutOfRange {}

#[derive(Debug)]
struct MissingSetting;

impl fmt::Display for MissingSetting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no epsilon setting was supplied")
    }
}

impl std::error::Error for MissingSetting {}

impl Tolerance {
    /// fails with [`PolynomialError::InvalidArgument`] unless `0 < epsilon < 1`
    pub fn new(epsilon: f64) -> Result<Self> {
        // also rejects NaN
        if epsilon > 0.0 && epsilon < 1.0 {
            Ok(Tolerance(epsilon))
        } else {
            Err(PolynomialError::InvalidArgument(
                OutOfRange(epsilon).to_string(),
            ))
        }
    }
    pub fn get(self) -> f64 {
        self.0
    }
    /// Builds the tolerance from an application setting.
    ///
    /// Absent, malformed and out-of-range values all fail with
    /// [`PolynomialError::ConfigurationError`].
    pub fn from_setting(value: Option<&str>) -> Result<Self> {
        let value = value.ok_or_else(|| {
            PolynomialError::configuration("can't get epsilon value", MissingSetting)
        })?;
        let epsilon: f64 = value
            .trim()
            .parse()
            .map_err(|err| PolynomialError::configuration("epsilon has invalid format", err))?;
        if !(epsilon > 0.0 && epsilon < 1.0) {
            return Err(PolynomialError::configuration(
                "epsilon has an invalid value",
                OutOfRange(epsilon),
            ));
        }
        debug!(epsilon, "configured polynomial tolerance");
        Ok(Tolerance(epsilon))
    }
    /// Looks up `key` in an application-supplied key/value set, then behaves
    /// like [`Tolerance::from_setting`].
    pub fn from_settings<I, K, V>(settings: I, key: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let value = settings
            .into_iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v);
        let value: Option<&str> = value.as_ref().map(|v| v.as_ref());
        Tolerance::from_setting(value)
    }
}

impl FromStr for Tolerance {
    type Err = PolynomialError;
    fn from_str(s: &str) -> Result<Self> {
        Tolerance::from_setting(Some(s))
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
