//! # Annual Rate Model
//!
//! The second input of the calculation: a yearly interest rate given as a
//! percentage, where `5.0` means 5% per year.

use std::str::FromStr;

use crate::errors::InputError;

/// An annual interest rate in percent, finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnualRatePercent(f64);

impl AnnualRatePercent {
    /// The yearly percentage value.
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// The equivalent monthly fraction: `percent / 12 / 100`.
    pub fn monthly_fraction(&self) -> f64 {
        self.0 / 12.0 / 100.0
    }
}

impl FromStr for AnnualRatePercent {
    type Err = InputError;

    /// Parses a string into an `AnnualRatePercent`.
    ///
    /// Accepted: any real number with optional surrounding whitespace,
    /// finite and strictly greater than zero (e.g. `"5.0"`, `"3.5"`,
    /// `"7"`). `NaN` and infinities are rejected like any other invalid
    /// rate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent: f64 = s
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidInterestRate)?;

        if !percent.is_finite() || percent <= 0.0 {
            return Err(InputError::InvalidInterestRate);
        }

        Ok(Self(percent))
    }
}
