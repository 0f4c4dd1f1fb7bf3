//! # Lease Deposit Model
//!
//! Defines the validated principal of the calculation: the jeonse (전세)
//! lease deposit, a lump sum expressed in whole won.
//!
//! A deposit only exists as a parsed value, so any `Deposit` the rest of
//! the workspace sees is already strictly positive.

use std::str::FromStr;

use crate::errors::InputError;

/// A jeonse lease deposit in whole won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deposit(u64);

impl Deposit {
    /// The deposit amount in won.
    pub fn won(&self) -> u64 {
        self.0
    }
}

impl FromStr for Deposit {
    type Err = InputError;

    /// Parses a string into a `Deposit`.
    ///
    /// Accepted: a decimal integer with optional surrounding whitespace,
    /// strictly greater than zero (e.g. `"100000000"`, `" 42 "`).
    /// Everything else, including zero and negative amounts, maps to
    /// [`InputError::InvalidLeasePrice`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: i64 = s
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidLeasePrice)?;

        if amount <= 0 {
            return Err(InputError::InvalidLeasePrice);
        }

        Ok(Self(amount as u64))
    }
}
