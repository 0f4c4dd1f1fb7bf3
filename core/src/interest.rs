//! # Monthly Interest Computation
//!
//! The single arithmetic step of the tool: turning a validated deposit and
//! annual rate into the rounded monthly interest payment.

use std::fmt;

use jeonse_common::finance::deposit::Deposit;
use jeonse_common::finance::rate::AnnualRatePercent;

/// A computed monthly interest payment, rounded to the nearest whole won.
///
/// Renders with exactly two decimal places (`416667.00`) so the formatted
/// sentence always carries a fractional part, even though the rounded
/// value is integral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyInterest(f64);

impl MonthlyInterest {
    /// The rounded payment in won.
    pub fn won(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for MonthlyInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Computes the monthly interest owed on `deposit` at `rate`.
///
/// `deposit * rate / 12 / 100`, rounded half away from zero to the
/// nearest whole won.
pub fn monthly_interest(deposit: Deposit, rate: AnnualRatePercent) -> MonthlyInterest {
    let payment: f64 = deposit.won() as f64 * rate.monthly_fraction();
    MonthlyInterest(payment.round())
}
