#![cfg(test)]
use jeonse_common::errors::InputError;
use jeonse_common::finance::deposit::Deposit;
use jeonse_common::finance::rate::AnnualRatePercent;
use jeonse_core::interest::{self, MonthlyInterest};

/// Drives the same parse-then-compute path the interactive session uses:
/// two raw input lines in, one formatted payment out.
fn calculate(deposit: &str, rate: &str) -> Result<MonthlyInterest, InputError> {
    let deposit: Deposit = deposit.parse()?;
    let rate: AnnualRatePercent = rate.parse()?;
    Ok(interest::monthly_interest(deposit, rate))
}

#[test]
fn hundred_million_at_five_percent() -> anyhow::Result<()> {
    let payment = calculate("100000000", "5.0")?;
    assert_eq!(payment.to_string(), "416667.00");
    Ok(())
}

#[test]
fn fifty_million_at_three_and_a_half_percent() -> anyhow::Result<()> {
    let payment = calculate("50000000", "3.5")?;
    assert_eq!(payment.to_string(), "145833.00");
    Ok(())
}

#[test]
fn minimal_inputs_round_to_zero() -> anyhow::Result<()> {
    let payment = calculate("1", "0.01")?;
    assert_eq!(payment.to_string(), "0.00");
    Ok(())
}

/// Inputs arrive with the newline still attached; the parsers are expected
/// to absorb it.
#[test]
fn raw_input_lines_are_trimmed() -> anyhow::Result<()> {
    let payment = calculate("100000000\n", " 5.0 \n")?;
    assert_eq!(payment.to_string(), "416667.00");
    Ok(())
}

#[test]
fn invalid_deposit_short_circuits() {
    assert_eq!(calculate("abc", "5.0"), Err(InputError::InvalidLeasePrice));
    assert_eq!(calculate("0", "5.0"), Err(InputError::InvalidLeasePrice));
    assert_eq!(calculate("-5", "5.0"), Err(InputError::InvalidLeasePrice));
}

#[test]
fn invalid_rate_short_circuits() {
    assert_eq!(
        calculate("100000000", "rate"),
        Err(InputError::InvalidInterestRate)
    );
    assert_eq!(
        calculate("100000000", "0"),
        Err(InputError::InvalidInterestRate)
    );
    assert_eq!(
        calculate("100000000", "-1.5"),
        Err(InputError::InvalidInterestRate)
    );
}
