//! # Calculation Session
//!
//! The linear flow of one run: read the lease deposit, read the annual
//! rate, compute, print. There is no retry loop; the first invalid input
//! ends the run after its localized message is printed.

use jeonse_common::finance::deposit::Deposit;
use jeonse_common::finance::rate::AnnualRatePercent;
use jeonse_core::interest;
use tracing::{debug, warn};

use crate::terminal::{input, print};

pub const DEPOSIT_PROMPT: &str = "전세금액을 입력하세요: ";
pub const RATE_PROMPT: &str = "연이율을 입력하세요: ";

/// Runs one calculation session to completion.
///
/// A validation failure is a normal outcome of the run, not a process
/// error; only stdin/stdout failures surface as `Err`.
pub fn run() -> anyhow::Result<()> {
    let line = input::read_line(DEPOSIT_PROMPT)?;
    let deposit: Deposit = match line.parse() {
        Ok(deposit) => deposit,
        Err(err) => {
            warn!(input = line.trim(), "lease deposit rejected");
            print::failure(&err);
            return Ok(());
        }
    };
    debug!(won = deposit.won(), "lease deposit accepted");

    let line = input::read_line(RATE_PROMPT)?;
    let rate: AnnualRatePercent = match line.parse() {
        Ok(rate) => rate,
        Err(err) => {
            warn!(input = line.trim(), "annual rate rejected");
            print::failure(&err);
            return Ok(());
        }
    };
    debug!(percent = rate.percent(), "annual rate accepted");

    let payment = interest::monthly_interest(deposit, rate);
    debug!(%payment, "monthly interest computed");

    print::result(&payment);
    Ok(())
}
