use colored::*;
use jeonse_common::errors::InputError;
use jeonse_core::interest::MonthlyInterest;

/// Prints the success sentence, with the amount fixed at two decimal
/// places by [`MonthlyInterest`]'s `Display` impl.
///
/// `colored` drops the styling when stdout is not a terminal.
pub fn result(payment: &MonthlyInterest) {
    let amount: ColoredString = payment.to_string().green().bold();
    println!("매달 지불해야 할 이자는 {amount} 원입니다.");
}

/// Prints the localized rejection message carried by the failed input.
pub fn failure(err: &InputError) {
    println!("{}", err.to_string().red());
}
