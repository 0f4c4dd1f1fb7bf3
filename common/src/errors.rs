use thiserror::Error;

/// Validation failure for one of the two user inputs.
///
/// The `Display` text of each kind is the fixed localized message the
/// session prints before ending the run.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The lease deposit was not a strictly positive integer.
    #[error("잘못된 입력입니다. 자연수를 입력하세요.")]
    InvalidLeasePrice,

    /// The annual rate was not a strictly positive real number.
    #[error("잘못된 입력입니다. 양의 실수를 입력하세요.")]
    InvalidInterestRate,
}
