use thiserror::Error;

use crate::numbers::{LOTTO_MAX, LOTTO_MIN};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LottoError {
    #[error("number {value} is outside the range {}-{}", LOTTO_MIN, LOTTO_MAX)]
    OutOfRange { value: i32 },
    #[error("number {value} was chosen more than once")]
    Duplicate { value: i32 },
    #[error("expected {expected} numbers, got {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("Please enter your numbers first.")]
    NotEntered,
}
