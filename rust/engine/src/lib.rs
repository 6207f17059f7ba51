//! lotto-engine: number validation, sorting, frequency and prize evaluation

pub mod errors;
pub mod frequency;
pub mod numbers;
pub mod prize;
pub mod session;
pub mod sort;
pub mod validation;

pub use errors::LottoError;
pub use frequency::FrequencyTable;
pub use numbers::{PlayerNumbers, LOTTO_MAX, LOTTO_MIN, SIZE};
pub use prize::{evaluate, Outcome, PrizeTier, WinningNumbers, DEFAULT_WINNING};
pub use session::Session;
pub use sort::{pivot_sort, pivot_sort_observed};
pub use validation::{ensure_valid, validate_numbers};
