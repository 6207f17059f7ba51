use crate::errors::LottoError;
use crate::numbers::{LOTTO_MAX, LOTTO_MIN};

/// Returns true when every value is in range and no value repeats.
pub fn validate_numbers(values: &[i32]) -> bool {
    ensure_valid(values).is_ok()
}

/// Same scan as [`validate_numbers`], reporting the first violation.
///
/// Each value is range-checked before it is compared against the values after
/// it, so `[50, 50]` reports `OutOfRange` rather than `Duplicate`.
pub fn ensure_valid(values: &[i32]) -> Result<(), LottoError> {
    for (i, &value) in values.iter().enumerate() {
        if !(LOTTO_MIN..=LOTTO_MAX).contains(&value) {
            return Err(LottoError::OutOfRange { value });
        }
        if values[i + 1..].contains(&value) {
            return Err(LottoError::Duplicate { value });
        }
    }
    Ok(())
}
