use std::fmt;

use serde::Serialize;

use crate::errors::LottoError;
use crate::sort::pivot_sort;
use crate::validation::ensure_valid;

/// Count of numbers in one entry.
pub const SIZE: usize = 6;
pub const LOTTO_MIN: i32 = 1;
pub const LOTTO_MAX: i32 = 42;

/// Six distinct numbers in `LOTTO_MIN..=LOTTO_MAX`, in entry order until sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayerNumbers([i32; SIZE]);

impl PlayerNumbers {
    pub fn new(values: [i32; SIZE]) -> Result<Self, LottoError> {
        ensure_valid(&values)?;
        Ok(Self(values))
    }

    pub fn values(&self) -> &[i32; SIZE] {
        &self.0
    }

    pub fn contains(&self, value: i32) -> bool {
        self.0.contains(&value)
    }

    /// Sorts ascending in place.
    pub fn sort(&mut self) {
        pivot_sort(&mut self.0, SIZE, 0);
    }

    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
}

impl TryFrom<&[i32]> for PlayerNumbers {
    type Error = LottoError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        let values: [i32; SIZE] = values.try_into().map_err(|_| LottoError::WrongCount {
            expected: SIZE,
            found: values.len(),
        })?;
        Self::new(values)
    }
}

impl fmt::Display for PlayerNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
