use tracing::info;

use crate::errors::LottoError;
use crate::frequency::FrequencyTable;
use crate::numbers::PlayerNumbers;
use crate::prize::{evaluate, Outcome, WinningNumbers};

/// State of one game session: the current entry and everything chosen so far.
#[derive(Debug, Clone, Default)]
pub struct Session {
    numbers: Option<PlayerNumbers>,
    frequency: FrequencyTable,
    winning: WinningNumbers,
    entries: u32,
}

impl Session {
    pub fn new(winning: WinningNumbers) -> Self {
        Self {
            winning,
            ..Self::default()
        }
    }

    /// Replaces the current entry and counts its numbers.
    pub fn enter(&mut self, numbers: PlayerNumbers) {
        self.frequency.record(&numbers);
        self.numbers = Some(numbers);
        self.entries += 1;
        info!(entry = self.entries, %numbers, "numbers entered");
    }

    pub fn has_numbers(&self) -> bool {
        self.numbers.is_some()
    }

    pub fn entries(&self) -> u32 {
        self.entries
    }

    pub fn winning(&self) -> &WinningNumbers {
        &self.winning
    }

    pub fn numbers(&self) -> Result<&PlayerNumbers, LottoError> {
        self.numbers.as_ref().ok_or(LottoError::NotEntered)
    }

    pub fn sort_numbers(&mut self) -> Result<&PlayerNumbers, LottoError> {
        let numbers = self.numbers.as_mut().ok_or(LottoError::NotEntered)?;
        numbers.sort();
        Ok(numbers)
    }

    pub fn check(&self) -> Result<Outcome, LottoError> {
        Ok(evaluate(self.numbers()?, &self.winning))
    }

    pub fn frequency(&self) -> Result<&FrequencyTable, LottoError> {
        self.numbers()?;
        Ok(&self.frequency)
    }
}
