use crate::numbers::{PlayerNumbers, LOTTO_MAX, LOTTO_MIN};

const SLOTS: usize = (LOTTO_MAX - LOTTO_MIN + 1) as usize;

/// How often each value has been entered during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; SLOTS],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self { counts: [0; SLOTS] }
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, numbers: &PlayerNumbers) {
        for &n in numbers.values() {
            let slot = &mut self.counts[(n - LOTTO_MIN) as usize];
            *slot = slot.saturating_add(1);
        }
    }

    pub fn count(&self, value: i32) -> u32 {
        if (LOTTO_MIN..=LOTTO_MAX).contains(&value) {
            self.counts[(value - LOTTO_MIN) as usize]
        } else {
            0
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(value, count)` for every value chosen at least once, ascending by value.
    pub fn report(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        (LOTTO_MIN..=LOTTO_MAX)
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }
}
