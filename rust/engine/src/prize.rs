use std::fmt;

use serde::Serialize;

use crate::numbers::{PlayerNumbers, SIZE};

/// Main numbers plus bonus number of the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningNumbers {
    main: [i32; SIZE],
    bonus: i32,
}

pub const DEFAULT_WINNING: WinningNumbers = WinningNumbers::new([1, 3, 5, 7, 9, 11], 42);

impl WinningNumbers {
    pub const fn new(main: [i32; SIZE], bonus: i32) -> Self {
        Self { main, bonus }
    }

    pub fn main(&self) -> &[i32; SIZE] {
        &self.main
    }

    pub fn bonus(&self) -> i32 {
        self.bonus
    }
}

impl Default for WinningNumbers {
    fn default() -> Self {
        DEFAULT_WINNING
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrizeTier {
    Jackpot,
    NewCar,
    Holiday,
    WeekendAway,
    NightOut,
    CinemaTicket,
    Nothing,
}

impl PrizeTier {
    pub fn from_result(matches: usize, bonus: bool) -> Self {
        match (matches, bonus) {
            (6, _) => PrizeTier::Jackpot,
            (5, true) => PrizeTier::NewCar,
            (5, false) => PrizeTier::Holiday,
            (4, true) => PrizeTier::WeekendAway,
            (4, false) => PrizeTier::NightOut,
            (3, true) => PrizeTier::CinemaTicket,
            _ => PrizeTier::Nothing,
        }
    }

    pub fn is_win(&self) -> bool {
        *self != PrizeTier::Nothing
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PrizeTier::Jackpot => "the Jackpot!!!!",
            PrizeTier::NewCar => "a new car!",
            PrizeTier::Holiday => "a holiday!",
            PrizeTier::WeekendAway => "a weekend away!",
            PrizeTier::NightOut => "a night out!",
            PrizeTier::CinemaTicket => "a cinema ticket!",
            PrizeTier::Nothing => "nothing!",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub matches: usize,
    pub bonus: bool,
    pub tier: PrizeTier,
}

impl Outcome {
    /// `Match N` line shown above the prize, if the result earns one.
    pub fn headline(&self) -> Option<String> {
        match self.tier {
            PrizeTier::Nothing => None,
            PrizeTier::Jackpot => Some(format!("Match {}", self.matches)),
            _ if self.bonus => Some(format!("Match {} + Bonus", self.matches)),
            _ => Some(format!("Match {}", self.matches)),
        }
    }

    pub fn narration(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.headline().into_iter().collect();
        lines.push(format!("You've won {}", self.tier));
        lines
    }
}

/// Scores `player` against the draw.
///
/// Each player number is compared with the main numbers in order until one
/// matches. Every comparison that does not match also checks the player number
/// against the bonus, so the bonus flag is independent of the match count.
pub fn evaluate(player: &PlayerNumbers, winning: &WinningNumbers) -> Outcome {
    let mut matches = 0;
    let mut bonus = false;

    for &p in player.values() {
        for &w in winning.main() {
            if p == w {
                matches += 1;
                break;
            }
            if p == winning.bonus() {
                bonus = true;
            }
        }
    }

    let tier = PrizeTier::from_result(matches, bonus);
    tracing::debug!(matches, bonus, ?tier, "evaluated numbers");
    Outcome { matches, bonus, tier }
}
