use std::fmt;

use crate::error::DrillResult;
use crate::hand::Hand;
use crate::ranges::RangeSource;

/// The prescribed preflop action for an unopened pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Fold,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Open => "open",
            Action::Fold => "fold",
        }
    }

    /// The single-key form used at the trainer prompt.
    pub fn key(&self) -> char {
        match self {
            Action::Open => 'o',
            Action::Fold => 'f',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Encode `hand` and test membership in `position`'s open range. A
/// position absent from the table surfaces as `PositionNotFound` and
/// resource errors propagate unchanged; neither is ever reported as fold.
pub fn decide(source: &RangeSource, position: &str, hand: &Hand) -> DrillResult<Action> {
    let notation = hand.notation()?;
    let range = source.ranges_for(position)?;
    if range.contains(&notation) {
        Ok(Action::Open)
    } else {
        Ok(Action::Fold)
    }
}
