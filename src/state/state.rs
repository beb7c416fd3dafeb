//! State for the dice session.

use crate::dice::DiceSet;
use crate::mvi::StoreState;

/// Headline shown before the first roll.
pub const WELCOME_HEADLINE: &str = "Welcome to RollFive. Roll to get started.";

/// Current dice configuration paired with its headline.
///
/// The two fields are only ever replaced together by the reducer, so
/// the headline always describes the dice it is paired with.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceState {
    pub dice: DiceSet,
    pub headline: String,
}

impl Default for DiceState {
    fn default() -> Self {
        Self {
            dice: DiceSet::default(),
            headline: WELCOME_HEADLINE.to_string(),
        }
    }
}

impl StoreState for DiceState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pairs_all_sixes_with_welcome() {
        let state = DiceState::default();
        assert_eq!(state.dice.values(), &[6, 6, 6, 6, 6]);
        assert_eq!(state.headline, WELCOME_HEADLINE);
    }
}
