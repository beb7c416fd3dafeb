//! Reducer for the dice session.

use crate::dice::evaluate_dice;
use crate::mvi::Reducer;
use crate::state::intent::DiceIntent;
use crate::state::state::DiceState;

/// Pure state transitions for the dice session.
///
/// The headline is derived here, in the same transition that installs
/// the dice, so no observer can see the pair disagree.
pub struct DiceReducer;

impl Reducer for DiceReducer {
    type State = DiceState;
    type Intent = DiceIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DiceIntent::Rolled { dice } => DiceState {
                dice,
                headline: evaluate_dice(&dice),
            },
            DiceIntent::Reset => DiceState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceSet;

    #[test]
    fn rolled_replaces_dice_and_headline_together() {
        let dice = DiceSet::new([2, 2, 5, 1, 3]);
        let new = DiceReducer::reduce(DiceState::default(), DiceIntent::Rolled { dice });
        assert_eq!(new.dice, dice);
        assert_eq!(new.headline, evaluate_dice(&dice));
    }

    #[test]
    fn reset_restores_welcome_state() {
        let dice = DiceSet::new([1, 2, 3, 4, 5]);
        let rolled = DiceReducer::reduce(DiceState::default(), DiceIntent::Rolled { dice });
        let reset = DiceReducer::reduce(rolled, DiceIntent::Reset);
        assert_eq!(reset, DiceState::default());
    }
}
