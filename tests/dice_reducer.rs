//! Reducer transition tests.

use rollfive::dice::{evaluate_dice, DiceSet};
use rollfive::mvi::Reducer;
use rollfive::state::{DiceIntent, DiceReducer, DiceState, WELCOME_HEADLINE};

#[test]
fn default_rolled_installs_pair() {
    let dice = DiceSet::new([3, 5, 2, 6, 1]);
    let new = DiceReducer::reduce(DiceState::default(), DiceIntent::Rolled { dice });
    assert_eq!(new.dice, dice);
    assert_eq!(new.headline, evaluate_dice(&dice));
}

#[test]
fn rolled_twice_keeps_only_latest_pair() {
    let first = DiceSet::new([1, 1, 1, 1, 1]);
    let second = DiceSet::new([2, 3, 4, 5, 6]);

    let state = DiceReducer::reduce(DiceState::default(), DiceIntent::Rolled { dice: first });
    let state = DiceReducer::reduce(state, DiceIntent::Rolled { dice: second });

    assert_eq!(state.dice, second);
    assert_eq!(state.headline, evaluate_dice(&second));
}

#[test]
fn rolled_all_matching_uses_special_headline() {
    let dice = DiceSet::new([5, 5, 5, 5, 5]);
    let state = DiceReducer::reduce(DiceState::default(), DiceIntent::Rolled { dice });
    assert_eq!(state.headline, "Five of a kind! All dice show 5.");
}

#[test]
fn reset_after_roll_restores_welcome() {
    let dice = DiceSet::new([2, 4, 6, 1, 3]);
    let state = DiceReducer::reduce(DiceState::default(), DiceIntent::Rolled { dice });
    let state = DiceReducer::reduce(state, DiceIntent::Reset);
    assert_eq!(state.dice.values(), &[6, 6, 6, 6, 6]);
    assert_eq!(state.headline, WELCOME_HEADLINE);
}

#[test]
fn reduce_is_deterministic() {
    let dice = DiceSet::new([6, 2, 6, 2, 6]);
    let a = DiceReducer::reduce(DiceState::default(), DiceIntent::Rolled { dice });
    let b = DiceReducer::reduce(DiceState::default(), DiceIntent::Rolled { dice });
    assert_eq!(a, b);
}
