//! Intents for the dice session.

use crate::dice::DiceSet;
use crate::mvi::Intent;

/// Actions that change the dice state.
#[derive(Debug, Clone, PartialEq)]
pub enum DiceIntent {
    /// A fresh roll was produced; the headline is recomputed alongside.
    Rolled { dice: DiceSet },

    /// Return to the pre-roll welcome state.
    Reset,
}

impl Intent for DiceIntent {}
