//! The dice store: owned state with explicit subscribe/notify.

use crate::dice::{roll_dice, DiceSet};
use crate::mvi::Reducer;
use crate::state::intent::DiceIntent;
use crate::state::reducer::DiceReducer;
use crate::state::state::DiceState;

/// Synchronous state observer. Invoked on the calling thread,
/// immediately after each transition.
pub type Observer = Box<dyn FnMut(&DiceState)>;

/// Session-scoped holder of the dice state.
///
/// Constructed once per session and handed by reference to each
/// transient screen, so rolled dice survive screen teardown. All
/// transitions go through [`DiceReducer`]; observers are notified
/// exactly once per transition with the fully-updated state.
pub struct DiceStore {
    state: DiceState,
    observers: Vec<Observer>,
    rolls: u64,
    session_active: bool,
}

impl DiceStore {
    pub fn new() -> Self {
        tracing::info!("dice store created");
        Self {
            state: DiceState::default(),
            observers: Vec::new(),
            rolls: 0,
            session_active: false,
        }
    }

    pub fn state(&self) -> &DiceState {
        &self.state
    }

    /// Number of rolls performed this session.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Register a synchronous observer for state changes.
    pub fn subscribe(&mut self, observer: impl FnMut(&DiceState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Roll the dice and replace the state atomically.
    pub fn roll(&mut self) {
        let dice = roll_dice(&mut rand::rng());
        self.rolls += 1;
        self.dispatch(DiceIntent::Rolled { dice });
    }

    /// Install a specific roll result through the same reducer as
    /// [`DiceStore::roll`].
    pub fn apply_roll(&mut self, dice: DiceSet) {
        self.rolls += 1;
        self.dispatch(DiceIntent::Rolled { dice });
    }

    /// True once a screen has attached to this store before.
    ///
    /// Lets the presentation layer tell a fresh launch apart from a
    /// re-entry after transient teardown.
    pub fn was_session_active_before(&self) -> bool {
        self.session_active
    }

    /// Mark the session active without rolling.
    pub fn mark_session_active(&mut self) {
        self.session_active = true;
    }

    /// Entry point for screen attachment.
    ///
    /// A surviving prior session keeps its state untouched; a fresh
    /// session performs exactly one roll.
    pub fn restore_or_initialize(&mut self, had_prior_session: bool) {
        self.session_active = true;
        if had_prior_session {
            tracing::debug!("prior session state restored, skipping entry roll");
            return;
        }
        self.roll();
    }

    /// Current headline formatted for the share boundary.
    ///
    /// The store has no knowledge of how sharing is performed.
    pub fn share_text(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.state.headline)
    }

    fn dispatch(&mut self, intent: DiceIntent) {
        let current = std::mem::take(&mut self.state);
        self.state = DiceReducer::reduce(current, intent);
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

impl Default for DiceStore {
    fn default() -> Self {
        Self::new()
    }
}
