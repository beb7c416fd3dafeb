//! Application state: the dice store and its reducer.
//!
//! The store owns one [`DiceState`] for the whole session. Screens are
//! handed a reference and may come and go; the state they render
//! survives their teardown.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::DiceIntent;
pub use reducer::DiceReducer;
pub use state::{DiceState, WELCOME_HEADLINE};
pub use store::{DiceStore, Observer};
