//! Model-View-Intent (MVI) primitives for unidirectional data flow.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of application state
//! - **Intent**: user actions or system events
//! - **Reducer**: pure function that transforms state based on intents

/// Marker trait for state objects.
///
/// States should be self-contained (all data needed to render the view)
/// and comparable, so observers can detect changes.
pub trait StoreState: Clone + PartialEq + Default + 'static {}

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses) or system events
/// (screen entry, timers). Intents are processed by reducers to
/// produce new states.
pub trait Intent: 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
