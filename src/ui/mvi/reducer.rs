//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: (State, Intent) -> State.
///
/// Side effects such as persisting a preference are computed outside the
/// reducer and dispatched by the screen that owns the state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents over `state`.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
