//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (taps, swipes, picker selections)
/// - System events (a new preference snapshot)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
